pub mod choice;
pub mod dialog;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;

pub use choice::{all_choice, choice_options, choice_options_of, SubTabs};
pub use dialog::{DialogFooter, DialogHeader};
pub use page_header::PageHeader;
pub use stat_card::{StatCard, StatTone};
pub use status_badge::{StatusBadge, Tone};
