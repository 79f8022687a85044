//! Общие типы и трейты для всех записей

pub mod coded;
pub mod search;

pub use coded::{Choice, Coded};
pub use search::{filter_list, matches_any, Searchable};
