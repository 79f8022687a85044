pub mod components;
pub mod config;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
pub mod theme;
