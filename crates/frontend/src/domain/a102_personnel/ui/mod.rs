pub mod list;

pub use list::PersonnelList;
