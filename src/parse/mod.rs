pub mod quick_entry;

pub use quick_entry::*;
