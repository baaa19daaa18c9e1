pub mod entry;

pub use entry::{Entry, EntryPatch, NewEntry};
