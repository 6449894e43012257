pub mod parse;
pub mod query;
pub mod record;

pub use record::{Dataset, EntryView, Record, fields};
