mod entry;
pub use entry::Entry;

mod keyed;
pub use keyed::Keyed;

mod timestamp;
pub use timestamp::format_timestamp;

/// Integer identifier that orders entries inside a collection.
pub type EntryKey = i64;
