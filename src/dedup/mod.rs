// Notification dedup — remembers which bounty links were already announced.
//
// The store is append-only: links are never removed, so a bounty is
// announced at most once for the lifetime of the store. The default backend
// is a flat text file with one link per line; anything that can answer
// `read` and `record` can stand in for it.

pub mod file;
pub mod traits;

pub use file::FileDedupStore;
pub use traits::{DedupStore, MemoryDedupStore};
