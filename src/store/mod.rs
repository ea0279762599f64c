//! Persistence — the dismissal flag (and any future visitor state) behind a
//! pluggable key/value trait.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{StateStore, keys};
