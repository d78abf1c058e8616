pub mod base;
pub mod file;
pub mod memory;

pub use base::KeyValueStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
