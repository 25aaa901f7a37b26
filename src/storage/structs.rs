pub mod memory_collection;
pub mod memory_storage;
pub mod sqlite_collection;
pub mod sqlite_storage;
