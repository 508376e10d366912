// owlconnect_server/src/services/mod.rs

// Declare service modules
pub mod upload;

pub use upload::{LocalObjectStore, MemoryObjectStore, ObjectStore, StoredObject};
