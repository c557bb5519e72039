pub mod memory;
pub mod seaorm;
pub mod service;
pub mod store;

pub use memory::MemoryEntryStore;
pub use seaorm::SeaOrmEntryStore;
pub use service::EntryService;
pub use store::{EntryPatch, EntryStore, NewEntry};
