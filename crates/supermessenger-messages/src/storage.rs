//! Message store backends

pub mod memory;

pub use memory::MemoryMessageStore;
