pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemSink;
pub use memory::MemorySink;
