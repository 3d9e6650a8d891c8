//! In-memory cache regions

pub mod memory_region;
pub mod registry;

pub use memory_region::MemoryCacheRegion;
pub use registry::MemoryRegionProvider;
