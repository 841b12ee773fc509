mod memory;
mod snapshot;

pub use memory::*;
pub use snapshot::*;
