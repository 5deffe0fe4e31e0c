mod graph;
mod host;
mod memory;

pub use graph::*;
pub use host::*;
pub use memory::*;
