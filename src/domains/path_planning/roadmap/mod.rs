pub mod graph;
pub mod node;
pub mod snapshot;

pub use graph::Roadmap;
pub use node::*;
pub use snapshot::*;
