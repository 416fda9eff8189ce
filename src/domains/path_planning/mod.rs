pub mod diagnostics;
pub mod metrics;
pub mod path;
pub mod ports;
pub mod prm;
pub mod roadmap;
pub mod types;
pub mod workspace;

pub use diagnostics::*;
pub use metrics::*;
pub use path::*;
pub use ports::*;
pub use prm::*;
pub use roadmap::*;
pub use types::*;
pub use workspace::*;
