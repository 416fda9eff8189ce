pub mod builder;
pub mod compressor;
pub mod config;
pub mod connector;
pub mod planner;
pub mod polygon;
pub mod query;

pub use builder::RoadmapBuilder;
pub use compressor::reduce_waypoints;
pub use config::*;
pub use connector::NeighborConnector;
pub use planner::PrmPlanner;
pub use polygon::PolygonPrm;
pub use query::QuerySession;
