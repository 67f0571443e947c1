//! Path parsing and route descriptor construction.
pub mod builder;
pub mod path;

pub use builder::{build_routes, RouteDescriptor};
pub use path::{join_base_path, parse_path, ParsedPath, Segment};
