//! Closed polygons with derived edges, boundary intersection queries, and quadrilateral inset.
mod edge_insets;
mod error;
mod poly;

pub use edge_insets::*;
pub use error::*;
pub use poly::*;
