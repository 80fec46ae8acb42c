use thiserror::Error;

/// Reasons a vertex or edge list can not form a [Polygon](super::Polygon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// A polygon needs at least one vertex.
    #[error("polygon must have at least one vertex")]
    EmptyVertexes,
    /// Edge at `index` does not end where the next edge (cyclically) starts.
    #[error("edge {index} does not end where edge {next_index} starts")]
    DisconnectedEdges { index: usize, next_index: usize },
}
