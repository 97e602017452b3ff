//! Failure taxonomy for graph operations.

use core::fmt;
use std::collections::TryReserveError;

/// The error type for graph construction, mutation and traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex named by the operation is not in the graph.
    NotFound,
    /// The vertex table already holds `capacity` vertices.
    CapacityExhausted {
        /// Fixed vertex capacity of the graph.
        capacity: usize,
    },
    /// The directed edge is already present.
    DuplicateEdge,
    /// A traversal work-list rejected an item.
    WorkListFull {
        /// Bound of the rejecting work-list.
        capacity: usize,
    },
    /// The requested capacity cannot be represented by vertex handles and
    /// traversal counters.
    InvalidCapacity {
        /// Capacity asked for at construction.
        requested: usize,
    },
    /// A snapshot does not describe a valid graph.
    InvalidSnapshot {
        /// What was wrong with it.
        reason: &'static str,
    },
    /// Storage for the vertex table could not be reserved.
    Allocation(TryReserveError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("vertex not found"),
            Self::CapacityExhausted { capacity } => {
                write!(f, "vertex table full ({capacity} vertices)")
            }
            Self::DuplicateEdge => f.write_str("edge already present"),
            Self::WorkListFull { capacity } => {
                write!(f, "traversal work-list full ({capacity} entries)")
            }
            Self::InvalidCapacity { requested } => {
                write!(f, "capacity {requested} exceeds the supported maximum")
            }
            Self::InvalidSnapshot { reason } => write!(f, "invalid snapshot: {reason}"),
            Self::Allocation(err) => write!(f, "vertex table allocation failed: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for GraphError {
    fn from(err: TryReserveError) -> Self {
        Self::Allocation(err)
    }
}
