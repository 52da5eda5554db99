//! Error types for graph construction and centrality analysis

use thiserror::Error;

/// Failures raised by the analysis core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Input violates a structural invariant (self-loop, edge inside one node class)
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Input contains no nodes at all
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Power iteration did not settle within its iteration budget
    #[error("eigenvector iteration did not converge after {iterations} iterations (last L1 change {residual:e})")]
    Convergence { iterations: usize, residual: f64 },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
