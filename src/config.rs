//! Configuration management for the centrality analyzer

/// Tunables for a full analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rescale betweenness into [0, 1] instead of reporting raw pair counts
    pub normalize_betweenness: bool,

    /// Iteration budget for the eigenvector power iteration
    pub eigen_max_iterations: usize,

    /// Per-node L1 change below which the power iteration is considered settled
    pub eigen_tolerance: f64,

    /// Number of top-ranked nodes reported per measure
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_betweenness: false,
            eigen_max_iterations: 100,
            eigen_tolerance: 1e-6,
            top_n: 10,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        normalize_betweenness: bool,
        eigen_max_iterations: usize,
        eigen_tolerance: f64,
        top_n: usize,
    ) -> Self {
        Self {
            normalize_betweenness,
            eigen_max_iterations,
            eigen_tolerance,
            top_n,
        }
    }
}
