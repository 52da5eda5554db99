//! Core library functions for the affiliation centrality analyzer
//!
//! Projects a people × events affiliation graph onto people and computes
//! degree, betweenness, closeness and eigenvector centrality plus local
//! clustering coefficients over the projection.

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod centrality;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use centrality::{analyze, CentralityReport, CentralityResult, ClusteringResult};
pub use config::Config;
pub use error::{AnalysisError, AnalysisResult};
pub use graph::{BipartiteGraph, CompressedGraph, GraphBuilder};
