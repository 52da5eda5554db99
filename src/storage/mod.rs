//! Results persistence module

use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde::Serialize;
use serde_json::{json, to_string_pretty, Value};
use statrs::statistics::Statistics;
use crate::centrality::{CentralityReport, CentralityResult};
use crate::config::Config;
use crate::graph::CompressedGraph;

/// One row of the per-node export
#[derive(Debug, Serialize)]
pub struct NodeRecord<'a> {
    pub id: &'a str,
    pub degree: usize,
    pub degree_centrality: f64,
    pub betweenness: f64,
    pub closeness: f64,
    pub eigenvector: f64,
    pub triangles: u64,
    pub clustering: f64,
}

/// Flatten a report into per-node records in node order
pub fn node_records<'a>(report: &CentralityReport, graph: &'a CompressedGraph) -> Vec<NodeRecord<'a>> {
    (0..graph.node_count())
        .map(|v| {
            let node = v as u32;
            NodeRecord {
                id: graph.node_id(v),
                degree: graph.degree(v),
                degree_centrality: report.degree.get(node).unwrap_or(0.0),
                betweenness: report.betweenness.get(node).unwrap_or(0.0),
                closeness: report.closeness.get(node).unwrap_or(0.0),
                eigenvector: report.eigenvector.get(node).unwrap_or(0.0),
                triangles: report.clustering.triangles(node).unwrap_or(0),
                clustering: report.clustering.coefficient(node).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Save analysis results to the specified directory
pub fn save_results(
    report: &CentralityReport,
    graph: &CompressedGraph,
    config: &Config,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving results for {} nodes to {}", graph.node_count(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(report, graph, config, output_dir)?;
    save_nodes(report, graph, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Build the summary document: graph statistics plus per-measure distributions
pub fn summary(report: &CentralityReport, graph: &CompressedGraph, config: &Config) -> Value {
    let n = graph.node_count();
    let edge_count = graph.edge_count();

    json!({
        "graph_stats": {
            "node_count": n,
            "edge_count": edge_count,
            "component_count": report.component_count,
            "avg_degree": if n == 0 { 0.0 } else { 2.0 * edge_count as f64 / n as f64 },
            "triangle_count": report.clustering.total_triangles(),
            "avg_clustering": report.clustering.average_coefficient(),
        },
        "settings": {
            "normalized_betweenness": config.normalize_betweenness,
            "eigen_max_iterations": config.eigen_max_iterations,
            "eigen_tolerance": config.eigen_tolerance,
        },
        "measures": {
            "degree": measure_summary(&report.degree, graph, config.top_n),
            "betweenness": measure_summary(&report.betweenness, graph, config.top_n),
            "closeness": measure_summary(&report.closeness, graph, config.top_n),
            "eigenvector": measure_summary(&report.eigenvector, graph, config.top_n),
            "clustering": {
                "mean": report.clustering.average_coefficient(),
                "top": top_clustered(report, graph, config.top_n),
            },
        }
    })
}

fn measure_summary(result: &CentralityResult, graph: &CompressedGraph, top_n: usize) -> Value {
    // statrs reports NaN for empty input; keep the JSON numeric
    let (mean, std_dev) = if result.len() < 2 {
        (result.scores().first().copied().unwrap_or(0.0), 0.0)
    } else {
        (result.scores().mean(), result.scores().std_dev())
    };

    let top: Vec<Value> = result
        .top(top_n)
        .into_iter()
        .map(|(node, score)| json!({ "id": graph.node_id(node as usize), "score": score }))
        .collect();

    json!({
        "mean": mean,
        "std_dev": std_dev,
        "top": top,
    })
}

fn top_clustered(report: &CentralityReport, graph: &CompressedGraph, top_n: usize) -> Vec<Value> {
    CentralityResult::from_scores(report.clustering.coefficients().to_vec())
        .top(top_n)
        .into_iter()
        .map(|(node, score)| {
            json!({
                "id": graph.node_id(node as usize),
                "score": score,
                "triangles": report.clustering.triangles(node).unwrap_or(0),
            })
        })
        .collect()
}

/// Save summary information
fn save_summary(
    report: &CentralityReport,
    graph: &CompressedGraph,
    config: &Config,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&summary(report, graph, config))?.as_bytes())?;

    Ok(())
}

/// Save per-node scores
fn save_nodes(report: &CentralityReport, graph: &CompressedGraph, output_dir: &str) -> Result<()> {
    log::info!("Saving per-node scores");

    let path = Path::new(output_dir).join("nodes.json");
    let mut file = File::create(path)?;
    let records = node_records(report, graph);
    file.write_all(to_string_pretty(&json!({ "nodes": records }))?.as_bytes())?;

    Ok(())
}
