use anyhow::Result;
use clap::Parser;

use affiliation_centrality::{centrality, data, storage, Config};

#[derive(Parser, Debug)]
#[clap(
    name = "affiliation-centrality",
    about = "Centrality and clustering analysis of co-affiliation networks"
)]
struct Cli {
    /// Path to the affiliation table (CSV, or Parquet by extension)
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "centrality_results")]
    output_dir: String,

    /// Report betweenness normalized to [0, 1] instead of raw pair counts
    #[clap(long)]
    normalize_betweenness: bool,

    /// Maximum power iterations for eigenvector centrality
    #[clap(long, default_value = "100")]
    max_iterations: usize,

    /// Per-node convergence tolerance for eigenvector centrality
    #[clap(long, default_value = "1e-6")]
    tolerance: f64,

    /// Number of top-ranked people to report per measure
    #[clap(long, default_value = "10")]
    top: usize,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(
        args.normalize_betweenness,
        args.max_iterations,
        args.tolerance,
        args.top,
    );

    log::info!("Starting centrality analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // 1. Load affiliations
    let bipartite = data::load_affiliation_table(&args.input)?;

    // 2. Project onto people
    let graph = bipartite.project()?;
    drop(bipartite);
    log::debug!("Projected graph uses ~{} bytes", graph.memory_usage());

    // 3. Compute every measure
    let report = centrality::analyze(&graph, &config)?;

    for (name, result) in [
        ("degree", &report.degree),
        ("betweenness", &report.betweenness),
        ("closeness", &report.closeness),
        ("eigenvector", &report.eigenvector),
    ] {
        let leaders: Vec<String> = result
            .top(config.top_n)
            .into_iter()
            .map(|(node, score)| format!("{}={:.4}", graph.node_id(node as usize), score))
            .collect();
        log::info!("Top {}: {}", name, leaders.join(", "));
    }

    // 4. Save results
    storage::save_results(&report, &graph, &config, &args.output_dir)?;

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
