//! Affiliation table loading (CSV or Parquet)
//!
//! Layout: the first column holds person identifiers, every other column is
//! one event named by its header. A non-null, non-zero cell means the person
//! attended that event.

use std::path::Path;
use anyhow::{anyhow, Result};
use polars::prelude::*;
use log;
use crate::error::AnalysisError;
use crate::graph::BipartiteGraph;

/// Read an affiliation table from disk and build the bipartite graph
pub fn load_affiliation_table(path: &str) -> Result<BipartiteGraph> {
    log::info!("Reading affiliation table: {}", path);

    let file_path = Path::new(path);
    if !file_path.exists() {
        return Err(anyhow!("File not found: {}", path));
    }

    let df = match file_path.extension().and_then(|ext| ext.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, Default::default())?.collect()?,
        _ => CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(file_path.to_path_buf()))?
            .finish()?,
    };

    log::info!(
        "Loaded table with {} rows and {} columns",
        df.height(),
        df.width()
    );
    log::debug!("Table schema: {:?}", df.schema());

    from_dataframe(&df)
}

/// Build the bipartite graph from an in-memory affiliation table
pub fn from_dataframe(df: &DataFrame) -> Result<BipartiteGraph> {
    let columns = df.get_columns();
    let (person_column, event_columns) = columns
        .split_first()
        .ok_or(AnalysisError::EmptyGraph)?;
    if event_columns.is_empty() || df.height() == 0 {
        return Err(AnalysisError::EmptyGraph.into());
    }

    let person_column = person_column.cast(&DataType::String)?;
    let persons = person_column.str()?;

    let mut bipartite = BipartiteGraph::new();
    let mut row_people: Vec<&str> = Vec::with_capacity(df.height());
    for (row, person) in persons.into_iter().enumerate() {
        let person = person.ok_or_else(|| anyhow!("row {} has no person identifier", row + 1))?;
        bipartite.add_person(person)?;
        row_people.push(person);
    }

    for column in event_columns {
        let event = column.name().to_string();
        bipartite.add_event(&event)?;

        let values = column.cast(&DataType::Float64)?;
        for (row, value) in values.f64()?.into_iter().enumerate() {
            if matches!(value, Some(v) if v != 0.0 && !v.is_nan()) {
                bipartite.add_affiliation(row_people[row], &event)?;
            }
        }
    }

    log::info!(
        "Built affiliation graph: {} people, {} events, {} affiliations",
        bipartite.people().len(),
        bipartite.events().len(),
        bipartite.affiliation_count()
    );

    Ok(bipartite)
}
