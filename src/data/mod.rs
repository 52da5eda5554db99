//! Data loading module

pub mod affiliation;

pub use affiliation::{from_dataframe, load_affiliation_table};
