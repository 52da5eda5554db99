//! Graph representation and construction module

pub mod compressed;
pub mod builder;
pub mod bipartite;
pub mod components;

pub use compressed::CompressedGraph;
pub use builder::GraphBuilder;
pub use bipartite::BipartiteGraph;
pub use components::connected_components;
