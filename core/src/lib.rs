//! tx-graph-core: in-memory transaction graph engine.
//!
//! Addresses become nodes and transactions become directed edges weighted
//! by `1 / amount`. On top of that store the crate answers reachability
//! (BFS), "most likely path" (Dijkstra) and sampled betweenness centrality
//! queries. The graph is built once and only read afterwards.

mod centrality;
mod error;
mod graph;
pub mod ingest;
mod traversal;
pub mod units;

pub use centrality::{
    addresses_by_centrality, addresses_by_centrality_seeded, betweenness_scores, CentralityResult,
    NOT_SAMPLED,
};
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Graph, Insertion, Node, NodeId, TransactionRecord};
pub use ingest::{
    load_path, load_path_with_summary, load_reader, load_str, LoadOptions, LoadSummary,
};
pub use traversal::{
    bfs_order, most_likely_path, most_likely_path_addresses, path_total, shortest_path_tree,
    PathStep, ShortestPathTree,
};
pub use units::satoshi_to_btc;
