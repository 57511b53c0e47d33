use std::path::Path;

use serde_json::{json, Value};
use tx_graph_core::{Graph, LoadSummary};

/// One-line description of a freshly loaded graph.
pub fn status_json(source: &Path, graph: &Graph, summary: &LoadSummary, load_time_ms: f64) -> Value {
    json!({
        "source": source.display().to_string(),
        "status": "loaded",
        "address_count": graph.node_count(),
        "transaction_count": graph.edge_count(),
        "records_read": summary.records,
        "duplicates_dropped": summary.duplicates,
        "memory_bytes": graph.memory_usage(),
        "load_time_ms": load_time_ms,
    })
}
