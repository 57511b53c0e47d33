//! Sampled betweenness centrality over most-likely (minimum-weight) paths.

use crate::graph::{Graph, NodeId};
use crate::traversal::shortest_path_tree;

/// Score given to nodes that were not picked as a sampling source.
pub const NOT_SAMPLED: i64 = -1;

/// Centrality of a single ranked address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralityResult {
    pub node_id: NodeId,
    pub address: String,
    pub score: u64,
}

/// Raw per-node betweenness scores, indexed by [`NodeId`].
///
/// `sample_size` of 0, or any value >= node count, uses every node as a
/// source. Sources are drawn without replacement in an order shuffled by
/// `rng`.
///
/// Every score starts at [`NOT_SAMPLED`]. A drawn source gains 1, and every
/// node lying strictly between the source and a reachable destination on the
/// source's shortest-path tree gains 1. A node that was never drawn and never
/// credited stays at [`NOT_SAMPLED`]; one that was never drawn but credited
/// `k` times ends at `k - 1`. Callers must filter negative scores.
pub fn betweenness_scores(graph: &Graph, sample_size: usize, rng: &mut fastrand::Rng) -> Vec<i64> {
    let n = graph.node_count();
    let sample_size = if sample_size == 0 || sample_size > n {
        n
    } else {
        sample_size
    };

    let mut order: Vec<NodeId> = (0..n).collect();
    rng.shuffle(&mut order);

    log::debug!("betweenness: sampling {} of {} sources", sample_size, n);

    let mut scores = vec![NOT_SAMPLED; n];

    for &source in &order[..sample_size] {
        scores[source] += 1;
        let tree = shortest_path_tree(graph, source);

        let mut credited = 0usize;
        for target in 0..n {
            for node in tree.intermediates(target) {
                scores[node] += 1;
                credited += 1;
            }
        }
        log::trace!(
            "betweenness: source {} credited {} intermediate hops",
            graph.address(source),
            credited
        );
    }
    scores
}

/// Addresses ranked by centrality, highest first.
///
/// Nodes still at [`NOT_SAMPLED`] are left out. Equal scores keep ascending node order.
pub fn addresses_by_centrality(
    graph: &Graph,
    sample_size: usize,
    rng: &mut fastrand::Rng,
) -> Vec<CentralityResult> {
    let scores = betweenness_scores(graph, sample_size, rng);

    let mut results: Vec<CentralityResult> = scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score >= 0)
        .map(|(id, &score)| CentralityResult {
            node_id: id,
            address: graph.address(id).to_string(),
            score: score as u64,
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// [`addresses_by_centrality`] with a fresh call-local generator, seeded
/// when `seed` is given.
pub fn addresses_by_centrality_seeded(
    graph: &Graph,
    sample_size: usize,
    seed: Option<u64>,
) -> Vec<CentralityResult> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    addresses_by_centrality(graph, sample_size, &mut rng)
}
