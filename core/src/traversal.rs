use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::{saturate, Graph, NodeId};

/// A single step in a most-likely path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub node_id: NodeId,
    pub address: String,
    /// Amount on the edge used to reach this node. None for the first step.
    pub amount: Option<i64>,
}

/// Breadth-first ordering of every address in the graph.
///
/// Start nodes are taken in ascending index order; each unvisited one seeds
/// a BFS that follows outbound edges only, in insertion order. Components
/// are concatenated, so every node appears exactly once.
pub fn bfs_order(graph: &Graph) -> Vec<String> {
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::with_capacity(graph.node_count());

    for start in 0..graph.node_count() {
        if !visited[start] {
            bfs_component(graph, start, &mut visited, &mut order);
        }
    }

    order
}

fn bfs_component(graph: &Graph, start: NodeId, visited: &mut [bool], order: &mut Vec<String>) {
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(graph.address(current).to_string());

        for edge in graph.outbound(current) {
            if !visited[edge.recipient] {
                visited[edge.recipient] = true;
                queue.push_back(edge.recipient);
            }
        }
    }
}

/// Result of a single-source Dijkstra run: cumulative weight and predecessor
/// for every node, indexed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub source: NodeId,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// Node from which the minimum-weight path arrives. None for the source
    /// and for unreachable nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Minimum cumulative weight from the source, if reachable.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances
            .get(node)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Whether a path of at least one edge reaches `node`.
    pub fn reaches(&self, node: NodeId) -> bool {
        self.predecessor(node).is_some()
    }

    /// Node ids from the source to `target`, both inclusive. Empty when the
    /// target has no predecessor.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if !self.reaches(target) {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Strict intermediates on the path to `target`, walking back toward the
    /// source. Excludes both the source and the target.
    pub fn intermediates(&self, target: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let source = self.source;
        std::iter::successors(self.predecessor(target), move |&n| self.predecessor(n))
            .take_while(move |&n| n != source)
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first;
/// equal costs pop the smaller node index first.
#[derive(Debug, Clone, Copy)]
struct QueueItem {
    cost: f64,
    node: NodeId,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-source Dijkstra over outbound edges, weight = 1 / amount.
///
/// Relaxation only happens on strict improvement, so among equal-weight
/// paths the predecessor recorded first is kept. Together with the heap
/// ordering this makes the tree deterministic for a given graph.
///
/// An out-of-range `source` yields a tree where nothing is reachable.
pub fn shortest_path_tree(graph: &Graph, source: NodeId) -> ShortestPathTree {
    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];

    if source >= n {
        return ShortestPathTree {
            source,
            distances,
            predecessors,
        };
    }

    let mut heap = BinaryHeap::new();
    distances[source] = 0.0;
    heap.push(QueueItem { cost: 0.0, node: source });

    while let Some(QueueItem { cost, node }) = heap.pop() {
        if cost > distances[node] {
            continue;
        }

        for edge in graph.outbound(node) {
            let next = cost + edge.weight;
            if next < distances[edge.recipient] {
                distances[edge.recipient] = next;
                predecessors[edge.recipient] = Some(node);
                heap.push(QueueItem {
                    cost: next,
                    node: edge.recipient,
                });
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        predecessors,
    }
}

/// Minimum-weight path from `sender` to `recipient`, i.e. the route along
/// which the largest amounts flowed.
///
/// Returns an empty path if either address is unknown, if the recipient is
/// not reachable over outbound edges, or if `sender == recipient`.
pub fn most_likely_path(graph: &Graph, sender: &str, recipient: &str) -> Vec<PathStep> {
    let (Some(start), Some(target)) = (graph.resolve(sender), graph.resolve(recipient)) else {
        return Vec::new();
    };

    let tree = shortest_path_tree(graph, start);
    let ids = tree.path_to(target);

    let mut steps = Vec::with_capacity(ids.len());
    let mut previous: Option<NodeId> = None;
    for id in ids {
        let amount = previous.map(|p| {
            graph
                .outbound(p)
                .find(|e| e.recipient == id)
                .map(|e| e.amount())
                .unwrap_or(0)
        });
        steps.push(PathStep {
            node_id: id,
            address: graph.address(id).to_string(),
            amount,
        });
        previous = Some(id);
    }
    steps
}

/// Addresses along [`most_likely_path`], sender first.
pub fn most_likely_path_addresses(graph: &Graph, sender: &str, recipient: &str) -> Vec<String> {
    most_likely_path(graph, sender, recipient)
        .into_iter()
        .map(|s| s.address)
        .collect()
}

/// Total amount transacted along a path, saturating at `i64::MAX`.
pub fn path_total(path: &[PathStep]) -> i64 {
    saturate(path.iter().filter_map(|s| s.amount).map(i128::from).sum())
}
