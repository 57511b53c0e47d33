use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// Dense node index, assigned on first sight of an address.
pub type NodeId = usize;

/// Dense edge index, assigned on insertion.
pub type EdgeId = usize;

/// An address and the edges that touch it.
#[derive(Debug, Clone)]
pub struct Node {
    pub address: String,
    /// Edges where this node is the sender, in insertion order.
    pub outbound: Vec<EdgeId>,
    /// Edges where this node is the recipient, in insertion order.
    pub inbound: Vec<EdgeId>,
}

/// A directed transfer of value between two addresses.
///
/// Only the weight is stored. The weight is `1 / amount`, so Dijkstra over
/// weights prefers edges carrying larger amounts.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub sender: NodeId,
    pub recipient: NodeId,
    pub weight: f64,
}

impl Edge {
    fn new(sender: NodeId, amount: i64, recipient: NodeId) -> Self {
        Self {
            sender,
            recipient,
            weight: 1.0 / amount as f64,
        }
    }

    /// Recover the original amount from the stored weight.
    pub fn amount(&self) -> i64 {
        (1.0 / self.weight).round() as i64
    }
}

/// One ingested transaction: value moved from `sender` to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub sender: String,
    pub amount: i64,
    pub recipient: String,
}

impl TransactionRecord {
    pub fn new(sender: impl Into<String>, amount: i64, recipient: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            amount,
            recipient: recipient.into(),
        }
    }
}

/// What happened to a transaction handed to [`Graph::add_transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new edge was created.
    Added(EdgeId),
    /// An edge for this ordered pair already existed; the transaction was dropped.
    Duplicate(EdgeId),
}

impl Insertion {
    pub fn edge_id(self) -> EdgeId {
        match self {
            Insertion::Added(id) | Insertion::Duplicate(id) => id,
        }
    }
}

/// In-memory transaction graph: node and edge arenas plus an address index.
///
/// Nodes and edges are referenced by dense indices into `nodes` / `edges`.
/// At most one edge exists per ordered (sender, recipient) pair. The store
/// only grows; once loading finishes every query borrows it immutably.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    address_index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            address_index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            edges: Vec::with_capacity(edge_count),
            address_index: HashMap::with_capacity(node_count),
        }
    }

    /// Build a graph from a batch of records. Any invalid record aborts the
    /// whole batch.
    pub fn from_transactions<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = TransactionRecord>,
    {
        let mut graph = Graph::new();
        for record in records {
            graph.add_transaction(&record.sender, record.amount, &record.recipient)?;
        }
        Ok(graph)
    }

    /// Resolve or create both endpoints, then add the sender → recipient edge.
    ///
    /// A second transaction between the same ordered pair keeps the first
    /// edge untouched and is reported as [`Insertion::Duplicate`].
    pub fn add_transaction(
        &mut self,
        sender: &str,
        amount: i64,
        recipient: &str,
    ) -> Result<Insertion> {
        if amount <= 0 {
            return Err(GraphError::NonPositiveAmount {
                source_name: "<direct>".to_string(),
                line: 0,
                amount,
            });
        }
        let from = self.add_node(sender);
        let to = self.add_node(recipient);
        Ok(self.add_edge(from, amount, to))
    }

    /// Return the index for `address`, creating a node if it is new.
    ///
    /// Loaders go through [`Graph::add_transaction`]. Calling this directly
    /// registers an address with no transactions: it is listed by BFS and
    /// sampled for centrality, its balance is 0, and no path reaches it.
    pub fn add_node(&mut self, address: &str) -> NodeId {
        if let Some(&id) = self.address_index.get(address) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            address: address.to_string(),
            outbound: Vec::new(),
            inbound: Vec::new(),
        });
        self.address_index.insert(address.to_string(), id);
        id
    }

    fn add_edge(&mut self, from: NodeId, amount: i64, to: NodeId) -> Insertion {
        if let Some(existing) = self.find_edge(from, to) {
            log::warn!(
                "multiple edges attempted from {} to {}; ignoring transaction with amount {}",
                self.nodes[from].address,
                self.nodes[to].address,
                amount
            );
            return Insertion::Duplicate(existing);
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(from, amount, to));
        self.nodes[from].outbound.push(id);
        self.nodes[to].inbound.push(id);
        Insertion::Added(id)
    }

    fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.nodes[from]
            .outbound
            .iter()
            .copied()
            .find(|&e| self.edges[e].recipient == to)
    }

    /// Look up a node by address.
    pub fn resolve(&self, address: &str) -> Option<NodeId> {
        self.address_index.get(address).copied()
    }

    pub fn address_exists(&self, address: &str) -> bool {
        self.address_index.contains_key(address)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Address of a node. Panics on an index that did not come from this graph.
    pub fn address(&self, id: NodeId) -> &str {
        &self.nodes[id].address
    }

    /// Outbound edges of a node, in insertion order.
    pub fn outbound(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.nodes
            .get(id)
            .map(|n| n.outbound.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&e| &self.edges[e])
    }

    /// Inbound edges of a node, in insertion order.
    pub fn inbound(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.nodes
            .get(id)
            .map(|n| n.inbound.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&e| &self.edges[e])
    }

    /// Amount sent from `sender` to `recipient`.
    ///
    /// Returns 0 when either address is unknown and when no edge joins them;
    /// the two cases are indistinguishable here.
    pub fn transaction_amount(&self, sender: &str, recipient: &str) -> i64 {
        let (Some(from), Some(to)) = (self.resolve(sender), self.resolve(recipient)) else {
            return 0;
        };
        self.find_edge(from, to)
            .map(|e| self.edges[e].amount())
            .unwrap_or(0)
    }

    /// Inbound amounts minus outbound amounts; 0 for an unknown address.
    ///
    /// Only meaningful when the loaded transactions cover all of the
    /// address's activity. Totals are accumulated in `i128` and the result
    /// saturates at the `i64` bounds.
    pub fn address_balance(&self, address: &str) -> i64 {
        let Some(id) = self.resolve(address) else {
            return 0;
        };
        let received: i128 = self.inbound(id).map(|e| i128::from(e.amount())).sum();
        let sent: i128 = self.outbound(id).map(|e| i128::from(e.amount())).sum();
        saturate(received - sent)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let address_bytes: usize = self.nodes.iter().map(|n| n.address.len()).sum();
        let nodes_mem = self.nodes.len() * size_of::<Node>() + address_bytes;
        let adjacency_mem: usize = self
            .nodes
            .iter()
            .map(|n| (n.outbound.len() + n.inbound.len()) * size_of::<EdgeId>())
            .sum();
        let edges_mem = self.edges.len() * size_of::<Edge>();
        let index_mem = self.address_index.len() * (size_of::<String>() + size_of::<NodeId>())
            + address_bytes;

        nodes_mem + adjacency_mem + edges_mem + index_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a wide total into `i64`.
pub(crate) fn saturate(total: i128) -> i64 {
    total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
