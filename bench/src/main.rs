use std::collections::VecDeque;
use std::time::Instant;

use tx_graph_core::Graph;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);
    let samples: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(50);

    if mode == "help" || mode == "--help" {
        println!("Usage: tx-graph-bench [mode] [node_count] [centrality_samples]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  fanout      Distribution tree: each wallet pays a few children");
        println!("  exchange    Preferential attachment (exchange hot wallets)");
        println!("  random      Uniform random transfers");
        println!("  mixer       Two clusters joined by a thin chain of hops");
        println!("  peel        Peel chains: long hops shedding small change");
        println!();
        println!("Default node_count: 200000, centrality_samples: 50");
        return;
    }

    println!("tx-graph-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph)> = match mode {
        "fanout" => vec![("Fan-out tree", gen_fanout)],
        "exchange" => vec![("Exchange hubs (preferential)", gen_exchange)],
        "random" => vec![("Uniform random", gen_random)],
        "mixer" => vec![("Mixer (cluster-chain-cluster)", gen_mixer)],
        "peel" => vec![("Peel chains", gen_peel)],
        "all" => vec![
            ("Fan-out tree", gen_fanout as fn(u64) -> Graph),
            ("Exchange hubs (preferential)", gen_exchange),
            ("Uniform random", gen_random),
            ("Mixer (cluster-chain-cluster)", gen_mixer),
            ("Peel chains", gen_peel),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count, samples);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, node_count: u64, samples: usize) {
    println!("--- {} ---", name);
    println!("Target: {} addresses", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} addresses, {} transactions, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.node_count() == 0 {
        println!();
        return;
    }

    let t = Instant::now();
    let order = tx_graph_core::bfs_order(&graph);
    println!(
        "BFS order: {} addresses in {:.1}ms",
        order.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    // Most likely path: first address to last address
    let from = graph.address(0).to_string();
    let to = graph.address(graph.node_count() - 1).to_string();
    let t = Instant::now();
    let path = tx_graph_core::most_likely_path(&graph, &from, &to);
    let elapsed = t.elapsed();
    if path.is_empty() {
        println!(
            "Most likely path {} → {}: no path ({:.1}ms)",
            from,
            to,
            elapsed.as_secs_f64() * 1000.0
        );
    } else {
        println!(
            "Most likely path {} → {}: {} hops in {:.1}ms",
            from,
            to,
            path.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    println!();
    println!("{:>8} {:>12} {:>24} {:>10}", "samples", "ranked", "top address", "time");
    println!("{:->8} {:->12} {:->24} {:->10}", "", "", "", "");

    for sample_size in [1, samples / 5, samples] {
        if sample_size == 0 {
            continue;
        }
        let t = Instant::now();
        let ranked = tx_graph_core::addresses_by_centrality_seeded(&graph, sample_size, Some(42));
        let elapsed = t.elapsed();
        let top = ranked
            .first()
            .map(|r| format!("{} ({})", r.address, r.score))
            .unwrap_or_default();
        println!(
            "{:>8} {:>12} {:>24} {:>8.1}ms",
            sample_size,
            ranked.len(),
            top,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

fn addr(i: u64) -> String {
    format!("w{}", i)
}

/// Random amount in satoshi, skewed toward small payments.
fn amount(rng: &mut fastrand::Rng) -> i64 {
    let exponent = rng.u32(3..11);
    rng.i64(1..=10_i64.pow(exponent))
}

fn pay(graph: &mut Graph, rng: &mut fastrand::Rng, from: u64, to: u64) {
    let value = amount(rng);
    // Amounts are always positive, and duplicates are dropped by the store.
    let _ = graph.add_transaction(&addr(from), value, &addr(to));
}

/// Fan-out tree: each wallet pays `branching` children.
///
/// Deep paths with exponential width. Exercises BFS and long path
/// reconstruction.
fn gen_fanout(node_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize, node_count as usize);
    let mut rng = fastrand::Rng::with_seed(42);

    let branching = 3u64;
    graph.add_node(&addr(0));

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                pay(&mut graph, &mut rng, parent, child);
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Preferential attachment via endpoint sampling (O(edges), not O(n²)).
///
/// Wallets that already transact a lot are more likely to be picked again,
/// producing a few exchange-like hubs.
fn gen_exchange(node_count: u64) -> Graph {
    let per_node = 5u64;
    let mut graph = Graph::with_capacity(node_count as usize, (node_count * per_node) as usize);
    let mut rng = fastrand::Rng::with_seed(12345);

    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * per_node * 2) as usize);

    let seed = 5u64.min(node_count);
    for i in 0..seed {
        for j in (i + 1)..seed {
            pay(&mut graph, &mut rng, i, j);
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for wallet in seed..node_count {
        let attach = per_node.min(wallet);
        for _ in 0..attach {
            if endpoints.is_empty() {
                break;
            }
            let target = endpoints[rng.usize(..endpoints.len())];
            if target != wallet {
                // Half the time the hub pays out, half the time it receives.
                if rng.bool() {
                    pay(&mut graph, &mut rng, wallet, target);
                } else {
                    pay(&mut graph, &mut rng, target, wallet);
                }
                endpoints.push(wallet);
                endpoints.push(target);
            }
        }
    }

    graph
}

/// Uniform random transfers, ~5 per wallet. No structure.
fn gen_random(node_count: u64) -> Graph {
    let target_edges = node_count * 5;
    let mut graph = Graph::with_capacity(node_count as usize, target_edges as usize);
    let mut rng = fastrand::Rng::with_seed(54321);

    for i in 0..node_count {
        graph.add_node(&addr(i));
    }

    for _ in 0..target_edges {
        let from = rng.u64(..node_count);
        let to = rng.u64(..node_count);
        if from != to {
            pay(&mut graph, &mut rng, from, to);
        }
    }

    graph
}

/// Two dense clusters joined by a chain of ~10 hops.
///
/// Every path between clusters squeezes through the chain, so its wallets
/// should dominate centrality.
fn gen_mixer(node_count: u64) -> Graph {
    let chain_len = 10u64;
    let cluster = node_count.saturating_sub(chain_len) / 2;
    let mut graph = Graph::with_capacity(node_count as usize, (cluster * 20 + chain_len) as usize);
    let mut rng = fastrand::Rng::with_seed(99999);

    if cluster < 2 {
        return graph;
    }

    for i in 0..cluster {
        for _ in 0..10 {
            let target = rng.u64(..cluster);
            if target != i {
                pay(&mut graph, &mut rng, i, target);
            }
        }
    }

    let chain_start = cluster;
    pay(&mut graph, &mut rng, cluster - 1, chain_start);
    for i in 1..chain_len {
        pay(&mut graph, &mut rng, chain_start + i - 1, chain_start + i);
    }

    let b_start = chain_start + chain_len;
    pay(&mut graph, &mut rng, b_start - 1, b_start);
    for i in 0..cluster {
        for _ in 0..10 {
            let target = rng.u64(..cluster);
            if target != i {
                pay(&mut graph, &mut rng, b_start + i, b_start + target);
            }
        }
    }

    graph
}

/// Peel chains: a wallet forwards most of its value to a fresh address and
/// sheds small change to a recent one.
///
/// Produces long, thin, winding paths like real peel chains.
fn gen_peel(node_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize, (node_count * 2) as usize);
    let mut rng = fastrand::Rng::with_seed(77777);

    graph.add_node(&addr(0));

    // Recent change addresses; VecDeque for O(1) eviction of the oldest.
    let mut recent: VecDeque<u64> = VecDeque::with_capacity(1001);
    let recent_max = 1000usize;

    let mut value: i64 = 2_100_000_000_000;
    for wallet in 1..node_count {
        let previous = wallet - 1;
        let change = rng.i64(1..=(value / 100).max(1));
        value = (value - change).max(1);
        let _ = graph.add_transaction(&addr(previous), value, &addr(wallet));

        if let Some(&sink) = recent.get(rng.usize(..recent.len().max(1))) {
            if sink != previous {
                let _ = graph.add_transaction(&addr(previous), change, &addr(sink));
            }
        }

        recent.push_back(wallet);
        if recent.len() > recent_max {
            recent.pop_front();
        }
    }

    graph
}
