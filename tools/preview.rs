/// Preview — build a transition graph and print sample fortunes.
///
/// Usage: preview [--corpus <file.txt>] [--config <file.ron>] [--seed <n>] [--count <n>]
///
/// Without --corpus the builtin fortune corpus is used. The corpus file
/// format is one sentence per line; blank lines and `#` comments are
/// skipped.

use fortune_chain::core::teller::{FortuneConfig, FortuneTeller};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut corpus_path = None;
    let mut config_path = None;
    let mut seed = None;
    let mut count = 10usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" if i + 1 < args.len() => {
                i += 1;
                corpus_path = Some(args[i].clone());
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an integer");
                    process::exit(1);
                }));
            }
            "--count" if i + 1 < args.len() => {
                i += 1;
                count = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --count must be an integer");
                    process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(ref path) => FortuneConfig::load_from_ron(std::path::Path::new(path))
            .unwrap_or_else(|e| {
                eprintln!("Error loading config '{}': {}", path, e);
                process::exit(1);
            }),
        None => FortuneConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let mut teller = match corpus_path {
        Some(ref path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading corpus '{}': {}", path, e);
                process::exit(1);
            });
            let lines = fortune_chain::corpus::parse_text(&text);
            if lines.is_empty() {
                eprintln!("Error: corpus '{}' has no sentences", path);
                process::exit(1);
            }
            FortuneTeller::from_corpus(&lines, config)
        }
        None => FortuneTeller::new(config),
    };

    let graph = teller.graph();
    println!(
        "Graph built: {} nodes, {} transitions (limits: {} nodes, {} per node)",
        graph.node_count(),
        graph.transition_count(),
        graph.limits().max_nodes,
        graph.limits().max_transitions,
    );
    let starts = graph.nodes().filter(|n| n.can_start).count();
    let ends = graph.nodes().filter(|n| n.can_end).count();
    println!("{} start-eligible, {} end-eligible", starts, ends);
    println!();

    for i in 1..=count {
        match teller.next_fortune() {
            Ok(fortune) => println!("{:>3}. {}", i, fortune),
            Err(e) => {
                eprintln!("Generation failed: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!(
        "Usage: preview [--corpus <file.txt>] [--config <file.ron>] [--seed <n>] [--count <n>]"
    );
}
