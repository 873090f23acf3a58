//! dg - directed-graph toolkit
//!
//! A single-binary CLI for cycle detection and topological sorting of
//! edge-list graphs.

fn main() {
    if let Err(e) = dg::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
