use anyhow::{Context, Result};
use reversi12::board::rules::{apply_move, legal_moves};
use reversi12::io::read_input;
use reversi12::perft::perft;
use reversi12::{Board, Side};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the 12x12 move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Input file to start from (defaults to the opening cross, X to move)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let (base, side) = match &args.input {
        Some(p) => {
            let g = read_input(p).with_context(|| format!("reading {}", p.display()))?;
            (g.board, g.side)
        }
        None => (Board::opening(), Side::X),
    };
    let depth = args.depth;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let root_moves = legal_moves(&base, side);
        // A root pass has nothing to split.
        let nodes = if args.threads <= 1 || depth == 0 || root_moves.is_empty() {
            perft(&base, side, depth)
        } else {
            root_moves.par_iter().map(|&mv| {
                let b = apply_move(&base, Some(mv), side);
                perft(&b, side.opponent(), depth - 1)
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
