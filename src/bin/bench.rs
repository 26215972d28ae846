use clap::Parser;
use reversi12::io::read_input;
use reversi12::{Board, MemoKey, SearchParams, Searcher, Side};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "reversi12-bench", version, about = "Time one decision at a fixed depth")]
struct Args {
    /// Input file (defaults to the opening cross, X to move)
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Key the memo on depth and perspective too
    #[arg(long, default_value_t = false)]
    depth_aware: bool,

    #[arg(long, default_value_t = false)]
    no_memo: bool,

    #[arg(long, default_value_t = false)]
    no_pruning: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let (board, side) = match &args.input {
        Some(p) => { let g = read_input(p)?; (g.board, g.side) }
        None => (Board::opening(), Side::X),
    };
    let params = SearchParams {
        depth: args.depth,
        use_memo: !args.no_memo,
        memo_key: if args.depth_aware { MemoKey::DepthAware } else { MemoKey::BoardOnly },
        use_pruning: !args.no_pruning,
        ..SearchParams::default()
    };
    let mut s = Searcher::new(params);
    let t0 = Instant::now();
    let res = s.search_with_params(&board, side, params);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = res.bestmove.map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string());
    println!("bestmove={} score={:?} nodes={} memo={} elapsed={:.3}s nps={:.1}", best, res.score, res.nodes, res.memo_entries, dt.as_secs_f64(), nps);
    Ok(())
}
