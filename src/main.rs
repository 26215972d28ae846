use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reversi12::io::{read_input, write_move};
use reversi12::{MemoKey, SearchParams, Searcher, TurnRule};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MemoMode {
    /// Key on board content only
    Board,
    /// Key on board, remaining plies and perspective
    DepthAware,
    /// No memo
    Off,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick the next move for a 12x12 Reversi position", long_about = None)]
struct Args {
    /// Input file: side, time budgets, 12 board rows
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file receiving the move token
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Token written when there is no legal move
    #[arg(long, default_value = "pass")]
    pass_token: String,

    /// Fixed ply limit (overrides the time-based depth)
    #[arg(long)]
    depth: Option<u32>,

    #[arg(long, value_enum, default_value_t = MemoMode::Board)]
    memo: MemoMode,

    /// Disable alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Expand the opponent's moves on minimizing plies
    #[arg(long)]
    alternate_turns: bool,

    /// Print the decision as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let t0 = Instant::now();

    let game = read_input(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let params = SearchParams {
        depth: 1,
        use_memo: args.memo != MemoMode::Off,
        memo_key: if args.memo == MemoMode::DepthAware { MemoKey::DepthAware } else { MemoKey::BoardOnly },
        use_pruning: !args.no_pruning,
        turn_rule: if args.alternate_turns { TurnRule::Alternating } else { TurnRule::MoverOnly },
    };
    let mut searcher = Searcher::new(params);
    let res = match args.depth {
        Some(d) => searcher.search_depth(&game.board, game.side, d),
        None => searcher.choose_move(&game.board, game.side, game.own_time),
    };

    write_move(&args.output, res.bestmove, &args.pass_token)
        .with_context(|| format!("writing {}", args.output.display()))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
    }
    println!("{:.6}", t0.elapsed().as_secs_f64());
    Ok(())
}
