use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use reversi12::selfplay::{generate_games_with, write_jsonl, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reversi12-selfplay", about = "Play complete games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Plies at the start of each game played at random by both sides
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    /// O plays random moves for the whole game
    #[arg(long, default_value_t = false)]
    random_opponent: bool,
    #[arg(long, default_value = "out/games.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        threads: a.threads,
        depth: a.depth,
        seed: a.seed,
        random_plies: a.random_plies,
        random_opponent: a.random_opponent,
    };
    eprintln!("Playing {} games (depth={}, threads={}, random_plies={}, random_opponent={})", a.games, a.depth, a.threads, a.random_plies, a.random_opponent);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games_with(&params, |_| pb.inc(1))?;
    pb.finish();

    let (x, o) = games.iter().fold((0, 0), |(x, o), g| match g.result { 1 => (x + 1, o), -1 => (x, o + 1), _ => (x, o) });
    eprintln!("X wins {}, O wins {}, draws {}", x, o, games.len() - x - o);
    if let Some(dir) = a.out.parent() { std::fs::create_dir_all(dir)?; }
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
