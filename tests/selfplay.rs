use reversi12::selfplay::{generate_games, generate_games_with, read_jsonl, replay, write_jsonl, SelfPlayParams};
use reversi12::Side;
use std::fs::create_dir_all;
use std::sync::atomic::{AtomicUsize, Ordering};

fn params(seed: u64) -> SelfPlayParams {
    SelfPlayParams { games: 2, max_plies: 24, threads: 1, depth: 1, seed, random_plies: 4, random_opponent: false }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let g1 = generate_games(&params(42)).unwrap();
    let g2 = generate_games(&params(42)).unwrap();
    assert_eq!(g1.len(), 2);
    assert_eq!(g1, g2);
}

#[test]
fn parallel_games_match_serial() {
    let serial = generate_games(&params(9)).unwrap();
    let parallel = generate_games(&SelfPlayParams { threads: 4, ..params(9) }).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn random_opponent_changes_with_seed() {
    let p = SelfPlayParams { games: 1, max_plies: 30, random_opponent: true, ..params(1) };
    let g1 = generate_games(&p).unwrap();
    let g2 = generate_games(&SelfPlayParams { seed: 2, ..p }).unwrap();
    assert_ne!(g1[0].moves, g2[0].moves, "seed did not alter random moves");
}

#[test]
fn records_replay_to_their_final_counts() {
    let p = SelfPlayParams { games: 1, max_plies: 400, random_plies: 400, ..params(5) };
    let g = &generate_games(&p).unwrap()[0];
    let board = replay(g).expect("recorded moves replay legally");
    assert_eq!(board.count(Side::X), g.x_discs);
    assert_eq!(board.count(Side::O), g.o_discs);
    assert_eq!(g.result, (g.x_discs as i64 - g.o_discs as i64).signum() as i8);
    // Game ran to the end: nobody can move.
    assert!(g.moves.len() < 400);
}

#[test]
fn write_and_read_jsonl() {
    let games = generate_games(&params(3)).unwrap();
    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("games.jsonl");
    write_jsonl(&games, &path).unwrap();
    assert_eq!(read_jsonl(&path).unwrap(), games);
}

#[test]
fn games_run_on_requested_thread_count() {
    let finished = AtomicUsize::new(0);
    let pool_size = AtomicUsize::new(0);
    let p = SelfPlayParams { games: 4, threads: 3, ..params(11) };
    let games = generate_games_with(&p, |_| {
        finished.fetch_add(1, Ordering::Relaxed);
        pool_size.store(rayon::current_num_threads(), Ordering::Relaxed);
    }).unwrap();
    assert_eq!(games.len(), 4);
    assert_eq!(finished.load(Ordering::Relaxed), 4);
    assert_eq!(pool_size.load(Ordering::Relaxed), 3);
}
