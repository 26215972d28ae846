mod common;

use reversi12::io::{read_input, write_move};
use reversi12::{Board, Searcher, Side};
use std::fs;
use std::path::{Path, PathBuf};

fn write_input(dir: &Path, name: &str, side: char, times: &str, board: &Board) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("{side}\n{times}\n{board}")).unwrap();
    path
}

#[test]
fn decision_is_written_as_column_row_token() {
    let dir = Path::new("target/io_test");
    let input = write_input(dir, "opening.txt", 'X', "3.5 120.0", &Board::opening());
    let game = read_input(&input).unwrap();
    assert_eq!(game.side, Side::X);
    assert_eq!(game.own_time, 3.5);

    let res = Searcher::default().choose_move(&game.board, game.side, game.own_time);
    let out = dir.join("opening_out.txt");
    write_move(&out, res.bestmove, "pass").unwrap();
    // Depth 1 on the symmetric opening keeps the first move, (5,7).
    assert_eq!(fs::read_to_string(&out).unwrap(), "g5");
}

#[test]
fn no_move_writes_pass_token() {
    let dir = Path::new("target/io_test");
    let input = write_input(dir, "full.txt", 'O', "200 200", &common::full_board());
    let game = read_input(&input).unwrap();
    let res = Searcher::default().choose_move(&game.board, game.side, game.own_time);
    assert_eq!(res.board, game.board);
    let out = dir.join("full_out.txt");
    write_move(&out, res.bestmove, "PASS").unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "PASS");
}

#[test]
fn missing_file_is_an_error() {
    assert!(read_input("target/io_test/does_not_exist.txt").is_err());
}
