extern crate tictactoe_alphabeta;

use tictactoe_alphabeta::board::Board;
use tictactoe_alphabeta::engine::Engine;
use tictactoe_alphabeta::evaluator::{evaluate, is_terminal, outcome};
use tictactoe_alphabeta::random::StandardRandomGenerator;
use tictactoe_alphabeta::Cell;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=tictactoe_alphabeta=debug shows every candidate and tie set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One engine per side, each with its own random source
    let mut x = Engine::builder()
        .with_random_generator(StandardRandomGenerator)
        .build();
    let mut o = Engine::new();

    let mut board = Board::new();
    let mut mark = Cell::X;
    while !is_terminal(evaluate(&board)) {
        let engine = if mark == Cell::X { &mut x } else { &mut o };
        let pos = match engine.best_move(&mut board, mark) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("engine failed: {err}");
                return;
            }
        };
        if let Err(err) = board.play(pos, mark) {
            eprintln!("illegal move {pos}: {err}");
            return;
        }

        println!("{:?} plays {}:\n{}\n", mark, pos, board);
        mark = mark.opponent();
    }

    println!("Result: {:?}", outcome(&board));
}
