use std::thread;

use chess_rules::board::{Move, Position, Rules, Square};
use chess_rules::SharedPosition;

#[test]
fn only_one_thread_wins_the_same_move() {
    let shared = SharedPosition::default();
    let e2e4 = Move::new(Square(6, 4), Square(4, 4));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.try_move(e2e4).is_ok())
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .filter(|&ok| ok)
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(
        shared.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn alternating_threads_play_a_game() {
    let shared = SharedPosition::default();
    let white = ["e2e4", "g1f3", "f1c4"];
    let black = ["e7e5", "b8c6", "g8f6"];

    for (w, b) in white.iter().zip(black.iter()) {
        for text in [w, b] {
            let mv: Move = text.parse().unwrap();
            let handle = {
                let shared = shared.clone();
                thread::spawn(move || shared.try_move(mv))
            };
            assert!(handle.join().unwrap().is_ok(), "{text} refused");
        }
    }

    assert_eq!(
        shared.to_fen(),
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"
    );
}

#[test]
fn strict_rules_apply_to_every_caller() {
    let position = Position::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let strict = SharedPosition::with_rules(position.clone(), Rules::strict());
    let weak = SharedPosition::new(position);
    let castle = Move::new(Square(7, 4), Square(7, 6));

    assert!(!strict.legal_move(castle));
    assert!(weak.legal_move(castle));
    assert_eq!(strict.to_fen(), weak.to_fen());
}
