//! Tests for the opponent's move selection.

use hint_tictactoe::{
    Board, Cell, MoveSelector, Position, RulesError, Strategy, best_move, evaluate, random_move,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

fn searching_selector() -> MoveSelector<StdRng> {
    MoveSelector::seeded(11).with_random_move_probability(0.0)
}

#[test]
fn test_last_empty_square_is_played() {
    // X O X / X O O / O X .
    let b = board("XOXXOOOX.");
    assert_eq!(best_move(&b), Ok(Position::BottomRight));
    assert_eq!(searching_selector().select_move(&b), Ok(Position::BottomRight));

    // X O X / O . X / O X O
    let b = board("XOXO.XOXO");
    assert_eq!(best_move(&b), Ok(Position::Center));
}

#[test]
fn test_completes_own_line() {
    // O O . / X X . / X . .
    // Both sides threaten, but the computer is to move.
    let b = board("OO.XX.X..");
    assert_eq!(best_move(&b), Ok(Position::TopRight));

    // X . O / . O X / . X .
    // No human threat; only the anti-diagonal wins.
    let b = board("X.O.OX.X.");
    assert_eq!(best_move(&b), Ok(Position::BottomLeft));
    assert_eq!(searching_selector().select_move(&b), Ok(Position::BottomLeft));
}

#[test]
fn test_blocks_human_line() {
    // X . . / X O . / . . .
    let b = board("X..XO....");
    assert_eq!(best_move(&b), Ok(Position::BottomLeft));

    // O . X / . X . / . . .
    let b = board("O.X.X....");
    assert_eq!(best_move(&b), Ok(Position::BottomLeft));

    // X X . / . O . / . . .
    let b = board("XX..O....");
    assert_eq!(searching_selector().select_move(&b), Ok(Position::TopRight));
}

#[test]
fn test_selector_never_mutates_board() {
    let boards = ["X........", "XX..O....", "XOXXOOOX.", ".........", "X...O...X"];
    for s in boards {
        let b = board(s);
        let before = b;

        let _ = evaluate(&b, true);
        let _ = evaluate(&b, false);
        let _ = best_move(&b);
        let mut selector = MoveSelector::seeded(3);
        for _ in 0..10 {
            let _ = selector.select_move(&b);
        }

        assert_eq!(b, before, "board {s} changed");
    }
}

#[test]
fn test_selected_square_is_always_empty() {
    let b = board("X.O.X.O..");
    let mut selector = MoveSelector::seeded(99);
    for _ in 0..200 {
        let pos = selector.select_move(&b).expect("legal move exists");
        assert!(b.is_empty(pos), "{pos} is occupied");
    }
}

#[test]
fn test_full_board_is_rejected() {
    let b = board("XOXOXXOXO");
    let mut selector = MoveSelector::seeded(5).with_random_move_probability(1.0);
    assert_eq!(selector.select_move(&b), Err(RulesError::InvalidState));
    assert_eq!(best_move(&b), Err(RulesError::InvalidState));
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(random_move(&mut rng, &b), Err(RulesError::InvalidState));
}

#[test]
fn test_random_fallback_frequency() {
    let b = board("X...O....");
    let mut selector = MoveSelector::seeded(2024);
    let trials = 2000;

    let random = (0..trials)
        .filter(|_| *selector.choose(&b).unwrap().strategy() == Strategy::Random)
        .count();

    let frequency = random as f64 / trials as f64;
    assert!(
        (frequency - 0.3).abs() < 0.05,
        "random fallback frequency {frequency} too far from 0.3"
    );
}

#[test]
fn test_random_move_is_uniform_over_empty_squares() {
    // X O . / . O . / X . .
    let b = board("XO..O.X..");
    let empty: Vec<Position> = b.empty_positions().collect();
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts: HashMap<Position, usize> = HashMap::new();
    let trials = 4000;
    for _ in 0..trials {
        *counts.entry(random_move(&mut rng, &b).unwrap()).or_default() += 1;
    }

    assert_eq!(counts.len(), empty.len());
    let expected = trials as f64 / empty.len() as f64;
    for pos in empty {
        let seen = counts[&pos] as f64;
        assert!(
            (seen - expected).abs() < expected * 0.15,
            "{pos} picked {seen} times, expected about {expected}"
        );
        assert_eq!(b.get(pos), Cell::Empty);
    }
}

#[test]
fn test_seeded_selectors_agree() {
    let b = board("X...O....");
    let mut a = MoveSelector::seeded(8);
    let mut c = MoveSelector::seeded(8);
    for _ in 0..50 {
        assert_eq!(a.choose(&b), c.choose(&b));
    }
}
