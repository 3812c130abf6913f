//! Tests for the exhaustive minimax search and win detection.

use hint_tictactoe::{Board, Cell, LINES, Outcome, RulesError, evaluate, is_winning_board};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_is_a_theoretical_draw() {
    assert_eq!(evaluate(&Board::new(), true), Outcome::Draw);
    assert_eq!(evaluate(&Board::new(), true).score(), 0);
}

#[test]
fn test_corner_opening_answered_by_edge_loses() {
    // X O . / . . . / . . .
    // O answered a corner opening with an adjacent edge.
    let b = board("XO.......");
    assert_eq!(evaluate(&b, false), Outcome::HumanWins);
}

#[test]
fn test_center_reply_holds_the_draw() {
    let b = board("X...O....");
    assert_eq!(evaluate(&b, false), Outcome::Draw);
}

#[test]
fn test_computer_threat_with_computer_to_move() {
    // O O . / X X . / X . .
    let b = board("OO.XX.X..");
    assert_eq!(evaluate(&b, true), Outcome::ComputerWins);
    assert_eq!(evaluate(&b, true).score(), 1);
}

#[test]
fn test_double_human_threat_is_lost() {
    // X . X / . O . / X . .
    // O to move can block only one of the two threats.
    let b = board("X.X.O.X..");
    assert_eq!(evaluate(&b, true), Outcome::HumanWins);
    assert_eq!(evaluate(&b, true).score(), -1);
}

#[test]
fn test_evaluate_leaves_board_untouched() {
    for s in [".........", "X........", "XO.......", "X.X.O.X..", "XOXXOOOX."] {
        let b = board(s);
        let copy = b;
        for maximizing in [true, false] {
            let _ = evaluate(&b, maximizing);
            assert_eq!(b, copy);
        }
    }
}

#[test]
fn test_every_canonical_line_is_detected() {
    for line in LINES {
        let mut b = Board::new();
        for pos in line {
            b.set(pos, Cell::Computer);
        }
        assert_eq!(is_winning_board(&b, Cell::Computer), Ok(true));
        assert_eq!(is_winning_board(&b, Cell::Human), Ok(false));
        assert_eq!(evaluate(&b, false), Outcome::ComputerWins);
    }
}

#[test]
fn test_no_line_on_drawn_board() {
    let b = board("XOXOXXOXO");
    assert_eq!(is_winning_board(&b, Cell::Human), Ok(false));
    assert_eq!(is_winning_board(&b, Cell::Computer), Ok(false));
}

#[test]
fn test_empty_player_is_rejected() {
    let b = board("XXX......");
    assert_eq!(
        is_winning_board(&b, Cell::Empty),
        Err(RulesError::InvalidPlayer(Cell::Empty))
    );
}
