//! Tests for tic-tac-toe positions and board notation.

use hint_tictactoe::{Board, Cell, ParseBoardError, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_human_numbers_are_one_based() {
    assert_eq!(Position::from_human_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_human_number(" 9\n"), Some(Position::BottomRight));
    assert_eq!(Position::from_human_number("0"), None);
    assert_eq!(Position::from_human_number("10"), None);
    assert_eq!(Position::from_human_number("five"), None);
    assert_eq!(Position::Center.human_number(), 5);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top-right"), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_number("7"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("corner"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board), Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Cell::Human);
    board.set(Position::Center, Cell::Computer);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_parse_compact_board() {
    let board: Board = "x-O_ .XoX".parse().unwrap();
    assert_eq!(board.get(Position::TopLeft), Cell::Human);
    assert_eq!(board.get(Position::TopCenter), Cell::Empty);
    assert_eq!(board.get(Position::TopRight), Cell::Computer);
    assert_eq!(board.count(Cell::Human), 3);
    assert_eq!(board.count(Cell::Computer), 2);
    assert_eq!(board.count(Cell::Empty), 4);
    assert_eq!(board.to_string(), "X.O...XOX");
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!(
        "XO".parse::<Board>(),
        Err(ParseBoardError::WrongLength(2))
    );
    assert_eq!(
        "XOX?.....".parse::<Board>(),
        Err(ParseBoardError::InvalidCell {
            symbol: '?',
            index: 3
        })
    );
}

#[test]
fn test_display_numbers_empty_squares() {
    let board: Board = "X...O...X".parse().unwrap();
    assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|X");
}

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::Human.opponent(), Some(Cell::Computer));
    assert_eq!(Cell::Computer.opponent(), Some(Cell::Human));
    assert_eq!(Cell::Empty.opponent(), None);
}
