use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_codes() {
    for stone in [Stone::Empty, Stone::Black, Stone::White] {
        assert_eq!(Stone::from_code(stone.code()), Some(stone));
    }
    assert_eq!(Stone::from_code(3), None);
}

#[test]
fn test_board_size_from_number() {
    assert_eq!(BoardSize::try_from(15), Ok(BoardSize::Fifteen));
    assert_eq!(BoardSize::try_from(17), Ok(BoardSize::Seventeen));
    assert_eq!(BoardSize::try_from(19), Ok(BoardSize::Nineteen));
    assert_eq!(BoardSize::try_from(16), Err(BoardError::InvalidSize(16)));
    assert_eq!(BoardSize::try_from(0), Err(BoardError::InvalidSize(0)));
    assert_eq!(BoardSize::Nineteen.cells(), MAX_CELLS);
}

#[test]
fn test_pos_conversion() {
    let size = BoardSize::Fifteen;
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(size), 7 * 15 + 7);

    let pos2 = Pos::from_index(112, size);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_corner_indices() {
    let size = BoardSize::Nineteen;
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(size), 0);
    // Top-right
    assert_eq!(Pos::new(18, 0).to_index(size), 18);
    // Bottom-left
    assert_eq!(Pos::new(0, 18).to_index(size), 342);
    // Bottom-right
    assert_eq!(Pos::new(18, 18).to_index(size), 360);
}

#[test]
fn test_contains() {
    let size = BoardSize::Fifteen;
    assert!(size.contains(0, 0));
    assert!(size.contains(14, 14));
    assert!(!size.contains(-1, 0));
    assert!(!size.contains(0, -1));
    assert!(!size.contains(15, 0));
    assert!(!size.contains(0, 15));
}

#[test]
fn test_offset_stops_at_edge() {
    let size = BoardSize::Fifteen;
    assert_eq!(Pos::new(0, 0).offset(1, 1, 3, size), Some(Pos::new(3, 3)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 1, size), None);
    assert_eq!(Pos::new(14, 0).offset(1, -1, 1, size), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(BoardSize::Fifteen);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Empty);

    board.set(Pos::new(3, 4), Stone::Black).unwrap();
    board.set(Pos::new(14, 14), Stone::White).unwrap();
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(14, 14)), Stone::White);
    assert!(board.is_empty(Pos::new(4, 3)));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_board_set_empty_rejected() {
    let mut board = Board::new(BoardSize::Fifteen);
    assert_eq!(
        board.set(Pos::new(0, 0), Stone::Empty),
        Err(BoardError::InvalidStone)
    );
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_board_is_full() {
    let size = BoardSize::Fifteen;
    let mut board = Board::new(size);
    for idx in 0..size.cells() {
        assert!(!board.is_full());
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.set(Pos::from_index(idx, size), stone).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_positions_by_color() {
    let mut board = Board::new(BoardSize::Seventeen);
    board.set(Pos::new(16, 16), Stone::Black).unwrap();
    board.set(Pos::new(0, 1), Stone::Black).unwrap();
    board.set(Pos::new(5, 5), Stone::White).unwrap();

    let black: Vec<_> = board.positions(Stone::Black).collect();
    assert_eq!(black, vec![Pos::new(0, 1), Pos::new(16, 16)]);
    assert_eq!(board.positions(Stone::Empty).count(), 0);
}

#[test]
fn test_display_layout() {
    let mut board = Board::new(BoardSize::Fifteen);
    board.set(Pos::new(0, 0), Stone::Black).unwrap();
    board.set(Pos::new(1, 0), Stone::White).unwrap();

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    assert!(lines[0].starts_with("15 \u{25CF}-\u{25CB}-+-"));
    assert!(lines[14].starts_with(" 1 +-+"));
    assert_eq!(lines[15], "   A B C D E F G H I J K L M N O");
}
