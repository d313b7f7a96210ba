use std::io::Cursor;

use mopsolver::{Cell, Error, Grid, GridBuilder, Position};

#[test]
fn load_rectangular_grid() {
    let grid = mopsolver::load("010\n001\n").unwrap();

    assert_eq!(grid.row_n(), 2);
    assert_eq!(grid.col_n(), 3);
    assert_eq!(grid.cell(&Position::new(0, 1)), Some(Cell::Blocked));
    assert_eq!(grid.cell(&Position::new(1, 1)), Some(Cell::Open));
    assert_eq!(grid.cell(&Position::new(2, 0)), None);
    assert_eq!(grid.start(), Some(Position::new(0, 0)));
    assert_eq!(grid.goal(), Some(Position::new(1, 2)));
}

#[test]
fn whitespace_and_blank_lines_are_ignored() {
    let spaced = mopsolver::load("0 1 0  \n\n0 0 1\r\n").unwrap();
    let packed = mopsolver::load("010\n001").unwrap();

    assert_eq!(spaced, packed);
}

#[test]
fn unequal_rows_are_malformed() {
    assert_eq!(
        mopsolver::load("00\n0"),
        Err(Error::InconsistentRow(1, 2, 1))
    );

    let mut builder = GridBuilder::new();
    builder.add_row("000").unwrap();
    assert_eq!(builder.add_row("0000"), Err(Error::InconsistentRow(1, 3, 4)));
}

#[test]
fn unknown_character_is_rejected() {
    assert_eq!(
        mopsolver::load("0x\n00"),
        Err(Error::InvalidCharForGrid('x'))
    );
}

#[test]
fn empty_input_gives_empty_grid() {
    let grid = mopsolver::load("").unwrap();

    assert!(grid.is_empty());
    assert_eq!(grid, Grid::empty());
    assert_eq!(grid.start(), None);
    assert_eq!(grid.goal(), None);
}

#[test]
fn read_grid_reports_line_of_malformed_row() {
    let err = mopsolver::read_grid(Cursor::new("000\n000\n00\n")).unwrap_err();

    assert!(err.to_string().contains("line 3"));
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InconsistentRow(2, 3, 2))
    );
}

#[test]
fn position_iter_lists_cells_in_row_order() {
    let grid = mopsolver::load("01\n10").unwrap();

    assert_eq!(
        grid.position_iter(Cell::Blocked).collect::<Vec<_>>(),
        vec![Position::new(0, 1), Position::new(1, 0)]
    );
}
