// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a solver for classic 9x9 Sudoku. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Building boards from in-memory data with fail-fast validation
//! * Solving boards using a recursive backtracking algorithm which checks
//! candidate digits against the row, column, and box of the target cell
//! * An optional placement budget for embedders that need to bound the
//! search
//!
//! # Parsing and printing boards
//!
//! See [SudokuBoard::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use sudoku_backtracking::SudokuBoard;
//!
//! let board = SudokuBoard::parse("\
//!      , , , ,8,1, , , ,\
//!      , ,2, , ,7,8, , ,\
//!      ,5,3, , , ,1,7, ,\
//!     3,7, , , , , , , ,\
//!     6, , , , , , , ,3,\
//!      , , , , , , ,2,4,\
//!      ,6,9, , , ,2,3, ,\
//!      , ,5,9, , ,4, , ,\
//!      , , ,6,5, , , , ").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Solving boards
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) borrows a board
//! exclusively and fills all empty cells in place. It returns `true` if a
//! complete assignment satisfying the row, column, and box rules was found
//! and `false` if no such assignment exists for the given digits.
//!
//! ```
//! use sudoku_backtracking::SudokuBoard;
//! use sudoku_backtracking::solver::BacktrackingSolver;
//!
//! let mut board = SudokuBoard::new();
//! board.set_value(1, 1, 7).unwrap();
//!
//! assert!(BacktrackingSolver::new(&mut board).solve());
//! assert!(board.is_full());
//! assert_eq!(Some(7), board.value_at(1, 1).unwrap());
//! ```
//!
//! An unsolvable board is not an error: `solve` simply returns `false` and
//! restores every cell that was empty when it was called, so the caller can
//! present the board unchanged.

pub mod error;
pub mod solver;

#[cfg(test)]
mod fix_tests;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;

use std::fmt::{self, Display, Formatter};

/// The number of cells on one axis of the board, as well as the greatest
/// valid digit.
pub const SIZE: usize = 9;

/// The number of cells on one axis of a box, i.e. one of the nine 3x3
/// regions into which the board is partitioned.
pub const BOX_SIZE: usize = 3;

/// The total number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A single position on a [SudokuBoard]. A cell knows its column and row
/// (both counted from 1), the box it belongs to, and optionally holds a
/// digit from 1 to 9. Which column, row, and box a cell belongs to is fixed
/// at construction; only the value ever changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    column: usize,
    row: usize,
    box_pos: (usize, usize),
    value: Option<usize>
}

fn box_of(column: usize, row: usize) -> (usize, usize) {
    ((column + BOX_SIZE - 1) / BOX_SIZE, (row + BOX_SIZE - 1) / BOX_SIZE)
}

impl Cell {
    fn new(column: usize, row: usize) -> Cell {
        Cell {
            column,
            row,
            box_pos: box_of(column, row),
            value: None
        }
    }

    /// Gets the column (x-coordinate) of this cell, in the range `[1, 9]`.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row (y-coordinate) of this cell, in the range `[1, 9]`.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the box this cell belongs to as a `(horizontal, vertical)` pair,
    /// each component in the range `[1, 3]`. The box of a cell at `(column,
    /// row)` is `(ceil(column / 3), ceil(row / 3))`, so for example the cell
    /// at `(4, 7)` lies in box `(2, 3)`.
    pub fn sudoku_box(&self) -> (usize, usize) {
        self.box_pos
    }

    /// Gets the digit this cell holds, or `None` if the cell is empty.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// Indicates whether this cell currently holds no digit.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// A 9x9 Sudoku board composed of 81 [Cell]s, one for every (column, row)
/// pair with both coordinates in the range `[1, 9]`. Cells are stored in
/// row-major order (row 1 first, columns 1 to 9 within each row), which is
/// also the order in which [SudokuBoard::cells] yields them. That order is
/// deterministic and defines which empty cell a solver resolves first.
///
/// The board performs no rule checking on mutation: [SudokuBoard::set_value]
/// happily places conflicting digits. Checking placements against the rules
/// is the solver's job.
///
/// `SudokuBoard` implements `Display` for a pretty print of the grid:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 2 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │ 3 │   ║   │   │   ║
/// ...
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuBoard {
    cells: Vec<Cell>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &SudokuBoard, y: usize) -> String {
    line('║', '║', '│',
        |x| to_char(board.cells[index(x + 1, y + 1)].value), ' ', '║', true)
}

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Cell) -> String {
    if let Some(digit) = cell.value {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    (row - 1) * SIZE + (column - 1)
}

fn in_bounds(column: usize, row: usize) -> bool {
    (1..=SIZE).contains(&column) && (1..=SIZE).contains(&row)
}

fn valid_digit(digit: usize) -> bool {
    (1..=SIZE).contains(&digit)
}

impl SudokuBoard {

    /// Creates a new board on which all 81 cells are empty.
    pub fn new() -> SudokuBoard {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in 1..=SIZE {
            for column in 1..=SIZE {
                cells.push(Cell::new(column, row));
            }
        }

        SudokuBoard {
            cells
        }
    }

    /// Creates a board from a 9x9 array of optional digits, where
    /// `rows[r][c]` is the content of the cell in row `r + 1` and column
    /// `c + 1`.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDigit` if any entry holds a digit outside the
    /// range `[1, 9]`. The board is rejected as a whole, digits are never
    /// silently dropped or clamped.
    pub fn from_rows(rows: [[Option<usize>; SIZE]; SIZE])
            -> SudokuResult<SudokuBoard> {
        let mut board = SudokuBoard::new();

        for (row_index, row) in rows.iter().enumerate() {
            for (column_index, &value) in row.iter().enumerate() {
                if let Some(digit) = value {
                    if !valid_digit(digit) {
                        return Err(SudokuError::InvalidDigit);
                    }

                    board.cells[index(column_index + 1, row_index + 1)]
                        .value = Some(digit);
                }
            }
        }

        Ok(board)
    }

    /// Creates a board from a full set of `(column, row, value)` triples.
    /// The triples may come in any order, but together they must assign
    /// every cell of the board exactly once.
    ///
    /// # Errors
    ///
    /// * `SudokuError::WrongCellCount` if `givens` does not contain exactly
    /// 81 entries.
    /// * `SudokuError::OutOfBounds` if a column or row lies outside the
    /// range `[1, 9]`.
    /// * `SudokuError::DuplicatePosition` if two entries name the same
    /// (column, row) pair.
    /// * `SudokuError::InvalidDigit` if a digit lies outside the range
    /// `[1, 9]`.
    pub fn with_givens(givens: &[(usize, usize, Option<usize>)])
            -> SudokuResult<SudokuBoard> {
        if givens.len() != CELL_COUNT {
            return Err(SudokuError::WrongCellCount);
        }

        let mut board = SudokuBoard::new();
        let mut assigned = [false; CELL_COUNT];

        for &(column, row, value) in givens {
            if !in_bounds(column, row) {
                return Err(SudokuError::OutOfBounds);
            }

            let index = index(column, row);

            if assigned[index] {
                return Err(SudokuError::DuplicatePosition);
            }

            assigned[index] = true;

            if let Some(digit) = value {
                if !valid_digit(digit) {
                    return Err(SudokuError::InvalidDigit);
                }

                board.cells[index].value = Some(digit);
            }
        }

        Ok(board)
    }

    /// Parses a code encoding a board. The code is a comma-separated list of
    /// exactly 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuBoard> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut board = SudokuBoard::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<usize>()?;

            if !valid_digit(digit) {
                return Err(SudokuParseError::InvalidDigit);
            }

            board.cells[i].value = Some(digit);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [SudokuBoard::parse](#method.parse). That is, a board that is
    /// converted to a string and parsed again will not change, as is
    /// illustrated below.
    ///
    /// ```
    /// use sudoku_backtracking::SudokuBoard;
    ///
    /// let mut board = SudokuBoard::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_value(2, 1, 4).unwrap();
    /// board.set_value(5, 3, 9).unwrap();
    ///
    /// let code = board.to_parseable_string();
    /// let parsed = SudokuBoard::parse(code.as_str()).unwrap();
    /// assert_eq!(board, parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets a reference to the unique [Cell] at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[1, 9]`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell_at(&self, column: usize, row: usize) -> SudokuResult<&Cell> {
        if !in_bounds(column, row) {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(&self.cells[index(column, row)])
        }
    }

    /// Gets the digit held by the cell at the specified position, or `None`
    /// if that cell is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[1, 9]`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn value_at(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        Ok(self.cell_at(column, row)?.value)
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[1, 9]`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[1, 9]`.
    /// * `digit`: The digit to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.value_at(column, row)? {
            Ok(digit == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    /// No rule checking is performed; it is legal to place a digit that
    /// conflicts with its row, column, or box.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[1, 9]`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[1, 9]`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_value(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if !in_bounds(column, row) {
            return Err(SudokuError::OutOfBounds);
        }

        if !valid_digit(digit) {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(column, row)].value = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[1, 9]`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if !in_bounds(column, row) {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)].value = None;
        Ok(())
    }

    /// Unconditionally resets every cell on the board to empty.
    pub fn clear_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.value = None;
        }
    }

    /// Gets an iterator over all 81 cells in row-major order (row 1 first,
    /// columns 1 to 9 within each row). This order is stable and defines
    /// which empty cell is considered "next" by the solver.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Counts the number of clues given by this board. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.value.is_some()).count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled with
    /// a digit. In this case, [SudokuBoard::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.value.is_none())
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuBoard::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.value.is_none())
    }
}

impl Default for SudokuBoard {
    fn default() -> SudokuBoard {
        SudokuBoard::new()
    }
}

impl Serialize for SudokuBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.to_parseable_string().as_str())
    }
}

impl<'de> Deserialize<'de> for SudokuBoard {
    fn deserialize<D>(deserializer: D) -> Result<SudokuBoard, D::Error>
    where
        D: Deserializer<'de>
    {
        let code = String::deserialize(deserializer)?;
        SudokuBoard::parse(code.as_str()).map_err(DeError::custom)
    }
}
