//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing a board, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the board. This is the case if either is less than 1 or greater than
    /// 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidDigit,

    /// Indicates that a set of cells provided to construct a board does not
    /// contain exactly one entry for every cell of the board.
    WrongCellCount,

    /// Indicates that a set of cells provided to construct a board contains
    /// two or more entries for the same (column, row) pair.
    DuplicatePosition
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "column or row outside the range [1, 9]"),
            SudokuError::InvalidDigit =>
                write!(f, "digit outside the range [1, 9]"),
            SudokuError::WrongCellCount =>
                write!(f, "board input does not contain exactly 81 cells"),
            SudokuError::DuplicatePosition =>
                write!(f, "board input assigns the same cell twice")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuBoard](crate::SudokuBoard) from its code representation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cell entries (which are separated by
    /// commas) is not exactly 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries is neither empty nor parseable
    /// as a number.
    NumberFormatError,

    /// Indicates that a cell entry holds a number which is not a valid Sudoku
    /// digit (less than 1 or greater than 9).
    InvalidDigit
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "code does not contain exactly 81 cell entries"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            SudokuParseError::InvalidDigit =>
                write!(f, "cell entry outside the range [1, 9]")
        }
    }
}

impl Error for SudokuParseError { }

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
