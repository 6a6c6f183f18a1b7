//! This module contains the logic for solving Sudoku boards.
//!
//! Most importantly, this module contains the definition of the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), which fills a board
//! in place by recursively testing all valid digits for each empty cell. For
//! embedders that need to bound the search, a budgeted entry point is
//! provided whose outcome is described by the
//! [Resolution](enum.Resolution.html) enum.

use crate::{SIZE, SudokuBoard};
use crate::error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

/// An enumeration of the ways a bounded solve can end. A plain
/// [BacktrackingSolver::solve] never runs out of budget, so its result
/// collapses to a `bool`; this type exists so that
/// [BacktrackingSolver::solve_bounded] can distinguish a board that is
/// proven unsolvable from one whose search was merely cut short.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Resolution {

    /// Indicates that the board was completely and validly filled. All
    /// placements made by the solver remain on the board.
    Solved,

    /// Indicates that the search space was exhausted without finding a
    /// complete assignment. The board is impossible under its current
    /// digits. Every cell that was empty when solving started is empty
    /// again.
    Unsolvable,

    /// Indicates that the placement budget ran out before the search could
    /// prove either of the other outcomes. The board was restored as for
    /// [Resolution::Unsolvable], but it may still be solvable with a larger
    /// budget.
    BudgetExceeded
}

/// A solver which fills a [SudokuBoard] by recursive backtracking: it finds
/// the first empty cell in board order, tries the digits 1 to 9 in ascending
/// order, places the first digit that does not collide with the cell's row,
/// column, or box, and recurses. If the recursion fails, the placement is
/// undone and the next digit is tried; if all digits fail, the search
/// backtracks one cell.
///
/// The solver borrows its board exclusively, so no other code can observe
/// the board while a solve is in progress. It keeps no state of its own
/// beyond that borrow; all intermediate search state lives in the board's
/// cells and the call stack.
///
/// Two properties of a finished solve are worth calling out:
///
/// * On failure, every cell that was empty at call time is empty again and
/// every given digit is untouched. No partial assignment is ever left
/// behind.
/// * Digits already in conflict among the givens (for example two equal
/// digits in one row) are picked up by the same row/column/box scans that
/// vet tentative placements, so such boards simply come out as unsolvable.
pub struct BacktrackingSolver<'a> {
    board: &'a mut SudokuBoard
}

impl<'a> BacktrackingSolver<'a> {

    /// Creates a solver operating on the given board. The board is borrowed
    /// exclusively until the solver is dropped.
    pub fn new(board: &'a mut SudokuBoard) -> BacktrackingSolver<'a> {
        BacktrackingSolver {
            board
        }
    }

    /// Finds the next empty cell, i.e. the first cell in the board's
    /// row-major iteration order which holds no digit, and returns its
    /// `(column, row)` position. Returns `None` if every cell is filled,
    /// which is the completion condition of [BacktrackingSolver::solve].
    pub fn next_empty(&self) -> Option<(usize, usize)> {
        self.board.cells()
            .find(|cell| cell.is_empty())
            .map(|cell| (cell.column(), cell.row()))
    }

    /// Checks whether the given digit can be placed in the cell at the
    /// given position without colliding with an equal digit in the same
    /// row, column, or box. A cell that already holds a digit never accepts
    /// a placement, so `Ok(false)` is returned for filled cells regardless
    /// of the digit.
    ///
    /// The check scans all cells sharing the target's row, then all cells
    /// sharing its column, then all cells sharing its box. The target cell
    /// itself is included in each scan, but since placements are only
    /// meaningful on empty cells it can never collide with itself.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[1, 9]`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[1, 9]`.
    /// * `digit`: The digit to probe. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn placement_fits(&self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        let cell = self.board.cell_at(column, row)?;

        if digit == 0 || digit > SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        if cell.value().is_some() {
            return Ok(false);
        }

        let sudoku_box = cell.sudoku_box();
        let in_row = self.board.cells()
            .filter(|c| c.row() == row)
            .any(|c| c.value() == Some(digit));

        if in_row {
            return Ok(false);
        }

        let in_column = self.board.cells()
            .filter(|c| c.column() == column)
            .any(|c| c.value() == Some(digit));

        if in_column {
            return Ok(false);
        }

        let in_box = self.board.cells()
            .filter(|c| c.sudoku_box() == sudoku_box)
            .any(|c| c.value() == Some(digit));

        if in_box {
            return Ok(false);
        }

        Ok(true)
    }

    fn solve_rec(&mut self, budget: &mut Option<u64>) -> Resolution {
        let (column, row) = match self.next_empty() {
            None => return Resolution::Solved,
            Some(position) => position
        };

        for digit in 1..=SIZE {
            if self.placement_fits(column, row, digit).unwrap() {
                if let Some(remaining) = budget {
                    if *remaining == 0 {
                        return Resolution::BudgetExceeded;
                    }

                    *remaining -= 1;
                }

                self.board.set_value(column, row, digit).unwrap();

                match self.solve_rec(budget) {
                    Resolution::Solved => return Resolution::Solved,
                    Resolution::Unsolvable => {
                        self.board.clear_cell(column, row).unwrap();
                    },
                    Resolution::BudgetExceeded => {
                        self.board.clear_cell(column, row).unwrap();
                        return Resolution::BudgetExceeded;
                    }
                }
            }
        }

        Resolution::Unsolvable
    }

    /// Solves the board in place. Returns `true` if a complete assignment
    /// satisfying the row, column, and box rules was found, in which case
    /// the board is left fully filled. Returns `false` if no such
    /// assignment exists, in which case every cell that was empty when this
    /// method was called is empty again and every previously filled cell is
    /// unchanged.
    ///
    /// The search is exhaustive and deterministic: digits are tried in
    /// ascending order for each cell, so repeated calls on boards with
    /// identical digits produce identical results. A board with no empty
    /// cells yields `true` immediately without mutating anything.
    pub fn solve(&mut self) -> bool {
        self.solve_rec(&mut None) == Resolution::Solved
    }

    /// Like [BacktrackingSolver::solve], but gives up once the search has
    /// made `max_placements` tentative placements. Exceeding the budget is
    /// reported as [Resolution::BudgetExceeded], which is distinct from
    /// [Resolution::Unsolvable]: the former means the search was cut short,
    /// the latter that the whole search space was exhausted. On any outcome
    /// other than [Resolution::Solved], the board is restored exactly as on
    /// an ordinary failed solve.
    pub fn solve_bounded(&mut self, max_placements: u64) -> Resolution {
        self.solve_rec(&mut Some(max_placements))
    }
}
