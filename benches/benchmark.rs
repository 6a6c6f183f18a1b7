use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_backtracking::SudokuBoard;
use sudoku_backtracking::solver::BacktrackingSolver;

use std::time::Duration;

// Explanation of benchmark classes:
//
// published puzzle: a typical puzzle with a unique solution and a realistic
//                   number of clues.
// empty board: the solver's best case, almost no backtracking happens.
// unsolvable board: a nearly full board whose single empty cell accepts no
//                   digit, measuring the cost of a failing scan.

const MEASUREMENT_TIME_SECS: u64 = 10;

const PUZZLE: &str = "\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

const SOLVED: &str = "\
    7,4,6,2,8,1,3,5,9,\
    9,1,2,5,3,7,8,4,6,\
    8,5,3,4,9,6,1,7,2,\
    3,7,4,1,2,5,6,9,8,\
    6,2,8,7,4,9,5,1,3,\
    5,9,1,3,6,8,7,2,4,\
    1,6,9,8,7,4,2,3,5,\
    2,8,5,9,1,3,4,6,7,\
    4,3,7,6,5,2,9,8,1";

fn unsolvable_board() -> SudokuBoard {
    let mut board = SudokuBoard::parse(SOLVED).unwrap();
    board.set_value(1, 1, 5).unwrap();
    board.clear_cell(1, 6).unwrap();
    board
}

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    let puzzle = SudokuBoard::parse(PUZZLE).unwrap();
    group.bench_function("published puzzle", |b| b.iter(|| {
        let mut board = puzzle.clone();
        assert!(BacktrackingSolver::new(&mut board).solve());
        board
    }));

    group.bench_function("empty board", |b| b.iter(|| {
        let mut board = SudokuBoard::new();
        assert!(BacktrackingSolver::new(&mut board).solve());
        board
    }));

    let unsolvable = unsolvable_board();
    group.bench_function("unsolvable board", |b| b.iter(|| {
        let mut board = unsolvable.clone();
        assert!(!BacktrackingSolver::new(&mut board).solve());
        board
    }));

    group.finish();
}

criterion_group!(benches, benchmark_solve);
criterion_main!(benches);
