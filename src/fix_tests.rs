use crate::SudokuBoard;
use crate::solver::BacktrackingSolver;

fn assert_solves_to(puzzle: &str, solution: &str) {
    let mut board = SudokuBoard::parse(puzzle).unwrap();
    let expected = SudokuBoard::parse(solution).unwrap();

    assert!(BacktrackingSolver::new(&mut board).solve(),
        "solveable board marked as unsolvable");
    assert_eq!(expected, board, "solver gave wrong grid");
}

// The example Sudoku are taken from the World Puzzle Federation Sudoku
// Grand Prix, GP 2020 Round 8 (Puzzle 2):
// Puzzles: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
// Solutions: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf

#[test]
fn solves_classic_published_puzzle() {
    let puzzle = "\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ";
    let solution = "\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";
    assert_solves_to(puzzle, solution);
}

#[test]
fn solves_sparse_classic_puzzle() {
    let puzzle = "\
         , , , , ,7,3, , ,\
         ,1,2, , , ,5,4, ,\
         , ,3,4, , , ,1, ,\
         , ,5,6, , , ,8, ,\
         , , , , , , , , ,\
        7, , , , ,2,4, , ,\
        6,4,1, , , ,8, , ,\
        5,3, , , ,6,7, , ,\
         , , , , ,9, , , ";
    let solution = "\
        4,5,6,2,1,7,3,9,8,\
        8,1,2,9,6,3,5,4,7,\
        9,7,3,4,5,8,6,1,2,\
        1,2,5,6,7,4,9,8,3,\
        3,6,4,8,9,1,2,7,5,\
        7,9,8,5,3,2,4,6,1,\
        6,4,1,7,2,5,8,3,9,\
        5,3,9,1,8,6,7,2,4,\
        2,8,7,3,4,9,1,5,6";
    assert_solves_to(puzzle, solution);
}
