//! Solving through the recipe boards.

use gridoku_core::{Position, ValueSet};
use gridoku_factory::{classic, free_form, samurai, with_boxes};
use gridoku_solver::Board;

fn add_rows(board: &mut Board, rows: &[&str]) {
    for row in rows {
        board.add_row(row).unwrap();
    }
}

fn assert_exactly_once(solution: &Board) {
    for rule in solution.rules() {
        let open: Vec<u8> = rule
            .members()
            .iter()
            .map(|&p| &solution.cells()[p])
            .filter(|c| !c.is_blocked())
            .map(gridoku_core::Cell::value)
            .collect();
        let distinct: ValueSet = open.iter().copied().collect();
        assert_eq!(
            distinct.len(),
            open.len(),
            "duplicate value in rule {}",
            rule.name()
        );
    }
}

#[test]
fn test_classic_puzzle_solves_uniquely() {
    let mut board = classic().unwrap();
    add_rows(
        &mut board,
        &[
            "...84...9",
            "..1.....5",
            "8...2146.",
            "7.8....9.",
            ".........",
            ".5....3.1",
            ".2491...7",
            "9.....5..",
            "3...84...",
        ],
    );

    let solutions: Vec<_> = board.solve().collect();
    assert_eq!(solutions.len(), 1);

    let solution = &solutions[0];
    assert_exactly_once(solution);
    for rule in solution.rules() {
        let values: ValueSet = rule
            .members()
            .iter()
            .map(|&p| solution.cells()[p].value())
            .collect();
        assert_eq!(values, ValueSet::full(9));
    }
}

#[test]
fn test_small_boxed_board_solves() {
    let mut board = with_boxes(4, 4, 2, 2).unwrap();
    assert_eq!(board.rules().len(), 12);

    add_rows(&mut board, &["12..", "34..", "....", "...."]);
    let solution = board.solve().next().unwrap();
    assert_exactly_once(&solution);
    assert!(solution.cells().iter().all(gridoku_core::Cell::has_value));
}

#[test]
fn test_hyper_regions_constrain_solutions() {
    let board = gridoku_factory::classic_with_hyper_regions().unwrap();
    let solution = board.solve().next().unwrap();
    assert_exactly_once(&solution);

    // The bonus regions hold each value exactly once too.
    for name in ["hyper (1, 1)", "hyper (5, 1)", "hyper (1, 5)", "hyper (5, 5)"] {
        let rule = solution.rules().iter().find(|r| r.name() == name).unwrap();
        let values: ValueSet = rule
            .members()
            .iter()
            .map(|&p| solution.cells()[p].value())
            .collect();
        assert_eq!(values, ValueSet::full(9), "region {name}");
    }
}

#[test]
fn test_samurai_geometry() {
    let board = samurai().unwrap();
    assert_eq!(board.width(), 21);
    assert_eq!(board.height(), 21);
    assert_eq!(board.max_value(), 9);

    let blocked = board.cells().iter().filter(|c| c.is_blocked()).count();
    assert_eq!(blocked, 72);
    assert!(board.cells()[Position::new(9, 0)].is_blocked());
    assert!(board.cells()[Position::new(11, 5)].is_blocked());
    assert!(board.cells()[Position::new(0, 9)].is_blocked());
    assert!(board.cells()[Position::new(20, 11)].is_blocked());
    assert!(!board.cells()[Position::new(8, 0)].is_blocked());
    assert!(!board.cells()[Position::new(10, 6)].is_blocked());

    // 41 areas survive the notches; 84 corner-grid lines; 18 middle.
    assert_eq!(board.rules().len(), 143);
    let areas = board
        .rules()
        .iter()
        .filter(|r| r.name().starts_with("area"))
        .count();
    assert_eq!(areas, 41);
}

#[test]
fn test_samurai_solves_without_touching_holes() {
    let solution = samurai().unwrap().solve().next().unwrap();
    assert_exactly_once(&solution);

    for cell in solution.cells().iter() {
        if cell.is_blocked() {
            assert!(!cell.has_value());
        } else {
            assert!(cell.has_value());
        }
    }
}

#[test]
fn test_free_form_puzzle_solves_uniquely() {
    let mut board = free_form(&["AABB", "AABB", "CCDD", "CCDD"]).unwrap();
    add_rows(&mut board, &["1.34", "3.12", "2143", "4321"]);

    let solutions: Vec<_> = board.solve().collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(
        solutions[0].solution_text(),
        "1234\n3412\n2143\n4321\n"
    );
}
