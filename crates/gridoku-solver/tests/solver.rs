//! End-to-end solving scenarios.

use std::sync::Arc;

use gridoku_core::{Position, ValueSet};
use gridoku_solver::{Board, BoardError, RecordingSink};

/// A 9x9 board with the classic 3x3 box constraints on top of the
/// implied rows and columns.
fn classic_board(rows: &[&str]) -> Result<Board, BoardError> {
    let mut board = Board::new(9, 9)?;
    for (box_y, box_x) in (0..3).flat_map(|y| (0..3).map(move |x| (y, x))) {
        let members = (0..3).flat_map(move |dy| {
            (0..3).map(move |dx| Position::new(box_x * 3 + dx, box_y * 3 + dy))
        });
        board.create_rule(format!("box ({box_x}, {box_y})"), members)?;
    }
    for row in rows {
        board.add_row(row)?;
    }
    Ok(board)
}

fn assert_classic_solution(solution: &Board) {
    for rule in solution.rules() {
        let values: ValueSet = rule
            .members()
            .iter()
            .map(|&p| solution.cells()[p].value())
            .collect();
        assert_eq!(values, ValueSet::full(9), "rule {} incomplete", rule.name());
    }
}

#[test]
fn test_hard_puzzle_has_unique_solution() {
    let board = classic_board(&[
        "...84...9",
        "..1.....5",
        "8...2146.",
        "7.8....9.",
        ".........",
        ".5....3.1",
        ".2491...7",
        "9.....5..",
        "3...84...",
    ])
    .unwrap();

    let solutions: Vec<_> = board.solve().collect();
    assert_eq!(solutions.len(), 1);
    assert_classic_solution(&solutions[0]);

    // The givens survive into the solution.
    assert_eq!(solutions[0].cells()[Position::new(3, 0)].value(), 8);
    assert_eq!(solutions[0].cells()[Position::new(0, 8)].value(), 3);

    // The original board is untouched by the solve.
    assert!(!board.cells()[Position::new(0, 0)].has_value());
}

#[test]
fn test_contradictory_givens_yield_no_solutions() {
    let board = classic_board(&[
        "11.......",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    ])
    .unwrap();

    assert_eq!(board.solve().count(), 0);
}

#[test]
fn test_empty_board_streams_multiple_solutions() {
    let board = classic_board(&[]).unwrap();

    let first_two: Vec<_> = board.solve().take(2).collect();
    assert_eq!(first_two.len(), 2);
    for solution in &first_two {
        assert_classic_solution(solution);
    }
    assert_ne!(first_two[0].solution_text(), first_two[1].solution_text());
}

#[test]
fn test_solutions_come_out_in_ascending_branch_order() {
    // No implied lines (max value matches neither dimension); a single
    // four-cell group over a domain of five values leaves exactly two
    // completions, reached through different branch values.
    let mut board = Board::with_max_value(4, 1, 5).unwrap();
    board
        .create_rule("strip", (0..4).map(|x| Position::new(x, 0)))
        .unwrap();
    board.add_row("12..").unwrap();

    let texts: Vec<_> = board.solve().map(|s| s.solution_text()).collect();
    assert_eq!(texts, vec!["1234\n".to_owned(), "1243\n".to_owned()]);
}

#[test]
fn test_blocked_cells_are_never_assigned() {
    // Irregular geometry: the hole belongs to no constraint group.
    let mut board = Board::with_max_value(4, 2, 3).unwrap();
    board.add_row("12./").unwrap();
    board.add_row("/.21").unwrap();
    board
        .create_rule("top", (0..3).map(|x| Position::new(x, 0)))
        .unwrap();
    board
        .create_rule("bottom", (1..4).map(|x| Position::new(x, 1)))
        .unwrap();

    let solutions: Vec<_> = board.solve().collect();
    assert_eq!(solutions.len(), 1);
    let solution = &solutions[0];
    assert!(solution.cells()[Position::new(3, 0)].is_blocked());
    assert!(!solution.cells()[Position::new(3, 0)].has_value());
    assert_eq!(solution.solution_text(), "1230\n0321\n");
}

#[test]
fn test_group_of_blocked_cells_is_valid() {
    let mut board = Board::with_max_value(2, 2, 2).unwrap();
    board.add_row("//").unwrap();
    board.add_row("..").unwrap();
    board
        .create_rule("holes", [Position::new(0, 0), Position::new(1, 0)])
        .unwrap();
    assert!(board.is_valid());
}

#[test]
fn test_solution_text_round_trips() {
    let board = classic_board(&[
        "...84...9",
        "..1.....5",
        "8...2146.",
        "7.8....9.",
        ".........",
        ".5....3.1",
        ".2491...7",
        "9.....5..",
        "3...84...",
    ])
    .unwrap();
    let solution = board.solve().next().unwrap();

    let mut replay = classic_board(&[]).unwrap();
    for line in solution.solution_text().lines() {
        replay.add_row(line).unwrap();
    }
    assert_eq!(replay.solution_text(), solution.solution_text());
    assert_eq!(replay.solve().count(), 1);
}

#[test]
fn test_recording_sink_narrates_the_solve() {
    let sink = Arc::new(RecordingSink::new());
    let board = classic_board(&[
        "...84...9",
        "..1.....5",
        "8...2146.",
        "7.8....9.",
        ".........",
        ".5....3.1",
        ".2491...7",
        "9.....5..",
        "3...84...",
    ])
    .unwrap()
    .with_trace_sink(sink.clone());

    let solved = board.solve().count();
    assert_eq!(solved, 1);

    let lines = sink.lines();
    assert!(!lines.is_empty());
    assert!(
        lines
            .iter()
            .any(|l| l.ends_with("only one possibility") || l.contains("only place in"))
    );
}
