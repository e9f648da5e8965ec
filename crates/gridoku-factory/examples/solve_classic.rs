//! Solve a classic 9x9 puzzle from the command line.
//!
//! Pass nine row strings, top to bottom: `.` for an empty cell, a
//! digit for a given. Set `RUST_LOG=debug` to watch the solver
//! narrate its fixations.
//!
//! ```text
//! cargo run --example solve_classic -- \
//!     ...84...9 ..1.....5 8...2146. 7.8....9. ......... \
//!     .5....3.1 .2491...7 9.....5.. 3...84...
//! ```

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use gridoku_solver::LogSink;

#[derive(Debug, Parser)]
struct Args {
    /// Row descriptions, top to bottom.
    rows: Vec<String>,

    /// Stop after this many solutions.
    #[arg(long, default_value_t = 2)]
    limit: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut board = gridoku_factory::classic()?.with_trace_sink(Arc::new(LogSink));
    for row in &args.rows {
        board.add_row(row)?;
    }

    let mut found = 0_usize;
    for solution in board.solve().take(args.limit) {
        found += 1;
        println!("solution {found}:");
        print!("{}", solution.solution_text());
    }
    if found == 0 {
        println!("no solutions");
    }
    Ok(())
}
