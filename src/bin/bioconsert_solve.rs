//! Thin CLI wrapper around [`bioconsert_core::solve`].
//!
//! Reads a problem file (see `problem` module docs for the format), runs
//! the solver, and prints the resulting bucket orders and cost deltas to
//! stdout, one line per departure ranking. Not part of the library's
//! public contract.

use std::env;
use std::fs;
use std::process::ExitCode;

use bioconsert_core::problem::Problem;
use bioconsert_core::solve;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("usage: bioconsert-solve <problem-file>");
            return ExitCode::FAILURE;
        }
    };

    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to read '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut problem = match Problem::parse(&text) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to parse '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut delta = vec![0.0; problem.departures.len()];
    eprintln!(
        "info string solving {} departure ranking(s) over {} elements, {} voters",
        problem.departures.len(),
        problem.positions.n(),
        problem.positions.m()
    );

    if let Err(e) = solve(
        &problem.positions,
        &mut problem.departures,
        &problem.w_before,
        &problem.w_tied,
        &mut delta,
    ) {
        eprintln!("solve failed: {}", e);
        return ExitCode::FAILURE;
    }

    for (k, (order, d)) in problem.departures.iter().zip(delta.iter()).enumerate() {
        let row: Vec<String> = order.as_slice().iter().map(|b| b.to_string()).collect();
        println!("{}: [{}] delta={}", k, row.join(", "), d);
    }

    ExitCode::SUCCESS
}
