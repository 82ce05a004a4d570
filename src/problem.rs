//! On-disk problem file format for the CLI harness.
//!
//! A minimal line-oriented text format, parsed here and nowhere else in
//! the crate — the solver library itself never touches a file handle.

use crate::model::{BucketOrder, PositionsMatrix, ScoringWeights};

/// Errors parsing a problem file.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("expected a header line `n m R`, got '{0}'")]
    MissingHeader(String),

    #[error("header line '{0}' did not parse as three non-negative integers")]
    InvalidHeader(String),

    #[error("expected {expected} data lines after the header, found {found}")]
    TooFewLines { expected: usize, found: usize },

    #[error("line {line}: expected {expected} whitespace-separated integers, got {found}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{value}' is not a valid integer")]
    InvalidInteger { line: usize, value: String },

    #[error("line {line}: '{value}' is not a valid real number")]
    InvalidReal { line: usize, value: String },

    #[error(transparent)]
    Solve(#[from] crate::error::SolveError),
}

/// A fully parsed problem: a positions matrix, two scoring-weight vectors,
/// and a set of departure rankings ready to pass to [`crate::solve::solve`].
pub struct Problem {
    pub positions: PositionsMatrix,
    pub w_before: ScoringWeights,
    pub w_tied: ScoringWeights,
    pub departures: Vec<BucketOrder>,
}

fn parse_int_row(line: &str, line_no: usize, expected: usize) -> Result<Vec<i64>, ProblemError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(ProblemError::WrongFieldCount {
            line: line_no,
            expected,
            found: fields.len(),
        });
    }
    fields
        .iter()
        .map(|f| {
            f.parse::<i64>().map_err(|_| ProblemError::InvalidInteger {
                line: line_no,
                value: f.to_string(),
            })
        })
        .collect()
}

fn parse_real_row(line: &str, line_no: usize) -> Result<[f64; 6], ProblemError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ProblemError::WrongFieldCount {
            line: line_no,
            expected: 6,
            found: fields.len(),
        });
    }
    let mut out = [0.0; 6];
    for (i, f) in fields.iter().enumerate() {
        out[i] = f.parse::<f64>().map_err(|_| ProblemError::InvalidReal {
            line: line_no,
            value: f.to_string(),
        })?;
    }
    Ok(out)
}

impl Problem {
    /// Parses a problem from the on-disk text format described in the
    /// harness design notes.
    pub fn parse(text: &str) -> Result<Problem, ProblemError> {
        let mut lines = text.lines();

        let header = lines
            .next()
            .ok_or_else(|| ProblemError::MissingHeader(String::new()))?;
        let header_fields: Vec<&str> = header.split_whitespace().collect();
        if header_fields.len() != 3 {
            return Err(ProblemError::InvalidHeader(header.to_string()));
        }
        let n: usize = header_fields[0]
            .parse()
            .map_err(|_| ProblemError::InvalidHeader(header.to_string()))?;
        let m: usize = header_fields[1]
            .parse()
            .map_err(|_| ProblemError::InvalidHeader(header.to_string()))?;
        let r: usize = header_fields[2]
            .parse()
            .map_err(|_| ProblemError::InvalidHeader(header.to_string()))?;

        let remaining: Vec<&str> = lines.collect();
        let expected_lines = m + 2 + r;
        if remaining.len() < expected_lines {
            return Err(ProblemError::TooFewLines {
                expected: expected_lines,
                found: remaining.len(),
            });
        }

        // Voter-major rows, transposed into the row-major [n, m] buffer
        // PositionsMatrix expects.
        let mut flat = vec![0i64; n * m];
        for v in 0..m {
            let row = parse_int_row(remaining[v], v + 2, n)?;
            for (x, &value) in row.iter().enumerate() {
                flat[x * m + v] = value;
            }
        }
        let positions = PositionsMatrix::from_flat(flat, n, m)?;

        let w_before = ScoringWeights::new(parse_real_row(remaining[m], m + 2)?);
        let w_tied = ScoringWeights::new(parse_real_row(remaining[m + 1], m + 3)?);

        let mut departures = Vec::with_capacity(r);
        for k in 0..r {
            let line_no = m + 2 + k + 2;
            let row = parse_int_row(remaining[m + 2 + k], line_no, n)?;
            let bucket_row: Vec<usize> = row
                .iter()
                .map(|&v| {
                    usize::try_from(v).map_err(|_| ProblemError::InvalidInteger {
                        line: line_no,
                        value: v.to_string(),
                    })
                })
                .collect::<Result<_, _>>()?;
            departures.push(BucketOrder::from_vec(bucket_row)?);
        }

        Ok(Problem {
            positions,
            w_before,
            w_tied,
            departures,
        })
    }

    /// Serializes a problem back to the on-disk text format. Used by tests
    /// to check the parser round-trips.
    pub fn to_text(&self) -> String {
        let n = self.positions.n();
        let m = self.positions.m();
        let r = self.departures.len();

        let mut out = String::new();
        out.push_str(&format!("{} {} {}\n", n, m, r));
        for v in 0..m {
            let row: Vec<String> = (0..n)
                .map(|x| match self.positions.get(x, v) {
                    Some(p) => p.to_string(),
                    None => "-1".to_string(),
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out.push_str(&format_reals(&self.w_before.0));
        out.push('\n');
        out.push_str(&format_reals(&self.w_tied.0));
        out.push('\n');
        for order in &self.departures {
            let row: Vec<String> = order.as_slice().iter().map(|b| b.to_string()).collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}

fn format_reals(values: &[f64; 6]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
