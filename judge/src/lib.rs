//! Output validator for modsum.
//!
//! Checks a contestant's output ("attempt") against the input it was
//! produced from, or against a reference output. Output is split by
//! `Case #<k>:` labels; the label word is accepted in any capitalization.

mod tokenize;

pub use tokenize::{split_cases, tokenize, Rows};

use std::fmt;

use itertools::Itertools;
use modsum_number::{to_integer, Integer};
use modsum_parser::parse;
use modsum_solver::solve_all;

const BAD_FORMAT_ERROR: &str = "Wrong number of lines/tokens.";
const BAD_INTEGER_ERROR: &str = "Not a valid integer in range.";
const WRONG_ANSWER_ERROR: &str = "Wrong answer.";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid judge input: {0}")]
    Input(#[from] modsum_solver::Error),
    #[error("Invalid generator output file: {0}")]
    GeneratorOutput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::Rejected(message) => write!(f, "{message}"),
        }
    }
}

/// Checks the attempt for a single case whose answer is `expected`.
///
/// Returns None if the output is correct, or an error message.
fn verify_case(rows: &Rows, modulus: Integer, expected: Integer) -> Option<&'static str> {
    let [row] = rows.as_slice() else {
        return Some(BAD_FORMAT_ERROR);
    };
    let [token] = row.as_slice() else {
        return Some(BAD_FORMAT_ERROR);
    };
    match to_integer(token, Some(0), modulus.checked_sub(1)) {
        None => Some(BAD_INTEGER_ERROR),
        Some(value) if value != expected => Some(WRONG_ANSWER_ERROR),
        Some(_) => None,
    }
}

/// Judges `attempt` as the output for `input`, recomputing the expected
/// answers from the input. `file_name` names the input in parse errors.
pub fn judge(file_name: Option<&str>, input: &str, attempt: &str) -> Result<Verdict, Error> {
    let problem = parse(file_name, input).map_err(modsum_solver::Error::from)?;
    let expected = solve_all(&problem)?;
    log::debug!("Judging attempt for {} case(s).", expected.len());

    let cases = match split_cases(attempt, expected.len()) {
        Ok(cases) => cases,
        Err(error) => return Ok(Verdict::Rejected(format!("Invalid attempt file: {error}"))),
    };

    for ((case, result), rows) in problem.cases.iter().zip_eq(&expected).zip_eq(&cases) {
        if let Some(error) = verify_case(rows, case.modulus, result.value) {
            return Ok(Verdict::Rejected(format!("Case #{}: {error}", result.index)));
        }
    }
    Ok(Verdict::Accepted)
}

/// Judges `attempt` by comparing it token by token with a reference output.
/// Tokens are compared case-insensitively.
pub fn judge_against_output(
    expected_output: &str,
    attempt: &str,
    num_cases: usize,
) -> Result<Verdict, Error> {
    let expected = split_cases(expected_output, num_cases).map_err(|error| {
        log::error!("Invalid generator output file: {error}");
        Error::GeneratorOutput(error)
    })?;
    let cases = match split_cases(attempt, num_cases) {
        Ok(cases) => cases,
        Err(error) => return Ok(Verdict::Rejected(format!("Invalid attempt file: {error}"))),
    };

    for (index, (expected_rows, rows)) in expected.iter().zip_eq(&cases).enumerate() {
        let equal = expected_rows.len() == rows.len()
            && expected_rows.iter().zip(rows).all(|(a, b)| {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.eq_ignore_ascii_case(b))
            });
        if !equal {
            return Ok(Verdict::Rejected(format!(
                "Case #{}: {WRONG_ANSWER_ERROR}",
                index + 1
            )));
        }
    }
    Ok(Verdict::Accepted)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    const INPUT: &str = "2\n4 10\n10 20 30 41\n2 7\n3 5\n";

    fn rejected(message: &str) -> Verdict {
        Verdict::Rejected(message.to_string())
    }

    #[test]
    fn accepts_solver_output() {
        let mut attempt = Vec::new();
        modsum_solver::run(None, INPUT, &mut attempt).unwrap();
        let attempt = String::from_utf8(attempt).unwrap();
        assert_eq!(judge(None, INPUT, &attempt).unwrap(), Verdict::Accepted);
    }

    #[test]
    fn accepts_relaxed_formatting() {
        assert_eq!(
            judge(None, INPUT, "case #1:   1\r\n\nCASE #2:\t1").unwrap(),
            Verdict::Accepted
        );
    }

    #[test]
    fn wrong_answer() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 1\nCase #2: 0\n").unwrap(),
            rejected("Case #2: Wrong answer.")
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 11\nCase #2: 1\n").unwrap(),
            rejected("Case #1: Not a valid integer in range.")
        );
    }

    #[test]
    fn leading_zero() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 01\nCase #2: 1\n").unwrap(),
            rejected("Case #1: Not a valid integer in range.")
        );
    }

    #[test]
    fn extra_tokens() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 1 1\nCase #2: 1\n").unwrap(),
            rejected("Case #1: Wrong number of lines/tokens.")
        );
        assert_eq!(
            judge(None, INPUT, "Case #1:\n1\nCase #2: 1\n").unwrap(),
            rejected("Case #1: Wrong number of lines/tokens.")
        );
    }

    #[test]
    fn missing_case() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 1\n").unwrap(),
            rejected("Invalid attempt file: Too few cases.")
        );
    }

    #[test]
    fn non_ascii() {
        assert_eq!(
            judge(None, INPUT, "Case #1: 1\nCase #2: 1\u{2028}\n").unwrap(),
            rejected("Invalid attempt file: Invalid or non-ASCII characters.")
        );
    }

    #[test]
    fn broken_input() {
        let err = judge(Some("in.txt"), "2\n1 5\n", "Case #1: 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Input(modsum_solver::Error::Parse(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid judge input: in.txt:3:1: expected item 1 of case #1, found end of input"
        );
    }

    #[test]
    fn zero_modulus_input() {
        let err = judge(None, "1\n1 0\n3\n", "Case #1: 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid judge input: case #1: the modulus must not be zero"
        );
    }

    #[test]
    fn against_output() {
        let expected = "Case #1: 1\nCase #2: 1\n";
        assert_eq!(
            judge_against_output(expected, "case #1: 1\ncase #2: 1", 2).unwrap(),
            Verdict::Accepted
        );
        assert_eq!(
            judge_against_output(expected, "Case #1: 1\nCase #2: 2\n", 2).unwrap(),
            rejected("Case #2: Wrong answer.")
        );
        assert_eq!(
            judge_against_output(expected, "Case #1: 1\n", 2).unwrap(),
            rejected("Invalid attempt file: Too few cases.")
        );
    }

    #[test]
    fn broken_reference_output() {
        let err = judge_against_output("1\n", "Case #1: 1\n", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid generator output file: File does not begin with \"case #1:\"."
        );
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Accepted.to_string(), "Accepted");
        assert!(Verdict::Accepted.is_accepted());
        assert_eq!(rejected("Case #1: Wrong answer.").to_string(), "Case #1: Wrong answer.");
    }
}
