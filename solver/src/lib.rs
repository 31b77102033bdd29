//! Computes, for every test case, the sum of its items modulo its divisor
//! and writes one `Case #<i>: <value>` line per case.

use std::fmt;
use std::io::{self, BufWriter, Write};

use modsum_number::{sum_mod, Integer, Modulus};
use modsum_parser::{CaseReader, Problem, TestCase};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] modsum_parser_util::Error),
    #[error("case #{case}: the modulus must not be zero")]
    ZeroModulus { case: usize },
    #[error("failed to write results: {0}")]
    Io(#[from] io::Error),
}

/// The result of one test case, labelled with its 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    pub index: usize,
    pub value: Integer,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}: {}", self.index, self.value)
    }
}

pub trait Solve {
    /// The sum of the items modulo the divisor, or None if the divisor is
    /// zero.
    fn solve(&self) -> Option<Integer>;
}

impl Solve for TestCase {
    fn solve(&self) -> Option<Integer> {
        let modulus = Modulus::new(self.modulus)?;
        Some(sum_mod(self.items.iter().copied(), modulus))
    }
}

/// Solves the test case with the given 1-based index.
pub fn solve_case(index: usize, case: &TestCase) -> Result<CaseResult, Error> {
    let value = case.solve().ok_or(Error::ZeroModulus { case: index })?;
    log::debug!(
        "Case #{index}: {} item(s), modulus {}, result {value}",
        case.item_count(),
        case.modulus
    );
    Ok(CaseResult { index, value })
}

pub fn solve_all(problem: &Problem) -> Result<Vec<CaseResult>, Error> {
    problem
        .cases
        .iter()
        .enumerate()
        .map(|(i, case)| solve_case(i + 1, case))
        .collect()
}

/// Writes one line per result, in the given order.
pub fn write_results<W: Write>(writer: W, results: &[CaseResult]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for result in results {
        writeln!(writer, "{result}")?;
    }
    writer.flush()
}

/// When result lines are flushed to the underlying writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlushPolicy {
    /// After every case, so each line appears as soon as it is computed.
    EachCase,
    /// Once, after the last case.
    #[default]
    AtEnd,
}

/// Reads the test cases from `input`, solves them and writes the result
/// lines to `writer`. Returns the number of cases written.
///
/// Cases are processed one at a time: if a case is malformed, the results
/// of all cases before it have already been written when the error is
/// returned.
pub fn run<W: Write>(file_name: Option<&str>, input: &str, writer: W) -> Result<usize, Error> {
    run_with_policy(file_name, input, writer, FlushPolicy::default())
}

pub fn run_with_policy<W: Write>(
    file_name: Option<&str>,
    input: &str,
    writer: W,
    flush: FlushPolicy,
) -> Result<usize, Error> {
    let reader = CaseReader::new(file_name, input)?;
    let mut writer = BufWriter::new(writer);
    let written = write_cases(reader, &mut writer, flush);
    let flushed = writer.flush();
    let count = written?;
    flushed?;
    log::info!("Solved {count} test case(s).");
    Ok(count)
}

fn write_cases<W: Write>(
    reader: CaseReader<'_>,
    writer: &mut W,
    flush: FlushPolicy,
) -> Result<usize, Error> {
    let mut count = 0;
    for (i, case) in reader.enumerate() {
        let result = solve_case(i + 1, &case?)?;
        writeln!(writer, "{result}")?;
        if flush == FlushPolicy::EachCase {
            writer.flush()?;
        }
        count += 1;
    }
    Ok(count)
}
