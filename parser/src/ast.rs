//! Parsed form of an input file.

use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;
use modsum_number::Integer;

/// One count/divisor pair with its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub modulus: Integer,
    pub items: Vec<Integer>,
}

impl TestCase {
    pub fn new(modulus: Integer, items: Vec<Integer>) -> Self {
        Self { modulus, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// All test cases of an input file, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub cases: Vec<TestCase>,
}

impl Problem {
    pub fn num_cases(&self) -> usize {
        self.cases.len()
    }
}

impl FromIterator<TestCase> for Problem {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

/// Prints a test case in input format: the `N M` line followed by the items.
impl Display for TestCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{} {}", self.item_count(), self.modulus)?;
        write!(f, "{}", self.items.iter().format(" "))
    }
}

/// Prints the problem in canonical input format.
impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.num_cases())?;
        for case in &self.cases {
            writeln!(f, "{case}")?;
        }
        Ok(())
    }
}
