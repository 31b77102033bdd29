//! Parser for modsum input files
//!
//! The input consists of the number of test cases `T`, followed by `T`
//! test cases, each being an item count `N`, a modulus `M` and `N` items.
//! All values are whitespace-separated; line breaks carry no meaning.

pub mod ast;
mod tokenizer;

pub use ast::{Problem, TestCase};
pub use tokenizer::{Token, Tokenizer};

use modsum_number::Integer;
use modsum_parser_util::{Error, SourceRef};

use std::sync::Arc;

pub struct ParserContext {
    file_name: Option<Arc<str>>,
    file_contents: Option<Arc<str>>,
}

impl ParserContext {
    pub fn new(file_name: Option<&str>, input: &str) -> Self {
        Self {
            file_name: file_name.map(|s| s.into()),
            file_contents: Some(input.into()),
        }
    }

    pub fn source_ref(&self, start: usize, end: usize) -> SourceRef {
        SourceRef {
            file_name: self.file_name.clone(),
            file_contents: self.file_contents.clone(),
            start,
            end,
        }
    }

    fn end_of_input(&self) -> SourceRef {
        let len = self.file_contents.as_deref().map_or(0, str::len);
        self.source_ref(len, len)
    }
}

/// Reads test cases lazily from an input file.
///
/// The number of test cases is read on construction; every call to `next`
/// reads one more case, so the cases before a malformed one can be
/// processed before the error is seen.
pub struct CaseReader<'a> {
    ctx: ParserContext,
    tokens: Tokenizer<'a>,
    num_cases: usize,
    next_case: usize,
    done: bool,
}

impl<'a> CaseReader<'a> {
    pub fn new(file_name: Option<&str>, input: &'a str) -> Result<Self, Error> {
        let ctx = ParserContext::new(file_name, input);
        let mut tokens = Tokenizer::new(input);
        let num_cases = read_count(&ctx, &mut tokens, "the number of test cases")?;
        log::debug!("Reading {num_cases} test case(s).");
        Ok(Self {
            ctx,
            tokens,
            num_cases,
            next_case: 1,
            done: false,
        })
    }

    /// The number of test cases declared in the input.
    pub fn num_cases(&self) -> usize {
        self.num_cases
    }

    fn read_case(&mut self, case: usize) -> Result<TestCase, Error> {
        let item_count = read_count(
            &self.ctx,
            &mut self.tokens,
            &format!("the item count of case #{case}"),
        )?;
        let modulus = read_integer(
            &self.ctx,
            &mut self.tokens,
            &format!("the modulus of case #{case}"),
        )?;
        let items = (1..=item_count)
            .map(|i| {
                read_integer(
                    &self.ctx,
                    &mut self.tokens,
                    &format!("item {i} of case #{case}"),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TestCase::new(modulus, items))
    }

    fn warn_on_trailing_input(&mut self) {
        if let Some(token) = self.tokens.next() {
            let source_ref = self.ctx.source_ref(token.start, token.end);
            let message = format!(
                "ignoring input after the last test case, starting at \"{}\"",
                token.text
            );
            log::warn!("{}", Error::new(source_ref, message));
        }
    }
}

impl Iterator for CaseReader<'_> {
    type Item = Result<TestCase, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.next_case > self.num_cases {
            self.warn_on_trailing_input();
            self.done = true;
            return None;
        }
        let case = self.next_case;
        self.next_case += 1;
        let result = self.read_case(case);
        self.done = result.is_err();
        Some(result)
    }
}

/// Parses a complete input file.
pub fn parse(file_name: Option<&str>, input: &str) -> Result<Problem, Error> {
    CaseReader::new(file_name, input)?.collect()
}

fn next_token<'a>(
    ctx: &ParserContext,
    tokens: &mut Tokenizer<'a>,
    what: &str,
) -> Result<Token<'a>, Error> {
    tokens.next().ok_or_else(|| {
        Error::new(
            ctx.end_of_input(),
            format!("expected {what}, found end of input"),
        )
    })
}

fn read_integer(ctx: &ParserContext, tokens: &mut Tokenizer, what: &str) -> Result<Integer, Error> {
    let token = next_token(ctx, tokens, what)?;
    token.text.parse::<Integer>().map_err(|_| {
        Error::new(
            ctx.source_ref(token.start, token.end),
            format!("invalid integer \"{}\" for {what}", token.text),
        )
    })
}

fn read_count(ctx: &ParserContext, tokens: &mut Tokenizer, what: &str) -> Result<usize, Error> {
    let token = next_token(ctx, tokens, what)?;
    token.text.parse::<usize>().map_err(|_| {
        Error::new(
            ctx.source_ref(token.start, token.end),
            format!("invalid count \"{}\" for {what}", token.text),
        )
    })
}
