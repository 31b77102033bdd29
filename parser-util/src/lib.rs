//! Utils shared by the modsum input readers

#![deny(clippy::print_stdout)]

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRef {
    pub file_name: Option<Arc<str>>,
    pub file_contents: Option<Arc<str>>,
    pub start: usize,
    pub end: usize,
}

impl SourceRef {
    pub fn unknown() -> Self {
        Default::default()
    }

    /// 1-based line and column of the start of the reference, if the file
    /// contents are known.
    pub fn line_col(&self) -> Option<(usize, usize)> {
        let contents = self.file_contents.as_deref()?;
        let prefix = contents.get(..self.start)?;
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Some((line, prefix[line_start..].chars().count() + 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    source_ref: SourceRef,
    message: String,
}

impl Error {
    pub fn new(source_ref: SourceRef, message: impl Into<String>) -> Self {
        Self {
            source_ref,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_ref(&self) -> &SourceRef {
        &self.source_ref
    }

    pub fn output_to_stderr(&self) {
        use codespan_reporting::diagnostic::{Diagnostic, Label};
        use codespan_reporting::files::SimpleFiles;
        use codespan_reporting::term;
        use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

        let config = term::Config::default();
        let mut files = SimpleFiles::new();
        let file_name = self.source_ref.file_name.as_deref().unwrap_or("input");
        let contents = self.source_ref.file_contents.as_deref().unwrap_or_default();
        let file_id = files.add(file_name, contents);
        let diagnostic = Diagnostic::error()
            .with_message(&self.message)
            .with_labels(vec![Label::primary(
                file_id,
                self.source_ref.start..self.source_ref.end,
            )]);
        let mut writer = StandardStream::stderr(ColorChoice::Auto);
        if term::emit(&mut writer, &config, &files, &diagnostic).is_err() {
            eprintln!("{self}");
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self.source_ref.file_name.as_deref().unwrap_or("input");
        match self.source_ref.line_col() {
            Some((line, col)) => write!(f, "{file_name}:{line}:{col}: {}", self.message),
            None => write!(f, "{file_name}: {}", self.message),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience trait that outputs parser errors to stderr and panics.
/// Should be used mostly in tests.
pub trait UnwrapErrToStderr {
    type Inner;
    fn unwrap_err_to_stderr(self) -> Self::Inner;
}

impl<T> UnwrapErrToStderr for Result<T, Error> {
    type Inner = T;

    fn unwrap_err_to_stderr(self) -> Self::Inner {
        match self {
            Ok(r) => r,
            Err(err) => {
                err.output_to_stderr();
                panic!("Parse error.");
            }
        }
    }
}
