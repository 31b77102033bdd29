pub use modsum_judge as judge;
pub use modsum_number as number;
pub use modsum_parser as parser;
pub use modsum_parser_util as parser_util;
pub use modsum_solver as solver;

pub use modsum_judge::Verdict;
pub use modsum_parser::{Problem, TestCase};
pub use modsum_solver::{CaseResult, Solve};

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// The path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the whole input from `path`, or from standard input if the path
/// is [`STDIN_PATH`].
pub fn read_input(path: &str) -> io::Result<String> {
    if path == STDIN_PATH {
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        Ok(input)
    } else {
        log::debug!("Reading input from {path}");
        fs::read_to_string(path)
    }
}

/// Human-readable name for the input at `path`, used in diagnostics.
pub fn input_name(path: &str) -> &str {
    if path == STDIN_PATH {
        "<stdin>"
    } else {
        path
    }
}

pub fn buffered_write_file<R>(
    path: &Path,
    do_write: impl FnOnce(&mut BufWriter<File>) -> R,
) -> Result<R, io::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    let result = do_write(&mut writer);
    writer.flush()?;

    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "1\n1 100\n99\n").unwrap();
        let path = path.to_string_lossy().to_string();
        assert_eq!(read_input(&path).unwrap(), "1\n1 100\n99\n");
        assert_eq!(input_name(&path), path);
        assert_eq!(input_name(STDIN_PATH), "<stdin>");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(read_input(&path.to_string_lossy()).is_err());
    }

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let count = buffered_write_file(&path, |w| solver::run(None, "1\n3 5\n1 2 3\n", w))
            .unwrap()
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Case #1: 1\n");
    }
}
