//! Splitting of output files into rows, tokens and cases.

/// The rows of one file, each row being its non-empty tokens.
pub type Rows<'a> = Vec<Vec<&'a str>>;

/// Converts a block of text into rows of tokens.
///
/// Tabs separate tokens like spaces, carriage returns separate rows like
/// line feeds, and blank rows are dropped. Returns None if the text
/// contains any character outside the printable ASCII range other than
/// these separators.
pub fn tokenize(text: &str) -> Option<Rows<'_>> {
    if !text
        .chars()
        .all(|c| matches!(c, ' '..='~' | '\t' | '\r' | '\n'))
    {
        return None;
    }
    Some(
        text.split(['\n', '\r'])
            .map(|row| {
                row.split([' ', '\t'])
                    .filter(|token| !token.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect(),
    )
}

/// Tokenizes `text` and splits it by case labels.
///
/// A row starting with `case` (in any capitalization) followed by a token
/// starting with `#` is a label row and must read `case #<k>:` for the next
/// case number `k`. The remaining tokens of a label row form the first row
/// of that case; the following rows up to the next label belong to it too.
///
/// Exactly `num_cases` cases must be present. On failure, a message
/// describing the problem is returned.
pub fn split_cases(text: &str, num_cases: usize) -> Result<Vec<Rows<'_>>, String> {
    let rows = tokenize(text).ok_or_else(|| "Invalid or non-ASCII characters.".to_string())?;

    let mut cases: Vec<Rows> = vec![];
    for row in rows {
        if row.len() >= 2 && row[0].eq_ignore_ascii_case("case") && row[1].starts_with('#') {
            let expected_case = cases.len() + 1;
            if row[1] != format!("#{expected_case}:") {
                return Err(format!(
                    "Expected \"case #{expected_case}:\", found \"{} {}\".",
                    row[0], row[1]
                ));
            }
            if expected_case > num_cases {
                return Err("Too many cases.".to_string());
            }
            cases.push(vec![row[2..].to_vec()]);
        } else {
            match cases.last_mut() {
                Some(case) => case.push(row),
                None => return Err("File does not begin with \"case #1:\".".to_string()),
            }
        }
    }

    if cases.len() < num_cases {
        return Err("Too few cases.".to_string());
    }
    Ok(cases)
}
