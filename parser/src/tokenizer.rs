/// A whitespace-delimited token together with its byte span in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Splits the input at ASCII and Unicode whitespace.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        if start == self.input.len() {
            self.pos = start;
            return None;
        }
        let len = self.input[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.input.len() - start);
        let end = start + len;
        self.pos = end;
        Some(Token {
            text: &self.input[start..end],
            start,
            end,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans() {
        let tokens = Tokenizer::new("  12 3\r\n\t7\n").collect::<Vec<_>>();
        assert_eq!(
            tokens,
            vec![
                Token {
                    text: "12",
                    start: 2,
                    end: 4
                },
                Token {
                    text: "3",
                    start: 5,
                    end: 6
                },
                Token {
                    text: "7",
                    start: 9,
                    end: 10
                },
            ]
        );
    }

    #[test]
    fn empty() {
        assert_eq!(Tokenizer::new("").next(), None);
        assert_eq!(Tokenizer::new(" \n\n ").next(), None);
    }
}
