use super::ast::*;
use super::lex::*;
use super::parse::*;
use super::token::*;

/// One retained source line. `number` is its 0-based position in the
/// program; the text is kept exactly as read, terminator included.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    pub fn new<T: Into<String>>(number: usize, text: T) -> Line {
        Line {
            number,
            text: text.into(),
        }
    }

    /// Comment lines start with an uppercase `C` in the first column.
    pub fn is_comment(s: &str) -> bool {
        s.starts_with('C')
    }

    /// A line holding nothing but its terminator.
    pub fn is_blank(s: &str) -> bool {
        s.is_empty() || s == "\n" || s == "\r\n"
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> Vec<Token> {
        lex(&self.text)
    }

    pub fn ast(&self) -> Statement {
        parse(&self.tokens())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text.trim_end_matches(&['\r', '\n'][..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_is_uppercase_c_only() {
        assert!(Line::is_comment("C this is a comment\n"));
        assert!(Line::is_comment("C = 5"));
        assert!(!Line::is_comment("c = 5"));
        assert!(!Line::is_comment(" C indented"));
    }

    #[test]
    fn test_blank() {
        assert!(Line::is_blank("\n"));
        assert!(Line::is_blank("\r\n"));
        assert!(!Line::is_blank(" \n"));
    }

    #[test]
    fn test_display_drops_terminator() {
        let line = Line::new(3, "A = 1 + 2\r\n");
        assert_eq!(line.to_string(), "A = 1 + 2");
        assert_eq!(line.text(), "A = 1 + 2\r\n");
        assert_eq!(line.number(), 3);
    }
}
