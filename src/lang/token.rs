#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Whitespace(String),
    Word(Word),
    Operator(Operator),
    Text(String),
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Whitespace(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Text(s) => write!(f, "{}", s),
        }
    }
}

/// Keywords are only recognized at the start of a line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Write,
    End,
}

impl Word {
    pub const ALL: [Word; 2] = [Word::Write, Word::End];

    pub fn as_str(self) -> &'static str {
        match self {
            Word::Write => "WRITE",
            Word::End => "END",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Equal,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '=' => Some(Operator::Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operator::Plus => write!(f, "+"),
            Operator::Equal => write!(f, "="),
        }
    }
}
