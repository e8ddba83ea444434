use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    MinitranLexer::lex(s)
}

fn is_minitran_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn is_minitran_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

struct MinitranLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> MinitranLexer<'a> {
    fn whitespace(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars.next_if(|c| is_minitran_whitespace(*c)) {
            s.push(ch);
        }
        Some(Token::Whitespace(s))
    }

    fn operator(&mut self) -> Option<Token> {
        let ch = self.chars.next()?;
        Operator::from_char(ch).map(Token::Operator)
    }

    fn text(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self
            .chars
            .next_if(|c| !is_minitran_whitespace(*c) && !is_minitran_operator(*c))
        {
            s.push(ch);
        }
        Some(Token::Text(s))
    }
}

impl<'a> Iterator for MinitranLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_minitran_whitespace(*pk) {
            return self.whitespace();
        }
        if is_minitran_operator(*pk) {
            return self.operator();
        }
        self.text()
    }
}

impl<'a> MinitranLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let body = s.trim_start_matches(is_minitran_whitespace);
        let mut tokens = vec![];
        if body.len() < s.len() {
            tokens.push(Token::Whitespace(s[..s.len() - body.len()].to_string()));
        }
        let mut rest = body;
        if let Some(word) = Word::ALL.iter().find(|w| body.starts_with(w.as_str())) {
            tokens.push(Token::Word(*word));
            rest = &body[word.as_str().len()..];
        }
        tokens.extend(MinitranLexer {
            chars: rest.chars().peekable(),
        });
        MinitranLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}
