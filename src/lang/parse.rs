use super::{ast::*, token::*, Ident};
use log::{debug, trace};
use std::convert::TryFrom;

/// Classifies one line. Never fails: anything that is not a well formed
/// `WRITE`, assignment or `END` becomes `Statement::Ignored`.
pub fn parse(tokens: &[Token]) -> Statement {
    Parser::parse(tokens)
}

/// Parses a single term of an expression.
/// A term starting with a letter reads that variable, everything
/// else is read as a decimal integer and contributes 0 without digits.
pub fn parse_term(s: &str) -> Term {
    let s = s.trim();
    match s.chars().next() {
        Some(ch) if ch.is_ascii_alphabetic() => match Ident::try_from(ch) {
            Ok(var) => Term::Var(var),
            Err(_) => Term::Literal(0),
        },
        _ => Term::Literal(parse_integer(s)),
    }
}

fn parse_integer(s: &str) -> i32 {
    let mut chars = s.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    let mut digits = 0;
    let mut n: i32 = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        digits += 1;
        n = n.wrapping_mul(10).wrapping_add(d as i32);
    }
    if chars.peek().is_some() || (digits == 0 && !s.is_empty()) {
        debug!("MALFORMED TERM {:?}; READ AS ONLY ITS LEADING DIGITS", s);
    }
    if negative {
        n.wrapping_neg()
    } else {
        n
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Statement {
        let parse = Parser {
            tokens: Parser::skip_whitespace(tokens),
        };
        let statement = parse.statement();
        if statement == Statement::Ignored && !parse.tokens.is_empty() {
            let text: String = parse.tokens.iter().map(|t| t.to_string()).collect();
            debug!("MALFORMED STATEMENT {:?}", text);
        }
        statement
    }

    fn skip_whitespace(tokens: &[Token]) -> &[Token] {
        match tokens.iter().position(|t| !t.is_whitespace()) {
            Some(start) => &tokens[start..],
            None => &[],
        }
    }

    fn statement(&self) -> Statement {
        if let Some(Token::Word(Word::Write)) = self.tokens.first() {
            return self.write();
        }
        if let Some(eq) = self
            .tokens
            .iter()
            .position(|t| *t == Token::Operator(Operator::Equal))
        {
            return self.assign(eq);
        }
        if let Some(Token::Word(Word::End)) = self.tokens.first() {
            return Statement::End;
        }
        Statement::Ignored
    }

    fn write(&self) -> Statement {
        let operand = Parser::skip_whitespace(&self.tokens[1..]);
        let s = match operand.first() {
            Some(Token::Text(s)) => s,
            _ => return Statement::Ignored,
        };
        let mut chars = s.chars();
        let var = match chars.next().map(|ch: char| Ident::try_from(ch)) {
            Some(Ok(var)) => var,
            _ => return Statement::Ignored,
        };
        match chars.next() {
            Some(ch) if ch.is_ascii_alphanumeric() => Statement::Ignored,
            _ => Statement::Write(var),
        }
    }

    fn assign(&self, eq: usize) -> Statement {
        let target: Vec<&Token> = self.tokens[..eq]
            .iter()
            .filter(|t| !t.is_whitespace())
            .collect();
        let var = match target.as_slice() {
            [Token::Text(s)] => match Ident::try_from(s.as_str()) {
                Ok(var) => var,
                Err(_) => return Statement::Ignored,
            },
            _ => return Statement::Ignored,
        };
        Statement::Assign(var, Parser::expression(&self.tokens[eq + 1..]))
    }

    fn expression(tokens: &[Token]) -> Expression {
        if Parser::skip_whitespace(tokens).is_empty() {
            return Expression::default();
        }
        let terms = tokens
            .split(|t| *t == Token::Operator(Operator::Plus))
            .map(|group| {
                let text: String = group.iter().map(|t| t.to_string()).collect();
                let term = parse_term(&text);
                trace!("TERM {:?} => {:?}", text, term);
                term
            })
            .collect();
        Expression::new(terms)
    }
}
