use super::Ident;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Write(Ident),
    Assign(Ident, Expression),
    End,
    Ignored,
}

/// A sum of terms. The empty sum is zero.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Expression {
    pub terms: Vec<Term>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Term {
    Var(Ident),
    Literal(i32),
}

impl Expression {
    pub fn new(terms: Vec<Term>) -> Expression {
        Expression { terms }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Write(var) => write!(f, "WRITE {}", var),
            Assign(var, expr) => write!(f, "{} = {}", var, expr),
            End => write!(f, "END"),
            Ignored => Ok(()),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut terms = self.terms.iter();
        if let Some(term) = terms.next() {
            write!(f, "{}", term)?;
        }
        for term in terms {
            write!(f, " + {}", term)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::Literal(n) => write!(f, "{}", n),
        }
    }
}
