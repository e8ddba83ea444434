use super::Var;
use crate::lang::ast::{Expression, Term};
use log::trace;

pub struct Operation {}

impl Operation {
    /// Integer addition wraps around on overflow.
    pub fn add(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    pub fn term(term: &Term, vars: &Var) -> i32 {
        match term {
            Term::Var(var) => vars.fetch(*var),
            Term::Literal(n) => *n,
        }
    }

    pub fn evaluate(expr: &Expression, vars: &Var) -> i32 {
        expr.terms.iter().fold(0, |sum, term| {
            let value = Operation::term(term, vars);
            trace!("{} + {} ({})", sum, value, term);
            Operation::add(sum, value)
        })
    }
}
