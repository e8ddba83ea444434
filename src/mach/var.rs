use crate::lang::Ident;

/// ## Variable memory
///
/// Exactly one 32-bit slot per letter, all starting at zero.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: [i32; Ident::COUNT],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var: Ident) -> i32 {
        self.vars[var.index()]
    }

    pub fn store(&mut self, var: Ident, value: i32) {
        self.vars[var.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ident, i32)> + '_ {
        Ident::ALL.iter().map(move |var| (*var, self.fetch(*var)))
    }
}
