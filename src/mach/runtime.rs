use super::{Listing, Operation, Var};
use crate::lang::{ast::Statement, Error, Ident};
use log::{debug, info, log_enabled, trace, Level};

/// ## Runtime events
///
/// `execute` returns after printing, running out of cycles,
/// or when the program is finished.

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Running,
    Halted,
}

impl Default for State {
    fn default() -> State {
        State::Running
    }
}

/// ## Virtual machine
///
/// Owns one program and its variables for a single execution.

#[derive(Debug, Default)]
pub struct Runtime {
    listing: Listing,
    vars: Var,
    pc: usize,
    state: State,
}

impl Runtime {
    pub fn new(listing: Listing) -> Runtime {
        Runtime {
            listing,
            vars: Var::new(),
            pc: 0,
            state: State::Running,
        }
    }

    /// Appends source text to the program.
    pub fn enter(&mut self, s: &str) -> Result<(), Error> {
        self.listing.load_str(s)
    }

    pub fn var(&self, var: Ident) -> i32 {
        self.vars.fetch(var)
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    fn halt(&mut self) {
        self.state = State::Halted;
        if log_enabled!(Level::Trace) {
            for (var, value) in self.vars.iter().filter(|(_, value)| *value != 0) {
                trace!("{} = {}", var, value);
            }
        }
    }

    /// Runs up to `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut print = String::new();
        for _ in 0..cycles {
            if self.is_halted() {
                break;
            }
            let statement = match self.listing.line(self.pc) {
                Some(line) => line.ast(),
                None => {
                    info!("program finished after {} lines", self.pc);
                    self.halt();
                    break;
                }
            };
            debug!("{:>4}: {:?}", self.pc, statement);
            self.pc += 1;
            match statement {
                Statement::Write(var) => {
                    print.push_str(&format!("{}\n", self.vars.fetch(var)));
                }
                Statement::Assign(var, expr) => {
                    let value = Operation::evaluate(&expr, &self.vars);
                    self.vars.store(var, value);
                }
                Statement::End => {
                    info!("END in line {}", self.pc - 1);
                    self.halt();
                }
                Statement::Ignored => {}
            }
        }
        if !print.is_empty() {
            Event::Print(print)
        } else if self.is_halted() {
            Event::Stopped
        } else {
            Event::Running
        }
    }
}
