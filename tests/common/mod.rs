#![allow(dead_code)]
use minitran::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
        }
    }
    s
}

pub fn run_str(program: &str) -> String {
    let mut r = Runtime::default();
    r.enter(program).unwrap();
    exec(&mut r)
}
