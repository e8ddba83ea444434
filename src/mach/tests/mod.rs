use crate::mach::{Event, Runtime};

mod listing_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
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
