use crate::mach::{Event, Halt, Runtime};


fn run(runtime: &mut Runtime) -> (String, Option<Halt>) {
    let mut s = String::new();
    let mut halt = None;
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Diagnostic(error) => s.push_str(&format!("?{}\n", error)),
            Event::Halted(h) => halt = Some(h),
            other => panic!("{:?}", other),
        }
    }
    (s, halt)
}

fn program(lines: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
    }
    r
}
