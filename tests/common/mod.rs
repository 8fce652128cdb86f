use basic::mach::{Event, Halt, Runtime};

/// Drives the runtime until it is idle and renders every event.
pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Diagnostic(error) => s.push_str(&format!("?{}\n", error)),
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::List(lines) => {
                for line in lines {
                    s.push_str(&format!("{}\n", line));
                }
            }
            Event::Load(path) => s.push_str(&format!("LOAD {}\n", path)),
            Event::Save(path) => s.push_str(&format!("SAVE {}\n", path)),
            Event::Halted(Halt::Error(error)) => s.push_str(&format!("{}\n", error)),
            Event::Halted(Halt::Break(line)) => s.push_str(&format!("BREAK IN {}\n", line)),
            Event::Halted(_) => {}
            Event::Quit => s.push_str("QUIT\n"),
        }
    }
    s
}

/// Enters each line, then `RUN`.
pub fn run(runtime: &mut Runtime, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(line);
    }
    runtime.enter("RUN");
    exec(runtime)
}
