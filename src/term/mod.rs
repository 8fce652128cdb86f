extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::Args;
use ansi_term::Style;
use basic::lang::{Error, LineNumber};
use basic::mach::{load_file, save_file, Event, Halt, Limits, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;

const BANNER: &str = "TinyBASIC - commands: LOAD SAVE LIST RUN NEW QUIT";

/// Returns the process exit status.
pub fn main(args: Args) -> i32 {
    let limits = args.limits();
    let mut runtime = Runtime::with_limits(limits);
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "Ctrl-C handler not installed");
    }
    match args.file {
        Some(path) => batch(&mut runtime, &path, limits),
        None => match main_loop(&mut runtime, limits) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        },
    }
}

/// Loads one program, runs it once, and reports failure in the status.
fn batch(runtime: &mut Runtime, path: &Path, limits: Limits) -> i32 {
    let listing = match load_file(path, limits) {
        Ok((listing, dropped)) => {
            for error in dropped {
                eprintln!("{}", error);
            }
            listing
        }
        Err(error) => {
            eprintln!("{}", error);
            eprintln!("Failed to load {}", path.display());
            return 1;
        }
    };
    runtime.set_listing(listing);
    runtime.run();
    loop {
        match runtime.execute() {
            Event::Print(s) => print!("{}", s),
            Event::Diagnostic(error) => eprintln!("{}", error),
            Event::Halted(Halt::End) | Event::Halted(Halt::Finished) | Event::Stopped => {
                return 0
            }
            Event::Halted(Halt::Break(line)) => {
                eprintln!("BREAK IN {}", line);
                return 1;
            }
            Event::Halted(Halt::Error(error)) => {
                eprintln!("{}", error);
                return 1;
            }
            _ => {}
        }
    }
}

fn main_loop(runtime: &mut Runtime, limits: Limits) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    command.set_prompt("BASIC> ")?;
    command.write_fmt(format_args!("{}\n", BANNER))?;

    loop {
        match runtime.execute() {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.get_listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Diagnostic(error) => write_error(&command, &error)?,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    write_error(&command, error)?;
                }
            }
            Event::List(lines) => {
                for line in lines {
                    command.write_fmt(format_args!("{}\n", line))?;
                }
            }
            Event::Load(s) => match load_file(&s, limits) {
                Ok((listing, dropped)) => {
                    for error in dropped.iter() {
                        write_error(&command, error)?;
                    }
                    runtime.set_listing(listing);
                }
                Err(error) => write_error(&command, &error)?,
            },
            Event::Save(s) => {
                if let Err(error) = save_file(&runtime.get_listing(), &s) {
                    write_error(&command, &error)?;
                }
            }
            Event::Halted(Halt::Error(error)) => write_error(&command, &error)?,
            Event::Halted(Halt::Break(line)) => {
                command.write_fmt(format_args!("BREAK IN {}\n", line))?;
            }
            Event::Halted(Halt::End) | Event::Halted(Halt::Finished) => {}
            Event::Quit => break,
        }
    }
    Ok(())
}

fn write_error<T: Terminal>(command: &Interface<T>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Tab after a line number brings back that line for editing.
struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let index = self.listing.find_index(num)?;
        let line = self.listing.get(index)?;
        let mut comp = Completion::simple(line.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
