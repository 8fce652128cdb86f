//! # TinyBASIC
//!
//! A line-numbered BASIC with a classic command loop.
//!

mod term;

use basic::mach::Limits;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "basic", version, about = "TinyBASIC interpreter")]
pub struct Args {
    /// Program to load and run once instead of starting the prompt
    pub file: Option<PathBuf>,

    /// Most numbered lines a program may hold
    #[arg(long, default_value_t = Limits::default().max_lines)]
    pub max_lines: usize,

    /// Most FOR loops active at once
    #[arg(long, default_value_t = Limits::default().max_for_depth)]
    pub max_for_depth: usize,
}

impl Args {
    pub fn limits(&self) -> Limits {
        Limits {
            max_lines: self.max_lines,
            max_for_depth: self.max_for_depth,
            ..Limits::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    let filter = EnvFilter::try_from_env("BASIC_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    std::process::exit(term::main(args));
}
