use super::Limits;
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

/// The stored program, always sorted by line number.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<Vec<Line>>,
    limits: Limits,
}

impl Listing {
    pub fn new(limits: Limits) -> Listing {
        Listing {
            source: Arc::default(),
            limits,
        }
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Replaces a line with the same number or adds a new one.
    /// Adding beyond `max_lines` is refused and the line is dropped.
    pub fn insert(&mut self, line: Line) -> Result<(), Error> {
        match self.search(line.number()) {
            Ok(index) => Arc::make_mut(&mut self.source)[index] = line,
            Err(index) => {
                if self.source.len() >= self.limits.max_lines {
                    return Err(error!(OutOfMemory, line.number(); "PROGRAM FULL"));
                }
                Arc::make_mut(&mut self.source).insert(index, line);
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Line> {
        match self.search(ln) {
            Ok(index) => Some(Arc::make_mut(&mut self.source).remove(index)),
            Err(_) => None,
        }
    }

    /// Position of a line number in execution order.
    pub fn find_index(&self, ln: LineNumber) -> Option<usize> {
        self.search(ln).ok()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.source.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }

    fn search(&self, ln: LineNumber) -> Result<usize, usize> {
        self.source.binary_search_by_key(&ln, |line| line.number())
    }

    /// Applies one line of program text: `<number> <statement>` stores,
    /// a bare number deletes.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > self.limits.max_line_len {
            return Err(error!(LineBufferOverflow));
        }
        let (number, text) = split_line_number(line)?;
        if text.is_empty() {
            self.remove(number);
            Ok(())
        } else {
            self.insert(Line::new(number, text))
        }
    }
}

/// Splits leading digits from the rest of the text.
fn split_line_number(line: &str) -> Result<(LineNumber, &str), Error> {
    let line = line.trim_start();
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| line.len());
    if digits == 0 {
        return Err(error!(DirectStatementInFile));
    }
    match line[..digits].parse::<LineNumber>() {
        Ok(number) => Ok((number, line[digits..].trim())),
        Err(_) => Err(error!(SyntaxError)),
    }
}

/// Reads a program file. Lines that overflow the program are
/// returned alongside the listing, anything else stops the load.
pub fn load_file<P: AsRef<Path>>(path: P, limits: Limits) -> Result<(Listing, Vec<Error>), Error> {
    let mut listing = Listing::new(limits);
    let mut dropped = vec![];
    let reader = match File::open(path.as_ref()) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                std::io::ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
        };
        if line.trim().is_empty() {
            continue;
        }
        match listing.load_str(&line) {
            Ok(()) => {}
            Err(error) if error.code() == crate::lang::ErrorCode::OutOfMemory => {
                dropped.push(error)
            }
            Err(error) => {
                return Err(error.message(&format!(
                    "In line {} of the file. (Not BASIC line number)",
                    index + 1
                )))
            }
        }
    }
    tracing::debug!(path = %path.as_ref().display(), lines = listing.len(), "loaded");
    Ok((listing, dropped))
}

pub fn save_file<P: AsRef<Path>>(listing: &Listing, path: P) -> Result<(), Error> {
    let mut file = match File::create(path.as_ref()) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
    };
    for line in listing.lines() {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(InternalError; error.to_string().as_str()));
        }
    }
    tracing::debug!(path = %path.as_ref().display(), lines = listing.len(), "saved");
    Ok(())
}
