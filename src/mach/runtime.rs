use super::{format_number, Address, Eval, Limits, Listing, Stack, Var};
use crate::error;
use crate::lang::ast::*;
use crate::lang::token::Word;
use crate::lang::{Column, Error, ErrorCode, Ident, Line, LineNumber, Slot};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime
///
/// One interpreter session: the stored program, variable memory,
/// active `FOR` loops and the program counter. Input goes in through
/// [`enter`](Runtime::enter) and everything observable comes back out
/// of [`execute`](Runtime::execute) as an [`Event`].

pub struct Runtime {
    listing: Listing,
    limits: Limits,
    var: Var,
    for_stack: Stack<Frame>,
    pc: Option<Address>,
    diagnostics: Vec<Error>,
    events: VecDeque<Event>,
    interrupted: Arc<AtomicBool>,
}

/// An active `FOR` loop.
#[derive(Debug, Clone, Copy)]
struct Frame {
    slot: Slot,
    limit: f64,
    step: f64,
    resume: Address,
}

enum Flow {
    Next,
    Jump(Address),
    End,
}

/// Events for the user interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One line of program output, newline included.
    Print(String),
    /// A failed array read. The run continues with a value of zero.
    Diagnostic(Error),
    Errors(Vec<Error>),
    List(Vec<String>),
    Load(String),
    Save(String),
    Halted(Halt),
    Quit,
    Stopped,
}

/// Why a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    End,
    Finished,
    Break(LineNumber),
    Error(Error),
}

/// Everything a run produced, collected by [`Runtime::run_to_halt`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub output: String,
    pub diagnostics: Vec<Error>,
    pub halt: Halt,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_limits(Limits::default())
    }
}

impl Runtime {
    pub fn with_limits(limits: Limits) -> Runtime {
        Runtime {
            listing: Listing::new(limits),
            limits,
            var: Var::new(limits.max_array_len),
            for_stack: Stack::new(ErrorCode::ForStackOverflow, limits.max_for_depth),
            pc: None,
            diagnostics: vec![],
            events: VecDeque::new(),
            interrupted: Arc::default(),
        }
    }

    /// Accepts one line of user input. Returns true when the line
    /// is worth keeping in history.
    pub fn enter(&mut self, string: &str) -> bool {
        let string = string.trim();
        if string.is_empty() {
            return false;
        }
        self.stop();
        if string.len() > self.limits.max_line_len {
            self.events
                .push_back(Event::Errors(vec![error!(LineBufferOverflow)]));
            return true;
        }
        if string.starts_with(|c: char| c.is_ascii_digit()) {
            if let Err(error) = self.listing.load_str(string) {
                self.events.push_back(Event::Errors(vec![error]));
            }
        } else {
            self.command(string);
        }
        true
    }

    fn command(&mut self, string: &str) {
        let mut words = string.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_uppercase();
        let argument = words.next().map(str::to_string);
        let event = match (command.as_str(), argument) {
            ("RUN", _) => {
                self.run();
                return;
            }
            ("LIST", _) => Event::List(self.listing.lines().map(Line::to_string).collect()),
            ("NEW", _) => {
                self.new_program();
                return;
            }
            ("LOAD", Some(path)) => Event::Load(path),
            ("SAVE", Some(path)) => Event::Save(path),
            ("LOAD", None) | ("SAVE", None) => Event::Errors(vec![error!(SyntaxError;
                &format!("USAGE: {} FILENAME", command))]),
            ("QUIT", _) | ("EXIT", _) => Event::Quit,
            _ => Event::Errors(vec![error!(UnknownCommand; &command)]),
        };
        self.events.push_back(event);
    }

    /// Resets variables, arrays and loops, then starts at the first line.
    pub fn run(&mut self) {
        self.stop();
        self.var.clear();
        self.for_stack.clear();
        self.interrupted.store(false, Ordering::SeqCst);
        debug!(lines = self.listing.len(), "run");
        self.pc = Some(0);
    }

    /// Clears the program and all run state.
    pub fn new_program(&mut self) {
        self.stop();
        self.listing.clear();
        self.var.clear();
        self.for_stack.clear();
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.stop();
        self.listing = listing;
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Setting the flag stops a run before its next statement.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Runs the stored program to its end and collects what it produced.
    pub fn run_to_halt(&mut self) -> Transcript {
        self.events.clear();
        self.run();
        let mut output = String::new();
        let mut diagnostics = vec![];
        loop {
            match self.execute() {
                Event::Print(s) => output.push_str(&s),
                Event::Diagnostic(error) => diagnostics.push(error),
                Event::Halted(halt) => {
                    return Transcript {
                        output,
                        diagnostics,
                        halt,
                    }
                }
                Event::Stopped => {
                    return Transcript {
                        output,
                        diagnostics,
                        halt: Halt::Finished,
                    }
                }
                _ => {}
            }
        }
    }

    /// Runs until there is something to report.
    pub fn execute(&mut self) -> Event {
        loop {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            let pc = match self.pc {
                Some(pc) => pc,
                None => return Event::Stopped,
            };
            let listing = self.listing.clone();
            let line = match listing.get(pc) {
                Some(line) => line,
                None => {
                    self.halt(Halt::Finished);
                    continue;
                }
            };
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.halt(Halt::Break(line.number()));
                continue;
            }
            trace!(line = line.number(), pc, "exec");
            let flow = match line.statement() {
                Ok(statement) => self
                    .execute_statement(pc, line.number(), statement)
                    .map_err(|e| locate(e, line.number(), &statement.column())),
                Err(error) => Err(error.clone()),
            };
            self.flush_diagnostics(line.number());
            match flow {
                Ok(Flow::Next) => self.pc = Some(pc + 1),
                Ok(Flow::Jump(addr)) => {
                    trace!(from = pc, to = addr, "jump");
                    self.pc = Some(addr);
                }
                Ok(Flow::End) => self.halt(Halt::End),
                Err(error) => self.halt(Halt::Error(error)),
            }
        }
    }

    fn stop(&mut self) {
        if self.pc.take().is_some() {
            debug!("run abandoned");
        }
    }

    fn halt(&mut self, halt: Halt) {
        debug!(?halt, "halt");
        self.pc = None;
        self.events.push_back(Event::Halted(halt));
    }

    fn flush_diagnostics(&mut self, line_number: LineNumber) {
        for error in self.diagnostics.drain(..) {
            let error = match error.line_number() {
                Some(_) => error,
                None => error.in_line_number(line_number),
            };
            self.events.push_back(Event::Diagnostic(error));
        }
    }

    fn eval(&mut self) -> Eval<'_> {
        Eval::new(&self.var, &mut self.diagnostics)
    }

    fn execute_statement(
        &mut self,
        pc: Address,
        line_number: LineNumber,
        statement: &Statement,
    ) -> Result<Flow> {
        match statement {
            Statement::Dim(_, dims) => self.r#dim(dims),
            Statement::End(_) => Ok(Flow::End),
            Statement::For(_, ident, from, to, step) => {
                self.r#for(pc, ident, from, to, step.as_ref())
            }
            Statement::Goto(_, target) => self.jump(*target),
            Statement::If(_, cond, target) => self.r#if(cond, *target),
            Statement::Let(_, var, expr) => self.r#let(var, expr),
            Statement::Next(_, ident) => self.r#next(pc, ident.as_ref()),
            Statement::Print(_, printable) => self.r#print(line_number, printable),
        }
    }

    fn jump(&self, target: LineNumber) -> Result<Flow> {
        match self.listing.find_index(target) {
            Some(addr) => Ok(Flow::Jump(addr)),
            None => Err(error!(UndefinedLine; &format!("LINE {} NOT FOUND", target))),
        }
    }

    fn r#dim(&mut self, dims: &[Dimension]) -> Result<Flow> {
        for dim in dims {
            let bound = self.eval().expression(&dim.bound);
            self.var
                .dimension_array(dim.ident.letter(), bound)
                .map_err(|e| e.in_column(&dim.col))?;
        }
        Ok(Flow::Next)
    }

    fn r#for(
        &mut self,
        pc: Address,
        ident: &Ident,
        from: &Expression,
        to: &Expression,
        step: Option<&Expression>,
    ) -> Result<Flow> {
        let mut eval = self.eval();
        let start = eval.expression(from);
        let limit = eval.expression(to);
        let step = match step {
            Some(expr) => eval.expression(expr),
            None => 1.0,
        };
        let step = if step == 0.0 { 1.0 } else { step };
        self.var.store(ident.slot(), start);
        if (step > 0.0 && start > limit) || (step < 0.0 && start < limit) {
            return match self.matching_next(pc + 1) {
                Some(addr) => Ok(Flow::Jump(addr + 1)),
                None => Err(error!(ForWithoutNext)),
            };
        }
        self.for_stack.push(Frame {
            slot: ident.slot(),
            limit,
            step,
            resume: pc,
        })?;
        Ok(Flow::Next)
    }

    /// Finds the `NEXT` that closes a loop by counting the `FOR` and
    /// `NEXT` lines that follow it.
    fn matching_next(&self, from: Address) -> Option<Address> {
        let mut depth = 1;
        for (addr, line) in self.listing.lines().enumerate().skip(from) {
            match line.keyword() {
                Some(Word::For) => depth += 1,
                Some(Word::Next) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(addr);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn r#if(&mut self, cond: &Condition, target: Option<LineNumber>) -> Result<Flow> {
        let truth = self.eval().condition(cond);
        match target {
            Some(target) if truth => self.jump(target),
            _ => Ok(Flow::Next),
        }
    }

    fn r#let(&mut self, var: &Variable, expr: &Expression) -> Result<Flow> {
        match var {
            Variable::Unary(_, ident) => {
                let value = self.eval().expression(expr);
                self.var.store(ident.slot(), value);
            }
            Variable::Array(col, ident, index) => {
                let index = self.eval().expression(index);
                let value = self.eval().expression(expr);
                self.var
                    .store_array(ident.letter(), index, value)
                    .map_err(|e| e.in_column(col))?;
            }
        }
        Ok(Flow::Next)
    }

    fn r#next(&mut self, pc: Address, ident: Option<&Ident>) -> Result<Flow> {
        let frame = match self.for_stack.last() {
            Some(frame) => *frame,
            None => return Err(error!(NextWithoutFor)),
        };
        if let Some(ident) = ident {
            if ident.slot() != frame.slot {
                return Err(error!(NextVariableMismatch; &format!("NEXT {}", ident)));
            }
        }
        let value = self.var.fetch(frame.slot) + frame.step;
        self.var.store(frame.slot, value);
        if (frame.step > 0.0 && value <= frame.limit) || (frame.step < 0.0 && value >= frame.limit)
        {
            trace!(pc, resume = frame.resume, "loop");
            return Ok(Flow::Jump(frame.resume + 1));
        }
        self.for_stack.pop()?;
        Ok(Flow::Next)
    }

    fn r#print(&mut self, line_number: LineNumber, printable: &Printable) -> Result<Flow> {
        let mut s = match printable {
            Printable::Text(_, text) => text.to_string(),
            Printable::Value(expr) => format_number(self.eval().expression(expr)),
        };
        s.push('\n');
        self.flush_diagnostics(line_number);
        self.events.push_back(Event::Print(s));
        Ok(Flow::Next)
    }
}

fn locate(error: Error, line_number: LineNumber, column: &Column) -> Error {
    let error = if error.column() == (0..0) {
        error.in_column(column)
    } else {
        error
    };
    match error.line_number() {
        Some(_) => error,
        None => error.in_line_number(line_number),
    }
}
