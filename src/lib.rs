//! # TinyBASIC
//!
//! A small line-numbered BASIC with floating point variables,
//! one-letter arrays, `GOTO`, `IF THEN` and `FOR`/`NEXT` loops.
//!
//! Begin by opening a terminal and running the executable.
//! If you get the following, you have achieved success.
//! ```text
//! TinyBASIC - commands: LOAD SAVE LIST RUN NEW QUIT
//! BASIC> █
//! ```
//!
//! A program file may also be given on the command line,
//! in which case it is loaded, run once, and BASIC exits.
//! ```text
//! basic program.bas
//! ```
//!
//! The interpreter can be embedded through [`mach::Runtime`].
//! ```
//! let mut runtime = basic::mach::Runtime::default();
//! runtime.enter("10 FOR I=1 TO 3");
//! runtime.enter("20 PRINT I*I");
//! runtime.enter("30 NEXT I");
//! let transcript = runtime.run_to_halt();
//! assert_eq!(transcript.output, "1\n4\n9\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
