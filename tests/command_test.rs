mod common;
use basic::lang::ErrorCode;
use basic::mach::{Event, Limits, Runtime};
use common::*;

#[test]
fn test_list_is_sorted() {
    let mut r = Runtime::default();
    r.enter("30 END");
    r.enter("10 PRINT 1");
    r.enter("20 PRINT  'TWO'");
    r.enter("10 PRINT 'ONE'");
    r.enter("list");
    assert_eq!(exec(&mut r), "10 PRINT 'ONE'\n20 PRINT  'TWO'\n30 END\n");
}

#[test]
fn test_number_alone_deletes() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("10");
    r.enter("15");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "20 PRINT 2\n");
}

#[test]
fn test_number_without_space() {
    let mut r = Runtime::default();
    r.enter("10PRINT 5");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT 5\n");
}

#[test]
fn test_new_clears_everything() {
    let mut r = Runtime::default();
    run(&mut r, &["10 X=5"]);
    r.enter("NEW");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
    assert!(r.get_listing().is_empty());
    r.enter("10 PRINT X");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_unknown_command() {
    let mut r = Runtime::default();
    r.enter("PRINT 1");
    assert_eq!(exec(&mut r), "UNKNOWN COMMAND; PRINT\n");
}

#[test]
fn test_blank_input_is_not_history() {
    let mut r = Runtime::default();
    assert!(!r.enter("   "));
    assert!(r.enter("LIST"));
    assert_eq!(r.execute(), Event::List(vec![]));
    assert_eq!(r.execute(), Event::Stopped);
}

#[test]
fn test_file_commands_are_events() {
    let mut r = Runtime::default();
    r.enter("load prog.bas");
    assert_eq!(r.execute(), Event::Load("prog.bas".to_string()));
    r.enter("SAVE out.bas");
    assert_eq!(r.execute(), Event::Save("out.bas".to_string()));
    r.enter("SAVE");
    assert_eq!(exec(&mut r), "SYNTAX ERROR; USAGE: SAVE FILENAME\n");
    r.enter("quit");
    assert_eq!(r.execute(), Event::Quit);
    r.enter("EXIT");
    assert_eq!(r.execute(), Event::Quit);
}

#[test]
fn test_program_full() {
    let mut r = Runtime::with_limits(Limits {
        max_lines: 2,
        ..Limits::default()
    });
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("30 PRINT 3");
    match r.execute() {
        Event::Errors(errors) => assert_eq!(errors[0].code(), ErrorCode::OutOfMemory),
        other => panic!("{:?}", other),
    }
    r.enter("20 PRINT 4");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n4\n");
}

#[test]
fn test_line_too_long() {
    let mut r = Runtime::default();
    r.enter(&format!("10 PRINT '{}'", "X".repeat(600)));
    assert_eq!(exec(&mut r), "LINE BUFFER OVERFLOW\n");
    assert!(r.get_listing().is_empty());
}

#[test]
fn test_entering_a_line_stops_a_run() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    r.enter("20 END");
    assert_eq!(r.execute(), Event::Stopped);
}
