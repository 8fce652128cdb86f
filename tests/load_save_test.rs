use basic::lang::ErrorCode;
use basic::mach::{load_file, save_file, Halt, Limits, Runtime};
use std::fs;

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("count.bas");
    let mut r = Runtime::default();
    r.enter("20 PRINT  I");
    r.enter("10 FOR I=1 TO 2");
    r.enter("30 NEXT I");
    save_file(&r.get_listing(), &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "10 FOR I=1 TO 2\n20 PRINT  I\n30 NEXT I\n"
    );
    let (listing, dropped) = load_file(&path, Limits::default()).unwrap();
    assert!(dropped.is_empty());
    let mut r = Runtime::default();
    r.set_listing(listing);
    let t = r.run_to_halt();
    assert_eq!(t.output, "1\n2\n");
    assert_eq!(t.halt, Halt::Finished);
}

#[test]
fn test_load_applies_lines_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edit.bas");
    fs::write(&path, "30 PRINT 3\n\n10 PRINT 1\n30\n  20 PRINT 2\r\n").unwrap();
    let (listing, _) = load_file(&path, Limits::default()).unwrap();
    let lines: Vec<String> = listing.lines().map(|l| l.to_string()).collect();
    assert_eq!(lines, vec!["10 PRINT 1", "20 PRINT 2"]);
}

#[test]
fn test_load_replaces_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.bas");
    fs::write(&path, "10 PRINT 1\n").unwrap();
    let mut r = Runtime::default();
    r.enter("5 PRINT 0");
    r.enter("20 PRINT 2");
    let (listing, _) = load_file(&path, Limits::default()).unwrap();
    r.set_listing(listing);
    assert_eq!(r.run_to_halt().output, "1\n");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let e = load_file(dir.path().join("nope.bas"), Limits::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::FileNotFound);
}

#[test]
fn test_load_direct_statement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.bas");
    fs::write(&path, "10 PRINT 1\nPRINT 2\n").unwrap();
    let e = load_file(&path, Limits::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::DirectStatementInFile);
    assert_eq!(
        e.to_string(),
        "DIRECT STATEMENT IN FILE; In line 2 of the file. (Not BASIC line number)"
    );
}

#[test]
fn test_load_drops_lines_past_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bas");
    fs::write(&path, "10 END\n20 END\n30 END\n").unwrap();
    let limits = Limits {
        max_lines: 2,
        ..Limits::default()
    };
    let (listing, dropped) = load_file(&path, limits).unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].code(), ErrorCode::OutOfMemory);
    assert_eq!(dropped[0].line_number(), Some(30));
}

#[test]
fn test_save_empty_program() {
    let dir = tempfile::tempdir().unwrap();
    let r = Runtime::default();
    let path = dir.path().join("empty.bas");
    save_file(&r.get_listing(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    let (listing, dropped) = load_file(&path, Limits::default()).unwrap();
    assert!(listing.is_empty());
    assert!(dropped.is_empty());
}
