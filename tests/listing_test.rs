mod common;
use common::*;
use minitran::lang::ErrorCode;
use minitran::mach::{Limits, Listing, Runtime};
use std::io::Write;

fn program_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_run() {
    let file = program_file("C sum\nA = 5\n\nB = A + 10\nWRITE B\nEND\n");
    let listing = Listing::load(file.path()).unwrap();
    assert_eq!(listing.len(), 4);
    let mut r = Runtime::new(listing);
    assert_eq!(exec(&mut r), "15\n");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let e = Listing::load(dir.path().join("missing.mt")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::FileOpen);
    assert!(e.to_string().starts_with("CAN'T OPEN FILE; "));
}

#[test]
fn test_load_with_limits() {
    let file = program_file("A = 1\nB = 2\nC three\nD = 4\n");
    let limits = Limits {
        max_lines: 2,
        ..Limits::default()
    };
    let e = Listing::load_with(file.path(), limits).unwrap_err();
    assert_eq!(e.code(), ErrorCode::CapacityExceeded);
    assert_eq!(e.to_string(), "CAPACITY EXCEEDED IN 4; MORE THAN 2 LINES");
}

#[test]
fn test_default_line_limit() {
    let mut s = String::new();
    for _ in 0..100 {
        s.push_str("A = A + 1\n");
    }
    s.push_str("C comments do not count\n");
    assert_eq!(Listing::load(program_file(&s).path()).unwrap().len(), 100);
    s.push_str("WRITE A\n");
    let e = Listing::load(program_file(&s).path()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::CapacityExceeded);
    assert_eq!(e.line_number(), Some(102));
}

#[test]
fn test_default_line_length() {
    let ok = format!("A = {}\n", "0".repeat(251));
    assert!(Listing::load(program_file(&ok).path()).is_ok());
    let long = format!("A = {}\n", "0".repeat(252));
    let e = Listing::load(program_file(&long).path()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::CapacityExceeded);
    assert_eq!(e.line_number(), Some(1));
}

#[test]
fn test_crlf_file() {
    let file = program_file("A = 2\r\n\r\nWRITE A\r\nEND\r\n");
    let listing = Listing::load(file.path()).unwrap();
    assert_eq!(listing.len(), 3);
    assert_eq!(exec(&mut Runtime::new(listing)), "2\n");
}
