use crate::lang::ErrorCode;
use crate::mach::{Limits, Listing};

fn read(s: &str, limits: Limits) -> Result<Listing, crate::lang::Error> {
    Listing::read(s.as_bytes(), limits)
}

#[test]
fn test_comments_and_blanks_are_discarded() {
    let listing = read("C comment\n\nA = 1\n\r\nc = 2\nWRITE A\n", Limits::default()).unwrap();
    let lines: Vec<String> = listing.lines().map(|l| l.to_string()).collect();
    assert_eq!(lines, ["A = 1", "c = 2", "WRITE A"]);
    let numbers: Vec<usize> = listing.lines().map(|l| l.number()).collect();
    assert_eq!(numbers, [0, 1, 2]);
}

#[test]
fn test_lines_are_verbatim() {
    let listing = read("A = 1   \nEND", Limits::default()).unwrap();
    assert_eq!(listing.line(0).unwrap().text(), "A = 1   \n");
    assert_eq!(listing.line(1).unwrap().text(), "END");
    assert_eq!(listing.line(2), None);
}

#[test]
fn test_whitespace_line_is_retained() {
    let listing = read("   \nEND\n", Limits::default()).unwrap();
    assert_eq!(listing.len(), 2);
}

#[test]
fn test_too_many_lines() {
    let limits = Limits {
        max_lines: 2,
        ..Limits::default()
    };
    assert_eq!(read("C\nA = 1\n\nB = 2\n", limits).unwrap().len(), 2);
    let e = read("A = 1\nC\nB = 2\nD = 3\n", limits).unwrap_err();
    assert_eq!(e.code(), ErrorCode::CapacityExceeded);
    assert_eq!(e.line_number(), Some(4));
}

#[test]
fn test_line_too_long() {
    let limits = Limits {
        max_line_len: 5,
        ..Limits::default()
    };
    assert!(read("A = 1\r\n", limits).is_ok());
    let e = read("A = 1\nA = 10\n", limits).unwrap_err();
    assert_eq!(e.code(), ErrorCode::CapacityExceeded);
    assert_eq!(e.line_number(), Some(2));
}

#[test]
fn test_long_comment_is_not_checked() {
    let limits = Limits {
        max_line_len: 5,
        ..Limits::default()
    };
    assert!(read("C a rather long comment line\n", limits).is_ok());
}

#[test]
fn test_invalid_utf8() {
    let e = Listing::read(&b"A = 1\n\xff\xfe\n"[..], Limits::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::FileRead);
    assert_eq!(e.line_number(), Some(2));
}

#[test]
fn test_default_limits() {
    let limits = Limits::default();
    assert_eq!(limits.max_lines, 100);
    assert_eq!(limits.max_line_len, 255);
}
