use super::{MAX_LINES, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, Line};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Bounds applied while loading a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_lines: usize,
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_lines: MAX_LINES,
            max_line_len: MAX_LINE_LEN,
        }
    }
}

/// ## The program
///
/// Retained source lines in file order. Comments and blank
/// lines never make it in here.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    source: Vec<Line>,
    limits: Limits,
    read: usize,
}

impl Listing {
    pub fn new(limits: Limits) -> Listing {
        Listing {
            source: vec![],
            limits,
            read: 0,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Listing> {
        Listing::load_with(path, Limits::default())
    }

    pub fn load_with<P: AsRef<Path>>(path: P, limits: Limits) -> Result<Listing> {
        let path = path.as_ref();
        let reader = match File::open(path) {
            Ok(file) => BufReader::new(file),
            Err(error) => {
                let msg = format!("{}: {}", path.display(), error);
                return Err(error!(FileOpen; msg));
            }
        };
        let listing = Listing::read(reader, limits)?;
        info!(
            "loaded {} lines from {} ({} discarded)",
            listing.len(),
            path.display(),
            listing.read - listing.len()
        );
        Ok(listing)
    }

    pub fn read<R: BufRead>(mut reader: R, limits: Limits) -> Result<Listing> {
        let mut listing = Listing::new(limits);
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => listing.push(&buf)?,
                Err(error) => {
                    return Err(error!(FileRead, listing.read + 1; error.to_string()));
                }
            }
        }
        Ok(listing)
    }

    /// Appends source text, one line at a time, with the same
    /// filtering and limits as reading a file.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        for line in s.split_inclusive('\n') {
            self.push(line)?;
        }
        Ok(())
    }

    fn push(&mut self, s: &str) -> Result<()> {
        self.read += 1;
        if Line::is_comment(s) || Line::is_blank(s) {
            debug!("discarding line {}: {:?}", self.read, s);
            return Ok(());
        }
        let len = s.trim_end_matches(&['\r', '\n'][..]).chars().count();
        if len > self.limits.max_line_len {
            let msg = format!("LINE LONGER THAN {} CHARACTERS", self.limits.max_line_len);
            return Err(error!(CapacityExceeded, self.read; msg));
        }
        if self.source.len() >= self.limits.max_lines {
            let msg = format!("MORE THAN {} LINES", self.limits.max_lines);
            return Err(error!(CapacityExceeded, self.read; msg));
        }
        self.source.push(Line::new(self.source.len(), s));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.source.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }
}
