pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod roman;
pub(crate) mod sort;

use std::io::{self, BufRead};

/// Read titles one per line, skipping blank lines.
pub(crate) fn read_titles(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            titles.push(line);
        }
    }
    Ok(titles)
}
