//! Line splitting and the stop-at-blank-line read loop.

use std::io::{self, BufRead};

const DELIMITER: char = ',';

/// Split one line into raw cells.
///
/// No quoting or escaping: every comma separates two cells, and cells keep
/// their surrounding whitespace.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Read rows until end of input or the first blank line.
///
/// A line that is empty or only whitespace ends the table; anything after
/// it is never tokenized. Lines end at `\n` or `\r\n`; a lone `\r` is
/// kept as cell text.
pub fn read_rows<R: BufRead>(reader: R) -> io::Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        rows.push(tokenize_line(&line));
    }

    Ok(rows)
}
