use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    engine::Summarizer,
    error::LedgerError,
    types::{row::RowOutcome, summary::Summary},
};

pub const HEADER_LINES: usize = 3;
pub const DELIMITER: u8 = b';';

pub fn summarize_path<P: AsRef<Path>>(path: P) -> Result<Summary, LedgerError> {
    let file = File::open(path)?;
    summarize_reader(BufReader::new(file))
}

/// Skips the metadata header, then feeds every remaining line to a
/// [`Summarizer`]. Fields are split on `;` with no quote handling, so a
/// line yields exactly the pieces `str::split` would give after trimming.
pub fn summarize_reader<R: BufRead>(mut reader: R) -> Result<Summary, LedgerError> {
    skip_header(&mut reader, HEADER_LINES)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut summarizer = Summarizer::new();
    let mut record = csv::StringRecord::new();

    while rdr.read_record(&mut record)? {
        let fields = trimmed_fields(&record);

        if let RowOutcome::Skipped(reason) = summarizer.process_row(&fields) {
            let line = record.position().map_or(0, |pos| pos.line() as usize) + HEADER_LINES;
            debug!("skipping line {line}: {reason}");
        }
    }

    Ok(summarizer.finish())
}

/// Discards `lines` lines. Blank lines count. A line ends at `\n`, `\r` or
/// `\r\n`, the same terminators the data reader accepts.
pub fn skip_header<R: BufRead>(reader: &mut R, lines: usize) -> Result<(), LedgerError> {
    let mut buf = Vec::new();

    for found in 0..lines {
        if !read_header_line(reader, &mut buf)? {
            return Err(LedgerError::MissingHeader {
                expected: lines,
                found,
            });
        }
        if let Err(err) = std::str::from_utf8(&buf) {
            return Err(io::Error::new(io::ErrorKind::InvalidData, err).into());
        }
    }

    Ok(())
}

// Returns false only at EOF with nothing read.
fn read_header_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();

    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(!buf.is_empty());
        }

        match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(idx) => {
                let terminator = available[idx];
                buf.extend_from_slice(&available[..idx]);
                reader.consume(idx + 1);

                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

// Whitespace around the whole line is dropped, not around each field.
fn trimmed_fields(record: &csv::StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    let last = fields.len().saturating_sub(1);

    if let Some(first) = fields.first_mut() {
        let field = *first;
        *first = field.trim_start();
    }
    if let Some(end) = fields.get_mut(last) {
        let field = *end;
        *end = field.trim_end();
    }

    fields
}
