//! CSV decoding of an uploaded file.

use thiserror::Error;

/// CSV parser failures.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A record's field count differs from the first record's.
    #[error("record on line {line}: wrong number of fields (expected {expected}, found {found})")]
    WrongFieldCount { line: u64, expected: u64, found: u64 },

    /// A `"` inside a field that did not open with one.
    #[error("parse error on line {line}, column {column}: bare \" in non-quoted field")]
    BareQuote { line: u64, column: u64 },

    /// A closing `"` followed by something other than a delimiter.
    #[error("parse error on line {line}, column {column}: extraneous \" in quoted field")]
    ExtraneousQuote { line: u64, column: u64 },

    #[error(transparent)]
    Csv(csv::Error),
}

impl From<csv::Error> for DecodeError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = err.kind() {
            return DecodeError::WrongFieldCount {
                line: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
                expected: *expected_len,
                found: *len,
            };
        }
        DecodeError::Csv(err)
    }
}

/// Parse `input` into rows of string cells.
///
/// Every record is data (no header row) and all records must have the same
/// number of fields. Blank lines are skipped, so empty input yields no rows.
/// Quotes are strict: a field either is fully quoted or contains no `"`.
pub fn decode(input: &[u8]) -> Result<Vec<Vec<String>>, DecodeError> {
    check_quotes(input)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);

    reader
        .records()
        .map(|record| {
            let record = record?;
            Ok(record.iter().map(str::to_owned).collect())
        })
        .collect()
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// Saw `"` inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted,
    /// Closed field followed by `\r`; only a line end may come next.
    Closed,
}

/// Reject quote placements the `csv` reader would otherwise keep as data.
///
/// Lines and columns are 1-based; columns count bytes.
fn check_quotes(input: &[u8]) -> Result<(), DecodeError> {
    use QuoteState::*;

    let mut state = FieldStart;
    let mut line = 1u64;
    let mut column = 0u64;

    for &byte in input {
        column += 1;
        state = match (state, byte) {
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, b'\n') => {
                line += 1;
                column = 0;
                Quoted
            }
            (Quoted, _) => Quoted,
            (QuoteInQuoted, b'"') => Quoted,
            (_, b',') => FieldStart,
            (_, b'\n') => {
                line += 1;
                column = 0;
                FieldStart
            }
            (QuoteInQuoted, b'\r') => Closed,
            (QuoteInQuoted | Closed, _) => {
                return Err(DecodeError::ExtraneousQuote { line, column });
            }
            (FieldStart, b'"') => Quoted,
            (FieldStart | Unquoted, b'"') => {
                return Err(DecodeError::BareQuote { line, column });
            }
            (FieldStart | Unquoted, _) => Unquoted,
        };
    }
    Ok(())
}
