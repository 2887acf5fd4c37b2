//! Normalizes completion text into CSV.
//!
//! The reply is split on `\n` into rows and on `,` into fields, then written
//! back with standard quoting. Rows may have different field counts and
//! nothing is removed, so prose around the table is carried through as rows.

use crate::{Error, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub fn reformat(text: &str) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::with_capacity(text.len() + text.len() / 8));

    for row in text.split('\n') {
        writer.write_record(row.split(','))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::internal(format!("Failed to flush CSV writer: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::internal(format!("CSV output is not valid UTF-8: {}", e)))
}
