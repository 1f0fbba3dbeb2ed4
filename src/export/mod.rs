//! CSV and flat-document export of filtered entry sets.
//!
//! Exports operate purely on the in-memory result of a query - they never
//! touch the store. The CSV export is standards-compliant (quoting and
//! escaping via the `csv` crate); the flat-document export is a Latin-1
//! encoded plain-text document, one block per entry, where characters outside
//! the encoding are substituted rather than failing the whole export.

use crate::constants::{CSV_HEADER, DATE_FORMAT_ISO, DOCUMENT_SUBSTITUTION_BYTE};
use crate::db::entries::JournalEntry;
use crate::errors::ExportError;
use tracing::debug;

/// Serializes entries to CSV with the header `Date,Sentiment,Entry,Tags`.
///
/// One row per entry; fields containing delimiters, quotes, or newlines are
/// quoted per RFC 4180.
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn csv_export(entries: &[JournalEntry]) -> Result<String, ExportError> {
    debug!("Exporting {} entries to CSV", entries.len());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        writer.write_record([
            entry.created_date.format(DATE_FORMAT_ISO).to_string(),
            entry.sentiment.as_str().to_string(),
            entry.body.clone(),
            entry.tags.join(","),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Serializes entries to a Latin-1 flat document.
///
/// One block per entry: Date, Sentiment, and Tags lines followed by the full
/// entry text, with blocks separated by a blank line. Characters outside
/// Latin-1 are substituted with `?` - the export is lossy for such input but
/// never fails for encoding reasons.
pub fn document_export(entries: &[JournalEntry]) -> Vec<u8> {
    debug!("Exporting {} entries to flat document", entries.len());

    let mut out = Vec::new();
    for entry in entries {
        let block = format!(
            "Date: {}\nSentiment: {}\nTags: {}\n{}\n\n",
            entry.created_date.format(DATE_FORMAT_ISO),
            entry.sentiment.as_str(),
            entry.tags.join(","),
            entry.body,
        );
        encode_latin1(&block, &mut out);
    }
    out
}

/// Appends the Latin-1 encoding of `text` to `out`, substituting unsupported
/// characters.
fn encode_latin1(text: &str, out: &mut Vec<u8>) {
    out.extend(text.chars().map(|c| {
        let code_point = c as u32;
        if code_point <= 0xFF {
            code_point as u8
        } else {
            DOCUMENT_SUBSTITUTION_BYTE
        }
    }));
}
