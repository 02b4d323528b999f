//! Parse the detection pipeline's findings CSV

use crate::PiiError;
use recordsdesk_domain::{BoundingBox, PiiCategory, PiiFinding};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Header row the export always starts with
const EXPECTED_HEADER: &str =
    "recordId,fileName,pageNumber,piiType,confidence,x,y,width,height,text,reasoning";

/// Number of fields per row
const FIELD_COUNT: usize = 11;

/// Result of parsing a findings CSV
#[derive(Debug)]
pub struct ParseOutcome {
    /// Successfully parsed findings, in file order
    pub findings: Vec<PiiFinding>,
    /// Number of rows skipped as malformed
    pub skipped: usize,
}

/// Parse findings from any reader
///
/// The first line must be the expected header. Each subsequent non-empty
/// line is parsed as one finding; a row with the wrong field count or an
/// unparseable field is skipped with one warning, never an error.
pub fn parse_findings<R: BufRead>(reader: R) -> Result<ParseOutcome, PiiError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(PiiError::BadHeader("<empty file>".to_string())),
    };
    if header.trim() != EXPECTED_HEADER {
        return Err(PiiError::BadHeader(header.trim().to_string()));
    }

    let mut findings = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1
        let line_number = idx + 2;

        match parse_row(&line) {
            Some(finding) => findings.push(finding),
            None => {
                warn!(line_number, "skipping malformed findings row");
                skipped += 1;
            }
        }
    }

    Ok(ParseOutcome { findings, skipped })
}

/// Parse findings from a file on disk
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ParseOutcome, PiiError> {
    let file = File::open(path)?;
    parse_findings(BufReader::new(file))
}

fn parse_row(line: &str) -> Option<PiiFinding> {
    let fields = split_row(line);
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let page_number: u32 = fields[2].trim().parse().ok()?;
    let category = PiiCategory::parse(&fields[3])?;
    let confidence: f64 = fields[4].trim().parse().ok()?;
    let x: f64 = fields[5].trim().parse().ok()?;
    let y: f64 = fields[6].trim().parse().ok()?;
    let width: f64 = fields[7].trim().parse().ok()?;
    let height: f64 = fields[8].trim().parse().ok()?;

    Some(PiiFinding {
        record_id: fields[0].clone(),
        file_name: fields[1].clone(),
        page_number,
        category,
        confidence,
        bbox: BoundingBox { x, y, width, height },
        text: fields[9].clone(),
        reasoning: fields[10].clone(),
    })
}

/// Split one CSV row into fields
///
/// Quoted fields may contain embedded commas; a doubled quote inside a
/// quoted field is an escaped quote.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
