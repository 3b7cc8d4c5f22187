//! Minimal RFC 4180 reader and writer
//!
//! Handles quoted fields with embedded commas, doubled quotes and line
//! breaks, CRLF or LF line endings, and a leading UTF-8 BOM. Blank lines
//! between records are skipped.

use super::TableError;

const BOM: char = '\u{feff}';

/// A parsed record and the line it started on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parse CSV text into records
pub fn parse(input: &str) -> Result<Vec<RawRecord>, TableError> {
    let input = input.strip_prefix(BOM).unwrap_or(input);

    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    // Any field of the current record was quoted
    let mut quoted = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quoted = true;
                quote_line = line;
            }
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut fields), record_line, quoted);
                quoted = false;
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(TableError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !fields.is_empty() || quoted {
        fields.push(field);
        push_record(&mut records, fields, record_line, quoted);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<RawRecord>, fields: Vec<String>, line: usize, quoted: bool) {
    // A lone unquoted empty field is a blank line; `""` is an empty value
    if !quoted && fields.len() == 1 && fields[0].is_empty() {
        return;
    }
    records.push(RawRecord { line, fields });
}

/// Append one record, quoting only fields that need it
pub fn write_record<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    // A lone empty field must not read back as a blank line
    if let [only] = fields {
        if only.as_ref().is_empty() {
            out.push_str("\"\"\n");
            return;
        }
    }
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field.as_ref());
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    let needs_quotes = field.contains([',', '"', '\n', '\r']);
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}
