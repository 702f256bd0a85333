use std::collections::BTreeMap;
use std::io::Read;

use tracing::debug;

use super::normalizer::clean_header;
use crate::recommendations::{EventRecord, OrgRecord, TutoringRecord};

/// One CSV row keyed by cleaned header name.
pub(crate) type Row = BTreeMap<String, String>;

pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader.headers()?.iter().map(clean_header).collect();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

pub(crate) fn organization(mut row: Row) -> OrgRecord {
    let category = take(&mut row, "Category").unwrap_or_default();
    let majors = take(&mut row, "Majors").unwrap_or_default();
    let specific_majors = take(&mut row, "Specific Majors")
        .map(|raw| parse_list_literal(&raw))
        .unwrap_or_default();

    OrgRecord {
        category,
        majors,
        specific_majors,
        details: row,
    }
}

pub(crate) fn event(mut row: Row) -> EventRecord {
    EventRecord {
        category: take(&mut row, "Category").unwrap_or_default(),
        start_time: take(&mut row, "Start Time"),
        end_time: take(&mut row, "End Time"),
        url: take(&mut row, "URL"),
        details: row,
    }
}

pub(crate) fn tutoring(mut row: Row) -> TutoringRecord {
    let majors = take(&mut row, "Majors");
    TutoringRecord::new(majors, row)
}

/// Removes a column, treating blank cells as absent.
fn take(row: &mut Row, column: &str) -> Option<String> {
    row.remove(column).filter(|value| !value.is_empty())
}

/// Reads a bracketed list of quoted strings such as `['Physics', "Data Science"]`.
///
/// Anything malformed yields an empty list so one bad cell cannot block the rest of a catalog.
pub(crate) fn parse_list_literal(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    match quoted_items(trimmed) {
        Some(items) => items,
        None => {
            debug!(value = trimmed, "ignoring malformed major list");
            Vec::new()
        }
    }
}

fn quoted_items(literal: &str) -> Option<Vec<String>> {
    let inner = literal.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();

    loop {
        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}

        let Some(quote) = chars.next() else {
            return Some(items);
        };
        if quote != '\'' && quote != '"' {
            return None;
        }

        let mut item = String::new();
        loop {
            match chars.next()? {
                '\\' => item.push(chars.next()?),
                ch if ch == quote => break,
                ch => item.push(ch),
            }
        }
        items.push(item);

        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            None => return Some(items),
            Some(_) => return None,
        }
    }
}
