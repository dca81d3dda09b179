use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::domain::LeadRow;
use super::store::{ContactStore, ContactStoreError};
use crate::quiz::ArchetypeScores;

const HEADER: [&str; 12] = [
    "submitted_at",
    "first_name",
    "email",
    "consent",
    "architect",
    "enchanter",
    "watcher",
    "keeper",
    "dominant_profile",
    "growth_insight",
    "answers",
    "webinar_interest",
];

/// Contact store backed by a local spreadsheet file.
///
/// Rows are append-only; the webinar-interest update reads the whole sheet,
/// rewrites the matching row, and writes the sheet back. That read-then-write
/// pair carries the same stale-row hazard as any shared spreadsheet: two
/// concurrent writers can clobber each other.
#[derive(Debug, Clone)]
pub struct SheetContactStore {
    path: PathBuf,
}

impl SheetContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<LeadRow>, ContactStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(remote)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(remote)?;
            rows.push(parse_row(&record)?);
        }
        Ok(rows)
    }

    fn write_rows(&self, rows: &[LeadRow]) -> Result<(), ContactStoreError> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(remote)?;
        writer.write_record(HEADER).map_err(remote)?;
        for row in rows {
            writer.write_record(encode_row(row)).map_err(remote)?;
        }
        writer.flush().map_err(remote)
    }
}

impl ContactStore for SheetContactStore {
    fn append(&self, row: LeadRow) -> Result<(), ContactStoreError> {
        let fresh_sheet = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(remote)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if fresh_sheet {
            writer.write_record(HEADER).map_err(remote)?;
        }
        writer.write_record(encode_row(&row)).map_err(remote)?;
        writer.flush().map_err(remote)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        let rows = self.read_rows()?;
        Ok(rows.into_iter().find(|row| row.email == email))
    }

    fn set_webinar_interest(
        &self,
        email: &str,
        interested: bool,
    ) -> Result<(), ContactStoreError> {
        let mut rows = self.read_rows()?;
        let target = rows
            .iter_mut()
            .find(|row| row.email == email)
            .ok_or(ContactStoreError::NotFound)?;

        target.webinar_interest = interested;
        self.write_rows(&rows)
    }
}

fn remote(err: impl std::fmt::Display) -> ContactStoreError {
    ContactStoreError::Remote(err.to_string())
}

fn encode_row(row: &LeadRow) -> Vec<String> {
    vec![
        row.submitted_at.to_rfc3339(),
        row.first_name.clone(),
        row.email.clone(),
        encode_flag(row.consent).to_string(),
        row.scores.architect.to_string(),
        row.scores.enchanter.to_string(),
        row.scores.watcher.to_string(),
        row.scores.keeper.to_string(),
        row.dominant_profile.clone(),
        row.growth_insight.clone(),
        row.answers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        encode_flag(row.webinar_interest).to_string(),
    ]
}

fn parse_row(record: &csv::StringRecord) -> Result<LeadRow, ContactStoreError> {
    if record.len() != HEADER.len() {
        return Err(ContactStoreError::Remote(format!(
            "sheet row has {} fields, expected {}",
            record.len(),
            HEADER.len()
        )));
    }

    let submitted_at = DateTime::parse_from_rfc3339(&record[0])
        .map(|stamp| stamp.with_timezone(&Utc))
        .map_err(|err| ContactStoreError::Remote(format!("bad timestamp: {err}")))?;

    let scores = ArchetypeScores {
        architect: parse_total(&record[4])?,
        enchanter: parse_total(&record[5])?,
        watcher: parse_total(&record[6])?,
        keeper: parse_total(&record[7])?,
    };

    let answers = if record[10].is_empty() {
        Vec::new()
    } else {
        record[10]
            .split_whitespace()
            .map(|value| {
                value
                    .parse::<u8>()
                    .map_err(|err| ContactStoreError::Remote(format!("bad answer: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(LeadRow {
        submitted_at,
        first_name: record[1].to_string(),
        email: record[2].to_string(),
        consent: parse_flag(&record[3])?,
        scores,
        dominant_profile: record[8].to_string(),
        growth_insight: record[9].to_string(),
        answers,
        webinar_interest: parse_flag(&record[11])?,
    })
}

fn parse_total(raw: &str) -> Result<u8, ContactStoreError> {
    raw.parse::<u8>()
        .map_err(|err| ContactStoreError::Remote(format!("bad score: {err}")))
}

const fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn parse_flag(raw: &str) -> Result<bool, ContactStoreError> {
    match raw {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(ContactStoreError::Remote(format!(
            "bad flag value '{other}'"
        ))),
    }
}
