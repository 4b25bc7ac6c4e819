//! The data loader: raw JSON/JSONL to validated CSV.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{NewslineError, Result};
use crate::ingestion::Article;
use crate::ingestion::flatten::{flatten_record, value_to_cell};
use crate::taxonomy::{OTHER_CATEGORY, map_ingestion_category};

/// Column names (case-insensitive) accepted as the text column.
const TEXT_CANDIDATES: &[&str] = &[
    "text",
    "content",
    "headline",
    "title",
    "description",
    "short_description",
];

/// Column names (case-insensitive) accepted as the label column.
const LABEL_CANDIDATES: &[&str] = &["category", "label", "class", "topic"];

/// A row as extracted from the raw table, before validation.
#[derive(Debug, Clone)]
pub struct RawRow {
    /// Text cell, `None` when the field was absent or null.
    pub text: Option<String>,
    /// Category cell, `None` when the field was absent or null.
    pub category: Option<String>,
}

/// Loads a raw JSON/JSONL dataset and persists a validated CSV.
///
/// The loader runs a fixed sequence: load, flatten, discover columns, drop
/// invalid rows, map categories onto the taxonomy, save. See
/// [`run_ingestion`](DataLoader::run_ingestion).
#[derive(Debug, Clone)]
pub struct DataLoader {
    raw_data_path: PathBuf,
    processed_data_path: PathBuf,
}

impl DataLoader {
    /// Create a loader reading from `raw_data_path` and writing to
    /// `processed_data_path`.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(raw_data_path: P, processed_data_path: Q) -> Self {
        DataLoader {
            raw_data_path: raw_data_path.into(),
            processed_data_path: processed_data_path.into(),
        }
    }

    /// Load the raw file as a list of JSON records.
    ///
    /// Line-delimited parsing is attempted first; if any line fails, the
    /// whole document is parsed instead (a top-level array yields its
    /// elements, a single object yields one record).
    pub fn load_json(&self) -> Result<Vec<Value>> {
        info!("Loading raw JSON data from: {}", self.raw_data_path.display());

        if !self.raw_data_path.exists() {
            return Err(NewslineError::ingestion(format!(
                "Raw dataset not found at {}",
                self.raw_data_path.display()
            )));
        }

        let contents = fs::read_to_string(&self.raw_data_path).map_err(|e| {
            NewslineError::ingestion(format!(
                "Failed to read {}: {e}",
                self.raw_data_path.display()
            ))
        })?;

        if let Some(records) = Self::try_parse_jsonl(&contents) {
            info!("Loaded JSONL format successfully ({} records)", records.len());
            return Ok(records);
        }

        let document: Value = serde_json::from_str(&contents).map_err(|e| {
            NewslineError::ingestion(format!(
                "Failed to parse {} as JSON or JSONL: {e}",
                self.raw_data_path.display()
            ))
        })?;

        let records = match document {
            Value::Array(items) => items,
            object => vec![object],
        };

        info!("Loaded standard JSON format successfully ({} records)", records.len());
        Ok(records)
    }

    /// Parse as JSON Lines; `None` if any non-empty line is not a JSON value.
    fn try_parse_jsonl(contents: &str) -> Option<Vec<Value>> {
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return None;
        }

        let mut records = Vec::with_capacity(lines.len());
        for line in lines {
            records.push(serde_json::from_str::<Value>(line).ok()?);
        }

        // A single top-level array is a whole-document dataset, not JSONL.
        if records.len() == 1 && records[0].is_array() {
            return None;
        }

        Some(records)
    }

    /// Flatten records and extract the text/category cells.
    ///
    /// The text and label columns are discovered by case-insensitive
    /// membership in the fixed candidate sets; if either is missing the
    /// error lists the columns that were actually found.
    pub fn to_rows(&self, records: &[Value]) -> Result<Vec<RawRow>> {
        info!("Flattening {} JSON records", records.len());

        let tables: Vec<_> = records.iter().map(flatten_record).collect();

        let columns: BTreeSet<String> = tables
            .iter()
            .flat_map(|table| table.keys().cloned())
            .collect();
        debug!("Discovered columns: {columns:?}");

        let text_col = Self::find_column(&columns, TEXT_CANDIDATES);
        let label_col = Self::find_column(&columns, LABEL_CANDIDATES);

        let (Some(text_col), Some(label_col)) = (text_col, label_col) else {
            return Err(NewslineError::schema(format!(
                "Could not find suitable text/label columns in JSON. Found columns: {:?}",
                columns.iter().collect::<Vec<_>>()
            )));
        };

        info!("Using text column '{text_col}' and label column '{label_col}'");

        let rows = tables
            .iter()
            .map(|table| RawRow {
                text: table.get(text_col).and_then(value_to_cell),
                category: table.get(label_col).and_then(value_to_cell),
            })
            .collect();

        Ok(rows)
    }

    /// Find a column whose name (or, for flattened dotted names, whose
    /// final segment) matches a candidate set, case-insensitively. Exact
    /// full-name matches win over leaf matches.
    fn find_column<'a>(columns: &'a BTreeSet<String>, candidates: &[&str]) -> Option<&'a String> {
        columns
            .iter()
            .find(|col| candidates.contains(&col.to_lowercase().as_str()))
            .or_else(|| {
                columns.iter().find(|col| {
                    let lower = col.to_lowercase();
                    let leaf = lower.rsplit('.').next().unwrap_or(lower.as_str());
                    candidates.contains(&leaf)
                })
            })
    }

    /// Drop rows with a missing text/category cell or whitespace-only text.
    pub fn validate(&self, rows: Vec<RawRow>) -> Vec<(String, String)> {
        info!("Validating {} rows", rows.len());
        let before = rows.len();

        let validated: Vec<(String, String)> = rows
            .into_iter()
            .filter_map(|row| match (row.text, row.category) {
                (Some(text), Some(category)) if !text.trim().is_empty() => Some((text, category)),
                _ => None,
            })
            .collect();

        info!("Dropped {} invalid rows", before - validated.len());
        info!("Rows after validation: {}", validated.len());

        validated
    }

    /// Map raw category labels onto the target taxonomy.
    ///
    /// Labels the table does not know fall into the "Other" bucket.
    pub fn map_categories(&self, rows: Vec<(String, String)>) -> Vec<Article> {
        let articles: Vec<Article> = rows
            .into_iter()
            .map(|(text, raw)| Article::new(text, map_ingestion_category(&raw)))
            .collect();

        let other = articles
            .iter()
            .filter(|a| a.category == OTHER_CATEGORY)
            .count();
        if other > 0 {
            warn!("{other} rows mapped to the '{OTHER_CATEGORY}' bucket");
        }

        let unique: BTreeSet<&str> = articles.iter().map(|a| a.category.as_str()).collect();
        info!("Unique categories after mapping: {}", unique.len());

        articles
    }

    /// Persist the validated dataset as CSV, creating parent directories.
    pub fn save_dataset(&self, articles: &[Article]) -> Result<()> {
        if let Some(parent) = self.processed_data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.processed_data_path)?;
        for article in articles {
            writer.serialize(article)?;
        }
        writer.flush()?;

        info!(
            "Processed dataset saved to: {}",
            self.processed_data_path.display()
        );
        Ok(())
    }

    /// Run the full ingestion sequence and return the validated rows.
    pub fn run_ingestion(&self) -> Result<Vec<Article>> {
        let records = self.load_json()?;
        let rows = self.to_rows(&records)?;
        let validated = self.validate(rows);
        let articles = self.map_categories(validated);
        self.save_dataset(&articles)?;

        info!("Data ingestion completed successfully");
        Ok(articles)
    }
}

/// Load a processed CSV dataset.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Article>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NewslineError::not_found(format!(
            "Processed dataset not found at {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut articles = Vec::new();
    for row in reader.deserialize() {
        let article: Article = row?;
        articles.push(article);
    }

    info!("Loaded {} rows from {}", articles.len(), path.display());
    Ok(articles)
}
