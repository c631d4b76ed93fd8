//! CSV ingestion of the recipe table.
//!
//! # Schema
//!
//! Required columns: an identifier, a title, and the serialized
//! ingredient-list field. The canonical headers are `id`, `title`, and
//! `ingredients`; the legacy dataset headers `Unnamed: 0` (identifier) and
//! `NER_Simple` (ingredients) are accepted as aliases. Optional `link` and
//! `rating` columns pass through to [`RecipeRecord`] untouched.
//!
//! Schema validation happens against the header row, before any record is
//! read — a missing required column aborts the run. Per-row problems
//! (unreadable row, blank identifier) are logged and skipped.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use tracing::{debug, instrument, warn};

use crate::error::ErrorCode;
use crate::model::RecipeRecord;

/// Header names accepted for the identifier column, in preference order.
const ID_HEADERS: [&str; 2] = ["id", "Unnamed: 0"];
/// Header names accepted for the ingredient-list column, in preference order.
const INGREDIENT_HEADERS: [&str; 2] = ["ingredients", "NER_Simple"];

/// Resolved column positions for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    id: usize,
    title: usize,
    ingredients: usize,
    link: Option<usize>,
    rating: Option<usize>,
}

impl ColumnLayout {
    /// Resolve the layout from a header row, failing fast when a required
    /// column is absent.
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|h| h.trim() == *name))
        };

        let Some(id) = position(&ID_HEADERS) else {
            bail!("{}: no identifier column (id)", ErrorCode::MissingColumn);
        };
        let Some(title) = position(&["title"]) else {
            bail!("{}: no title column", ErrorCode::MissingColumn);
        };
        let Some(ingredients) = position(&INGREDIENT_HEADERS) else {
            bail!("{}: no ingredients column", ErrorCode::MissingColumn);
        };

        Ok(Self {
            id,
            title,
            ingredients,
            link: position(&["link"]),
            rating: position(&["rating"]),
        })
    }

    fn record(self, row: &StringRecord) -> Option<RecipeRecord> {
        let cell = |idx: usize| row.get(idx).map(str::trim);
        let id = cell(self.id)?.to_owned();
        if id.is_empty() {
            return None;
        }

        Some(RecipeRecord {
            id,
            title: cell(self.title).unwrap_or_default().to_owned(),
            ingredients: cell(self.ingredients).unwrap_or_default().to_owned(),
            link: self
                .link
                .and_then(|idx| cell(idx))
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            rating: self
                .rating
                .and_then(|idx| cell(idx))
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        })
    }
}

/// Load recipe records from a CSV file.
///
/// `limit` caps the number of data rows read; `None` reads the whole file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the header row cannot be
/// read, or a required column is missing. Individual bad rows are skipped
/// with a warning.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_recipes(path: impl AsRef<Path>, limit: Option<usize>) -> Result<Vec<RecipeRecord>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("{}: open {}", ErrorCode::CsvReadFailed, path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("{}: read header row", ErrorCode::CsvReadFailed))?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let cap = limit.unwrap_or(usize::MAX);
    let mut records = Vec::new();

    for (row_number, row) in reader.records().enumerate() {
        if records.len() >= cap {
            break;
        }
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(row = row_number + 2, %err, "skipping unreadable row");
                continue;
            }
        };
        match layout.record(&row) {
            Some(record) => records.push(record),
            None => warn!(row = row_number + 2, "skipping row without identifier"),
        }
    }

    debug!(count = records.len(), "loaded recipe records");
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
