//! Workbook loading functionality

use super::lenient::{is_blank_row, is_valid_int, is_valid_text};
use super::{Dataset, LoadError, Problem, SheetName, SheetRow, Sheets};
use anyhow::{bail, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the sheets live: a single JSON workbook keyed by sheet name, or a
/// directory with one `<Sheet>.json` file per sheet.
#[derive(Debug, PartialEq, Eq)]
enum WorkbookSource {
    File(PathBuf),
    Dir(PathBuf),
}

impl WorkbookSource {
    fn from_path(path: &Path) -> Result<WorkbookSource, LoadError> {
        if path.is_dir() {
            return Ok(WorkbookSource::Dir(path.to_owned()));
        }
        if !path.exists() {
            return Err(LoadError::Io {
                path: path.to_owned(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }
        Ok(WorkbookSource::File(path.to_owned()))
    }
}

fn read_json(path: &Path) -> Result<Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Columns of `row` holding a value that cannot be coerced.
fn invalid_columns<T: SheetRow>(row: &Value) -> Vec<&'static str> {
    let cells = match row {
        Value::Object(cells) => cells,
        _ => return Vec::new(),
    };
    T::COLUMNS
        .iter()
        .copied()
        .filter(|column| match cells.get(*column) {
            None => false,
            Some(value) if T::INT_COLUMNS.contains(column) => !is_valid_int(value),
            Some(value) => !is_valid_text(value),
        })
        .collect()
}

fn parse_sheet<T: DeserializeOwned + SheetRow>(
    sheet: SheetName,
    value: Value,
    problems: &mut Vec<Problem>,
) -> Result<Vec<T>, LoadError> {
    let rows = match value {
        Value::Array(rows) => rows,
        _ => return Err(LoadError::NotAList(sheet)),
    };
    let mut out = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        if is_blank_row(&row) {
            continue;
        }
        for column in invalid_columns::<T>(&row) {
            problems.push(Problem::InvalidValue {
                sheet,
                row: idx + 1,
                column: column.to_owned(),
            });
        }
        let parsed = serde_json::from_value(row).map_err(|source| LoadError::InvalidRow {
            sheet,
            row: idx + 1,
            source,
        })?;
        out.push(parsed);
    }
    Ok(out)
}

struct RawSheets {
    by_name: Map<String, Value>,
    invalid_values: Vec<Problem>,
}

impl RawSheets {
    fn new(by_name: Map<String, Value>) -> RawSheets {
        RawSheets {
            by_name,
            invalid_values: Vec::new(),
        }
    }

    fn read(source: &WorkbookSource) -> Result<RawSheets, LoadError> {
        match source {
            WorkbookSource::File(path) => match read_json(path)? {
                Value::Object(by_name) => Ok(RawSheets::new(by_name)),
                _ => Err(LoadError::Json {
                    path: path.clone(),
                    source: serde::de::Error::custom("expected an object keyed by sheet name"),
                }),
            },
            WorkbookSource::Dir(dir) => {
                let mut by_name = Map::new();
                for sheet in SheetName::ALL {
                    let path = dir.join(format!("{}.json", sheet));
                    if !path.is_file() {
                        return Err(LoadError::MissingSheet(sheet));
                    }
                    by_name.insert(sheet.as_str().to_owned(), read_json(&path)?);
                }
                Ok(RawSheets::new(by_name))
            }
        }
    }

    fn take<T: DeserializeOwned + SheetRow>(
        &mut self,
        sheet: SheetName,
    ) -> Result<Vec<T>, LoadError> {
        let value = self
            .by_name
            .remove(sheet.as_str())
            .ok_or(LoadError::MissingSheet(sheet))?;
        parse_sheet(sheet, value, &mut self.invalid_values)
    }
}

/// Reads and parses every sheet, without checking keys. Cells that do not
/// coerce are kept as blanks and listed in `Sheets::invalid_values`.
pub fn read_sheets(path: &Path) -> Result<Sheets, LoadError> {
    let source = WorkbookSource::from_path(path)?;
    let mut raw = RawSheets::read(&source)?;
    Ok(Sheets {
        gigs: raw.take(SheetName::Gigs)?,
        performances: raw.take(SheetName::Performances)?,
        songs: raw.take(SheetName::Songs)?,
        albums: raw.take(SheetName::Albums)?,
        bands: raw.take(SheetName::Bands)?,
        people: raw.take(SheetName::People)?,
        invalid_values: raw.invalid_values,
    })
}

/// Loads the workbook at `path` and reports what was found.
///
/// Reference problems are logged and tolerated unless `strict_references`
/// is set, in which case any problem fails the load.
pub fn load_dataset<P: AsRef<Path>>(path: P, strict_references: bool) -> Result<Dataset> {
    let path = path.as_ref();
    info!("Loading workbook from {}...", path.display());
    let dataset = Dataset::from_sheets(read_sheets(path)?)?;

    let problems = dataset.problems();
    if !problems.is_empty() {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {}", problem);
        }
    }

    match (problems.is_empty(), strict_references) {
        (true, _) => info!("Workbook checked, no issues found."),
        (false, false) => info!(
            "Workbook was loaded, but check the {} non-fatal issues above.",
            problems.len()
        ),
        (false, true) => bail!(LoadError::StrictReferences {
            count: problems.len()
        }),
    }

    info!(
        "Workbook has:\n{} shows\n{} performances\n{} songs\n{} albums\n{} artists\n{} people",
        dataset.rows_count(SheetName::Gigs),
        dataset.rows_count(SheetName::Performances),
        dataset.rows_count(SheetName::Songs),
        dataset.rows_count(SheetName::Albums),
        dataset.rows_count(SheetName::Bands),
        dataset.rows_count(SheetName::People),
    );
    Ok(dataset)
}
