//! Test fixture creation
//!
//! Writes a small workbook to a temporary directory. The contents are
//! described by the counts in `constants.rs`.

use super::constants::*;
use anyhow::Result;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// The fixture workbook as a single JSON object keyed by sheet name
pub fn test_workbook_json() -> Value {
    json!({
        "Gigs": [
            {"Series Index": 1, "Location": "CH Studio", "Date/Time Start": "2020-03-26 19:00", "Show Title": "ART #1"},
            {"Series Index": 2, "Location": "CH Studio", "Date/Time Start": "2020-04-02 19:00", "Show Title": "ART #2"},
            {"Series Index": 3, "Location": "CH Studio", "Date/Time Start": "2020-04-09 19:00", "Show Title": "ART #3"},
            {"Series Index": null, "Location": null, "Date/Time Start": null, "Show Title": null}
        ],
        "Performances": [
            {"Series Index": 1, "Set Position": 1, "Song": "Walk On", "Artist": ORIGINAL_BAND},
            {"Series Index": 1, "Set Position": 2, "Song": "Tusk", "Artist": COVERED_BAND},
            {"Series Index": 2, "Set Position": 1, "Song": "Dreams", "Artist": COVERED_BAND},
            {"Series Index": 2, "Set Position": 2, "Song": "Haunt", "Artist": UNLISTED_BAND},
            {"Series Index": 3, "Set Position": 1, "Song": "Sunday Best", "Artist": ORIGINAL_BAND},
            {"Series Index": 3, "Set Position": 2, "Song": "Tusk", "Artist": COVERED_BAND}
        ],
        "Songs": [
            {"Name": "Walk On", "Band": ORIGINAL_BAND, "Album": "Hochmans Live", "Year": 2004, "Genre": "Rock", "Composer": SUBJECT, "Covered": "No"},
            {"Name": "Sunday Best", "Band": ORIGINAL_BAND, "Album": "Hochmans Live", "Year": "2004", "Genre": "Rock", "Composer": SUBJECT, "Covered": "No"},
            {"Name": "Tusk", "Band": COVERED_BAND, "Album": "Tusk", "Year": 1979.0, "Genre": "Rock", "Composer": "Lindsey Buckingham", "Covered": "Yes"},
            {"Name": "Dreams", "Band": COVERED_BAND, "Album": null, "Year": 1977, "Genre": "Rock", "Composer": "Stevie Nicks", "Covered": "Yes"},
            {"Name": "Haunt", "Band": UNLISTED_BAND, "Album": null, "Year": 1990, "Genre": null, "Composer": null, "Covered": "Yes"}
        ],
        "Albums": [
            {"Name": "Hochmans Live", "Band": ORIGINAL_BAND, "Personnel": SUBJECT},
            {"Name": "Tusk", "Band": COVERED_BAND, "Personnel": "Buckingham, Nicks, Fleetwood, McVie, McVie"}
        ],
        "Bands": [
            {"Name": ORIGINAL_BAND, "Genres": "Rock", "Chris Relationship": "Original", "Band Family": ORIGINAL_BAND, "Band Birthplace": "Dallas"},
            {"Name": COVERED_BAND, "Genres": "Rock", "Chris Relationship": "Influence", "Band Family": COVERED_BAND, "Band Birthplace": "London"}
        ],
        "People": [
            {"Name": "Stevie Nicks", "Year Born": 1948, "Instruments": "Vocals"}
        ]
    })
}

/// Creates a temporary single-file workbook
///
/// Returns (TempDir, workbook_path). The TempDir must be kept alive for the
/// duration of the test.
pub fn create_test_workbook() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("workbook.json");
    std::fs::write(&path, serde_json::to_string_pretty(&test_workbook_json())?)?;
    Ok((dir, path))
}

/// Creates a temporary directory workbook, one `<Sheet>.json` per sheet
pub fn create_test_workbook_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    if let Value::Object(sheets) = test_workbook_json() {
        for (name, rows) in sheets {
            let path = dir.path().join(format!("{}.json", name));
            std::fs::write(&path, serde_json::to_string_pretty(&rows)?)?;
        }
    }
    Ok(dir)
}
