//! Typed rows of the six workbook sheets.
//!
//! Field renames follow the column headers of the source spreadsheet.

use super::lenient;
use crate::reports::{Cell, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the workbook sheets, in load order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SheetName {
    Gigs,
    Performances,
    Songs,
    Albums,
    Bands,
    People,
}

impl SheetName {
    pub const ALL: [SheetName; 6] = [
        SheetName::Gigs,
        SheetName::Performances,
        SheetName::Songs,
        SheetName::Albums,
        SheetName::Bands,
        SheetName::People,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetName::Gigs => "Gigs",
            SheetName::Performances => "Performances",
            SheetName::Songs => "Songs",
            SheetName::Albums => "Albums",
            SheetName::Bands => "Bands",
            SheetName::People => "People",
        }
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row type that can be flattened into a named-column [`Table`].
pub trait SheetRow {
    const COLUMNS: &'static [&'static str];
    /// Optional integer columns among `COLUMNS`.
    const INT_COLUMNS: &'static [&'static str] = &[];

    fn cells(&self) -> Vec<Cell>;
}

pub fn rows_to_table<T: SheetRow>(rows: &[T]) -> Table {
    let mut table = Table::new(T::COLUMNS.iter().copied());
    for row in rows {
        table.push_row(row.cells());
    }
    table
}

/// One show of the series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gig {
    #[serde(rename = "Series Index", deserialize_with = "lenient::int")]
    pub series_index: i64,
    #[serde(rename = "Location", default, deserialize_with = "lenient::opt_text")]
    pub location: Option<String>,
    #[serde(rename = "Date/Time Start", default, deserialize_with = "lenient::opt_text")]
    pub start: Option<String>,
    #[serde(rename = "Show Title", default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
}

impl SheetRow for Gig {
    const COLUMNS: &'static [&'static str] =
        &["Series Index", "Location", "Date/Time Start", "Show Title"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.series_index.into(),
            self.location.as_ref().into(),
            self.start.as_ref().into(),
            self.title.as_ref().into(),
        ]
    }
}

/// A song played at a show, at a given position in the set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "Series Index", deserialize_with = "lenient::int")]
    pub series_index: i64,
    #[serde(rename = "Set Position", deserialize_with = "lenient::int")]
    pub set_position: i64,
    #[serde(rename = "Song", deserialize_with = "lenient::text")]
    pub song: String,
    #[serde(rename = "Artist", deserialize_with = "lenient::text")]
    pub artist: String,
}

impl SheetRow for Performance {
    const COLUMNS: &'static [&'static str] = &["Series Index", "Set Position", "Song", "Artist"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.series_index.into(),
            self.set_position.into(),
            (&self.song).into(),
            (&self.artist).into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "Name", deserialize_with = "lenient::text")]
    pub name: String,
    /// Originating artist.
    #[serde(rename = "Band", deserialize_with = "lenient::text")]
    pub band: String,
    #[serde(rename = "Album", default, deserialize_with = "lenient::opt_text")]
    pub album: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "lenient::opt_int")]
    pub year: Option<i32>,
    #[serde(rename = "Genre", default, deserialize_with = "lenient::opt_text")]
    pub genre: Option<String>,
    #[serde(rename = "Composer", default, deserialize_with = "lenient::opt_text")]
    pub composer: Option<String>,
    #[serde(rename = "Covered", default, deserialize_with = "lenient::opt_text")]
    pub covered: Option<String>,
}

impl SheetRow for Song {
    const COLUMNS: &'static [&'static str] = &[
        "Name", "Band", "Album", "Year", "Genre", "Composer", "Covered",
    ];
    const INT_COLUMNS: &'static [&'static str] = &["Year"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            (&self.name).into(),
            (&self.band).into(),
            self.album.as_ref().into(),
            self.year.into(),
            self.genre.as_ref().into(),
            self.composer.as_ref().into(),
            self.covered.as_ref().into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "Name", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Band", deserialize_with = "lenient::text")]
    pub band: String,
    #[serde(rename = "Personnel", default, deserialize_with = "lenient::opt_text")]
    pub personnel: Option<String>,
}

impl SheetRow for Album {
    const COLUMNS: &'static [&'static str] = &["Name", "Band", "Personnel"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            (&self.name).into(),
            (&self.band).into(),
            self.personnel.as_ref().into(),
        ]
    }
}

/// An artist. `relationship` tells how the act relates to the series
/// performer, e.g. `Original` for the performer's own bands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    #[serde(rename = "Name", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Genres", default, deserialize_with = "lenient::opt_text")]
    pub genres: Option<String>,
    #[serde(
        rename = "Relationship",
        alias = "Chris Relationship",
        default,
        deserialize_with = "lenient::opt_text"
    )]
    pub relationship: Option<String>,
    #[serde(rename = "Band Family", default, deserialize_with = "lenient::opt_text")]
    pub family: Option<String>,
    #[serde(rename = "Band Birthplace", default, deserialize_with = "lenient::opt_text")]
    pub birthplace: Option<String>,
}

impl SheetRow for Band {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Genres",
        "Relationship",
        "Band Family",
        "Band Birthplace",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            (&self.name).into(),
            self.genres.as_ref().into(),
            self.relationship.as_ref().into(),
            self.family.as_ref().into(),
            self.birthplace.as_ref().into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Year Born", default, deserialize_with = "lenient::opt_int")]
    pub year_born: Option<i32>,
    #[serde(rename = "Year Died", default, deserialize_with = "lenient::opt_int")]
    pub year_died: Option<i32>,
    #[serde(rename = "Instruments", default, deserialize_with = "lenient::opt_text")]
    pub instruments: Option<String>,
    #[serde(rename = "Bands", default, deserialize_with = "lenient::opt_text")]
    pub bands: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,
    #[serde(rename = "AllMusic", default, deserialize_with = "lenient::opt_text")]
    pub allmusic: Option<String>,
    #[serde(rename = "Wikipedia", default, deserialize_with = "lenient::opt_text")]
    pub wikipedia: Option<String>,
}

impl SheetRow for Person {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Year Born",
        "Year Died",
        "Instruments",
        "Bands",
        "Notes",
        "AllMusic",
        "Wikipedia",
    ];
    const INT_COLUMNS: &'static [&'static str] = &["Year Born", "Year Died"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            (&self.name).into(),
            self.year_born.into(),
            self.year_died.into(),
            self.instruments.as_ref().into(),
            self.bands.as_ref().into(),
            self.notes.as_ref().into(),
            self.allmusic.as_ref().into(),
            self.wikipedia.as_ref().into(),
        ]
    }
}
