//! Count-by-category tables behind the splash page charts.

use super::{Cell, Table};
use crate::dataset::{Dataset, SheetName};
use serde::Serialize;
use std::cmp::Reverse;

pub const ORIGINATING_ARTIST: &str = "Originating Artist";
pub const ORIGINATION_YEAR: &str = "Year of Song's Origination";
pub const NUMBER_OF_SONGS: &str = "Number of Songs Played";
pub const ORIGINAL_ACT: &str = "Original Act";

/// Relationship value marking the subject's own acts in the Bands sheet.
pub const ORIGINAL_RELATIONSHIP: &str = "Original";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Classification {
    Original,
    Other,
    /// The artist is not in the Bands sheet.
    Unknown,
}

impl Classification {
    pub fn as_flag(&self) -> &'static str {
        match self {
            Classification::Original => "Yes",
            Classification::Other | Classification::Unknown => "No",
        }
    }
}

/// Is `artist` one of the subject's own original-music acts?
pub fn classify_artist(dataset: &Dataset, artist: &str) -> Classification {
    match dataset.get_band(artist) {
        None => Classification::Unknown,
        Some(band) if band.relationship.as_deref() == Some(ORIGINAL_RELATIONSHIP) => {
            Classification::Original
        }
        Some(_) => Classification::Other,
    }
}

/// A classified table together with the names that could not be looked up.
/// Reporting those names is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub table: Table,
    pub unmatched: Vec<String>,
}

fn counted_descending(table: &Table, key: &str) -> Table {
    table
        .count_by(&[key], NUMBER_OF_SONGS)
        .sorted_by_key(|r| Reverse(r.int(NUMBER_OF_SONGS)))
}

/// Songs per originating artist, most songs first. With `min_songs > 0`,
/// artists with fewer songs are dropped.
pub fn songs_by_artist(dataset: &Dataset, min_songs: usize) -> Classified {
    let mut counts = counted_descending(&dataset.sheet(SheetName::Songs), "Band");
    if min_songs > 0 {
        let min_songs = min_songs as i64;
        counts = counts.filter(|r| r.int(NUMBER_OF_SONGS).unwrap_or(0) >= min_songs);
    }

    let mut table = Table::new([ORIGINATING_ARTIST, NUMBER_OF_SONGS, ORIGINAL_ACT]);
    let mut unmatched = Vec::new();
    for record in counts.records() {
        let artist = record.text("Band").unwrap_or_default();
        let classification = classify_artist(dataset, artist);
        if classification == Classification::Unknown {
            unmatched.push(artist.to_owned());
        }
        table.push_row(vec![
            record.get("Band").clone(),
            record.get(NUMBER_OF_SONGS).clone(),
            Cell::from(classification.as_flag()),
        ]);
    }

    Classified { table, unmatched }
}

/// Songs per year of origination, most songs first. Songs without a year
/// share a null bucket.
pub fn songs_by_year(dataset: &Dataset) -> Table {
    counted_descending(&dataset.sheet(SheetName::Songs), "Year").rename(&[("Year", ORIGINATION_YEAR)])
}
