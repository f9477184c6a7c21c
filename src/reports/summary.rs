//! Headline figures, the latest setlist and the filter lists shown on the
//! splash page.

use super::Table;
use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesSummary {
    pub total_shows: usize,
    pub total_performances: usize,
    pub total_songs: usize,
    pub total_albums: usize,
    pub total_artists: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    /// Number of calendar years covered by the songs, ends included.
    pub year_span: Option<i32>,
}

impl SeriesSummary {
    pub fn from_dataset(dataset: &Dataset) -> SeriesSummary {
        let years = dataset.songs().iter().filter_map(|s| s.year);
        let first_year = years.clone().min();
        let last_year = years.max();
        let year_span = match (first_year, last_year) {
            (Some(first), Some(last)) => Some(last - first + 1),
            _ => None,
        };

        SeriesSummary {
            total_shows: dataset.gigs().len(),
            total_performances: dataset.performances().len(),
            total_songs: dataset.songs().len(),
            total_albums: dataset.albums().len(),
            total_artists: dataset.bands().len(),
            first_year,
            last_year,
            year_span,
        }
    }

    pub fn headline(&self, subject: &str) -> String {
        let mut headline = format!(
            "{} has done {} performances of {} songs from {} albums by {} artists over {} shows",
            subject,
            self.total_performances,
            self.total_songs,
            self.total_albums,
            self.total_artists,
            self.total_shows
        );
        if let (Some(span), Some(first), Some(last)) =
            (self.year_span, self.first_year, self.last_year)
        {
            headline.push_str(&format!(
                ", spanning {} years of music ({} to {})",
                span, first, last
            ));
        }
        headline.push('.');
        headline
    }
}

/// Rows of the performances report that belong to the most recent show.
pub fn latest_setlist(performances: &Table) -> Table {
    let latest = performances
        .column_values("Show")
        .filter_map(|c| c.as_int())
        .max();
    match latest {
        Some(show) => performances.filter(|r| r.int("Show") == Some(show)),
        None => performances.filter(|_| false),
    }
}

/// The shows report in series order, for the songs-per-show chart.
pub fn songs_per_show(shows: &Table) -> Table {
    shows.sorted_by_key(|r| r.int("Series Index"))
}

/// Values offered by the dashboard's filter controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub shows: Vec<i64>,
    pub songs: Vec<String>,
    pub artists: Vec<String>,
    /// `"<artist>: <song>"`, in Songs order.
    pub song_labels: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> FilterOptions {
        let shows: BTreeSet<i64> = dataset.gigs().iter().map(|g| g.series_index).collect();
        let songs: BTreeSet<&str> = dataset.songs().iter().map(|s| s.name.as_str()).collect();
        let artists: BTreeSet<&str> = dataset.bands().iter().map(|b| b.name.as_str()).collect();

        FilterOptions {
            shows: shows.into_iter().collect(),
            songs: songs.into_iter().map(str::to_owned).collect(),
            artists: artists.into_iter().map(str::to_owned).collect(),
            song_labels: dataset
                .songs()
                .iter()
                .map(|s| format!("{}: {}", s.band, s.name))
                .collect(),
        }
    }
}
