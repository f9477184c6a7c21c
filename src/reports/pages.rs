//! One report table per dashboard page.
//!
//! Every builder starts from a sheet, renames columns for display and
//! enriches rows through left joins, so primary rows are never dropped or
//! duplicated. Unmatched lookups leave nulls behind.

use super::Table;
use crate::dataset::{Dataset, SheetName};

pub const TIMES_PLAYED: &str = "Times Played";
pub const SONGS_PLAYED: &str = "Songs Played";

/// Performance count per (song, artist) pair.
fn times_played(dataset: &Dataset) -> Table {
    dataset
        .sheet(SheetName::Performances)
        .count_by(&["Song", "Artist"], TIMES_PLAYED)
}

fn songs_for_display(dataset: &Dataset) -> Table {
    dataset
        .sheet(SheetName::Songs)
        .rename(&[("Name", "Song"), ("Band", "Artist")])
}

pub fn performances_report(dataset: &Dataset) -> Table {
    let songs = dataset.sheet(SheetName::Songs);
    let bands = dataset.sheet(SheetName::Bands);

    dataset
        .sheet(SheetName::Performances)
        .rename(&[("Series Index", "Show"), ("Set Position", "Position")])
        .left_join(
            &songs,
            &[("Song", "Name"), ("Artist", "Band")],
            &[("Album", "Album"), ("Year", "Year"), ("Composer", "Composer")],
        )
        .left_join(&bands, &[("Artist", "Name")], &[("Band Family", "Family")])
        .left_join(
            &times_played(dataset),
            &[("Song", "Song"), ("Artist", "Artist")],
            &[(TIMES_PLAYED, TIMES_PLAYED)],
        )
}

pub fn shows_report(dataset: &Dataset) -> Table {
    let per_show = dataset
        .sheet(SheetName::Performances)
        .count_by(&["Series Index"], SONGS_PLAYED);

    dataset.sheet(SheetName::Gigs).left_join(
        &per_show,
        &[("Series Index", "Series Index")],
        &[(SONGS_PLAYED, SONGS_PLAYED)],
    )
}

pub fn songs_report(dataset: &Dataset) -> Table {
    songs_for_display(dataset).left_join(
        &times_played(dataset),
        &[("Song", "Song"), ("Artist", "Artist")],
        &[(TIMES_PLAYED, TIMES_PLAYED)],
    )
}

// TODO: per-album track listings need a tracks sheet in the workbook.
pub fn albums_report(dataset: &Dataset) -> Table {
    dataset
        .sheet(SheetName::Albums)
        .rename(&[("Name", "Album"), ("Band", "Artist")])
}

pub fn artists_report(dataset: &Dataset) -> Table {
    dataset.sheet(SheetName::Bands).rename(&[
        ("Name", "Artist"),
        ("Relationship", "Relation"),
        ("Band Family", "Family"),
        ("Band Birthplace", "Birthplace"),
    ])
}

pub fn people_report(dataset: &Dataset) -> Table {
    dataset
        .sheet(SheetName::People)
        .rename(&[("Name", "Person")])
}

/// Songs written by `subject`.
pub fn originals_report(dataset: &Dataset, subject: &str) -> Table {
    songs_for_display(dataset).filter(|r| r.text("Composer") == Some(subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_fixtures::sample_dataset;
    use crate::reports::Cell;

    #[test]
    fn performances_report_enriches_every_performance() {
        let dataset = sample_dataset();
        let report = performances_report(&dataset);

        assert_eq!(report.len(), dataset.rows_count(SheetName::Performances));
        assert_eq!(
            report.columns(),
            &[
                "Show",
                "Position",
                "Song",
                "Artist",
                "Album",
                "Year",
                "Composer",
                "Family",
                "Times Played"
            ]
        );

        let first = report.record(0).unwrap();
        assert_eq!(first.int("Show"), Some(1));
        assert_eq!(first.text("Song"), Some("Tusk"));
        assert_eq!(first.text("Album"), Some("Tusk"));
        assert_eq!(first.int("Year"), Some(1979));
        assert_eq!(first.text("Family"), Some("Fleetwood Mac"));
        assert_eq!(first.int(TIMES_PLAYED), Some(3));
    }

    #[test]
    fn every_row_of_a_song_shows_the_same_total() {
        let report = performances_report(&sample_dataset());
        let rockets: Vec<Option<i64>> = report
            .records()
            .filter(|r| r.text("Song") == Some("Rocket"))
            .map(|r| r.int(TIMES_PLAYED))
            .collect();
        assert_eq!(rockets, vec![Some(2), Some(2)]);
    }

    #[test]
    fn unmatched_performance_gets_null_enrichment() {
        let report = performances_report(&sample_dataset());
        let mystery = report
            .records()
            .find(|r| r.text("Song") == Some("Mystery Song"))
            .unwrap();
        assert_eq!(mystery.get("Album"), &Cell::Null);
        assert_eq!(mystery.get("Composer"), &Cell::Null);
        assert_eq!(mystery.get("Family"), &Cell::Null);
        assert_eq!(mystery.int(TIMES_PLAYED), Some(1));
    }

    #[test]
    fn shows_report_counts_songs_per_show() {
        let report = shows_report(&sample_dataset());
        let counts: Vec<(Option<i64>, &Cell)> = report
            .records()
            .map(|r| (r.int("Series Index"), r.get(SONGS_PLAYED)))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Some(1), &Cell::Int(3)),
                (Some(2), &Cell::Int(2)),
                (Some(3), &Cell::Int(3)),
                (Some(4), &Cell::Null),
            ]
        );
        assert!(report.has_column("Show Title"));
    }

    #[test]
    fn songs_report_adds_times_played() {
        let report = songs_report(&sample_dataset());
        assert_eq!(report.len(), 7);
        let played: Vec<(Option<&str>, &Cell)> = report
            .records()
            .map(|r| (r.text("Song"), r.get(TIMES_PLAYED)))
            .collect();
        assert_eq!(played[0], (Some("Rocket"), &Cell::Int(2)));
        assert_eq!(played[1], (Some("Lantern"), &Cell::Null));
        assert_eq!(played[2], (Some("Tusk"), &Cell::Int(3)));
    }

    #[test]
    fn display_renames() {
        let dataset = sample_dataset();
        assert_eq!(albums_report(&dataset).columns(), &["Album", "Artist", "Personnel"]);
        assert_eq!(
            artists_report(&dataset).columns(),
            &["Artist", "Genres", "Relation", "Family", "Birthplace"]
        );
        assert_eq!(people_report(&dataset).columns()[0], "Person");
        assert_eq!(people_report(&dataset).len(), 2);
    }

    #[test]
    fn originals_are_songs_by_the_subject() {
        let dataset = sample_dataset();
        let originals = originals_report(&dataset, "Chris Holt");
        let names: Vec<&str> = originals.records().filter_map(|r| r.text("Song")).collect();
        assert_eq!(names, vec!["Rocket", "Lantern"]);
        assert!(originals
            .records()
            .all(|r| r.text("Composer") == Some("Chris Holt")));

        let twice = originals.filter(|r| r.text("Composer") == Some("Chris Holt"));
        assert_eq!(twice, originals);

        let none = originals_report(&dataset, "Nobody");
        assert!(none.is_empty());
        assert_eq!(none.columns(), originals.columns());
    }

    #[test]
    fn reports_are_idempotent() {
        let dataset = sample_dataset();
        assert_eq!(performances_report(&dataset), performances_report(&dataset));
        assert_eq!(shows_report(&dataset), shows_report(&dataset));
        assert_eq!(songs_report(&dataset), songs_report(&dataset));
        assert_eq!(albums_report(&dataset), albums_report(&dataset));
        assert_eq!(artists_report(&dataset), artists_report(&dataset));
        assert_eq!(people_report(&dataset), people_report(&dataset));
        assert_eq!(
            originals_report(&dataset, "Chris Holt"),
            originals_report(&dataset, "Chris Holt")
        );
    }
}
