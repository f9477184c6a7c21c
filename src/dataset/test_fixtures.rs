//! A small but complete dataset shared by the unit tests.
//!
//! Four shows (the last one without performances), one performance of a
//! song missing from Songs, and one song whose artist is missing from Bands.

use super::models::{Album, Band, Gig, Performance, Person, Song};
use super::{Dataset, Sheets};

fn gig(series_index: i64) -> Gig {
    Gig {
        series_index,
        location: Some("CH Studio, Dallas TX".to_owned()),
        start: Some(format!("2020-0{}-02 19:00", series_index)),
        title: Some(format!("ART #{}", series_index)),
    }
}

fn performance(series_index: i64, set_position: i64, song: &str, artist: &str) -> Performance {
    Performance {
        series_index,
        set_position,
        song: song.to_owned(),
        artist: artist.to_owned(),
    }
}

fn song(name: &str, band: &str, album: Option<&str>, year: Option<i32>, composer: Option<&str>) -> Song {
    Song {
        name: name.to_owned(),
        band: band.to_owned(),
        album: album.map(str::to_owned),
        year,
        genre: Some("Rock".to_owned()),
        composer: composer.map(str::to_owned),
        covered: None,
    }
}

fn band(name: &str, relationship: &str, family: &str) -> Band {
    Band {
        name: name.to_owned(),
        genres: Some("Rock".to_owned()),
        relationship: Some(relationship.to_owned()),
        family: Some(family.to_owned()),
        birthplace: None,
    }
}

pub fn sample_sheets() -> Sheets {
    Sheets {
        gigs: vec![gig(1), gig(2), gig(3), gig(4)],
        performances: vec![
            performance(1, 1, "Tusk", "Fleetwood Mac"),
            performance(1, 2, "Rocket", "The Hochmans"),
            performance(1, 3, "Dreams", "Fleetwood Mac"),
            performance(2, 1, "Tusk", "Fleetwood Mac"),
            performance(2, 2, "Blackbird", "The Beatles"),
            performance(3, 1, "Tusk", "Fleetwood Mac"),
            performance(3, 2, "Mystery Song", "Nobody Knows"),
            performance(3, 3, "Rocket", "The Hochmans"),
        ],
        songs: vec![
            song("Rocket", "The Hochmans", Some("Hochmans"), Some(2004), Some("Chris Holt")),
            song("Lantern", "The Hochmans", None, Some(2004), Some("Chris Holt")),
            song("Tusk", "Fleetwood Mac", Some("Tusk"), Some(1979), Some("Lindsey Buckingham")),
            song("Dreams", "Fleetwood Mac", Some("Rumours"), Some(1977), Some("Stevie Nicks")),
            song("Landslide", "Fleetwood Mac", None, Some(1975), Some("Stevie Nicks")),
            song("Blackbird", "The Beatles", None, Some(1968), Some("Lennon-McCartney")),
            song("Haunted", "Ghost Band", None, None, None),
        ],
        albums: vec![
            Album {
                name: "Tusk".to_owned(),
                band: "Fleetwood Mac".to_owned(),
                personnel: Some("Buckingham, Nicks, Fleetwood, McVie, McVie".to_owned()),
            },
            Album {
                name: "Rumours".to_owned(),
                band: "Fleetwood Mac".to_owned(),
                personnel: None,
            },
            Album {
                name: "Hochmans".to_owned(),
                band: "The Hochmans".to_owned(),
                personnel: Some("Chris Holt".to_owned()),
            },
        ],
        bands: vec![
            band("The Hochmans", "Original", "Holt"),
            band("Fleetwood Mac", "Influence", "Fleetwood Mac"),
            band("The Beatles", "Influence", "Beatles"),
        ],
        people: vec![
            Person {
                name: "Chris Holt".to_owned(),
                year_born: Some(1970),
                year_died: None,
                instruments: Some("Guitar, Bass, Keys".to_owned()),
                bands: Some("The Hochmans".to_owned()),
                notes: None,
                allmusic: None,
                wikipedia: None,
            },
            Person {
                name: "Stevie Nicks".to_owned(),
                year_born: Some(1948),
                year_died: None,
                instruments: Some("Vocals".to_owned()),
                bands: Some("Fleetwood Mac".to_owned()),
                notes: None,
                allmusic: None,
                wikipedia: None,
            },
        ],
        invalid_values: Vec::new(),
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset::from_sheets(sample_sheets()).expect("sample sheets have unique keys")
}
