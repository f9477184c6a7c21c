use super::models::{rows_to_table, Album, Band, Gig, Performance, Person, SheetName, Song};
use super::LoadError;
use crate::reports::Table;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// The raw rows of every sheet, before keys are checked.
#[derive(Clone, Debug, Default)]
pub struct Sheets {
    pub gigs: Vec<Gig>,
    pub performances: Vec<Performance>,
    pub songs: Vec<Song>,
    pub albums: Vec<Album>,
    pub bands: Vec<Band>,
    pub people: Vec<Person>,
    /// Cells that did not coerce and were loaded as blanks.
    pub invalid_values: Vec<Problem>,
}

/// Non-fatal data-quality findings. A dataset with problems still loads;
/// the affected report columns come out null.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    UnknownShow {
        series_index: i64,
        set_position: i64,
    },
    UnknownSong {
        series_index: i64,
        set_position: i64,
        song: String,
        artist: String,
    },
    UnknownArtist {
        sheet: SheetName,
        artist: String,
    },
    /// `row` counts from 1, as in `LoadError::InvalidRow`.
    InvalidValue {
        sheet: SheetName,
        row: usize,
        column: String,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::UnknownShow {
                series_index,
                set_position,
            } => write!(
                f,
                "Performance {}/{} references unknown show {}",
                series_index, set_position, series_index
            ),
            Problem::UnknownSong {
                series_index,
                set_position,
                song,
                artist,
            } => write!(
                f,
                "Performance {}/{} references unknown song \"{}\" by \"{}\"",
                series_index, set_position, song, artist
            ),
            Problem::UnknownArtist { sheet, artist } => {
                write!(f, "{} references unknown artist \"{}\"", sheet, artist)
            }
            Problem::InvalidValue { sheet, row, column } => write!(
                f,
                "{} row {} has an unreadable {} value, left blank",
                sheet, row, column
            ),
        }
    }
}

/// The loaded workbook: read-only rows plus natural-key indexes.
#[derive(Debug, Default)]
pub struct Dataset {
    gigs: Vec<Gig>,
    performances: Vec<Performance>,
    songs: Vec<Song>,
    albums: Vec<Album>,
    bands: Vec<Band>,
    people: Vec<Person>,
    invalid_values: Vec<Problem>,

    gigs_by_index: HashMap<i64, usize>,
    songs_by_key: HashMap<(String, String), usize>,
    bands_by_name: HashMap<String, usize>,
}

fn index_by<T, K, F>(sheet: SheetName, rows: &[T], key: F) -> Result<HashMap<K, usize>, LoadError>
where
    K: Eq + Hash + fmt::Debug,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(rows.len());
    for (pos, row) in rows.iter().enumerate() {
        let k = key(row);
        if index.contains_key(&k) {
            return Err(LoadError::DuplicateKey {
                sheet,
                key: format!("{:?}", k),
            });
        }
        index.insert(k, pos);
    }
    Ok(index)
}

impl Dataset {
    /// Builds the dataset, failing on the first duplicate natural key.
    pub fn from_sheets(sheets: Sheets) -> Result<Dataset, LoadError> {
        let gigs_by_index = index_by(SheetName::Gigs, &sheets.gigs, |g| g.series_index)?;
        index_by(SheetName::Performances, &sheets.performances, |p| {
            (p.series_index, p.set_position)
        })?;
        let songs_by_key = index_by(SheetName::Songs, &sheets.songs, |s| {
            (s.name.clone(), s.band.clone())
        })?;
        index_by(SheetName::Albums, &sheets.albums, |a| {
            (a.name.clone(), a.band.clone())
        })?;
        let bands_by_name = index_by(SheetName::Bands, &sheets.bands, |b| b.name.clone())?;
        index_by(SheetName::People, &sheets.people, |p| p.name.clone())?;

        Ok(Dataset {
            gigs: sheets.gigs,
            performances: sheets.performances,
            songs: sheets.songs,
            albums: sheets.albums,
            bands: sheets.bands,
            people: sheets.people,
            invalid_values: sheets.invalid_values,
            gigs_by_index,
            songs_by_key,
            bands_by_name,
        })
    }

    /// Cells loaded as blanks, then the references between sheets that do
    /// not resolve. Each unknown artist is reported once per sheet.
    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = self.invalid_values.clone();

        for p in self.performances.iter() {
            if self.get_gig(p.series_index).is_none() {
                problems.push(Problem::UnknownShow {
                    series_index: p.series_index,
                    set_position: p.set_position,
                });
            }
            if self.get_song(&p.song, &p.artist).is_none() {
                problems.push(Problem::UnknownSong {
                    series_index: p.series_index,
                    set_position: p.set_position,
                    song: p.song.clone(),
                    artist: p.artist.clone(),
                });
            }
        }

        let artist_refs: [(SheetName, Vec<&str>); 3] = [
            (
                SheetName::Performances,
                self.performances.iter().map(|p| p.artist.as_str()).collect(),
            ),
            (
                SheetName::Songs,
                self.songs.iter().map(|s| s.band.as_str()).collect(),
            ),
            (
                SheetName::Albums,
                self.albums.iter().map(|a| a.band.as_str()).collect(),
            ),
        ];
        for (sheet, artists) in artist_refs.iter() {
            let mut seen: Vec<&str> = Vec::new();
            for artist in artists.iter() {
                if self.get_band(artist).is_none() && !seen.contains(artist) {
                    seen.push(*artist);
                    problems.push(Problem::UnknownArtist {
                        sheet: *sheet,
                        artist: (*artist).to_owned(),
                    });
                }
            }
        }

        problems
    }

    pub fn gigs(&self) -> &[Gig] {
        &self.gigs
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get_gig(&self, series_index: i64) -> Option<&Gig> {
        self.gigs_by_index.get(&series_index).map(|i| &self.gigs[*i])
    }

    pub fn get_song(&self, name: &str, artist: &str) -> Option<&Song> {
        self.songs_by_key
            .get(&(name.to_owned(), artist.to_owned()))
            .map(|i| &self.songs[*i])
    }

    pub fn get_band(&self, name: &str) -> Option<&Band> {
        self.bands_by_name.get(name).map(|i| &self.bands[*i])
    }

    pub fn rows_count(&self, sheet: SheetName) -> usize {
        match sheet {
            SheetName::Gigs => self.gigs.len(),
            SheetName::Performances => self.performances.len(),
            SheetName::Songs => self.songs.len(),
            SheetName::Albums => self.albums.len(),
            SheetName::Bands => self.bands.len(),
            SheetName::People => self.people.len(),
        }
    }

    /// A sheet as a named-column table, columns named as in the workbook.
    pub fn sheet(&self, sheet: SheetName) -> Table {
        match sheet {
            SheetName::Gigs => rows_to_table(&self.gigs),
            SheetName::Performances => rows_to_table(&self.performances),
            SheetName::Songs => rows_to_table(&self.songs),
            SheetName::Albums => rows_to_table(&self.albums),
            SheetName::Bands => rows_to_table(&self.bands),
            SheetName::People => rows_to_table(&self.people),
        }
    }
}
