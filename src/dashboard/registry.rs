use super::page::{NavEntry, Page, PageKey, Section};
use crate::dataset::Dataset;
use crate::reports::{
    albums_report, artists_report, latest_setlist, originals_report, people_report,
    performances_report, shows_report, songs_by_artist, songs_by_year, songs_per_show,
    songs_report, FilterOptions, SeriesSummary, NUMBER_OF_SONGS, ORIGINAL_ACT,
    ORIGINATING_ARTIST, ORIGINATION_YEAR, SONGS_PLAYED, Table,
};
use serde::Serialize;
use tracing::{info, warn};

pub const DEFAULT_SUBJECT: &str = "Chris Holt";
pub const DEFAULT_TITLE: &str =
    "Chris Holt's All Request Thursdays, Live from CH Studio in Dallas TX";
pub const DEFAULT_MIN_SONGS_PER_ARTIST: usize = 5;

/// Presentation settings applied when the dashboard is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSettings {
    pub title: String,
    /// Performer of the series. Songs composed by them are the originals.
    pub subject: String,
    /// Paragraphs shown on the splash page before the series headline.
    pub intro: Vec<String>,
    pub footnote: Option<String>,
    /// Artists with fewer songs are left out of the songs-by-artist chart.
    pub min_songs_per_artist: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            title: DEFAULT_TITLE.to_owned(),
            subject: DEFAULT_SUBJECT.to_owned(),
            intro: Vec::new(),
            footnote: None,
            min_songs_per_artist: DEFAULT_MIN_SONGS_PER_ARTIST,
        }
    }
}

/// Every page of the site, built once from the dataset.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    title: String,
    subject: String,
    footnote: Option<String>,
    pages: Vec<Page>,
    summary: SeriesSummary,
    filters: FilterOptions,
    unmatched_artists: Vec<String>,
}

fn data_section(page: PageKey, table: Table) -> Section {
    Section::table(format!("Data by {}", page.name()), table)
}

impl Dashboard {
    pub fn build(dataset: &Dataset, settings: &DashboardSettings) -> Dashboard {
        info!("Building dashboard pages...");
        let summary = SeriesSummary::from_dataset(dataset);
        let filters = FilterOptions::from_dataset(dataset);

        let performances = performances_report(dataset);
        let shows = shows_report(dataset);

        let by_artist = songs_by_artist(dataset, settings.min_songs_per_artist);
        for artist in by_artist.unmatched.iter() {
            warn!(
                "Artist \"{}\" is not in the Bands sheet, not flagged as an original act",
                artist
            );
        }

        let mut paragraphs = settings.intro.clone();
        paragraphs.push(summary.headline(&settings.subject));

        let splash = Page::new(
            PageKey::Splash,
            &settings.title,
            vec![
                Section::Text {
                    title: None,
                    paragraphs,
                },
                Section::table("Setlist from latest show", latest_setlist(&performances)),
                Section::bar_chart(
                    format!(
                        "Number of Songs by Artist (played at least {} songs)",
                        settings.min_songs_per_artist
                    ),
                    by_artist.table,
                    ORIGINATING_ARTIST,
                    NUMBER_OF_SONGS,
                )
                .colored_by(ORIGINAL_ACT),
                Section::bar_chart(
                    "Number of Songs by Year of Origination",
                    songs_by_year(dataset),
                    ORIGINATION_YEAR,
                    NUMBER_OF_SONGS,
                ),
            ],
        );

        let songs_per_show_chart = Section::bar_chart(
            "Number of Songs Per Show",
            songs_per_show(&shows),
            "Show Title",
            SONGS_PLAYED,
        );

        let pages = vec![
            splash,
            Page::new(
                PageKey::Performances,
                &settings.title,
                vec![data_section(PageKey::Performances, performances)],
            ),
            Page::new(
                PageKey::Shows,
                &settings.title,
                vec![data_section(PageKey::Shows, shows), songs_per_show_chart],
            ),
            Page::new(
                PageKey::Songs,
                &settings.title,
                vec![data_section(PageKey::Songs, songs_report(dataset))],
            ),
            Page::new(
                PageKey::Albums,
                &settings.title,
                vec![data_section(PageKey::Albums, albums_report(dataset))],
            ),
            Page::new(
                PageKey::Artists,
                &settings.title,
                vec![data_section(PageKey::Artists, artists_report(dataset))],
            ),
            Page::new(
                PageKey::People,
                &settings.title,
                vec![data_section(PageKey::People, people_report(dataset))],
            ),
            Page::new(
                PageKey::Originals,
                &settings.title,
                vec![data_section(
                    PageKey::Originals,
                    originals_report(dataset, &settings.subject),
                )],
            ),
        ];
        info!("Built {} pages.", pages.len());

        Dashboard {
            title: settings.title.clone(),
            subject: settings.subject.clone(),
            footnote: settings.footnote.clone(),
            pages,
            summary,
            filters,
            unmatched_artists: by_artist.unmatched,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn footnote(&self) -> Option<&str> {
        self.footnote.as_deref()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, key: PageKey) -> Option<&Page> {
        self.pages.iter().find(|p| p.key == key)
    }

    pub fn page_by_key(&self, key: &str) -> Option<&Page> {
        key.parse().ok().and_then(|key| self.page(key))
    }

    /// Maps a URL path to its page. A trailing slash is ignored.
    pub fn resolve(&self, path: &str) -> Option<&Page> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        self.pages.iter().find(|p| p.href == path)
    }

    pub fn navigation(&self) -> Vec<NavEntry> {
        self.pages
            .iter()
            .map(|p| NavEntry {
                key: p.key,
                name: p.name,
                href: p.href,
            })
            .collect()
    }

    pub fn summary(&self) -> &SeriesSummary {
        &self.summary
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Song artists that could not be classified as original or not.
    pub fn unmatched_artists(&self) -> &[String] {
        &self.unmatched_artists
    }
}
