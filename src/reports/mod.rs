mod aggregates;
mod pages;
mod summary;
mod table;

pub use aggregates::{
    classify_artist, songs_by_artist, songs_by_year, Classification, Classified, NUMBER_OF_SONGS,
    ORIGINAL_ACT, ORIGINAL_RELATIONSHIP, ORIGINATING_ARTIST, ORIGINATION_YEAR,
};
pub use pages::{
    albums_report, artists_report, originals_report, people_report, performances_report,
    shows_report, songs_report, SONGS_PLAYED, TIMES_PLAYED,
};
pub use summary::{latest_setlist, songs_per_show, FilterOptions, SeriesSummary};
pub use table::{Cell, Record, Table};
