//! Shared constants for end-to-end tests
//!
//! When the fixture workbook changes, update only this file.

// ============================================================================
// Test Workbook Contents
// ============================================================================

/// Performer the originals page is built for
pub const SUBJECT: &str = "Chris Holt";

/// The subject's own band, marked `Original` in the Bands sheet
pub const ORIGINAL_BAND: &str = "The Hochmans";

/// A covered band present in the Bands sheet
pub const COVERED_BAND: &str = "Fleetwood Mac";

/// A song artist missing from the Bands sheet
pub const UNLISTED_BAND: &str = "Ghost Band";

pub const SHOW_COUNT: usize = 3;
pub const PERFORMANCE_COUNT: usize = 6;
pub const SONG_COUNT: usize = 5;
pub const ALBUM_COUNT: usize = 2;
pub const BAND_COUNT: usize = 2;
pub const PEOPLE_COUNT: usize = 1;

/// Series index of the most recent show
pub const LATEST_SHOW: i64 = 3;

/// Songs in the most recent show
pub const LATEST_SHOW_SONGS: usize = 2;

/// Songs composed by the subject
pub const ORIGINAL_SONG_COUNT: usize = 2;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Cache max-age configured on the test server
pub const TEST_CACHE_AGE_SEC: usize = 60;

/// Earliest and latest song years in the fixture workbook
pub const FIRST_YEAR: i64 = 1977;
pub const LAST_YEAR: i64 = 2004;
