/// Domain models for the application
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::Serialize;

/// Fixed bounding box covering the Spain region
pub const MIN_LATITUDE: f64 = 36.0;
pub const MAX_LATITUDE: f64 = 44.0;
pub const MIN_LONGITUDE: f64 = -9.5;
pub const MAX_LONGITUDE: f64 = 4.0;

/// Maximum number of records the feed returns in one query
pub const RESULT_LIMIT: u32 = 20000;

/// How far back the query window reaches
pub const YEARS_BACK: u32 = 50;

/// Magnitude at or above which an event counts as major
pub const MAJOR_MAGNITUDE: f64 = 5.0;

/// One seismic event as normalized from the feed
#[derive(Debug, Clone, Serialize)]
pub struct SeismicEvent {
    pub id: String,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub occurred_at_millis: i64,
    pub details_url: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub depth: f64,
}

/// Time range used for every fetch, paired with the fixed bounding box
#[derive(Debug, Clone)]
pub struct QueryWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl QueryWindow {
    /// Build the window for the current date: 50 years back up to today
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        let start = today
            .checked_sub_months(Months::new(12 * YEARS_BACK))
            .unwrap_or(today);
        Self {
            start_date: start,
            end_date: today,
        }
    }

    /// Same window with the end date recomputed to today
    pub fn with_end_today(&self) -> Self {
        Self {
            start_date: self.start_date,
            end_date: Utc::now().date_naive(),
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// Query parameters for the feed, dates rendered date-only ISO 8601
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", "geojson".to_string()),
            ("starttime", self.start_date.to_string()),
            ("endtime", self.end_date.to_string()),
            ("minlatitude", MIN_LATITUDE.to_string()),
            ("maxlatitude", MAX_LATITUDE.to_string()),
            ("minlongitude", MIN_LONGITUDE.to_string()),
            ("maxlongitude", MAX_LONGITUDE.to_string()),
            ("limit", RESULT_LIMIT.to_string()),
        ]
    }
}

/// One table row, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub is_major: bool,
    pub date_label: String,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub details_url: Option<String>,
}

/// Session display state, owned by the service for the process lifetime
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub events: Vec<SeismicEvent>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub filter_spain_mention: bool,
    pub last_update: Option<DateTime<Utc>>,
}

impl DisplayState {
    /// Initial state: a fetch starts immediately at startup
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            is_loading: true,
            error_message: None,
            filter_spain_mention: false,
            last_update: None,
        }
    }

    /// A fetch is starting: show the loading indicator, clear any stale error
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// A fetch completed: replace the events wholesale and stamp the time
    pub fn finish_success(&mut self, events: Vec<SeismicEvent>, at: DateTime<Utc>) {
        self.events = events;
        self.error_message = None;
        self.last_update = Some(at);
        self.is_loading = false;
    }

    /// A fetch failed: keep prior events in state, surface the message
    pub fn finish_failure(&mut self, message: String) {
        self.error_message = Some(message);
        self.is_loading = false;
    }

    /// Flip the Spain filter; returns the new value
    pub fn toggle_filter(&mut self) -> bool {
        self.filter_spain_mention = !self.filter_spain_mention;
        self.filter_spain_mention
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
