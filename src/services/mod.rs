/// Business logic services layer
use crate::clients::UsgsClient;
use crate::domain::{DisplayRow, DisplayState, QueryWindow, SeismicEvent, MAJOR_MAGNITUDE};
use crate::utils::{date_label, round2};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Build display rows from fetched events: apply the Spain filter, sort by
/// magnitude descending and derive the major flag. Pure function of its
/// inputs; absent magnitudes compare as 0 but stay absent in the row.
pub fn build_rows(events: &[SeismicEvent], filter_spain_mention: bool) -> Vec<DisplayRow> {
    let mut retained: Vec<&SeismicEvent> = events
        .iter()
        .filter(|ev| !filter_spain_mention || mentions_spain(ev))
        .collect();

    // stable sort keeps feed order for equal magnitudes
    retained.sort_by(|a, b| {
        let a_mag = a.magnitude.unwrap_or(0.0);
        let b_mag = b.magnitude.unwrap_or(0.0);
        b_mag.total_cmp(&a_mag)
    });

    retained
        .into_iter()
        .map(|ev| DisplayRow {
            id: ev.id.clone(),
            is_major: matches!(ev.magnitude, Some(mag) if mag >= MAJOR_MAGNITUDE),
            date_label: date_label(ev.occurred_at_millis),
            magnitude: ev.magnitude,
            place: ev.place.clone(),
            latitude: round2(ev.latitude),
            longitude: round2(ev.longitude),
            details_url: ev.details_url.clone(),
        })
        .collect()
}

fn mentions_spain(event: &SeismicEvent) -> bool {
    event
        .place
        .as_ref()
        .is_some_and(|place| place.to_lowercase().contains("spain"))
}

/// Seismic event service: owns the display state and the feed client
pub struct QuakeService {
    client: UsgsClient,
    window: QueryWindow,
    state: RwLock<DisplayState>,
}

impl QuakeService {
    pub fn new(client: UsgsClient, window: QueryWindow) -> Self {
        Self {
            client,
            window,
            state: RwLock::new(DisplayState::new()),
        }
    }

    /// Startup query window (the end date is recomputed per fetch)
    pub fn window(&self) -> &QueryWindow {
        &self.window
    }

    /// Run one full fetch cycle. Overlapping cycles are allowed; each one
    /// writes the state when it completes, so the last completion wins.
    pub async fn refresh(&self) {
        self.state.write().await.begin_fetch();

        let window = self.window.with_end_today();
        match self.client.fetch_events(&window).await {
            Ok(events) => {
                info!("Fetched {} events from {}", events.len(), self.client.base_url());
                self.state
                    .write()
                    .await
                    .finish_success(events, Utc::now());
            }
            Err(err) => {
                error!("Feed fetch failed: {}", err);
                self.state.write().await.finish_failure(err.message().to_string());
            }
        }
    }

    /// Snapshot of the current display state
    pub async fn snapshot(&self) -> DisplayState {
        self.state.read().await.clone()
    }

    /// Flip the Spain filter without fetching; returns the new value
    pub async fn toggle_filter(&self) -> bool {
        self.state.write().await.toggle_filter()
    }
}
