/// HTML page rendering
use crate::domain::{DisplayRow, DisplayState};
use crate::utils::format_last_update;
use maud::{html, Markup, DOCTYPE};

const PAGE_TITLE: &str = "Earthquakes in Spain (Last 50 Years)";

const STYLE: &str = "
body { font-family: sans-serif; background: #f3f4f6; margin: 0; padding: 1rem; }
h1 { text-align: center; color: #1d4ed8; }
.controls { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.controls button { padding: 0.5rem 1rem; border: none; border-radius: 4px; color: white; font-weight: 600; cursor: pointer; }
.toggle button { background: #2563eb; }
.refresh button { background: #16a34a; }
.last-update { font-size: 0.875rem; color: #374151; }
.loading, .error { text-align: center; }
.error { color: #ef4444; }
table { margin: 0 auto; background: white; border-collapse: collapse; }
th, td { border: 1px solid #d1d5db; padding: 0.5rem 1rem; }
tr.major { background: #b91c1c; color: #fef08a; font-weight: bold; }
.summary { margin-top: 1rem; font-size: 0.875rem; color: #6b7280; text-align: center; }
";

fn layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (PAGE_TITLE) }
                style { (STYLE) }
            }
            body {
                h1 { (PAGE_TITLE) }
                (content)
            }
        }
    }
}

/// Render the whole page from the current state and its derived rows.
/// While a fetch is in flight only the loading indicator shows; an error
/// suppresses the table for that cycle.
pub fn quakes_page(state: &DisplayState, rows: &[DisplayRow], start_year: i32) -> Markup {
    layout(html! {
        @if state.is_loading {
            p class="loading" { "Loading..." }
        } @else {
            (controls(state))
            @if let Some(message) = &state.error_message {
                p class="error" { (message) }
            } @else {
                (results_table(rows))
                (summary_line(state, rows.len(), start_year))
            }
        }
    })
}

fn controls(state: &DisplayState) -> Markup {
    let toggle_label = if state.filter_spain_mention {
        "Show All Locations"
    } else {
        "Show Only Spain Locations"
    };

    html! {
        div class="controls" {
            form class="toggle" action="/filter" method="post" {
                button type="submit" { (toggle_label) }
            }
            form class="refresh" action="/refresh" method="post" {
                button type="submit" { "Refresh Results" }
            }
            @if let Some(at) = state.last_update {
                span class="last-update" { "Last updated: " (format_last_update(at)) }
            }
        }
    }
}

fn results_table(rows: &[DisplayRow]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Major" }
                    th { "Date" }
                    th { "Magnitude" }
                    th { "Location" }
                    th { "Coordinates" }
                    th { "Details" }
                }
            }
            tbody {
                @for row in rows {
                    tr class=[row.is_major.then_some("major")] {
                        td { (if row.is_major { "true" } else { "false" }) }
                        td { (row.date_label) }
                        td { @if let Some(mag) = row.magnitude { (mag) } }
                        td { @if let Some(place) = &row.place { (place) } }
                        td { (format!("{:.2}, {:.2}", row.latitude, row.longitude)) }
                        td {
                            @if let Some(url) = &row.details_url {
                                a href=(url) target="_blank" rel="noopener noreferrer" { "USGS" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn summary_line(state: &DisplayState, shown: usize, start_year: i32) -> Markup {
    let mode = if state.filter_spain_mention {
        "with Spain in location"
    } else {
        "in Spain"
    };

    html! {
        p class="summary" {
            "Showing " (shown) " earthquakes " (mode) " since " (start_year) "."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeismicEvent;
    use crate::services::build_rows;
    use chrono::Utc;

    const START_YEAR: i32 = 1975;

    fn event(id: &str, mag: Option<f64>, place: &str) -> SeismicEvent {
        SeismicEvent {
            id: id.to_string(),
            magnitude: mag,
            place: Some(place.to_string()),
            occurred_at_millis: 1_718_447_400_000,
            details_url: Some(format!("https://example.org/{id}")),
            longitude: -3.6,
            latitude: 37.18,
            depth: 10.0,
        }
    }

    fn fetched_state() -> DisplayState {
        let mut state = DisplayState::new();
        state.finish_success(
            vec![
                event("lisbon", Some(3.1), "Lisbon, Portugal"),
                event("granada", Some(6.2), "Granada, Spain"),
            ],
            Utc::now(),
        );
        state
    }

    fn render(state: &DisplayState) -> String {
        let rows = build_rows(&state.events, state.filter_spain_mention);
        quakes_page(state, &rows, START_YEAR).into_string()
    }

    #[test]
    fn loading_page_has_indicator_and_no_table() {
        let html = render(&DisplayState::new());
        assert!(html.contains("Loading..."));
        assert!(!html.contains("<table"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn error_page_shows_message_and_no_table() {
        let mut state = DisplayState::new();
        state.finish_failure("Failed to fetch data".to_string());

        let html = render(&state);
        assert!(html.contains("Failed to fetch data"));
        assert!(!html.contains("<table"));
        // refresh stays available so the user can retry
        assert!(html.contains("Refresh Results"));
    }

    #[test]
    fn successful_fetch_after_error_renders_table_again() {
        let mut state = DisplayState::new();
        state.finish_failure("boom".to_string());
        state.begin_fetch();
        state.finish_success(vec![event("granada", Some(6.2), "Granada, Spain")], Utc::now());

        let html = render(&state);
        assert!(!html.contains("boom"));
        assert!(html.contains("<table"));
    }

    #[test]
    fn unfiltered_page_lists_all_rows_largest_first() {
        let state = fetched_state();
        let html = render(&state);

        assert!(html.contains("Granada, Spain"));
        assert!(html.contains("Lisbon, Portugal"));
        let granada = html.find("Granada, Spain").unwrap();
        let lisbon = html.find("Lisbon, Portugal").unwrap();
        assert!(granada < lisbon);

        assert!(html.contains("Show Only Spain Locations"));
        assert!(html.contains("Showing 2 earthquakes in Spain since 1975."));
    }

    #[test]
    fn toggled_page_shows_only_spain_and_flips_label() {
        let mut state = fetched_state();
        state.toggle_filter();

        let html = render(&state);
        assert!(html.contains("Granada, Spain"));
        assert!(!html.contains("Lisbon, Portugal"));
        assert!(html.contains("Show All Locations"));
        assert!(html.contains("Showing 1 earthquakes with Spain in location since 1975."));
    }

    #[test]
    fn major_rows_get_alternate_styling() {
        let state = fetched_state();
        let html = render(&state);

        assert!(html.contains("class=\"major\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn last_update_line_renders_after_success() {
        let state = fetched_state();
        let html = render(&state);
        assert!(html.contains("Last updated: "));
    }
}
