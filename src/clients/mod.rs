/// External API clients module
use crate::domain::{QueryWindow, SeismicEvent};
use crate::errors::FetchResult;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_seconds: u64) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent("quake-watch-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// GeoJSON document returned by the feed; `features` may be absent
#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    features: Vec<FeedFeature>,
}

#[derive(Debug, Deserialize)]
struct FeedFeature {
    id: String,
    #[serde(default)]
    properties: FeedProperties,
    #[serde(default)]
    geometry: FeedGeometry,
}

#[derive(Debug, Default, Deserialize)]
struct FeedProperties {
    mag: Option<f64>,
    place: Option<String>,
    #[serde(default)]
    time: i64,
    url: Option<String>,
}

/// Coordinates come as `[longitude, latitude, depth]`
#[derive(Debug, Default, Deserialize)]
struct FeedGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

impl FeedFeature {
    fn into_event(self) -> SeismicEvent {
        let coord = |i: usize| self.geometry.coordinates.get(i).copied().unwrap_or(0.0);
        SeismicEvent {
            id: self.id,
            magnitude: self.properties.mag,
            place: self.properties.place,
            occurred_at_millis: self.properties.time,
            details_url: self.properties.url,
            longitude: coord(0),
            latitude: coord(1),
            depth: coord(2),
        }
    }
}

/// Seismic event feed client
pub struct UsgsClient {
    http_client: HttpClient,
    base_url: String,
}

impl UsgsClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> FetchResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout_seconds)?,
            base_url,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all events in the window, normalized; an empty or missing
    /// feature list is a successful empty result
    pub async fn fetch_events(&self, window: &QueryWindow) -> FetchResult<Vec<SeismicEvent>> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.base_url)
            .query(&window.to_query())
            .send()
            .await?
            .error_for_status()?;

        let doc: FeedDocument = resp.json().await?;

        Ok(doc
            .features
            .into_iter()
            .map(FeedFeature::into_event)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: serde_json::Value) -> Vec<SeismicEvent> {
        let doc: FeedDocument = serde_json::from_value(value).unwrap();
        doc.features.into_iter().map(FeedFeature::into_event).collect()
    }

    #[test]
    fn decodes_feature_into_event() {
        let events = decode(serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "id": "us1000abcd",
                "properties": {
                    "mag": 5.4,
                    "place": "12 km NW of Granada, Spain",
                    "time": 1_718_447_400_000i64,
                    "url": "https://example.org/us1000abcd"
                },
                "geometry": { "coordinates": [-3.6, 37.18, 10.0] }
            }]
        }));

        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.id, "us1000abcd");
        assert_eq!(ev.magnitude, Some(5.4));
        assert_eq!(ev.place.as_deref(), Some("12 km NW of Granada, Spain"));
        assert_eq!(ev.occurred_at_millis, 1_718_447_400_000);
        assert_eq!(ev.longitude, -3.6);
        assert_eq!(ev.latitude, 37.18);
        assert_eq!(ev.depth, 10.0);
    }

    #[test]
    fn missing_features_decodes_to_empty_list() {
        let events = decode(serde_json::json!({ "type": "FeatureCollection" }));
        assert!(events.is_empty());
    }

    #[test]
    fn tolerates_absent_optional_fields() {
        let events = decode(serde_json::json!({
            "features": [{
                "id": "sparse",
                "properties": { "time": 0 },
                "geometry": { "coordinates": [] }
            }]
        }));

        let ev = &events[0];
        assert!(ev.magnitude.is_none());
        assert!(ev.place.is_none());
        assert!(ev.details_url.is_none());
        assert_eq!(ev.longitude, 0.0);
        assert_eq!(ev.latitude, 0.0);
    }
}
