use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task;

use crate::configuration::TOP_COUNTRIES_LIMIT;
use crate::data_structures::{CountryCount, StateVector, ALL_COUNTRIES};
use crate::errors::{DashboardError, Result};
use crate::fetcher::Fetcher;
use crate::normalizer::normalize;

mod page;

pub const FETCH_ERROR_NOTICE: &str = "Failed to fetch data from API.";
pub const PROCESSING_ERROR_NOTICE: &str = "Error processing data";

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<Mutex<Fetcher>>,
}

impl AppState {
    pub fn new(fetcher: Fetcher) -> AppState {
        AppState {
            fetcher: Arc::new(Mutex::new(fetcher)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_data))
        .with_state(state)
}

async fn dashboard_page() -> Html<&'static str> {
    Html(page::DASHBOARD_HTML)
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    country: Option<String>,
}

/// Everything the dashboard page renders from, for one selector value.
/// `countries` always reflects the unfiltered table so the selector keeps
/// its full option list; `rows` and `top_countries` reflect the filtered one.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    countries: Vec<String>,
    selected: String,
    rows: Vec<StateVector>,
    top_countries: Vec<CountryCount>,
    error: Option<String>,
}

impl DashboardData {
    fn failed(selected: &str, notice: &str) -> DashboardData {
        DashboardData {
            countries: Vec::new(),
            selected: selected.to_string(),
            rows: Vec::new(),
            top_countries: Vec::new(),
            error: Some(notice.to_string()),
        }
    }
}

async fn dashboard_data(State(state): State<AppState>, Query(query): Query<DashboardQuery>) -> Json<DashboardData> {
    let selected = query.country.unwrap_or_else(|| ALL_COUNTRIES.to_string());

    // the fetcher blocks on the network for up to the request timeout
    let fetcher = state.fetcher.clone();
    let fetch_result = match task::spawn_blocking(move || fetcher.lock().unwrap().fetch()).await {
        Ok(result) => result,
        Err(e) => Err(DashboardError::internal(format!("fetch task died: {e}"))),
    };

    Json(build_dashboard(fetch_result, &selected))
}

/// One full pipeline pass: fetch result -> normalize -> filter -> aggregate.
/// Failures degrade to an empty table plus a banner text, never a panic;
/// the next request starts a fresh pass.
fn build_dashboard(fetch_result: Result<Value>, selected: &str) -> DashboardData {
    let payload = match fetch_result {
        Ok(payload) => payload,
        Err(e) => {
            error!("Fetch failed: {e}");
            return DashboardData::failed(selected, FETCH_ERROR_NOTICE);
        }
    };

    let table = match normalize(&payload) {
        Ok(table) => table,
        Err(e) => {
            error!("Processing failed: {e}");
            return DashboardData::failed(selected, PROCESSING_ERROR_NOTICE);
        }
    };

    let filtered = table.filter_by_country(selected);

    DashboardData {
        countries: table.distinct_countries(),
        selected: selected.to_string(),
        top_countries: filtered.count_by_country(TOP_COUNTRIES_LIMIT),
        rows: filtered.rows().to_vec(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_payload() -> Value {
        json!({
            "states": [
                ["a1", "CS1  ", "Germany", 0, 0, 10.0, 50.0, 1000, false, 200, 90, 0, null, 1000, null, false, 0],
                ["a2", "CS2", "France", 0, 0, 2.5, 48.8, 900, false, 210, 180, 0, null, 950, null, false, 0],
                ["a3", "CS3", "Germany", 0, 0, 13.4, 52.5, 1100, false, 190, 270, 0, null, 1150, null, false, 0]
            ]
        })
    }

    #[test]
    fn successful_pass_builds_all_panels() {
        let data = build_dashboard(Ok(sample_payload()), ALL_COUNTRIES);

        assert!(data.error.is_none());
        assert_eq!(data.countries, vec!["Germany", "France"]);
        assert_eq!(data.rows.len(), 3);
        assert_eq!(data.top_countries[0].country, "Germany");
        assert_eq!(data.top_countries[0].flights, 2);
    }

    #[test]
    fn country_selector_narrows_rows_and_counts() {
        let data = build_dashboard(Ok(sample_payload()), "France");

        assert_eq!(data.selected, "France");
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.top_countries, vec![CountryCount { country: "France".to_string(), flights: 1 }]);
        // the selector list still comes from the unfiltered table
        assert_eq!(data.countries, vec!["Germany", "France"]);
    }

    #[test]
    fn unknown_selector_yields_empty_rows_not_an_error() {
        let data = build_dashboard(Ok(sample_payload()), "Atlantis");

        assert!(data.error.is_none());
        assert!(data.rows.is_empty());
        assert!(data.top_countries.is_empty());
    }

    #[test]
    fn fetch_failure_maps_to_the_fetch_notice() {
        let result = Err(DashboardError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        let data = build_dashboard(result, ALL_COUNTRIES);

        assert_eq!(data.error.as_deref(), Some(FETCH_ERROR_NOTICE));
        assert!(data.rows.is_empty());
        assert!(data.top_countries.is_empty());
    }

    #[test]
    fn malformed_payload_maps_to_the_processing_notice() {
        let data = build_dashboard(Ok(json!({"states": [["too", "short"]]})), ALL_COUNTRIES);

        assert_eq!(data.error.as_deref(), Some(PROCESSING_ERROR_NOTICE));
        assert!(data.rows.is_empty());
    }

    #[test]
    fn dropped_rows_leave_a_clean_empty_table() {
        let payload = json!({
            "states": [["a1", null, null, 0, 0, null, null, null, false, null, null, null, null, null, null, false, 0]]
        });
        let data = build_dashboard(Ok(payload), ALL_COUNTRIES);

        assert!(data.error.is_none());
        assert!(data.rows.is_empty());
        assert!(data.countries.is_empty());
    }
}
