use std::time::Duration;

use log::{info, warn};
use serde_json::Value;

use crate::configuration::{CACHE_TTL, REQUEST_TIMEOUT};
use crate::errors::{DashboardError, Result};
use crate::expiring_dict::ExpiringDict;

/// Fetches the raw states payload from the configured endpoint.
/// Successful payloads are kept in an ExpiringDict keyed by the endpoint url,
/// so repeated calls within the freshness window never hit the network.
pub struct Fetcher {
    url: String,
    client: reqwest::blocking::Client,
    cache: ExpiringDict<String, Value>,
}

impl Fetcher {
    pub fn new(url: &str) -> Fetcher {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build().unwrap();

        Fetcher {
            url: url.to_string(),
            client,
            cache: ExpiringDict::new(CACHE_TTL),
        }
    }

    pub fn fetch(&mut self) -> Result<Value> {
        if let Some(payload) = self.cache.get(&self.url) {
            return Ok(payload.clone());
        }

        let payload = self.fetch_from_api()?;
        self.cache.insert(self.url.clone(), payload.clone());

        Ok(payload)
    }

    fn fetch_from_api(&self) -> Result<Value> {
        info!("Fetching flight states from {}", self.url);

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("States request to {} returned {status}", self.url);
            return Err(DashboardError::Status(status));
        }

        let payload: Value = response.json()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // nothing listens here; a real request fails immediately
    const DEAD_URL: &str = "http://127.0.0.1:9/states/all";

    #[test]
    fn cached_payload_is_served_without_a_request() {
        let mut fetcher = Fetcher::new(DEAD_URL);
        let payload = json!({"states": []});
        fetcher.cache.insert(DEAD_URL.to_string(), payload.clone());

        // two calls within the window; both succeed although the url is dead
        assert_eq!(fetcher.fetch().unwrap(), payload);
        assert_eq!(fetcher.fetch().unwrap(), payload);
    }

    #[test]
    fn expired_cache_triggers_a_new_request() {
        let mut fetcher = Fetcher::new(DEAD_URL);
        fetcher.cache = ExpiringDict::new(0);
        fetcher.cache.insert(DEAD_URL.to_string(), json!({"states": []}));

        std::thread::sleep(std::time::Duration::from_millis(10));

        // the record expired, so this goes to the (dead) endpoint
        assert!(matches!(fetcher.fetch(), Err(DashboardError::Http(_))));
    }

    #[test]
    fn network_failure_is_an_error_value() {
        let mut fetcher = Fetcher::new(DEAD_URL);
        assert!(matches!(fetcher.fetch(), Err(DashboardError::Http(_))));
    }
}
