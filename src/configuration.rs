use std::env;
use simplelog::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const OPENSKY_STATES_URL: &str = "https://opensky-network.org/api/states/all";

pub const REQUEST_TIMEOUT: u64 = 10;    // [s]

pub const CACHE_TTL: i64 = 600_000;     // [ms] fetched payloads stay valid for 10 minutes

pub const TOP_COUNTRIES_LIMIT: usize = 10;

const BIND_HOST: &str = "0.0.0.0";
const BIND_PORT: &str = "8080";

pub fn get_opensky_url() -> String {
    env::var("OPENSKY_URL").unwrap_or(OPENSKY_STATES_URL.into())
}

pub fn get_bind_address() -> String {
    let host = env::var("BIND_HOST").unwrap_or(BIND_HOST.into());
    let port = env::var("BIND_PORT").unwrap_or(BIND_PORT.into());
    format!("{host}:{port}")
}
