use serde::Serialize;

/// Selector value that switches country filtering off.
pub const ALL_COUNTRIES: &str = "All";

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PositionSource {
    Unknown = -1,
    AdsB = 0,
    Asterix = 1,
    Mlat = 2,
    Flarm = 3,
}

impl PositionSource {
    pub fn from_i64(value: i64) -> PositionSource {
        match value {
            0 => PositionSource::AdsB,
            1 => PositionSource::Asterix,
            2 => PositionSource::Mlat,
            3 => PositionSource::Flarm,
            _ => PositionSource::Unknown,
        }
    }
}

/// One aircraft observation as reported by the states endpoint.
/// Field order matches the 17 positional fields of a raw state record.
#[derive(Debug, Clone, Serialize)]
pub struct StateVector {
    pub icao24: String,
    pub callsign: String,
    pub origin_country: String,
    pub time_position: Option<i64>,
    pub last_contact: Option<i64>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    pub velocity: Option<f64>,
    pub true_track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub sensors: Option<Vec<i64>>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: PositionSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub flights: usize,
}

/// Ordered collection of cleaned state vectors. Rows keep the order of the
/// raw payload; filtering returns a new table and never mutates this one.
#[derive(Debug, Clone, Default)]
pub struct FlightTable {
    rows: Vec<StateVector>,
}

impl FlightTable {
    pub fn new(rows: Vec<StateVector>) -> FlightTable {
        FlightTable {
            rows,
        }
    }

    pub fn empty() -> FlightTable {
        FlightTable::new(Vec::new())
    }

    pub fn rows(&self) -> &[StateVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Subset of rows matching the selected origin country. The "All"
    /// sentinel passes every row through; a country not present in the
    /// table yields an empty result.
    pub fn filter_by_country(&self, selector: &str) -> FlightTable {
        if selector == ALL_COUNTRIES {
            return self.clone();
        }

        let rows = self.rows.iter()
            .filter(|row| row.origin_country == selector)
            .cloned()
            .collect();

        FlightTable::new(rows)
    }

    /// Distinct origin countries in first-encountered row order.
    pub fn distinct_countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = Vec::new();
        for row in &self.rows {
            if !countries.contains(&row.origin_country) {
                countries.push(row.origin_country.clone());
            }
        }

        countries
    }

    /// Observation counts per origin country, descending. The sort is stable,
    /// so equal counts keep first-encountered order. Truncated to `limit`.
    pub fn count_by_country(&self, limit: usize) -> Vec<CountryCount> {
        let mut counts: Vec<CountryCount> = Vec::new();
        for row in &self.rows {
            match counts.iter_mut().find(|c| c.country == row.origin_country) {
                Some(count) => count.flights += 1,
                None => counts.push(CountryCount { country: row.origin_country.clone(), flights: 1 }),
            }
        }

        counts.sort_by(|a, b| b.flights.cmp(&a.flights));
        counts.truncate(limit);

        counts
    }
}
