use serde_json::Value;

use crate::data_structures::{FlightTable, PositionSource, StateVector};
use crate::errors::{DashboardError, Result};

/// Number of positional fields in one raw state record.
pub const NUM_STATE_FIELDS: usize = 17;

/// Maps a raw states payload into a FlightTable.
///
/// The payload contract is rigid: a `states` list of 17-element rows. A row
/// with any other shape fails the whole payload rather than being skipped,
/// since a partial row means the upstream contract broke. Rows without an
/// origin country or position are dropped after mapping.
pub fn normalize(payload: &Value) -> Result<FlightTable> {
    let states = match payload.get("states") {
        Some(states) => states,
        None => return Err(DashboardError::format("missing 'states' key")),
    };

    // at quiet times the endpoint serves null instead of an empty list
    if states.is_null() {
        return Ok(FlightTable::empty());
    }

    let raw_rows = states.as_array()
        .ok_or(DashboardError::format("'states' is not a list"))?;

    let mut rows: Vec<StateVector> = Vec::with_capacity(raw_rows.len());
    for (i, raw_row) in raw_rows.iter().enumerate() {
        let fields = raw_row.as_array()
            .ok_or(DashboardError::format(format!("state row {i} is not a list")))?;
        if fields.len() != NUM_STATE_FIELDS {
            return Err(DashboardError::format(
                format!("state row {i} has {} fields, expected {NUM_STATE_FIELDS}", fields.len())));
        }

        if let Some(row) = map_state_row(fields) {
            rows.push(row);
        }
    }

    Ok(FlightTable::new(rows))
}

/// Maps one 17-field row. Returns None for rows missing origin country,
/// latitude or longitude; exactly these three fields gate the drop.
fn map_state_row(fields: &[Value]) -> Option<StateVector> {
    let origin_country = match fields[2].as_str() {
        Some(country) if !country.is_empty() => country.to_string(),
        _ => return None,
    };
    let longitude = fields[5].as_f64()?;
    let latitude = fields[6].as_f64()?;

    Some(StateVector {
        icao24: fields[0].as_str().unwrap_or("").to_string(),
        callsign: fields[1].as_str().unwrap_or("").trim_end().to_string(),
        origin_country,
        time_position: fields[3].as_i64(),
        last_contact: fields[4].as_i64(),
        longitude: Some(longitude),
        latitude: Some(latitude),
        baro_altitude: fields[7].as_f64(),
        on_ground: fields[8].as_bool().unwrap_or(false),
        velocity: fields[9].as_f64(),
        true_track: fields[10].as_f64(),
        vertical_rate: fields[11].as_f64(),
        sensors: fields[12].as_array()
            .map(|ids| ids.iter().filter_map(|id| id.as_i64()).collect()),
        geo_altitude: fields[13].as_f64(),
        squawk: fields[14].as_str().map(|s| s.to_string()),
        spi: fields[15].as_bool().unwrap_or(false),
        position_source: PositionSource::from_i64(fields[16].as_i64().unwrap_or(-1)),
    })
}
