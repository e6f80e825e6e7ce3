use crate::error::EngineError;

/// Earth's radius in miles
const EARTH_RADIUS_MI: f64 = 3959.0;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Errors
/// Returns [`EngineError::InvalidCoordinate`] for NaN or out-of-range
/// coordinates; a NaN distance must never leak into a score.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, EngineError> {
    check_coordinate(lat1, lon1)?;
    check_coordinate(lat2, lon2)?;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(EARTH_RADIUS_MI * c)
}

#[inline]
fn check_coordinate(lat: f64, lon: f64) -> Result<(), EngineError> {
    if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(EngineError::InvalidCoordinate { lat, lon });
    }
    Ok(())
}
