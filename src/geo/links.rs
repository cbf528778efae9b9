//! Outbound links shown next to each accommodation.

use crate::{Error, Result};
use reqwest::Url;

const OSM_VIEWER: &str = "https://www.openstreetmap.org/";
const BOOKING_SEARCH: &str = "https://www.booking.com/searchresults.html";
const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

/// Coordinates always carry a decimal point, so `48.0` stays `48.0`.
pub fn map_link(lat: f64, lon: f64) -> String {
    format!("{OSM_VIEWER}?mlat={lat:?}&mlon={lon:?}#map=18/{lat:?}/{lon:?}")
}

/// `?ss=<name>+<city>` with both parts form-encoded.
pub fn booking_link(name: &str, city: &str) -> Result<String> {
    let url = Url::parse_with_params(BOOKING_SEARCH, &[("ss", format!("{name} {city}"))])
        .map_err(|e| Error::internal(format!("Invalid booking link: {}", e)))?;
    Ok(url.into())
}

/// `/maps/search/<name>+<city>` with the segment percent-encoded.
pub fn google_maps_link(name: &str, city: &str) -> Result<String> {
    let mut url = Url::parse(GOOGLE_MAPS_SEARCH)
        .map_err(|e| Error::internal(format!("Invalid maps link: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| Error::internal("Maps link cannot carry path segments"))?
        .pop_if_empty()
        .push(&format!("{name}+{city}"));
    Ok(url.into())
}
