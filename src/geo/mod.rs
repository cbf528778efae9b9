mod geocoding;
pub mod links;
mod places;
mod weather;

pub use geocoding::{GeocodeCandidate, GeocodingClient};
pub use places::{Feature, FeatureCollection, FeatureProperties, Geometry, PlacesClient};
pub use weather::{CurrentWeather, WeatherClient};
