use serde::Deserialize;

use super::config::AppConfig;

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Mean radius of the Earth in kilometres, used to turn a distance into the
/// radians `$centerSphere` expects.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

#[derive(Debug, Clone)]
pub struct GeocodedLocation {
    pub longitude: f64,
    pub latitude: f64,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocoderResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

/// Resolve a free-form address or zipcode through the external geocoding
/// collaborator.
pub async fn geocode(config: &AppConfig, query: &str) -> Result<GeocodedLocation, anyhow::Error> {
    let url = config
        .geocoder_url
        .clone()
        .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string());

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .query(&[("format", "json"), ("limit", "1"), ("q", query)])
        .header("User-Agent", "bootcamp-api")
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "geocoder returned status {}",
            response.status()
        ));
    }

    let results = response.json::<Vec<GeocoderResult>>().await?;
    let result = results
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no geocoder result for '{}'", query))?;

    Ok(GeocodedLocation {
        longitude: result.lon.parse::<f64>()?,
        latitude: result.lat.parse::<f64>()?,
        formatted_address: result.display_name,
    })
}
