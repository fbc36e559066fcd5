use std::env;

use log::warn;
use time::Duration;

use tourmap_core::{projection::map::DEFAULT_MAP_DEBOUNCE, rating::DEFAULT_RATING_TTL};
use tourmap_gateways::{imgbb, nominatim, viacep};

#[derive(Debug, Clone)]
pub struct Cfg {
    pub imgbb_api_key: Option<String>,
    pub imgbb_api_url: String,
    pub viacep_api_url: String,
    pub nominatim_api_url: String,
    pub rating_cache_ttl: Duration,
    pub map_debounce: Duration,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        match env::var("IMGBB_API_KEY") {
            Ok(key) => {
                cfg.imgbb_api_key = Some(key);
            }
            Err(_) => {
                warn!("No imgbb API key found, image uploads will fail");
            }
        }
        if let Ok(url) = env::var("IMGBB_API_URL") {
            cfg.imgbb_api_url = url;
        }
        if let Ok(url) = env::var("VIACEP_API_URL") {
            cfg.viacep_api_url = url;
        }
        if let Ok(url) = env::var("NOMINATIM_API_URL") {
            cfg.nominatim_api_url = url;
        }
        if let Ok(ms) = env::var("RATING_CACHE_TTL_MS") {
            match ms.parse() {
                Ok(ms) => cfg.rating_cache_ttl = Duration::milliseconds(ms),
                Err(_) => warn!("Ignoring invalid RATING_CACHE_TTL_MS: {ms}"),
            }
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            imgbb_api_key: None,
            imgbb_api_url: imgbb::DEFAULT_API_URL.to_string(),
            viacep_api_url: viacep::DEFAULT_API_URL.to_string(),
            nominatim_api_url: nominatim::DEFAULT_API_URL.to_string(),
            rating_cache_ttl: DEFAULT_RATING_TTL,
            map_debounce: DEFAULT_MAP_DEBOUNCE,
        }
    }
}
