//! Build-time Configuration
//!
//! The bundle is static, so settings are baked in from the environment at
//! compile time (`POS_API_URL=... trunk build`).

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_READ_RETRIES: u32 = 3;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";
pub const DEFAULT_CURRENCY_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the POS API, without trailing slash
    pub api_base_url: String,
    /// Extra attempts for read-only queries
    pub read_retries: u32,
    pub currency_symbol: String,
    /// Currency id stamped on checkout requests
    pub currency_id: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            read_retries: DEFAULT_READ_RETRIES,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            currency_id: DEFAULT_CURRENCY_ID,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("POS_API_URL"),
            option_env!("POS_READ_RETRIES"),
            option_env!("POS_CURRENCY"),
            option_env!("POS_CURRENCY_ID"),
        )
    }

    /// Unset or blank values fall back to defaults; unparsable numbers are
    /// logged and ignored.
    pub fn from_values(
        api_url: Option<&str>,
        read_retries: Option<&str>,
        currency_symbol: Option<&str>,
        currency_id: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_blank(api_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            read_retries: parse_or(non_blank(read_retries), "POS_READ_RETRIES", defaults.read_retries),
            currency_symbol: non_blank(currency_symbol)
                .map(str::to_string)
                .unwrap_or(defaults.currency_symbol),
            currency_id: parse_or(non_blank(currency_id), "POS_CURRENCY_ID", defaults.currency_id),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_or(value: Option<&str>, name: &str, default: u32) -> u32 {
    match value.map(str::parse::<u32>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            log::warn!("[Config] ignoring {}: {}", name, e);
            default
        }
        None => default,
    }
}
