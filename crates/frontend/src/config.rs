/// Build-time configuration, read from the environment of the `dx build`
/// invocation.
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_PERIOD_DAYS: u32 = 7;

pub const MIN_PERIOD_DAYS: u32 = 1;
pub const MAX_PERIOD_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_period_days: u32,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SHOTBOARD_API_URL"),
            option_env!("SHOTBOARD_DEFAULT_DAYS"),
        )
    }

    /// Resolve raw values; unset or unparsable entries fall back to defaults.
    pub fn from_values(api_url: Option<&str>, default_days: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let default_period_days = default_days
            .and_then(|d| d.trim().parse::<u32>().ok())
            .map(clamp_period_days)
            .unwrap_or(DEFAULT_PERIOD_DAYS);

        AppConfig {
            api_base_url,
            default_period_days,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

pub fn clamp_period_days(days: u32) -> u32 {
    days.clamp(MIN_PERIOD_DAYS, MAX_PERIOD_DAYS)
}
