use serde::Deserialize;

pub const ENV_PREFIX: &str = "WORK_SCHEDULE_";

/// Runtime settings, read from `WORK_SCHEDULE_*` variables. Every field has a default
/// so an empty environment still boots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on how stale the schedule cache gets for changes made elsewhere.
    #[serde(default = "default_cache_refresh_secs")]
    pub cache_refresh_secs: u64,
    #[serde(default = "default_activity_page_size")]
    pub activity_page_size: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cache_refresh_secs() -> u64 {
    30
}

fn default_activity_page_size() -> u64 {
    20
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    pub fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_iter(vars(&[("UNRELATED", "1")])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.cache_refresh_secs, 30);
        assert_eq!(config.activity_page_size, 20);
    }

    #[rstest]
    fn it_should_read_prefixed_variables() {
        let config = AppConfig::from_iter(vars(&[
            ("WORK_SCHEDULE_HOST", "127.0.0.1"),
            ("WORK_SCHEDULE_PORT", "3000"),
            ("WORK_SCHEDULE_CACHE_REFRESH_SECS", "5"),
            ("WORK_SCHEDULE_ACTIVITY_PAGE_SIZE", "50"),
            ("PORT", "9999"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.cache_refresh_secs, 5);
        assert_eq!(config.activity_page_size, 50);
    }

    #[rstest]
    #[case("WORK_SCHEDULE_PORT", "not-a-port")]
    #[case("WORK_SCHEDULE_CACHE_REFRESH_SECS", "-1")]
    fn it_should_reject_malformed_values(#[case] key: &str, #[case] value: &str) {
        assert!(AppConfig::from_iter(vars(&[(key, value)])).is_err());
    }
}
