// Engine configuration loaded from the environment

use std::env;
use std::ops::RangeInclusive;
use tracing::warn;

use super::error::DonationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub min_nominal: u64,
    pub phone_country_code: String,
    pub phone_min_digits: usize,
    pub phone_max_digits: usize,
    pub payment_base_url: String,
    pub instructions_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_nominal: 10_000,
            phone_country_code: "62".to_string(),
            phone_min_digits: 8,
            phone_max_digits: 15,
            payment_base_url: "https://flip.id".to_string(),
            instructions_path: "/bayar/zakat-maal".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // ZAKAT_MIN_NOMINAL - smallest accepted donation, in rupiah
        if let Some(val) = parse_var(&lookup, "ZAKAT_MIN_NOMINAL") {
            config.min_nominal = val;
        }

        // ZAKAT_PHONE_COUNTRY_CODE - required prefix of WhatsApp numbers
        if let Some(code) = lookup("ZAKAT_PHONE_COUNTRY_CODE") {
            let code = code.trim().to_string();
            if !code.is_empty() {
                config.phone_country_code = code;
            }
        }

        if let Some(val) = parse_var(&lookup, "ZAKAT_PHONE_MIN_DIGITS") {
            config.phone_min_digits = val;
        }

        if let Some(val) = parse_var(&lookup, "ZAKAT_PHONE_MAX_DIGITS") {
            config.phone_max_digits = val;
        }

        // ZAKAT_PAYMENT_BASE_URL - payment provider host used for links
        if let Some(url) = lookup("ZAKAT_PAYMENT_BASE_URL") {
            config.payment_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(path) = lookup("ZAKAT_INSTRUCTIONS_PATH") {
            config.instructions_path = path.trim().trim_end_matches('/').to_string();
        }

        config
    }

    pub fn phone_digits(&self) -> RangeInclusive<usize> {
        self.phone_min_digits..=self.phone_max_digits
    }

    pub fn validate(&self) -> Result<(), DonationError> {
        if self.phone_country_code.is_empty()
            || !self.phone_country_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DonationError::InvalidConfig(format!(
                "Phone country code must be digits, got '{}'",
                self.phone_country_code
            )));
        }

        if self.phone_min_digits > self.phone_max_digits {
            return Err(DonationError::InvalidConfig(format!(
                "Phone digit range is inverted: {}-{}",
                self.phone_min_digits, self.phone_max_digits
            )));
        }

        if !self.payment_base_url.starts_with("http://")
            && !self.payment_base_url.starts_with("https://")
        {
            return Err(DonationError::InvalidConfig(
                "Payment base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(key = key, value = %raw, "Ignoring unparsable configuration value");
            None
        }
    }
}
