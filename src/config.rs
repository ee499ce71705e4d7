use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub log_level: String,
    pub log_format: String,
}

/// Tunables for balance and settlement arithmetic.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Remaining balances below this threshold count as settled.
    pub settlement_epsilon: Decimal,
    /// Decimal places for emitted settlement amounts.
    pub rounding_scale: u32,
    /// Tax percentage applied when an expense does not specify one (11% VAT).
    pub default_tax_percentage: Decimal,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            settlement_epsilon: Decimal::new(1, 2),
            rounding_scale: 2,
            default_tax_percentage: Decimal::from(11),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application: ApplicationSettings::default(),
            engine: EngineSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
