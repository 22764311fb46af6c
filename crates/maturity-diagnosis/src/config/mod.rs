use crate::diagnosis::{
    BlockLadder, DiagnosisProfile, OverallLadder, Preset, ProfileError, Questionnaire,
};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub diagnosis: DiagnosisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            diagnosis: DiagnosisConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Selects the questionnaire, level ladders and fallback seed for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisConfig {
    pub preset: Preset,
    pub questionnaire_path: Option<PathBuf>,
    pub block_thresholds: Option<[u8; 3]>,
    pub overall_thresholds: Option<[u8; 3]>,
    pub fallback_seed: Option<u64>,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self::for_preset(Preset::Compact)
    }
}

impl DiagnosisConfig {
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            preset,
            questionnaire_path: None,
            block_thresholds: None,
            overall_thresholds: None,
            fallback_seed: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let preset = match env::var("DIAGNOSIS_PRESET") {
            Ok(raw) => raw
                .parse::<Preset>()
                .map_err(|_| ConfigError::UnknownPreset(raw))?,
            Err(_) => Preset::Compact,
        };

        let questionnaire_path = env::var("DIAGNOSIS_QUESTIONNAIRE_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let block_thresholds = optional_thresholds("DIAGNOSIS_BLOCK_THRESHOLDS")?;
        let overall_thresholds = optional_thresholds("DIAGNOSIS_OVERALL_THRESHOLDS")?;

        let fallback_seed = match env::var("DIAGNOSIS_FALLBACK_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            preset,
            questionnaire_path,
            block_thresholds,
            overall_thresholds,
            fallback_seed,
        })
    }

    /// Resolves the questionnaire and ladders, validating both.
    pub fn build_profile(&self) -> Result<DiagnosisProfile, ProfileError> {
        let questionnaire = match &self.questionnaire_path {
            Some(path) => Questionnaire::from_path(path)?,
            None => self.preset.questionnaire(),
        };
        let block_ladder = BlockLadder::for_blocks(
            self.block_thresholds
                .unwrap_or_else(|| self.preset.block_bounds()),
        )?;
        let overall_ladder = OverallLadder::for_overall(
            self.overall_thresholds
                .unwrap_or_else(|| self.preset.overall_bounds()),
        )?;

        DiagnosisProfile::new(questionnaire, block_ladder, overall_ladder)
    }
}

fn optional_thresholds(var: &'static str) -> Result<Option<[u8; 3]>, ConfigError> {
    match env::var(var) {
        Ok(raw) => parse_thresholds(&raw)
            .map(Some)
            .ok_or(ConfigError::InvalidThresholds { var, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Parses `"80,60,40"` into three strictly descending percentages.
pub fn parse_thresholds(raw: &str) -> Option<[u8; 3]> {
    let values: Vec<u8> = raw
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    let [high, mid, low]: [u8; 3] = values.try_into().ok()?;
    (high <= 100 && high > mid && mid > low).then_some([high, mid, low])
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    UnknownPreset(String),
    InvalidThresholds { var: &'static str, value: String },
    InvalidSeed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::UnknownPreset(value) => write!(
                f,
                "DIAGNOSIS_PRESET '{value}' is not a known preset (compact, extended)"
            ),
            ConfigError::InvalidThresholds { var, value } => write!(
                f,
                "{var} must be three descending percentages like 80,60,40 (got '{value}')"
            ),
            ConfigError::InvalidSeed(value) => {
                write!(f, "DIAGNOSIS_FALLBACK_SEED must be a u64 (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::UnknownPreset(_)
            | ConfigError::InvalidThresholds { .. }
            | ConfigError::InvalidSeed(_) => None,
        }
    }
}
