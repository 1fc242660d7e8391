use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppCfg {
    #[serde(default)]
    pub http: HttpCfg,
    #[serde(default)]
    pub yahoo: YahooCfg,
    #[serde(default)]
    pub forecast: ForecastCfg,
    #[serde(default)]
    pub anomaly: AnomalyCfg,
    #[serde(default)]
    pub sentiment: SentimentCfg,
    #[serde(default)]
    pub qna: QnaCfg,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpCfg {
    #[serde(rename = "userAgent", default = "default_ua")]
    pub user_agent: String,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
    #[serde(
        rename = "poolIdleTimeout",
        with = "humantime_serde",
        default = "default_pool_idle"
    )]
    pub pool_idle_timeout: Duration,
    #[serde(rename = "poolMaxIdlePerHost", default = "default_pool")]
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpCfg {
    fn default() -> Self {
        Self {
            user_agent: default_ua(),
            timeout: default_timeout(),
            pool_idle_timeout: default_pool_idle(),
            pool_max_idle_per_host: default_pool(),
        }
    }
}
fn default_ua() -> String {
    "findoc/0.1".into()
}
fn default_timeout() -> Duration {
    Duration::from_secs(10)
}
fn default_pool_idle() -> Duration {
    Duration::from_secs(90)
}
fn default_pool() -> usize {
    16
}

#[derive(Debug, Deserialize, Clone)]
pub struct YahooCfg {
    #[serde(rename = "baseUrl", default = "default_yahoo_url")]
    pub base_url: String,
}

impl Default for YahooCfg {
    fn default() -> Self {
        Self {
            base_url: default_yahoo_url(),
        }
    }
}
fn default_yahoo_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastCfg {
    #[serde(rename = "horizonDays", default = "default_horizon")]
    pub horizon_days: u32,
}

impl Default for ForecastCfg {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon(),
        }
    }
}
fn default_horizon() -> u32 {
    90
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnomalyCfg {
    #[serde(rename = "mildThreshold", default = "default_mild")]
    pub mild_threshold: f64,
    #[serde(rename = "severeThreshold", default = "default_severe")]
    pub severe_threshold: f64,
}

impl Default for AnomalyCfg {
    fn default() -> Self {
        Self {
            mild_threshold: default_mild(),
            severe_threshold: default_severe(),
        }
    }
}
fn default_mild() -> f64 {
    2.0
}
fn default_severe() -> f64 {
    3.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentimentCfg {
    #[serde(rename = "windowSentences", default = "default_window")]
    pub window_sentences: usize,
}

impl Default for SentimentCfg {
    fn default() -> Self {
        Self {
            window_sentences: default_window(),
        }
    }
}
fn default_window() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct QnaCfg {
    #[serde(rename = "topK", default = "default_top_k")]
    pub top_k: usize,
}

impl Default for QnaCfg {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}
fn default_top_k() -> usize {
    3
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.yahoo.base_url.is_empty(), "yahoo.baseUrl missing");
        anyhow::ensure!(
            self.forecast.horizon_days > 0,
            "forecast.horizonDays must be > 0"
        );
        anyhow::ensure!(
            self.anomaly.mild_threshold > 0.0
                && self.anomaly.severe_threshold >= self.anomaly.mild_threshold,
            "anomaly thresholds must satisfy 0 < mild <= severe"
        );
        anyhow::ensure!(
            self.sentiment.window_sentences > 0,
            "sentiment.windowSentences must be > 0"
        );
        Ok(())
    }
}
