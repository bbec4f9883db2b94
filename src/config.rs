use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub api_rps: u32,
    pub analytics_window_days: i64,
    pub progress_save_retries: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            api_rps: get_env_parse("API_RPS")?,
            analytics_window_days: env::var("ANALYTICS_WINDOW_DAYS")
                .ok()
                .map(|raw| {
                    raw.parse()
                        .map_err(|e| Error::Config(format!("Invalid value for ANALYTICS_WINDOW_DAYS: {}", e)))
                })
                .transpose()?
                .unwrap_or(30),
            progress_save_retries: env::var("PROGRESS_SAVE_RETRIES")
                .ok()
                .map(|raw| {
                    raw.parse()
                        .map_err(|e| Error::Config(format!("Invalid value for PROGRESS_SAVE_RETRIES: {}", e)))
                })
                .transpose()?
                .unwrap_or(3),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
