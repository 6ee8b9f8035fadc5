use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use url::Url;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8888";
const DEFAULT_PYTHON_BIN: &str = "python3";
const DEFAULT_SEARCH_ENDPOINT: &str = "http://127.0.0.1:8888/api/search_jobs";
const DEFAULT_JOBS_PER_PAGE: usize = 10;
const DEFAULT_APPLIED_STORE: &str = "applied_jobs.json";

/// How the service writes its log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Settings for the search service binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub search_script_path: Option<PathBuf>,
    pub python_bin: String,
    pub static_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            search_script_path: get_env_opt("SEARCH_SCRIPT_PATH").map(PathBuf::from),
            python_bin: get_env_or("PYTHON_BIN", DEFAULT_PYTHON_BIN),
            static_dir: get_env_opt("STATIC_DIR").map(PathBuf::from),
            log_format: match get_env_opt("LOG_FORMAT") {
                Some(_) => get_env_parse("LOG_FORMAT")?,
                None => LogFormat::default(),
            },
        })
    }
}

impl Default for Config {
    /// Mock-only service on the default address.
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            search_script_path: None,
            python_bin: DEFAULT_PYTHON_BIN.to_string(),
            static_dir: None,
            log_format: LogFormat::default(),
        }
    }
}

/// Settings for the client library: where to search and where the applied set lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub search_endpoint: Url,
    pub jobs_per_page: usize,
    pub applied_store_path: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let raw_endpoint = get_env_or("SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT);
        let search_endpoint = Url::parse(&raw_endpoint)
            .map_err(|e| Error::Config(format!("Invalid value for SEARCH_ENDPOINT: {}", e)))?;

        let jobs_per_page = match get_env_opt("JOBS_PER_PAGE") {
            Some(_) => get_env_parse::<usize>("JOBS_PER_PAGE")?,
            None => DEFAULT_JOBS_PER_PAGE,
        };
        if jobs_per_page == 0 {
            return Err(Error::Config(
                "JOBS_PER_PAGE must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            search_endpoint,
            jobs_per_page,
            applied_store_path: PathBuf::from(get_env_or(
                "APPLIED_STORE_PATH",
                DEFAULT_APPLIED_STORE,
            )),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.trim()
        .parse()
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
