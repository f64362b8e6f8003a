use std::str::FromStr;

use axum::http::StatusCode;
use serde::Deserialize;

/// Which status codes non-creating routes answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCodes {
    /// 201 for list/update/done, 204 with a body for delete.
    Compat,
    /// 200 for list/update/done, empty 204 for delete.
    Strict,
}

impl StatusCodes {
    pub fn read(self) -> StatusCode {
        match self {
            StatusCodes::Compat => StatusCode::CREATED,
            StatusCodes::Strict => StatusCode::OK,
        }
    }

    pub fn update(self) -> StatusCode {
        self.read()
    }
}

impl FromStr for StatusCodes {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compat" => Ok(StatusCodes::Compat),
            "strict" => Ok(StatusCodes::Strict),
            other => anyhow::bail!("unknown STATUS_CODES value: {other}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
    pub status_codes: StatusCodes,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            log: LogConfig {
                filter: "todo_api=debug,axum=info,tower_http=info".into(),
                json: false,
            },
            status_codes: StatusCodes::Compat,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("APP_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {v:?}: {e}"))?,
            None => defaults.port,
        };
        let status_codes = match lookup("STATUS_CODES") {
            Some(v) => v.parse()?,
            None => defaults.status_codes,
        };
        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port,
            log: LogConfig {
                filter: lookup("RUST_LOG").unwrap_or(defaults.log.filter),
                json: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
            },
            status_codes,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
