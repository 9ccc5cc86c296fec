//! Service configuration read from the environment.

use std::net::SocketAddr;

use anyhow::Context;
use study_core::OutlineOptions;

/// Runtime configuration.
///
/// Recognized variables (a `.env` file is honoured):
/// - HOST: bind address (default 0.0.0.0)
/// - PORT: bind port (default 3000)
/// - OUTLINE_ROOT_LABEL: label of the diagram root node
/// - OUTLINE_TREE_CAP / OUTLINE_FLOW_CAP: label length caps per diagram mode
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub outline: OutlineOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            outline: OutlineOptions::default(),
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got {value:?}"))?,
            None => defaults.port,
        };

        let tree_label_cap = parse_cap(&lookup, "OUTLINE_TREE_CAP", defaults.outline.tree_label_cap)?;
        let flow_label_cap = parse_cap(&lookup, "OUTLINE_FLOW_CAP", defaults.outline.flow_label_cap)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            outline: OutlineOptions {
                root_label: lookup("OUTLINE_ROOT_LABEL").unwrap_or(defaults.outline.root_label),
                tree_label_cap,
                flow_label_cap,
            },
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_cap(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> anyhow::Result<usize> {
    match lookup(key) {
        Some(value) => {
            let cap: usize = value
                .parse()
                .with_context(|| format!("{key} must be a positive integer, got {value:?}"))?;
            anyhow::ensure!(cap > 0, "{key} must be greater than zero");
            Ok(cap)
        }
        None => Ok(default),
    }
}
