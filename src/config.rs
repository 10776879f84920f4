use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::{env, sync::Arc};

/// Printed when the process is started without a bucket.
pub const MISSING_BUCKET_MESSAGE: &str = "You must supply the name of a bucket (-b BUCKET)";

/// Centralized application configuration.
/// Combines the bucket flag with environment overrides for the listener.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: Arc<str>,
    pub host: String,
    pub port: u16,
}

/// Command-line configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a single S3 bucket over HTTP")]
pub struct Args {
    /// The name of the bucket
    #[arg(short = 'b', long = "bucket", value_name = "BUCKET")]
    pub bucket: Option<String>,
}

impl AppConfig {
    /// Parse CLI args and environment into AppConfig.
    ///
    /// Returns `Ok(None)` when no bucket was given; the caller prints guidance
    /// and exits without binding.
    pub fn from_env_and_args() -> Result<Option<Self>> {
        Self::from_args(Args::parse(), |name| env::var(name))
    }

    /// Build the config from already-parsed args and an environment lookup.
    pub fn from_args<F>(args: Args, lookup: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let Some(bucket) = args.bucket.filter(|b| !b.trim().is_empty()) else {
            return Ok(None);
        };

        let host = lookup("BUCKET_BROWSER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match lookup("BUCKET_BROWSER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing BUCKET_BROWSER_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 80,
            Err(err) => return Err(err).context("reading BUCKET_BROWSER_PORT"),
        };

        Ok(Some(Self {
            bucket: bucket.into(),
            host,
            port,
        }))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Guidance shown when `-b` is missing: the message plus the usage line.
pub fn missing_bucket_help() -> String {
    format!("{}\n{}", MISSING_BUCKET_MESSAGE, Args::command().render_usage())
}
