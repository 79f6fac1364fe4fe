//! CLI argument definitions using clap

use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;
use zone_whois_core::{OutputFormat, ReportOptions};
use zone_whois_provider::{
    DEFAULT_BASE_URL, MAX_ZONE_PAGE_SIZE, ProviderCredentials, ProviderOptions,
};

#[derive(Parser, Debug)]
#[command(name = "zwhois")]
#[command(version)]
#[command(
    about = "Report UltraDNS zones with SOA contact, aliases and WHOIS registration data",
    long_about = None
)]
pub struct Cli {
    /// UltraDNS username
    #[arg(short, long, env = "ULTRADNS_USERNAME")]
    pub username: Option<String>,

    /// UltraDNS password
    #[arg(short, long, env = "ULTRADNS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Bearer token (instead of username/password)
    #[arg(short, long, env = "ULTRADNS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Refresh token, used with --token once the bearer token expires
    #[arg(short, long, env = "ULTRADNS_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// API base URL
    #[arg(long, env = "ULTRADNS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Zones requested per page
    #[arg(
        long,
        default_value_t = MAX_ZONE_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ZONE_PAGE_SIZE))
    )]
    pub page_size: u32,

    /// WHOIS timeout per domain in seconds
    #[arg(long, default_value_t = 10, value_name = "SECONDS")]
    pub whois_timeout: u64,

    /// Do not query WHOIS (registrar and expiration become "Not found")
    #[arg(long)]
    pub skip_whois: bool,

    /// Write SOA contacts as user@domain instead of the dotted RNAME
    #[arg(long)]
    pub mailbox_contacts: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::Csv => Self::Csv,
        }
    }
}

/// Invalid combination of credential arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("You cannot provide a token along with a username or password.")]
    TokenWithPassword,

    #[error("You must provide both a username and password.")]
    IncompletePassword,

    #[error("You must provide either a token, or both a username and password.")]
    Missing,

    #[error("A refresh token can only be used together with --token.")]
    RefreshWithoutToken,
}

impl CredentialError {
    /// clap error kind used when reporting this as a usage error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TokenWithPassword | Self::RefreshWithoutToken => ErrorKind::ArgumentConflict,
            Self::IncompletePassword | Self::Missing => ErrorKind::MissingRequiredArgument,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

impl Cli {
    /// Credentials from the username/password/token arguments
    pub fn credentials(&self) -> Result<ProviderCredentials, CredentialError> {
        let username = non_empty(self.username.as_ref());
        let password = non_empty(self.password.as_ref());
        let token = non_empty(self.token.as_ref());
        let refresh_token = non_empty(self.refresh_token.as_ref());

        match (token, username, password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CredentialError::TokenWithPassword),
            (Some(access_token), None, None) => Ok(ProviderCredentials::Token {
                access_token,
                refresh_token,
            }),
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err(CredentialError::IncompletePassword)
            }
            (None, ..) if refresh_token.is_some() => Err(CredentialError::RefreshWithoutToken),
            (None, Some(username), Some(password)) => {
                Ok(ProviderCredentials::Password { username, password })
            }
            (None, None, None) => Err(CredentialError::Missing),
        }
    }

    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions::default().with_base_url(self.api_url.trim())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            page_size: self.page_size,
            skip_whois: self.skip_whois,
            mailbox_contacts: self.mailbox_contacts,
        }
    }

    pub fn whois_timeout(&self) -> Duration {
        Duration::from_secs(self.whois_timeout.max(1))
    }

    /// Default log filter for the `-v` count
    pub fn log_filter(&self) -> String {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        format!(
            "warn,zwhois={level},zone_whois_core={level},zone_whois_provider={level},zone_whois_toolbox={level}"
        )
    }
}
