//! Contains the code used to parse command line parameters for `cookiectl`.
//!
//! [CliArgs::run] does the actual work while the main function just sets up
//! logging and reports errors.

use std::num::ParseIntError;
use std::path::PathBuf;

use anyhow::{bail, ensure, Context};
use clap::{Args, Parser, Subcommand};
use log::info;

use mir_cookie::{CookieAuthority, Format};
use mir_cookie_secret_memory::file::StoreSecret;
use mir_cookie_secret_memory::SecretBytes;
use mir_cookie_util::b64::{b64_decode_vec, B64Display};
use mir_cookie_util::file::LoadValueB64;

use crate::config::CookieConfig;

/// Enough for the base64 text of the largest cookie
const MAX_COOKIE_B64_LEN: usize = 64;

/// Command line arguments to `cookiectl`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about, arg_required_else_help = true)]
pub struct CliArgs {
    /// Lowest log level to show
    #[arg(long = "log-level", value_name = "LOG_LEVEL", group = "log-level")]
    log_level: Option<log::LevelFilter>,

    /// Show verbose log output – sets log level to "info"
    #[arg(short, long, group = "log-level")]
    verbose: bool,

    /// Show no log output except errors
    #[arg(short, long, group = "log-level")]
    quiet: bool,

    /// The subcommand to be invoked
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Where to find the secret and which format to use
#[derive(Args, Debug, Default)]
pub struct AuthorityArgs {
    /// Read secret file and format from this TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base64 encoded secret, as written by `gen-secret`
    #[arg(short, long)]
    secret_file: Option<PathBuf>,

    /// Cookie format: hmac-sha1 or hmac-sha256
    #[arg(short, long)]
    format: Option<Format>,
}

/// represents a command specified via CLI
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a fresh secret for a cookie authority
    ///
    /// The secret is written base64 encoded and readable only by the owner.
    /// Every process that should accept the same cookies needs this file.
    GenSecret {
        secret_file: PathBuf,

        /// Forcefully overwrite an existing secret file
        #[clap(long)]
        force: bool,
    },

    /// Issue a cookie attesting the given timestamp and print it as base64
    Issue {
        #[command(flatten)]
        authority: AuthorityArgs,

        /// Timestamp to attest, decimal or hexadecimal with a `0x` prefix
        #[arg(value_parser = parse_timestamp)]
        timestamp: u64,
    },

    /// Check a base64 encoded cookie and print the timestamp it attests
    ///
    /// Exits with a non-zero status if the cookie was not issued under the
    /// configured secret and format.
    Verify {
        #[command(flatten)]
        authority: AuthorityArgs,

        cookie: String,
    },

    /// Generate an example config file
    GenConfig {
        config_file: PathBuf,

        /// Forcefully overwrite existing config file
        #[clap(long)]
        force: bool,
    },
}

impl CliArgs {
    /// returns the log level filter set by CLI args
    /// returns `None` if the user did not specify any log level filter via CLI
    pub fn get_log_level(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            return Some(log::LevelFilter::Info);
        }
        if self.quiet {
            return Some(log::LevelFilter::Error);
        }
        self.log_level
    }

    /// Run `cookiectl` with the given command line parameters
    pub fn run(&self) -> anyhow::Result<()> {
        use CliCommand::*;
        match &self.command {
            Some(GenSecret { secret_file, force }) => {
                ensure!(
                    *force || !secret_file.exists(),
                    "secret file {secret_file:?} already exists, refusing to overwrite"
                );

                let mut secret = SecretBytes::default();
                CookieAuthority::saving_secret(secret.secret_vec_mut())?;
                secret.store_secret(secret_file)?;
                info!("Wrote {} byte secret to {secret_file:?}", secret.len());
            }

            Some(Issue {
                authority,
                timestamp,
            }) => {
                let cookie = authority.authority()?.issue(*timestamp);
                println!("{}", cookie.marshal().fmt_b64::<MAX_COOKIE_B64_LEN>());
            }

            Some(Verify { authority, cookie }) => {
                let raw = b64_decode_vec(cookie.trim().as_bytes())
                    .context("Cookie is not valid base64")?;
                let cookie = authority
                    .authority()?
                    .parse(&raw)
                    .context("Cookie rejected")?;
                println!("{}", cookie.timestamp());
            }

            Some(GenConfig { config_file, force }) => {
                ensure!(
                    *force || !config_file.exists(),
                    "config file {config_file:?} already exists"
                );

                CookieConfig::example_config().store(config_file)?;
            }

            None => {} // clap prints help if no command is given
        }

        Ok(())
    }
}

impl AuthorityArgs {
    /// Merge command line flags with the config file, flags taking precedence
    fn resolve(&self) -> anyhow::Result<(PathBuf, Format)> {
        let config = self.config.as_ref().map(CookieConfig::load).transpose()?;

        let secret_file = match (&self.secret_file, &config) {
            (Some(path), _) => path.clone(),
            (None, Some(config)) => {
                config.validate()?;
                config.secret_file.clone()
            }
            (None, None) => bail!("either --config or --secret-file is required"),
        };

        let format = self
            .format
            .or(config.map(|c| c.format))
            .unwrap_or_default();

        Ok((secret_file, format))
    }

    /// Load the secret and create the authority it describes
    pub fn authority(&self) -> anyhow::Result<CookieAuthority> {
        let (secret_file, format) = self.resolve()?;
        let secret = SecretBytes::load_b64(&secret_file)?;
        let authority = CookieAuthority::from_secret_with_format(secret.secret(), format)
            .with_context(|| format!("Unusable secret in {secret_file:?}"))?;
        Ok(authority)
    }
}

/// Parse a timestamp given in decimal or, with a `0x` prefix, in hexadecimal
pub fn parse_timestamp(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
