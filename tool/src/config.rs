//! Configuration readable from a config file.
//!
//! `cookiectl` can read the location of the secret and the cookie format from a
//! TOML file instead of taking them on every invocation:
//!
//! ```toml
//! secret_file = "/run/compositor/cookie.secret"
//! format = "hmac-sha1"
//! ```

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use mir_cookie::Format;
use mir_cookie_util::file::{fopen_w, Visibility};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookieConfig {
    /// path to the base64 encoded secret shared by all processes checking cookies
    pub secret_file: PathBuf,

    /// format of issued and accepted cookies, `hmac-sha1` unless given
    #[serde(default)]
    pub format: Format,

    /// path to the file which provided this configuration
    ///
    /// Not read from the TOML; set by [Self::load].
    #[serde(skip)]
    pub config_file_path: PathBuf,
}

impl CookieConfig {
    pub fn new<P: AsRef<Path>>(secret_file: P) -> Self {
        Self {
            secret_file: secret_file.as_ref().to_owned(),
            format: Format::default(),
            config_file_path: PathBuf::new(),
        }
    }

    /// load configuration from a TOML file
    ///
    /// NOTE: the secret file is not checked; see [Self::validate].
    pub fn load<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let p = p.as_ref();
        let text = fs::read_to_string(p).with_context(|| format!("Could not read config {p:?}"))?;
        let mut config: Self =
            toml::from_str(&text).with_context(|| format!("Could not parse config {p:?}"))?;
        config.config_file_path = p.to_owned();
        Ok(config)
    }

    /// write the configuration to a TOML file
    pub fn store<P: AsRef<Path>>(&self, p: P) -> anyhow::Result<()> {
        let mut f = fopen_w(p, Visibility::Public)?;
        f.write_all(toml::to_string_pretty(&self)?.as_bytes())?;
        Ok(())
    }

    /// check that the configured secret file exists
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.secret_file.is_file(),
            "secret file {:?} referenced in config {:?} does not exist",
            self.secret_file,
            self.config_file_path
        );
        Ok(())
    }

    pub fn example_config() -> Self {
        Self::new("/run/compositor/cookie.secret")
    }
}
