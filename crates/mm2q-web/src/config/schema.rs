use std::net::SocketAddr;

use serde::Deserialize;
use mm2q_core::error::{Mm2Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub display: DisplaySection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            display: DisplaySection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Mm2Error::UnsupportedVersion);
        }

        self.server.validate()?;
        self.display.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(256..=1_048_576).contains(&self.body_limit_bytes) {
            return Err(Mm2Error::BadRequest(
                "server.body_limit_bytes must be between 256 and 1048576".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            Mm2Error::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_body_limit_bytes() -> usize {
    4096
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    /// Decimal places in the HTML views.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl DisplaySection {
    pub fn validate(&self) -> Result<()> {
        if self.precision > 12 {
            return Err(Mm2Error::BadRequest(
                "display.precision must be between 0 and 12".into(),
            ));
        }
        Ok(())
    }
}

fn default_precision() -> usize {
    4
}
