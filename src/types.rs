// Gdomains-ddns, a dynamic DNS updater for Google Domains.
// Copyright (C) 2020-2023  Ronja Koistinen

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Value of `mode` which swaps every network round-trip for a canned answer.
pub const SIMULATION_MODE: &str = "dev";

/// Process-level settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub log_path: PathBuf,
    pub registrar_api: String,
}

/// The configuration record, which doubles as the state of one update
/// session. `myip` is the only field the program ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub domain: String,
    pub google: Credentials,
    pub ipinfo: IpLookup,
    pub myip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpLookup {
    pub key: String,
    pub url: String,
}

impl Config {
    pub fn is_simulation(&self) -> bool {
        self.mode.as_deref() == Some(SIMULATION_MODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrarStatus {
    /// The address is already set, nothing was done.
    NoChg,
    NoHost,
    BadAuth,
    NotFqdn,
    BadAgent,
    Abuse,
    /// `911`, a problem on the registrar's side.
    ServerError,
    ConflictA,
    /// Anything not matched by the table, including `good <ip>`.
    Good,
}

/// Substrings looked for in a registrar reply, in priority order. A reply
/// may contain several of them; the first row that matches decides.
#[rustfmt::skip]
const STATUS_TABLE: [(&str, RegistrarStatus); 8] = [
    ("nochg",      RegistrarStatus::NoChg),
    ("nohost",     RegistrarStatus::NoHost),
    ("badauth",    RegistrarStatus::BadAuth),
    ("notfqdn",    RegistrarStatus::NotFqdn),
    ("badagent",   RegistrarStatus::BadAgent),
    ("abuse",      RegistrarStatus::Abuse),
    ("911",        RegistrarStatus::ServerError),
    ("conflict A", RegistrarStatus::ConflictA),
];

impl RegistrarStatus {
    pub fn classify(body: &str) -> Self {
        let body = body.trim();
        STATUS_TABLE
            .iter()
            .find(|(needle, _)| body.contains(*needle))
            .map_or(Self::Good, |&(_, status)| status)
    }

    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::NoChg | Self::Good => None,
            Self::NoHost => Some(
                "The hostname does not exist, or does not have Dynamic DNS enabled",
            ),
            Self::BadAuth => Some(
                "The username / password combination is not valid for the specified host",
            ),
            Self::NotFqdn => Some(
                "The supplied hostname is not a valid fully-qualified domain name",
            ),
            Self::BadAgent => Some(concat!(
                "Your Dynamic DNS client is making bad requests. ",
                "Ensure the user agent is set in the request"
            )),
            Self::Abuse => Some(concat!(
                "Dynamic DNS access for the hostname has been blocked due to ",
                "failure to interpret previous responses correctly"
            )),
            Self::ServerError => {
                Some("An error happened on our end. Wait 5 minutes and retry")
            }
            Self::ConflictA => Some(concat!(
                "A custom A or AAAA resource record conflicts with the update. ",
                "Delete the indicated resource record within DNS settings page ",
                "and try the update again"
            )),
        }
    }

    /// `Ok(true)` when the record was changed, `Ok(false)` for a no-op.
    pub fn outcome(self) -> Result<bool, DdnsError> {
        match self {
            Self::Good => Ok(true),
            Self::NoChg => Ok(false),
            failure => Err(DdnsError::Registrar(
                failure.reason().unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn log(&self) {
        match self {
            Self::Good => info!("Registrar accepted the new address"),
            Self::NoChg => info!("Registrar replied: No change"),
            failure => debug!("Registrar refused the update: {failure:?}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DdnsError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    MalformedResponse(String),
    #[error("{0}")]
    Registrar(String),
    #[error("{0}")]
    Persistence(String),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
#[repr(i32)]
pub enum ExitCode {
    Ok                = 0,
    Configuration     = 1,
    Network           = 2,
    MalformedResponse = 3,
    Registrar         = 4,
    Persistence       = 5,
}

impl From<&DdnsError> for ExitCode {
    fn from(e: &DdnsError) -> Self {
        match e {
            DdnsError::Configuration(_) => Self::Configuration,
            DdnsError::Network(_) => Self::Network,
            DdnsError::MalformedResponse(_) => Self::MalformedResponse,
            DdnsError::Registrar(_) => Self::Registrar,
            DdnsError::Persistence(_) => Self::Persistence,
        }
    }
}
