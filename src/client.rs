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

use crate::network::{HttpTransport, SimulatedTransport, Transport, UpdateRequest};
use crate::types::{Config, DdnsError, RegistrarStatus};

pub mod pipeline;
pub use pipeline::run;

pub struct Updater {
    transport: Box<dyn Transport>,
    registrar_api: String,
    config: Config,
}

impl Updater {
    /// Picks the live or simulated transport according to the config's mode.
    pub fn from(config: Config, registrar_api: &str) -> Result<Self, DdnsError> {
        config.validate()?;
        let transport: Box<dyn Transport> = if config.is_simulation() {
            info!("Running in simulation mode, no requests will be sent");
            Box::new(SimulatedTransport::default())
        } else {
            Box::new(HttpTransport::new()?)
        };
        Ok(Self::with_transport(config, registrar_api, transport))
    }

    pub fn with_transport(
        config: Config,
        registrar_api: &str,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            registrar_api: registrar_api.to_string(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Asks the lookup service for the public address. When it differs from
    /// the last known one, `myip` is replaced and `true` is returned.
    pub fn detect_change(&mut self) -> Result<bool, DdnsError> {
        debug!(
            "Getting my current IP address from {}",
            self.config.ipinfo.url
        );
        let body = self.transport.lookup(&self.config.ipinfo)?;
        let observed = body.trim();

        if observed == self.config.myip {
            debug!("IP address {observed} is up to date");
            return Ok(false);
        }
        info!("IP address changed from '{}' to '{observed}'", self.config.myip);
        self.config.myip = observed.to_string();
        Ok(true)
    }

    /// Points the domain at `myip`. `Ok(false)` means the registrar already
    /// had that address.
    pub fn apply_update(&self) -> Result<bool, DdnsError> {
        let request = UpdateRequest {
            api: &self.registrar_api,
            username: &self.config.google.username,
            password: &self.config.google.password,
            hostname: &self.config.domain,
            myip: &self.config.myip,
        };
        debug!(
            "Pointing {} at {} via {}",
            self.config.domain, self.config.myip, self.registrar_api
        );
        let body = self.transport.update(&request)?;
        debug!("Registrar replied '{}'", body.trim());

        let status = RegistrarStatus::classify(&body);
        status.log();
        status.outcome()
    }
}
