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

use super::Updater;
use crate::types::{Config, DdnsError, ExitCode, Settings};
use std::path::Path;

/// How a single invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The public address matches the stored one.
    Unchanged,
    /// The registrar replied `nochg`.
    NoChange,
    /// The registrar accepted the address and it was written to disk.
    Updated,
    Failed(ExitCode),
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Failed(code) => code,
            _ => ExitCode::Ok,
        }
    }
}

fn fail(message: &str, err: DdnsError) -> Outcome {
    error!("{message} - {err}");
    Outcome::Failed(ExitCode::from(&err))
}

/// Loads the configuration named in `settings` and runs one update.
pub fn run(settings: &Settings) -> Outcome {
    let updater = Config::load(&settings.config_path)
        .and_then(|config| Updater::from(config, &settings.registrar_api));
    match updater {
        Ok(mut updater) => updater.run(&settings.config_path),
        Err(e) => fail("Failed to load configs", e),
    }
}

impl Updater {
    /// Detect, update, persist. Each step runs only if the previous one
    /// succeeded and asked for more work.
    pub fn run(&mut self, config_path: &Path) -> Outcome {
        match self.detect_change() {
            Ok(true) => (),
            Ok(false) => return Outcome::Unchanged,
            Err(e) => return fail("Failed to check if IP has changed", e),
        }

        match self.apply_update() {
            Ok(true) => (),
            Ok(false) => return Outcome::NoChange,
            Err(e) => return fail("Failed to update DNS", e),
        }

        if let Err(e) = self.config.save(config_path) {
            return fail("Failed to write the new IP to the json file", e);
        }
        let config = self.config();
        info!("{} now points at {}", config.domain, config.myip);
        Outcome::Updated
    }
}
