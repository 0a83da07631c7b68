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

use crate::types::{Config, DdnsError};
use serde::Serialize;
use std::fs;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, DdnsError> {
        debug!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|_| {
            DdnsError::Configuration(format!(
                "Please verify that {} file exists",
                file_name(path)
            ))
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|_| {
            DdnsError::Configuration(format!(
                "Please verify that {} is a valid json file",
                file_name(path)
            ))
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DdnsError> {
        if self.domain.trim().is_empty() {
            return Err(DdnsError::Configuration("No domain configured".to_string()));
        }
        if self.ipinfo.url.trim().is_empty() {
            return Err(DdnsError::Configuration(
                "No IP lookup service configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites `path` with the whole record, tab-indented.
    pub fn save(&self, path: &Path) -> Result<(), DdnsError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| DdnsError::Persistence(format!("Failed to generate file: {e}")))?;
        out.push(b'\n');

        fs::write(path, out).map_err(|e| DdnsError::Persistence(e.to_string()))?;
        debug!("Wrote configuration to {}", path.display());
        Ok(())
    }
}
