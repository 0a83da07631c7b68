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

#[macro_use]
extern crate log;


mod client;
mod config;
mod network;
mod types;
mod util;
use types::Settings;

const DEFAULT_CONFIG_PATH: &str = "configs.json";
const DEFAULT_LOG_PATH: &str = "errors.log";
const DEFAULT_REGISTRAR_API: &str = "https://domains.google.com/nic/update";

fn main() {
    dotenvy::dotenv().ok();

    let settings = Settings {
        config_path: util::absolute_path(
            &dotenvy::var("DDNS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
        ),
        log_path: util::absolute_path(
            &dotenvy::var("DDNS_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string()),
        ),
        registrar_api: dotenvy::var("REGISTRAR_API")
            .unwrap_or_else(|_| DEFAULT_REGISTRAR_API.to_string()),
    };
    util::init_logger(&settings.log_path);
    debug!("Using configuration file {}", settings.config_path.display());

    std::process::exit(client::run(&settings).exit_code() as i32)
}
