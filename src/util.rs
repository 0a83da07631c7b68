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

use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Resolves `path` against the working directory.
pub fn absolute_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(dir) => dir.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Sends log records to `log_path`, appending, or to stderr if the file
/// cannot be opened. The filter defaults to `error` unless RUST_LOG is set.
pub fn build_logger(log_path: &Path) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));
    builder.format(|buf, record| {
        writeln!(buf, "{} {}", buf.timestamp_seconds(), record.args())
    });
    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
        }
        Err(e) => eprintln!("Cannot open log file {}: {e}", log_path.display()),
    }
    builder
}

pub fn init_logger(log_path: &Path) {
    build_logger(log_path).init();
}
