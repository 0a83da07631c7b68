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

use crate::types::{DdnsError, IpLookup};
use reqwest::blocking::{Client, ClientBuilder, RequestBuilder};
use reqwest::Url;

pub const USER_AGENT: &str = "Dynamic-DNS-Updater";

/// Address reported by the lookup service in simulation mode.
pub const SIMULATED_IP: &str = "Test IP Address";
/// Registrar reply in simulation mode.
pub const SIMULATED_REPLY: &str = "test";

/// Everything the registrar needs to point `hostname` at `myip`.
#[derive(Debug, Clone, Copy)]
pub struct UpdateRequest<'a> {
    pub api: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hostname: &'a str,
    pub myip: &'a str,
}

/// The two round-trips the updater makes. Both return the raw reply body.
pub trait Transport {
    /// Ask the lookup service for the public IP address.
    fn lookup(&self, ipinfo: &IpLookup) -> Result<String, DdnsError>;
    /// Send an update to the registrar.
    fn update(&self, request: &UpdateRequest) -> Result<String, DdnsError>;
}

/// `{url}/ip?token={key}`
pub fn lookup_url(ipinfo: &IpLookup) -> Result<Url, DdnsError> {
    Url::parse_with_params(&format!("{}/ip", ipinfo.url), &[("token", &ipinfo.key)])
        .map_err(|e| DdnsError::Network(format!("Invalid IP lookup URL: {e}")))
}

// https://support.google.com/domains/answer/6147083
// Credentials travel as the URL's userinfo, which reqwest sends as Basic auth.
pub fn registrar_url(request: &UpdateRequest) -> Result<Url, DdnsError> {
    let invalid = || DdnsError::Network("Invalid registrar URL".to_string());
    let mut url = Url::parse_with_params(
        request.api,
        &[("hostname", request.hostname), ("myip", request.myip)],
    )
    .map_err(|e| DdnsError::Network(format!("Invalid registrar URL: {e}")))?;
    url.set_username(request.username).map_err(|()| invalid())?;
    url.set_password(Some(request.password))
        .map_err(|()| invalid())?;
    Ok(url)
}

fn service_name(url: &Url) -> String {
    url.host_str().unwrap_or("remote service").to_string()
}

pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, DdnsError> {
        debug!("Initializing HTTP client...");
        Ok(Self {
            http_client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
        })
    }
}

// Non-success statuses are not errors here; registrar refusals are
// reported in the body and classified by the caller.
fn fetch_body(request: RequestBuilder, service: &str) -> Result<String, DdnsError> {
    let response = request.send().map_err(|e| {
        DdnsError::Network(format!(
            "Could not connect to {service}: {}",
            e.without_url()
        ))
    })?;
    if !response.status().is_success() {
        warn!("{service} responded with status {}", response.status());
    }
    response.text().map_err(|e| {
        DdnsError::MalformedResponse(format!(
            "Weird body returned from {service}: {}",
            e.without_url()
        ))
    })
}

impl Transport for HttpTransport {
    fn lookup(&self, ipinfo: &IpLookup) -> Result<String, DdnsError> {
        let url = lookup_url(ipinfo)?;
        let service = service_name(&url);
        fetch_body(self.http_client.get(url), &service)
    }

    fn update(&self, request: &UpdateRequest) -> Result<String, DdnsError> {
        let url = registrar_url(request)?;
        let service = service_name(&url);
        fetch_body(self.http_client.post(url), &service)
    }
}

/// Answers both round-trips with canned bodies and never opens a socket.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub ip: String,
    pub reply: String,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            ip: SIMULATED_IP.to_string(),
            reply: SIMULATED_REPLY.to_string(),
        }
    }
}

impl Transport for SimulatedTransport {
    fn lookup(&self, _ipinfo: &IpLookup) -> Result<String, DdnsError> {
        debug!("Simulation mode, skipping IP lookup");
        Ok(self.ip.clone())
    }

    fn update(&self, _request: &UpdateRequest) -> Result<String, DdnsError> {
        debug!("Simulation mode, skipping registrar update");
        Ok(self.reply.clone())
    }
}
