//! Proxy descriptors derived from the `<proxies>` section

use crate::document::{ProxiesXml, ProxyXml};
use serde::Serialize;

/// A validated proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyConfig {
    pub host: String,

    /// Always a valid port; malformed text in the file becomes `0`
    pub port: u16,

    /// Protocol tag such as `http` or `https`
    #[serde(rename = "type")]
    pub proxy_type: String,

    /// `|`-separated hosts that should not go through this proxy
    pub non_proxy_hosts: String,
}

impl ProxyConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        proxy_type: impl Into<String>,
        non_proxy_hosts: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            proxy_type: proxy_type.into(),
            non_proxy_hosts: non_proxy_hosts.into(),
        }
    }

    /// Build a descriptor from a raw `<proxy>` entry. Never fails.
    pub fn from_xml(xml: &ProxyXml) -> Self {
        Self::new(
            xml.host.clone(),
            parse_port(&xml.port),
            xml.proxy_type.clone(),
            xml.non_proxy_hosts.clone(),
        )
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Individual patterns of the exclusion list, blanks skipped.
    pub fn non_proxy_hosts(&self) -> impl Iterator<Item = &str> {
        self.non_proxy_hosts
            .split('|')
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
    }

    /// Whether connections to `host` should skip this proxy.
    ///
    /// Patterns compare case-insensitively and may carry a single `*`
    /// wildcard at the start (`*.internal`) or the end (`192.168.*`).
    pub fn bypasses(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.non_proxy_hosts()
            .any(|pattern| host_matches(&pattern.to_ascii_lowercase(), &host))
    }
}

fn host_matches(pattern: &str, host: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        host.ends_with(suffix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        host.starts_with(prefix)
    } else {
        host == pattern
    }
}

/// Parse a port from its textual form, falling back to `0`.
///
/// Surrounding whitespace is ignored. Anything that is not a valid `u16`
/// maps to `0`: non-numeric text, negative numbers, and numbers above
/// 65535 alike. Entries are never rejected for a bad port.
pub fn parse_port(text: &str) -> u16 {
    let trimmed = text.trim();
    match trimmed.parse::<u16>() {
        Ok(port) => port,
        Err(err) => {
            if !trimmed.is_empty() {
                tracing::warn!(port = %trimmed, error = %err, "Invalid proxy port, using 0");
            }
            0
        }
    }
}

/// Turn the raw `<proxies>` section into descriptors.
///
/// An absent section stays `None`; an empty one becomes an empty list.
pub fn derive_proxies(proxies: Option<&ProxiesXml>) -> Option<Vec<ProxyConfig>> {
    proxies.map(|section| section.proxy.iter().map(ProxyConfig::from_xml).collect())
}

/// First proxy whose type equals `protocol`.
pub fn find_by_protocol<'a>(
    proxies: &'a [ProxyConfig],
    protocol: &str,
) -> Option<&'a ProxyConfig> {
    proxies.iter().find(|proxy| proxy.proxy_type == protocol)
}

/// Lookup helpers on a list of proxies
pub trait ProxyConfigs {
    /// See [`find_by_protocol`].
    fn get_proxy(&self, protocol: &str) -> Option<&ProxyConfig>;
}

impl ProxyConfigs for [ProxyConfig] {
    fn get_proxy(&self, protocol: &str) -> Option<&ProxyConfig> {
        find_by_protocol(self, protocol)
    }
}
