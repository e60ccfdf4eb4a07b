//! API base URL resolution for the cloudlet console.
//!
//! The console talks to two HTTP APIs on the same host and port. By default
//! the host is the one serving the console page; a `cloudUri` query
//! parameter on the page URL points the console at another host.

mod param;

pub use param::uri_param;

use serde::{Deserialize, Serialize};

use crate::location::LocationProvider;

/// Port both cloudlet APIs listen on.
pub const API_PORT: u16 = 15001;

/// Query parameter that overrides the API host.
pub const OVERRIDE_PARAM: &str = "cloudUri";

const API_PATH: &str = "/api";
const GEOFENCING_SUFFIX: &str = "/geofencing";

/// How an override that is present but empty (`?cloudUri=`) is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyOverride {
    /// Ignore it and use the page hostname.
    #[default]
    Fallback,
    /// Use it as the host, producing `http://:15001/...`.
    Keep,
}

/// Both base URLs resolved against one page location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    pub cloudlet: String,
    pub geofencing: String,
}

/// Resolves API base URLs from a page location.
#[derive(Debug, Clone)]
pub struct UrlBuilder<L> {
    location: L,
    empty_override: EmptyOverride,
}

impl<L: LocationProvider> UrlBuilder<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            empty_override: EmptyOverride::default(),
        }
    }

    pub fn with_empty_override(mut self, mode: EmptyOverride) -> Self {
        self.empty_override = mode;
        self
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Raw value of query parameter `name` on the current page, if present.
    pub fn uri_param(&self, name: &str) -> Option<String> {
        uri_param(&self.location.href(), name)
    }

    /// Host the APIs are reached on: the `cloudUri` override or the page hostname.
    pub fn api_host(&self) -> String {
        match self.uri_param(OVERRIDE_PARAM) {
            Some(host) if !host.is_empty() => host,
            Some(host) if self.empty_override == EmptyOverride::Keep => {
                tracing::warn!("empty {} override kept as API host", OVERRIDE_PARAM);
                host
            }
            Some(_) => {
                let host = self.location.hostname();
                tracing::warn!(
                    "ignoring empty {} override, using page host {}",
                    OVERRIDE_PARAM,
                    host
                );
                host
            }
            None => self.location.hostname(),
        }
    }

    /// `http://<host>:15001/api`
    pub fn cloudlet_api_base(&self) -> String {
        base_url(&self.api_host(), "")
    }

    /// `http://<host>:15001/api/geofencing`
    pub fn geofencing_cloudlet_api_base(&self) -> String {
        base_url(&self.api_host(), GEOFENCING_SUFFIX)
    }

    /// Both base URLs, resolving the host once.
    pub fn endpoints(&self) -> ApiEndpoints {
        let host = self.api_host();
        tracing::debug!("resolved cloudlet API host {}", host);
        ApiEndpoints {
            cloudlet: base_url(&host, ""),
            geofencing: base_url(&host, GEOFENCING_SUFFIX),
        }
    }
}

fn base_url(host: &str, suffix: &str) -> String {
    format!("http://{}:{}{}{}", host, API_PORT, API_PATH, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::StaticLocation;

    fn builder(href: &str, hostname: &str) -> UrlBuilder<StaticLocation> {
        UrlBuilder::new(StaticLocation::from_parts(href, hostname))
    }

    #[test]
    fn geofencing_base_uses_page_host() {
        let b = builder("http://example.com/#/geofencing", "example.com");
        assert_eq!(
            b.geofencing_cloudlet_api_base(),
            "http://example.com:15001/api/geofencing"
        );
    }

    #[test]
    fn cloudlet_base_uses_override() {
        let b = builder("http://example.com/?cloudUri=10.0.0.5", "example.com");
        assert_eq!(b.cloudlet_api_base(), "http://10.0.0.5:15001/api");
        assert_eq!(
            b.geofencing_cloudlet_api_base(),
            "http://10.0.0.5:15001/api/geofencing"
        );
    }

    #[test]
    fn override_with_port_is_used_verbatim() {
        let b = builder("http://example.com/?cloudUri=gw:1", "example.com");
        assert_eq!(b.cloudlet_api_base(), "http://gw:1:15001/api");
    }

    #[test]
    fn empty_override_falls_back_by_default() {
        let b = builder("http://example.com/?cloudUri=", "example.com");
        assert_eq!(b.uri_param(OVERRIDE_PARAM).as_deref(), Some(""));
        assert_eq!(b.api_host(), "example.com");
        assert_eq!(b.cloudlet_api_base(), "http://example.com:15001/api");
    }

    #[test]
    fn empty_override_kept_yields_hostless_url() {
        let b = builder("http://example.com/?cloudUri=&x=1", "example.com")
            .with_empty_override(EmptyOverride::Keep);
        assert_eq!(b.cloudlet_api_base(), "http://:15001/api");
        assert_eq!(b.geofencing_cloudlet_api_base(), "http://:15001/api/geofencing");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let b = builder("http://example.com/?cloudUri=a&cloudUri=b", "example.com");
        assert_eq!(b.cloudlet_api_base(), b.cloudlet_api_base());
        assert_eq!(
            b.geofencing_cloudlet_api_base(),
            b.geofencing_cloudlet_api_base()
        );
        assert_eq!(b.uri_param("cloudUri"), b.uri_param("cloudUri"));
        assert_eq!(b.cloudlet_api_base(), "http://a:15001/api");
    }

    #[test]
    fn endpoints_match_individual_calls() {
        let b = builder("http://console.local/", "console.local");
        let ep = b.endpoints();
        assert_eq!(ep.cloudlet, b.cloudlet_api_base());
        assert_eq!(ep.geofencing, b.geofencing_cloudlet_api_base());
    }

    #[test]
    fn empty_override_toml_names() {
        #[derive(Deserialize)]
        struct Wrap {
            mode: EmptyOverride,
        }
        let w: Wrap = toml::from_str("mode = \"keep\"").unwrap();
        assert_eq!(w.mode, EmptyOverride::Keep);
        let w: Wrap = toml::from_str("mode = \"fallback\"").unwrap();
        assert_eq!(w.mode, EmptyOverride::Fallback);
    }
}
