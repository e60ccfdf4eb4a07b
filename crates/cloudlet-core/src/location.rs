//! Page location abstraction.
//!
//! The URL builder never reads global state; it asks a [`LocationProvider`]
//! for the current page URL and hostname. Hosts embedding the builder supply
//! their own provider; [`StaticLocation`] covers fixed URLs (CLI, tests).

use crate::error::LocationError;

/// Read access to the page the console is currently showing.
pub trait LocationProvider {
    /// Full page URL, including query string and fragment.
    fn href(&self) -> String;
    /// Hostname of the page, without port.
    fn hostname(&self) -> String;
}

impl<L: LocationProvider + ?Sized> LocationProvider for &L {
    fn href(&self) -> String {
        (**self).href()
    }

    fn hostname(&self) -> String {
        (**self).hostname()
    }
}

/// A location fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation {
    href: String,
    hostname: String,
}

impl StaticLocation {
    /// Parses `href` as an absolute URL and captures its hostname.
    ///
    /// The href is kept verbatim so that query lookups see exactly what the
    /// caller passed, not the normalized form produced by the URL parser.
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let parsed = url::Url::parse(href).map_err(|source| LocationError::InvalidUrl {
            href: href.to_string(),
            source,
        })?;
        let hostname = match parsed.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(LocationError::MissingHost(href.to_string())),
        };
        Ok(Self {
            href: href.to_string(),
            hostname,
        })
    }

    /// Builds a location from already-known parts without parsing.
    pub fn from_parts(href: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            hostname: hostname.into(),
        }
    }
}

impl LocationProvider for StaticLocation {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

/// A location read on every call through a pair of closures.
pub struct FnLocation<H, N> {
    href: H,
    hostname: N,
}

impl<H, N> FnLocation<H, N>
where
    H: Fn() -> String,
    N: Fn() -> String,
{
    pub fn new(href: H, hostname: N) -> Self {
        Self { href, hostname }
    }
}

impl<H, N> LocationProvider for FnLocation<H, N>
where
    H: Fn() -> String,
    N: Fn() -> String,
{
    fn href(&self) -> String {
        (self.href)()
    }

    fn hostname(&self) -> String {
        (self.hostname)()
    }
}
