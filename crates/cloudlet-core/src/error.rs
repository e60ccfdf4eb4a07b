//! Error types for building a page location.

use thiserror::Error;

/// Returned when a page URL cannot serve as the console's location.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The string is not an absolute URL.
    #[error("invalid page URL {href:?}: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },
    /// The URL parsed but carries no host (e.g. `file:///index.html`).
    #[error("page URL {0:?} has no host")]
    MissingHost(String),
}
