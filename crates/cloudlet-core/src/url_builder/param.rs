//! Raw query parameter lookup over a full page URL.

/// Returns the raw value of the first `?name=` or `&name=` in `href`.
///
/// The whole href is searched, fragment included, since hash-routed pages
/// carry their query after the `#`. The value runs up to the next `&` or `#`
/// and is returned without percent-decoding. `name` is matched literally.
///
/// A parameter that is present but empty yields `Some("")`, which is not the
/// same as absent (`None`).
pub fn uri_param(href: &str, name: &str) -> Option<String> {
    href.match_indices(['?', '&']).find_map(|(idx, sep)| {
        let rest = href[idx + sep.len()..]
            .strip_prefix(name)?
            .strip_prefix('=')?;
        let end = rest.find(['&', '#']).unwrap_or(rest.len());
        Some(rest[..end].to_string())
    })
}
