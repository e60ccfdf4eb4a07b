//! `cloudlet-urls param <NAME>` – print a raw query parameter value.

use anyhow::{bail, Result};
use cloudlet_core::location::LocationProvider;
use cloudlet_core::url_builder::UrlBuilder;

/// Prints the value (possibly empty). An absent parameter is an error so scripts can tell it apart.
pub fn run_param<L: LocationProvider>(builder: &UrlBuilder<L>, name: &str) -> Result<()> {
    match builder.uri_param(name) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!(
            "query parameter {:?} not present in {}",
            name,
            builder.location().href()
        ),
    }
}
