//! `cloudlet-urls show` – print both API base URLs.

use anyhow::Result;
use cloudlet_core::location::LocationProvider;
use cloudlet_core::url_builder::UrlBuilder;

pub fn run_show<L: LocationProvider>(builder: &UrlBuilder<L>, json: bool) -> Result<()> {
    let endpoints = builder.endpoints();
    if json {
        println!("{}", serde_json::to_string_pretty(&endpoints)?);
    } else {
        println!("{:<12} {}", "cloudlet", endpoints.cloudlet);
        println!("{:<12} {}", "geofencing", endpoints.geofencing);
    }
    Ok(())
}
