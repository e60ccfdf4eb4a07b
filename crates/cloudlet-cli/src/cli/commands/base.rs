//! `cloudlet-urls api-base` and `cloudlet-urls geofencing-base`.

use anyhow::Result;
use cloudlet_core::location::LocationProvider;
use cloudlet_core::url_builder::UrlBuilder;

pub fn run_api_base<L: LocationProvider>(builder: &UrlBuilder<L>) -> Result<()> {
    println!("{}", builder.cloudlet_api_base());
    Ok(())
}

pub fn run_geofencing_base<L: LocationProvider>(builder: &UrlBuilder<L>) -> Result<()> {
    println!("{}", builder.geofencing_cloudlet_api_base());
    Ok(())
}
