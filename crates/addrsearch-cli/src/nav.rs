//! Navigation intent composition from the terminal.
//!
//! A terminal has no native maps handler and no geolocation hardware, so the
//! surface reports the handler as unavailable and the provider only knows a
//! location the user passed explicitly; the builder's fallback policy does
//! the rest.

use async_trait::async_trait;

use addrsearch_core::Coordinate;
use addrsearch_nav::{
    navigate_to, LocationError, LocationProvider, NavError, NavigationRequest, NavigationSurface,
};

struct CliLocationProvider(Option<Coordinate>);

#[async_trait]
impl LocationProvider for CliLocationProvider {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.0.ok_or(LocationError::Unavailable)
    }
}

struct PrintSurface;

#[async_trait]
impl NavigationSurface for PrintSurface {
    fn native_handler_available(&self) -> bool {
        false
    }

    async fn launch(&self, request: &NavigationRequest) -> Result<(), NavError> {
        println!("open: {}", request.uri);
        Ok(())
    }
}

pub async fn run(to: Coordinate, from: Option<Coordinate>, native: bool) -> anyhow::Result<()> {
    let request = navigate_to(&CliLocationProvider(from), &PrintSurface, to, native).await?;
    if request.is_fallback {
        println!("(fallback navigation)");
    }
    Ok(())
}
