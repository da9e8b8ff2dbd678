//! HTTP clients for the external location services.
//!
//! [`GeocodeClient`] wraps the forward-geocoding endpoint and maps provider
//! records into [`addrsearch_core::AddressModel`]. [`DirectionsClient`] wraps
//! the directions endpoint for the optional route-summary feature. Neither
//! client implements request cancellation: staleness of superseded searches
//! is handled by the session layer, which discards late completions.

mod client;
mod directions;
mod error;
mod types;

pub use client::GeocodeClient;
pub use directions::DirectionsClient;
pub use error::{DirectionsError, GeocodeError};
pub use types::{
    DirectionsResponse, Leg, OverviewPolyline, PlaceRecord, Route, RouteSummary, Step, TextValue,
};
