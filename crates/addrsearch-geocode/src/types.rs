//! Wire types for the two external HTTP APIs.
//!
//! The geocoding endpoint returns a bare JSON array of place records with
//! string-encoded coordinates. The directions endpoint wraps everything in a
//! `{"routes": [...], "status": "OK"}` envelope.

use serde::Deserialize;

/// A raw place record from the geocoding endpoint.
///
/// `lat`/`lon` arrive string-encoded; [`crate::GeocodeClient`] parses them
/// while mapping into `AddressModel` and drops records that fail.
#[derive(Debug, Deserialize)]
pub struct PlaceRecord {
    pub place_id: String,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

// ---------------------------------------------------------------------------
// directions
// ---------------------------------------------------------------------------

/// Top-level envelope of a directions response.
///
/// `status` is `"OK"` on success; anything else carries an API-level error
/// code even when the HTTP status is 2xx.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub legs: Vec<Leg>,
    pub overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub steps: Vec<Step>,
}

/// One maneuver within a leg. `html_instructions` is verbatim provider HTML;
/// rendering (or tag stripping) is the presentation layer's job.
#[derive(Debug, Deserialize)]
pub struct Step {
    pub distance: TextValue,
    pub duration: TextValue,
    pub html_instructions: String,
    pub travel_mode: String,
}

/// A human-readable text / machine value pair (`"5.2 km"` / meters,
/// `"12 mins"` / seconds).
#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

/// Encoded polyline for drawing the whole route.
#[derive(Debug, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

/// Totals for the first route of a response, summed over its legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub distance_meters: i64,
    pub duration_seconds: i64,
    pub step_count: usize,
}

impl DirectionsResponse {
    /// Summarizes the first route, or `None` when the response has no routes.
    #[must_use]
    pub fn route_summary(&self) -> Option<RouteSummary> {
        let route = self.routes.first()?;
        Some(RouteSummary {
            distance_meters: route.legs.iter().map(|l| l.distance.value).sum(),
            duration_seconds: route.legs.iter().map(|l| l.duration.value).sum(),
            step_count: route.legs.iter().map(|l| l.steps.len()).sum(),
        })
    }
}
