use addrsearch_core::Coordinate;

const WEB_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// A composed navigation intent, ready for the launch surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Native deep link or web directions URL.
    pub uri: String,
    /// `true` when the produced URI degrades from what was requested:
    /// native was preferred but unavailable, or the origin is unknown.
    pub is_fallback: bool,
}

/// Composes the navigation URI for driving to `destination`.
///
/// Policy, in order:
/// - native preferred and a native handler available → deep link encoding
///   the destination and driving mode;
/// - origin known → web URL with both endpoints and `travelmode=driving`;
/// - origin unknown → destination-only web URL.
///
/// Never performs I/O; the caller owns the actual launch and its failures.
#[must_use]
pub fn build_navigation_request(
    origin: Option<Coordinate>,
    destination: Coordinate,
    prefer_native: bool,
    native_available: bool,
) -> NavigationRequest {
    if prefer_native && native_available {
        return NavigationRequest {
            uri: format!("google.navigation:q={destination}&mode=d"),
            is_fallback: false,
        };
    }

    let uri = match origin {
        Some(origin) => format!(
            "{WEB_DIRECTIONS_URL}&origin={origin}&destination={destination}&travelmode=driving"
        ),
        None => format!("{WEB_DIRECTIONS_URL}&destination={destination}&travelmode=driving"),
    };
    NavigationRequest {
        uri,
        is_fallback: prefer_native || origin.is_none(),
    }
}
