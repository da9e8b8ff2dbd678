use async_trait::async_trait;
use thiserror::Error;

use addrsearch_core::Coordinate;

use crate::builder::{build_navigation_request, NavigationRequest};

/// Why the current location could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("current location unavailable")]
    Unavailable,
    #[error("location permission denied")]
    PermissionDenied,
}

/// Errors from the launch surface.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("navigation launch failed: {0}")]
    Launch(String),
}

/// External source of the device's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// External mechanism that opens a navigation URI (native app or browser).
#[async_trait]
pub trait NavigationSurface: Send + Sync {
    /// Whether a native maps handler is installed for deep links.
    fn native_handler_available(&self) -> bool;

    async fn launch(&self, request: &NavigationRequest) -> Result<(), NavError>;
}

/// Starts navigation from the device's current location to `destination`.
///
/// A [`LocationError`] degrades the request to destination-only navigation
/// instead of failing; it is logged once here and never retried. Returns the
/// launched request so the caller can report what was opened.
///
/// # Errors
///
/// Returns [`NavError::Launch`] when the surface fails to open the URI.
pub async fn navigate_to(
    provider: &dyn LocationProvider,
    surface: &dyn NavigationSurface,
    destination: Coordinate,
    prefer_native: bool,
) -> Result<NavigationRequest, NavError> {
    let origin = match provider.current_location().await {
        Ok(coordinate) => Some(coordinate),
        Err(e) => {
            tracing::warn!(error = %e, "degrading to destination-only navigation");
            None
        }
    };

    let request = build_navigation_request(
        origin,
        destination,
        prefer_native,
        surface.native_handler_available(),
    );
    surface.launch(&request).await?;
    tracing::info!(uri = %request.uri, fallback = request.is_fallback, "navigation launched");
    Ok(request)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FixedLocation(Result<Coordinate, LocationError>);

    #[async_trait]
    impl LocationProvider for FixedLocation {
        async fn current_location(&self) -> Result<Coordinate, LocationError> {
            self.0
        }
    }

    struct RecordingSurface {
        native: bool,
        launched: Mutex<Vec<NavigationRequest>>,
    }

    impl RecordingSurface {
        fn new(native: bool) -> Self {
            Self {
                native,
                launched: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NavigationSurface for RecordingSurface {
        fn native_handler_available(&self) -> bool {
            self.native
        }

        async fn launch(&self, request: &NavigationRequest) -> Result<(), NavError> {
            self.launched.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    const DESTINATION: Coordinate = Coordinate { lat: 37.5, lon: -122.5 };

    #[tokio::test]
    async fn launches_native_deep_link_when_available() {
        let provider = FixedLocation(Ok(Coordinate { lat: 37.0, lon: -122.0 }));
        let surface = RecordingSurface::new(true);

        let request = navigate_to(&provider, &surface, DESTINATION, true)
            .await
            .unwrap();

        assert!(request.uri.starts_with("google.navigation:"));
        assert_eq!(surface.launched.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn permission_denied_degrades_to_destination_only() {
        let provider = FixedLocation(Err(LocationError::PermissionDenied));
        let surface = RecordingSurface::new(false);

        let request = navigate_to(&provider, &surface, DESTINATION, false)
            .await
            .unwrap();

        assert!(!request.uri.contains("origin="), "{}", request.uri);
        assert!(request.is_fallback);
        assert_eq!(surface.launched.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn location_unavailable_still_launches() {
        let provider = FixedLocation(Err(LocationError::Unavailable));
        let surface = RecordingSurface::new(true);

        let request = navigate_to(&provider, &surface, DESTINATION, true)
            .await
            .unwrap();

        // Native deep links only need the destination, so the missing origin
        // does not force the web fallback.
        assert!(request.uri.starts_with("google.navigation:"));
    }

    struct FailingSurface;

    #[async_trait]
    impl NavigationSurface for FailingSurface {
        fn native_handler_available(&self) -> bool {
            false
        }

        async fn launch(&self, _request: &NavigationRequest) -> Result<(), NavError> {
            Err(NavError::Launch("no handler".to_owned()))
        }
    }

    #[tokio::test]
    async fn launch_failure_surfaces_as_error() {
        let provider = FixedLocation(Ok(Coordinate { lat: 37.0, lon: -122.0 }));

        let err = navigate_to(&provider, &FailingSurface, DESTINATION, false)
            .await
            .unwrap_err();

        assert!(matches!(err, NavError::Launch(_)));
    }
}
