//! Navigation-intent composition and launch orchestration.
//!
//! [`build_navigation_request`] is pure string work: given coordinates and a
//! native-app preference it produces either a maps deep link or a web
//! directions URL. [`navigate_to`] wires it to the external collaborators
//! (location provider, launch surface), degrading to destination-only
//! navigation whenever the current location cannot be obtained.

mod builder;
mod launch;

pub use builder::{build_navigation_request, NavigationRequest};
pub use launch::{navigate_to, LocationError, NavError, LocationProvider, NavigationSurface};
