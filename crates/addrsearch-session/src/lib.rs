//! The search-session core: debounce, logical cancellation, and stale-result
//! reconciliation for a live address search box.
//!
//! [`SearchSession`] consumes a [`Geocoder`] and publishes [`SessionState`]
//! snapshots through a watch channel. [`highlight`] computes the bold spans a
//! result list renders for the active query.

mod highlight;
mod session;
mod state;

pub use highlight::highlight;
pub use session::{Geocoder, SearchSession};
pub use state::{SessionPhase, SessionState};
