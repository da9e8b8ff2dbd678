use addrsearch_core::AddressModel;

/// Where the session currently is in its query lifecycle.
///
/// `Resolved` and `Failed` are not terminal; any query change re-enters
/// `Debouncing` or `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No active query (empty or whitespace-only input).
    Idle,
    /// A non-empty query is waiting out the debounce window.
    Debouncing,
    /// A geocode request for the current generation is in flight.
    Loading,
    /// The latest request completed with results (possibly zero matches).
    Resolved,
    /// The latest request completed with an error.
    Failed,
}

/// Published snapshot of the session, read-only for consumers.
///
/// Invariants, enforced at the session's single mutation point:
/// `is_loading == true` implies `error == None`; any completion sets exactly
/// one of (`results`, `error`) and always clears `is_loading`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Latest results, in provider order.
    pub results: Vec<AddressModel>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// The raw (untrimmed) query as last typed.
    pub current_query: String,
    pub phase: SessionPhase,
}

impl SessionState {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            is_loading: false,
            error: None,
            current_query: String::new(),
            phase: SessionPhase::Idle,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::empty()
    }
}
