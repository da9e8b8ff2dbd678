//! Interactive search session on stdin.
//!
//! Each line typed becomes the current query; the debounce window coalesces
//! rapid edits, and state snapshots are rendered as they are published. An
//! empty line clears the session; EOF (Ctrl-D) exits.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use addrsearch_core::AppConfig;
use addrsearch_session::{Geocoder, SearchSession, SessionPhase, SessionState};

use crate::search::{emphasize, geocode_client};

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = geocode_client(config)?;
    let session = SearchSession::new(
        Arc::new(client) as Arc<dyn Geocoder>,
        Duration::from_millis(config.debounce_ms),
    );
    let mut rx = session.subscribe();

    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            print!("{}", render(&state));
        }
    });

    println!("type to search; an empty line clears, Ctrl-D exits");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        session.on_query_changed(&line);
    }

    // Dropping the session closes the state channel once any in-flight
    // request finishes, which lets the printer drain the final snapshot.
    drop(session);
    printer.await.context("state printer task failed")?;
    Ok(())
}

/// Renders one published snapshot as terminal output.
fn render(state: &SessionState) -> String {
    let query = state.current_query.trim();
    let mut out = String::new();
    match state.phase {
        SessionPhase::Idle | SessionPhase::Debouncing => {}
        SessionPhase::Loading => out.push_str("searching...\n"),
        SessionPhase::Failed => {
            if let Some(error) = &state.error {
                out.push_str(&format!("error: {error}\n"));
            }
        }
        SessionPhase::Resolved => {
            if state.results.is_empty() {
                out.push_str(&format!("no matches for \"{query}\"\n"));
            }
            for address in &state.results {
                out.push_str(&format!(
                    "{}  ({})\n",
                    emphasize(&address.display_address, query),
                    address.coordinate(),
                ));
            }
        }
    }
    out
}
