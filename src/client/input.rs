// src/client/input.rs
use std::sync::atomic::{AtomicU64, Ordering};

use super::view::MeterView;
use super::AnalyzerClient;

/// Monotonic ticket counter for keystroke ordering.
///
/// Each input event takes a ticket before any request is made. A response is
/// rendered only if its ticket is still the latest one issued, so a slow
/// response for an old keystroke can never overwrite a newer result.
#[derive(Debug, Default)]
pub struct Tickets {
    latest: AtomicU64,
}

impl Tickets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Input handler for the password field.
///
/// Empty input resets the meter without a network call and invalidates any
/// request still in flight. Non-empty input delegates to the analysis
/// endpoint; the returned view is `None` when the response arrived stale.
pub struct PasswordInput {
    client: AnalyzerClient,
    tickets: Tickets,
}

impl PasswordInput {
    pub fn new(client: AnalyzerClient) -> Self {
        Self {
            client,
            tickets: Tickets::new(),
        }
    }

    pub async fn on_input(&self, value: &str) -> Option<MeterView> {
        let ticket = self.tickets.issue();

        if value.is_empty() {
            return Some(MeterView::placeholder());
        }

        let outcome = self.client.analyze(value).await;

        if !self.tickets.is_current(ticket) {
            log::debug!("dropping stale analysis response for ticket {ticket}");
            return None;
        }

        Some(match outcome {
            Ok(result) => MeterView::from_analysis(&result),
            Err(err) => {
                log::warn!("password analysis failed: {err}");
                MeterView::from_error(&err)
            }
        })
    }
}
