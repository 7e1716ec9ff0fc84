use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::client::MegaverseApi;
use crate::convert::build_create_body;
use crate::retry::RetryPolicy;
use crate::types::{Entity, Placement};

/// Terminal state of a single placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Placed,
    Skipped,
    Failed,
}

/// Tally of outcomes for one placement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub placed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PlacementReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Placed => self.placed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.placed + self.skipped + self.failed
    }
}

/// Sends create requests for placements, one at a time.
pub struct Placer<'a, A> {
    api: &'a A,
    candidate_id: String,
    policy: RetryPolicy,
    dry_run: bool,
}

impl<'a, A: MegaverseApi> Placer<'a, A> {
    pub fn new(api: &'a A, candidate_id: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            api,
            candidate_id: candidate_id.into(),
            policy,
            dry_run: false,
        }
    }

    /// In dry-run mode valid placements are logged and counted but not sent.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Places every item in order. A failed item never stops the pass.
    pub async fn place_all(&self, placements: &[Placement]) -> PlacementReport {
        let mut report = PlacementReport::default();
        for placement in placements {
            report.record(self.place(placement).await);
        }
        report
    }

    #[instrument(skip(self, placement), fields(label = %placement.label, row = placement.row, column = placement.column))]
    pub async fn place(&self, placement: &Placement) -> Outcome {
        let entity = match Entity::from_label(&placement.label) {
            Ok(entity) => entity,
            Err(e) => {
                error!(error = %e, "Skipping placement");
                return Outcome::Skipped;
            }
        };

        let body = build_create_body(&entity, placement.row, placement.column, &self.candidate_id);

        if self.dry_run {
            info!(endpoint = entity.endpoint(), %body, "Would place {}", entity);
            return Outcome::Placed;
        }

        self.send_with_retry(&entity, &body).await
    }

    async fn send_with_retry(&self, entity: &Entity, body: &Value) -> Outcome {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let response = match self.api.create(entity.endpoint(), body).await {
                Ok(response) => response,
                Err(e) => {
                    error!(attempt, error = %e, "Failed to place {}", entity);
                    return Outcome::Failed;
                }
            };

            if response.is_success() {
                info!(attempt, status = response.status, "Placed {}", entity);
                return Outcome::Placed;
            }

            if !response.is_rate_limited() {
                error!(
                    attempt,
                    status = response.status,
                    body = %response.body,
                    "Failed to place {}",
                    entity
                );
                return Outcome::Failed;
            }

            if attempt < max_attempts {
                let delay = self.policy.delay_for_attempt(attempt);
                warn!(attempt, ?delay, "Too many requests, waiting for cooldown");
                tokio::time::sleep(delay).await;
            }
        }

        error!(
            attempts = max_attempts,
            "Giving up on {} while still rate limited", entity
        );
        Outcome::Failed
    }
}
