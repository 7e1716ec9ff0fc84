use serde_json::Value;
use tracing::{error, info, instrument};

use crate::client::MegaverseApi;
use crate::convert::goal_from_body;
use crate::error::MegaverseError;

/// Fetches the goal map for one candidate and holds on to the last one seen.
pub struct GoalFetcher<'a, A> {
    api: &'a A,
    candidate_id: String,
    goal: Option<Value>,
}

impl<'a, A: MegaverseApi> GoalFetcher<'a, A> {
    pub fn new(api: &'a A, candidate_id: impl Into<String>) -> Self {
        Self {
            api,
            candidate_id: candidate_id.into(),
            goal: None,
        }
    }

    /// Requests the goal map once.
    ///
    /// Returns `Ok(false)` on a non-2xx status, keeping any goal from a
    /// previous call. Transport errors are returned as `Err`.
    #[instrument(skip(self), fields(candidate_id = %self.candidate_id))]
    pub async fn fetch(&mut self) -> Result<bool, MegaverseError> {
        let response = self.api.get_goal(&self.candidate_id).await?;

        if !response.is_success() {
            error!(status = response.status, "Failed to retrieve goal map");
            return Ok(false);
        }

        self.goal = Some(goal_from_body(&response.body));
        info!("Retrieved goal map");
        Ok(true)
    }

    /// The goal map from the last successful fetch.
    pub fn goal(&self) -> Option<&Value> {
        self.goal.as_ref()
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }
}
