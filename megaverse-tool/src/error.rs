use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Candidate id is empty. Pass --candidate-id, set MEGAVERSE_CANDIDATE_ID or configure ~/.config/megaverse/config.toml")]
    CandidateIdMissing,

    #[error("Failed to retrieve goal map")]
    GoalUnavailable,

    #[error("Megaverse error: {0}")]
    Core(#[from] megaverse_core::MegaverseError),
}
