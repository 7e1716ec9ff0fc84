//! Builds a Crossmint megaverse from its goal map.
//!
//! The pipeline is fetch, parse, place: [`GoalFetcher`] downloads the goal
//! map, [`parse_goal_map`] flattens it into [`Placement`]s and [`Placer`]
//! creates each astral object, backing off when the API rate-limits.
//!
//! # Example
//!
//! ```ignore
//! use megaverse_core::{parse_goal_map, GoalFetcher, MegaverseClient, Placer, RetryPolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), megaverse_core::MegaverseError> {
//!     let client = MegaverseClient::new();
//!     let mut fetcher = GoalFetcher::new(&client, "your-candidate-id");
//!
//!     if fetcher.fetch().await? {
//!         let placements = fetcher.goal().map(parse_goal_map).unwrap_or_default();
//!         let placer = Placer::new(&client, "your-candidate-id", RetryPolicy::default());
//!         let report = placer.place_all(&placements).await;
//!         println!("placed {} of {}", report.placed, report.total());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod convert;
mod error;
mod fetch;
mod grid;
#[cfg(test)]
mod log_capture;
mod place;
mod retry;
mod types;

pub use client::{ApiResponse, MegaverseApi, MegaverseClient, DEFAULT_BASE_URL};
pub use convert::{build_create_body, goal_from_body};
pub use error::MegaverseError;
pub use fetch::GoalFetcher;
pub use grid::parse_goal_map;
pub use place::{Outcome, PlacementReport, Placer};
pub use retry::{RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS};
pub use types::{Color, Direction, Entity, EntityKind, Placement, SPACE};
