//! Geometry and interaction core for the season travel globe.
//!
//! Everything in this crate is renderer-free: pure functions over `glam`
//! vectors plus small state machines that the viewer advances once per
//! rendered frame. The viewer crate owns all Bevy-specific concerns.

pub mod adaptive;
pub mod arc;
pub mod emissions;
pub mod error;
pub mod interaction;
pub mod marker;
pub mod projection;
pub mod season;

pub use arc::{ArcGeometry, DEFAULT_ARC_SEGMENTS, RouteLeg, build_arc, build_route};
pub use error::{GeometryError, GeometryResult};
pub use interaction::{ClickOutcome, InteractionState};
pub use marker::{MarkerTier, MarkerVisual};
pub use projection::lat_lng_to_surface;
pub use season::{Race, SEASON_2024};
