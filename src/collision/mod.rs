//! Collision modules: segment projection, picking queries, and positional overlap resolution.

pub mod narrowphase;
pub mod queries;

pub use narrowphase::{resolve_obstacle_collisions, resolve_self_collisions};
pub use queries::{project_on_segment, Picking, SegmentProjection};
