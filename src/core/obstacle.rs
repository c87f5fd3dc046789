use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Index of an obstacle inside the world's [`ObstacleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub(crate) usize);

impl ObstacleId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Which endpoint of a segment a picking query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentEnd {
    Start,
    End,
}

/// Immovable line collider with finite thickness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
}

impl ObstacleSegment {
    pub fn new(start: Vec2, end: Vec2, thickness: f32) -> Self {
        Self {
            start,
            end,
            thickness,
        }
    }

    pub fn endpoint(&self, end: SegmentEnd) -> Vec2 {
        match end {
            SegmentEnd::Start => self.start,
            SegmentEnd::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, end: SegmentEnd, position: Vec2) {
        match end {
            SegmentEnd::Start => self.start = position,
            SegmentEnd::End => self.end = position,
        }
    }
}

/// Append-only collection of obstacles for the session.
///
/// Obstacles accumulate by explicit host action and are never removed by the
/// simulation; during a step the set is read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    segments: Vec<ObstacleSegment>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, start: Vec2, end: Vec2, thickness: f32) -> Result<ObstacleId> {
        if !(thickness > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "obstacle thickness must be positive, got {thickness}"
            )));
        }

        let id = ObstacleId(self.segments.len());
        self.segments.push(ObstacleSegment::new(start, end, thickness));
        debug!(
            "added obstacle {}: ({}, {}) -> ({}, {})",
            id.index(),
            start.x,
            start.y,
            end.x,
            end.y
        );
        Ok(id)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&ObstacleSegment> {
        self.segments.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut ObstacleSegment> {
        self.segments.get_mut(id.index())
    }

    pub fn segments(&self) -> &[ObstacleSegment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstacleSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
