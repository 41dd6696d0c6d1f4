//! Active slice path
//!
//! The recent trail of touch points behind the player's finger. The path is
//! cleared on touch-down and grown on every move sample; touch-up leaves it
//! in place so the host can fade the rendered stroke out. Only the newest
//! twelve points are kept.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_SLICE_POINTS;

/// Bounded polyline of recent touch points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlicePath {
    points: Vec<Vec2>,
}

impl SlicePath {
    /// Clear the path (touch-down)
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Push a touch sample, evicting the oldest point past capacity
    pub fn append(&mut self, point: Vec2) {
        self.points.push(point);
        while self.points.len() > MAX_SLICE_POINTS {
            self.points.remove(0);
        }
    }

    /// The drawable polyline, or `None` when there is nothing to stroke
    pub fn points(&self) -> Option<&[Vec2]> {
        if self.points.len() < 2 {
            None
        } else {
            Some(&self.points)
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
