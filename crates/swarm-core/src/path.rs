use std::collections::VecDeque;

use glam::Vec3;

use crate::config::TrailParams;

/// Fixed-length trail of recent target positions, most recent first.
///
/// The length never changes after construction: every insertion drops the
/// oldest point. Index 0 is the newest entry.
#[derive(Clone, Debug)]
pub struct PathHistory {
    points: VecDeque<Vec3>,
    last_direction: Vec3,
    min_step: f32,
    extend_step: f32,
    min_direction: f32,
}

impl PathHistory {
    pub fn new(params: &TrailParams) -> Self {
        let len = params.length.max(1);
        Self {
            points: std::iter::repeat(Vec3::ZERO).take(len).collect(),
            last_direction: Vec3::ZERO,
            min_step: params.min_step,
            extend_step: params.extend_step,
            min_direction: params.min_direction,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Vec3 {
        self.points.front().copied().unwrap_or(Vec3::ZERO)
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    pub fn last_direction(&self) -> Vec3 {
        self.last_direction
    }

    fn push(&mut self, p: Vec3) {
        self.points.pop_back();
        self.points.push_front(p);
    }

    /// Record a freshly tracked point. Moves shorter than the minimum step are
    /// ignored so hand jitter cannot flip the trail direction.
    ///
    /// Returns whether the point was stored.
    pub fn record_motion(&mut self, p: Vec3) -> bool {
        let diff = p - self.latest();
        let dist = diff.length();
        if dist <= self.min_step {
            return false;
        }
        self.last_direction = diff / dist;
        self.push(p);
        true
    }

    /// Continue the trail along the last direction when there is no new input.
    ///
    /// Returns whether a point was added.
    pub fn extend(&mut self) -> bool {
        if self.last_direction.length() < self.min_direction {
            return false;
        }
        let next = self.latest() + self.last_direction * self.extend_step;
        self.push(next);
        true
    }

    /// Interpolated position at a fractional index, clamped to the trail.
    pub fn sample(&self, at: f32) -> Vec3 {
        let last = self.points.len().saturating_sub(1);
        let at = at.max(0.0);
        let a = (at.floor() as usize).min(last);
        let b = (a + 1).min(last);
        let alpha = if a == last { 0.0 } else { at - a as f32 };
        match (self.points.get(a), self.points.get(b)) {
            (Some(pa), Some(pb)) => pa.lerp(*pb, alpha),
            (Some(pa), None) => *pa,
            _ => Vec3::ZERO,
        }
    }
}
