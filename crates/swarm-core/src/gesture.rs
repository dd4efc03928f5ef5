//! Hand landmarks and the per-frame gesture classifier.
//!
//! Landmarks follow the common 21-point hand layout: the wrist is point 0 and
//! each digit owns four consecutive points from its base to its tip (thumb
//! 1..=4, index 5..=8, middle 9..=12, ring 13..=16, pinky 17..=20).
//! Coordinates are normalised image space: x to the right, y down, both 0..1.

use glam::{Vec2, Vec3};

use crate::constants::{FINGER_EXTENDED_DEG, LANDMARK_COUNT};
use crate::error::{Result, SwarmError};

pub const WRIST: usize = 0;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_BASE: usize = 9;

/// The four formations a hand can select. The set is closed; classification
/// always lands on one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureMode {
    Dragon,
    Shield,
    Lotus,
    Dageng,
}

impl GestureMode {
    pub const ALL: [GestureMode; 4] = [
        GestureMode::Dragon,
        GestureMode::Shield,
        GestureMode::Lotus,
        GestureMode::Dageng,
    ];

    /// String representation for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dragon => "dragon",
            Self::Shield => "shield",
            Self::Lotus => "lotus",
            Self::Dageng => "dageng",
        }
    }

    /// Status line shown by the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dragon => "Dragon Formation",
            Self::Shield => "Shield Formation",
            Self::Lotus => "Lotus Formation",
            Self::Dageng => "Grand Geng Sword Array",
        }
    }

    /// Whether the formation samples the path history.
    pub fn uses_trail(&self) -> bool {
        matches!(self, Self::Dragon)
    }

    /// Symmetric formations track the palm centre; the others track the index tip.
    pub fn tracks_palm(&self) -> bool {
        matches!(self, Self::Shield | Self::Lotus)
    }
}

/// One of the five digits, in landmark order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Digit {
    pub const ALL: [Digit; 5] = [
        Digit::Thumb,
        Digit::Index,
        Digit::Middle,
        Digit::Ring,
        Digit::Pinky,
    ];

    /// Landmark indices of this digit from base to tip.
    pub fn chain(self) -> [usize; 4] {
        let base = self as usize * 4;
        [base + 1, base + 2, base + 3, base + 4]
    }

    /// The three landmarks whose middle angle decides extension.
    pub fn angle_joints(self) -> [usize; 3] {
        let c = self.chain();
        [c[0], c[1], c[2]]
    }
}

/// A complete set of 21 hand landmarks for one video frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks([Vec3; LANDMARK_COUNT]);

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    /// Convert a detector result, rejecting short or non-finite frames.
    pub fn from_slice(points: &[Vec3]) -> Result<Self> {
        let arr: [Vec3; LANDMARK_COUNT] =
            points.try_into().map_err(|_| SwarmError::LandmarkCount {
                expected: LANDMARK_COUNT,
                got: points.len(),
            })?;
        if let Some(index) = arr.iter().position(|p| !p.is_finite()) {
            return Err(SwarmError::NonFiniteLandmark { index });
        }
        Ok(Self(arr))
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.0[index]
    }

    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.0
    }

    /// Midpoint of the wrist and the middle-finger base, in image space.
    pub fn palm_center(&self) -> Vec2 {
        (self.0[WRIST].truncate() + self.0[MIDDLE_BASE].truncate()) * 0.5
    }

    pub fn index_tip(&self) -> Vec2 {
        self.0[INDEX_TIP].truncate()
    }

    /// Build a plausible upright hand with the given digits straight or curled.
    ///
    /// Used by the headless driver and by tests in place of a live detector.
    /// `wrist` is the wrist position in image space; the fingers point up
    /// (towards smaller y).
    pub fn synthetic(fingers: FingerState, wrist: Vec2) -> Self {
        let mut pts = [Vec3::ZERO; LANDMARK_COUNT];
        let w = wrist.extend(0.0);
        pts[WRIST] = w;

        // Thumb leans out to the side.
        let cmc = w + Vec3::new(0.05, -0.03, 0.0);
        let mcp = cmc + Vec3::new(0.04, -0.03, 0.0);
        let (ip, tip) = if fingers.thumb {
            let ip = mcp + Vec3::new(0.04, -0.03, 0.0);
            (ip, ip + Vec3::new(0.03, -0.0225, 0.0))
        } else {
            let ip = mcp + Vec3::new(-0.03, -0.01, -0.02);
            (ip, ip + Vec3::new(-0.02, 0.01, 0.0))
        };
        pts[1..=4].copy_from_slice(&[cmc, mcp, ip, tip]);

        let straight = [
            fingers.index,
            fingers.middle,
            fingers.ring,
            fingers.pinky,
        ];
        for (k, digit) in Digit::ALL[1..].iter().enumerate() {
            let base = w + Vec3::new(-0.03 + 0.02 * k as f32, -0.10, 0.0);
            let pip = base + Vec3::new(0.0, -0.04, 0.0);
            let (dip, tip) = if straight[k] {
                let dip = pip + Vec3::new(0.0, -0.03, 0.0);
                (dip, dip + Vec3::new(0.0, -0.02, 0.0))
            } else {
                let dip = pip + Vec3::new(0.0, 0.02, -0.03);
                (dip, dip + Vec3::new(0.0, 0.02, 0.0))
            };
            let c = digit.chain();
            pts[c[0]] = base;
            pts[c[1]] = pip;
            pts[c[2]] = dip;
            pts[c[3]] = tip;
        }
        Self(pts)
    }
}

/// Angle in degrees at `b` between the segments towards `a` and `c`.
///
/// Zero-length segments read as a fully curled joint (0°).
pub fn joint_angle_deg(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let v1 = a - b;
    let v2 = c - b;
    let denom = (v1.length_squared() * v2.length_squared()).sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (v1.dot(v2) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Which digits are extended in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Shorthand in landmark order: thumb, index, middle, ring, pinky.
    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    pub fn from_landmarks(hand: &HandLandmarks, threshold_deg: f32) -> Self {
        let ext = |d: Digit| {
            let [a, b, c] = d.angle_joints();
            joint_angle_deg(hand.point(a), hand.point(b), hand.point(c)) > threshold_deg
        };
        Self {
            thumb: ext(Digit::Thumb),
            index: ext(Digit::Index),
            middle: ext(Digit::Middle),
            ring: ext(Digit::Ring),
            pinky: ext(Digit::Pinky),
        }
    }

    pub fn extended_count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|x| **x)
            .count()
    }

    /// Map the finger pattern to a formation. Earlier patterns win.
    pub fn gesture(&self) -> GestureMode {
        let fist = self.extended_count() <= 1;
        let rock = self.index && self.pinky && !self.middle && !self.ring;
        let gun = self.thumb && self.index && !self.middle && !self.ring && !self.pinky;
        let sword = self.index && self.middle && !self.pinky;

        if fist {
            GestureMode::Shield
        } else if rock {
            GestureMode::Dageng
        } else if gun || sword {
            GestureMode::Dragon
        } else {
            // open palm and everything unrecognised
            GestureMode::Lotus
        }
    }
}

/// Classify one frame with the default extension threshold.
pub fn classify(hand: &HandLandmarks) -> GestureMode {
    classify_with(hand, FINGER_EXTENDED_DEG)
}

pub fn classify_with(hand: &HandLandmarks, threshold_deg: f32) -> GestureMode {
    FingerState::from_landmarks(hand, threshold_deg).gesture()
}
