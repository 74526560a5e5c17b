//! Body parts of the biped: joints, legs and the speaker.
//!
//! None of these drive real hardware. Each part holds just enough state for the
//! [`Robot`](crate::Robot) to simulate walking and to observe what it did.

use crate::geometry::{Point, distance_between};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, info};

/// Position and heading of the robot on the floor plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current world-space position.
    pub position: Point,

    /// Direction of travel in radians from the +X axis. Not normalised.
    pub facing: f64,
}

/// A single rotational joint, e.g. a knee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Current angle in radians. π means the limb is straight.
    pub angle: f64,

    /// Total absolute rotation applied since construction.
    travel: f64,
}

impl Default for Joint {
    fn default() -> Self {
        // Start straight. Calibration on boot is out of scope.
        Self {
            angle: PI,
            travel: 0.0,
        }
    }
}

impl Joint {
    /// Creates a straight joint with no recorded travel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the joint to `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        self.travel += (angle - self.angle).abs();
        self.angle = angle;
    }

    /// Cumulative rotation in radians, regardless of direction.
    pub fn travel(&self) -> f64 {
        self.travel
    }
}

/// Which side of the body a leg is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Steps first in every stride pair.
    Left,
    /// Steps second in every stride pair.
    Right,
}

/// One leg of the biped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Which side of the body this leg hangs from.
    pub side: Side,
    /// Knee joint, bent only by explicit rotation.
    pub knee: Joint,
}

impl Leg {
    /// Creates a leg with a straight knee.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            knee: Joint::new(),
        }
    }

    /// Takes one step towards `destination` along `pose.facing`.
    ///
    /// The step covers `step_size`, or the remaining distance when that is shorter.
    /// Travel follows the current heading, not the bearing to `destination`, so the
    /// caller must [`turn`](crate::Robot::turn) first for the walk to converge.
    ///
    /// Returns the distance moved.
    pub fn step(&self, pose: &mut Pose, destination: Point, step_size: f64) -> f64 {
        let remaining = distance_between(pose.position, destination);
        let stride = if remaining < step_size {
            remaining
        } else {
            step_size
        };

        pose.position += Point::new(pose.facing.cos(), pose.facing.sin()) * stride;
        debug!(side = ?self.side, stride, position = ?pose.position, "step");
        stride
    }
}

/// Number of played messages a [`Speaker`] keeps by default.
pub const DEFAULT_SPEAKER_HISTORY: usize = 256;

/// Voice output. Plays messages and remembers the most recent ones in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    played: Vec<String>,
    history_limit: usize,
}

impl Default for Speaker {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_SPEAKER_HISTORY)
    }
}

impl Speaker {
    /// Creates a speaker remembering [`DEFAULT_SPEAKER_HISTORY`] messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a speaker remembering at most `limit` messages.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            played: Vec::with_capacity(limit.min(DEFAULT_SPEAKER_HISTORY)),
            history_limit: limit,
        }
    }

    /// Plays `message` and records it, dropping the oldest record when full.
    pub fn speak(&mut self, message: &str) {
        info!("Message played over the speaker: {message}");
        if self.history_limit == 0 {
            return;
        }
        if self.played.len() == self.history_limit {
            self.played.remove(0);
        }
        self.played.push(message.to_owned());
    }

    /// The most recently played messages, oldest first.
    pub fn played(&self) -> &[String] {
        &self.played
    }
}
