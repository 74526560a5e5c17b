//! The biped itself: locomotion, actions and the command containers.
//!
//! The entry point is [`Robot`]. Build one with a [`MotionConfig`], feed it commands
//! through [`Robot::push_command`] (stack) or [`Robot::enqueue_command`] (queue), then
//! call [`Robot::drain`] to run them.
//!
//! # Drain order
//!
//! Every drain empties the stack first, most recently pushed command first, and only
//! then empties the queue in insertion order. Pushing `A, B, C` and enqueueing `X, Y`
//! therefore executes `C, B, A, X, Y`.

use crate::body::{Leg, Pose, Side, Speaker};
use crate::command::Command;
use crate::config::MotionConfig;
use crate::error::ConfigError;
use crate::geometry::{Point, bearing, distance_between};
use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, info};

/// A simulated two-legged robot.
#[derive(Clone, Debug)]
pub struct Robot {
    pose: Pose,
    left_leg: Leg,
    right_leg: Leg,
    speaker: Speaker,
    config: MotionConfig,
    command_stack: Vec<Command>,
    command_queue: VecDeque<Command>,
}

impl Default for Robot {
    fn default() -> Self {
        Self::with_valid_config(MotionConfig::default())
    }
}

impl Robot {
    /// Creates a robot at the origin facing +X.
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: MotionConfig) -> Self {
        Self {
            pose: Pose::default(),
            left_leg: Leg::new(Side::Left),
            right_leg: Leg::new(Side::Right),
            speaker: Speaker::new(),
            config,
            command_stack: Vec::new(),
            command_queue: VecDeque::new(),
        }
    }

    /// Places the robot at `position` facing `facing` radians.
    pub fn with_pose(mut self, position: Point, facing: f64) -> Self {
        self.pose = Pose { position, facing };
        self
    }

    /// Current position and heading.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current world-space position.
    pub fn position(&self) -> Point {
        self.pose.position
    }

    /// Current heading in radians.
    pub fn facing(&self) -> f64 {
        self.pose.facing
    }

    /// Motion parameters this robot walks with.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The leg that takes the first step of every stride pair.
    pub fn left_leg(&self) -> &Leg {
        &self.left_leg
    }

    /// The leg that takes the second step of every stride pair.
    pub fn right_leg(&self) -> &Leg {
        &self.right_leg
    }

    /// Voice output, including the record of played messages.
    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    /// True when the robot is within `epsilon_distance` of `location`.
    pub fn is_at(&self, location: Point) -> bool {
        distance_between(self.pose.position, location) < self.config.epsilon_distance
    }

    /// Faces the robot towards `destination`.
    pub fn turn(&mut self, destination: Point) {
        info!("Turning towards ({}, {})", destination.x, destination.y);
        self.pose.facing = bearing(self.pose.position, destination);
        info!("Now facing {}", self.pose.facing);
    }

    /// Walks to `destination`, alternating left and right steps.
    ///
    /// The heading is fixed by a single [`turn`](Self::turn) before the first step,
    /// unless [`MotionConfig::reorient_each_step`] is set. Arrival is checked after
    /// every individual step.
    ///
    /// Returns the number of steps taken.
    pub fn move_to(&mut self, destination: Point) -> usize {
        info!("Moving to ({}, {})", destination.x, destination.y);
        self.turn(destination);

        let mut steps = 0;
        while !self.is_at(destination) {
            self.step_with(Side::Left, destination);
            steps += 1;
            if self.is_at(destination) {
                break;
            }
            self.step_with(Side::Right, destination);
            steps += 1;
        }

        info!("Arrived at ({}, {})", destination.x, destination.y);
        debug!(steps, "walk finished");
        steps
    }

    fn step_with(&mut self, side: Side, destination: Point) {
        if self.config.reorient_each_step {
            self.pose.facing = bearing(self.pose.position, destination);
        }
        let leg = match side {
            Side::Left => &self.left_leg,
            Side::Right => &self.right_leg,
        };
        leg.step(&mut self.pose, destination, self.config.step_size);
    }

    fn bend_knees(&mut self, angle: f64) {
        // TODO: bend both knees in one coordinated motion to keep balance.
        self.left_leg.knee.rotate(angle);
        self.right_leg.knee.rotate(angle);
    }

    // Arms and hands carry no state in this model.
    fn extend_arms(&mut self) {}

    fn position_hands_for_grasp(&mut self) {}

    fn grasp(&mut self) {}

    /// Walks to `object_location`, crouches, grasps and stands back up.
    pub fn lift(&mut self, object_location: Point) {
        self.move_to(object_location);
        self.bend_knees(FRAC_PI_2);
        self.extend_arms();
        self.position_hands_for_grasp();
        self.grasp();
        self.bend_knees(PI);
        info!(
            "Object at ({}, {}) has been lifted",
            object_location.x, object_location.y
        );
    }

    /// Plays `message` over the speaker. Pose is untouched.
    pub fn speak(&mut self, message: &str) {
        self.speaker.speak(message);
    }

    /// Runs a single command immediately, bypassing both containers.
    pub fn execute(&mut self, command: &Command) {
        debug!(%command, "executing");
        match command {
            Command::Move(destination) => {
                self.move_to(*destination);
            }
            Command::Lift(object_location) => self.lift(*object_location),
            Command::Speak(message) => self.speak(message),
        }
    }

    /// Adds a command to the LIFO stack.
    pub fn push_command(&mut self, command: Command) {
        self.command_stack.push(command);
    }

    /// Adds a command to the FIFO queue.
    pub fn enqueue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Number of commands waiting in the stack and the queue.
    pub fn pending(&self) -> (usize, usize) {
        (self.command_stack.len(), self.command_queue.len())
    }

    /// Executes everything in the stack, then everything in the queue.
    ///
    /// Returns the executed commands in the order they ran.
    pub fn drain(&mut self) -> Vec<Command> {
        let mut executed = Vec::with_capacity(self.command_stack.len() + self.command_queue.len());

        while let Some(command) = self.command_stack.pop() {
            self.execute(&command);
            executed.push(command);
        }
        while let Some(command) = self.command_queue.pop_front() {
            self.execute(&command);
            executed.push(command);
        }

        info!("All commands executed");
        executed
    }
}
