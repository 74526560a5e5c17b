//! Error types for command parsing, motion configuration and the console session.

use thiserror::Error;

/// Errors raised while turning console text into a [`Command`](crate::Command).
#[derive(Debug, Error)]
pub enum CommandError {
    /// Location text was not two comma-separated fields.
    #[error("malformed location '{0}': expected the format x,y")]
    MalformedPoint(String),

    /// A coordinate field was not a finite real number.
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    /// Sub-menu selector did not name a known command.
    #[error("unknown command selection '{0}'")]
    UnknownCommand(String),
}

/// Errors raised when a [`MotionConfig`](crate::MotionConfig) cannot drive the legs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Step size must be strictly positive or the robot never advances.
    #[error("step size must be positive, got {0}")]
    NonPositiveStepSize(f64),

    /// Epsilon must be strictly positive or arrival is unreachable.
    #[error("epsilon distance must be positive, got {0}")]
    NonPositiveEpsilon(f64),

    /// Epsilon is too small relative to the step size to ever be reached.
    #[error("epsilon distance {epsilon_distance} is below the resolution of step size {step_size}")]
    UnresolvableEpsilon {
        /// Requested arrival tolerance.
        epsilon_distance: f64,
        /// Configured step size.
        step_size: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending parameter.
        field: &'static str,
    },
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading the menu input or writing a prompt failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The operator entered text that does not describe a command.
    #[error(transparent)]
    Command(#[from] CommandError),
}
