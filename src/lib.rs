//! # biped-commander
//!
//! A small simulation of a two-legged robot that takes discrete commands: walk to a
//! point, lift an object at a point, or speak a message.
//!
//! Commands are collected into a LIFO stack and a FIFO queue owned by the [`Robot`].
//! A drain always empties the stack before touching the queue. Walking is a sequence
//! of alternating fixed-size leg steps along a heading set once at the start, which
//! converges because the final step only covers the remaining distance.

pub mod body;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod geometry;
pub mod robot;

pub use body::*;
pub use command::*;
pub use config::*;
pub use console::*;
pub use error::*;
pub use geometry::*;
pub use robot::*;
