//! CC Rider engine
//!
//! Stateful riders that map one normalized controller input (`[0,1]`) to an
//! output shaped by a user-editable curve.
//!
//! # Overview
//!
//! - **Rider**: holds the control points, the cached curve and the current
//!   input; reacts to point edits, point count changes and new input
//! - **Bank**: several riders driven by one input and one point count
//! - **Shared**: a mutex-guarded rider for multi-threaded hosts
//! - **Sink**: where emitted values and display refresh requests go
//! - **Config**: serde settings with JSON and YAML loaders
//!
//! Curve maths lives in [`ccrider_curves`].
//!
//! # Example
//!
//! ```
//! use ccrider_engine::{RecordingSink, Rider, RiderConfig};
//!
//! let config = RiderConfig::new("expression").with_points(vec![0.0, 20.0, 100.0]);
//! let mut rider = Rider::new(&config, RecordingSink::new())?;
//!
//! rider.set_input(0.5);
//! assert!(rider.sink().last().is_some_and(|v| (v - 0.2).abs() < 0.01));
//! # Ok::<(), ccrider_engine::EngineError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bank;
pub mod config;
pub mod display;
pub mod error;
pub mod points;
pub mod prelude;
pub mod rider;
pub mod shared;
pub mod sink;

pub use bank::RiderBank;
pub use config::{
    DEFAULT_ACTIVE_COUNT, DEFAULT_EPSILON, EngineConfig, MAX_CONTROL_POINTS, POINT_CAPACITY_LIMIT,
    RiderConfig,
};
pub use display::DisplayRange;
pub use error::EngineError;
pub use points::ControlPointSet;
pub use rider::{Rider, RiderState};
pub use shared::SharedRider;
pub use sink::{FnSink, NullSink, OutputSink, RecordingSink};
