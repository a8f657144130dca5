//! Prelude for the engine crate.
//!
//! ```
//! use ccrider_engine::prelude::*;
//!
//! let mut bank = RiderBank::new(&EngineConfig::default(), |_| NullSink)?;
//! assert_eq!(bank.set_input(1.0).len(), 2);
//! # Ok::<(), EngineError>(())
//! ```

pub use crate::bank::RiderBank;
pub use crate::config::{EngineConfig, RiderConfig};
pub use crate::display::DisplayRange;
pub use crate::error::EngineError;
pub use crate::points::ControlPointSet;
pub use crate::rider::{Rider, RiderState};
pub use crate::shared::SharedRider;
pub use crate::sink::{FnSink, NullSink, OutputSink, RecordingSink};
