//! Command implementations for the ccrider CLI

pub mod config;
pub mod eval;
pub mod resample;
pub mod segments;
pub mod simulate;
pub mod table;

use std::path::PathBuf;

use ccrider_curves::LookupTable;
use ccrider_engine::DisplayRange;
use clap::Args;

use crate::error::CliError;

/// Control points given on the command line, in percent.
#[derive(Args, Debug, Clone)]
pub struct PointsArg {
    /// Comma-separated control point values in percent (0-100)
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub points: Vec<f32>,
}

impl PointsArg {
    /// Points normalized to `[0,1]`.
    ///
    /// Out-of-range values are clamped; NaN passes through so that curve
    /// construction can report it with its index.
    pub fn normalized(&self) -> Result<Vec<f32>, CliError> {
        if self.points.len() < 2 {
            return Err(CliError::InvalidInput(format!(
                "at least 2 points are required, got {}",
                self.points.len()
            )));
        }

        let range = DisplayRange::PERCENT;
        Ok(self
            .points
            .iter()
            .map(|value| range.to_normalized(*value))
            .collect())
    }
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub points: PointsArg,

    /// Number of active points (defaults to all given points)
    #[arg(short, long)]
    pub active: Option<usize>,

    /// Input values in [0,1]
    #[arg(required = true, allow_negative_numbers = true)]
    pub inputs: Vec<f32>,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub points: PointsArg,

    /// Number of table entries
    #[arg(short, long, default_value_t = LookupTable::DEFAULT_RESOLUTION)]
    pub resolution: usize,
}

#[derive(Args, Debug)]
pub struct SegmentsArgs {
    #[command(flatten)]
    pub points: PointsArg,
}

#[derive(Args, Debug)]
pub struct ResampleArgs {
    #[command(flatten)]
    pub points: PointsArg,

    /// New number of points
    #[arg(short, long)]
    pub to: usize,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Change the bank's curve resolution before feeding input
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Input values in [0,1], fed in order
    #[arg(required = true, allow_negative_numbers = true)]
    pub inputs: Vec<f32>,
}

/// Reject NaN and infinite inputs up front.
pub fn check_inputs(inputs: &[f32]) -> Result<(), CliError> {
    match inputs.iter().find(|value| !value.is_finite()) {
        Some(value) => Err(CliError::InvalidInput(format!(
            "input values must be finite, got {value}"
        ))),
        None => Ok(()),
    }
}

/// Load the engine configuration from `path`, or the built-in default.
pub fn load_config(path: Option<&PathBuf>) -> Result<ccrider_engine::EngineConfig, CliError> {
    match path {
        Some(path) => Ok(ccrider_engine::EngineConfig::load(path)?),
        None => Ok(ccrider_engine::EngineConfig::default()),
    }
}
