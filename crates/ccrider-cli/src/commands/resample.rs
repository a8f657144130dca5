//! Resample a point set to a new count, keeping the curve's shape

use anyhow::Result;
use ccrider_curves::Curve;
use ccrider_engine::{MAX_CONTROL_POINTS, NullSink, Rider, RiderConfig};
use serde::Serialize;

use crate::commands::ResampleArgs;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ResampledPoint {
    pub index: usize,
    /// Slider value in percent, snapped to a notch.
    pub display: f32,
    pub normalized: f32,
}

/// Execute the resample command
pub fn execute(args: &ResampleArgs, json: bool) -> Result<()> {
    let points = resample(args)?;
    output::print_resampled(&points, json);
    Ok(())
}

pub fn resample(args: &ResampleArgs) -> Result<Vec<ResampledPoint>, CliError> {
    Curve::new(&args.points.normalized()?)?;

    let given = args.points.points.len();
    let capacity = MAX_CONTROL_POINTS.max(given);
    if !(2..=capacity).contains(&args.to) {
        return Err(CliError::InvalidInput(format!(
            "--to must be in 2..={capacity}, got {}",
            args.to
        )));
    }

    let config = RiderConfig {
        max_points: capacity,
        ..RiderConfig::new("resample")
            .with_active_count(given)
            .with_points(args.points.points.clone())
    };
    let mut rider =
        Rider::new(&config, NullSink).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    rider.on_active_count_changed(args.to);

    Ok((0..rider.active_count())
        .filter_map(|index| {
            Some(ResampledPoint {
                index,
                display: rider.display_value(index)?,
                normalized: rider.point(index)?,
            })
        })
        .collect())
}
