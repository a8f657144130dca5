//! Print the cubic segments built through a set of points

use anyhow::Result;
use ccrider_curves::{Curve, Segment};

use crate::commands::SegmentsArgs;
use crate::error::CliError;
use crate::output;

/// Execute the segments command
pub fn execute(args: &SegmentsArgs, json: bool) -> Result<()> {
    let segments = build(args)?;
    output::print_segments(&segments, json);
    Ok(())
}

pub fn build(args: &SegmentsArgs) -> Result<Vec<Segment>, CliError> {
    let curve = Curve::new(&args.points.normalized()?)?;
    Ok(curve.segments().to_vec())
}
