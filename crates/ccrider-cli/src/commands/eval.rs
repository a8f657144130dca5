//! Evaluate a curve at given inputs

use anyhow::Result;
use ccrider_engine::{MAX_CONTROL_POINTS, NullSink, Rider, RiderConfig};
use serde::Serialize;
use tracing::debug;

use crate::commands::{EvalArgs, check_inputs};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub input: f32,
    pub output: f32,
}

/// Execute the eval command
pub fn execute(args: &EvalArgs, json: bool) -> Result<()> {
    let evaluations = evaluate(args)?;
    output::print_evaluations(&evaluations, json);
    Ok(())
}

pub fn evaluate(args: &EvalArgs) -> Result<Vec<Evaluation>, CliError> {
    check_inputs(&args.inputs)?;
    // reports a bad point with its index
    ccrider_curves::Curve::new(&args.points.normalized()?)?;

    let given = args.points.points.len();
    let active = args.active.unwrap_or(given);
    let config = RiderConfig {
        max_points: MAX_CONTROL_POINTS.max(given),
        ..RiderConfig::new("eval")
            .with_active_count(active)
            .with_points(args.points.points.clone())
    };

    let mut rider =
        Rider::new(&config, NullSink).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    debug!(active = rider.active_count(), "evaluating curve");

    let mut evaluations = Vec::with_capacity(args.inputs.len());
    for &input in &args.inputs {
        let output = rider.evaluate(input).ok_or_else(|| {
            CliError::InvalidInput(format!("no curve through {active} active points"))
        })?;
        evaluations.push(Evaluation { input, output });
    }
    Ok(evaluations)
}
