//! Drive a rider bank with a sequence of inputs

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use ccrider_engine::{NullSink, RiderBank};
use serde::Serialize;
use tracing::info;

use crate::commands::{SimulateArgs, check_inputs, load_config};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub riders: Vec<String>,
    pub curve_resolution: usize,
    pub steps: Vec<SimulationStep>,
}

#[derive(Debug, Serialize)]
pub struct SimulationStep {
    pub input: f32,
    /// Values emitted at this step, by rider key. Riders that did not emit
    /// are absent.
    pub outputs: BTreeMap<String, f32>,
}

/// Execute the simulate command
pub fn execute(args: &SimulateArgs, config_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let report = simulate(args, config_path)?;
    output::print_simulation(&report, json);
    Ok(())
}

pub fn simulate(
    args: &SimulateArgs,
    config_path: Option<&PathBuf>,
) -> Result<SimulationReport, CliError> {
    check_inputs(&args.inputs)?;

    let config = load_config(config_path)?;
    let mut bank = RiderBank::new(&config, |_| NullSink)?;

    if let Some(resolution) = args.resolution {
        let limit = config
            .riders
            .iter()
            .map(|rider| rider.max_points)
            .min()
            .unwrap_or(0);
        if !(2..=limit).contains(&resolution) {
            return Err(CliError::InvalidInput(format!(
                "--resolution must be in 2..={limit}, got {resolution}"
            )));
        }
        bank.set_curve_resolution(resolution);
    }

    info!(riders = bank.len(), inputs = args.inputs.len(), "simulating");

    let steps = args
        .inputs
        .iter()
        .map(|&input| SimulationStep {
            input,
            outputs: bank
                .set_input(input)
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        })
        .collect();

    Ok(SimulationReport {
        riders: bank.riders().iter().map(|r| r.key().to_string()).collect(),
        curve_resolution: bank.curve_resolution(),
        steps,
    })
}
