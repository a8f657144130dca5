//! Print a curve's lookup table

use anyhow::Result;
use ccrider_curves::CurveEvaluator;
use serde::Serialize;

use crate::commands::TableArgs;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct TableReport {
    pub resolution: usize,
    pub monotonic: bool,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub entries: Vec<TableEntry>,
}

#[derive(Debug, Serialize)]
pub struct TableEntry {
    pub index: usize,
    pub input: f32,
    pub output: f32,
}

/// Execute the table command
pub fn execute(args: &TableArgs, json: bool) -> Result<()> {
    let report = build(args)?;
    output::print_table_report(&report, json);
    Ok(())
}

pub fn build(args: &TableArgs) -> Result<TableReport, CliError> {
    let mut evaluator = CurveEvaluator::from_points(&args.points.normalized()?, args.resolution)?;
    evaluator.warm();

    let table = evaluator.table();
    let entries = table
        .samples()
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            sample.map(|output| TableEntry {
                index,
                input: table.input_at(index),
                output,
            })
        })
        .collect();

    Ok(TableReport {
        resolution: table.resolution(),
        monotonic: table.is_monotonic(),
        min: table.min_value(),
        max: table.max_value(),
        entries,
    })
}
