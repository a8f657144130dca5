//! Output formatting for CLI responses

use anyhow::Error;
use ccrider_curves::Segment;
use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::commands::eval::Evaluation;
use crate::commands::resample::ResampledPoint;
use crate::commands::simulate::SimulationReport;
use crate::commands::table::TableReport;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print a success envelope with `payload` under `field`.
fn print_json<T: Serialize>(field: &str, payload: &T) {
    let mut output = json!({ "success": true });
    match serde_json::to_value(payload) {
        Ok(value) => {
            if let Some(object) = output.as_object_mut() {
                object.insert(field.to_string(), value);
            }
        }
        Err(e) => {
            eprintln!("Failed to format {field} as JSON: {e}");
            return;
        }
    }
    match serde_json::to_string_pretty(&output) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {field} as JSON: {e}"),
    }
}

/// Print curve evaluations
pub fn print_evaluations(evaluations: &[Evaluation], json: bool) {
    if json {
        print_json("evaluations", &evaluations);
        return;
    }

    let rows: Vec<Vec<String>> = evaluations
        .iter()
        .map(|e| vec![format!("{:.4}", e.input), format!("{:.4}", e.output)])
        .collect();
    print_table(&["input", "output"], &rows);
}

/// Print a warmed lookup table
pub fn print_table_report(report: &TableReport, json: bool) {
    if json {
        print_json("table", report);
        return;
    }

    println!(
        "{} {} entries, {}",
        "Lookup table:".bold(),
        report.resolution,
        if report.monotonic {
            "monotonic".green()
        } else {
            "not monotonic".yellow()
        }
    );
    if let (Some(min), Some(max)) = (report.min, report.max) {
        println!("  Range: {min:.4} .. {max:.4}");
    }

    let rows: Vec<Vec<String>> = report
        .entries
        .iter()
        .map(|e| {
            vec![
                e.index.to_string(),
                format!("{:.4}", e.input),
                format!("{:.4}", e.output),
            ]
        })
        .collect();
    print_table(&["index", "input", "output"], &rows);
}

/// Print built segments
pub fn print_segments(segments: &[Segment], json: bool) {
    if json {
        print_json("segments", &segments);
        return;
    }

    println!("{} {}", "Segments:".bold(), segments.len());
    let rows: Vec<Vec<String>> = segments
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let mut row = vec![index.to_string()];
            row.extend(s.control_values().iter().map(|v| format!("{v:.4}")));
            row
        })
        .collect();
    print_table(&["#", "start", "start_handle", "end_handle", "end"], &rows);
}

/// Print resampled points
pub fn print_resampled(points: &[ResampledPoint], json: bool) {
    if json {
        print_json("points", &points);
        return;
    }

    println!("{} {}", "Resampled points:".bold(), points.len());
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.index.to_string(),
                format!("{:.2}%", p.display),
                format!("{:.4}", p.normalized),
            ]
        })
        .collect();
    print_table(&["#", "display", "normalized"], &rows);
}

/// Print a bank simulation
pub fn print_simulation(report: &SimulationReport, json: bool) {
    if json {
        print_json("simulation", report);
        return;
    }

    println!(
        "{} {} (curve resolution {})",
        "Riders:".bold(),
        report.riders.join(", ").cyan(),
        report.curve_resolution
    );
    for step in &report.steps {
        if step.outputs.is_empty() {
            println!("  {:.4}  {}", step.input, "(no output)".dimmed());
            continue;
        }
        let outputs: Vec<String> = step
            .outputs
            .iter()
            .map(|(key, value)| format!("{}={value:.4}", key.cyan()))
            .collect();
        println!("  {:.4}  {}", step.input, outputs.join(" "));
    }
}

/// Get error type name for JSON output
fn error_type_name(error: &Error) -> String {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidInput(_)) => "InvalidInput",
        Some(CliError::InvalidPoints(_)) => "InvalidPoints",
        Some(CliError::Configuration(_)) => "Configuration",
        Some(CliError::JsonError(_)) => "JsonError",
        None => "Error",
    }
    .to_string()
}

/// Print rows under bold headers, columns padded to their widest cell
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("{}", "No data".yellow());
        return;
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{:>width$}", header.bold()))
        .collect();
    println!("{}", header_line.join("  "));

    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", separator.join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        println!("{}", cells.join("  "));
    }
}
