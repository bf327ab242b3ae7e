//! Profile command implementation.
//!
//! The profile command:
//! 1. Flattens the zone profiler dump
//! 2. Renders and pretty-prints the HTML report
//! 3. Writes output files
//!
//! Nothing is written unless the first two steps succeed.

use super::models::ProfileArgs;
use crate::output::{write_html, write_model};
use crate::parser::{flatten_profile, FlattenConfig};
use crate::report::generate_report;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the profile command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or malformed profile dump
/// * Template rendering errors
/// * File write errors
pub fn execute_profile(args: ProfileArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Exporting zone profile: {}", args.input.display());

    // Step 1: Flatten the dump
    info!("Step 1/3: Flattening profile dump...");
    let model = flatten_profile(&args.input, &FlattenConfig::default())
        .context("Failed to read profile dump")?;

    for (thread_id, thread) in &model.threads {
        debug!(
            "Thread {} ({}): {} frames",
            thread_id,
            thread.name,
            thread.frames.len()
        );
    }

    // Step 2: Render the report
    info!("Step 2/3: Rendering report...");
    let html = generate_report(&model, Some(&args.report_config))
        .context("Failed to render profile report")?;

    // Step 3: Write outputs
    info!("Step 3/3: Writing output files...");
    write_html(&html, &args.output_html).context("Failed to write profile report")?;
    info!("✓ Report written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        write_model(&model, json_path).context("Failed to write render model JSON")?;
        info!("✓ Render model written to: {}", json_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Profile export completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate profile arguments
///
/// **Public** - can be called before execute_profile for early validation
pub fn validate_args(args: &ProfileArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Profile dump path cannot be empty");
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Report output path cannot be empty");
    }

    if args.output_json.as_deref() == Some(args.output_html.as_path()) {
        anyhow::bail!("JSON and HTML outputs must be different files");
    }

    let scale = args.report_config.render_scale;
    if !scale.is_finite() || scale <= 0.0 {
        anyhow::bail!("render scale must be a positive number");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&ProfileArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ProfileArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_outputs() {
        let args = ProfileArgs {
            output_json: Some(PathBuf::from("output.html")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_scale() {
        for scale in [0.0, -0.1, f64::NAN] {
            let args = ProfileArgs {
                report_config: ReportConfig::new().with_render_scale(scale),
                ..Default::default()
            };

            assert!(validate_args(&args).is_err(), "scale {} accepted", scale);
        }
    }
}
