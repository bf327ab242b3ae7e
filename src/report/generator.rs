//! HTML report generation from a flattened zone profile.
//!
//! The report is a minijinja template rendered against the `RenderModel`.
//! Two helpers are injected into the template environment so it can size
//! timeline blocks:
//! - `to_int(x)` truncates a number to an integer
//! - `max(a, b, ...)` / `max(seq)` returns the largest value

use super::pretty::prettify_html;
use crate::parser::schema::RenderModel;
use crate::utils::config::{DEFAULT_REPORT_TITLE, RENDER_SCALE};
use crate::utils::error::ReportError;
use chrono::Utc;
use log::{debug, info};
use minijinja::value::{Rest, Value, ValueKind};
use minijinja::{context, Environment, Error, ErrorKind};

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    /// Multiplier from profiler time units to pixels
    pub render_scale: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            render_scale: RENDER_SCALE,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_render_scale(mut self, render_scale: f64) -> Self {
        self.render_scale = render_scale;
        self
    }
}

/// Render and pretty-print the HTML report for a model
///
/// **Public** - main entry point for report generation
///
/// # Errors
/// * `ReportError::Template` - template failed to render
/// * `ReportError::Markup` - rendered output could not be re-parsed
pub fn generate_report(
    model: &RenderModel,
    config: Option<&ReportConfig>,
) -> Result<String, ReportError> {
    let html = render_report(model, config)?;
    let pretty = prettify_html(&html)?;

    info!("Report generated successfully ({} bytes)", pretty.len());
    Ok(pretty)
}

/// Render the report template without re-formatting the result
///
/// **Public** - useful when the raw template output is needed
pub fn render_report(
    model: &RenderModel,
    config: Option<&ReportConfig>,
) -> Result<String, ReportError> {
    let config = config.cloned().unwrap_or_default();
    info!(
        "Rendering report for {} threads, {} frames",
        model.threads.len(),
        model.frame_count()
    );

    let env = report_environment();
    // The template name selects HTML auto-escaping
    let template = env.template_from_named_str(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;
    let html = template.render(context! {
        data => model,
        title => config.title,
        render_scale => config.render_scale,
        generated_at => Utc::now().to_rfc3339(),
    })?;

    debug!("Rendered {} bytes of markup", html.len());
    Ok(html)
}

/// Template environment with the report helpers registered
///
/// **Private** - internal helper for render_report
fn report_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_function("to_int", to_int);
    env.add_function("max", max_value);
    env
}

/// Integers pass through unchanged; floats are truncated toward zero
fn to_int(value: Value) -> Result<Value, Error> {
    if value.kind() != ValueKind::Number {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("to_int() expects a number, got {}", value.kind()),
        ));
    }
    if value.is_integer() {
        return Ok(value);
    }

    let float = f64::try_from(value)?;
    Ok(Value::from(float.trunc() as i64))
}

/// Largest of the arguments, or of a single sequence argument.
/// Ties keep the first value.
fn max_value(values: Rest<Value>) -> Result<Value, Error> {
    let mut values = values.0;

    if values.len() == 1 && values[0].kind() == ValueKind::Seq {
        let seq = values.remove(0);
        values = seq.try_iter()?.collect();
    }

    values
        .into_iter()
        .reduce(|best, value| if value > best { value } else { best })
        .ok_or_else(|| Error::new(ErrorKind::InvalidOperation, "max() of an empty sequence"))
}
