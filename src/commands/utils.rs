//! Helpers shared by commands.

use crate::utils::config::PROMPT_RETRIES_BEFORE_HINT;
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Ask a single-character question until a valid choice is given
///
/// Choices are single characters, shown with the default in upper case
/// (`[Y/n]`). An empty answer picks the default; end of input cancels and
/// returns `None`.
///
/// # Errors
/// Invalid `choices`/`default` combinations, or I/O failures on the streams
pub fn prompt_choice<R: BufRead, W: Write>(
    question: &str,
    choices: &str,
    default: Option<char>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<char>> {
    let valid: Vec<char> = choices.chars().map(|c| c.to_ascii_lowercase()).collect();

    if valid.len() < 2 {
        bail!("'choices' should have 2 characters or more (1 character per choice)");
    }
    if (1..valid.len()).any(|i| valid[..i].contains(&valid[i])) {
        bail!("'choices' has duplicate choices");
    }
    let default = default.map(|d| d.to_ascii_lowercase());
    if let Some(d) = default {
        if !valid.contains(&d) {
            bail!("'default' is not in list of choices");
        }
    }

    let labels: Vec<String> = valid
        .iter()
        .map(|c| {
            if Some(*c) == default {
                c.to_ascii_uppercase().to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    write!(output, "{} [{}]  ", question, labels.join("/"))?;
    output.flush()?;

    let mut retries = 0;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "Cancelled")?;
            return Ok(None);
        }

        let answer = line.trim().to_lowercase();
        let mut chars = answer.chars();
        match (chars.next(), chars.next()) {
            (None, _) if default.is_some() => return Ok(default),
            (Some(c), None) if valid.contains(&c) => return Ok(Some(c)),
            _ => {}
        }

        retries += 1;
        if retries == PROMPT_RETRIES_BEFORE_HINT {
            write!(output, "Press Ctrl-D to cancel choice. ")?;
        }
        write!(output, "[{}]  ", labels.join("/"))?;
        output.flush()?;
    }
}

/// Version banner printed by the `version` command
pub fn version_text() -> String {
    format!(
        "Ivie tools v{}\n\n{}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    )
}

/// Display version information
pub fn display_version() {
    println!("{}", version_text());
}
