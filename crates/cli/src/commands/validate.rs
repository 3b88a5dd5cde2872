//! Validate command: run a single validator against a literal value.

use anyhow::Result;
use clap::ValueEnum;
use kesl_config::Rule;
use std::fmt::Display;
use std::str::FromStr;

use crate::args::RuleKind;
use crate::error::CliError;
use crate::formatters::{OutputFormat, Verdict, get_formatter};

fn parse_bound<T>(value: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| CliError::InvalidBound {
        value: value.to_string(),
        message: e.to_string(),
    })
}

fn bounds<T>(rule: RuleKind, min: Option<&str>, max: Option<&str>) -> Result<(T, T), CliError>
where
    T: FromStr,
    T::Err: Display,
{
    match (min, max) {
        (Some(min), Some(max)) => Ok((parse_bound(min)?, parse_bound(max)?)),
        _ => Err(CliError::MissingBounds { rule: rule_name(rule) }),
    }
}

/// The command-line spelling of `rule`, as clap derives it.
fn rule_name(rule: RuleKind) -> String {
    rule.to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_default()
}

/// Translate the command-line rule and bounds into a schema rule.
pub fn build_rule(rule: RuleKind, min: Option<&str>, max: Option<&str>) -> Result<Rule, CliError> {
    Ok(match rule {
        RuleKind::Int => {
            let (min, max) = bounds(rule, min, max)?;
            Rule::IntRange { min, max }
        }
        RuleKind::Float => {
            let (min, max) = bounds(rule, min, max)?;
            Rule::FloatRange { min, max }
        }
        RuleKind::Minutes => {
            let (min, max) = bounds(rule, min, max)?;
            Rule::Minutes { min, max }
        }
        RuleKind::Bool => Rule::Boolean,
        RuleKind::PackageType => Rule::PackageType,
        RuleKind::Dir => Rule::ExistingDirectory,
        RuleKind::Uuid => Rule::Uuid,
        RuleKind::Locale => Rule::Locale,
        RuleKind::Memory => Rule::Memory,
    })
}

/// Run the validate command.
pub fn run(
    rule: RuleKind,
    value: &str,
    min: Option<&str>,
    max: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    if !rule.needs_bounds() && (min.is_some() || max.is_some()) {
        tracing::warn!(rule = %rule_name(rule), "--min/--max ignored for this rule");
    }
    let check = build_rule(rule, min, max)?;
    let verdict = Verdict {
        rule: rule_name(rule),
        value: value.to_string(),
        expected: check.to_string(),
        valid: check.check(value),
    };

    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_verdict(&verdict)?);

    if verdict.valid {
        Ok(())
    } else {
        Err(CliError::InvalidValue {
            value: verdict.value,
            expected: verdict.expected,
        }
        .into())
    }
}
