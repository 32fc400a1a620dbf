use std::path::PathBuf;

use crate::{
    cli::{context::ShellContext, errors::CommandError},
    core::select_range,
    domain::{parse_date, ComparisonPeriod, DateRange},
    storage::{JsonSeriesFile, SeriesSource},
};

use super::{CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "range",
            "Show or select the date range",
            "range [<from> <to> | reset]",
            cmd_range,
        ),
        CommandDefinition::new(
            "period",
            "Show or select the comparison period",
            "period [previous-period | last-year | no-comparison]",
            cmd_period,
        ),
        CommandDefinition::new(
            "load",
            "Load an overview series from a JSON file",
            "load <path>",
            cmd_load,
        ),
    ]
}

fn cmd_range(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let range = context.require_range()?;
            context.out.print_info(format!("Selected range: {range}"));
        }
        ["reset"] => {
            let range = context.reset_range().ok_or(CommandError::NoRange)?;
            context
                .out
                .print_success(format!("Range reset to {range}"));
        }
        [from, to] => {
            let input = DateRange::new(parse_date(from)?, parse_date(to)?);
            let current = context.selected.unwrap_or(input);
            let range = select_range(current, Some(input));
            context.selected = Some(range);
            context.out.print_success(format!("Range set to {range}"));
            if range.is_inverted() {
                context
                    .out
                    .print_warning("Range starts after it ends; charts will be empty.");
            }
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: range [<from> <to> | reset]".into(),
            ))
        }
    }
    Ok(())
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => context
            .out
            .print_info(format!("Comparison period: {}", context.period)),
        [value] => {
            let period: ComparisonPeriod = value.parse()?;
            context.period = period;
            context
                .out
                .print_success(format!("Comparison period set to {period}"));
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: period [previous-period | last-year | no-comparison]".into(),
            ))
        }
    }
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(CommandError::InvalidArguments("usage: load <path>".into()));
    };
    let source = JsonSeriesFile::new(PathBuf::from(path));
    let series = source.load()?;
    let count = series.len();
    context.replace_series(series, source.describe());
    match context.selected {
        Some(range) => context
            .out
            .print_success(format!("Loaded {count} points; range {range}")),
        None => context
            .out
            .print_warning(format!("Loaded {count} points; no range available")),
    }
    Ok(())
}
