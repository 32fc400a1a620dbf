use std::path::Path;

use crate::{
    cli::{
        context::ShellContext,
        errors::CommandError,
        table::{Table, TableColumn},
    },
    config::CONFIG_KEYS,
    storage::write_json,
    utils::build_info,
    workspace::OverviewPage,
};

use super::{CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "export",
            "Write the overview props as JSON",
            "export <path>",
            cmd_export,
        ),
        CommandDefinition::new(
            "config",
            "Show or change preferences",
            "config [show | set <key> <value>]",
            cmd_config,
        ),
        CommandDefinition::new("version", "Show build information", "version", cmd_version),
        CommandDefinition::new("help", "List available commands", "help", cmd_help),
        CommandDefinition::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(CommandError::InvalidArguments("usage: export <path>".into()));
    };
    let range = context.require_range()?;
    let page = OverviewPage::assemble(range, context.period);
    write_json(&page, Path::new(path))?;
    context
        .out
        .print_success(format!("Overview exported to {path}"));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            let config = &context.config;
            let mut table = Table::new(vec![TableColumn::left("Key"), TableColumn::left("Value")]);
            table.push_row(vec!["locale".into(), config.locale.clone()]);
            table.push_row(vec!["currency".into(), config.currency.clone()]);
            table.push_row(vec!["period".into(), config.comparison_period.to_string()]);
            table.push_row(vec!["range-days".into(), config.range_days.to_string()]);
            table.push_row(vec![
                "data".into(),
                config
                    .data_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "bundled".into()),
            ]);
            table.push_row(vec![
                "color".into(),
                if config.ui_color_enabled { "on" } else { "off" }.into(),
            ]);
            context.out.print_header("Configuration");
            context.out.print_info(table.render());
            context
                .out
                .print_info(format!("Stored at {}", context.config_path().display()));
        }
        ["set", key, value] => {
            context.config.set_value(key, value)?;
            context.save_config()?;
            context.out.print_success(format!("{key} set to {value}"));
        }
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: config [show | set <key> <value>]; keys: {}",
                CONFIG_KEYS.join(", ")
            )))
        }
    }
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    context.out.print_info(meta.summary());
    context.out.print_info(format!("rustc: {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut table = Table::new(vec![
        TableColumn::left("Command"),
        TableColumn::left("Description"),
    ]);
    for definition in context.registry.iter() {
        table.push_row(vec![
            definition.usage.to_string(),
            definition.description.to_string(),
        ]);
    }
    context.out.print_header("Commands");
    context.out.print_info(table.render());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
