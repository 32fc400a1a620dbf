use crate::{
    cli::{
        context::ShellContext,
        errors::CommandError,
        output::Formatter,
        table::{Table, TableColumn},
    },
    core::{list_tracked_categories, series_for, summarize, ChartSummary},
    domain::{CardHeader, CategoryBarProps, ColorTag, ProgressCardProps, ValueKind},
    format::{format_change, format_percentage, format_usage, format_value},
    workspace::{workspace_details, BillingCycle, Card, OverviewPage},
};

use super::{CommandDefinition, CommandResult};

const PROGRESS_WIDTH: usize = 20;
const COST_BAR_WIDTH: usize = 40;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("show", "Render the full overview", "show", cmd_show),
        CommandDefinition::new(
            "cards",
            "Render the current billing cycle cards",
            "cards",
            cmd_cards,
        ),
        CommandDefinition::new(
            "charts",
            "Summarize every tracked metric for the selected range",
            "charts",
            cmd_charts,
        ),
        CommandDefinition::new(
            "chart",
            "List the daily values of one metric in the selected range",
            "chart <metric title>",
            cmd_chart,
        ),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let range = context.require_range()?;
    let page = OverviewPage::assemble(range, context.period);
    let details = workspace_details();
    context.out.print_header("Workspace Details");
    context.out.print_info(format!("Workspace Name: {}", details.name));
    context.out.print_info(format!("Workspace ID: {}", details.id));
    context.out.print_info(format!("Workspace Key: {}", details.key));
    context.out.print_info(format!("Data: {}", context.source));
    print_billing_cycle(&context.out, &page.billing);
    print_chart_summaries(context, &page)
}

fn cmd_cards(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_billing_cycle(&context.out, &BillingCycle::assemble());
    Ok(())
}

fn cmd_charts(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let range = context.require_range()?;
    let page = OverviewPage::assemble(range, context.period);
    print_chart_summaries(context, &page)
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: chart <metric title>".into(),
        ));
    }
    let title = args.join(" ");
    let range = context.require_range()?;
    let points = series_for(&context.series, &title, range)?;
    let kind = list_tracked_categories()
        .iter()
        .find(|spec| spec.title == title)
        .map(|spec| spec.kind)
        .unwrap_or(ValueKind::Unit);
    let locale = context.config.locale_config();

    let mut table = Table::new(vec![TableColumn::left("Date"), TableColumn::right("Value")]);
    for point in &points {
        table.push_row(vec![
            point.date.to_string(),
            format_value(kind, point.value, &context.config.currency, &locale),
        ]);
    }
    let total: f64 = points.iter().map(|point| point.value).sum();

    context.out.print_header(format!("{title} ({range})"));
    context.out.print_info(table.render());
    context.out.print_info(format!(
        "Total: {} over {} days",
        format_value(kind, total, &context.config.currency, &locale),
        points.len()
    ));
    Ok(())
}

pub(crate) fn print_billing_cycle(out: &Formatter, billing: &BillingCycle) {
    out.print_header("Current billing cycle");
    print_progress_card(out, &billing.usage);
    print_progress_card(out, &billing.members);
    print_cost_card(out, &billing.costs);
}

fn print_card_header(out: &Formatter, header: &CardHeader) {
    out.print_header(&header.title);
    let positive = !header.change.trim_start().starts_with('-');
    out.print_info(format!(
        "{} {} {}",
        header.value,
        header.value_description,
        out.change_text(&header.change, positive)
    ));
    if let Some(subtitle) = &header.subtitle {
        out.print_info(subtitle);
    }
}

fn print_card_footer(out: &Formatter, header: &CardHeader) {
    out.print_info(format!(
        "{} {} ({})",
        header.cta.description, header.cta.text, header.cta.link
    ));
}

fn print_progress_card(out: &Formatter, card: &Card<ProgressCardProps>) {
    print_card_header(out, &card.header);
    let mut table = Table::new(vec![
        TableColumn::left("Metric"),
        TableColumn::right("Usage"),
        TableColumn::left("Progress"),
        TableColumn::right("Share"),
    ]);
    for record in &card.props.data {
        table.push_row(vec![
            record.title.clone(),
            format_usage(record),
            progress_bar(record.percentage),
            format_percentage(record.percentage),
        ]);
    }
    out.print_info(table.render());
    print_card_footer(out, &card.header);
}

fn print_cost_card(out: &Formatter, card: &Card<CategoryBarProps>) {
    print_card_header(out, &card.header);
    out.print_info(category_bar(&card.props));
    let mut table = Table::new(vec![
        TableColumn::left("Item"),
        TableColumn::right("Share"),
        TableColumn::right("Cost"),
        TableColumn::left("Tag"),
    ]);
    for record in &card.props.data {
        table.push_row(vec![
            record.title.clone(),
            format_percentage(record.percentage),
            record.value.clone(),
            record.color_tag.to_string(),
        ]);
    }
    out.print_info(table.render());
    print_card_footer(out, &card.header);
}

fn print_chart_summaries(context: &ShellContext, page: &OverviewPage) -> CommandResult {
    let summaries = page
        .charts
        .iter()
        .map(|card| summarize(&context.series, card))
        .collect::<Result<Vec<_>, _>>()?;

    let range = context.require_range()?;
    context.out.print_header(format!(
        "Overview {} ({})",
        range,
        context.period.label()
    ));
    context.out.print_info(render_summaries(context, &summaries));
    Ok(())
}

fn render_summaries(context: &ShellContext, summaries: &[ChartSummary]) -> String {
    let locale = context.config.locale_config();
    let currency = &context.config.currency;
    let mut table = Table::new(vec![
        TableColumn::left("Metric"),
        TableColumn::right("Value"),
        TableColumn::right("Previous"),
        TableColumn::right("Change"),
        TableColumn::right("Days"),
    ]);
    for summary in summaries {
        let previous = summary
            .previous_value
            .map(|value| format_value(summary.kind, value, currency, &locale))
            .unwrap_or_else(|| "-".into());
        let change = summary
            .evolution
            .map(|ratio| context.out.change_text(&format_change(ratio), ratio >= 0.0))
            .unwrap_or_else(|| "-".into());
        table.push_row(vec![
            summary.title.clone(),
            format_value(summary.kind, summary.value, currency, &locale),
            previous,
            change,
            summary.points.to_string(),
        ]);
    }
    table.render()
}

/// `[#########-----------]` for 45%. Out-of-range percentages are clamped.
fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

/// Stacked bar: `#` for primary segments, `=` for secondary ones.
fn category_bar(props: &CategoryBarProps) -> String {
    let mut bar = String::with_capacity(COST_BAR_WIDTH + 2);
    bar.push('[');
    let mut used = 0;
    for record in &props.data {
        let width = ((record.percentage.max(0.0) / 100.0) * COST_BAR_WIDTH as f64).round() as usize;
        let width = width.min(COST_BAR_WIDTH - used);
        let glyph = match record.color_tag {
            ColorTag::Primary => "#",
            ColorTag::Secondary => "=",
        };
        bar.push_str(&glyph.repeat(width));
        used += width;
    }
    bar.push_str(&" ".repeat(COST_BAR_WIDTH - used));
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::cost_records;

    #[test]
    fn progress_bar_clamps_and_rounds() {
        assert_eq!(progress_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(140.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(-3.0), format!("[{}]", "-".repeat(20)));
    }

    #[test]
    fn category_bar_never_overflows() {
        let props = crate::core::project_cost_breakdown(&cost_records());
        let bar = category_bar(&props);
        assert_eq!(bar.chars().count(), COST_BAR_WIDTH + 2);
        assert!(bar.contains("=="));
    }
}
