//! Static records of the workspace overview and assembly of the full page
//! bundle.

use serde::Serialize;

use crate::{
    core::{chart_cards, list_tracked_categories, project_cost_breakdown, project_metric_cards},
    domain::{
        CallToAction, CardHeader, CategoryBarProps, ChartCardProps, ColorTag, ComparisonPeriod,
        CostRecord, DateRange, MetricRecord, ProgressCardProps,
    },
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkspaceDetails {
    pub name: String,
    pub id: String,
    pub key: String,
}

/// A card header plus the projected rows it displays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Card<P> {
    pub header: CardHeader,
    pub props: P,
}

/// Cards of the current billing cycle. Independent of the selected range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BillingCycle {
    pub usage: Card<ProgressCardProps>,
    pub members: Card<ProgressCardProps>,
    pub costs: Card<CategoryBarProps>,
}

impl BillingCycle {
    pub fn assemble() -> Self {
        Self {
            usage: Card {
                header: usage_header(),
                props: project_metric_cards(&usage_records()),
            },
            members: Card {
                header: members_header(),
                props: project_metric_cards(&member_records()),
            },
            costs: Card {
                header: costs_header(),
                props: project_cost_breakdown(&cost_records()),
            },
        }
    }
}

/// Every prop bundle of the overview page for one selected range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverviewPage {
    pub workspace: WorkspaceDetails,
    pub billing: BillingCycle,
    pub charts: Vec<ChartCardProps>,
}

impl OverviewPage {
    pub fn assemble(range: DateRange, period: ComparisonPeriod) -> Self {
        Self {
            workspace: workspace_details(),
            billing: BillingCycle::assemble(),
            charts: chart_cards(list_tracked_categories(), range, period),
        }
    }
}

pub fn workspace_details() -> WorkspaceDetails {
    WorkspaceDetails {
        name: "Retail Analytics".into(),
        id: "RA-12345".into(),
        key: "retail-analytics-2023".into(),
    }
}

pub fn usage_records() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Rows read", 48.1, 48.1, 100.0).with_unit("M"),
        MetricRecord::new("Rows written", 78.3, 78.3, 100.0).with_unit("M"),
        MetricRecord::new("Storage", 26.0, 5.2, 20.0).with_unit("GB"),
    ]
}

pub fn member_records() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Weekly active users", 21.7, 21.7, 100.0).with_unit("%"),
        MetricRecord::new("Total users", 70.0, 28.0, 40.0),
        MetricRecord::new("Uptime", 98.3, 98.3, 100.0).with_unit("%"),
    ]
}

pub fn cost_records() -> Vec<CostRecord> {
    vec![
        CostRecord::new("Base tier", 68.1, "$200", ColorTag::Primary),
        CostRecord::new("On-demand charges", 20.8, "$61.1", ColorTag::Primary),
        CostRecord::new("Caching", 11.1, "$31.9", ColorTag::Secondary),
    ]
}

fn header(
    title: &str,
    change: &str,
    value: &str,
    value_description: &str,
    subtitle: Option<&str>,
    cta: (&str, &str),
) -> CardHeader {
    CardHeader {
        title: title.into(),
        change: change.into(),
        value: value.into(),
        value_description: value_description.into(),
        subtitle: subtitle.map(str::to_string),
        cta: CallToAction {
            description: cta.0.into(),
            text: cta.1.into(),
            link: "#".into(),
        },
    }
}

fn usage_header() -> CardHeader {
    header(
        "Usage",
        "+0.2%",
        "68.1%",
        "of allowed capacity",
        None,
        ("Monthly usage resets in 12 days.", "Manage plan."),
    )
}

fn members_header() -> CardHeader {
    header(
        "Workspace",
        "+2.9%",
        "21.7%",
        "weekly active users",
        None,
        ("Add up to 20 members in free plan.", "Invite users."),
    )
}

fn costs_header() -> CardHeader {
    header(
        "Costs",
        "-1.4%",
        "$293.5",
        "current billing cycle",
        Some("Current costs"),
        ("Set hard caps in", "cost spend management."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn page_serializes_with_camel_case_keys() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        let page = OverviewPage::assemble(range, ComparisonPeriod::LastYear);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["workspace"]["id"], "RA-12345");
        assert_eq!(json["billing"]["costs"]["header"]["valueDescription"], "current billing cycle");
        assert_eq!(json["billing"]["costs"]["header"]["subtitle"], "Current costs");
        assert!(json["billing"]["usage"]["header"].get("subtitle").is_none());
        assert_eq!(json["charts"][3]["kind"], "currency");
        assert_eq!(json["charts"][0]["comparisonPeriod"], "last-year");
        assert_eq!(json["charts"][0]["range"]["from"], "2024-03-01");
    }
}
