mod common;

use common::date;
use overview_core::{
    core::{
        derive_default_range, list_tracked_categories, project_cost_breakdown,
        project_metric_cards, select_range,
    },
    domain::{ColorTag, CostRecord, DateRange, MetricRecord, OverviewPoint, ValueKind},
    workspace::{member_records, usage_records},
    OverviewError,
};

#[test]
fn default_range_is_trailing_thirty_days_from_max() {
    let series = vec![
        OverviewPoint::new(date(2024, 2, 10)).with_metric("Logins", 3.0),
        OverviewPoint::new(date(2024, 3, 31)).with_metric("Logins", 5.0),
        OverviewPoint::new(date(2024, 3, 15)).with_metric("Logins", 4.0),
    ];

    let range = derive_default_range(&series).expect("range");

    assert_eq!(range.to, date(2024, 3, 31));
    assert_eq!(range.from, date(2024, 3, 1));
    assert_eq!((range.to - range.from).num_days(), 30);
}

#[test]
fn default_range_crosses_year_boundaries() {
    let series = [date(2024, 1, 10)];
    let range = derive_default_range(&series).expect("range");
    assert_eq!(range.from, date(2023, 12, 11));
}

#[test]
fn default_range_of_empty_series_is_invalid_input() {
    let series: Vec<OverviewPoint> = Vec::new();
    let err = derive_default_range(&series).unwrap_err();
    assert!(matches!(err, OverviewError::InvalidInput(_)));
}

#[test]
fn select_range_is_idempotent_and_permissive() {
    let current = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
    let inverted = DateRange::new(date(2024, 3, 20), date(2024, 3, 5));

    let once = select_range(current, Some(inverted));
    let twice = select_range(once, Some(inverted));

    assert_eq!(once, inverted);
    assert_eq!(twice, once);
    assert!(once.is_inverted());
}

#[test]
fn metric_cards_preserve_order_and_length() {
    let records = usage_records();
    let props = project_metric_cards(&records);

    assert_eq!(props.len(), records.len());
    for (output, input) in props.data.iter().zip(&records) {
        assert_eq!(output.title, input.title);
    }
}

#[test]
fn metric_cards_keep_authored_percentage() {
    let records = vec![MetricRecord::new("Seats", 90.0, 1.0, 10.0)];
    let props = project_metric_cards(&records);
    assert_eq!(props.data[0].percentage, 90.0);
    assert_eq!(props.data[0].current, 1.0);
    assert_eq!(props.data[0].allowed, 10.0);

    let members = project_metric_cards(&member_records());
    let total_users = &members.data[1];
    assert_eq!(total_users.title, "Total users");
    assert_eq!(total_users.percentage, 70.0);
    assert_eq!(total_users.unit, None);
}

#[test]
fn tracked_categories_are_fixed() {
    let categories = list_tracked_categories();
    let titles: Vec<&str> = categories.iter().map(|spec| spec.title).collect();
    let kinds: Vec<ValueKind> = categories.iter().map(|spec| spec.kind).collect();

    assert_eq!(
        titles,
        [
            "Rows read",
            "Rows written",
            "Queries",
            "Payments completed",
            "Sign ups",
            "Logins"
        ]
    );
    assert_eq!(
        kinds,
        [
            ValueKind::Unit,
            ValueKind::Unit,
            ValueKind::Unit,
            ValueKind::Currency,
            ValueKind::Unit,
            ValueKind::Unit
        ]
    );
}

#[test]
fn cost_breakdown_projects_unchanged() {
    let records = vec![
        CostRecord::new("Base tier", 68.1, "$200", ColorTag::Primary),
        CostRecord::new("On-demand charges", 20.8, "$61.1", ColorTag::Primary),
        CostRecord::new("Caching", 11.1, "$31.9", ColorTag::Secondary),
    ];

    let props = project_cost_breakdown(&records);

    assert_eq!(props.data, records);
    let values: Vec<&str> = props.data.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, ["$200", "$61.1", "$31.9"]);
}
