//! Display strings for cards and chart summaries.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::{MetricRecord, ValueKind};

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag; unknown tags fall back to `en-US` rules.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "it" | "es" | "pt" | "nl" | "da" => (',', '.'),
            "fr" | "sv" | "fi" | "nb" | "pl" | "cs" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("AUD", "A$"),
        ("CAD", "C$"),
        ("CHF", "CHF "),
    ])
});

pub fn symbol_for(code: &str) -> String {
    CURRENCY_SYMBOLS
        .get(code)
        .map(|symbol| symbol.to_string())
        .unwrap_or_else(|| format!("{code} "))
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut out = String::new();
    if value < 0.0 && body.chars().any(|ch| ch != '0' && ch != '.') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(amount: f64, code: &str, locale: &LocaleConfig) -> String {
    let code = code.to_ascii_uppercase();
    let body = format_number(locale, amount.abs(), minor_units_for(&code));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{}{body}", symbol_for(&code))
}

/// `68.1` becomes `68.1%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed relative change: `0.002` becomes `+0.2%`.
pub fn format_change(ratio: f64) -> String {
    let percent = ratio * 100.0;
    if percent >= 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

pub fn format_value(kind: ValueKind, value: f64, currency: &str, locale: &LocaleConfig) -> String {
    match kind {
        ValueKind::Currency => format_currency(value, currency, locale),
        ValueKind::Unit => format_number(locale, value, 0),
    }
}

/// `current` against `allowed`, suffixed with the record's unit: `5.2GB of 20GB`.
pub fn format_usage(record: &MetricRecord) -> String {
    let unit = record.unit.as_deref().unwrap_or("");
    format!("{}{unit} of {}{unit}", record.current, record.allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_per_locale() {
        let en = LocaleConfig::default();
        assert_eq!(format_number(&en, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&en, 999.0, 0), "999");
        assert_eq!(format_number(&en, -1234.5, 1), "-1,234.5");

        let de = LocaleConfig::for_tag("de-DE");
        assert_eq!(format_number(&de, 1234.5, 2), "1.234,50");
    }

    #[test]
    fn formats_currency_with_symbol() {
        let en = LocaleConfig::default();
        assert_eq!(format_currency(293.5, "usd", &en), "$293.50");
        assert_eq!(format_currency(-12.0, "EUR", &en), "-€12.00");
        assert_eq!(format_currency(1500.0, "JPY", &en), "¥1,500");
        assert_eq!(format_currency(3.0, "CHF", &en), "CHF 3.00");
    }

    #[test]
    fn change_carries_explicit_sign() {
        assert_eq!(format_change(0.002), "+0.2%");
        assert_eq!(format_change(-0.014), "-1.4%");
        assert_eq!(format_percentage(68.1), "68.1%");
    }

    #[test]
    fn usage_keeps_authored_numbers() {
        let storage = MetricRecord::new("Storage", 26.0, 5.2, 20.0).with_unit("GB");
        assert_eq!(format_usage(&storage), "5.2GB of 20GB");
        let users = MetricRecord::new("Total users", 70.0, 28.0, 40.0);
        assert_eq!(format_usage(&users), "28 of 40");
    }

    #[test]
    fn unit_values_round_to_whole_numbers() {
        let en = LocaleConfig::default();
        assert_eq!(format_value(ValueKind::Unit, 48210.6, "USD", &en), "48,211");
        assert_eq!(
            format_value(ValueKind::Currency, 48210.6, "USD", &en),
            "$48,210.60"
        );
    }
}
