//! Semantic field definitions and column-name pattern tables.
//!
//! Each semantic field carries an ordered list of case-insensitive patterns
//! covering English and Latvian export headers plus common tool variants
//! ("Amount Spent" vs "Cost" vs "Spend"). Earlier patterns are exact or
//! anchored; later ones are looser fallbacks. Latvian diacritics are matched
//! with character alternates so both "Iztērētā summa" and its ASCII-folded
//! form resolve.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A semantic field the engine knows how to extract from an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    /// Money spent on delivery.
    Spend,
    /// Times an ad was shown.
    Impressions,
    /// All clicks on an ad.
    Clicks,
    /// Clicks on the outbound link specifically.
    LinkClicks,
    /// Views of the destination page after a click.
    LandingPageViews,
    /// Mean exposures per person.
    Frequency,
    /// Purchase conversion value.
    Revenue,
    /// Tracked purchase events.
    Purchases,
    /// Tracked lead events.
    Leads,
    /// Generic "Results"/"Conversions" column.
    Conversions,
    /// Reporting date of the row.
    Date,
}

impl SemanticField {
    /// All fields, in resolution order.
    pub const ALL: [SemanticField; 11] = [
        SemanticField::Spend,
        SemanticField::Impressions,
        SemanticField::Clicks,
        SemanticField::LinkClicks,
        SemanticField::LandingPageViews,
        SemanticField::Frequency,
        SemanticField::Revenue,
        SemanticField::Purchases,
        SemanticField::Leads,
        SemanticField::Conversions,
        SemanticField::Date,
    ];

    /// The ordered pattern list used to resolve this field.
    pub fn patterns(self) -> &'static [Regex] {
        &FIELD_PATTERNS[&self]
    }

    /// Human-readable label for logging.
    pub fn label(self) -> &'static str {
        match self {
            SemanticField::Spend => "spend",
            SemanticField::Impressions => "impressions",
            SemanticField::Clicks => "clicks",
            SemanticField::LinkClicks => "link clicks",
            SemanticField::LandingPageViews => "landing page views",
            SemanticField::Frequency => "frequency",
            SemanticField::Revenue => "revenue",
            SemanticField::Purchases => "purchases",
            SemanticField::Leads => "leads",
            SemanticField::Conversions => "conversions",
            SemanticField::Date => "date",
        }
    }
}

static FIELD_PATTERNS: Lazy<IndexMap<SemanticField, Vec<Regex>>> = Lazy::new(|| {
    SemanticField::ALL
        .iter()
        .map(|field| (*field, build_patterns(*field)))
        .collect()
});

fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Build the ordered pattern list for one field.
fn build_patterns(field: SemanticField) -> Vec<Regex> {
    match field {
        SemanticField::Spend => vec![
            rx(r"(?i)^amount[\s_]?spent"),
            rx(r"(?i)^(spend|cost)$"),
            rx(r"(?i)^izt[ēe]r[ēe]t[āa][\s_]summa"),
            rx(r"(?i)(total[\s_]spend|izmaksas)"),
        ],
        SemanticField::Impressions => vec![
            rx(r"(?i)^impressions?$"),
            rx(r"(?i)^(r[āa]d[īi]jumi|seansi)$"),
            rx(r"(?i)impressions"),
        ],
        // Plain "clicks" is anchored so it cannot swallow "Link clicks".
        SemanticField::Clicks => vec![
            rx(r"(?i)^clicks(\s*\(all\))?$"),
            rx(r"(?i)^klik[šs][ķk]i(\s*\(visi\))?$"),
            rx(r"(?i)^all[\s_]clicks$"),
        ],
        SemanticField::LinkClicks => vec![
            rx(r"(?i)^(unique[\s_])?link[\s_]clicks$"),
            rx(r"(?i)^saites[\s_]klik[šs][ķk]i"),
            rx(r"(?i)link[\s_]clicks"),
        ],
        SemanticField::LandingPageViews => vec![
            rx(r"(?i)^landing[\s_]page[\s_]views?$"),
            rx(r"(?i)^m[ēe]r[ķk]lapas[\s_]skat[īi]jumi"),
            rx(r"(?i)landing[\s_]page"),
        ],
        SemanticField::Frequency => vec![
            rx(r"(?i)^frequency$"),
            rx(r"(?i)^bie[žz]ums$"),
        ],
        SemanticField::Revenue => vec![
            rx(r"(?i)^purchases?[\s_]conversion[\s_]value"),
            rx(r"(?i)^(revenue|conv\.?[\s_]?value)$"),
            rx(r"(?i)^pirkumu[\s_].*v[ēe]rt[īi]ba"),
            rx(r"(?i)(revenue|ie[ņn][ēe]mumi)"),
        ],
        // Kept strictly anchored: a loose "purchases" would also match
        // "Purchases conversion value".
        SemanticField::Purchases => vec![
            rx(r"(?i)^(website[\s_])?purchases?$"),
            rx(r"(?i)^pirkumi$"),
        ],
        SemanticField::Leads => vec![
            rx(r"(?i)^(on[\s_-]?facebook[\s_])?leads?$"),
            rx(r"(?i)^potenci[āa]lie[\s_]klienti"),
            rx(r"(?i)^pieteikumi$"),
        ],
        SemanticField::Conversions => vec![
            rx(r"(?i)^results?$"),
            rx(r"(?i)^conversions?$"),
            rx(r"(?i)^rezult[āa]ti$"),
            rx(r"(?i)^(konversijas|rekl[āa]mguvumi)$"),
        ],
        SemanticField::Date => vec![
            rx(r"(?i)^(date|day)$"),
            rx(r"(?i)^(datums|diena)$"),
            rx(r"(?i)(reporting[\s_])?starts"),
            rx(r"(?i)(date|day|datums|diena|s[āa]kums)"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match<'a>(field: SemanticField, columns: &[&'a str]) -> Option<&'a str> {
        for pattern in field.patterns() {
            if let Some(col) = columns.iter().copied().find(|c| pattern.is_match(c)) {
                return Some(col);
            }
        }
        None
    }

    #[test]
    fn test_spend_variants() {
        assert_eq!(
            first_match(SemanticField::Spend, &["Amount Spent (USD)"]),
            Some("Amount Spent (USD)")
        );
        assert_eq!(first_match(SemanticField::Spend, &["Cost"]), Some("Cost"));
        assert_eq!(
            first_match(SemanticField::Spend, &["Iztērētā summa (EUR)"]),
            Some("Iztērētā summa (EUR)")
        );
    }

    #[test]
    fn test_clicks_does_not_match_link_clicks() {
        assert_eq!(
            first_match(SemanticField::Clicks, &["Link clicks", "Clicks (all)"]),
            Some("Clicks (all)")
        );
        assert_eq!(first_match(SemanticField::Clicks, &["Link clicks"]), None);
    }

    #[test]
    fn test_purchases_does_not_match_conversion_value() {
        assert_eq!(
            first_match(
                SemanticField::Purchases,
                &["Purchases conversion value", "Purchases"]
            ),
            Some("Purchases")
        );
        assert_eq!(
            first_match(SemanticField::Purchases, &["Purchases conversion value"]),
            None
        );
    }

    #[test]
    fn test_latvian_headers() {
        assert_eq!(
            first_match(SemanticField::Impressions, &["Rādījumi"]),
            Some("Rādījumi")
        );
        assert_eq!(
            first_match(SemanticField::Conversions, &["Rezultāti"]),
            Some("Rezultāti")
        );
        assert_eq!(
            first_match(SemanticField::Frequency, &["Biežums"]),
            Some("Biežums")
        );
    }

    #[test]
    fn test_date_search_order() {
        assert_eq!(
            first_match(SemanticField::Date, &["Reporting starts"]),
            Some("Reporting starts")
        );
        assert_eq!(first_match(SemanticField::Date, &["Diena"]), Some("Diena"));
    }
}
