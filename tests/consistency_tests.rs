#![allow(clippy::unwrap_used)]

use tz_country::services::consistency::{check, DivergenceKind};
use tz_country::{CodeCountryMap, CodeResolver, TimezoneCodeMap, TimezoneCountryMap};

fn resolver(codes: &str, countries: &str) -> CodeResolver {
    CodeResolver::from_parts(
        TimezoneCodeMap::from_json(codes).unwrap(),
        CodeCountryMap::from_json(countries).unwrap(),
    )
}

#[test]
fn test_embedded_tables_agree() {
    let resolver = CodeResolver::new().unwrap();
    let direct = TimezoneCountryMap::new().unwrap();

    assert!(check(&resolver, &direct).is_empty());
}

#[test]
fn test_embedded_paths_agree_for_every_timezone() {
    let resolver = CodeResolver::new().unwrap();
    let direct = TimezoneCountryMap::new().unwrap();

    for (tz, country) in direct.iter() {
        assert_eq!(resolver.country_for_timezone(tz).unwrap(), country, "timezone: {tz}");
    }
}

#[test]
fn test_reports_each_kind_of_divergence() {
    let resolver = resolver(
        r#"{"A/Match": "AA", "B/Mismatch": "BB", "C/Dangling": "CC", "D/NoDirect": "AA"}"#,
        r#"{"AA": "Alpha", "BB": "Bravo"}"#,
    );
    let direct = TimezoneCountryMap::from_json(
        r#"{"A/Match": "Alpha", "B/Mismatch": "Beta", "C/Dangling": "Charlie", "E/NoCode": "Echo"}"#,
    )
    .unwrap();

    let divergences = check(&resolver, &direct);
    let found: Vec<(&str, &DivergenceKind)> =
        divergences.iter().map(|d| (d.timezone.as_str(), &d.kind)).collect();

    assert_eq!(
        found,
        vec![
            (
                "B/Mismatch",
                &DivergenceKind::NameMismatch {
                    composed: "Bravo".to_string(),
                    direct: "Beta".to_string(),
                }
            ),
            ("C/Dangling", &DivergenceKind::UnknownCode { code: "CC".to_string() }),
            ("D/NoDirect", &DivergenceKind::MissingDirect { composed: "Alpha".to_string() }),
            ("E/NoCode", &DivergenceKind::MissingCode),
        ]
    );
}

#[test]
fn test_divergence_display() {
    let resolver = resolver(r#"{"B/Mismatch": "BB"}"#, r#"{"BB": "Bravo"}"#);
    let direct = TimezoneCountryMap::from_json(r#"{"B/Mismatch": "Beta"}"#).unwrap();

    let divergences = check(&resolver, &direct);
    assert_eq!(divergences.len(), 1);
    assert_eq!(divergences[0].to_string(), "B/Mismatch: 'Bravo' via code, 'Beta' directly");
}
