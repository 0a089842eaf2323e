use std::collections::BTreeSet;
use std::fmt;

use crate::resolver::{CodeResolver, TimezoneCountryMap};
use crate::utils::logging::log_divergence;

/// How the composed and direct paths disagree for one timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The timezone is in the direct table but has no country code
    MissingCode,
    /// The timezone's country code has no country name
    UnknownCode {
        /// The dangling code
        code: String,
    },
    /// The composed path resolves but the direct table has no entry
    MissingDirect {
        /// Name reached through the code tables
        composed: String,
    },
    /// Both paths resolve to different names
    NameMismatch {
        /// Name reached through the code tables
        composed: String,
        /// Name from the direct table
        direct: String,
    },
}

/// A timezone whose country differs depending on the lookup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// The affected timezone
    pub timezone: String,
    /// What went wrong
    pub kind: DivergenceKind,
}

impl fmt::Display for DivergenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergenceKind::MissingCode => f.write_str("no country code, only in the direct table"),
            DivergenceKind::UnknownCode { code } => {
                write!(f, "country code {} has no country name", code)
            }
            DivergenceKind::MissingDirect { composed } => {
                write!(f, "resolves to '{}' but missing from the direct table", composed)
            }
            DivergenceKind::NameMismatch { composed, direct } => {
                write!(f, "'{}' via code, '{}' directly", composed, direct)
            }
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timezone, self.kind)
    }
}

/// Compares the two-step path with the direct table for every known timezone.
///
/// Results are ordered by timezone. Nothing is corrected.
pub fn check(resolver: &CodeResolver, direct: &TimezoneCountryMap) -> Vec<Divergence> {
    let timezones: BTreeSet<&str> = resolver
        .codes()
        .iter()
        .map(|(tz, _)| tz)
        .chain(direct.iter().map(|(tz, _)| tz))
        .collect();

    let mut divergences = Vec::new();
    for tz in timezones {
        let kind = match (resolver.code(tz), direct.get_country(tz)) {
            (Err(_), _) => Some(DivergenceKind::MissingCode),
            (Ok(code), direct_name) => match (resolver.country(code), direct_name) {
                (Err(_), _) => Some(DivergenceKind::UnknownCode { code: code.to_string() }),
                (Ok(composed), Err(_)) => Some(DivergenceKind::MissingDirect {
                    composed: composed.to_string(),
                }),
                (Ok(composed), Ok(name)) if composed != name => Some(DivergenceKind::NameMismatch {
                    composed: composed.to_string(),
                    direct: name.to_string(),
                }),
                _ => None,
            },
        };

        if let Some(kind) = kind {
            log_divergence(tz, &kind.to_string());
            divergences.push(Divergence {
                timezone: tz.to_string(),
                kind,
            });
        }
    }

    divergences
}
