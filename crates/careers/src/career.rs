use core::str::FromStr;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use careernav_core::{AnnualEarnings, DomainError, DomainResult, RiskLevel};

/// Catalogued careers offered by the planning form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerId {
    FinanceExecutive,
    ManufacturingEntrepreneur,
    Consulting,
    BoardMembership,
    Lecturing,
}

impl CareerId {
    pub const ALL: [CareerId; 5] = [
        CareerId::FinanceExecutive,
        CareerId::ManufacturingEntrepreneur,
        CareerId::Consulting,
        CareerId::BoardMembership,
        CareerId::Lecturing,
    ];

    /// Human-readable label, as shown in the career picker.
    pub fn label(self) -> &'static str {
        match self {
            CareerId::FinanceExecutive => "Finance Executive",
            CareerId::ManufacturingEntrepreneur => "Manufacturing Entrepreneur",
            CareerId::Consulting => "Consulting",
            CareerId::BoardMembership => "Board Membership",
            CareerId::Lecturing => "Lecturing",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CareerId::FinanceExecutive => "finance-executive",
            CareerId::ManufacturingEntrepreneur => "manufacturing-entrepreneur",
            CareerId::Consulting => "consulting",
            CareerId::BoardMembership => "board-membership",
            CareerId::Lecturing => "lecturing",
        }
    }
}

impl core::fmt::Display for CareerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CareerId {
    type Err = DomainError;

    /// Accepts either the display label or the kebab-case slug (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CareerId::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::unknown_career(needle))
    }
}

/// One career submitted for a run.
///
/// `name` is a free-form label; it only has to be unique within its selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInput {
    pub name: String,
    pub base_earning: AnnualEarnings,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl CareerInput {
    pub fn new(name: impl Into<String>, base_earning: AnnualEarnings, risk_level: RiskLevel) -> Self {
        Self {
            name: name.into(),
            base_earning,
            risk_level,
        }
    }

    /// Catalog entry for this input, if the name matches one.
    pub fn career_id(&self) -> Option<CareerId> {
        self.name.parse().ok()
    }
}

/// Ordered set of careers for a single run (unique, non-blank names).
///
/// An empty selection is valid: every downstream computation yields no rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CareerInput>", into = "Vec<CareerInput>")]
pub struct CareerSelection {
    careers: Vec<CareerInput>,
}

impl CareerSelection {
    pub fn new(careers: Vec<CareerInput>) -> DomainResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(careers.len());
        for c in &careers {
            let name = c.name.trim();
            if name.is_empty() {
                return Err(DomainError::validation("career name cannot be empty"));
            }
            if !seen.insert(name) {
                return Err(DomainError::validation(format!(
                    "career '{name}' selected more than once"
                )));
            }
        }
        Ok(Self { careers })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerInput> {
        self.careers.iter()
    }

    pub fn as_slice(&self) -> &[CareerInput] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Sum of all base earnings in the selection.
    pub fn total_earnings(&self) -> f64 {
        self.careers.iter().map(|c| c.base_earning.amount()).sum()
    }
}

impl TryFrom<Vec<CareerInput>> for CareerSelection {
    type Error = DomainError;

    fn try_from(value: Vec<CareerInput>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CareerSelection> for Vec<CareerInput> {
    fn from(value: CareerSelection) -> Self {
        value.careers
    }
}

impl<'a> IntoIterator for &'a CareerSelection {
    type Item = &'a CareerInput;
    type IntoIter = core::slice::Iter<'a, CareerInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.careers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, earning: f64, risk: u8) -> CareerInput {
        CareerInput::new(
            name,
            AnnualEarnings::new(earning).unwrap(),
            RiskLevel::new(risk).unwrap(),
        )
    }

    #[test]
    fn career_id_parses_labels_and_slugs() {
        assert_eq!("Finance Executive".parse::<CareerId>().unwrap(), CareerId::FinanceExecutive);
        assert_eq!("board-membership".parse::<CareerId>().unwrap(), CareerId::BoardMembership);
        assert_eq!(" lecturing ".parse::<CareerId>().unwrap(), CareerId::Lecturing);
    }

    #[test]
    fn unknown_career_label_is_rejected() {
        let err = "Astronaut".parse::<CareerId>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCareer("Astronaut".to_string()));
    }

    #[test]
    fn labels_and_slugs_are_unique() {
        let labels: HashSet<_> = CareerId::ALL.iter().map(|c| c.label()).collect();
        let slugs: HashSet<_> = CareerId::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(labels.len(), CareerId::ALL.len());
        assert_eq!(slugs.len(), CareerId::ALL.len());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = CareerSelection::new(vec![input("A", 1.0, 5), input("A", 2.0, 5)]).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("more than once")),
            _ => panic!("Expected Validation error for duplicate career"),
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(CareerSelection::new(vec![input("  ", 1.0, 5)]).is_err());
    }

    #[test]
    fn empty_selection_is_valid() {
        let sel = CareerSelection::new(Vec::new()).unwrap();
        assert!(sel.is_empty());
        assert_eq!(sel.total_earnings(), 0.0);
    }

    #[test]
    fn selection_deserializes_with_default_risk() {
        let sel: CareerSelection =
            serde_json::from_str(r#"[{"name":"Consulting","base_earning":90000}]"#).unwrap();
        let c = &sel.as_slice()[0];
        assert_eq!(c.risk_level.value(), 5);
        assert_eq!(c.career_id(), Some(CareerId::Consulting));
    }

    #[test]
    fn selection_deserialization_rejects_duplicates() {
        let json = r#"[{"name":"A","base_earning":1,"risk_level":2},{"name":"A","base_earning":2,"risk_level":3}]"#;
        assert!(serde_json::from_str::<CareerSelection>(json).is_err());
    }
}
