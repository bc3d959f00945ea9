//! Declarative pivot and next-step guidance keyed by `CareerId`.

use serde::{Deserialize, Serialize};

use crate::career::{CareerId, CareerSelection};

/// Static guidance for one catalogued career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerGuidance {
    pub career: CareerId,
    /// Careers that are a natural next move from this one.
    pub pivots: &'static [CareerId],
    pub next_steps: &'static [&'static str],
}

static GUIDANCE: [CareerGuidance; 5] = [
    CareerGuidance {
        career: CareerId::FinanceExecutive,
        pivots: &[CareerId::BoardMembership, CareerId::Consulting],
        next_steps: &[
            "Take on P&L ownership of a business unit",
            "Complete a non-executive director programme",
            "Build relationships with board chairs and search firms",
        ],
    },
    CareerGuidance {
        career: CareerId::ManufacturingEntrepreneur,
        pivots: &[CareerId::Consulting, CareerId::BoardMembership],
        next_steps: &[
            "Document operating playbooks for the current plant",
            "Secure a second revenue line to reduce customer concentration",
            "Join an industry association working group",
        ],
    },
    CareerGuidance {
        career: CareerId::Consulting,
        pivots: &[CareerId::Lecturing, CareerId::FinanceExecutive, CareerId::BoardMembership],
        next_steps: &[
            "Narrow the practice to two signature offerings",
            "Publish case studies from completed engagements",
            "Convert repeat clients to retainers",
        ],
    },
    CareerGuidance {
        career: CareerId::BoardMembership,
        pivots: &[CareerId::Consulting, CareerId::Lecturing],
        next_steps: &[
            "Chair a board committee",
            "Limit concurrent seats to keep preparation time realistic",
            "Keep governance certifications current",
        ],
    },
    CareerGuidance {
        career: CareerId::Lecturing,
        pivots: &[CareerId::Consulting],
        next_steps: &[
            "Develop an executive education module",
            "Co-author applied research with industry partners",
            "Offer guest lectures at two additional institutions",
        ],
    },
];

pub fn guidance(career: CareerId) -> &'static CareerGuidance {
    // GUIDANCE is ordered like CareerId::ALL.
    &GUIDANCE[career as usize]
}

/// Edge in the pivot flowchart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PivotEdge {
    pub from: CareerId,
    pub to: CareerId,
}

/// Pivot edges out of every selected career that maps to a catalog entry.
///
/// Free-form names that are not in the catalog contribute no edges.
pub fn pivot_edges(selection: &CareerSelection) -> Vec<PivotEdge> {
    selection
        .iter()
        .filter_map(|c| c.career_id())
        .flat_map(|from| guidance(from).pivots.iter().map(move |&to| PivotEdge { from, to }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::CareerInput;
    use careernav_core::{AnnualEarnings, RiskLevel};

    #[test]
    fn every_career_has_its_own_entry() {
        for id in CareerId::ALL {
            let g = guidance(id);
            assert_eq!(g.career, id);
            assert!(!g.next_steps.is_empty());
        }
    }

    #[test]
    fn no_career_pivots_to_itself() {
        for id in CareerId::ALL {
            assert!(!guidance(id).pivots.contains(&id));
        }
    }

    #[test]
    fn edges_skip_uncatalogued_names() {
        let sel = CareerSelection::new(vec![
            CareerInput::new("Lecturing", AnnualEarnings::new(1.0).unwrap(), RiskLevel::default()),
            CareerInput::new("Side Hustle", AnnualEarnings::new(1.0).unwrap(), RiskLevel::default()),
        ])
        .unwrap();

        let edges = pivot_edges(&sel);
        assert_eq!(
            edges,
            vec![PivotEdge {
                from: CareerId::Lecturing,
                to: CareerId::Consulting
            }]
        );
    }
}
