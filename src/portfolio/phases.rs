//! Three-phase rollout plan.

use crate::roi::RoiCalculation;
use serde::{Deserialize, Serialize};

const PROJECTS_PER_PHASE: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ImplementationPhase {
    pub phase: u8,
    pub name: String,
    pub duration: String,
    pub projects: Vec<String>,
    pub investment: f64,
    pub expected_savings: f64,
}

/// Phase tiers, each with its eligibility rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PhaseTier {
    QuickWins,
    CoreImprovements,
    FullTransformation,
}

impl PhaseTier {
    const ALL: [PhaseTier; 3] = [
        PhaseTier::QuickWins,
        PhaseTier::CoreImprovements,
        PhaseTier::FullTransformation,
    ];

    fn number(self) -> u8 {
        match self {
            PhaseTier::QuickWins => 1,
            PhaseTier::CoreImprovements => 2,
            PhaseTier::FullTransformation => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PhaseTier::QuickWins => "Quick Wins",
            PhaseTier::CoreImprovements => "Core Improvements",
            PhaseTier::FullTransformation => "Full Transformation",
        }
    }

    fn duration(self) -> &'static str {
        match self {
            PhaseTier::QuickWins => "0-30 days",
            PhaseTier::CoreImprovements => "31-90 days",
            PhaseTier::FullTransformation => "91-180 days",
        }
    }

    fn admits(self, calc: &RoiCalculation) -> bool {
        match self {
            PhaseTier::QuickWins => calc.time_to_implement_days <= 30 && calc.roi_percentage > 50.0,
            PhaseTier::CoreImprovements => calc.time_to_implement_days <= 90,
            PhaseTier::FullTransformation => true,
        }
    }
}

/// Plan up to three phases of up to three projects each.
///
/// Items are ranked by ROI per implementation day (stable on input order)
/// and each item lands in at most one phase. Empty phases are omitted.
pub fn plan_phases(calculations: &[RoiCalculation]) -> Vec<ImplementationPhase> {
    let mut ranked: Vec<&RoiCalculation> = calculations.iter().collect();
    ranked.sort_by(|a, b| b.roi_per_day().total_cmp(&a.roi_per_day()));

    let mut assigned = vec![false; ranked.len()];
    let mut phases = Vec::new();

    for tier in PhaseTier::ALL {
        let picked: Vec<usize> = (0..ranked.len())
            .filter(|&i| !assigned[i] && tier.admits(ranked[i]))
            .take(PROJECTS_PER_PHASE)
            .collect();
        if picked.is_empty() {
            continue;
        }

        for &i in &picked {
            assigned[i] = true;
        }
        let members: Vec<&RoiCalculation> = picked.iter().map(|&i| ranked[i]).collect();
        phases.push(ImplementationPhase {
            phase: tier.number(),
            name: tier.label().to_string(),
            duration: tier.duration().to_string(),
            projects: members.iter().map(|c| c.description.clone()).collect(),
            investment: members.iter().map(|c| c.implementation_cost).sum(),
            expected_savings: members.iter().map(|c| c.annual_savings).sum(),
        });
    }

    phases
}
