//! Field planning: one uniform evaluation loop over declarative rules.
//!
//! Adding a field, dependency, or variant choice is a configuration
//! change, not new conditional code. Rules are walked in declared order so
//! a test harness can replay an exact draw sequence against the table.

use std::collections::BTreeMap;

use identikit_config::FieldRule;

use crate::draws::DrawSource;
use crate::select::{pick_uniform, pick_weighted};

/// Inclusion decision for one field, plus its variant choice if the rule
/// declares a variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecision {
    pub included: bool,
    pub variant: Option<usize>,
}

impl FieldDecision {
    const EXCLUDED: FieldDecision = FieldDecision {
        included: false,
        variant: None,
    };
}

/// Decision map produced by one planning pass.
#[derive(Debug, Clone, Default)]
pub struct FieldPlan {
    decisions: BTreeMap<String, FieldDecision>,
}

impl FieldPlan {
    pub fn included(&self, id: &str) -> bool {
        self.decisions
            .get(id)
            .map(|decision| decision.included)
            .unwrap_or(false)
    }

    pub fn variant(&self, id: &str) -> Option<usize> {
        self.decisions.get(id).and_then(|decision| decision.variant)
    }

    pub fn decision(&self, id: &str) -> Option<FieldDecision> {
        self.decisions.get(id).copied()
    }
}

/// Evaluate a format's ordered rules against a draw source.
///
/// A rule whose parent is unknown or excluded is marked excluded without
/// consuming a draw — this holds unconditionally, even under a malformed
/// rule table. Otherwise one draw decides inclusion, and an included rule
/// with variants consumes a second draw to pick among them.
pub fn plan_fields(rules: &[FieldRule], draws: &mut dyn DrawSource) -> FieldPlan {
    let mut plan = FieldPlan::default();

    for rule in rules {
        if let Some(parent) = &rule.depends_on
            && !plan.included(parent)
        {
            plan.decisions
                .insert(rule.id.clone(), FieldDecision::EXCLUDED);
            continue;
        }

        let included = draws.draw() < rule.probability;
        let variant = if included {
            rule.variants.as_ref().map(|variants| {
                let draw = draws.draw();
                if variants.is_weighted() {
                    pick_weighted(&variants.options, draw)
                } else {
                    pick_uniform(variants.options.len(), draw)
                }
            })
        } else {
            None
        };

        plan.decisions
            .insert(rule.id.clone(), FieldDecision { included, variant });
    }

    plan
}
