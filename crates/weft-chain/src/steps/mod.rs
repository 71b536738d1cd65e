//! The ordered augmentation steps applied by [`crate::assemble`].
//!
//! Each step takes the graph built so far and returns it extended. A step
//! decides on its own, from the context, whether it has anything to add.

mod base;
mod development;
mod entry;
mod production;
mod resolve;
mod rules;
mod styles;

use crate::assemble::Assembly;
use crate::graph::BuildGraph;

pub type Step = fn(BuildGraph, &Assembly<'_>) -> BuildGraph;

/// Every step, in application order.
pub const PIPELINE: &[(&str, Step)] = &[
    ("entry", entry::entry),
    ("output", entry::output),
    ("resolve", resolve::resolve),
    ("component-rule", rules::component),
    ("transpile-rule", rules::transpile),
    ("asset-rules", rules::assets),
    ("style-rules", styles::style_rules),
    ("base-stages", base::stages),
    ("performance", base::performance),
    ("development", development::development),
    ("stable-ids", production::stable_ids),
    ("code-splitting", production::code_splitting),
    ("scope-hoisting", production::scope_hoisting),
    ("minimizer", production::minimizer),
    ("style-extraction", production::style_extraction),
    ("delivery", production::delivery),
];

#[cfg(test)]
pub(crate) mod fixture {
    use weft_config::{BuildContext, Mode, Target};
    use weft_paths::ProjectLayout;

    pub fn layout() -> ProjectLayout {
        ProjectLayout::new("/work/group/app", "/opt/weft")
    }

    pub fn ctx(mode: Mode, target: Target) -> BuildContext {
        BuildContext::new(mode, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_names_are_unique() {
        let names: HashSet<_> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), PIPELINE.len());
    }

    #[test]
    fn entry_comes_first_and_delivery_last() {
        assert_eq!(PIPELINE.first().map(|(n, _)| *n), Some("entry"));
        assert_eq!(PIPELINE.last().map(|(n, _)| *n), Some("delivery"));
    }
}
