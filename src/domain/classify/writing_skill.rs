//! Writing-skill classification from the `G2` sub-field
//!
//! The phrases overlap (`L` is inside `LH`, `H` is inside `LH`), so two
//! independent axes each pick at most one key:
//!
//! - lowercase axis: `LH`, else `L?`, else `L`
//! - uppercase axis: `H?`, else `H` unless `LH` already covers it
//!
//! Codes are emitted lowercase axis first.

use super::{Classifier, CodeSet, Dimension, RuleTable};

#[derive(Debug)]
pub struct WritingSkillClassifier {
    pub table: &'static RuleTable,
}

impl WritingSkillClassifier {
    /// Keys selected for `content`, in emission order
    pub fn select_keys(content: &str) -> Vec<&'static str> {
        let mut keys = Vec::with_capacity(2);
        let has_lh = content.contains("LH");

        if has_lh {
            keys.push("LH");
        } else if content.contains("L?") {
            keys.push("L?");
        } else if content.contains('L') {
            keys.push("L");
        }

        if content.contains("H?") {
            keys.push("H?");
        } else if content.contains('H') && !has_lh {
            keys.push("H");
        }

        keys
    }
}

impl Classifier for WritingSkillClassifier {
    fn dimension(&self) -> Dimension {
        Dimension::WritingSkill
    }

    fn classify(&self, content: &str) -> Vec<&'static str> {
        Self::select_keys(content)
            .into_iter()
            .filter_map(|key| self.table.code_for(key))
            .collect::<CodeSet>()
            .into_vec()
    }
}
