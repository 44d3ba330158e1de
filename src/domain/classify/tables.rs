//! Read-only rule tables, one per classification dimension
//!
//! Order is significant for containment matching: codes are emitted in table
//! order. Outcome keys containing a colon are specific and outrank the
//! general key before their colon.

use super::{CaseMode, Rule, RuleTable};

/// `T`: official or unofficial letter
pub static LETTER_TYPES: RuleTable = RuleTable {
    case: CaseMode::Sensitive,
    rules: &[
        Rule::new("1a", "gen:OFFICIAL"),
        Rule::new("1b", "gen:UNOFFICIAL"),
    ],
};

/// `G1`: authenticity of the hand
pub static AUTHENTICITY: RuleTable = RuleTable {
    case: CaseMode::Sensitive,
    rules: &[
        Rule::new("A 1", "gen:AUTHENTICITY_A1"),
        Rule::new("A 2", "gen:AUTHENTICITY_A2"),
        Rule::new("N 1", "gen:AUTHENTICITY_N1"),
        Rule::new("N 2", "gen:AUTHENTICITY_N2"),
        Rule::new("N 5", "gen:AUTHENTICITY_N5"),
        Rule::new("NC", "gen:AUTHENTICITY_NC"),
        Rule::new("?", "gen:AUTHENTICITY_NC"),
    ],
};

/// `G2`: writing skill. Selection is done by
/// [`WritingSkillClassifier`](super::WritingSkillClassifier), not containment.
pub static WRITING_SKILLS: RuleTable = RuleTable {
    case: CaseMode::Sensitive,
    rules: &[
        Rule::new("L?", "gen:WRITING_SKILL_L_UNCERTAIN"),
        Rule::new("L", "gen:WRITING_SKILL_L"),
        Rule::new("LH", "gen:WRITING_SKILL_LH"),
        Rule::new("H?", "gen:WRITING_SKILL_H_UNCERTAIN"),
        Rule::new("H", "gen:WRITING_SKILL_H"),
    ],
};

/// `CF`: correspondence function
pub static FUNCTIONS: RuleTable = RuleTable {
    case: CaseMode::Lowercase,
    rules: &[
        Rule::new("application", "gen:CF_APPLICATION"),
        Rule::new("re-application", "gen:CF_RE-APPLICATION"),
        Rule::new("reminder", "gen:CF_REMINDER"),
        Rule::new("renewal", "gen:CF_RENEWAL"),
        Rule::new("change", "gen:CF_CHANGE"),
        Rule::new("assistance", "gen:CF_ASSISTANCE"),
        Rule::new("notification", "gen:CF_NOTIFICATION"),
        Rule::new("report", "gen:CF_REPORT"),
        Rule::new("certificate", "gen:CF_CERTIFICATE"),
        Rule::new("query", "gen:CF_QUERY"),
        Rule::new("thanks", "gen:CF_THANKS"),
        Rule::new("apology", "gen:CF_APOLOGY"),
        Rule::new("defence", "gen:CF_DEFENCE"),
        Rule::new("testimonial", "gen:CF_TESTIMONIAL"),
        Rule::new("other", "gen:CF_OTHER"),
    ],
};

const SPECIFIC: u8 = 0;
const GENERAL: u8 = 1;

/// `CO`: outcome and content of the request
pub static OUTCOMES: RuleTable = RuleTable {
    case: CaseMode::Lowercase,
    rules: &[
        Rule::new("relief: money", "gen:CO_RELIEF_MONEY").with_priority(SPECIFIC),
        Rule::new("relief: rent", "gen:CO_RELIEF_RENT").with_priority(SPECIFIC),
        Rule::new("relief: clothing", "gen:CO_RELIEF_CLOTHING").with_priority(SPECIFIC),
        Rule::new("relief: food", "gen:CO_RELIEF_FOOD").with_priority(SPECIFIC),
        Rule::new("relief: fuel", "gen:CO_RELIEF_FUEL").with_priority(SPECIFIC),
        Rule::new("relief: medical", "gen:CO_RELIEF_MEDICAL").with_priority(SPECIFIC),
        Rule::new("relief: burial", "gen:CO_RELIEF_BURIAL").with_priority(SPECIFIC),
        Rule::new("relief: increase", "gen:CO_RELIEF_INCREASE").with_priority(SPECIFIC),
        Rule::new("employment: work", "gen:CO_EMPLOYMENT_WORK").with_priority(SPECIFIC),
        Rule::new("employment: apprenticeship", "gen:CO_EMPLOYMENT_APPRENTICESHIP")
            .with_priority(SPECIFIC),
        Rule::new("relief", "gen:CO_RELIEF").with_priority(GENERAL),
        Rule::new("employment", "gen:CO_EMPLOYMENT").with_priority(GENERAL),
        Rule::new("removal", "gen:CO_REMOVAL").with_priority(GENERAL),
        Rule::new("settlement", "gen:CO_SETTLEMENT").with_priority(GENERAL),
        Rule::new("workhouse", "gen:CO_WORKHOUSE").with_priority(GENERAL),
        Rule::new("emigration", "gen:CO_EMIGRATION").with_priority(GENERAL),
        Rule::new("other", "gen:CO_OTHER").with_priority(GENERAL),
    ],
};
