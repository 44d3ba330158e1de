//! Classification of extracted field content into category codes
//!
//! Every dimension owns an ordered [`RuleTable`] of `(phrase, code)` rules.
//! Plain dimensions emit every rule whose phrase is contained in the content.
//! Writing skill and outcome add their own disambiguation on top of the
//! same tables (see [`writing_skill`] and [`outcome`]).

pub mod outcome;
pub mod tables;
pub mod writing_skill;

use crate::domain::tags::{Tag, TagScanner};
use std::borrow::Cow;

pub use outcome::OutcomeClassifier;
pub use writing_skill::WritingSkillClassifier;

/// How content is compared against rule phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Compare as written
    Sensitive,
    /// Lowercase the content first; phrases are stored lowercase
    Lowercase,
}

/// One `phrase -> code` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub phrase: &'static str,
    pub code: &'static str,
    /// Lower wins when a policy has to pick a single rule
    pub priority: u8,
}

impl Rule {
    pub const fn new(phrase: &'static str, code: &'static str) -> Self {
        Rule {
            phrase,
            code,
            priority: 0,
        }
    }

    pub const fn with_priority(self, priority: u8) -> Self {
        Rule { priority, ..self }
    }
}

/// Ordered rules for one dimension
#[derive(Debug)]
pub struct RuleTable {
    pub case: CaseMode,
    pub rules: &'static [Rule],
}

impl RuleTable {
    pub fn normalize<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self.case {
            CaseMode::Sensitive => Cow::Borrowed(content),
            CaseMode::Lowercase => Cow::Owned(content.to_lowercase()),
        }
    }

    /// All rules whose phrase occurs in `content`, in table order
    pub fn matching(&self, content: &str) -> Vec<&'static Rule> {
        let rules: &'static [Rule] = self.rules;
        let content = self.normalize(content);
        rules
            .iter()
            .filter(|rule| content.contains(rule.phrase))
            .collect()
    }

    /// The single best matching rule: lowest priority, then table order
    pub fn best_match(&self, content: &str) -> Option<&'static Rule> {
        let mut best: Option<&'static Rule> = None;
        for rule in self.matching(content) {
            if best.is_none_or(|current| rule.priority < current.priority) {
                best = Some(rule);
            }
        }
        best
    }

    /// Rule whose phrase equals `phrase` exactly (after normalisation)
    pub fn lookup(&self, phrase: &str) -> Option<&'static Rule> {
        let rules: &'static [Rule] = self.rules;
        let phrase = self.normalize(phrase);
        rules.iter().find(|rule| rule.phrase == phrase)
    }

    pub fn code_for(&self, phrase: &str) -> Option<&'static str> {
        self.lookup(phrase).map(|rule| rule.code)
    }
}

/// Insertion-ordered set of codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSet {
    codes: Vec<&'static str>,
}

impl CodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code unless already present; returns whether it was added
    pub fn insert(&mut self, code: &'static str) -> bool {
        if self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| *c == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }

    pub fn into_vec(self) -> Vec<&'static str> {
        self.codes
    }
}

impl FromIterator<&'static str> for CodeSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        let mut set = CodeSet::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

/// Classification dimension, each read from one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    LetterType,
    Authenticity,
    WritingSkill,
    Function,
    Outcome,
}

impl Dimension {
    pub fn tag(&self) -> Tag {
        match self {
            Dimension::LetterType => Tag::T,
            Dimension::Authenticity => Tag::G1,
            Dimension::WritingSkill => Tag::G2,
            Dimension::Function => Tag::CF,
            Dimension::Outcome => Tag::CO,
        }
    }
}

/// A code assigned to the letter, tagged with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRef {
    pub dimension: Dimension,
    pub code: &'static str,
}

/// Maps one dimension's content to codes, in emission order
pub trait Classifier {
    fn dimension(&self) -> Dimension;

    fn classify(&self, content: &str) -> Vec<&'static str>;
}

/// Emits every rule whose phrase is contained in the content.
///
/// Two phrases sharing a code both emit it.
#[derive(Debug)]
pub struct ContainmentClassifier {
    pub dimension: Dimension,
    pub table: &'static RuleTable,
}

impl Classifier for ContainmentClassifier {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn classify(&self, content: &str) -> Vec<&'static str> {
        self.table
            .matching(content)
            .into_iter()
            .map(|rule| rule.code)
            .collect()
    }
}

static LETTER_TYPE: ContainmentClassifier = ContainmentClassifier {
    dimension: Dimension::LetterType,
    table: &tables::LETTER_TYPES,
};

static AUTHENTICITY: ContainmentClassifier = ContainmentClassifier {
    dimension: Dimension::Authenticity,
    table: &tables::AUTHENTICITY,
};

static FUNCTION: ContainmentClassifier = ContainmentClassifier {
    dimension: Dimension::Function,
    table: &tables::FUNCTIONS,
};

static WRITING_SKILL: WritingSkillClassifier = WritingSkillClassifier {
    table: &tables::WRITING_SKILLS,
};

static OUTCOME: OutcomeClassifier = OutcomeClassifier {
    table: &tables::OUTCOMES,
};

/// All classifiers in document emission order
pub fn classifiers() -> [&'static dyn Classifier; 5] {
    [
        &LETTER_TYPE,
        &AUTHENTICITY,
        &WRITING_SKILL,
        &FUNCTION,
        &OUTCOME,
    ]
}

/// Classify a letter across every dimension
pub fn classify_letter(scanner: &TagScanner<'_>) -> Vec<CategoryRef> {
    classifiers()
        .into_iter()
        .flat_map(|classifier| {
            let dimension = classifier.dimension();
            let codes = classifier.classify(scanner.extract(dimension.tag()));
            codes
                .into_iter()
                .map(|code| CategoryRef { dimension, code })
                .collect::<Vec<_>>()
        })
        .collect()
}
