//! Outcome (`CO`) classification with general/specific keys
//!
//! Content is a comma-separated list. A component such as `relief: money`
//! can match the specific key `relief: money` or fall back to the general
//! key `relief`. Coverage is tracked per component, so a specific code only
//! suppresses the general code of the component it came from. Every
//! component emits its own code, so repeated components repeat codes.

use super::{Classifier, Dimension, RuleTable};

#[derive(Debug)]
pub struct OutcomeClassifier {
    pub table: &'static RuleTable,
}

/// General part of a key or component: text before the first colon
fn general_part(text: &str) -> &str {
    text.split_once(':').map_or(text, |(head, _)| head).trim()
}

impl Classifier for OutcomeClassifier {
    fn dimension(&self) -> Dimension {
        Dimension::Outcome
    }

    fn classify(&self, content: &str) -> Vec<&'static str> {
        let normalized = self.table.normalize(content);
        let components: Vec<&str> = normalized
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        let mut codes = Vec::new();
        let mut covered: Vec<Option<&str>> = Vec::with_capacity(components.len());

        // Specific keys first
        for component in &components {
            let specific = self
                .table
                .best_match(component)
                .filter(|rule| rule.phrase.contains(':'));
            match specific {
                Some(rule) => {
                    codes.push(rule.code);
                    covered.push(Some(general_part(rule.phrase)));
                }
                None => covered.push(None),
            }
        }

        // General fallback for components their specific key did not cover
        for (component, covered) in components.iter().zip(&covered) {
            let candidate = general_part(component);
            if *covered == Some(candidate) {
                continue;
            }
            if let Some(code) = self.table.code_for(candidate) {
                codes.push(code);
            }
        }

        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify::tables::OUTCOMES;

    fn classify(content: &str) -> Vec<&'static str> {
        let classifier = OutcomeClassifier { table: &OUTCOMES };
        classifier.classify(content)
    }

    #[test]
    fn test_specific_suppresses_own_general() {
        assert_eq!(classify("relief: money"), vec!["gen:CO_RELIEF_MONEY"]);
    }

    #[test]
    fn test_separate_general_component_still_fires() {
        assert_eq!(
            classify("relief: money, relief"),
            vec!["gen:CO_RELIEF_MONEY", "gen:CO_RELIEF"]
        );
    }

    #[test]
    fn test_general_only() {
        assert_eq!(classify("relief"), vec!["gen:CO_RELIEF"]);
        assert_eq!(classify("Removal"), vec!["gen:CO_REMOVAL"]);
    }

    #[test]
    fn test_unknown_specific_falls_back_to_general() {
        assert_eq!(classify("relief: blankets"), vec!["gen:CO_RELIEF"]);
    }

    #[test]
    fn test_case_and_spacing_are_normalized() {
        assert_eq!(
            classify("  Relief: Money ,Employment: Work"),
            vec!["gen:CO_RELIEF_MONEY", "gen:CO_EMPLOYMENT_WORK"]
        );
    }

    #[test]
    fn test_multiple_specifics_keep_order() {
        assert_eq!(
            classify("relief: rent, relief: fuel, settlement"),
            vec!["gen:CO_RELIEF_RENT", "gen:CO_RELIEF_FUEL", "gen:CO_SETTLEMENT"]
        );
    }

    #[test]
    fn test_repeated_components_repeat_codes() {
        assert_eq!(
            classify("relief, relief"),
            vec!["gen:CO_RELIEF", "gen:CO_RELIEF"]
        );
        assert_eq!(
            classify("relief: money, relief: money"),
            vec!["gen:CO_RELIEF_MONEY", "gen:CO_RELIEF_MONEY"]
        );
    }

    #[test]
    fn test_unrecognized_and_empty() {
        assert!(classify("").is_empty());
        assert!(classify(", ,").is_empty());
        assert!(classify("a pair of boots").is_empty());
    }
}
