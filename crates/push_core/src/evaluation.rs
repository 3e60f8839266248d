//! Evaluation pass: run every push against one system profile

use crate::profile::SystemProfile;
use crate::push::Push;

/// Output line printed when no push matches
pub const NO_MATCH_SENTINEL: &str = "-1";

/// Result of evaluating a batch of pushes, matches kept in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: Vec<String>,
    pub total: usize,
}

impl Evaluation {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Output lines: matched texts, or the sentinel alone when nothing matched
    pub fn lines(&self) -> Vec<&str> {
        if self.matched.is_empty() {
            vec![NO_MATCH_SENTINEL]
        } else {
            self.matched.iter().map(String::as_str).collect()
        }
    }
}

pub fn evaluate<'a, I>(system: &SystemProfile, pushes: I) -> Evaluation
where
    I: IntoIterator<Item = &'a Push>,
{
    let mut evaluation = Evaluation::default();
    for push in pushes {
        evaluation.total += 1;
        let hit = push.matches(system);
        log::debug!("{} '{}' -> {}", push.type_name(), push.text, hit);
        if hit {
            evaluation.matched.push(push.text.clone());
        }
    }
    log::info!("{} of {} pushes matched", evaluation.matched_count(), evaluation.total);
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Location;
    use crate::push::{GenderPush, Targeting, TechPush};

    fn system() -> SystemProfile {
        SystemProfile {
            time: 0,
            age: 0,
            gender: "F".to_string(),
            os_version: 1,
            location: Location::default(),
        }
    }

    fn tech(text: &str, max: i32) -> Push {
        Push::new(text, Targeting::TechPush(TechPush { max_os_version: max }))
    }

    #[test]
    fn test_no_match_yields_sentinel() {
        let pushes = vec![tech("old", 0)];
        let result = evaluate(&system(), &pushes);
        assert!(result.is_empty());
        assert_eq!(result.total, 1);
        assert_eq!(result.lines(), vec!["-1"]);
    }

    #[test]
    fn test_empty_batch_yields_sentinel() {
        let result = evaluate(&system(), &Vec::<Push>::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.lines(), vec![NO_MATCH_SENTINEL]);
    }

    #[test]
    fn test_matches_keep_input_order() {
        let pushes = vec![
            tech("first", 5),
            tech("skipped", 0),
            Push::new("second", Targeting::GenderPush(GenderPush { gender: "F".to_string() })),
            tech("third", 1),
        ];
        let result = evaluate(&system(), &pushes);
        assert_eq!(result.lines(), vec!["first", "second", "third"]);
        assert_eq!(result.matched_count(), 3);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn test_duplicate_texts_are_all_reported() {
        let pushes = vec![tech("same", 5), tech("same", 5)];
        assert_eq!(evaluate(&system(), &pushes).lines(), vec!["same", "same"]);
    }
}
