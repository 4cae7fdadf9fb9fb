//! Roll generators and query dispatch.
//!
//! Each generator makes exactly one uniform draw per produced outcome.
//! Click-to-roll prompts make no draw at all: the deferred roll belongs to
//! a later trigger outside this crate. Validation failures (oversized
//! range, empty label set) become usage outcomes, never errors.

use rand::Rng;
use rand::rngs::StdRng;

use crate::outcome::RollOutcome;
use crate::query::RollRequest;
use crate::settings::{RollMode, RollSettings, RollType};

/// Largest allowed distance between range bounds.
///
/// Caps the cost of the range draw; anything wider gets the usage card.
pub const MAX_RANGE_SPAN: u64 = 10_000_000;

/// Answer yes or no using the configured labels.
pub fn roll_yes_no(settings: &RollSettings, rng: &mut StdRng) -> RollOutcome {
    match settings.roll_mode {
        RollMode::ClickToRoll => RollOutcome::prompt(
            "Roll yes/no",
            format!(
                "Press Enter to roll: {} / {}",
                settings.yes_label, settings.no_label
            ),
        ),
        RollMode::Instant => {
            let answer = if rng.random::<bool>() {
                &settings.yes_label
            } else {
                &settings.no_label
            };
            RollOutcome::actionable(answer.clone(), "Random yes/no answer")
        }
    }
}

/// Roll a number between the given bounds, inclusive, in either order.
pub fn roll_range(from_val: i64, to_val: i64, mode: RollMode, rng: &mut StdRng) -> RollOutcome {
    let start = from_val.min(to_val);
    let end = from_val.max(to_val);

    // abs_diff keeps the guard overflow-safe at the i64 extremes.
    if end.abs_diff(start) > MAX_RANGE_SPAN {
        return RollOutcome::usage(Some(
            "Range too large. Maximum range size is 10,000,000.",
        ));
    }

    match mode {
        RollMode::ClickToRoll => RollOutcome::prompt(
            format!("Roll {start} to {end}"),
            format!("Press Enter to roll a number between {start} and {end}"),
        ),
        RollMode::Instant => {
            let result = rng.random_range(start..=end);
            RollOutcome::actionable(
                result.to_string(),
                format!("Random number between {start} and {end}"),
            )
        }
    }
}

/// Pick one label from the given set.
pub fn roll_labels(labels: &[String], mode: RollMode, rng: &mut StdRng) -> RollOutcome {
    if labels.is_empty() {
        return RollOutcome::usage(Some(
            "No labels to pick from. Configure custom labels or pass them in the query.",
        ));
    }

    let candidates = labels.join(", ");
    match mode {
        RollMode::ClickToRoll => RollOutcome::prompt(
            "Roll a random pick",
            format!("Press Enter to pick one of: {candidates}"),
        ),
        RollMode::Instant => {
            let choice = &labels[rng.random_range(0..labels.len())];
            RollOutcome::actionable(choice.clone(), format!("Random pick from: {candidates}"))
        }
    }
}

/// Interpret a query against the effective settings.
///
/// Always returns a one-element list in normal operation; the single entry
/// may be a roll result, a click-to-roll prompt, or the usage card.
pub fn handle_query(query: &str, settings: &RollSettings, rng: &mut StdRng) -> Vec<RollOutcome> {
    let outcome = match RollRequest::classify(query) {
        RollRequest::Default => match settings.default_roll_type {
            RollType::YesNo => roll_yes_no(settings, rng),
            RollType::CustomLabel => {
                roll_labels(&settings.custom_label_list(), settings.roll_mode, rng)
            }
            RollType::Number => roll_range(
                settings.default_from,
                settings.default_to,
                settings.roll_mode,
                rng,
            ),
        },
        RollRequest::SingleInteger(n) => roll_range(1, n, settings.roll_mode, rng),
        RollRequest::IntegerPair(a, b) => roll_range(a, b, settings.roll_mode, rng),
        RollRequest::Labels(labels) => roll_labels(&labels, settings.roll_mode, rng),
    };
    vec![outcome]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::USAGE_TITLE;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn range_draw_stays_in_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let outcome = roll_range(1, 6, RollMode::Instant, &mut rng);
            let value: i64 = outcome.title.parse().unwrap();
            assert!((1..=6).contains(&value));
            assert_eq!(outcome.subtitle, "Random number between 1 and 6");
        }
    }

    #[test]
    fn range_bounds_are_order_normalized() {
        let mut rng = rng();
        for _ in 0..100 {
            let outcome = roll_range(10, 5, RollMode::Instant, &mut rng);
            let value: i64 = outcome.title.parse().unwrap();
            assert!((5..=10).contains(&value));
            assert_eq!(outcome.subtitle, "Random number between 5 and 10");
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let mut rng = rng();
        let outcome = roll_range(5, 5, RollMode::Instant, &mut rng);
        assert_eq!(outcome.title, "5");
    }

    #[test]
    fn negative_range() {
        let mut rng = rng();
        let outcome = roll_range(-10, -5, RollMode::Instant, &mut rng);
        let value: i64 = outcome.title.parse().unwrap();
        assert!((-10..=-5).contains(&value));
    }

    #[test]
    fn oversized_range_is_usage() {
        let mut rng = rng();
        let outcome = roll_range(0, 10_000_001, RollMode::Instant, &mut rng);
        assert_eq!(outcome.title, USAGE_TITLE);
        assert!(outcome.subtitle.contains("Range too large"));
        assert!(!outcome.is_actionable());
    }

    #[test]
    fn widest_allowed_range_still_rolls() {
        let mut rng = rng();
        let outcome = roll_range(0, 10_000_000, RollMode::Instant, &mut rng);
        let value: i64 = outcome.title.parse().unwrap();
        assert!((0..=10_000_000).contains(&value));
    }

    #[test]
    fn extreme_bounds_do_not_overflow_the_guard() {
        let mut rng = rng();
        let outcome = roll_range(i64::MIN, i64::MAX, RollMode::Instant, &mut rng);
        assert_eq!(outcome.title, USAGE_TITLE);
    }

    #[test]
    fn range_click_mode_prompts_without_drawing() {
        let mut rng = rng();
        let mut control = rng.clone();

        let outcome = roll_range(5, 10, RollMode::ClickToRoll, &mut rng);
        assert_eq!(outcome.title, "Roll 5 to 10");
        assert_eq!(
            outcome.subtitle,
            "Press Enter to roll a number between 5 and 10"
        );
        assert!(!outcome.is_actionable());

        // The prompt consumed no randomness.
        assert_eq!(
            rng.random_range(0..1_000_000),
            control.random_range(0..1_000_000)
        );
    }

    #[test]
    fn yes_no_uses_configured_labels() {
        let settings = RollSettings::default().with_yes_no("Aye", "Nay");
        let mut rng = rng();
        for _ in 0..50 {
            let outcome = roll_yes_no(&settings, &mut rng);
            assert!(outcome.title == "Aye" || outcome.title == "Nay");
            assert_eq!(outcome.subtitle, "Random yes/no answer");
            assert!(outcome.is_actionable());
        }
    }

    #[test]
    fn yes_no_click_mode_lists_both_labels() {
        let settings = RollSettings::default()
            .with_yes_no("Aye", "Nay")
            .with_roll_mode(RollMode::ClickToRoll);
        let mut rng = rng();
        let mut control = rng.clone();

        let outcome = roll_yes_no(&settings, &mut rng);
        assert_eq!(outcome.title, "Roll yes/no");
        assert!(outcome.subtitle.contains("Aye"));
        assert!(outcome.subtitle.contains("Nay"));
        assert!(!outcome.is_actionable());
        assert_eq!(
            rng.random_range(0..1_000_000),
            control.random_range(0..1_000_000)
        );
    }

    #[test]
    fn label_draw_is_a_member() {
        let set = labels(&["apple", "banana", "cherry"]);
        let mut rng = rng();
        for _ in 0..100 {
            let outcome = roll_labels(&set, RollMode::Instant, &mut rng);
            assert!(set.contains(&outcome.title));
            assert_eq!(outcome.subtitle, "Random pick from: apple, banana, cherry");
        }
    }

    #[test]
    fn single_label_always_wins() {
        let set = labels(&["only"]);
        let mut rng = rng();
        let outcome = roll_labels(&set, RollMode::Instant, &mut rng);
        assert_eq!(outcome.title, "only");
    }

    #[test]
    fn empty_label_set_is_usage() {
        let mut rng = rng();
        let outcome = roll_labels(&[], RollMode::Instant, &mut rng);
        assert_eq!(outcome.title, USAGE_TITLE);
        assert!(outcome.subtitle.contains("No labels"));
    }

    #[test]
    fn labels_click_mode_lists_candidates() {
        let set = labels(&["red", "green"]);
        let mut rng = rng();
        let outcome = roll_labels(&set, RollMode::ClickToRoll, &mut rng);
        assert_eq!(outcome.title, "Roll a random pick");
        assert_eq!(outcome.subtitle, "Press Enter to pick one of: red, green");
        assert!(!outcome.is_actionable());
    }

    #[test]
    fn empty_query_uses_default_number_range() {
        let settings = RollSettings::default();
        let mut rng = rng();
        for _ in 0..50 {
            let outcomes = handle_query("", &settings, &mut rng);
            assert_eq!(outcomes.len(), 1);
            let value: i64 = outcomes[0].title.parse().unwrap();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn empty_query_with_yes_no_default() {
        let settings = RollSettings::default().with_roll_type(RollType::YesNo);
        let mut rng = rng();
        let outcomes = handle_query("", &settings, &mut rng);
        assert!(outcomes[0].title == "Yes" || outcomes[0].title == "No");
    }

    #[test]
    fn empty_query_with_custom_label_default() {
        let settings = RollSettings::default()
            .with_roll_type(RollType::CustomLabel)
            .with_custom_labels("coffee tea");
        let mut rng = rng();
        let outcomes = handle_query("", &settings, &mut rng);
        assert!(outcomes[0].title == "coffee" || outcomes[0].title == "tea");
    }

    #[test]
    fn empty_query_with_unconfigured_labels_is_usage() {
        let settings = RollSettings::default().with_roll_type(RollType::CustomLabel);
        let mut rng = rng();
        let outcomes = handle_query("", &settings, &mut rng);
        assert_eq!(outcomes[0].title, USAGE_TITLE);
    }

    #[test]
    fn single_token_rolls_one_to_n() {
        let settings = RollSettings::default();
        let mut rng = rng();
        for _ in 0..100 {
            let outcomes = handle_query("20", &settings, &mut rng);
            let value: i64 = outcomes[0].title.parse().unwrap();
            assert!((1..=20).contains(&value));
        }
    }

    #[test]
    fn two_tokens_roll_between_them() {
        let settings = RollSettings::default();
        let mut rng = rng();
        for _ in 0..100 {
            let outcomes = handle_query("5 10", &settings, &mut rng);
            let value: i64 = outcomes[0].title.parse().unwrap();
            assert!((5..=10).contains(&value));
        }
    }

    #[test]
    fn non_numeric_single_token_becomes_its_own_label() {
        let settings = RollSettings::default();
        let mut rng = rng();
        let outcomes = handle_query("abc", &settings, &mut rng);
        assert_eq!(outcomes[0].title, "abc");
        assert!(outcomes[0].is_actionable());
    }

    #[test]
    fn many_tokens_pick_a_label() {
        let settings = RollSettings::default();
        let mut rng = rng();
        let outcomes = handle_query("apple banana cherry", &settings, &mut rng);
        assert!(["apple", "banana", "cherry"].contains(&outcomes[0].title.as_str()));
    }

    #[test]
    fn seeded_rolls_are_deterministic() {
        let settings = RollSettings::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            handle_query("1 100", &settings, &mut a),
            handle_query("1 100", &settings, &mut b)
        );
    }
}
