//! Heuristic event classification.
//!
//! Rules are evaluated in table order and the first match wins. Clusters
//! that match nothing get an `unknown` label named after the time of day.

use crate::event_type::EventType;
use crate::types::Confidence;

/// The measurements a cluster is classified on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterProfile {
    /// Minutes between first and last photo, fractions kept.
    pub duration_minutes: f64,

    /// Photos per hour.
    pub photo_density: f64,

    /// Wall-clock hour (0-23) of the first photo, in its own offset.
    pub start_hour: u32,
}

/// Outcome of classifying one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub event_type: EventType,
    pub name: String,
    pub confidence: Confidence,
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub event_type: EventType,
    pub name: &'static str,
    pub confidence: Confidence,
    pub matches: fn(&ClusterProfile) -> bool,
}

impl Rule {
    fn classification(&self) -> Classification {
        Classification {
            event_type: self.event_type,
            name: self.name.to_string(),
            confidence: self.confidence,
        }
    }
}

/// Classification rules in priority order.
pub const RULES: [Rule; 6] = [
    Rule {
        event_type: EventType::Ceremony,
        name: "Ceremony",
        confidence: Confidence::clamped(0.85),
        matches: |c| {
            (20.0..=60.0).contains(&c.duration_minutes)
                && c.photo_density > 15.0
                && (13..=17).contains(&c.start_hour)
        },
    },
    Rule {
        event_type: EventType::Cocktails,
        name: "Cocktail Hour",
        confidence: Confidence::clamped(0.75),
        matches: |c| (45.0..=120.0).contains(&c.duration_minutes) && (16..=19).contains(&c.start_hour),
    },
    Rule {
        event_type: EventType::Dinner,
        name: "Dinner",
        confidence: Confidence::clamped(0.70),
        matches: |c| {
            (60.0..=240.0).contains(&c.duration_minutes)
                && c.photo_density < 30.0
                && (18..=22).contains(&c.start_hour)
        },
    },
    Rule {
        event_type: EventType::FirstDance,
        name: "First Dance",
        confidence: Confidence::clamped(0.65),
        matches: |c| (10.0..=40.0).contains(&c.duration_minutes) && c.photo_density > 20.0,
    },
    Rule {
        event_type: EventType::Party,
        name: "Party Time",
        confidence: Confidence::clamped(0.80),
        matches: |c| c.duration_minutes >= 85.0 && c.photo_density > 12.0 && c.start_hour >= 20,
    },
    Rule {
        event_type: EventType::Prep,
        name: "Getting Ready",
        confidence: Confidence::clamped(0.60),
        matches: |c| (10..=14).contains(&c.start_hour) && c.duration_minutes < 120.0,
    },
];

pub const FALLBACK_CONFIDENCE: Confidence = Confidence::clamped(0.40);

/// Classifies a cluster against [`RULES`], falling back to a time-of-day label.
pub fn classify(profile: &ClusterProfile) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.matches)(profile))
        .map_or_else(
            || Classification {
                event_type: EventType::Unknown,
                name: format!("Event {}", time_of_day_label(profile.start_hour)),
                confidence: FALLBACK_CONFIDENCE,
            },
            Rule::classification,
        )
}

/// Morning \[5,12), Afternoon \[12,17), Evening \[17,21), Night otherwise.
pub const fn time_of_day_label(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Morning",
        12..=16 => "Afternoon",
        17..=20 => "Evening",
        _ => "Night",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(duration_minutes: f64, photo_density: f64, start_hour: u32) -> ClusterProfile {
        ClusterProfile {
            duration_minutes,
            photo_density,
            start_hour,
        }
    }

    fn rule(event_type: EventType) -> Rule {
        *RULES.iter().find(|r| r.event_type == event_type).unwrap()
    }

    #[test]
    fn ceremony_rule_bounds() {
        let ceremony = rule(EventType::Ceremony);
        assert!((ceremony.matches)(&profile(20.0, 15.1, 13)));
        assert!((ceremony.matches)(&profile(60.0, 40.0, 17)));
        assert!(!(ceremony.matches)(&profile(61.0, 40.0, 14)));
        assert!(!(ceremony.matches)(&profile(30.0, 15.0, 14)));
        assert!(!(ceremony.matches)(&profile(30.0, 40.0, 18)));
    }

    #[test]
    fn partial_minutes_count_against_upper_bounds() {
        let ceremony = rule(EventType::Ceremony);
        assert!(!(ceremony.matches)(&profile(60.5, 40.0, 14)));
        assert!(!(rule(EventType::FirstDance).matches)(&profile(40.2, 50.0, 21)));
        assert!((rule(EventType::Prep).matches)(&profile(119.9, 0.0, 12)));
        assert!(!(rule(EventType::Dinner).matches)(&profile(59.9, 5.0, 19)));
    }

    #[test]
    fn cocktails_rule_bounds() {
        let cocktails = rule(EventType::Cocktails);
        assert!((cocktails.matches)(&profile(45.0, 1.0, 16)));
        assert!((cocktails.matches)(&profile(120.0, 100.0, 19)));
        assert!(!(cocktails.matches)(&profile(44.0, 10.0, 17)));
        assert!(!(cocktails.matches)(&profile(90.0, 10.0, 20)));
    }

    #[test]
    fn dinner_rule_bounds() {
        let dinner = rule(EventType::Dinner);
        assert!((dinner.matches)(&profile(60.0, 29.9, 18)));
        assert!((dinner.matches)(&profile(240.0, 5.0, 22)));
        assert!(!(dinner.matches)(&profile(90.0, 30.0, 19)));
        assert!(!(dinner.matches)(&profile(241.0, 5.0, 19)));
    }

    #[test]
    fn first_dance_rule_ignores_hour() {
        let first_dance = rule(EventType::FirstDance);
        assert!((first_dance.matches)(&profile(10.0, 20.5, 3)));
        assert!((first_dance.matches)(&profile(40.0, 50.0, 23)));
        assert!(!(first_dance.matches)(&profile(41.0, 50.0, 21)));
        assert!(!(first_dance.matches)(&profile(20.0, 20.0, 21)));
    }

    #[test]
    fn party_rule_bounds() {
        let party = rule(EventType::Party);
        assert!((party.matches)(&profile(85.0, 12.1, 20)));
        assert!((party.matches)(&profile(300.0, 50.0, 23)));
        assert!(!(party.matches)(&profile(84.0, 50.0, 21)));
        assert!(!(party.matches)(&profile(120.0, 12.0, 21)));
        assert!(!(party.matches)(&profile(120.0, 50.0, 19)));
    }

    #[test]
    fn prep_rule_bounds() {
        let prep = rule(EventType::Prep);
        assert!((prep.matches)(&profile(0.0, 0.0, 10)));
        assert!((prep.matches)(&profile(119.0, 0.0, 14)));
        assert!(!(prep.matches)(&profile(120.0, 0.0, 12)));
        assert!(!(prep.matches)(&profile(30.0, 0.0, 9)));
    }

    #[test]
    fn first_match_wins() {
        // Matches ceremony, first_dance and prep; ceremony is listed first.
        let result = classify(&profile(30.0, 40.0, 14));
        assert_eq!(result.event_type, EventType::Ceremony);
        assert_eq!(result.name, "Ceremony");
        assert_eq!(result.confidence, Confidence::clamped(0.85));

        // Matches cocktails and dinner; cocktails wins.
        let result = classify(&profile(90.0, 10.0, 18));
        assert_eq!(result.event_type, EventType::Cocktails);
        assert_eq!(result.name, "Cocktail Hour");
    }

    #[test]
    fn late_long_dense_cluster_is_a_party() {
        let result = classify(&profile(180.0, 35.0, 21));
        assert_eq!(result.event_type, EventType::Party);
        assert_eq!(result.name, "Party Time");
        assert_eq!(result.confidence, Confidence::clamped(0.80));
    }

    #[test]
    fn fallback_uses_time_of_day() {
        let morning = classify(&profile(300.0, 1.0, 7));
        assert_eq!(morning.event_type, EventType::Unknown);
        assert_eq!(morning.name, "Event Morning");
        assert_eq!(morning.confidence, FALLBACK_CONFIDENCE);

        assert_eq!(classify(&profile(300.0, 1.0, 15)).name, "Event Afternoon");
        assert_eq!(classify(&profile(5.0, 1.0, 17)).name, "Event Evening");
        assert_eq!(classify(&profile(5.0, 1.0, 2)).name, "Event Night");
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(time_of_day_label(4), "Night");
        assert_eq!(time_of_day_label(5), "Morning");
        assert_eq!(time_of_day_label(12), "Afternoon");
        assert_eq!(time_of_day_label(17), "Evening");
        assert_eq!(time_of_day_label(21), "Night");
    }

    #[test]
    fn every_rule_has_a_distinct_type() {
        let mut types: Vec<_> = RULES.iter().map(|r| r.event_type.as_str()).collect();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), RULES.len());
        assert!(!types.contains(&EventType::Unknown.as_str()));
    }
}
