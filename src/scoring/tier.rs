/// Reward tier for a single submission.
///
/// | Tier     | Points |
/// |----------|--------|
/// | Platinum | 6      |
/// | Gold     | 4      |
/// | Silver   | 3      |
/// | Bronze   | 1      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    pub fn points(self) -> u32 {
        match self {
            Tier::Platinum => 6,
            Tier::Gold => 4,
            Tier::Silver => 3,
            Tier::Bronze => 1,
        }
    }

    pub fn from_score(score: u32) -> Option<Tier> {
        match score {
            6 => Some(Tier::Platinum),
            4 => Some(Tier::Gold),
            3 => Some(Tier::Silver),
            1 => Some(Tier::Bronze),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Platinum => "platinum",
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
        }
    }
}

/// Scores a `(stage, status)` pair. First matching rule wins:
///
/// 1. `Needs Review` on anything but `Endorsed` → bronze
/// 2. `Awaiting Feedback` on `Idea` → silver
/// 3. `Awaiting Endorsement` on `Idea`, or `Needs Review` on `Endorsed` → gold
/// 4. any other `Endorsed` → platinum
/// 5. everything else → 0
pub fn score_tier(stage: &str, status: &str) -> u32 {
    let tier = match (stage, status) {
        (s, "Needs Review") if s != "Endorsed" => Some(Tier::Bronze),
        ("Idea", "Awaiting Feedback") => Some(Tier::Silver),
        ("Idea", "Awaiting Endorsement") | ("Endorsed", "Needs Review") => Some(Tier::Gold),
        ("Endorsed", _) => Some(Tier::Platinum),
        _ => None,
    };
    tier.map_or(0, Tier::points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::NO_STATUS;

    #[test]
    fn test_rule_precedence() {
        assert_eq!(score_tier("Endorsed", "Needs Review"), 4);
        assert_eq!(score_tier("Idea", "Needs Review"), 1);
        assert_eq!(score_tier("Endorsed", NO_STATUS), 6);
        assert_eq!(score_tier("Unknown", "Unknown"), 0);
    }

    #[test]
    fn test_each_tier() {
        assert_eq!(score_tier("Draft", "Needs Review"), 1);
        assert_eq!(score_tier("Idea", "Awaiting Feedback"), 3);
        assert_eq!(score_tier("Idea", "Awaiting Endorsement"), 4);
        assert_eq!(score_tier("Endorsed", "Awaiting Feedback"), 6);
    }

    #[test]
    fn test_unmatched_pairs_score_zero() {
        assert_eq!(score_tier("Draft", "Awaiting Feedback"), 0);
        assert_eq!(score_tier("Draft", "Awaiting Endorsement"), 0);
        assert_eq!(score_tier("Idea", NO_STATUS), 0);
        assert_eq!(score_tier("", ""), 0);
        // exact, case-sensitive match
        assert_eq!(score_tier("endorsed", "needs review"), 0);
    }

    #[test]
    fn test_outputs_are_deterministic_and_in_table() {
        let stages = ["Idea", "Endorsed", "Draft", ""];
        let statuses = [
            "Needs Review",
            "Awaiting Feedback",
            "Awaiting Endorsement",
            NO_STATUS,
            "",
        ];
        for stage in stages {
            for status in statuses {
                let score = score_tier(stage, status);
                assert_eq!(score, score_tier(stage, status));
                assert!([0, 1, 3, 4, 6].contains(&score));
            }
        }
    }

    #[test]
    fn test_tier_round_trip_points() {
        for tier in [Tier::Platinum, Tier::Gold, Tier::Silver, Tier::Bronze] {
            assert_eq!(Tier::from_score(tier.points()), Some(tier));
        }
        assert_eq!(Tier::from_score(0), None);
        assert_eq!(Tier::from_score(2), None);
    }
}
