//! Plant growth stages, level derivation, and booster effects.
//!
//! A plant's XP is the source of truth; its level is always re-derived from
//! XP against the owning template's stage thresholds after any effect is
//! applied. Thresholds are a per-template, monotonically increasing mapping
//! from stage to minimum XP, with the seed stage fixed at 0.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Growth stage of a plant. The discriminant is the visible level (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantStage {
    Seed = 1,
    Sprout = 2,
    Sapling = 3,
    Mature = 4,
    Blooming = 5,
}

impl PlantStage {
    /// All stages in ascending order.
    pub const ALL: [PlantStage; 5] = [
        Self::Seed,
        Self::Sprout,
        Self::Sapling,
        Self::Mature,
        Self::Blooming,
    ];

    /// The visible level for this stage.
    pub fn level(self) -> i32 {
        self as i32
    }
}

/// Per-template minimum XP required to reach each non-seed stage.
///
/// Seed is implicitly 0. Values must be monotonically increasing; the
/// catalog seeding is responsible for that, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageThresholds {
    pub sprout: i64,
    pub sapling: i64,
    pub mature: i64,
    pub blooming: i64,
}

impl StageThresholds {
    /// Minimum XP for the given stage.
    pub fn min_xp(&self, stage: PlantStage) -> i64 {
        match stage {
            PlantStage::Seed => 0,
            PlantStage::Sprout => self.sprout,
            PlantStage::Sapling => self.sapling,
            PlantStage::Mature => self.mature,
            PlantStage::Blooming => self.blooming,
        }
    }
}

/// Derive the level for `xp`: the highest stage whose threshold is <= xp.
pub fn level_for_xp(xp: i64, thresholds: &StageThresholds) -> i32 {
    PlantStage::ALL
        .iter()
        .rev()
        .find(|stage| thresholds.min_xp(**stage) <= xp)
        .map(|stage| stage.level())
        .unwrap_or(PlantStage::Seed.level())
}

// ---------------------------------------------------------------------------
// Booster effects
// ---------------------------------------------------------------------------

/// Effect of a booster, parsed from the catalog's effect string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoosterEffect {
    /// Add a flat amount of XP.
    AddXp(i64),
    /// Multiply XP by `1 + pct/100`, rounding down.
    AddPercentXp(i64),
    /// Set XP to the target stage's threshold.
    GoToStage(PlantStage),
}

impl BoosterEffect {
    /// Parse a catalog effect string (e.g. `"add25Xp"`, `"add15PercentXp"`,
    /// `"goToStage4"`). Returns `None` for unknown effects.
    pub fn parse(effect: &str) -> Option<Self> {
        match effect {
            "add10Xp" => Some(Self::AddXp(10)),
            "add25Xp" => Some(Self::AddXp(25)),
            "add30Xp" => Some(Self::AddXp(30)),
            "add50Xp" => Some(Self::AddXp(50)),
            "add15PercentXp" => Some(Self::AddPercentXp(15)),
            "add30PercentXp" => Some(Self::AddPercentXp(30)),
            "add50PercentXp" => Some(Self::AddPercentXp(50)),
            "goToStage3" => Some(Self::GoToStage(PlantStage::Sapling)),
            "goToStage4" => Some(Self::GoToStage(PlantStage::Mature)),
            "goToStage5" => Some(Self::GoToStage(PlantStage::Blooming)),
            _ => None,
        }
    }
}

/// Apply a booster effect string to a plant's XP.
///
/// Returns the new `(xp, level)` pair, with the level re-derived from the
/// transformed XP. An unknown effect string is a validation error and
/// applies nothing.
pub fn apply_booster(
    effect: &str,
    xp: i64,
    thresholds: &StageThresholds,
) -> Result<(i64, i32), CoreError> {
    let parsed = BoosterEffect::parse(effect)
        .ok_or_else(|| CoreError::Validation(format!("Unknown booster effect: {effect}")))?;

    let new_xp = match parsed {
        BoosterEffect::AddXp(amount) => xp + amount,
        // Integer arithmetic: xp * (100 + pct) / 100 == floor(xp * (1 + pct/100)).
        BoosterEffect::AddPercentXp(pct) => xp * (100 + pct) / 100,
        BoosterEffect::GoToStage(stage) => thresholds.min_xp(stage),
    };

    Ok((new_xp, level_for_xp(new_xp, thresholds)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const THRESHOLDS: StageThresholds = StageThresholds {
        sprout: 50,
        sapling: 120,
        mature: 250,
        blooming: 500,
    };

    // -- level_for_xp --

    #[test]
    fn zero_xp_is_seed_level() {
        assert_eq!(level_for_xp(0, &THRESHOLDS), 1);
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(level_for_xp(49, &THRESHOLDS), 1);
        assert_eq!(level_for_xp(50, &THRESHOLDS), 2);
        assert_eq!(level_for_xp(120, &THRESHOLDS), 3);
        assert_eq!(level_for_xp(250, &THRESHOLDS), 4);
        assert_eq!(level_for_xp(500, &THRESHOLDS), 5);
        assert_eq!(level_for_xp(10_000, &THRESHOLDS), 5);
    }

    #[test]
    fn level_is_a_pure_function_of_xp_and_thresholds() {
        // Regardless of which booster path produced the XP, identical
        // (xp, thresholds) always yields an identical level.
        let (xp_a, level_a) = apply_booster("add25Xp", 100, &THRESHOLDS).unwrap();
        let (xp_b, level_b) = apply_booster("add10Xp", 115, &THRESHOLDS).unwrap();
        assert_eq!(xp_a, xp_b);
        assert_eq!(level_a, level_b);
    }

    // -- flat effects --

    #[test]
    fn flat_effects_add_their_constant() {
        for (effect, amount) in [
            ("add10Xp", 10),
            ("add25Xp", 25),
            ("add30Xp", 30),
            ("add50Xp", 50),
        ] {
            let (xp, _) = apply_booster(effect, 100, &THRESHOLDS).unwrap();
            assert_eq!(xp, 100 + amount, "{effect}");
        }
    }

    #[test]
    fn flat_effect_can_advance_level() {
        let (xp, level) = apply_booster("add50Xp", 100, &THRESHOLDS).unwrap();
        assert_eq!(xp, 150);
        assert_eq!(level, 3);
    }

    // -- percentage effects --

    #[test]
    fn fifteen_percent_of_100_is_exactly_115() {
        let (xp, _) = apply_booster("add15PercentXp", 100, &THRESHOLDS).unwrap();
        assert_eq!(xp, 115);
    }

    #[test]
    fn percentage_effects_round_down() {
        // floor(33 * 1.15) = 37, floor(33 * 1.30) = 42, floor(33 * 1.50) = 49
        for (effect, expected) in [
            ("add15PercentXp", 37),
            ("add30PercentXp", 42),
            ("add50PercentXp", 49),
        ] {
            let (xp, _) = apply_booster(effect, 33, &THRESHOLDS).unwrap();
            assert_eq!(xp, expected, "{effect}");
        }
    }

    #[test]
    fn percentage_effects_are_order_sensitive() {
        let (once, _) = apply_booster("add15PercentXp", 100, &THRESHOLDS).unwrap();
        let (twice, _) = apply_booster("add15PercentXp", once, &THRESHOLDS).unwrap();
        let (fifty, _) = apply_booster("add30PercentXp", 100, &THRESHOLDS).unwrap();
        // 100 -> 115 -> 132, not 100 -> 130 -> ...
        assert_eq!(twice, 132);
        assert_eq!(fifty, 130);
    }

    // -- stage jumps --

    #[test]
    fn stage_jump_sets_xp_to_target_threshold() {
        let (xp, level) = apply_booster("goToStage4", 10, &THRESHOLDS).unwrap();
        assert_eq!(xp, 250);
        assert_eq!(level, 4);
    }

    #[test]
    fn stage_jump_to_blooming() {
        let (xp, level) = apply_booster("goToStage5", 0, &THRESHOLDS).unwrap();
        assert_eq!(xp, 500);
        assert_eq!(level, 5);
    }

    #[test]
    fn stage_jump_below_current_xp_can_lower_level() {
        // XP is the source of truth: a jump target below current XP moves
        // the plant backwards. Content, not the engine, guards against this.
        let (xp, level) = apply_booster("goToStage3", 600, &THRESHOLDS).unwrap();
        assert_eq!(xp, 120);
        assert_eq!(level, 3);
    }

    // -- unknown effects --

    #[test]
    fn unknown_effect_is_rejected() {
        let err = apply_booster("add999Xp", 100, &THRESHOLDS).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }
}
