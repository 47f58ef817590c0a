//! End-of-game scoring and ranking.

use crate::config::ScoreWeights;
use crate::player::Player;

/// Scores a player from their final balance and pet roster.
///
/// `balance·w_balance + Σ_alive (health·w_health + happiness·w_happiness) − Σ_dead penalty`
///
/// Pure: no side effects, no randomness. Arithmetic saturates at the `i64`
/// bounds, so oversized weights clamp instead of overflowing.
pub fn calculate_score(player: &Player, weights: &ScoreWeights) -> i64 {
    let balance = player.balance().saturating_mul(weights.balance);
    player.pets().iter().fold(balance, |score, pet| {
        if pet.is_dead() {
            return score.saturating_sub(weights.dead_pet_penalty);
        }
        let vitals = pet.vitals();
        score
            .saturating_add(i64::from(vitals.health()).saturating_mul(weights.health))
            .saturating_add(i64::from(vitals.happiness()).saturating_mul(weights.happiness))
    })
}

/// A player's place in the final ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Standing<'a> {
    /// 1-based position.
    pub rank: usize,
    pub player: &'a Player,
    pub score: i64,
}

/// Orders players by descending score. Ties keep their original order.
pub fn rank_players<'a>(players: &'a [Player], weights: &ScoreWeights) -> Vec<Standing<'a>> {
    let mut scored: Vec<(&Player, i64)> = players
        .iter()
        .map(|player| (player, calculate_score(player, weights)))
        .collect();
    // sort_by is stable
    scored.sort_by(|left, right| right.1.cmp(&left.1));
    scored
        .into_iter()
        .enumerate()
        .map(|(index, (player, score))| Standing {
            rank: index + 1,
            player,
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::pet::{Gender, Pet, Species};
    use crate::stats::Vital;

    fn player(name: &str, balance: i64) -> Player {
        Player::new(name).with_ledger(Ledger::with_balance(balance).unwrap())
    }

    #[test]
    fn balance_only() {
        assert_eq!(calculate_score(&player("A", 120), &ScoreWeights::default()), 120);
    }

    #[test]
    fn alive_pets_add_and_dead_pets_subtract() {
        let mut healthy = Pet::new("Fluffy", Species::Alpaca, Gender::Female);
        healthy.vitals_mut().increase(Vital::Happiness, -40);
        let mut dead = Pet::new("Gone", Species::Horse, Gender::Male);
        dead.die();
        let player = player("A", 10).with_pets([healthy, dead]);

        // 10 + (100 + 60) − 50
        assert_eq!(calculate_score(&player, &ScoreWeights::default()), 120);
    }

    #[test]
    fn oversized_weights_saturate() {
        let mut dead = Pet::new("Gone", Species::Horse, Gender::Male);
        dead.die();
        let alive = Pet::new("Fluffy", Species::Alpaca, Gender::Female);

        let huge = ScoreWeights {
            balance: i64::MAX,
            health: i64::MAX,
            happiness: i64::MAX,
            dead_pet_penalty: 0,
        };
        let rich = player("A", 10).with_pets([alive.clone(), alive]);
        assert_eq!(calculate_score(&rich, &huge), i64::MAX);

        let harsh = ScoreWeights {
            balance: 0,
            dead_pet_penalty: i64::MAX,
            ..ScoreWeights::default()
        };
        let mourning = player("B", 0).with_pets([dead.clone(), dead]);
        assert_eq!(calculate_score(&mourning, &harsh), i64::MIN);
    }

    #[test]
    fn weights_are_applied() {
        let weights = ScoreWeights {
            balance: 2,
            health: 0,
            happiness: 3,
            dead_pet_penalty: 0,
        };
        let player = player("A", 7).with_pets([Pet::new("Kit", Species::Cat, Gender::Male)]);
        assert_eq!(calculate_score(&player, &weights), 14 + 300);
    }

    #[test]
    fn scoring_is_repeatable() {
        let player = player("A", 33).with_pets([Pet::new("Kit", Species::Cat, Gender::Male)]);
        let weights = ScoreWeights::default();
        assert_eq!(
            calculate_score(&player, &weights),
            calculate_score(&player, &weights)
        );
    }

    #[test]
    fn ties_keep_creation_order() {
        let players = vec![player("A", 120), player("B", 120)];
        let ranking = rank_players(&players, &ScoreWeights::default());
        let names: Vec<&str> = ranking.iter().map(|s| s.player.name()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[1].rank, 2);
    }

    #[test]
    fn higher_scores_rank_first() {
        let players = vec![player("A", 5), player("B", 90), player("C", 40)];
        let ranking = rank_players(&players, &ScoreWeights::default());
        let names: Vec<&str> = ranking.iter().map(|s| s.player.name()).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert_eq!(ranking[0].score, 90);
    }
}
