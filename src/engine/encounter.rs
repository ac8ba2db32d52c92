//! Wild encounter generation: rarity-tiered weighted sampling plus the rare
//! out-of-pool mythical roll.

use crate::catalog::{self, FINAL_POOL, MYTHICAL_SPECIES, WILD_POOL};
use crate::engine::progression::Progression;
use crate::engine::state::{Difficulty, TurnRng};
use schema::Species;

/// Chance in 100 that a normal encounter is the mythical species instead of
/// a tier-sampled one.
pub const MYTHICAL_RATE: u8 = 2;

/// Rarity tier of a species within a pool, derived from its attack stat
/// relative to the strongest member.
fn tier_of(attack: u8, max_attack: u8) -> usize {
    let ratio = attack as f32 / max_attack as f32;
    if ratio <= 0.30 {
        0 // very common
    } else if ratio <= 0.50 {
        1 // common
    } else if ratio <= 0.70 {
        2 // uncommon
    } else if ratio <= 0.85 {
        3 // rare
    } else {
        4 // very rare
    }
}

fn bucket_pool(pool: &[Species]) -> [Vec<Species>; 5] {
    let max_attack = pool
        .iter()
        .map(|&s| catalog::get_species_data(s).base_stats.attack)
        .max()
        .expect("pool is never empty");

    let mut tiers: [Vec<Species>; 5] = Default::default();
    for &species in pool {
        let attack = catalog::get_species_data(species).base_stats.attack;
        tiers[tier_of(attack, max_attack)].push(species);
    }
    tiers
}

/// Weighted-rarity sample from a pool. Consumes one outcome for the tier
/// roll and one for the pick within the tier.
pub fn sample_pool(pool: &[Species], difficulty: Difficulty, rng: &mut TurnRng) -> Species {
    let tiers = bucket_pool(pool);
    let rates = difficulty.encounter_rates();
    let roll = rng.next_outcome("encounter tier");

    let mut threshold = 0u8;
    let mut selected = 4;
    for (tier, &rate) in rates.iter().enumerate() {
        threshold += rate;
        if roll < threshold {
            selected = tier;
            break;
        }
    }

    // Empty tiers fall back to a neighbor, then to the whole pool.
    let chosen: &[Species] = match selected {
        0 if tiers[0].is_empty() => &tiers[1],
        0 => &tiers[0],
        1 if tiers[1].is_empty() => &tiers[0],
        1 => &tiers[1],
        2 if tiers[2].is_empty() => &tiers[1],
        2 => &tiers[2],
        3 if tiers[3].is_empty() => &tiers[2],
        3 => &tiers[3],
        _ if tiers[4].is_empty() => &tiers[3],
        _ => &tiers[4],
    };
    let chosen: &[Species] = if chosen.is_empty() { pool } else { chosen };

    chosen[rng.next_index("species within tier", chosen.len())]
}

/// Generate the next wild encounter for the current progression stage.
pub fn generate(progression: &Progression, difficulty: Difficulty, rng: &mut TurnRng) -> Species {
    if progression.legendary_defeated {
        // Late game: the final-evolution pool replaces normal encounters.
        return sample_pool(&FINAL_POOL, difficulty, rng);
    }
    if rng.next_outcome("mythical encounter") < MYTHICAL_RATE {
        return MYTHICAL_SPECIES;
    }
    sample_pool(&WILD_POOL, difficulty, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_wild_pool() {
        let tiers = bucket_pool(&WILD_POOL);
        let total: usize = tiers.iter().map(Vec::len).sum();
        assert_eq!(total, WILD_POOL.len());
        // Max attack in the wild pool is Pinsir's 125, so Magikarp (10) is
        // very common and Pinsir itself is very rare.
        assert!(tiers[0].contains(&Species::Magikarp));
        assert!(tiers[4].contains(&Species::Pinsir));
    }

    #[test]
    fn tier_roll_respects_difficulty_boundaries() {
        // Medium rates are 30/25/20/15/10: roll 0 lands in the very-common
        // tier, roll 29 still does, roll 30 moves to common.
        let tiers = bucket_pool(&WILD_POOL);

        let mut rng = TurnRng::new_for_test(vec![0, 0]);
        let species = sample_pool(&WILD_POOL, Difficulty::Medium, &mut rng);
        assert!(tiers[0].contains(&species));

        let mut rng = TurnRng::new_for_test(vec![29, 0]);
        let species = sample_pool(&WILD_POOL, Difficulty::Medium, &mut rng);
        assert!(tiers[0].contains(&species));

        let mut rng = TurnRng::new_for_test(vec![30, 0]);
        let species = sample_pool(&WILD_POOL, Difficulty::Medium, &mut rng);
        assert!(tiers[1].contains(&species));

        let mut rng = TurnRng::new_for_test(vec![99, 0]);
        let species = sample_pool(&WILD_POOL, Difficulty::Medium, &mut rng);
        assert!(tiers[4].contains(&species));
    }

    #[test]
    fn final_pool_empty_tier_falls_back() {
        // The final pool has no very-common members (weakest is Gengar at
        // 65/134 of Dragonite's attack), so a very-common roll falls back to
        // an adjacent populated tier and never panics.
        let mut rng = TurnRng::new_for_test(vec![0, 0]);
        let species = sample_pool(&FINAL_POOL, Difficulty::Easy, &mut rng);
        assert!(FINAL_POOL.contains(&species));
    }

    #[test]
    fn mythical_roll_precedes_tier_sampling() {
        let mut rng = TurnRng::new_for_test(vec![1]);
        let progression = Progression::new(&mut TurnRng::new_for_test(vec![0]));
        let species = generate(&progression, Difficulty::Medium, &mut rng);
        assert_eq!(species, MYTHICAL_SPECIES);

        let mut rng = TurnRng::new_for_test(vec![MYTHICAL_RATE, 0, 0]);
        let species = generate(&progression, Difficulty::Medium, &mut rng);
        assert_ne!(species, MYTHICAL_SPECIES);
        assert!(WILD_POOL.contains(&species));
    }

    #[test]
    fn late_game_uses_the_final_pool_without_mythicals() {
        let mut progression = Progression::new(&mut TurnRng::new_for_test(vec![0]));
        progression.legendary_defeated = true;

        for roll in [0u8, 1, 50, 99] {
            let mut rng = TurnRng::new_for_test(vec![roll, 0]);
            let species = generate(&progression, Difficulty::Hard, &mut rng);
            assert!(FINAL_POOL.contains(&species), "{species:?} not in final pool");
        }
    }
}
