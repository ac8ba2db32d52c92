use crate::catalog;
use schema::{MoveData, MoveEffect, PokemonType, Species, StatPair};
use serde::{Deserialize, Serialize};

/// A move as carried by a live combatant. Owned copy of the catalog entry so
/// transformed combatants can borrow an opponent's move set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub name: String,
    pub move_type: PokemonType,
    pub effect: MoveEffect,
}

impl From<&MoveData> for MoveInstance {
    fn from(data: &MoveData) -> Self {
        MoveInstance {
            name: data.name.to_string(),
            move_type: data.move_type,
            effect: data.effect,
        }
    }
}

/// The pre-transform identity of a combatant, kept so a caught wild Pokémon
/// can be reverted to its original form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub primary_type: PokemonType,
    pub secondary_type: Option<PokemonType>,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub moves: Vec<MoveInstance>,
}

/// A live battle participant instantiated from a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub species: Species,
    pub primary_type: PokemonType,
    pub secondary_type: Option<PokemonType>,
    pub hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub moves: Vec<MoveInstance>,
    pub exp: u32,
    pub poisoned: bool,
    /// Remaining sleep turns; 0 means awake.
    pub asleep: u8,
    pub beat_legendary: bool,
    original_form: Option<Box<FormSnapshot>>,
}

impl Combatant {
    pub fn from_species(species: Species) -> Self {
        let data = catalog::get_species_data(species);
        Combatant {
            species,
            primary_type: data.primary_type,
            secondary_type: data.secondary_type,
            hp: data.base_stats.hp as u16,
            max_hp: data.base_stats.hp as u16,
            attack: data.base_stats.attack as u16,
            defense: data.base_stats.defense as u16,
            sp_attack: data.base_stats.sp_attack as u16,
            sp_defense: data.base_stats.sp_defense as u16,
            moves: data.move_list().map(MoveInstance::from).collect(),
            exp: 0,
            poisoned: false,
            asleep: 0,
            beat_legendary: false,
            original_form: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    pub fn glyph(&self) -> &'static str {
        catalog::get_species_data(self.species).glyph
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    pub fn has_stab(&self, move_type: PokemonType) -> bool {
        self.primary_type == move_type || self.secondary_type == Some(move_type)
    }

    /// Subtract damage, clamped to remaining HP. Returns the amount actually
    /// applied, which is also the amount to display.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    /// Restore HP, clamped to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let restored = amount.min(self.max_hp - self.hp);
        self.hp += restored;
        restored
    }

    /// Raise both stats of a pair by a flat delta.
    pub fn raise_stat_pair(&mut self, pair: StatPair, delta: u16) {
        match pair {
            StatPair::Offense => {
                self.attack += delta;
                self.sp_attack += delta;
            }
            StatPair::Defense => {
                self.defense += delta;
                self.sp_defense += delta;
            }
        }
    }

    /// Lower both stats of a pair by a flat delta, clamping each at 1.
    pub fn lower_stat_pair(&mut self, pair: StatPair, delta: u16) {
        let lower = |stat: &mut u16| *stat = stat.saturating_sub(delta).max(1);
        match pair {
            StatPair::Offense => {
                lower(&mut self.attack);
                lower(&mut self.sp_attack);
            }
            StatPair::Defense => {
                lower(&mut self.defense);
                lower(&mut self.sp_defense);
            }
        }
    }

    pub fn is_transformed(&self) -> bool {
        self.original_form.is_some()
    }

    /// Adopt the opponent's types, offensive/defensive stats and move set
    /// while keeping name, HP and experience. The first transform snapshots
    /// the original form; transforming again keeps the original snapshot.
    pub fn transform_into(&mut self, other: &Combatant) {
        if self.original_form.is_none() {
            self.original_form = Some(Box::new(FormSnapshot {
                primary_type: self.primary_type,
                secondary_type: self.secondary_type,
                attack: self.attack,
                defense: self.defense,
                sp_attack: self.sp_attack,
                sp_defense: self.sp_defense,
                moves: self.moves.clone(),
            }));
        }
        self.primary_type = other.primary_type;
        self.secondary_type = other.secondary_type;
        self.attack = other.attack;
        self.defense = other.defense;
        self.sp_attack = other.sp_attack;
        self.sp_defense = other.sp_defense;
        self.moves = other.moves.clone();
    }

    /// Restore the pre-transform form, if any. Returns whether a reversion
    /// happened.
    pub fn revert_form(&mut self) -> bool {
        match self.original_form.take() {
            Some(snapshot) => {
                self.primary_type = snapshot.primary_type;
                self.secondary_type = snapshot.secondary_type;
                self.attack = snapshot.attack;
                self.defense = snapshot.defense;
                self.sp_attack = snapshot.sp_attack;
                self.sp_defense = snapshot.sp_defense;
                self.moves = snapshot.moves;
                true
            }
            None => false,
        }
    }

    /// Clear per-battle ailments. Called when an encounter ends normally;
    /// teleporting away deliberately skips this for the player's side.
    pub fn clear_ailments(&mut self) {
        self.poisoned = false;
        self.asleep = 0;
    }

    /// Flat evolution/strengthening bonus: max HP (and current HP) plus all
    /// four battle stats.
    pub fn apply_flat_bonus(&mut self, bonus: u16) {
        self.max_hp += bonus;
        self.hp += bonus;
        self.attack += bonus;
        self.defense += bonus;
        self.sp_attack += bonus;
        self.sp_defense += bonus;
    }

    /// Replace this combatant's identity with another species' full catalog
    /// block (bespoke evolutions). Experience is kept; HP is set to the new
    /// form's maximum.
    pub fn adopt_full_form(&mut self, species: Species) {
        let exp = self.exp;
        let beat_legendary = self.beat_legendary;
        *self = Combatant::from_species(species);
        self.exp = exp;
        self.beat_legendary = beat_legendary;
    }
}

/// The player's owned combatants. Exactly one member is active; battle code
/// mutates the active member through the roster, so HP and stat changes are
/// never lost on switch or battle end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Combatant>,
    active: usize,
}

impl Roster {
    pub fn new(first: Combatant) -> Self {
        Roster {
            members: vec![first],
            active: 0,
        }
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Combatant {
        &self.members[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Combatant {
        &mut self.members[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    /// Make another member active. Fails on out-of-range or already-active
    /// indices.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.members.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    pub fn add(&mut self, combatant: Combatant) {
        self.members.push(combatant);
    }

    /// Remove a non-active member, keeping the active index pointed at the
    /// same combatant.
    pub fn remove(&mut self, index: usize) -> Option<Combatant> {
        if index >= self.members.len() || index == self.active {
            return None;
        }
        let removed = self.members.remove(index);
        if index < self.active {
            self.active -= 1;
        }
        Some(removed)
    }

    /// Indices of all non-active members, in display order.
    pub fn bench_indices(&self) -> Vec<usize> {
        (0..self.members.len())
            .filter(|&i| i != self.active)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Species;

    #[test]
    fn damage_and_heal_are_clamped() {
        let mut pikachu = Combatant::from_species(Species::Pikachu);
        assert_eq!(pikachu.take_damage(10), 10);
        assert_eq!(pikachu.hp, 25);
        assert_eq!(pikachu.take_damage(100), 25);
        assert_eq!(pikachu.hp, 0);
        assert!(pikachu.is_fainted());
        assert_eq!(pikachu.heal(1000), 35);
        assert_eq!(pikachu.hp, pikachu.max_hp);
    }

    #[test]
    fn lowering_stats_floors_at_one() {
        let mut magikarp = Combatant::from_species(Species::Magikarp);
        magikarp.lower_stat_pair(StatPair::Offense, 100);
        assert_eq!(magikarp.attack, 1);
        assert_eq!(magikarp.sp_attack, 1);
    }

    #[test]
    fn transform_keeps_identity_and_reverts() {
        let mut ditto = Combatant::from_species(Species::Ditto);
        let pikachu = Combatant::from_species(Species::Pikachu);
        let original_hp = ditto.hp;

        ditto.transform_into(&pikachu);
        assert_eq!(ditto.species, Species::Ditto);
        assert_eq!(ditto.hp, original_hp);
        assert_eq!(ditto.attack, pikachu.attack);
        assert_eq!(ditto.primary_type, pikachu.primary_type);
        assert_eq!(ditto.moves.len(), pikachu.moves.len());
        assert!(ditto.is_transformed());

        assert!(ditto.revert_form());
        assert_eq!(ditto.attack, 48);
        assert_eq!(ditto.moves[0].name, "Transform");
        assert!(!ditto.is_transformed());
        assert!(!ditto.revert_form());
    }

    #[test]
    fn roster_switch_and_remove_track_active() {
        let mut roster = Roster::new(Combatant::from_species(Species::Charmander));
        roster.add(Combatant::from_species(Species::Pidgey));
        roster.add(Combatant::from_species(Species::Rattata));

        assert!(!roster.switch_to(0), "switching to active slot is a no-op");
        assert!(!roster.switch_to(9));
        assert!(roster.switch_to(2));
        assert_eq!(roster.active().species, Species::Rattata);

        // Removing a member before the active one keeps the same active
        // combatant.
        assert!(roster.remove(2).is_none(), "cannot remove the active member");
        assert!(roster.remove(0).is_some());
        assert_eq!(roster.active().species, Species::Rattata);
        assert_eq!(roster.len(), 2);
    }
}
