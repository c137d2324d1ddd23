use serde::{Deserialize, Serialize};

use crate::card::{Card, HAND_LIMIT};
use crate::potion::PotionBelt;
use crate::relic::RelicId;
use crate::status::{MonsterStatus, PlayerStatus, Stance, StatusMap};

pub const MAX_MONSTERS: usize = 5;

/// Player combat attributes. Strength, dexterity, artifact and focus are plain
/// fields in the engine; everything else lives in `statuses`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerCombat {
    pub cur_hp: i32,
    pub energy: i32,
    pub block: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub artifact: i32,
    pub focus: i32,
    pub orb_slots: i32,
    pub stance: Stance,
    #[serde(default)]
    pub statuses: StatusMap<PlayerStatus>,
}

impl PlayerCombat {
    pub fn status(&self, kind: PlayerStatus) -> i32 {
        self.statuses.get(kind)
    }

    pub fn has_status(&self, kind: PlayerStatus) -> bool {
        self.statuses.has(kind)
    }
}

/// The move a monster has telegraphed for its next turn.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Intent {
    /// Per-hit damage before any modifier.
    pub base_damage: i32,
    pub hits: i32,
    pub attacking: bool,
}

impl Intent {
    pub fn attack(base_damage: i32, hits: i32) -> Self {
        Self {
            base_damage,
            hits,
            attacking: true,
        }
    }

    pub fn non_attack() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    pub cur_hp: i32,
    pub max_hp: i32,
    pub block: i32,
    pub strength: i32,
    pub vulnerable: i32,
    pub weak: i32,
    pub poison: i32,
    pub artifact: i32,
    pub regen: i32,
    pub metallicize: i32,
    pub shackled: i32,
    #[serde(default)]
    pub statuses: StatusMap<MonsterStatus>,
    pub intent: Intent,
    #[serde(default)]
    pub half_dead: bool,
    #[serde(default)]
    pub escaped: bool,
}

impl Monster {
    pub fn new(name: impl Into<String>, hp: i32, intent: Intent) -> Self {
        Self {
            name: name.into(),
            cur_hp: hp,
            max_hp: hp,
            intent,
            ..Self::default()
        }
    }

    /// Half-dead monsters (Awakened One between phases, Darklings) and escaped
    /// monsters still occupy their slot but are not alive.
    pub fn is_alive(&self) -> bool {
        self.cur_hp > 0 && !self.half_dead && !self.escaped
    }

    pub fn is_attacking(&self) -> bool {
        self.intent.attacking
    }

    pub fn status(&self, kind: MonsterStatus) -> i32 {
        self.statuses.get(kind)
    }

    /// Single-hit damage the current intent would deal to the player, using the
    /// live strength, weak, vulnerable, stance and intangible state. Paper Krane
    /// and Odd Mushroom among `relics` soften weak and vulnerable.
    pub fn damage_to_player(&self, player: &PlayerCombat, relics: &[RelicId]) -> i32 {
        if !self.intent.attacking {
            return 0;
        }
        let mut damage = (self.intent.base_damage + self.strength) as f32;
        if self.weak > 0 {
            damage *= if relics.contains(&RelicId::PaperKrane) {
                0.60
            } else {
                0.75
            };
        }
        if player.has_status(PlayerStatus::Vulnerable) {
            damage *= if relics.contains(&RelicId::OddMushroom) {
                1.25
            } else {
                1.5
            };
        }
        if player.stance == Stance::Wrath {
            damage *= 2.0;
        }
        let mut damage = (damage.floor() as i32).max(0);
        if player.has_status(PlayerStatus::Intangible) && damage > 1 {
            damage = 1;
        }
        damage
    }
}

/// Read-only view of a battle in progress.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BattleState {
    pub player: PlayerCombat,
    /// Monster slots in spawn order; slots past the end are empty.
    pub monsters: Vec<Monster>,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub exhaust_pile: Vec<Card>,
    pub turn: i32,
    #[serde(default)]
    pub potions: PotionBelt,
}

impl BattleState {
    pub fn monster(&self, slot: usize) -> Option<&Monster> {
        self.monsters.get(slot)
    }

    /// The monster in `slot` if it exists and is alive.
    pub fn living_monster(&self, slot: usize) -> Option<&Monster> {
        self.monster(slot).filter(|m| m.is_alive())
    }

    pub fn hand_card(&self, slot: usize) -> Option<&Card> {
        if slot < HAND_LIMIT {
            self.hand.get(slot)
        } else {
            None
        }
    }

    pub fn alive_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerCombat {
        PlayerCombat {
            cur_hp: 80,
            energy: 3,
            ..PlayerCombat::default()
        }
    }

    #[test]
    fn damage_applies_strength_then_weak() {
        let mut jaw_worm = Monster::new("Jaw Worm", 40, Intent::attack(11, 1));
        jaw_worm.strength = 3;
        assert_eq!(jaw_worm.damage_to_player(&player(), &[]), 14);
        jaw_worm.weak = 1;
        // (11 + 3) * 0.75 = 10.5
        assert_eq!(jaw_worm.damage_to_player(&player(), &[]), 10);
    }

    #[test]
    fn damage_respects_vulnerable_wrath_and_intangible() {
        let louse = Monster::new("Louse", 12, Intent::attack(6, 1));
        let mut p = player();
        p.statuses.set(PlayerStatus::Vulnerable, 2);
        assert_eq!(louse.damage_to_player(&p, &[]), 9);
        p.stance = Stance::Wrath;
        assert_eq!(louse.damage_to_player(&p, &[]), 18);
        p.statuses.set(PlayerStatus::Intangible, 1);
        assert_eq!(louse.damage_to_player(&p, &[]), 1);
    }

    #[test]
    fn paper_krane_strengthens_monster_weak() {
        let mut m = Monster::new("Gremlin Nob", 82, Intent::attack(20, 1));
        m.weak = 2;
        assert_eq!(m.damage_to_player(&player(), &[]), 15);
        assert_eq!(m.damage_to_player(&player(), &[RelicId::PaperKrane]), 12);
    }

    #[test]
    fn odd_mushroom_softens_player_vulnerable() {
        let m = Monster::new("Gremlin Nob", 82, Intent::attack(20, 1));
        let mut p = player();
        p.statuses.set(PlayerStatus::Vulnerable, 1);
        assert_eq!(m.damage_to_player(&p, &[]), 30);
        assert_eq!(m.damage_to_player(&p, &[RelicId::OddMushroom]), 25);
    }

    #[test]
    fn negative_strength_never_yields_negative_damage() {
        let mut m = Monster::new("Cultist", 50, Intent::attack(6, 1));
        m.strength = -10;
        assert_eq!(m.damage_to_player(&player(), &[]), 0);
        let buff = Monster::new("Cultist", 50, Intent::non_attack());
        assert_eq!(buff.damage_to_player(&player(), &[]), 0);
    }

    #[test]
    fn half_dead_and_escaped_monsters_are_not_alive() {
        let mut m = Monster::new("Darkling", 50, Intent::non_attack());
        assert!(m.is_alive());
        m.half_dead = true;
        assert!(!m.is_alive());
        m.half_dead = false;
        m.escaped = true;
        assert!(!m.is_alive());
    }
}
