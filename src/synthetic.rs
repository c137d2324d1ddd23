//! Seeded random snapshots.
//!
//! The generator covers the whole input domain the encoders accept, including
//! values past every layout maximum, dead and escaped monsters, short hands and
//! empty potion slots. Snapshots are only structurally valid; no game rule is
//! simulated.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::battle::{BattleState, Intent, MAX_MONSTERS, Monster, PlayerCombat};
use crate::card::{COLORLESS_CARD_POOL, Card, CardColor, CardId, HAND_LIMIT};
use crate::encounter::MonsterEncounter;
use crate::map::{MAP_HEIGHT, MAP_WIDTH, Map, Room};
use crate::potion::{POTION_SLOTS, PotionBelt, PotionId};
use crate::relic::RelicId;
use crate::snapshot::Snapshot;
use crate::state::{GameOutcome, RunState, ScreenState};
use crate::status::{MonsterStatus, PlayerStatus, Stance};

const MONSTER_NAMES: [&str; 8] = [
    "Jaw Worm",
    "Cultist",
    "Louse",
    "Gremlin Nob",
    "Lagavulin",
    "Byrd",
    "Darkling",
    "Spire Growth",
];

const SCREENS: [ScreenState; 9] = [
    ScreenState::EventScreen,
    ScreenState::Rewards,
    ScreenState::BossRelicRewards,
    ScreenState::CardSelect,
    ScreenState::Map,
    ScreenState::TreasureRoom,
    ScreenState::RestRoom,
    ScreenState::Shop,
    ScreenState::Battle,
];

const MAP_ROOMS: [Room; 6] = [
    Room::Shop,
    Room::Rest,
    Room::Event,
    Room::Elite,
    Room::Monster,
    Room::Treasure,
];

/// Generates snapshots from a fixed seed.
pub struct SnapshotGenerator {
    rng: StdRng,
    encodable: Vec<CardId>,
}

impl SnapshotGenerator {
    pub fn new(seed: u64) -> Self {
        let mut encodable: Vec<CardId> = CardId::ALL
            .iter()
            .copied()
            .filter(|id| id.color() == CardColor::Red)
            .collect();
        encodable.extend(COLORLESS_CARD_POOL);
        Self {
            rng: StdRng::seed_from_u64(seed),
            encodable,
        }
    }

    pub fn snapshot(&mut self) -> Snapshot {
        let run = self.run();
        let battle = if run.in_battle() || self.rng.gen_bool(0.2) {
            Some(self.battle())
        } else {
            None
        };
        let map = Some(self.map());
        Snapshot { run, battle, map }
    }

    /// Run with a deck drawn only from encodable cards.
    pub fn run(&mut self) -> RunState {
        let boss = *MonsterEncounter::FINAL_BOSSES
            .choose(&mut self.rng)
            .unwrap_or(&MonsterEncounter::SlimeBoss);
        let mut run = RunState::new(boss);
        run.max_hp = self.rng.gen_range(1..=260);
        run.cur_hp = self.rng.gen_range(0..=run.max_hp);
        run.gold = self.rng.gen_range(0..=2500);
        run.floor_num = self.rng.gen_range(0..=70);
        run.act = (run.floor_num / 17 + 1).min(4);
        run.ascension = self.rng.gen_range(0..=20);
        run.screen_state = *SCREENS.choose(&mut self.rng).unwrap_or(&ScreenState::Map);
        run.outcome = GameOutcome::Undecided;

        let deck_size = self.rng.gen_range(0..=45);
        run.deck = (0..deck_size).map(|_| self.encodable_card()).collect();
        // Occasional pile-up of one card to reach the count cap.
        if self.rng.gen_bool(0.1) {
            let card = self.encodable_card();
            run.deck.extend(std::iter::repeat(card).take(9));
        }

        let relic_count = self.rng.gen_range(0..=30);
        run.relics = RelicId::ALL
            .choose_multiple(&mut self.rng, relic_count)
            .copied()
            .collect();
        run
    }

    pub fn battle(&mut self) -> BattleState {
        let monster_count = self.rng.gen_range(1..=MAX_MONSTERS);
        let monsters = (0..monster_count).map(|_| self.monster()).collect();

        let hand_size = self.rng.gen_range(0..=HAND_LIMIT);
        let hand = (0..hand_size).map(|_| self.any_card()).collect();
        let draw_pile = (0..self.rng.gen_range(0..=60)).map(|_| self.any_card()).collect();
        let discard_pile = (0..self.rng.gen_range(0..=60)).map(|_| self.any_card()).collect();
        let exhaust_pile = (0..self.rng.gen_range(0..=20)).map(|_| self.any_card()).collect();

        let potions = PotionBelt {
            slots: (0..self.rng.gen_range(0..=POTION_SLOTS))
                .map(|_| *PotionId::ALL.choose(&mut self.rng).unwrap_or(&PotionId::EmptyPotionSlot))
                .collect(),
        };

        BattleState {
            player: self.player(),
            monsters,
            hand,
            draw_pile,
            discard_pile,
            exhaust_pile,
            turn: self.rng.gen_range(0..=30),
            potions,
        }
    }

    fn player(&mut self) -> PlayerCombat {
        let mut player = PlayerCombat {
            cur_hp: self.rng.gen_range(1..=120),
            energy: self.rng.gen_range(-1..=12),
            block: self.rng.gen_range(-5..=1200),
            strength: self.rng.gen_range(-10..=60),
            dexterity: self.rng.gen_range(-10..=60),
            artifact: self.rng.gen_range(0..=25),
            focus: self.rng.gen_range(-5..=25),
            orb_slots: self.rng.gen_range(0..=12),
            stance: *Stance::ALL.choose(&mut self.rng).unwrap_or(&Stance::Neutral),
            ..PlayerCombat::default()
        };
        for &status in PlayerStatus::ALL {
            if self.rng.gen_bool(0.15) {
                player.statuses.set(status, self.rng.gen_range(1..=120));
            }
        }
        player
    }

    fn monster(&mut self) -> Monster {
        let name = *MONSTER_NAMES.choose(&mut self.rng).unwrap_or(&"Cultist");
        let intent = if self.rng.gen_bool(0.6) {
            Intent::attack(self.rng.gen_range(0..=80), self.rng.gen_range(1..=25))
        } else {
            Intent::non_attack()
        };
        let mut monster = Monster::new(name, self.rng.gen_range(1..=600), intent);
        monster.cur_hp = self.rng.gen_range(-10..=monster.max_hp);
        monster.block = self.rng.gen_range(0..=1200);
        monster.strength = self.rng.gen_range(-10..=60);
        monster.vulnerable = self.rng.gen_range(0..=60);
        monster.weak = self.rng.gen_range(0..=60);
        monster.poison = self.rng.gen_range(0..=150);
        monster.artifact = self.rng.gen_range(0..=12);
        monster.regen = self.rng.gen_range(0..=40);
        monster.metallicize = self.rng.gen_range(0..=40);
        monster.shackled = self.rng.gen_range(0..=25);
        monster.half_dead = self.rng.gen_bool(0.05);
        monster.escaped = self.rng.gen_bool(0.05);
        for &status in MonsterStatus::ALL {
            if self.rng.gen_bool(0.1) {
                monster.statuses.set(status, self.rng.gen_range(1..=150));
            }
        }
        monster
    }

    /// Map with the generator's fixed rows and random paths elsewhere.
    pub fn map(&mut self) -> Map {
        let mut map = Map::empty();
        for y in 0..MAP_HEIGHT - 1 {
            for x in 0..MAP_WIDTH {
                for target in x.saturating_sub(1)..=(x + 1).min(MAP_WIDTH - 1) {
                    if self.rng.gen_bool(0.3) {
                        map.add_edge(x, y, target);
                    }
                }
            }
        }
        for y in 0..MAP_HEIGHT {
            for x in 0..MAP_WIDTH {
                let room = match y {
                    0 => Room::Monster,
                    8 => Room::Treasure,
                    14 => Room::Rest,
                    _ if self.rng.gen_bool(0.2) => Room::None,
                    _ => *MAP_ROOMS.choose(&mut self.rng).unwrap_or(&Room::Monster),
                };
                map.set_room(x, y, room);
            }
        }
        map
    }

    fn encodable_card(&mut self) -> Card {
        let id = *self.encodable.choose(&mut self.rng).unwrap_or(&CardId::StrikeRed);
        self.card(id)
    }

    fn any_card(&mut self) -> Card {
        let id = *CardId::ALL.choose(&mut self.rng).unwrap_or(&CardId::StrikeRed);
        self.card(id)
    }

    fn card(&mut self, id: CardId) -> Card {
        let mut card = Card::new(id);
        if self.rng.gen_bool(0.3) {
            card.upgrade();
        }
        if self.rng.gen_bool(0.1) {
            card.cost_for_turn = self.rng.gen_range(-2..=12);
        }
        card
    }
}

/// One snapshot from `seed`.
pub fn snapshot(seed: u64) -> Snapshot {
    SnapshotGenerator::new(seed).snapshot()
}
