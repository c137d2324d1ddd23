use serde::{Deserialize, Serialize};

use crate::card::{Card, CardType, starter_deck};
use crate::encounter::MonsterEncounter;
use crate::relic::RelicId;

pub const STARTING_HP: i32 = 80;
pub const STARTING_GOLD: i32 = 99;

/// Which screen the run is currently showing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScreenState {
    #[default]
    Invalid,
    EventScreen,
    Rewards,
    BossRelicRewards,
    CardSelect,
    Map,
    TreasureRoom,
    RestRoom,
    Shop,
    Battle,
}

/// Whether the run is still being played.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    #[default]
    Undecided,
    PlayerVictory,
    PlayerLoss,
}

/// Pending reward groups; the last group is the one currently presented.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardsContainer {
    pub card_rewards: Vec<Vec<Card>>,
    pub gold: i32,
}

impl RewardsContainer {
    pub fn card_reward_count(&self) -> usize {
        self.card_rewards.len()
    }

    pub fn current_card_reward(&self) -> Option<&[Card]> {
        self.card_rewards.last().map(Vec::as_slice)
    }

    pub fn remove_current_card_reward(&mut self) -> Option<Vec<Card>> {
        self.card_rewards.pop()
    }
}

/// Read-only view of a run, as exposed by the simulator between actions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunState {
    pub cur_hp: i32,
    pub max_hp: i32,
    pub gold: i32,
    pub floor_num: i32,
    pub act: i32,
    pub ascension: i32,
    pub boss: MonsterEncounter,
    pub deck: Vec<Card>,
    pub relics: Vec<RelicId>,
    pub screen_state: ScreenState,
    pub outcome: GameOutcome,
    #[serde(default)]
    pub rewards: RewardsContainer,
}

impl RunState {
    /// Fresh Ironclad run on floor 0, waiting at the opening event.
    pub fn new(boss: MonsterEncounter) -> Self {
        Self {
            cur_hp: STARTING_HP,
            max_hp: STARTING_HP,
            gold: STARTING_GOLD,
            floor_num: 0,
            act: 1,
            ascension: 0,
            boss,
            deck: starter_deck(),
            relics: vec![RelicId::BurningBlood],
            screen_state: ScreenState::EventScreen,
            outcome: GameOutcome::Undecided,
            rewards: RewardsContainer::default(),
        }
    }

    pub fn has_relic(&self, relic: RelicId) -> bool {
        self.relics.contains(&relic)
    }

    pub fn in_battle(&self) -> bool {
        self.screen_state == ScreenState::Battle
    }

    pub fn is_over(&self) -> bool {
        self.outcome != GameOutcome::Undecided
    }

    /// Adds a card to the deck, applying the on-obtain relic triggers.
    pub fn obtain_card(&mut self, mut card: Card) {
        let upgrade = match card.card_type() {
            CardType::Attack => self.has_relic(RelicId::MoltenEgg),
            CardType::Skill => self.has_relic(RelicId::ToxicEgg),
            CardType::Power => self.has_relic(RelicId::FrozenEgg),
            CardType::Status | CardType::Curse => false,
        };
        if upgrade {
            card.upgrade();
        }
        if self.has_relic(RelicId::CeramicFish) {
            self.gold += 9;
        }
        self.deck.push(card);
    }

    pub fn increase_max_hp(&mut self, amount: i32) {
        self.max_hp += amount;
        self.cur_hp = (self.cur_hp + amount).min(self.max_hp);
    }
}
