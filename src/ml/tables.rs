use log::debug;

use crate::card::{COLORLESS_CARD_POOL, Card, CardColor, CardId};
use crate::encounter::MonsterEncounter;
use crate::error::EncodeError;

/// Card identity to base deck slot. Slots `0..red_count()` are the red cards in
/// ordinal order; the colorless pool follows, sorted by canonical name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSlotTable {
    slots: Vec<Option<u16>>,
    red: usize,
    colorless: usize,
}

impl CardSlotTable {
    pub fn build() -> Self {
        let red: Vec<CardId> = CardId::ALL
            .iter()
            .copied()
            .filter(|id| id.color() == CardColor::Red)
            .collect();

        let mut colorless = COLORLESS_CARD_POOL.to_vec();
        colorless.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
        colorless.dedup();

        let mut slots = vec![None; CardId::COUNT];
        for (slot, id) in red.iter().chain(colorless.iter()).enumerate() {
            slots[id.ordinal()] = Some(slot as u16);
        }

        debug!(
            "built card slot table: {} red, {} colorless",
            red.len(),
            colorless.len()
        );

        Self {
            slots,
            red: red.len(),
            colorless: colorless.len(),
        }
    }

    /// Base slot of an identity, `None` when the identity is not encodable.
    pub fn base_slot(&self, id: CardId) -> Option<usize> {
        self.slots
            .get(id.ordinal())
            .copied()
            .flatten()
            .map(usize::from)
    }

    /// Deck index of a card: `base * 2`, plus one when upgraded.
    pub fn slot_of(&self, card: &Card) -> Result<usize, EncodeError> {
        let base = self
            .base_slot(card.id)
            .ok_or(EncodeError::InvalidCardEncoding(card.id))?;
        Ok(base * 2 + usize::from(card.is_upgraded()))
    }

    pub fn red_count(&self) -> usize {
        self.red
    }

    pub fn colorless_count(&self) -> usize {
        self.colorless
    }

    /// Number of assigned base slots.
    pub fn len(&self) -> usize {
        self.red + self.colorless
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assigned identities in slot order.
    pub fn assignments(&self) -> Vec<(CardId, usize)> {
        let mut out: Vec<(CardId, usize)> = CardId::ALL
            .iter()
            .filter_map(|&id| self.base_slot(id).map(|slot| (id, slot)))
            .collect();
        out.sort_by_key(|&(_, slot)| slot);
        out
    }
}

const BOSS_TABLE: [(MonsterEncounter, usize); 10] = [
    (MonsterEncounter::SlimeBoss, 0),
    (MonsterEncounter::Hexaghost, 1),
    (MonsterEncounter::TheGuardian, 2),
    (MonsterEncounter::Champ, 3),
    (MonsterEncounter::Automaton, 4),
    (MonsterEncounter::Collector, 5),
    (MonsterEncounter::TimeEater, 6),
    (MonsterEncounter::DonuAndDeca, 7),
    (MonsterEncounter::AwakenedOne, 8),
    (MonsterEncounter::TheHeart, 9),
];

/// Final boss encounter to one-hot slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossSlotTable {
    slots: Vec<Option<u8>>,
}

impl BossSlotTable {
    pub fn build() -> Self {
        let mut slots = vec![None; MonsterEncounter::COUNT];
        for (encounter, slot) in BOSS_TABLE {
            slots[encounter.ordinal()] = Some(slot as u8);
        }
        Self { slots }
    }

    pub fn slot_of(&self, encounter: MonsterEncounter) -> Result<usize, EncodeError> {
        self.slots
            .get(encounter.ordinal())
            .copied()
            .flatten()
            .map(usize::from)
            .ok_or(EncodeError::UnknownBossEncoding(encounter))
    }

    /// Encounter assigned to `slot`.
    pub fn boss_at(&self, slot: usize) -> Option<MonsterEncounter> {
        BOSS_TABLE
            .iter()
            .find(|(_, s)| *s == slot)
            .map(|(encounter, _)| *encounter)
    }

    pub fn len(&self) -> usize {
        BOSS_TABLE.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
