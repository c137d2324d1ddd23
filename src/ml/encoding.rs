use std::sync::OnceLock;

use burn::tensor::{Tensor, TensorData, backend::Backend};
use log::debug;

use crate::battle::{BattleState, MAX_MONSTERS};
use crate::card::HAND_LIMIT;
use crate::error::EncodeError;
use crate::ml::layout::{
    self, HAND_DETAIL_WIDTH, INTENT_BLOCK_WIDTH, MONSTER_BLOCK_WIDTH, MONSTER_STATUS_FEATURES,
    MONSTER_STATUS_WIDTH, OBS_LEN, PLAYER_STATUS_FEATURES, Segment, SegmentKind,
};
use crate::ml::tables::{BossSlotTable, CardSlotTable};
use crate::potion::POTION_SLOTS;
use crate::state::RunState;

/// Encoder output: one integer per layout dimension.
pub type Observation = [i32; OBS_LEN];

/// Writes into one segment of the output, clamping every value to the
/// segment's declared maximum.
struct SegmentWriter<'a> {
    out: &'a mut [i32],
    segment: &'static Segment,
    pos: usize,
}

impl<'a> SegmentWriter<'a> {
    fn new(out: &'a mut [i32], segment: &'static Segment) -> Self {
        debug_assert_eq!(out.len(), segment.width);
        Self {
            out,
            segment,
            pos: 0,
        }
    }

    #[inline]
    fn push(&mut self, value: i32) {
        self.set(self.pos, value);
        self.pos += 1;
    }

    /// Leaves `count` dimensions at zero.
    #[inline]
    fn skip(&mut self, count: usize) {
        self.pos += count;
    }

    #[inline]
    fn set(&mut self, index: usize, value: i32) {
        self.out[index] = value.min(self.segment.max_at(index));
    }

    /// Saturating increment, capped at the dimension's maximum.
    #[inline]
    fn bump(&mut self, index: usize) {
        let next = self.out[index].saturating_add(1);
        self.set(index, next);
    }

    fn width(&self) -> usize {
        self.segment.width
    }

    fn finish(self) {
        debug_assert!(
            self.pos == 0 || self.pos == self.segment.width,
            "segment {} wrote {} of {} dimensions",
            self.segment.name,
            self.pos,
            self.segment.width
        );
    }
}

/// Builds observation vectors from run and battle snapshots.
///
/// Holds the immutable slot tables. Construct one with [`ObservationEncoder::new`]
/// and share it by reference, or use the process-wide [`ObservationEncoder::global`].
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    cards: CardSlotTable,
    bosses: BossSlotTable,
}

static GLOBAL: OnceLock<ObservationEncoder> = OnceLock::new();

impl Default for ObservationEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationEncoder {
    pub fn new() -> Self {
        Self {
            cards: CardSlotTable::build(),
            bosses: BossSlotTable::build(),
        }
    }

    /// Shared instance, built on first use. Safe to call from several threads.
    pub fn global() -> &'static ObservationEncoder {
        GLOBAL.get_or_init(|| {
            debug!("initializing global observation encoder");
            ObservationEncoder::new()
        })
    }

    pub fn card_slots(&self) -> &CardSlotTable {
        &self.cards
    }

    pub fn boss_slots(&self) -> &BossSlotTable {
        &self.bosses
    }

    /// Index of a card inside the deck segment.
    pub fn card_index(&self, card: &crate::card::Card) -> Result<usize, EncodeError> {
        self.cards.slot_of(card)
    }

    /// Observation with the battle segments left at zero.
    pub fn encode_run(&self, run: &RunState) -> Result<Observation, EncodeError> {
        self.encode(run, None)
    }

    /// Observation of `run`; battle segments are filled only when `battle` is
    /// given and the run is on the battle screen.
    pub fn encode(
        &self,
        run: &RunState,
        battle: Option<&BattleState>,
    ) -> Result<Observation, EncodeError> {
        let mut out = [0; OBS_LEN];
        let battle = battle.filter(|_| run.in_battle());

        for (start, segment) in layout::segments() {
            let slice = &mut out[start..start + segment.width];
            let mut writer = SegmentWriter::new(slice, segment);
            match segment.kind {
                SegmentKind::Basic => {
                    writer.push(run.cur_hp.max(0));
                    writer.push(run.max_hp.max(0));
                    writer.push(run.gold.max(0));
                    writer.push(run.floor_num.max(0));
                }
                SegmentKind::Boss => {
                    let slot = self.bosses.slot_of(run.boss)?;
                    writer.set(slot, 1);
                }
                SegmentKind::Deck => {
                    for card in &run.deck {
                        let slot = self.cards.slot_of(card)?;
                        if slot >= writer.width() {
                            return Err(EncodeError::InvalidCardEncoding(card.id));
                        }
                        writer.bump(slot);
                    }
                }
                SegmentKind::Relics => {
                    for relic in &run.relics {
                        writer.set(relic.ordinal(), 1);
                    }
                }
                _ => {
                    if let Some(battle) = battle {
                        encode_battle_segment(&mut writer, segment.kind, run, battle);
                    }
                }
            }
            writer.finish();
        }

        Ok(out)
    }

    /// `[1, OBS_LEN]` tensor of the observation divided by its bounds.
    pub fn encode_tensor<B>(
        &self,
        run: &RunState,
        battle: Option<&BattleState>,
    ) -> Result<Tensor<B, 2>, EncodeError>
    where
        B: Backend,
        B::Device: Default,
    {
        let observation = self.encode(run, battle)?;
        Ok(to_tensor::<B>(normalize(&observation)))
    }

    /// Per-dimension maxima; see [`layout::bounds`].
    pub fn bounds() -> Observation {
        layout::bounds()
    }

    pub fn bounds_tensor<B>() -> Tensor<B, 2>
    where
        B: Backend,
        B::Device: Default,
    {
        let bounds = layout::bounds();
        let mut features = [0.0f32; OBS_LEN];
        for (out, bound) in features.iter_mut().zip(bounds) {
            *out = bound as f32;
        }
        to_tensor::<B>(features)
    }
}

fn encode_battle_segment(
    writer: &mut SegmentWriter<'_>,
    kind: SegmentKind,
    run: &RunState,
    battle: &BattleState,
) {
    let player = &battle.player;
    match kind {
        SegmentKind::PlayerCombat => {
            writer.push(player.energy.max(0));
            writer.push(player.block.max(0));
            writer.push(player.strength);
            writer.push(player.dexterity);
        }
        SegmentKind::Monsters => {
            for slot in 0..MAX_MONSTERS {
                match battle.living_monster(slot) {
                    Some(m) => {
                        writer.push(m.cur_hp.max(0));
                        writer.push(m.block.max(0));
                        writer.push(m.strength);
                        writer.push(m.vulnerable);
                        writer.push(m.weak);
                    }
                    None => writer.skip(MONSTER_BLOCK_WIDTH),
                }
            }
        }
        SegmentKind::HandIds => {
            for slot in 0..HAND_LIMIT {
                match battle.hand_card(slot) {
                    Some(card) => writer.push(card.id.ordinal() as i32),
                    None => writer.skip(1),
                }
            }
        }
        SegmentKind::Intents => {
            for slot in 0..MAX_MONSTERS {
                match battle.living_monster(slot) {
                    Some(m) => {
                        writer.push(m.damage_to_player(player, &run.relics));
                        writer.push(m.intent.hits.max(0));
                        writer.push(m.is_attacking() as i32);
                    }
                    None => writer.skip(INTENT_BLOCK_WIDTH),
                }
            }
        }
        SegmentKind::HandDetail => {
            for slot in 0..HAND_LIMIT {
                match battle.hand_card(slot) {
                    Some(card) => {
                        writer.push(i32::from(card.cost).max(0));
                        writer.push(i32::from(card.cost_for_turn).max(0));
                        writer.push(card.card_type().ordinal());
                        writer.push(card.is_upgraded() as i32);
                    }
                    None => writer.skip(HAND_DETAIL_WIDTH),
                }
            }
        }
        SegmentKind::PlayerStatus => {
            for feature in &PLAYER_STATUS_FEATURES {
                writer.push(feature.source.read(player));
            }
        }
        SegmentKind::MonsterStatus => {
            for slot in 0..MAX_MONSTERS {
                match battle.living_monster(slot) {
                    Some(m) => {
                        for (source, _) in &MONSTER_STATUS_FEATURES {
                            writer.push(source.read(m));
                        }
                    }
                    None => writer.skip(MONSTER_STATUS_WIDTH),
                }
            }
        }
        SegmentKind::Piles => {
            writer.push(len_i32(battle.draw_pile.len()));
            writer.push(len_i32(battle.discard_pile.len()));
            writer.push(len_i32(battle.exhaust_pile.len()));
            writer.push(battle.turn.max(0));
        }
        SegmentKind::Potions => {
            for slot in 0..POTION_SLOTS {
                writer.push(battle.potions.get(slot).encoded());
            }
        }
        SegmentKind::Reserved => writer.skip(writer.width()),
        SegmentKind::Basic | SegmentKind::Boss | SegmentKind::Deck | SegmentKind::Relics => {}
    }
}

#[inline]
fn len_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Divides each entry by its bound; dimensions with a zero bound map to 0.
pub fn normalize(observation: &Observation) -> [f32; OBS_LEN] {
    let bounds = layout::bounds();
    let mut out = [0.0f32; OBS_LEN];
    for (i, value) in observation.iter().enumerate() {
        if bounds[i] != 0 {
            out[i] = *value as f32 / bounds[i] as f32;
        }
    }
    out
}

fn to_tensor<B>(features: [f32; OBS_LEN]) -> Tensor<B, 2>
where
    B: Backend,
    B::Device: Default,
{
    let data = TensorData::from([features]);
    Tensor::<B, 2>::from_data(data, &B::Device::default())
}
