//! Observation layout.
//!
//! The observation vector is a fixed sequence of named segments. Offsets are
//! derived from this table, never written by hand, and the same table provides
//! the per-dimension maxima returned by [`bounds`]. The encoder clamps every
//! value it writes against these maxima, so `encode(..)[i] <= bounds()[i]`
//! holds for every index.
//!
//! | offset | width | segment |
//! |---|---|---|
//! | 0 | 4 | basic: cur hp, max hp, gold, floor |
//! | 4 | 10 | boss one-hot |
//! | 14 | 220 | deck counts (110 card slots x upgraded) |
//! | 234 | 178 | relic multi-hot |
//! | 412 | 4 | player combat: energy, block, strength, dexterity |
//! | 416 | 25 | monsters x5: hp, block, strength, vulnerable, weak |
//! | 441 | 10 | hand card ids |
//! | 451 | 15 | intents x5: damage, hits, attacking |
//! | 466 | 40 | hand detail x10: cost, cost for turn, type, upgraded |
//! | 506 | 40 | player status |
//! | 546 | 50 | monster status x5 |
//! | 596 | 4 | piles: draw, discard, exhaust, turn |
//! | 600 | 5 | potion ids |
//! | 605 | 4 | reserved |
//!
//! Total: 609. Everything from offset 412 on is battle-only.

use std::ops::Range;

use crate::battle::{MAX_MONSTERS, Monster, PlayerCombat};
use crate::card::HAND_LIMIT;
use crate::potion::POTION_SLOTS;
use crate::relic::RELIC_COUNT;
use crate::status::{MonsterStatus, PlayerStatus, Stance};

pub const OBS_LEN: usize = 609;

pub const PLAYER_HP_MAX: i32 = 200;
pub const PLAYER_GOLD_MAX: i32 = 1800;
pub const FLOOR_MAX: i32 = 60;
pub const CARD_COUNT_MAX: i32 = 7;
pub const BOSS_SLOTS: usize = 10;
pub const DECK_CARD_SLOTS: usize = 110;

pub const MONSTER_BLOCK_WIDTH: usize = 5;
pub const INTENT_BLOCK_WIDTH: usize = 3;
pub const HAND_DETAIL_WIDTH: usize = 4;
pub const MONSTER_STATUS_WIDTH: usize = 10;
pub const PLAYER_STATUS_WIDTH: usize = 40;

/// Which part of the state a segment encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Basic,
    Boss,
    Deck,
    Relics,
    PlayerCombat,
    Monsters,
    HandIds,
    Intents,
    HandDetail,
    PlayerStatus,
    MonsterStatus,
    Piles,
    Potions,
    Reserved,
}

/// Per-dimension maxima of a segment.
#[derive(Clone, Copy, Debug)]
pub enum Maxima {
    /// Same maximum for every dimension.
    Uniform(i32),
    /// One maximum per dimension; length equals the segment width.
    Each(&'static [i32]),
    /// A per-slot block repeated across the segment.
    Repeat(&'static [i32]),
}

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub kind: SegmentKind,
    pub name: &'static str,
    pub width: usize,
    pub maxima: Maxima,
    /// Filled only while the run is on the battle screen.
    pub battle_only: bool,
}

impl Segment {
    const fn new(kind: SegmentKind, name: &'static str, width: usize, maxima: Maxima) -> Self {
        Self {
            kind,
            name,
            width,
            maxima,
            battle_only: false,
        }
    }

    const fn battle(kind: SegmentKind, name: &'static str, width: usize, maxima: Maxima) -> Self {
        Self {
            kind,
            name,
            width,
            maxima,
            battle_only: true,
        }
    }

    /// Maximum at `index` relative to the segment start.
    pub const fn max_at(&self, index: usize) -> i32 {
        match self.maxima {
            Maxima::Uniform(max) => max,
            Maxima::Each(maxima) => maxima[index],
            Maxima::Repeat(block) => block[index % block.len()],
        }
    }

    const fn is_consistent(&self) -> bool {
        match self.maxima {
            Maxima::Uniform(_) => true,
            Maxima::Each(maxima) => maxima.len() == self.width,
            Maxima::Repeat(block) => !block.is_empty() && self.width % block.len() == 0,
        }
    }
}

/// A player status dimension and how it is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatusSource {
    /// Stack count of the status, 0 when absent.
    Stacks(PlayerStatus),
    /// 1 when the status is present at all.
    Flag(PlayerStatus),
    Strength,
    Dexterity,
    Artifact,
    Focus,
    Stance(Stance),
    OrbSlots,
}

impl PlayerStatusSource {
    pub fn read(self, player: &PlayerCombat) -> i32 {
        match self {
            PlayerStatusSource::Stacks(kind) => player.status(kind),
            PlayerStatusSource::Flag(kind) => player.has_status(kind) as i32,
            PlayerStatusSource::Strength => player.strength,
            PlayerStatusSource::Dexterity => player.dexterity,
            PlayerStatusSource::Artifact => player.artifact,
            PlayerStatusSource::Focus => player.focus,
            PlayerStatusSource::Stance(stance) => (player.stance == stance) as i32,
            PlayerStatusSource::OrbSlots => player.orb_slots,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlayerStatusFeature {
    pub source: PlayerStatusSource,
    pub max: i32,
}

const fn stacks(kind: PlayerStatus, max: i32) -> PlayerStatusFeature {
    PlayerStatusFeature {
        source: PlayerStatusSource::Stacks(kind),
        max,
    }
}

const fn flag(kind: PlayerStatus) -> PlayerStatusFeature {
    PlayerStatusFeature {
        source: PlayerStatusSource::Flag(kind),
        max: 1,
    }
}

const fn field(source: PlayerStatusSource, max: i32) -> PlayerStatusFeature {
    PlayerStatusFeature { source, max }
}

/// Player status block, in emission order.
pub const PLAYER_STATUS_FEATURES: [PlayerStatusFeature; PLAYER_STATUS_WIDTH] = [
    stacks(PlayerStatus::Vulnerable, 20),
    stacks(PlayerStatus::Weak, 20),
    stacks(PlayerStatus::Frail, 20),
    field(PlayerStatusSource::Strength, 50),
    field(PlayerStatusSource::Dexterity, 50),
    field(PlayerStatusSource::Artifact, 20),
    field(PlayerStatusSource::Focus, 20),
    stacks(PlayerStatus::Metallicize, 20),
    stacks(PlayerStatus::PlatedArmor, 30),
    stacks(PlayerStatus::Thorns, 20),
    stacks(PlayerStatus::Regen, 20),
    stacks(PlayerStatus::Intangible, 10),
    stacks(PlayerStatus::Buffer, 10),
    flag(PlayerStatus::Barricade),
    flag(PlayerStatus::Corruption),
    stacks(PlayerStatus::DemonForm, 20),
    stacks(PlayerStatus::NoxiousFumes, 20),
    stacks(PlayerStatus::AfterImage, 20),
    stacks(PlayerStatus::Combust, 20),
    stacks(PlayerStatus::DarkEmbrace, 10),
    stacks(PlayerStatus::Evolve, 10),
    stacks(PlayerStatus::FeelNoPain, 20),
    stacks(PlayerStatus::FireBreathing, 10),
    stacks(PlayerStatus::InfiniteBlades, 10),
    stacks(PlayerStatus::Rage, 20),
    stacks(PlayerStatus::Rupture, 10),
    stacks(PlayerStatus::Vigor, 50),
    stacks(PlayerStatus::DoubleTap, 5),
    stacks(PlayerStatus::Burst, 5),
    flag(PlayerStatus::DrawReduction),
    flag(PlayerStatus::Entangled),
    flag(PlayerStatus::NoDraw),
    flag(PlayerStatus::Confused),
    flag(PlayerStatus::Hex),
    stacks(PlayerStatus::WraithForm, 10),
    stacks(PlayerStatus::Mantra, 10),
    field(PlayerStatusSource::Stance(Stance::Divinity), 1),
    field(PlayerStatusSource::Stance(Stance::Calm), 1),
    field(PlayerStatusSource::Stance(Stance::Wrath), 1),
    field(PlayerStatusSource::OrbSlots, 10),
];

const PLAYER_STATUS_MAXIMA: [i32; PLAYER_STATUS_WIDTH] = {
    let mut out = [0; PLAYER_STATUS_WIDTH];
    let mut i = 0;
    while i < PLAYER_STATUS_WIDTH {
        out[i] = PLAYER_STATUS_FEATURES[i].max;
        i += 1;
    }
    out
};

/// A per-monster status dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterStatusSource {
    Poison,
    Artifact,
    Status(MonsterStatus),
    Regen,
    Metallicize,
    Shackled,
}

impl MonsterStatusSource {
    pub fn read(self, monster: &Monster) -> i32 {
        match self {
            MonsterStatusSource::Poison => monster.poison,
            MonsterStatusSource::Artifact => monster.artifact,
            MonsterStatusSource::Status(kind) => monster.status(kind),
            MonsterStatusSource::Regen => monster.regen,
            MonsterStatusSource::Metallicize => monster.metallicize,
            MonsterStatusSource::Shackled => monster.shackled,
        }
    }
}

pub const MONSTER_STATUS_FEATURES: [(MonsterStatusSource, i32); MONSTER_STATUS_WIDTH] = [
    (MonsterStatusSource::Poison, 99),
    (MonsterStatusSource::Artifact, 10),
    (MonsterStatusSource::Status(MonsterStatus::Intangible), 10),
    (MonsterStatusSource::Status(MonsterStatus::Thorns), 20),
    (MonsterStatusSource::Status(MonsterStatus::CurlUp), 20),
    (MonsterStatusSource::Status(MonsterStatus::ModeShift), 100),
    (MonsterStatusSource::Status(MonsterStatus::Ritual), 10),
    (MonsterStatusSource::Regen, 30),
    (MonsterStatusSource::Metallicize, 30),
    (MonsterStatusSource::Shackled, 20),
];

const MONSTER_STATUS_MAXIMA: [i32; MONSTER_STATUS_WIDTH] = {
    let mut out = [0; MONSTER_STATUS_WIDTH];
    let mut i = 0;
    while i < MONSTER_STATUS_WIDTH {
        out[i] = MONSTER_STATUS_FEATURES[i].1;
        i += 1;
    }
    out
};

/// The full layout, in vector order.
pub const SEGMENTS: [Segment; 14] = [
    Segment::new(
        SegmentKind::Basic,
        "basic",
        4,
        Maxima::Each(&[PLAYER_HP_MAX, PLAYER_HP_MAX, PLAYER_GOLD_MAX, FLOOR_MAX]),
    ),
    Segment::new(SegmentKind::Boss, "boss", BOSS_SLOTS, Maxima::Uniform(1)),
    Segment::new(
        SegmentKind::Deck,
        "deck",
        DECK_CARD_SLOTS * 2,
        Maxima::Uniform(CARD_COUNT_MAX),
    ),
    Segment::new(SegmentKind::Relics, "relics", RELIC_COUNT, Maxima::Uniform(1)),
    Segment::battle(
        SegmentKind::PlayerCombat,
        "player_combat",
        4,
        Maxima::Each(&[10, 999, 50, 50]),
    ),
    Segment::battle(
        SegmentKind::Monsters,
        "monsters",
        MAX_MONSTERS * MONSTER_BLOCK_WIDTH,
        Maxima::Repeat(&[500, 999, 50, 50, 50]),
    ),
    Segment::battle(SegmentKind::HandIds, "hand_ids", HAND_LIMIT, Maxima::Uniform(400)),
    Segment::battle(
        SegmentKind::Intents,
        "intents",
        MAX_MONSTERS * INTENT_BLOCK_WIDTH,
        Maxima::Repeat(&[200, 20, 1]),
    ),
    Segment::battle(
        SegmentKind::HandDetail,
        "hand_detail",
        HAND_LIMIT * HAND_DETAIL_WIDTH,
        Maxima::Repeat(&[10, 10, 4, 1]),
    ),
    Segment::battle(
        SegmentKind::PlayerStatus,
        "player_status",
        PLAYER_STATUS_WIDTH,
        Maxima::Each(&PLAYER_STATUS_MAXIMA),
    ),
    Segment::battle(
        SegmentKind::MonsterStatus,
        "monster_status",
        MAX_MONSTERS * MONSTER_STATUS_WIDTH,
        Maxima::Repeat(&MONSTER_STATUS_MAXIMA),
    ),
    Segment::battle(
        SegmentKind::Piles,
        "piles",
        4,
        Maxima::Each(&[50, 50, 50, 20]),
    ),
    Segment::battle(SegmentKind::Potions, "potions", POTION_SLOTS, Maxima::Uniform(100)),
    Segment::battle(SegmentKind::Reserved, "reserved", 4, Maxima::Uniform(0)),
];

/// Runtime view of [`SEGMENTS`] with a `'static` address.
static LAYOUT: [Segment; SEGMENTS.len()] = SEGMENTS;

const fn layout_is_consistent() -> bool {
    let mut total = 0;
    let mut i = 0;
    while i < SEGMENTS.len() {
        if !SEGMENTS[i].is_consistent() {
            return false;
        }
        total += SEGMENTS[i].width;
        i += 1;
    }
    total == OBS_LEN
}

const _: () = assert!(layout_is_consistent());

/// Start offset of the first segment of `kind`.
pub const fn offset_of(kind: SegmentKind) -> usize {
    let mut offset = 0;
    let mut i = 0;
    while i < SEGMENTS.len() {
        if SEGMENTS[i].kind as usize == kind as usize {
            return offset;
        }
        offset += SEGMENTS[i].width;
        i += 1;
    }
    panic!("segment kind missing from layout");
}

/// Index range of `kind` within the observation vector.
pub fn range_of(kind: SegmentKind) -> Range<usize> {
    let offset = offset_of(kind);
    offset..offset + segment(kind).width
}

pub fn segment(kind: SegmentKind) -> &'static Segment {
    LAYOUT
        .iter()
        .find(|s| s.kind == kind)
        .unwrap_or_else(|| unreachable!("every kind has a segment"))
}

/// Segments paired with their start offsets.
pub fn segments() -> impl Iterator<Item = (usize, &'static Segment)> {
    LAYOUT.iter().scan(0usize, |offset, segment| {
        let start = *offset;
        *offset += segment.width;
        Some((start, segment))
    })
}

/// Segment covering observation index `index`.
pub fn segment_at(index: usize) -> Option<(usize, &'static Segment)> {
    segments().find(|(start, s)| (*start..*start + s.width).contains(&index))
}

pub const BATTLE_OFFSET: usize = offset_of(SegmentKind::PlayerCombat);

/// Inclusive per-dimension maxima, index-aligned with the encoder output.
pub fn bounds() -> [i32; OBS_LEN] {
    let mut out = [0; OBS_LEN];
    for (start, segment) in segments() {
        for i in 0..segment.width {
            out[start + i] = segment.max_at(i);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_reference_layout() {
        assert_eq!(offset_of(SegmentKind::Basic), 0);
        assert_eq!(offset_of(SegmentKind::Boss), 4);
        assert_eq!(offset_of(SegmentKind::Deck), 14);
        assert_eq!(offset_of(SegmentKind::Relics), 234);
        assert_eq!(offset_of(SegmentKind::PlayerCombat), 412);
        assert_eq!(offset_of(SegmentKind::Monsters), 416);
        assert_eq!(offset_of(SegmentKind::HandIds), 441);
        assert_eq!(offset_of(SegmentKind::Intents), 451);
        assert_eq!(offset_of(SegmentKind::HandDetail), 466);
        assert_eq!(offset_of(SegmentKind::PlayerStatus), 506);
        assert_eq!(offset_of(SegmentKind::MonsterStatus), 546);
        assert_eq!(offset_of(SegmentKind::Piles), 596);
        assert_eq!(offset_of(SegmentKind::Potions), 600);
        assert_eq!(offset_of(SegmentKind::Reserved), 605);
        assert_eq!(BATTLE_OFFSET, 412);
    }

    #[test]
    fn segments_tile_the_vector() {
        let mut expected = 0;
        for (start, segment) in segments() {
            assert_eq!(start, expected, "{} starts late", segment.name);
            expected += segment.width;
        }
        assert_eq!(expected, OBS_LEN);
        assert_eq!(range_of(SegmentKind::Deck), 14..234);
    }

    #[test]
    fn bounds_follow_segment_maxima() {
        let b = bounds();
        assert_eq!(&b[0..4], &[200, 200, 1800, 60]);
        assert!(b[4..14].iter().all(|&v| v == 1));
        assert!(b[14..234].iter().all(|&v| v == CARD_COUNT_MAX));
        assert!(b[234..412].iter().all(|&v| v == 1));
        assert_eq!(&b[412..416], &[10, 999, 50, 50]);
        assert_eq!(&b[416..421], &[500, 999, 50, 50, 50]);
        assert_eq!(&b[436..441], &[500, 999, 50, 50, 50]);
        assert_eq!(&b[451..454], &[200, 20, 1]);
        assert_eq!(&b[466..470], &[10, 10, 4, 1]);
        assert_eq!(b[506], 20);
        assert_eq!(b[519], 1);
        assert_eq!(b[545], 10);
        assert_eq!(&b[546..549], &[99, 10, 10]);
        assert_eq!(&b[596..600], &[50, 50, 50, 20]);
        assert!(b[600..605].iter().all(|&v| v == 100));
        assert!(b[605..].iter().all(|&v| v == 0));
    }

    #[test]
    fn segment_lookup_by_index() {
        let (start, segment) = segment_at(500).expect("in range");
        assert_eq!(start, 466);
        assert_eq!(segment.kind, SegmentKind::HandDetail);
        assert!(segment_at(OBS_LEN).is_none());
    }

    #[test]
    fn status_features_are_unique() {
        for (i, a) in PLAYER_STATUS_FEATURES.iter().enumerate() {
            for b in &PLAYER_STATUS_FEATURES[i + 1..] {
                assert_ne!(a.source, b.source);
            }
        }
    }
}
