use burn_ndarray::NdArray;

use spire_obs::ml::layout::{BATTLE_OFFSET, SegmentKind, offset_of, range_of};
use spire_obs::{
    BattleState, Card, CardId, EncodeError, Intent, Monster, MonsterEncounter, OBS_LEN,
    ObservationEncoder, PlayerCombat, RunState, ScreenState, bounds,
};
use spire_obs::potion::{PotionBelt, PotionId};
use spire_obs::relic::RelicId;
use spire_obs::status::PlayerStatus;

type Backend = NdArray<f32>;

fn battle_run() -> RunState {
    let mut run = RunState::new(MonsterEncounter::Hexaghost);
    run.screen_state = ScreenState::Battle;
    run
}

fn three_monster_battle() -> BattleState {
    BattleState {
        player: PlayerCombat {
            cur_hp: 70,
            energy: 3,
            block: 5,
            ..PlayerCombat::default()
        },
        monsters: vec![
            Monster::new("Louse", 12, Intent::attack(6, 1)),
            Monster::new("Louse", 14, Intent::attack(7, 1)),
            Monster::new("Cultist", 48, Intent::non_attack()),
        ],
        hand: vec![
            Card::new(CardId::StrikeRed),
            Card::new(CardId::DefendRed),
            Card::upgraded(CardId::Bash),
        ],
        draw_pile: vec![Card::new(CardId::StrikeRed); 4],
        turn: 2,
        potions: PotionBelt {
            slots: vec![PotionId::FirePotion, PotionId::EmptyPotionSlot],
        },
        ..BattleState::default()
    }
}

#[test]
fn observation_has_fixed_length() {
    let encoder = ObservationEncoder::new();
    let run = battle_run();
    let obs = encoder.encode(&run, Some(&three_monster_battle())).expect("encode");
    assert_eq!(obs.len(), OBS_LEN);
    assert_eq!(bounds().len(), OBS_LEN);
}

#[test]
fn encoding_is_idempotent() {
    let encoder = ObservationEncoder::global();
    let run = battle_run();
    let battle = three_monster_battle();
    let first = encoder.encode(&run, Some(&battle)).expect("encode");
    let second = encoder.encode(&run, Some(&battle)).expect("encode");
    assert_eq!(first, second);
    assert_eq!(first, ObservationEncoder::new().encode(&run, Some(&battle)).expect("encode"));
}

#[test]
fn strike_counts_split_by_upgrade() {
    let encoder = ObservationEncoder::new();
    let mut run = RunState::new(MonsterEncounter::SlimeBoss);
    run.deck = vec![
        Card::new(CardId::StrikeRed),
        Card::new(CardId::StrikeRed),
        Card::new(CardId::StrikeRed),
        Card::upgraded(CardId::StrikeRed),
    ];
    let obs = encoder.encode_run(&run).expect("encode");
    let strike = encoder
        .card_slots()
        .base_slot(CardId::StrikeRed)
        .expect("strike has a slot");
    let deck = offset_of(SegmentKind::Deck);
    assert_eq!(obs[deck + 2 * strike], 3);
    assert_eq!(obs[deck + 2 * strike + 1], 1);
    assert_eq!(obs[range_of(SegmentKind::Deck)].iter().sum::<i32>(), 4);
}

#[test]
fn boss_segment_is_one_hot() {
    let encoder = ObservationEncoder::new();
    for boss in MonsterEncounter::FINAL_BOSSES {
        let obs = encoder.encode_run(&RunState::new(boss)).expect("encode");
        let segment = &obs[range_of(SegmentKind::Boss)];
        assert_eq!(segment.iter().sum::<i32>(), 1);
        let slot = encoder.boss_slots().slot_of(boss).expect("slot");
        assert_eq!(segment[slot], 1);
    }
}

#[test]
fn unknown_boss_is_an_error() {
    let encoder = ObservationEncoder::new();
    let run = RunState::new(MonsterEncounter::GremlinNob);
    assert_eq!(
        encoder.encode_run(&run),
        Err(EncodeError::UnknownBossEncoding(MonsterEncounter::GremlinNob))
    );
}

#[test]
fn battle_segments_are_zero_off_the_battle_screen() {
    let encoder = ObservationEncoder::new();
    let battle = three_monster_battle();
    for screen in [ScreenState::Rewards, ScreenState::Map, ScreenState::Shop] {
        let mut run = battle_run();
        run.screen_state = screen;
        let obs = encoder.encode(&run, Some(&battle)).expect("encode");
        assert!(obs[BATTLE_OFFSET..].iter().all(|&v| v == 0), "{screen:?}");
    }
    let obs = encoder.encode(&battle_run(), None).expect("encode");
    assert!(obs[BATTLE_OFFSET..].iter().all(|&v| v == 0));
}

#[test]
fn dead_monster_blocks_are_zero() {
    let encoder = ObservationEncoder::new();
    let mut battle = three_monster_battle();
    battle.monsters[1].cur_hp = 0;
    battle.monsters[1].poison = 4;
    let obs = encoder.encode(&battle_run(), Some(&battle)).expect("encode");

    let monsters = offset_of(SegmentKind::Monsters);
    assert_eq!(obs[monsters], 12);
    assert!(obs[monsters + 5..monsters + 10].iter().all(|&v| v == 0));
    assert_eq!(obs[monsters + 10], 48);

    let intents = offset_of(SegmentKind::Intents);
    assert_eq!(&obs[intents..intents + 3], &[6, 1, 1]);
    assert!(obs[intents + 3..intents + 6].iter().all(|&v| v == 0));
    assert_eq!(&obs[intents + 6..intents + 9], &[0, 0, 0]);

    let statuses = offset_of(SegmentKind::MonsterStatus);
    assert!(obs[statuses + 10..statuses + 20].iter().all(|&v| v == 0));

    // Slots past the monster list are empty too.
    assert!(obs[monsters + 15..monsters + 25].iter().all(|&v| v == 0));
}

#[test]
fn short_hand_is_zero_padded() {
    let encoder = ObservationEncoder::new();
    let obs = encoder
        .encode(&battle_run(), Some(&three_monster_battle()))
        .expect("encode");

    let ids = offset_of(SegmentKind::HandIds);
    assert_eq!(obs[ids], CardId::StrikeRed.ordinal() as i32);
    assert_eq!(obs[ids + 2], CardId::Bash.ordinal() as i32);
    assert!(obs[ids + 3..ids + 10].iter().all(|&v| v == 0));

    let detail = offset_of(SegmentKind::HandDetail);
    // Bash+: cost 2, attack, upgraded.
    assert_eq!(&obs[detail + 8..detail + 12], &[2, 2, 0, 1]);
    assert!(obs[detail + 12..detail + 40].iter().all(|&v| v == 0));
}

#[test]
fn piles_and_potions_are_encoded() {
    let encoder = ObservationEncoder::new();
    let obs = encoder
        .encode(&battle_run(), Some(&three_monster_battle()))
        .expect("encode");
    let piles = offset_of(SegmentKind::Piles);
    assert_eq!(&obs[piles..piles + 4], &[4, 0, 0, 2]);
    let potions = offset_of(SegmentKind::Potions);
    assert_eq!(obs[potions], PotionId::FirePotion.ordinal() as i32);
    assert!(obs[potions + 1..potions + 5].iter().all(|&v| v == 0));
}

#[test]
fn encoded_values_never_exceed_bounds() {
    let encoder = ObservationEncoder::new();
    let mut run = battle_run();
    run.gold = i32::MAX;
    run.deck = vec![Card::new(CardId::Anger); 40];
    let mut battle = three_monster_battle();
    battle.player.block = 5000;
    battle.monsters[0].intent = Intent::attack(500, 50);
    battle.monsters[0].strength = 99;
    let obs = encoder.encode(&run, Some(&battle)).expect("encode");
    let bounds = bounds();
    for i in 0..OBS_LEN {
        assert!(obs[i] <= bounds[i], "index {i}: {} > {}", obs[i], bounds[i]);
    }
}

#[test]
fn tensor_is_normalized_by_bounds() {
    let encoder = ObservationEncoder::new();
    let mut run = RunState::new(MonsterEncounter::Champ);
    run.cur_hp = 50;
    let tensor = encoder.encode_tensor::<Backend>(&run, None).expect("encode");
    assert_eq!(tensor.dims(), [1, OBS_LEN]);
    let values = tensor.into_data().to_vec::<f32>().expect("f32 data");
    assert!((values[0] - 0.25).abs() < 1e-6);
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));

    let bounds = ObservationEncoder::bounds_tensor::<Backend>();
    assert_eq!(bounds.dims(), [1, OBS_LEN]);
}

#[test]
fn intent_damage_honours_paper_krane() {
    let encoder = ObservationEncoder::new();
    let mut run = battle_run();
    let mut battle = three_monster_battle();
    battle.monsters.truncate(1);
    battle.monsters[0].intent = Intent::attack(20, 1);
    battle.monsters[0].weak = 1;
    let intents = offset_of(SegmentKind::Intents);

    let plain = encoder.encode(&run, Some(&battle)).expect("encode");
    assert_eq!(plain[intents], 15);

    run.relics.push(RelicId::PaperKrane);
    let krane = encoder.encode(&run, Some(&battle)).expect("encode");
    assert_eq!(krane[intents], 12);
}

#[test]
fn intent_damage_honours_odd_mushroom() {
    let encoder = ObservationEncoder::new();
    let mut run = battle_run();
    let mut battle = three_monster_battle();
    battle.monsters.truncate(1);
    battle.monsters[0].intent = Intent::attack(20, 1);
    battle.player.statuses.set(PlayerStatus::Vulnerable, 2);
    let intents = offset_of(SegmentKind::Intents);

    let plain = encoder.encode(&run, Some(&battle)).expect("encode");
    assert_eq!(plain[intents], 30);

    run.relics.push(RelicId::OddMushroom);
    let mushroom = encoder.encode(&run, Some(&battle)).expect("encode");
    assert_eq!(mushroom[intents], 25);
}

#[test]
fn battle_with_no_living_monsters_zeroes_every_monster_block() {
    let encoder = ObservationEncoder::new();
    let mut battle = three_monster_battle();
    battle.monsters[0].cur_hp = 0;
    battle.monsters[1].escaped = true;
    battle.monsters[2].half_dead = true;
    assert_eq!(battle.alive_count(), 0);

    let obs = encoder.encode(&battle_run(), Some(&battle)).expect("encode");
    for kind in [SegmentKind::Monsters, SegmentKind::Intents, SegmentKind::MonsterStatus] {
        assert!(obs[range_of(kind)].iter().all(|&v| v == 0), "{kind:?}");
    }
    // Player segment is still written.
    assert_eq!(obs[BATTLE_OFFSET], 3);
}

#[test]
fn battle_with_five_living_monsters_fills_every_block() {
    let encoder = ObservationEncoder::new();
    let mut battle = three_monster_battle();
    battle.monsters = (0..5)
        .map(|i| {
            let mut m = Monster::new("Darkling", 40 + i, Intent::attack(8 + i, 2));
            m.poison = 1 + i;
            m
        })
        .collect();
    assert_eq!(battle.alive_count(), 5);

    let obs = encoder.encode(&battle_run(), Some(&battle)).expect("encode");
    let monsters = offset_of(SegmentKind::Monsters);
    let intents = offset_of(SegmentKind::Intents);
    let statuses = offset_of(SegmentKind::MonsterStatus);
    for slot in 0..5 {
        let i = slot as i32;
        assert_eq!(obs[monsters + slot * 5], 40 + i);
        assert_eq!(&obs[intents + slot * 3..intents + slot * 3 + 3], &[8 + i, 2, 1]);
        assert_eq!(obs[statuses + slot * 10], 1 + i);
    }
}
