use spire_obs::relic::RelicId;
use spire_obs::{
    Card, CardId, GameOutcome, MonsterEncounter, RewardError, RunState, ScreenState, card_reward,
    pick_reward_card, skip_reward_cards,
};

fn offering_run() -> RunState {
    let mut run = RunState::new(MonsterEncounter::Automaton);
    run.screen_state = ScreenState::Rewards;
    run.rewards.card_rewards.push(vec![
        Card::new(CardId::TwinStrike),
        Card::new(CardId::ShrugItOff),
        Card::new(CardId::Inflame),
    ]);
    run
}

#[test]
fn pick_on_decided_run_leaves_deck_unchanged() {
    for outcome in [GameOutcome::PlayerLoss, GameOutcome::PlayerVictory] {
        let mut run = offering_run();
        run.outcome = outcome;
        let deck = run.deck.clone();
        let result = pick_reward_card(&mut run, Card::new(CardId::TwinStrike));
        assert_eq!(
            result,
            Err(RewardError::InvalidRequestState {
                screen: ScreenState::Rewards,
                outcome,
            })
        );
        assert_eq!(run.deck, deck);
        assert_eq!(run.rewards.card_reward_count(), 1);
    }
}

#[test]
fn empty_reward_container_is_invalid() {
    let mut run = offering_run();
    run.rewards.card_rewards.clear();
    assert!(card_reward(&run).is_err());
    assert!(skip_reward_cards(&mut run).is_err());
}

#[test]
fn singing_bowl_skip_raises_max_hp() {
    let mut run = offering_run();
    run.relics.push(RelicId::SingingBowl);
    run.cur_hp = 60;
    skip_reward_cards(&mut run).expect("skip");
    assert_eq!(run.max_hp, 82);
    assert_eq!(run.cur_hp, 62);
    assert_eq!(run.rewards.card_reward_count(), 0);
}

#[test]
fn egg_relics_apply_to_picked_cards() {
    let mut run = offering_run();
    run.relics.push(RelicId::FrozenEgg);
    run.relics.push(RelicId::CeramicFish);
    pick_reward_card(&mut run, Card::new(CardId::Inflame)).expect("pick");
    let picked = run.deck.last().copied().expect("card added");
    assert_eq!(picked.id, CardId::Inflame);
    assert!(picked.upgraded);
    assert_eq!(run.gold, 99 + 9);
}

#[test]
fn multiple_groups_are_consumed_last_first() {
    let mut run = offering_run();
    run.rewards.card_rewards.insert(0, vec![Card::new(CardId::Anger)]);
    pick_reward_card(&mut run, Card::new(CardId::ShrugItOff)).expect("pick");
    let remaining = card_reward(&run).expect("second group");
    assert_eq!(remaining, vec![Card::new(CardId::Anger)]);
}
