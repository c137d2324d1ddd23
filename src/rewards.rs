//! Card reward passthroughs.
//!
//! Each operation needs a run that is still undecided, sitting on the rewards
//! screen with at least one pending card reward group. Otherwise it logs a
//! warning, leaves the run untouched and returns
//! [`RewardError::InvalidRequestState`].

use log::{debug, warn};

use crate::card::Card;
use crate::error::RewardError;
use crate::relic::RelicId;
use crate::state::{GameOutcome, RunState, ScreenState};

const SINGING_BOWL_MAX_HP: i32 = 2;

fn check_offering(run: &RunState) -> Result<(), RewardError> {
    let valid = run.outcome == GameOutcome::Undecided
        && run.screen_state == ScreenState::Rewards
        && run.rewards.card_reward_count() > 0;
    if valid {
        return Ok(());
    }
    let err = RewardError::InvalidRequestState {
        screen: run.screen_state,
        outcome: run.outcome,
    };
    warn!("{err}");
    Err(err)
}

/// Cards of the reward group currently on offer.
pub fn card_reward(run: &RunState) -> Result<Vec<Card>, RewardError> {
    check_offering(run)?;
    Ok(run
        .rewards
        .current_card_reward()
        .map(<[Card]>::to_vec)
        .unwrap_or_default())
}

/// Adds `card` to the deck and closes the current reward group.
///
/// Obtain triggers (egg upgrades, Ceramic Fish gold) apply as usual. The card
/// must be one of the offered cards.
pub fn pick_reward_card(run: &mut RunState, card: Card) -> Result<(), RewardError> {
    check_offering(run)?;
    let offered = run
        .rewards
        .current_card_reward()
        .is_some_and(|group| group.iter().any(|c| c.id == card.id));
    if !offered {
        warn!("card {} is not part of the pending reward", card.id);
        return Err(RewardError::CardNotOffered(card.id));
    }
    debug!("picking reward card {}", card.id);
    run.obtain_card(card);
    run.rewards.remove_current_card_reward();
    Ok(())
}

/// Declines the current reward group. Singing Bowl converts the skip into +2
/// max HP.
pub fn skip_reward_cards(run: &mut RunState) -> Result<(), RewardError> {
    check_offering(run)?;
    if run.has_relic(RelicId::SingingBowl) {
        run.increase_max_hp(SINGING_BOWL_MAX_HP);
    }
    run.rewards.remove_current_card_reward();
    Ok(())
}
