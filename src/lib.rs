//! Slay the Spire state encoder: turns run, battle and map snapshots into the
//! fixed-length integer vectors consumed by learning agents.

#[macro_use]
mod macros;

pub mod battle;
pub mod card;
pub mod encounter;
pub mod error;
pub mod map;
pub mod ml;
pub mod potion;
pub mod relic;
pub mod rewards;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod synthetic;
pub mod visualize;

pub use crate::battle::{BattleState, Intent, Monster, PlayerCombat};
pub use crate::card::{Card, CardId};
pub use crate::encounter::MonsterEncounter;
pub use crate::error::{EncodeError, RewardError, SnapshotError};
pub use crate::map::{Map, MapNode, Room};
pub use crate::ml::{
    MAP_BITS, OBS_LEN, Observation, ObservationEncoder, bounds, encode_map, has_edge,
    room_type_at,
};
pub use crate::rewards::{card_reward, pick_reward_card, skip_reward_cards};
pub use crate::snapshot::{Snapshot, SnapshotFormat};
pub use crate::state::{GameOutcome, RunState, ScreenState};
pub use crate::visualize::{
    VisualOptions, render_map, render_observation, render_observation_with_options,
};
