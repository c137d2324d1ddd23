pub mod encoding;
pub mod layout;
pub mod map_encoding;
pub mod tables;

pub use encoding::{Observation, ObservationEncoder, normalize};
pub use layout::{BATTLE_OFFSET, OBS_LEN, Segment, SegmentKind, bounds, offset_of, range_of};
pub use map_encoding::{MAP_BITS, MapBits, encode_map, encode_map_tensor, has_edge, room_type_at};
pub use tables::{BossSlotTable, CardSlotTable};
