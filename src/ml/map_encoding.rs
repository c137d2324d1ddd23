//! Bit encoding of an act map.
//!
//! Three sections, concatenated: the row-0 entry mask, the edge-direction mask
//! of every non-terminal row, and a room-kind one-hot for the rows whose room
//! kind varies between maps.

use burn::tensor::{Tensor, TensorData, backend::Backend};

use crate::map::{MAP_HEIGHT, MAP_WIDTH, Map, Room};

pub const ENTRY_BITS: usize = MAP_WIDTH;
pub const EDGE_BITS: usize = 3 * MAP_WIDTH * (MAP_HEIGHT - 1);
/// Room kinds with a one-hot position; higher ordinals encode as all zero.
pub const ROOM_KINDS: usize = 6;
/// Rows with a room one-hot. Row 0 is always monsters and row 8 is always a
/// treasure room. Row 13 varies but its room kind is dropped to keep the
/// encoding at 763 bits; row 14 is the rest row before the boss.
pub const ROOM_ROWS: [usize; 11] = [1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12];
pub const ROOM_BITS: usize = ROOM_KINDS * MAP_WIDTH * ROOM_ROWS.len();
pub const MAP_BITS: usize = ENTRY_BITS + EDGE_BITS + ROOM_BITS;

const _: () = assert!(MAP_BITS == 763);

pub type MapBits = [u8; MAP_BITS];

/// Direction of an edge relative to its source column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Left,
    Straight,
    Right,
}

impl EdgeDirection {
    fn between(x: usize, target_x: usize) -> Self {
        match target_x.cmp(&x) {
            std::cmp::Ordering::Less => EdgeDirection::Left,
            std::cmp::Ordering::Equal => EdgeDirection::Straight,
            std::cmp::Ordering::Greater => EdgeDirection::Right,
        }
    }
}

/// Index of the direction bit for node `(x, y)`.
pub fn edge_bit(x: usize, y: usize, direction: EdgeDirection) -> usize {
    ENTRY_BITS + (y * MAP_WIDTH + x) * 3 + direction as usize
}

/// Start of the one-hot group for node `(x, y)`, or `None` when row `y`
/// carries no room bits.
pub fn room_group(x: usize, y: usize) -> Option<usize> {
    let row = ROOM_ROWS.iter().position(|&r| r == y)?;
    Some(ENTRY_BITS + EDGE_BITS + (row * MAP_WIDTH + x) * ROOM_KINDS)
}

pub fn encode_map(map: &Map) -> MapBits {
    let mut bits = [0u8; MAP_BITS];

    for x in 0..MAP_WIDTH {
        bits[x] = map.node(x, 0).has_edges() as u8;
    }

    for y in 0..MAP_HEIGHT - 1 {
        for x in 0..MAP_WIDTH {
            for &target in &map.node(x, y).edges {
                let direction = EdgeDirection::between(x, usize::from(target));
                bits[edge_bit(x, y, direction)] = 1;
            }
        }
    }

    let room_start = ENTRY_BITS + EDGE_BITS;
    for (row, &y) in ROOM_ROWS.iter().enumerate() {
        for x in 0..MAP_WIDTH {
            let ordinal = map.node(x, y).room.ordinal();
            if ordinal < ROOM_KINDS {
                bits[room_start + (row * MAP_WIDTH + x) * ROOM_KINDS + ordinal] = 1;
            }
        }
    }

    bits
}

/// `[1, MAP_BITS]` float tensor of the map bits.
pub fn encode_map_tensor<B>(map: &Map) -> Tensor<B, 2>
where
    B: Backend,
    B::Device: Default,
{
    let bits = encode_map(map);
    let mut features = [0.0f32; MAP_BITS];
    for (out, bit) in features.iter_mut().zip(bits) {
        *out = f32::from(bit);
    }
    Tensor::<B, 2>::from_data(TensorData::from([features]), &B::Device::default())
}

fn in_range(x: i32, y: i32) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|&x| x < MAP_WIDTH)?;
    let y = usize::try_from(y).ok().filter(|&y| y < MAP_HEIGHT)?;
    Some((x, y))
}

/// Room kind at `(x, y)`; `Room::Invalid` off the grid.
pub fn room_type_at(map: &Map, x: i32, y: i32) -> Room {
    match in_range(x, y) {
        Some((x, y)) => map.node(x, y).room,
        None => Room::Invalid,
    }
}

/// Whether `(x, y)` has an edge to column `target_x` of the next row.
///
/// `x == -1` addresses the virtual start node below row 0: the answer is
/// whether entry column `target_x` has any outgoing edge.
pub fn has_edge(map: &Map, x: i32, y: i32, target_x: i32) -> bool {
    if x == -1 {
        return in_range(target_x, 0).is_some_and(|(tx, _)| map.node(tx, 0).has_edges());
    }
    let Some((x, y)) = in_range(x, y) else {
        return false;
    };
    let Ok(target) = u8::try_from(target_x) else {
        return false;
    };
    map.node(x, y).edges.contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> Map {
        let mut map = Map::empty();
        map.add_edge(0, 0, 0);
        map.add_edge(0, 0, 1);
        map.add_edge(3, 0, 2);
        map.add_edge(6, 13, 5);
        map.set_room(2, 1, Room::Elite);
        map.set_room(4, 12, Room::Shop);
        map.set_room(5, 8, Room::Treasure);
        map
    }

    #[test]
    fn section_sizes() {
        assert_eq!(ENTRY_BITS, 7);
        assert_eq!(EDGE_BITS, 294);
        assert_eq!(ROOM_BITS, 462);
        assert_eq!(encode_map(&Map::empty()).len(), 763);
    }

    #[test]
    fn entry_mask_tracks_row_zero() {
        let bits = encode_map(&sample_map());
        assert_eq!(&bits[..ENTRY_BITS], &[1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn edges_are_encoded_by_direction() {
        let bits = encode_map(&sample_map());
        assert_eq!(bits[edge_bit(0, 0, EdgeDirection::Straight)], 1);
        assert_eq!(bits[edge_bit(0, 0, EdgeDirection::Right)], 1);
        assert_eq!(bits[edge_bit(0, 0, EdgeDirection::Left)], 0);
        assert_eq!(bits[edge_bit(3, 0, EdgeDirection::Left)], 1);
        assert_eq!(bits[edge_bit(6, 13, EdgeDirection::Left)], 1);
        assert_eq!(edge_bit(6, 13, EdgeDirection::Right), ENTRY_BITS + EDGE_BITS - 1);
    }

    #[test]
    fn room_one_hot_skips_fixed_rows() {
        let bits = encode_map(&sample_map());
        let elite = room_group(2, 1).expect("row 1 has rooms");
        assert_eq!(&bits[elite..elite + ROOM_KINDS], &[0, 0, 0, 1, 0, 0]);
        let shop = room_group(4, 12).expect("row 12 has rooms");
        assert_eq!(bits[shop + Room::Shop.ordinal()], 1);
        assert_eq!(room_group(5, 8), None);
        assert_eq!(room_group(0, 0), None);
        assert_eq!(room_group(0, 13), None);
        // Room::None has no one-hot position.
        let empty = room_group(0, 1).expect("row 1 has rooms");
        assert!(bits[empty..empty + ROOM_KINDS].iter().all(|&b| b == 0));
    }

    #[test]
    fn row_thirteen_room_kind_is_dropped() {
        let base = sample_map();
        let mut changed = base.clone();
        for x in 0..MAP_WIDTH {
            changed.set_room(x, 13, Room::Elite);
        }
        assert_eq!(room_type_at(&changed, 3, 13), Room::Elite);
        assert_eq!(encode_map(&base), encode_map(&changed));
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let map = sample_map();
        assert_eq!(room_type_at(&map, -1, 0), Room::Invalid);
        assert_eq!(room_type_at(&map, 7, 0), Room::Invalid);
        assert_eq!(room_type_at(&map, 0, 15), Room::Invalid);
        assert_eq!(room_type_at(&map, 2, 1), Room::Elite);
        assert!(!has_edge(&map, 7, 0, 0));
        assert!(!has_edge(&map, 0, -2, 0));
        assert!(!has_edge(&map, 0, 0, -1));
        assert!(has_edge(&map, 0, 0, 1));
        assert!(!has_edge(&map, 0, 0, 2));
    }

    #[test]
    fn virtual_start_node_reads_entry_columns() {
        let map = sample_map();
        assert!(has_edge(&map, -1, 0, 0));
        assert!(has_edge(&map, -1, 0, 3));
        assert!(!has_edge(&map, -1, 0, 1));
        assert!(!has_edge(&map, -1, 0, 7));
        assert!(!has_edge(&map, -1, 0, -1));
    }
}
