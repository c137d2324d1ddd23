use burn_ndarray::NdArray;

use spire_obs::map::{MAP_HEIGHT, MAP_WIDTH};
use spire_obs::ml::map_encoding::{
    EdgeDirection, ENTRY_BITS, ROOM_KINDS, ROOM_ROWS, edge_bit, encode_map_tensor, room_group,
};
use spire_obs::synthetic::SnapshotGenerator;
use spire_obs::{MAP_BITS, Map, Room, encode_map, has_edge, room_type_at};

type Backend = NdArray<f32>;

#[test]
fn map_bits_have_fixed_length() {
    assert_eq!(MAP_BITS, 7 + 294 + 462);
    let mut generator = SnapshotGenerator::new(5);
    for _ in 0..10 {
        let bits = encode_map(&generator.map());
        assert_eq!(bits.len(), MAP_BITS);
        assert!(bits.iter().all(|&b| b <= 1));
    }
}

#[test]
fn accessors_agree_with_bits() {
    let mut generator = SnapshotGenerator::new(17);
    for _ in 0..10 {
        let map = generator.map();
        let bits = encode_map(&map);

        for x in 0..MAP_WIDTH as i32 {
            assert_eq!(has_edge(&map, -1, 0, x), bits[x as usize] == 1);
        }

        for y in 0..(MAP_HEIGHT - 1) as i32 {
            for x in 0..MAP_WIDTH as i32 {
                let mut left = false;
                let mut straight = false;
                let mut right = false;
                for target in 0..MAP_WIDTH as i32 {
                    if has_edge(&map, x, y, target) {
                        left |= target < x;
                        straight |= target == x;
                        right |= target > x;
                    }
                }
                let (ux, uy) = (x as usize, y as usize);
                assert_eq!(bits[edge_bit(ux, uy, EdgeDirection::Left)] == 1, left);
                assert_eq!(bits[edge_bit(ux, uy, EdgeDirection::Straight)] == 1, straight);
                assert_eq!(bits[edge_bit(ux, uy, EdgeDirection::Right)] == 1, right);
            }
        }

        for &y in &ROOM_ROWS {
            for x in 0..MAP_WIDTH {
                let start = room_group(x, y).expect("room row");
                let group = &bits[start..start + ROOM_KINDS];
                let room = room_type_at(&map, x as i32, y as i32);
                if room.ordinal() < ROOM_KINDS {
                    assert_eq!(group[room.ordinal()], 1);
                    assert_eq!(group.iter().sum::<u8>(), 1);
                } else {
                    assert!(group.iter().all(|&b| b == 0));
                }
            }
        }
    }
}

#[test]
fn out_of_range_queries_are_safe() {
    let map = Map::empty();
    for (x, y) in [(-2, 0), (7, 3), (3, -1), (3, 15), (i32::MIN, i32::MAX)] {
        assert_eq!(room_type_at(&map, x, y), Room::Invalid);
        assert!(!has_edge(&map, x, y, 0));
    }
}

#[test]
fn single_path_map() {
    let mut map = Map::empty();
    for y in 0..MAP_HEIGHT - 1 {
        map.add_edge(3, y, 3);
        map.set_room(3, y, Room::Monster);
    }
    let bits = encode_map(&map);
    assert_eq!(&bits[..ENTRY_BITS], &[0, 0, 0, 1, 0, 0, 0]);
    let edge_count: u32 = bits[ENTRY_BITS..ENTRY_BITS + 294].iter().map(|&b| u32::from(b)).sum();
    assert_eq!(edge_count, (MAP_HEIGHT - 1) as u32);
    let room_count: u32 = bits[ENTRY_BITS + 294..].iter().map(|&b| u32::from(b)).sum();
    assert_eq!(room_count, ROOM_ROWS.len() as u32);

    let tensor = encode_map_tensor::<Backend>(&map);
    assert_eq!(tensor.dims(), [1, MAP_BITS]);
}
