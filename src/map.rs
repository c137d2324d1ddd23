use serde::{Deserialize, Serialize};

pub const MAP_WIDTH: usize = 7;
pub const MAP_HEIGHT: usize = 15;
pub const MAX_EDGES: usize = 3;

/// Room kinds. Only the first six ordinals can appear on the variable rows.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Room {
    Shop,
    Rest,
    Event,
    Elite,
    Monster,
    Treasure,
    Boss,
    BossTreasure,
    #[default]
    None,
    Invalid,
}

impl Room {
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapNode {
    pub x: u8,
    pub y: u8,
    /// Target columns in row `y + 1`.
    pub edges: Vec<u8>,
    pub room: Room,
}

impl MapNode {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }
}

/// One act's map as produced by the map generator: 15 rows of 7 columns.
///
/// Deserialization validates the grid shape, so every `Map` value is well formed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<MapNode>>", into = "Vec<Vec<MapNode>>")]
pub struct Map {
    rows: Vec<Vec<MapNode>>,
}

impl Default for Map {
    fn default() -> Self {
        Self::empty()
    }
}

impl Map {
    /// Grid with every node unconnected and `Room::None`.
    pub fn empty() -> Self {
        let rows = (0..MAP_HEIGHT)
            .map(|y| {
                (0..MAP_WIDTH)
                    .map(|x| MapNode {
                        x: x as u8,
                        y: y as u8,
                        ..MapNode::default()
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Node at an in-range coordinate. Callers needing bounds checks use
    /// `room_type_at` / `has_edge` from the map encoder instead.
    pub fn node(&self, x: usize, y: usize) -> &MapNode {
        &self.rows[y][x]
    }

    pub fn node_mut(&mut self, x: usize, y: usize) -> &mut MapNode {
        &mut self.rows[y][x]
    }

    pub fn set_room(&mut self, x: usize, y: usize, room: Room) {
        self.node_mut(x, y).room = room;
    }

    /// Connects `(x, y)` to `(target_x, y + 1)`. Returns false when the edge is
    /// out of range, already present, or the node is at edge capacity.
    pub fn add_edge(&mut self, x: usize, y: usize, target_x: usize) -> bool {
        if x >= MAP_WIDTH || y + 1 >= MAP_HEIGHT || target_x >= MAP_WIDTH {
            return false;
        }
        let node = self.node_mut(x, y);
        if node.edges.len() >= MAX_EDGES || node.edges.contains(&(target_x as u8)) {
            return false;
        }
        node.edges.push(target_x as u8);
        node.edges.sort_unstable();
        true
    }

    /// Structural check for maps loaded from snapshots.
    pub fn is_well_formed(&self) -> bool {
        self.rows.len() == MAP_HEIGHT
            && self.rows.iter().enumerate().all(|(y, row)| {
                row.len() == MAP_WIDTH
                    && row.iter().all(|node| {
                        node.edges.len() <= MAX_EDGES
                            && node.edges.iter().all(|&e| (e as usize) < MAP_WIDTH)
                            && (y + 1 < MAP_HEIGHT || node.edges.is_empty())
                    })
            })
    }
}

impl TryFrom<Vec<Vec<MapNode>>> for Map {
    type Error = &'static str;

    fn try_from(rows: Vec<Vec<MapNode>>) -> Result<Self, Self::Error> {
        let map = Self { rows };
        if map.is_well_formed() {
            Ok(map)
        } else {
            Err("map must have 15 rows of 7 nodes with at most 3 in-range edges each")
        }
    }
}

impl From<Map> for Vec<Vec<MapNode>> {
    fn from(map: Map) -> Self {
        map.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_is_well_formed() {
        let map = Map::empty();
        assert!(map.is_well_formed());
        assert_eq!(map.node(6, 14).x, 6);
        assert_eq!(map.node(6, 14).y, 14);
        assert_eq!(map.node(3, 3).room, Room::None);
    }

    #[test]
    fn add_edge_rejects_duplicates_and_overflow() {
        let mut map = Map::empty();
        assert!(map.add_edge(3, 0, 2));
        assert!(!map.add_edge(3, 0, 2));
        assert!(map.add_edge(3, 0, 3));
        assert!(map.add_edge(3, 0, 4));
        assert!(!map.add_edge(3, 0, 5));
        assert!(!map.add_edge(0, 14, 0));
        assert_eq!(map.node(3, 0).edges, vec![2, 3, 4]);
    }

    #[test]
    fn truncated_grid_fails_validation() {
        let mut rows: Vec<Vec<MapNode>> = Map::empty().into();
        rows.pop();
        assert!(Map::try_from(rows).is_err());
    }
}
