use std::fmt::Write;

use crate::card::CardId;
use crate::encounter::MonsterEncounter;
use crate::map::{MAP_HEIGHT, MAP_WIDTH, Map, Room};
use crate::ml::encoding::{Observation, ObservationEncoder};
use crate::ml::layout::{self, SegmentKind};
use crate::relic::RelicId;

/// Customize observation rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Print battle segments even when every entry is zero.
    pub show_empty_segments: bool,
    /// Print `value/bound` instead of the bare value.
    pub show_bounds: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_empty_segments: false,
            show_bounds: false,
        }
    }
}

pub fn render_observation(encoder: &ObservationEncoder, observation: &Observation) -> String {
    render_observation_with_options(encoder, observation, VisualOptions::default())
}

pub fn render_observation_with_options(
    encoder: &ObservationEncoder,
    observation: &Observation,
    options: VisualOptions,
) -> String {
    let bounds = layout::bounds();
    let mut out = String::new();
    for (start, segment) in layout::segments() {
        let values = &observation[start..start + segment.width];
        let empty = values.iter().all(|&v| v == 0);
        if empty && segment.battle_only && !options.show_empty_segments {
            continue;
        }
        let _ = write!(out, "[{start:>3}] {:<15}", segment.name);
        match segment.kind {
            SegmentKind::Boss => {
                let boss = values
                    .iter()
                    .position(|&v| v == 1)
                    .and_then(|slot| encoder.boss_slots().boss_at(slot))
                    .map_or("--", MonsterEncounter::name);
                let _ = writeln!(out, " {boss}");
            }
            SegmentKind::Deck => {
                let _ = writeln!(out, " {}", describe_deck(encoder, values));
            }
            SegmentKind::Relics => {
                let names: Vec<&str> = values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v != 0)
                    .filter_map(|(i, _)| RelicId::from_ordinal(i).map(RelicId::name))
                    .collect();
                let _ = writeln!(out, " {}", names.join(", "));
            }
            SegmentKind::HandIds => {
                let names: Vec<&str> = values
                    .iter()
                    .filter(|&&v| v != 0)
                    .filter_map(|&v| usize::try_from(v).ok().and_then(CardId::from_ordinal))
                    .map(CardId::name)
                    .collect();
                let _ = writeln!(out, " {}", names.join(" "));
            }
            _ => {
                let entries: Vec<String> = values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        if options.show_bounds {
                            format!("{v}/{}", bounds[start + i])
                        } else {
                            v.to_string()
                        }
                    })
                    .collect();
                let _ = writeln!(out, " {}", entries.join(" "));
            }
        }
    }
    out
}

fn describe_deck(encoder: &ObservationEncoder, values: &[i32]) -> String {
    let mut parts = Vec::new();
    for (id, slot) in encoder.card_slots().assignments() {
        for upgraded in [false, true] {
            let count = values.get(slot * 2 + usize::from(upgraded)).copied().unwrap_or(0);
            if count > 0 {
                let plus = if upgraded { "+" } else { "" };
                parts.push(format!("{count}x {}{plus}", id.name()));
            }
        }
    }
    if parts.is_empty() {
        String::from("(empty)")
    } else {
        parts.join(", ")
    }
}

fn room_symbol(room: Room) -> char {
    match room {
        Room::Shop => '$',
        Room::Rest => 'R',
        Room::Event => '?',
        Room::Elite => 'E',
        Room::Monster => 'M',
        Room::Treasure => 'T',
        Room::Boss => 'B',
        Room::BossTreasure => 'b',
        Room::None => ' ',
        Room::Invalid => '!',
    }
}

/// Map drawn top row first, with `/ | \` marking the edges into each row.
pub fn render_map(map: &Map) -> String {
    let mut out = String::new();
    for y in (0..MAP_HEIGHT).rev() {
        if y + 1 < MAP_HEIGHT {
            let mut connectors = vec![' '; MAP_WIDTH * 3];
            for x in 0..MAP_WIDTH {
                for &target in &map.node(x, y).edges {
                    let target = usize::from(target);
                    let (col, ch) = match target.cmp(&x) {
                        std::cmp::Ordering::Less => (x * 3, '\\'),
                        std::cmp::Ordering::Equal => (x * 3 + 1, '|'),
                        std::cmp::Ordering::Greater => (x * 3 + 2, '/'),
                    };
                    connectors[col] = ch;
                }
            }
            let line: String = connectors.into_iter().collect();
            let _ = writeln!(out, "    {}", line.trim_end());
        }
        let mut row = String::with_capacity(MAP_WIDTH * 3);
        for x in 0..MAP_WIDTH {
            let node = map.node(x, y);
            let symbol = if node.has_edges() || node.room != Room::None {
                room_symbol(node.room)
            } else {
                '.'
            };
            let _ = write!(row, " {symbol} ");
        }
        let _ = writeln!(out, "{y:>2}: {}", row.trim_end());
    }
    out
}
