use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

named_enum! {
    /// Player buffs and debuffs tracked by the battle engine outside the fixed fields.
    pub enum PlayerStatus {
        Vulnerable => "VULNERABLE",
        Weak => "WEAK",
        Frail => "FRAIL",
        Metallicize => "METALLICIZE",
        PlatedArmor => "PLATED_ARMOR",
        Thorns => "THORNS",
        Regen => "REGEN",
        Intangible => "INTANGIBLE",
        Buffer => "BUFFER",
        Barricade => "BARRICADE",
        Corruption => "CORRUPTION",
        DemonForm => "DEMON_FORM",
        NoxiousFumes => "NOXIOUS_FUMES",
        AfterImage => "AFTER_IMAGE",
        Combust => "COMBUST",
        DarkEmbrace => "DARK_EMBRACE",
        Evolve => "EVOLVE",
        FeelNoPain => "FEEL_NO_PAIN",
        FireBreathing => "FIRE_BREATHING",
        InfiniteBlades => "INFINITE_BLADES",
        Rage => "RAGE",
        Rupture => "RUPTURE",
        Vigor => "VIGOR",
        DoubleTap => "DOUBLE_TAP",
        Burst => "BURST",
        DrawReduction => "DRAW_REDUCTION",
        Entangled => "ENTANGLED",
        NoDraw => "NO_DRAW",
        Confused => "CONFUSED",
        Hex => "HEX",
        WraithForm => "WRAITH_FORM",
        Mantra => "MANTRA",
        Berserk => "BERSERK",
        Brutality => "BRUTALITY",
        Juggernaut => "JUGGERNAUT",
        Panache => "PANACHE",
        Mayhem => "MAYHEM",
        Magnetism => "MAGNETISM",
    }
}

named_enum! {
    /// Monster powers held in the generic status map.
    pub enum MonsterStatus {
        Intangible => "INTANGIBLE",
        Thorns => "THORNS",
        CurlUp => "CURL_UP",
        ModeShift => "MODE_SHIFT",
        Ritual => "RITUAL",
        Angry => "ANGRY",
        SharpHide => "SHARP_HIDE",
        Malleable => "MALLEABLE",
        Enrage => "ENRAGE",
        Fading => "FADING",
    }
}

named_enum! {
    pub enum Stance {
        Neutral => "NEUTRAL",
        Calm => "CALM",
        Wrath => "WRATH",
        Divinity => "DIVINITY",
    }
}

impl Default for Stance {
    fn default() -> Self {
        Stance::Neutral
    }
}

/// Sparse status stacks. Ordered so iteration (and serialization) is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap<K: Ord> {
    stacks: BTreeMap<K, i32>,
}

impl<K: Ord> Default for StatusMap<K> {
    fn default() -> Self {
        Self {
            stacks: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> StatusMap<K> {
    pub fn has(&self, kind: K) -> bool {
        self.stacks.contains_key(&kind)
    }

    /// Stack count, 0 when the status is absent.
    pub fn get(&self, kind: K) -> i32 {
        self.stacks.get(&kind).copied().unwrap_or(0)
    }

    /// Setting a status to 0 removes it, mirroring how the engine drops expired powers.
    pub fn set(&mut self, kind: K, amount: i32) {
        if amount == 0 {
            self.stacks.remove(&kind);
        } else {
            self.stacks.insert(kind, amount);
        }
    }

    pub fn with(mut self, kind: K, amount: i32) -> Self {
        self.set(kind, amount);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, i32)> + '_ {
        self.stacks.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
