use serde::{Deserialize, Serialize};

named_enum! {
    /// Potion identities. `Invalid` and `EmptyPotionSlot` both encode as an empty slot.
    pub enum PotionId {
        Invalid => "INVALID",
        EmptyPotionSlot => "EMPTY_POTION_SLOT",
        Ambrosia => "AMBROSIA",
        AncientPotion => "ANCIENT_POTION",
        AttackPotion => "ATTACK_POTION",
        BlessingOfTheForge => "BLESSING_OF_THE_FORGE",
        BlockPotion => "BLOCK_POTION",
        BloodPotion => "BLOOD_POTION",
        BottledMiracle => "BOTTLED_MIRACLE",
        ColorlessPotion => "COLORLESS_POTION",
        CultistPotion => "CULTIST_POTION",
        CunningPotion => "CUNNING_POTION",
        DexterityPotion => "DEXTERITY_POTION",
        DistilledChaos => "DISTILLED_CHAOS",
        DuplicationPotion => "DUPLICATION_POTION",
        Elixir => "ELIXIR",
        EnergyPotion => "ENERGY_POTION",
        EntropicBrew => "ENTROPIC_BREW",
        EssenceOfDarkness => "ESSENCE_OF_DARKNESS",
        EssenceOfSteel => "ESSENCE_OF_STEEL",
        ExplosivePotion => "EXPLOSIVE_POTION",
        FairyPotion => "FAIRY_POTION",
        FearPotion => "FEAR_POTION",
        FirePotion => "FIRE_POTION",
        FlexPotion => "FLEX_POTION",
        FocusPotion => "FOCUS_POTION",
        FruitJuice => "FRUIT_JUICE",
        GamblersBrew => "GAMBLERS_BREW",
        GhostInAJar => "GHOST_IN_A_JAR",
        HeartOfIron => "HEART_OF_IRON",
        LiquidBronze => "LIQUID_BRONZE",
        LiquidMemories => "LIQUID_MEMORIES",
        PoisonPotion => "POISON_POTION",
        PotionOfCapacity => "POTION_OF_CAPACITY",
        PowerPotion => "POWER_POTION",
        RegenPotion => "REGEN_POTION",
        SkillPotion => "SKILL_POTION",
        SmokeBomb => "SMOKE_BOMB",
        SneckoOil => "SNECKO_OIL",
        SpeedPotion => "SPEED_POTION",
        StancePotion => "STANCE_POTION",
        StrengthPotion => "STRENGTH_POTION",
        SwiftPotion => "SWIFT_POTION",
        WeakPotion => "WEAK_POTION",
    }
}

/// Maximum potion slots a battle can expose (Potion Belt plus ascension loss never exceeds it).
pub const POTION_SLOTS: usize = 5;

impl PotionId {
    #[inline]
    pub fn is_empty_slot(self) -> bool {
        matches!(self, PotionId::Invalid | PotionId::EmptyPotionSlot)
    }

    /// Value written into the potion block: the ordinal, or 0 for an empty slot.
    pub fn encoded(self) -> i32 {
        if self.is_empty_slot() {
            0
        } else {
            self.ordinal() as i32
        }
    }
}

/// Potion belt as seen by the battle engine: fixed slot count, possibly with gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionBelt {
    pub slots: Vec<PotionId>,
}

impl PotionBelt {
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![PotionId::EmptyPotionSlot; count.min(POTION_SLOTS)],
        }
    }

    pub fn held(&self) -> usize {
        self.slots.iter().filter(|p| !p.is_empty_slot()).count()
    }

    pub fn get(&self, slot: usize) -> PotionId {
        self.slots.get(slot).copied().unwrap_or(PotionId::EmptyPotionSlot)
    }
}
