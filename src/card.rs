use serde::{Deserialize, Serialize};

/// Color class of a card identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Colorless,
    Curse,
}

/// Card type class. The ordinal is emitted into the hand detail block.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Attack,
    Skill,
    Power,
    Status,
    Curse,
}

impl CardType {
    #[inline]
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

pub const HAND_LIMIT: usize = 10;
pub const COST_X: i8 = -1;
pub const COST_UNPLAYABLE: i8 = -2;

named_enum! {
    /// Every card identity the snapshot model knows. The name is the canonical
    /// display name used as the colorless sort key.
    #[repr(u16)]
    pub enum CardId {
        Invalid => "INVALID",
        Anger => "ANGER",
        Apotheosis => "APOTHEOSIS",
        Apparition => "APPARITION",
        Armaments => "ARMAMENTS",
        AscendersBane => "ASCENDERS_BANE",
        BandageUp => "BANDAGE_UP",
        Barricade => "BARRICADE",
        Bash => "BASH",
        BattleTrance => "BATTLE_TRANCE",
        BecomeAlmighty => "BECOME_ALMIGHTY",
        Berserk => "BERSERK",
        Beta => "BETA",
        Bite => "BITE",
        Blind => "BLIND",
        BloodForBlood => "BLOOD_FOR_BLOOD",
        Bloodletting => "BLOODLETTING",
        Bludgeon => "BLUDGEON",
        BodySlam => "BODY_SLAM",
        Brutality => "BRUTALITY",
        Burn => "BURN",
        BurningPact => "BURNING_PACT",
        Carnage => "CARNAGE",
        Chrysalis => "CHRYSALIS",
        Clash => "CLASH",
        Cleave => "CLEAVE",
        Clothesline => "CLOTHESLINE",
        Clumsy => "CLUMSY",
        Combust => "COMBUST",
        Corruption => "CORRUPTION",
        CurseOfTheBell => "CURSE_OF_THE_BELL",
        DarkEmbrace => "DARK_EMBRACE",
        DarkShackles => "DARK_SHACKLES",
        Dazed => "DAZED",
        Decay => "DECAY",
        DeepBreath => "DEEP_BREATH",
        DefendRed => "DEFEND_RED",
        DemonForm => "DEMON_FORM",
        Disarm => "DISARM",
        Discovery => "DISCOVERY",
        DoubleTap => "DOUBLE_TAP",
        Doubt => "DOUBT",
        DramaticEntrance => "DRAMATIC_ENTRANCE",
        Dropkick => "DROPKICK",
        DualWield => "DUAL_WIELD",
        Enlightenment => "ENLIGHTENMENT",
        Entrench => "ENTRENCH",
        Evolve => "EVOLVE",
        Exhume => "EXHUME",
        Expunger => "EXPUNGER",
        FameAndFortune => "FAME_AND_FORTUNE",
        Feed => "FEED",
        FeelNoPain => "FEEL_NO_PAIN",
        FiendFire => "FIEND_FIRE",
        Finesse => "FINESSE",
        FireBreathing => "FIRE_BREATHING",
        FlameBarrier => "FLAME_BARRIER",
        FlashOfSteel => "FLASH_OF_STEEL",
        Flex => "FLEX",
        Forethought => "FORETHOUGHT",
        GhostlyArmor => "GHOSTLY_ARMOR",
        GoodInstincts => "GOOD_INSTINCTS",
        HandOfGreed => "HAND_OF_GREED",
        Havoc => "HAVOC",
        Headbutt => "HEADBUTT",
        HeavyBlade => "HEAVY_BLADE",
        Hemokinesis => "HEMOKINESIS",
        Immolate => "IMMOLATE",
        Impatience => "IMPATIENCE",
        Impervious => "IMPERVIOUS",
        InfernalBlade => "INFERNAL_BLADE",
        Inflame => "INFLAME",
        Injury => "INJURY",
        Insight => "INSIGHT",
        Intimidate => "INTIMIDATE",
        IronWave => "IRON_WAVE",
        JackOfAllTrades => "JACK_OF_ALL_TRADES",
        Jax => "JAX",
        Juggernaut => "JUGGERNAUT",
        LimitBreak => "LIMIT_BREAK",
        LiveForever => "LIVE_FOREVER",
        Madness => "MADNESS",
        Magnetism => "MAGNETISM",
        MasterOfStrategy => "MASTER_OF_STRATEGY",
        Mayhem => "MAYHEM",
        Metallicize => "METALLICIZE",
        Metamorphosis => "METAMORPHOSIS",
        MindBlast => "MIND_BLAST",
        Miracle => "MIRACLE",
        Necronomicurse => "NECRONOMICURSE",
        Normality => "NORMALITY",
        Offering => "OFFERING",
        Omega => "OMEGA",
        Pain => "PAIN",
        Panacea => "PANACEA",
        Panache => "PANACHE",
        PanicButton => "PANIC_BUTTON",
        Parasite => "PARASITE",
        PerfectedStrike => "PERFECTED_STRIKE",
        PommelStrike => "POMMEL_STRIKE",
        PowerThrough => "POWER_THROUGH",
        Pride => "PRIDE",
        Pummel => "PUMMEL",
        Purity => "PURITY",
        Rage => "RAGE",
        Rampage => "RAMPAGE",
        Reaper => "REAPER",
        RecklessCharge => "RECKLESS_CHARGE",
        Regret => "REGRET",
        RitualDagger => "RITUAL_DAGGER",
        Rupture => "RUPTURE",
        SadisticNature => "SADISTIC_NATURE",
        Safety => "SAFETY",
        SearingBlow => "SEARING_BLOW",
        SecondWind => "SECOND_WIND",
        SecretTechnique => "SECRET_TECHNIQUE",
        SecretWeapon => "SECRET_WEAPON",
        SeeingRed => "SEEING_RED",
        Sentinel => "SENTINEL",
        SeverSoul => "SEVER_SOUL",
        Shame => "SHAME",
        Shiv => "SHIV",
        Shockwave => "SHOCKWAVE",
        ShrugItOff => "SHRUG_IT_OFF",
        Slimed => "SLIMED",
        Smite => "SMITE",
        SpotWeakness => "SPOT_WEAKNESS",
        StrikeRed => "STRIKE_RED",
        SwiftStrike => "SWIFT_STRIKE",
        SwordBoomerang => "SWORD_BOOMERANG",
        TheBomb => "THE_BOMB",
        ThinkingAhead => "THINKING_AHEAD",
        ThroughViolence => "THROUGH_VIOLENCE",
        Thunderclap => "THUNDERCLAP",
        Transmutation => "TRANSMUTATION",
        Trip => "TRIP",
        TrueGrit => "TRUE_GRIT",
        TwinStrike => "TWIN_STRIKE",
        Uppercut => "UPPERCUT",
        Violence => "VIOLENCE",
        Void => "VOID",
        Warcry => "WARCRY",
        Whirlwind => "WHIRLWIND",
        WildStrike => "WILD_STRIKE",
        Wound => "WOUND",
        Writhe => "WRITHE",
    }
}

/// Colorless cards offered by rewards and shops, in rarity order.
pub const COLORLESS_CARD_POOL: [CardId; 35] = [
    CardId::BandageUp,
    CardId::Blind,
    CardId::DarkShackles,
    CardId::DeepBreath,
    CardId::Discovery,
    CardId::DramaticEntrance,
    CardId::Enlightenment,
    CardId::Finesse,
    CardId::FlashOfSteel,
    CardId::Forethought,
    CardId::GoodInstincts,
    CardId::Impatience,
    CardId::JackOfAllTrades,
    CardId::Madness,
    CardId::MindBlast,
    CardId::Panacea,
    CardId::PanicButton,
    CardId::Purity,
    CardId::SwiftStrike,
    CardId::Trip,
    CardId::Apotheosis,
    CardId::Chrysalis,
    CardId::HandOfGreed,
    CardId::Magnetism,
    CardId::MasterOfStrategy,
    CardId::Mayhem,
    CardId::Metamorphosis,
    CardId::Panache,
    CardId::SadisticNature,
    CardId::SecretTechnique,
    CardId::SecretWeapon,
    CardId::TheBomb,
    CardId::ThinkingAhead,
    CardId::Transmutation,
    CardId::Violence,
];

impl CardId {
    pub fn color(self) -> CardColor {
        use CardId::*;
        match self {
            Anger | Armaments | Barricade | Bash | BattleTrance | Berserk | BloodForBlood
            | Bloodletting | Bludgeon | BodySlam | Brutality | BurningPact | Carnage | Clash
            | Cleave | Clothesline | Combust | Corruption | DarkEmbrace | DefendRed | DemonForm
            | Disarm | DoubleTap | Dropkick | DualWield | Entrench | Evolve | Exhume | Feed
            | FeelNoPain | FiendFire | FireBreathing | FlameBarrier | Flex | GhostlyArmor
            | Havoc | Headbutt | HeavyBlade | Hemokinesis | Immolate | Impervious
            | InfernalBlade | Inflame | Intimidate | IronWave | Juggernaut | LimitBreak
            | Metallicize | Offering | PerfectedStrike | PommelStrike | PowerThrough | Pummel
            | Rage | Rampage | Reaper | RecklessCharge | Rupture | SearingBlow | SecondWind
            | SeeingRed | Sentinel | SeverSoul | Shockwave | ShrugItOff | SpotWeakness
            | StrikeRed | SwordBoomerang | Thunderclap | TrueGrit | TwinStrike | Uppercut
            | Warcry | Whirlwind | WildStrike => CardColor::Red,
            AscendersBane | Clumsy | CurseOfTheBell | Decay | Doubt | Injury | Necronomicurse
            | Normality | Pain | Parasite | Pride | Regret | Shame | Writhe => CardColor::Curse,
            _ => CardColor::Colorless,
        }
    }

    pub fn card_type(self) -> CardType {
        use CardId::*;
        match self {
            Anger | Bash | BloodForBlood | Bludgeon | BodySlam | Carnage | Clash | Cleave
            | Clothesline | Dropkick | Feed | FiendFire | Headbutt | HeavyBlade | Hemokinesis
            | Immolate | IronWave | PerfectedStrike | PommelStrike | Pummel | Rampage | Reaper
            | RecklessCharge | SearingBlow | SeverSoul | StrikeRed | SwordBoomerang
            | Thunderclap | TwinStrike | Uppercut | Whirlwind | WildStrike | DramaticEntrance
            | FlashOfSteel | MindBlast | SwiftStrike | HandOfGreed | Bite | Expunger
            | RitualDagger | Shiv | Smite | ThroughViolence => CardType::Attack,
            Barricade | Berserk | Brutality | Combust | Corruption | DarkEmbrace | DemonForm
            | Evolve | FeelNoPain | FireBreathing | Inflame | Juggernaut | Metallicize
            | Rupture | Magnetism | Mayhem | Panache | SadisticNature | BecomeAlmighty
            | LiveForever | Omega => CardType::Power,
            Burn | Dazed | Slimed | Void | Wound | Invalid => CardType::Status,
            _ if self.color() == CardColor::Curse => CardType::Curse,
            _ => CardType::Skill,
        }
    }

    /// Printed energy cost; `COST_X` for X-cost cards, `COST_UNPLAYABLE` otherwise unplayable.
    pub fn base_cost(self) -> i8 {
        use CardId::*;
        match self {
            Whirlwind | Transmutation => COST_X,
            Anger | Clash | Flex | Intimidate | Offering | Rage | Berserk | Brutality
            | Bloodletting | BattleTrance | RecklessCharge | Warcry | BandageUp | Blind
            | DarkShackles | DeepBreath | DramaticEntrance | Enlightenment | Finesse
            | FlashOfSteel | Forethought | GoodInstincts | Impatience | JackOfAllTrades
            | Panacea | PanicButton | Purity | SwiftStrike | Trip | MasterOfStrategy | Panache
            | SadisticNature | SecretTechnique | SecretWeapon | ThinkingAhead | Violence
            | Insight | Jax | Miracle | Shiv | ThroughViolence => 0,
            Bash | Clothesline | HeavyBlade | PerfectedStrike | Impervious | FiendFire | Reaper
            | Immolate | Juggernaut | Carnage | DarkEmbrace | Entrench | SearingBlow
            | FlameBarrier | SeverSoul | Shockwave | Uppercut | MindBlast | Apotheosis
            | Chrysalis | HandOfGreed | Magnetism | Mayhem | Metamorphosis | TheBomb | Beta => 2,
            Bludgeon | DemonForm | Barricade | Corruption | Omega | BecomeAlmighty => 3,
            BloodForBlood => 4,
            Burn | Dazed | Void | Wound | Invalid => COST_UNPLAYABLE,
            _ if self.color() == CardColor::Curse => COST_UNPLAYABLE,
            _ => 1,
        }
    }
}

/// A card instance as it sits in the deck or in a battle pile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub upgraded: bool,
    pub cost: i8,
    pub cost_for_turn: i8,
}

impl Card {
    /// Unupgraded card at its printed cost.
    pub fn new(id: CardId) -> Self {
        let cost = id.base_cost();
        Self {
            id,
            upgraded: false,
            cost,
            cost_for_turn: cost,
        }
    }

    pub fn upgraded(id: CardId) -> Self {
        Self {
            upgraded: true,
            ..Self::new(id)
        }
    }

    #[inline]
    pub fn is_upgraded(&self) -> bool {
        self.upgraded
    }

    #[inline]
    pub fn card_type(&self) -> CardType {
        self.id.card_type()
    }

    /// Curses and statuses cannot be upgraded; Searing Blow upgrades without limit but
    /// the snapshot only tracks the flag.
    pub fn can_upgrade(&self) -> bool {
        !self.upgraded && !matches!(self.card_type(), CardType::Status | CardType::Curse)
    }

    pub fn upgrade(&mut self) {
        if self.can_upgrade() {
            self.upgraded = true;
        }
    }
}

/// The Ironclad starting deck in deterministic order.
pub fn starter_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(10);
    deck.extend(std::iter::repeat(Card::new(CardId::StrikeRed)).take(5));
    deck.extend(std::iter::repeat(Card::new(CardId::DefendRed)).take(4));
    deck.push(Card::new(CardId::Bash));
    deck
}
