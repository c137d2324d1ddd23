named_enum! {
    /// Monster encounters, grouped by act in spawn-table order.
    pub enum MonsterEncounter {
        Invalid => "INVALID",
        Cultist => "CULTIST",
        JawWorm => "JAW_WORM",
        TwoLouse => "TWO_LOUSE",
        SmallSlimes => "SMALL_SLIMES",
        GremlinGang => "GREMLIN_GANG",
        LargeSlime => "LARGE_SLIME",
        LotsOfSlimes => "LOTS_OF_SLIMES",
        BlueSlaver => "BLUE_SLAVER",
        RedSlaver => "RED_SLAVER",
        ThreeLouse => "THREE_LOUSE",
        TwoFungiBeasts => "TWO_FUNGI_BEASTS",
        ExordiumThugs => "EXORDIUM_THUGS",
        ExordiumWildlife => "EXORDIUM_WILDLIFE",
        Looter => "LOOTER",
        GremlinNob => "GREMLIN_NOB",
        Lagavulin => "LAGAVULIN",
        ThreeSentries => "THREE_SENTRIES",
        SlimeBoss => "SLIME_BOSS",
        TheGuardian => "THE_GUARDIAN",
        Hexaghost => "HEXAGHOST",
        SphericGuardian => "SPHERIC_GUARDIAN",
        Chosen => "CHOSEN",
        ShellParasite => "SHELL_PARASITE",
        ThreeByrds => "THREE_BYRDS",
        TwoThieves => "TWO_THIEVES",
        ChosenAndByrds => "CHOSEN_AND_BYRDS",
        SentryAndSphere => "SENTRY_AND_SPHERE",
        SnakePlant => "SNAKE_PLANT",
        Snecko => "SNECKO",
        CenturionAndHealer => "CENTURION_AND_HEALER",
        CultistAndChosen => "CULTIST_AND_CHOSEN",
        ThreeCultists => "THREE_CULTISTS",
        ShelledParasiteAndFungi => "SHELLED_PARASITE_AND_FUNGI",
        GremlinLeader => "GREMLIN_LEADER",
        Slavers => "SLAVERS",
        BookOfStabbing => "BOOK_OF_STABBING",
        Automaton => "AUTOMATON",
        Collector => "COLLECTOR",
        Champ => "CHAMP",
        ThreeDarklings => "THREE_DARKLINGS",
        OrbWalker => "ORB_WALKER",
        ThreeShapes => "THREE_SHAPES",
        SpireGrowth => "SPIRE_GROWTH",
        Transient => "TRANSIENT",
        FourShapes => "FOUR_SHAPES",
        Maw => "MAW",
        SphereAndTwoShapes => "SPHERE_AND_TWO_SHAPES",
        JawWormHorde => "JAW_WORM_HORDE",
        WrithingMass => "WRITHING_MASS",
        GiantHead => "GIANT_HEAD",
        Nemesis => "NEMESIS",
        Reptomancer => "REPTOMANCER",
        AwakenedOne => "AWAKENED_ONE",
        TimeEater => "TIME_EATER",
        DonuAndDeca => "DONU_AND_DECA",
        ShieldAndSpear => "SHIELD_AND_SPEAR",
        TheHeart => "THE_HEART",
    }
}

impl MonsterEncounter {
    /// Act-ending bosses plus the act four heart.
    pub const FINAL_BOSSES: [MonsterEncounter; 10] = [
        MonsterEncounter::SlimeBoss,
        MonsterEncounter::Hexaghost,
        MonsterEncounter::TheGuardian,
        MonsterEncounter::Champ,
        MonsterEncounter::Automaton,
        MonsterEncounter::Collector,
        MonsterEncounter::TimeEater,
        MonsterEncounter::DonuAndDeca,
        MonsterEncounter::AwakenedOne,
        MonsterEncounter::TheHeart,
    ];

    pub fn is_final_boss(self) -> bool {
        Self::FINAL_BOSSES.contains(&self)
    }
}
