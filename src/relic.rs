//! Relic identities. The ordinal doubles as the relic segment offset, so the
//! list is append-only in practice.

named_enum! {
    pub enum RelicId {
        Akabeko => "AKABEKO",
        Anchor => "ANCHOR",
        AncientTeaSet => "ANCIENT_TEA_SET",
        ArtOfWar => "ART_OF_WAR",
        Astrolabe => "ASTROLABE",
        BagOfMarbles => "BAG_OF_MARBLES",
        BagOfPreparation => "BAG_OF_PREPARATION",
        BirdFacedUrn => "BIRD_FACED_URN",
        BlackBlood => "BLACK_BLOOD",
        BlackStar => "BLACK_STAR",
        BloodyIdol => "BLOODY_IDOL",
        BloodVial => "BLOOD_VIAL",
        BlueCandle => "BLUE_CANDLE",
        BottledFlame => "BOTTLED_FLAME",
        BottledLightning => "BOTTLED_LIGHTNING",
        BottledTornado => "BOTTLED_TORNADO",
        Brimstone => "BRIMSTONE",
        BronzeScales => "BRONZE_SCALES",
        BurningBlood => "BURNING_BLOOD",
        BustedCrown => "BUSTED_CROWN",
        Calipers => "CALIPERS",
        CallingBell => "CALLING_BELL",
        CaptainsWheel => "CAPTAINS_WHEEL",
        Cauldron => "CAULDRON",
        CentennialPuzzle => "CENTENNIAL_PUZZLE",
        CeramicFish => "CERAMIC_FISH",
        ChampionBelt => "CHAMPION_BELT",
        CharonsAshes => "CHARONS_ASHES",
        ChemicalX => "CHEMICAL_X",
        CloakClasp => "CLOAK_CLASP",
        ClockworkSouvenir => "CLOCKWORK_SOUVENIR",
        CoffeeDripper => "COFFEE_DRIPPER",
        CrackedCore => "CRACKED_CORE",
        CultistHeadpiece => "CULTIST_HEADPIECE",
        CursedKey => "CURSED_KEY",
        Damaru => "DAMARU",
        DarkstonePeriapt => "DARKSTONE_PERIAPT",
        DataDisk => "DATA_DISK",
        DeadBranch => "DEAD_BRANCH",
        DollysMirror => "DOLLYS_MIRROR",
        DreamCatcher => "DREAM_CATCHER",
        Duality => "DUALITY",
        DuVuDoll => "DU_VU_DOLL",
        Ectoplasm => "ECTOPLASM",
        EmotionChip => "EMOTION_CHIP",
        EmptyCage => "EMPTY_CAGE",
        Enchiridion => "ENCHIRIDION",
        EternalFeather => "ETERNAL_FEATHER",
        FaceOfCleric => "FACE_OF_CLERIC",
        FossilizedHelix => "FOSSILIZED_HELIX",
        FrozenCore => "FROZEN_CORE",
        FrozenEgg => "FROZEN_EGG",
        FrozenEye => "FROZEN_EYE",
        FusionHammer => "FUSION_HAMMER",
        GamblingChip => "GAMBLING_CHIP",
        Ginger => "GINGER",
        Girya => "GIRYA",
        GoldenEye => "GOLDEN_EYE",
        GoldenIdol => "GOLDEN_IDOL",
        GoldPlatedCables => "GOLD_PLATED_CABLES",
        GremlinHorn => "GREMLIN_HORN",
        GremlinVisage => "GREMLIN_VISAGE",
        HandDrill => "HAND_DRILL",
        HappyFlower => "HAPPY_FLOWER",
        HolyWater => "HOLY_WATER",
        HornCleat => "HORN_CLEAT",
        HoveringKite => "HOVERING_KITE",
        IceCream => "ICE_CREAM",
        IncenseBurner => "INCENSE_BURNER",
        InkBottle => "INK_BOTTLE",
        Inserter => "INSERTER",
        JuzuBracelet => "JUZU_BRACELET",
        Kunai => "KUNAI",
        Lantern => "LANTERN",
        LeesWaffle => "LEES_WAFFLE",
        LetterOpener => "LETTER_OPENER",
        LizardTail => "LIZARD_TAIL",
        MagicFlower => "MAGIC_FLOWER",
        Mango => "MANGO",
        MarkOfPain => "MARK_OF_PAIN",
        MarkOfTheBloom => "MARK_OF_THE_BLOOM",
        Matryoshka => "MATRYOSHKA",
        MawBank => "MAW_BANK",
        MealTicket => "MEAL_TICKET",
        MeatOnTheBone => "MEAT_ON_THE_BONE",
        MedicalKit => "MEDICAL_KIT",
        Melange => "MELANGE",
        MembershipCard => "MEMBERSHIP_CARD",
        MercuryHourglass => "MERCURY_HOURGLASS",
        MoltenEgg => "MOLTEN_EGG",
        MummifiedHand => "MUMMIFIED_HAND",
        MutagenicStrength => "MUTAGENIC_STRENGTH",
        Necronomicon => "NECRONOMICON",
        NeowsLament => "NEOWS_LAMENT",
        NilrysCodex => "NILRYS_CODEX",
        NinjaScroll => "NINJA_SCROLL",
        NlothsGift => "NLOTHS_GIFT",
        NlothsHungryFace => "NLOTHS_HUNGRY_FACE",
        NuclearBattery => "NUCLEAR_BATTERY",
        Nunchaku => "NUNCHAKU",
        OddlySmoothStone => "ODDLY_SMOOTH_STONE",
        OddMushroom => "ODD_MUSHROOM",
        OldCoin => "OLD_COIN",
        Omamori => "OMAMORI",
        OrangePellets => "ORANGE_PELLETS",
        Orichalcum => "ORICHALCUM",
        OrnamentalFan => "ORNAMENTAL_FAN",
        Orrery => "ORRERY",
        PandorasBox => "PANDORAS_BOX",
        Pantograph => "PANTOGRAPH",
        PaperKrane => "PAPER_KRANE",
        PaperPhrog => "PAPER_PHROG",
        PeacePipe => "PEACE_PIPE",
        Pear => "PEAR",
        PenNib => "PEN_NIB",
        PhilosophersStone => "PHILOSOPHERS_STONE",
        Pocketwatch => "POCKETWATCH",
        PotionBelt => "POTION_BELT",
        PrayerWheel => "PRAYER_WHEEL",
        PreservedInsect => "PRESERVED_INSECT",
        PrismaticShard => "PRISMATIC_SHARD",
        PureWater => "PURE_WATER",
        QuestionCard => "QUESTION_CARD",
        RedMask => "RED_MASK",
        RedSkull => "RED_SKULL",
        RegalPillow => "REGAL_PILLOW",
        RingOfTheSerpent => "RING_OF_THE_SERPENT",
        RingOfTheSnake => "RING_OF_THE_SNAKE",
        RunicCapacitor => "RUNIC_CAPACITOR",
        RunicCube => "RUNIC_CUBE",
        RunicDome => "RUNIC_DOME",
        RunicPyramid => "RUNIC_PYRAMID",
        SacredBark => "SACRED_BARK",
        SelfFormingClay => "SELF_FORMING_CLAY",
        Shovel => "SHOVEL",
        Shuriken => "SHURIKEN",
        SingingBowl => "SINGING_BOWL",
        SlaversCollar => "SLAVERS_COLLAR",
        SlingOfCourage => "SLING_OF_COURAGE",
        SmilingMask => "SMILING_MASK",
        SneckoEye => "SNECKO_EYE",
        SneckoSkull => "SNECKO_SKULL",
        Sozu => "SOZU",
        SpiritPoop => "SPIRIT_POOP",
        SsserpentHead => "SSSERPENT_HEAD",
        StoneCalendar => "STONE_CALENDAR",
        StrangeSpoon => "STRANGE_SPOON",
        Strawberry => "STRAWBERRY",
        StrikeDummy => "STRIKE_DUMMY",
        Sundial => "SUNDIAL",
        SymbioticVirus => "SYMBIOTIC_VIRUS",
        TeardropLocket => "TEARDROP_LOCKET",
        TheAbacus => "THE_ABACUS",
        TheBoot => "THE_BOOT",
        TheCourier => "THE_COURIER",
        TheSpecimen => "THE_SPECIMEN",
        ThreadAndNeedle => "THREAD_AND_NEEDLE",
        Tingsha => "TINGSHA",
        TinyChest => "TINY_CHEST",
        TinyHouse => "TINY_HOUSE",
        Toolbox => "TOOLBOX",
        Torii => "TORII",
        ToughBandages => "TOUGH_BANDAGES",
        ToxicEgg => "TOXIC_EGG",
        ToyOrnithopter => "TOY_ORNITHOPTER",
        TungstenRod => "TUNGSTEN_ROD",
        Turnip => "TURNIP",
        TwistedFunnel => "TWISTED_FUNNEL",
        UnceasingTop => "UNCEASING_TOP",
        Vajra => "VAJRA",
        VelvetChoker => "VELVET_CHOKER",
        VioletLotus => "VIOLET_LOTUS",
        WarpedTongs => "WARPED_TONGS",
        WarPaint => "WAR_PAINT",
        Whetstone => "WHETSTONE",
        WhiteBeastStatue => "WHITE_BEAST_STATUE",
        WingBoots => "WING_BOOTS",
        WristBlade => "WRIST_BLADE",
    }
}

/// Width of the relic multi-hot segment.
pub const RELIC_COUNT: usize = 178;

const _: () = assert!(RelicId::COUNT == RELIC_COUNT);
