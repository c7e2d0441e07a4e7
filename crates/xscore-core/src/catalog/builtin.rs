//! Built-in part list shipped with the catalog.

pub const BLADES: &[&str] = &[
    "AeroPegasus",
    "Bite Croc",
    "BlackShell",
    "Captain America",
    "CobaltDragoon",
    "CobaltDrake",
    "CrimsonGaruda",
    "Darth Vader",
    "DracielShield",
    "DragoonStorm",
    "DranBuster",
    "DranDagger",
    "DranSword",
    "DranzerSpiral",
    "DrigerSlash",
    "General Grievous",
    "GhostCircle",
    "Gill Shark",
    "GolemRock",
    "HellsChain",
    "HellsHammer",
    "HellsScythe",
    "Hover Wyvern",
    "ImpactDrake",
    "Iron Man",
    "Knife Shinobi",
    "KnightLance",
    "KnightMail",
    "KnightShield",
    "LeonClaw",
    "LeonCrest",
    "Lightning L-Drago (Rapid-Hit Type)",
    "Lightning L-Drago (Upper Type)",
    "Luke Skywalker",
    "Megatron",
    "Moff Gideon",
    "Mosasaurus",
    "Obi-Wan Kenobi",
    "Optimus Primal",
    "Optimus Prime",
    "PhoenixFeather",
    "PhoenixRudder",
    "PhoenixWing",
    "Quetzalcoatlus",
    "Red Hulk",
    "RhinoHorn",
    "Roar Tyranno",
    "SamuraiSaber",
    "Savage Bear",
    "ScorpioSpear",
    "SharkEdge",
    "ShelterDrake",
    "ShinobiShadow",
    "SilverWolf",
    "SphinxCowl",
    "Spider-Man",
    "Spinosaurus",
    "Starscream",
    "Steel Samurai",
    "StormPegasis",
    "T. Rex",
    "Talon Ptera",
    "Thanos",
    "The Mandalorian",
    "Trypio",
    "Tusk Mammoth",
    "TyrannoBeat",
    "UnicornSting",
    "Venom",
    "VictoryValkyrie",
    "ViperTail",
    "WeissTiger",
    "WhaleWave",
    "WizardArrow",
    "WizardRod",
    "WyvernGale",
    "XenoXcalibur",
    "Yell Kong",
];

pub const RATCHETS: &[&str] = &[
    "0-70",
    "0-80",
    "1-60",
    "1-80",
    "2-60",
    "2-70",
    "2-80",
    "3-60",
    "3-70",
    "3-80",
    "3-85",
    "4-55",
    "4-60",
    "4-70",
    "4-80",
    "5-60",
    "5-70",
    "5-80",
    "6-60",
    "6-80",
    "7-60",
    "7-70",
    "7-80",
    "9-60",
    "9-70",
    "9-80",
];

pub const BITS: &[&str] = &[
    "Ball",
    "Flat",
    "Needle",
    "Point",
    "Rush",
    "Spike",
    "Taper",
    "Accel",
    "Bound Spike",
    "Cyclone",
    "Disk Ball",
    "Dot",
    "Elevate",
    "Free Ball",
    "Gear Ball",
    "Gear Flat",
    "Gear Needle",
    "Gear Point",
    "Gear Rush",
    "Glide",
    "Hexa",
    "High Needle",
    "High Taper",
    "Kick",
    "Level",
    "Low Flat",
    "Low Orb",
    "Low Rush",
    "Metal Needle",
    "Orb",
    "Quake",
    "Rubber Accel",
    "Trans Point",
    "Under Needle",
    "Unite",
    "Vortex",
    "Wedge",
    "Zap",
];

/// Composites seeded into an empty saved-composite store: (blade, ratchet, bit)
pub const PERMANENT_COMPOSITES: &[(&str, &str, &str)] = &[
    ("DranBuster", "1-60", "Flat"),
    ("GolemRock", "6-60", "Low Rush"),
    ("SilverWolf", "3-60", "High Needle"),
    ("CobaltDragoon", "3-60", "Elevate"),
    ("WizardRod", "3-60", "Bound Spike"),
    ("ImpactDrake", "4-70", "Level"),
];
