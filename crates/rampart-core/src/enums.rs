//! Enumeration types used throughout the simulation.
//!
//! Enemy kinds and tower abilities travel through configuration as string
//! tags. Parsing never fails: an unrecognized tag resolves to the `basic`
//! variant.

use serde::{Deserialize, Serialize};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnemyKind {
    #[default]
    Basic,
    Fast,
    Armored,
    Crystal,
    Desert,
    Burrower,
    Mirage,
    Ice,
    Frozen,
    Avalanche,
    Fire,
    Lava,
    Phoenix,
    Inferno,
    Storm,
    Lightning,
    Thunder,
    Electro,
    Shadow,
    Void,
    Phantom,
    Wraith,
    Cosmic,
    Dimensional,
    Ultimate,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 25] = [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Armored,
        EnemyKind::Crystal,
        EnemyKind::Desert,
        EnemyKind::Burrower,
        EnemyKind::Mirage,
        EnemyKind::Ice,
        EnemyKind::Frozen,
        EnemyKind::Avalanche,
        EnemyKind::Fire,
        EnemyKind::Lava,
        EnemyKind::Phoenix,
        EnemyKind::Inferno,
        EnemyKind::Storm,
        EnemyKind::Lightning,
        EnemyKind::Thunder,
        EnemyKind::Electro,
        EnemyKind::Shadow,
        EnemyKind::Void,
        EnemyKind::Phantom,
        EnemyKind::Wraith,
        EnemyKind::Cosmic,
        EnemyKind::Dimensional,
        EnemyKind::Ultimate,
    ];

    /// Parse a configuration tag. Unknown tags fall back to `Basic`.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == tag)
            .unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Armored => "armored",
            EnemyKind::Crystal => "crystal",
            EnemyKind::Desert => "desert",
            EnemyKind::Burrower => "burrower",
            EnemyKind::Mirage => "mirage",
            EnemyKind::Ice => "ice",
            EnemyKind::Frozen => "frozen",
            EnemyKind::Avalanche => "avalanche",
            EnemyKind::Fire => "fire",
            EnemyKind::Lava => "lava",
            EnemyKind::Phoenix => "phoenix",
            EnemyKind::Inferno => "inferno",
            EnemyKind::Storm => "storm",
            EnemyKind::Lightning => "lightning",
            EnemyKind::Thunder => "thunder",
            EnemyKind::Electro => "electro",
            EnemyKind::Shadow => "shadow",
            EnemyKind::Void => "void",
            EnemyKind::Phantom => "phantom",
            EnemyKind::Wraith => "wraith",
            EnemyKind::Cosmic => "cosmic",
            EnemyKind::Dimensional => "dimensional",
            EnemyKind::Ultimate => "ultimate",
        }
    }
}

impl From<String> for EnemyKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<EnemyKind> for String {
    fn from(kind: EnemyKind) -> Self {
        kind.tag().to_string()
    }
}

/// Descriptive enemy traits, surfaced to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyTrait {
    Armored,
    Reflective,
    Sandstorm,
    Underground,
    Illusion,
    Freezing,
    IceArmor,
    Massive,
    Burning,
    Molten,
    Rebirth,
    Flying,
    FireAura,
    Electric,
    Chaining,
    Shockwave,
    Electromagnetic,
    Stealth,
    Absorbing,
    Phasing,
    Soul,
    Cosmic,
    Portal,
    Ultimate,
}

/// Special ability a tower executes when it fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ability {
    /// Single projectile.
    #[default]
    Basic,
    /// Single fast projectile.
    Fast,
    /// Projectile that passes through a few enemies.
    Pierce,
    /// Very fast projectile that passes through many enemies.
    RailgunPierce,
    /// Projectile + slow applied to the target.
    Slow,
    /// Projectile + freeze applied to the target.
    Freeze,
    /// Projectile + freeze applied to everything near the target.
    AoeFreeze,
    /// Projectile + burn applied to the target.
    Burn,
    /// Burn on the target plus a weaker burn on its neighbors.
    BurnSpread,
    /// Projectile + poison applied to the target.
    PoisonThorns,
    /// Projectile + lightning that hops between nearby enemies.
    Chain,
    /// Continuous direct damage while the target stays in range.
    Beam,
    /// Small splash on impact.
    Explosive,
    /// Medium splash on impact.
    MegaExplosive,
    /// Large splash on impact plus a blast at fire time.
    Nuclear,
    /// Support: multiplies neighbors' range.
    BoostRange,
    /// Support: multiplies neighbors' damage.
    BoostDamage,
    /// Support: shortens neighbors' fire interval.
    BoostSpeed,
    /// Support: reinforces neighbors' damage.
    Shield,
}

impl Ability {
    pub const ALL: [Ability; 19] = [
        Ability::Basic,
        Ability::Fast,
        Ability::Pierce,
        Ability::RailgunPierce,
        Ability::Slow,
        Ability::Freeze,
        Ability::AoeFreeze,
        Ability::Burn,
        Ability::BurnSpread,
        Ability::PoisonThorns,
        Ability::Chain,
        Ability::Beam,
        Ability::Explosive,
        Ability::MegaExplosive,
        Ability::Nuclear,
        Ability::BoostRange,
        Ability::BoostDamage,
        Ability::BoostSpeed,
        Ability::Shield,
    ];

    /// Parse a configuration tag. Unknown tags fall back to `Basic`.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|ability| ability.tag() == tag)
            .unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Ability::Basic => "basic",
            Ability::Fast => "fast",
            Ability::Pierce => "pierce",
            Ability::RailgunPierce => "railgun_pierce",
            Ability::Slow => "slow",
            Ability::Freeze => "freeze",
            Ability::AoeFreeze => "aoe_freeze",
            Ability::Burn => "burn",
            Ability::BurnSpread => "burn_spread",
            Ability::PoisonThorns => "poison_thorns",
            Ability::Chain => "chain",
            Ability::Beam => "beam",
            Ability::Explosive => "explosive",
            Ability::MegaExplosive => "mega_explosive",
            Ability::Nuclear => "nuclear",
            Ability::BoostRange => "boost_range",
            Ability::BoostDamage => "boost_damage",
            Ability::BoostSpeed => "boost_speed",
            Ability::Shield => "shield",
        }
    }

    /// Support abilities deal no damage and fire no projectile.
    pub fn is_support(&self) -> bool {
        matches!(
            self,
            Ability::BoostRange | Ability::BoostDamage | Ability::BoostSpeed | Ability::Shield
        )
    }
}

impl From<String> for Ability {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Ability> for String {
    fn from(ability: Ability) -> Self {
        ability.tag().to_string()
    }
}

/// Game phase (top-level state), derived from `GameState` each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    LevelTransition,
    GameOver,
    Victory,
}
