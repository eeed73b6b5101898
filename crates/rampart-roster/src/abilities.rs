//! Tower ability profiles.
//!
//! Flight, pierce, splash and boost parameters per ability. The firing
//! behavior itself lives in the simulation's ability system.

use rampart_core::constants::*;
use rampart_core::enums::Ability;

/// Which tower stat a support tower multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostStat {
    Range,
    Damage,
    /// Multiplies the fire interval, so factors below 1 fire faster.
    FireRate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boost {
    pub stat: BoostStat,
    pub factor: f64,
}

/// Static parameters of an ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityProfile {
    /// Projectile speed (pixels per tick).
    pub projectile_speed: f64,
    pub projectile_radius: f64,
    /// Hits before removal; 0 means a single hit.
    pub pierce_budget: u32,
    /// Impact splash radius for the explosive family.
    pub splash_radius: Option<f64>,
    pub boost: Option<Boost>,
}

impl AbilityProfile {
    fn projectile(speed: f64) -> Self {
        Self {
            projectile_speed: speed,
            projectile_radius: PROJECTILE_RADIUS,
            pierce_budget: 0,
            splash_radius: None,
            boost: None,
        }
    }

    fn support(stat: BoostStat, factor: f64) -> Self {
        Self {
            boost: Some(Boost { stat, factor }),
            ..Self::projectile(0.0)
        }
    }
}

/// Get the profile for a given ability.
pub fn get_profile(ability: Ability) -> AbilityProfile {
    match ability {
        Ability::Fast => AbilityProfile::projectile(FAST_PROJECTILE_SPEED),
        Ability::Pierce => AbilityProfile {
            pierce_budget: PIERCE_BUDGET,
            ..AbilityProfile::projectile(PROJECTILE_SPEED)
        },
        Ability::RailgunPierce => AbilityProfile {
            pierce_budget: RAILGUN_PIERCE_BUDGET,
            ..AbilityProfile::projectile(RAILGUN_PROJECTILE_SPEED)
        },
        Ability::Chain => AbilityProfile::projectile(CHAIN_PROJECTILE_SPEED),
        Ability::Beam => AbilityProfile {
            projectile_radius: BEAM_PROJECTILE_RADIUS,
            ..AbilityProfile::projectile(BEAM_PROJECTILE_SPEED)
        },
        Ability::Explosive => AbilityProfile {
            splash_radius: Some(EXPLOSIVE_RADIUS),
            ..AbilityProfile::projectile(PROJECTILE_SPEED)
        },
        Ability::MegaExplosive => AbilityProfile {
            splash_radius: Some(MEGA_EXPLOSIVE_RADIUS),
            ..AbilityProfile::projectile(PROJECTILE_SPEED)
        },
        Ability::Nuclear => AbilityProfile {
            splash_radius: Some(NUCLEAR_SPLASH_RADIUS),
            ..AbilityProfile::projectile(PROJECTILE_SPEED)
        },
        Ability::BoostRange => AbilityProfile::support(BoostStat::Range, RANGE_BOOST),
        Ability::BoostDamage => AbilityProfile::support(BoostStat::Damage, DAMAGE_BOOST),
        Ability::BoostSpeed => AbilityProfile::support(BoostStat::FireRate, FIRE_RATE_BOOST),
        Ability::Shield => AbilityProfile::support(BoostStat::Damage, SHIELD_DAMAGE_BOOST),
        Ability::Basic
        | Ability::Slow
        | Ability::Freeze
        | Ability::AoeFreeze
        | Ability::Burn
        | Ability::BurnSpread
        | Ability::PoisonThorns => AbilityProfile::projectile(PROJECTILE_SPEED),
    }
}
