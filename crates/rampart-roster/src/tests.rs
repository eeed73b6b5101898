#[cfg(test)]
mod tests {
    use rampart_core::config::Ruleset;
    use rampart_core::enums::{Ability, EnemyKind, EnemyTrait};

    use crate::abilities::{self, BoostStat};
    use crate::profiles::get_profile;
    use crate::stats::{derive_stats, level_multiplier, wave_multiplier};

    #[test]
    fn test_basic_enemy_level_one_wave_one() {
        let stats = derive_stats(EnemyKind::Basic, 1, 1, &Ruleset::default());
        assert_eq!(stats.health, 60.0);
        assert!((stats.speed - 1.2).abs() < 1e-12);
        assert_eq!(stats.radius, 12.0);
        assert_eq!(stats.points, 15);
        assert_eq!(stats.money, 21);
    }

    #[test]
    fn test_stats_scale_with_level_and_wave() {
        let ruleset = Ruleset::default();
        // Level 3, wave 4: lm = 1.4, wm = 1.45.
        let stats = derive_stats(EnemyKind::Armored, 4, 3, &ruleset);
        // 180 * 1.4 * 1.45 = 365.4
        assert_eq!(stats.health, 365.0);
        assert!((stats.speed - 0.8 * 1.4).abs() < 1e-12);
        assert_eq!(stats.points, 90);
        assert_eq!(stats.money, 35 + 5 * 3);
        assert_eq!(stats.traits, &[EnemyTrait::Armored]);
    }

    #[test]
    fn test_wave_does_not_scale_speed() {
        let ruleset = Ruleset::default();
        let early = derive_stats(EnemyKind::Fast, 1, 2, &ruleset);
        let late = derive_stats(EnemyKind::Fast, 5, 2, &ruleset);
        assert_eq!(early.speed, late.speed);
        assert!(late.health > early.health);
    }

    #[test]
    fn test_health_is_floored() {
        // 40 * 1.2 * 1.15 = 55.2
        let stats = derive_stats(EnemyKind::Fast, 2, 2, &Ruleset::default());
        assert_eq!(stats.health, 55.0);
    }

    #[test]
    fn test_multipliers() {
        let ruleset = Ruleset::default();
        assert_eq!(level_multiplier(1, &ruleset), 1.0);
        assert!((level_multiplier(6, &ruleset) - 2.0).abs() < 1e-12);
        assert_eq!(wave_multiplier(1, &ruleset), 1.0);
        assert!((wave_multiplier(5, &ruleset) - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_every_kind_has_positive_stats() {
        for kind in EnemyKind::ALL {
            let profile = get_profile(kind);
            assert!(profile.base_speed > 0.0, "{kind:?} speed");
            assert!(profile.base_health > 0.0, "{kind:?} health");
            assert!(profile.radius > 0.0, "{kind:?} radius");
        }
        assert_eq!(
            get_profile(EnemyKind::Phoenix).traits,
            &[EnemyTrait::Rebirth, EnemyTrait::Flying]
        );
    }

    #[test]
    fn test_ability_profiles() {
        let railgun = abilities::get_profile(Ability::RailgunPierce);
        assert_eq!(railgun.pierce_budget, 10);
        assert_eq!(railgun.projectile_speed, 20.0);

        assert_eq!(abilities::get_profile(Ability::Basic).pierce_budget, 0);
        assert_eq!(abilities::get_profile(Ability::Beam).projectile_radius, 2.0);
        assert_eq!(abilities::get_profile(Ability::Nuclear).splash_radius, Some(80.0));

        let battery = abilities::get_profile(Ability::BoostSpeed);
        let boost = battery.boost.unwrap();
        assert_eq!(boost.stat, BoostStat::FireRate);
        assert_eq!(boost.factor, 0.7);

        for ability in Ability::ALL {
            let profile = abilities::get_profile(ability);
            assert_eq!(profile.boost.is_some(), ability.is_support());
        }
    }
}
