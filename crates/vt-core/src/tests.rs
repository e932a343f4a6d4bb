//! Unit tests for vt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, PersonId, RoomId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CarId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CarId(0) < CarId(1));
        assert!(PersonId(100) > PersonId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CarId::INVALID.0, u32::MAX);
        assert_eq!(RoomId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::GridPos;

    #[test]
    fn floor_index_rounds_to_nearest() {
        assert_eq!(GridPos::new(0.0, 24.9).floor_index(), 25);
        assert_eq!(GridPos::new(0.0, 25.1).floor_index(), 25);
        assert_eq!(GridPos::new(0.0, 25.0).floor_index(), 25);
    }

    #[test]
    fn distances_are_absolute() {
        let a = GridPos::new(1.0, 10.0);
        let b = GridPos::new(4.0, 7.5);
        assert_eq!(a.dx(b), 3.0);
        assert_eq!(b.dx(a), 3.0);
        assert_eq!(a.dy(b), 2.5);
    }
}

#[cfg(test)]
mod time {
    use crate::{DayClock, DaySchedule, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(t), 5);
    }

    #[test]
    fn day_rollover() {
        let mut clock = DayClock::new(3);
        assert_eq!(clock.day, 1);
        assert!(!clock.advance()); // tick_of_day 1
        assert!(!clock.advance()); // tick_of_day 2
        assert!(clock.advance()); // rolls to day 2
        assert_eq!(clock.day, 2);
        assert_eq!(clock.tick_of_day, 0);
        assert_eq!(clock.current_tick, Tick(3));
    }

    #[test]
    fn weekend_cycle() {
        let mut clock = DayClock::new(1);
        // Day 1..=5 are weekdays, 6 and 7 (≡ 0 mod 7) the weekend.
        let mut weekends = vec![];
        for _ in 0..14 {
            weekends.push((clock.day, clock.is_weekend()));
            clock.advance();
        }
        assert!(!weekends[0].1); // day 1
        assert!(weekends[5].1); // day 6
        assert!(weekends[6].1); // day 7
        assert!(!weekends[7].1); // day 8
        assert!(weekends[12].1); // day 13
    }

    #[test]
    fn hhmm_on_300_tick_day() {
        let clock = DayClock::new(300).with_start(1, 150);
        assert_eq!(clock.hhmm(), (12, 0)); // midday
    }

    #[test]
    fn schedule_defaults_fit_the_day() {
        let schedule = DaySchedule::default();
        assert!(schedule.validate(300).is_ok());
        assert!(schedule.validate(200).is_err()); // retail_close = 262
    }

    #[test]
    fn leisure_window_bounds() {
        let schedule = DaySchedule::default();
        assert!(!schedule.in_leisure_window(59));
        assert!(schedule.in_leisure_window(60));
        assert!(schedule.in_leisure_window(261));
        assert!(!schedule.in_leisure_window(262));
    }

    #[test]
    fn config_validation() {
        assert!(SimConfig::default().validate().is_ok());

        let mut bad = SimConfig::default();
        bad.ticks_per_day = 0;
        assert!(bad.validate().is_err());

        let mut bad = SimConfig::default();
        bad.lobby_floor = -1;
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let mut c0 = root1.child(0);
        let mut c1 = root2.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams with different offsets should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
