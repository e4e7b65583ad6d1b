//! Unit tests for transit-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RouteId, RouteIndex, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = RouteIndex(7);
        assert_eq!(id.index(), 7);
        assert_eq!(RouteIndex::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(RouteIndex::INVALID.0, u32::MAX);
    }

    #[test]
    fn route_id_display_and_borrow() {
        let id = RouteId::from("bus-3");
        assert_eq!(id.to_string(), "bus-3");
        assert_eq!(id.as_str(), "bus-3");

        let mut map = std::collections::HashMap::new();
        map.insert(id, 1);
        assert_eq!(map.get("bus-3"), Some(&1));
    }

    #[test]
    fn vehicle_id_is_one_based_for_display() {
        let v = VehicleId::new(RouteId::from("city-bus-1"), 0);
        assert_eq!(v.to_string(), "city-bus-1-vehicle-1");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(42.6629, 21.1655);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn pristina_to_prizren_distance() {
        let pristina = GeoPoint::new(42.6629, 21.1655);
        let prizren = GeoPoint::new(42.2139, 20.7397);
        let km = pristina.distance_m(prizren) / 1000.0;
        assert!((55.0..65.0).contains(&km), "got {km} km");
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = GeoPoint::new(42.6629, 21.1655);
        let b = GeoPoint::new(42.8273, 20.9675);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_and_clamp() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, -4.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 1.0).abs() < 1e-6);
        assert!((mid.lon + 2.0).abs() < 1e-6);
        assert_eq!(a.lerp(b, 1.5), b);
        assert_eq!(a.lerp(b, -0.5), a);
    }

    #[test]
    fn from_lat_lon_array() {
        let p: GeoPoint = [42.0, 21.0].into();
        assert_eq!(p, GeoPoint::new(42.0, 21.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockTime, CoreError};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_zero_padded() {
        assert_eq!(t("06:15").to_string(), "06:15");
        assert_eq!(t("6:05").to_string(), "06:05");
        assert_eq!(t("23:59").minutes_of_day(), 1439);
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<ClockTime>().is_err());
        assert!("0615".parse::<ClockTime>().is_err());
        assert!("06:5".parse::<ClockTime>().is_err());
        assert!("ab:cd".parse::<ClockTime>().is_err());
        assert_eq!(
            "24:00".parse::<ClockTime>(),
            Err(CoreError::ClockOutOfRange { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn add_wraps_past_midnight() {
        assert_eq!(t("23:40").add_minutes(45), t("00:25"));
        assert_eq!(t("23:40") + 45, t("00:25"));
        assert_eq!(t("09:00").add_minutes(55), t("09:55"));
        assert_eq!(t("00:10").add_minutes(-20), t("23:50"));
        assert_eq!(t("12:00").add_minutes(3 * 1440), t("12:00"));
    }

    #[test]
    fn minutes_since_is_signed_without_wrap() {
        assert_eq!(t("06:35").minutes_since(t("06:15")), 20);
        assert_eq!(t("06:00").minutes_since(t("06:15")), -15);
        assert_eq!(t("00:05").minutes_since(t("23:55")), -1430);
    }

    #[test]
    fn components() {
        let x = t("17:42");
        assert_eq!(x.hour(), 17);
        assert_eq!(x.minute(), 42);
        assert_eq!(ClockTime::from_hm(17, 42).unwrap(), x);
    }

    #[test]
    fn from_minutes_wraps_negative() {
        assert_eq!(ClockTime::from_minutes(-15), t("23:45"));
        assert_eq!(ClockTime::from_minutes(1440 + 61), t("01:01"));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{RouteIndex, RouteRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = RouteRng::new(12345, RouteIndex(0));
        let mut r2 = RouteRng::new(12345, RouteIndex(0));
        for _ in 0..100 {
            let a: u32 = r1.inner().gen_range(0..1000);
            let b: u32 = r2.inner().gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_routes_differ() {
        let mut r0 = RouteRng::new(1, RouteIndex(0));
        let mut r1 = RouteRng::new(1, RouteIndex(1));
        let a: Vec<u64> = (0..4).map(|_| r0.inner().r#gen()).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.inner().r#gen()).collect();
        assert_ne!(a, b, "seeds for adjacent routes should diverge");
    }

    #[test]
    fn tick_seeds_are_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        let xs: Vec<u64> = (0..5).map(|t| a.tick_seed(t)).collect();
        let ys: Vec<u64> = (0..5).map(|t| b.tick_seed(t)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn tick_seeds_change_every_tick() {
        let mut rng = SimRng::new(9);
        let first = rng.tick_seed(0);
        let second = rng.tick_seed(0);
        assert_ne!(first, second, "the master stream advances on every call");
    }
}

#[cfg(test)]
mod transport {
    use crate::{LegMode, RouteKind};

    #[test]
    fn route_kind_labels_roundtrip() {
        assert_eq!(RouteKind::City.to_string(), "city");
        assert_eq!(RouteKind::parse("Intercity"), Some(RouteKind::Intercity));
        assert_eq!(RouteKind::parse("ferry"), None);
    }

    #[test]
    fn leg_mode() {
        assert!(LegMode::Transit.is_transit());
        assert!(!LegMode::Walk.is_transit());
        assert_eq!(LegMode::Walk.to_string(), "walk");
    }
}
