//! Unit tests for courier-core primitives.

#[cfg(test)]
mod geo {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::GeoCoord;

    fn hash_of(c: &GeoCoord) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    #[test]
    fn identity_is_textual() {
        let a = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        let b = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        let c = GeoCoord::new("34.0547", "-118.4794734").unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        // Same numeric value, different text → different entity.
        assert_eq!(a.lat(), c.lat());
        assert_ne!(a, c);
    }

    #[test]
    fn parse_values() {
        let c = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        assert!((c.lat() - 34.0547).abs() < 1e-9);
        assert!((c.lon() + 118.4794734).abs() < 1e-9);
        assert_eq!(c.lat_text(), "34.0547000");
        assert_eq!(c.lon_text(), "-118.4794734");
    }

    #[test]
    fn reject_garbage() {
        assert!(GeoCoord::new("not-a-number", "0").is_err());
        assert!(GeoCoord::new("0", "12.3.4").is_err());
        assert!(GeoCoord::new("", "0").is_err());
    }

    #[test]
    fn from_degrees_roundtrip() {
        let c = GeoCoord::from_degrees(34.0547, -118.4794734);
        assert_eq!(c.lat_text(), "34.0547000");
        assert_eq!(c.lon_text(), "-118.4794734");
        assert_eq!(c, GeoCoord::new("34.0547000", "-118.4794734").unwrap());
    }

    #[test]
    fn zero_distance() {
        let p = GeoCoord::from_degrees(30.694, -88.043);
        assert!(p.distance_m(&p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoCoord::from_degrees(30.0, -88.0);
        let b = GeoCoord::from_degrees(31.0, -88.0);
        let d = a.distance_m(&b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn distance_symmetric() {
        let a = GeoCoord::from_degrees(34.05, -118.47);
        let b = GeoCoord::from_degrees(34.06, -118.44);
        assert!((a.distance_m(&b) - b.distance_m(&a)).abs() < 1e-9);
    }

    #[test]
    fn display_uses_text() {
        let c = GeoCoord::new("34.0547000", "-118.4794734").unwrap();
        assert_eq!(c.to_string(), "(34.0547000, -118.4794734)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SearchRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SearchRng::new(12345);
        let mut r2 = SearchRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit_f64(), r2.unit_f64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SearchRng::new(1);
        let mut r2 = SearchRng::new(2);
        let a: Vec<f64> = (0..8).map(|_| r1.unit_f64()).collect();
        let b: Vec<f64> = (0..8).map(|_| r2.unit_f64()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_in_half_open_range() {
        let mut rng = SearchRng::new(0);
        for _ in 0..1000 {
            let u = rng.unit_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SearchRng::new(7);
        for _ in 0..1000 {
            let v: usize = rng.gen_range(0..5);
            assert!(v < 5);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SearchRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
