//! Curve group unit tests

use super::*;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use proptest::prelude::*;

fn dec(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
}

/// y^2 = x^3 + x over F_23; (0, 0) is a self-inverse point of order 2.
fn toy_curve() -> Curve {
    let params = CurveParams::new(
        BigUint::from(23u8),
        BigUint::from(1u8),
        BigUint::zero(),
        BigUint::from(2u8),
    )
    .unwrap();
    Curve::new(params, BigUint::zero(), BigUint::zero()).unwrap()
}

#[test]
fn test_identity_laws() {
    let curve = k256::curve();
    let g = curve.generator();

    assert_eq!(&curve.add(g, &Point::Infinity), g);
    assert_eq!(&curve.add(&Point::Infinity, g), g);
    assert_eq!(curve.mul_base(&BigInt::from(0)), Point::Infinity);
    assert_eq!(&curve.mul_base(&BigInt::from(1)), g);
    assert_eq!(
        curve.mul(&Point::Infinity, &BigInt::from(12345)),
        Point::Infinity
    );
}

#[test]
fn test_negation() {
    let curve = k256::curve();
    let g = curve.generator();

    assert_eq!(curve.negate(&Point::Infinity), Point::Infinity);

    let neg_g = curve.negate(g);
    assert!(curve.is_on_curve(&neg_g));
    assert_eq!(curve.add(g, &neg_g), Point::Infinity);
}

#[test]
fn test_addition_closure_and_associativity() {
    let curve = k256::curve();
    let p = curve.mul_base(&BigInt::from(2));
    let q = curve.mul_base(&BigInt::from(3));
    let r = curve.mul_base(&BigInt::from(5));

    let pq = curve.add(&p, &q);
    assert!(curve.is_on_curve(&pq));

    assert_eq!(curve.add(&pq, &r), curve.add(&p, &curve.add(&q, &r)));
    assert_eq!(pq, curve.add(&q, &p));
}

#[test]
fn test_double_matches_self_addition() {
    let curve = k256::curve();
    let g = curve.generator();

    let doubled = curve.double(g);
    assert_eq!(curve.add(g, g), doubled);
    assert_eq!(curve.mul_base(&BigInt::from(2)), doubled);
}

#[test]
fn test_negative_scalar() {
    let curve = k256::curve();
    let g = curve.generator();

    let pos = curve.mul(g, &BigInt::from(7));
    let neg = curve.mul(g, &BigInt::from(-7));
    assert_eq!(neg, curve.negate(&pos));
    assert_eq!(curve.add(&pos, &neg), Point::Infinity);
}

#[test]
fn test_scalar_wraps_past_order() {
    let curve = k256::curve();
    let n = BigInt::from(curve.order().clone());

    assert_eq!(curve.mul_base(&n), Point::Infinity);
    assert_eq!(&curve.mul_base(&(&n + 1)), curve.generator());
    assert_eq!(
        curve.mul_base(&(&n + 42)),
        curve.mul_base(&BigInt::from(42))
    );
}

#[test]
fn test_self_inverse_point_doubles_to_infinity() {
    let curve = toy_curve();
    let p = curve.generator().clone();

    // y = 0: the tangent is vertical, so 2P = infinity, not an error.
    assert_eq!(curve.double(&p), Point::Infinity);
    assert_eq!(curve.add(&p, &p), Point::Infinity);
}

#[test]
fn test_singular_curve_rejected() {
    // 4*0^3 + 27*0^2 = 0: singular
    assert!(CurveParams::new(
        BigUint::from(23u8),
        BigUint::zero(),
        BigUint::zero(),
        BigUint::from(2u8),
    )
    .is_err());
}

#[test]
fn test_generator_must_be_on_curve() {
    let params = CurveParams::new(
        BigUint::from(23u8),
        BigUint::from(1u8),
        BigUint::zero(),
        BigUint::from(2u8),
    )
    .unwrap();
    assert!(Curve::new(params, BigUint::from(1u8), BigUint::from(1u8)).is_err());
}

#[test]
fn test_generator_order_is_checked() {
    // (0, 0) has order 2, not 5.
    let params = CurveParams::new(
        BigUint::from(23u8),
        BigUint::from(1u8),
        BigUint::zero(),
        BigUint::from(5u8),
    )
    .unwrap();
    assert!(Curve::new(params, BigUint::zero(), BigUint::zero()).is_err());
}

#[test]
fn test_point_codec_round_trip() {
    let curve = k256::curve();
    let point = curve.mul_base(&BigInt::from(9));

    let bytes = curve.serialize_point_uncompressed(&point).unwrap();
    assert_eq!(bytes[0], 0x04);
    assert_eq!(curve.deserialize_point_uncompressed(&bytes).unwrap(), point);
}

#[test]
fn test_point_codec_rejects_malformed_input() {
    let curve = k256::curve();
    let g = curve.generator();

    assert!(curve.serialize_point_uncompressed(&Point::Infinity).is_err());

    let mut bytes = curve.serialize_point_uncompressed(g).unwrap();
    assert!(curve.deserialize_point_uncompressed(&bytes[..64]).is_err());

    bytes[0] = 0x03;
    assert!(curve.deserialize_point_uncompressed(&bytes).is_err());
    bytes[0] = 0x04;

    // Perturb y so the point falls off the curve.
    bytes[64] ^= 0x01;
    assert!(curve.deserialize_point_uncompressed(&bytes).is_err());
}

#[test]
fn test_verify_digest_rejects_out_of_range_components() {
    let curve = k256::curve();
    let g = curve.generator().clone();
    let e = BigUint::from(1u8);
    let one = BigUint::from(1u8);
    let n = curve.order().clone();

    assert!(!curve.verify_digest(&g, &e, &BigUint::zero(), &one));
    assert!(!curve.verify_digest(&g, &e, &one, &BigUint::zero()));
    assert!(!curve.verify_digest(&g, &e, &n, &one));
    assert!(!curve.verify_digest(&g, &e, &one, &n));
}

#[test]
fn test_verify_digest_known_signature() {
    let curve = k256::curve();
    let public = curve.generator().clone();
    let e = BigUint::from(1u8);
    let r = dec("46340862580836590753275244201733144181782255593078084106116359912084275628184");
    let s = dec("81369331955758484632176499244870227132558660296342819670803726373940306621624");

    assert!(curve.verify_digest(&public, &e, &r, &s));

    // Any perturbation must be rejected.
    let bad_r = &r + 1u8;
    assert!(!curve.verify_digest(&public, &e, &bad_r, &s));
    let bad_e = &e + 1u8;
    assert!(!curve.verify_digest(&public, &bad_e, &r, &s));
}

#[test]
fn test_verify_digest_tolerates_garbage_public_point() {
    let curve = k256::curve();
    let e = BigUint::from(1u8);
    let one = BigUint::from(1u8);

    // Coordinates outside [0, p) must be rejected, not panic.
    let garbage = Point::affine(curve.params().p.clone(), BigUint::zero());
    assert!(!curve.verify_digest(&garbage, &e, &one, &one));

    // The identity as a public point never verifies an honest signature.
    assert!(!curve.verify_digest(&Point::Infinity, &e, &one, &one));
}

proptest! {
    // Keep the case count moderate: each case is a few hundred bigint
    // point operations.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_scalar_homomorphism(j in any::<u64>(), k in any::<u64>()) {
        let curve = k256::curve();
        let sum = BigInt::from(j) + BigInt::from(k);
        let lhs = curve.mul_base(&sum);
        let rhs = curve.add(
            &curve.mul_base(&BigInt::from(j)),
            &curve.mul_base(&BigInt::from(k)),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_scalar_homomorphism_signed(j in any::<i64>(), k in any::<i64>()) {
        let curve = k256::curve();
        let sum = BigInt::from(j) + BigInt::from(k);
        let lhs = curve.mul_base(&sum);
        let rhs = curve.add(
            &curve.mul_base(&BigInt::from(j)),
            &curve.mul_base(&BigInt::from(k)),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_multiples_stay_on_curve(k in 1u64..) {
        let curve = k256::curve();
        let point = curve.mul_base(&BigInt::from(k));
        prop_assert!(curve.is_on_curve(&point));
    }
}
