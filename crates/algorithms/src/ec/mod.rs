//! Short-Weierstrass elliptic-curve group arithmetic
//!
//! A [`Curve`] is one group instance `y² = x³ + ax + b (mod p)` together
//! with a generator of a prime-order subgroup. Every operation is a pure
//! function of its inputs; a curve has no mutable state and may be shared
//! freely across threads.
//!
//! The arithmetic is plain arbitrary-precision modular arithmetic and is
//! not constant time. A hardened implementation would swap the affine
//! formulas for a complete, constant-time ladder.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;
use subtle::ConstantTimeEq;

use crate::encoding::to_bytes_32;
use crate::error::{Error, Result};
use crate::modular;

pub mod k256;

#[cfg(test)]
mod tests;

/// Domain parameters of one short-Weierstrass curve.
///
/// Immutable once constructed. `n` is the order of the subgroup generated
/// by the base point; scalars for keys and nonces are taken modulo `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Prime field modulus
    pub p: BigUint,
    /// Curve coefficient `a`
    pub a: BigUint,
    /// Curve coefficient `b`
    pub b: BigUint,
    /// Order of the prime subgroup generated by the base point
    pub n: BigUint,
}

impl CurveParams {
    /// Validate and assemble a parameter set.
    ///
    /// Rejects singular curves (`4a³ + 27b² ≡ 0 mod p`) and coefficients
    /// outside the field.
    pub fn new(p: BigUint, a: BigUint, b: BigUint, n: BigUint) -> Result<Self> {
        if p < BigUint::from(5u8) {
            return Err(Error::param("p", "field modulus too small"));
        }
        if a >= p || b >= p {
            return Err(Error::param("a/b", "coefficients must be reduced mod p"));
        }
        if n < BigUint::from(2u8) {
            return Err(Error::param("n", "subgroup order must be at least 2"));
        }

        // Non-singularity: 4a^3 + 27b^2 != 0 (mod p)
        let discriminant =
            (BigUint::from(4u8) * &a * &a * &a + BigUint::from(27u8) * &b * &b) % &p;
        if discriminant.is_zero() {
            return Err(Error::param("a/b", "curve is singular"));
        }

        Ok(CurveParams { p, a, b, n })
    }
}

/// A point on the curve: either the additive identity or an affine pair.
///
/// Equality is structural; the identity never equals a finite point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity, the additive identity of the group
    Infinity,
    /// A finite point with coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Construct a finite point from affine coordinates.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

/// One elliptic-curve group instance: domain parameters plus base point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    params: CurveParams,
    g: Point,
}

impl Curve {
    /// Assemble a curve from validated parameters and a base point.
    ///
    /// The base point must lie on the curve and must generate a subgroup
    /// of exactly the claimed order (`n · G = ∞`).
    pub fn new(params: CurveParams, gx: BigUint, gy: BigUint) -> Result<Self> {
        if gx >= params.p || gy >= params.p {
            return Err(Error::param("generator", "coordinates must be reduced mod p"));
        }
        let curve = Curve {
            params,
            g: Point::Affine { x: gx, y: gy },
        };
        if !curve.is_on_curve(&curve.g) {
            return Err(Error::param("generator", "base point is not on the curve"));
        }
        let order = curve.params.n.clone();
        if !curve.mul_uint(&curve.g, &order).is_infinity() {
            return Err(Error::param("n", "base point does not have the claimed order"));
        }
        Ok(curve)
    }

    /// The domain parameters of this curve.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The base point `G`.
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The order of the subgroup generated by `G`.
    pub fn order(&self) -> &BigUint {
        &self.params.n
    }

    /// Whether `point` satisfies the curve equation.
    ///
    /// The point at infinity is on every curve. Finite points must have
    /// canonical coordinates in `[0, p)`.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = &self.params.p;
                if x >= p || y >= p {
                    return false;
                }
                let lhs = (y * y) % p;
                let rhs = (x * x * x + &self.params.a * x + &self.params.b) % p;
                lhs == rhs
            }
        }
    }

    /// Additive inverse: `-(x, y) = (x, p - y)`; `-∞ = ∞`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => {
                let p = &self.params.p;
                let neg_y = if y.is_zero() {
                    BigUint::zero()
                } else {
                    p - y
                };
                Point::Affine {
                    x: x.clone(),
                    y: neg_y,
                }
            }
        }
    }

    /// Group addition, total over all inputs.
    ///
    /// `∞` is the identity; `P + (-P) = ∞`; adding a point to itself
    /// falls through to [`Curve::double`].
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Infinity, _) => return rhs.clone(),
            (_, Point::Infinity) => return lhs.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };
        let p = &self.params.p;

        if x1 == x2 {
            // Same x: either mutual inverses (sum of y's is 0 mod p, which
            // also covers a self-inverse point with y = 0) or a doubling.
            return if ((y1 + y2) % p).is_zero() {
                Point::Infinity
            } else {
                self.double(lhs)
            };
        }

        // lambda = (y2 - y1) / (x2 - x1); all intermediates kept in [0, p)
        let num = (y2 + p - y1) % p;
        let den = (x2 + p - x1) % p;
        let lambda = (num * self.invert_nonzero(&den)) % p;

        self.chord_point(&lambda, x1, y1, x2)
    }

    /// Point doubling.
    ///
    /// A point with `y = 0` is its own negation, so its double is `∞`
    /// rather than a division-by-zero failure.
    pub fn double(&self, point: &Point) -> Point {
        let (x, y) = match point {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Infinity;
        }
        let p = &self.params.p;

        // lambda = (3x^2 + a) / (2y)
        let num = (BigUint::from(3u8) * x * x + &self.params.a) % p;
        let den = (y + y) % p;
        let lambda = (num * self.invert_nonzero(&den)) % p;

        self.chord_point(&lambda, x, y, x)
    }

    /// Scalar multiplication `k · P` by an arbitrary-size signed integer.
    ///
    /// Negative scalars multiply the negated point; scalars are not
    /// reduced modulo the order first, large values simply wrap because
    /// the group is finite. `0 · P = ∞`.
    pub fn mul(&self, point: &Point, k: &BigInt) -> Point {
        match k.sign() {
            Sign::NoSign => Point::Infinity,
            Sign::Plus => self.mul_uint(point, k.magnitude()),
            Sign::Minus => self.mul_uint(&self.negate(point), k.magnitude()),
        }
    }

    /// Scalar multiplication of the base point, `k · G`.
    pub fn mul_base(&self, k: &BigInt) -> Point {
        self.mul(&self.g, k)
    }

    /// ECDSA verification primitive over this group.
    ///
    /// Given public point `q`, message digest `e` and signature `(r, s)`,
    /// accepts iff `r, s ∈ [1, n-1]` and the recovered point
    /// `(e·s⁻¹)·G + (r·s⁻¹)·Q` is finite with `x ≡ r (mod n)`.
    ///
    /// Malformed input is rejected by returning `false`; this function
    /// never fails and never panics on adversarial input.
    pub fn verify_digest(&self, q: &Point, e: &BigUint, r: &BigUint, s: &BigUint) -> bool {
        let n = &self.params.n;
        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            return false;
        }
        // Reject non-canonical coordinates up front so the affine
        // formulas below only ever see reduced values.
        if let Point::Affine { x, y } = q {
            if x >= &self.params.p || y >= &self.params.p {
                return false;
            }
        }

        let w = match modular::inverse_mod(s, n) {
            Ok(w) => w,
            Err(_) => return false,
        };
        let u1 = (e * &w) % n;
        let u2 = (r * &w) % n;

        let point = self.add(&self.mul_uint(&self.g, &u1), &self.mul_uint(q, &u2));
        let x = match point {
            Point::Infinity => return false,
            Point::Affine { x, .. } => x,
        };

        let v = x % n;
        match (to_bytes_32(&v), to_bytes_32(r)) {
            (Ok(v_bytes), Ok(r_bytes)) => bool::from(v_bytes.ct_eq(&r_bytes)),
            _ => false,
        }
    }

    /// Serialize a finite point in uncompressed form, `0x04 || x || y`.
    pub fn serialize_point_uncompressed(&self, point: &Point) -> Result<[u8; 65]> {
        let (x, y) = match point {
            Point::Infinity => {
                return Err(Error::param("point", "the identity has no affine encoding"))
            }
            Point::Affine { x, y } => (x, y),
        };
        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&to_bytes_32(x)?);
        out[33..65].copy_from_slice(&to_bytes_32(y)?);
        Ok(out)
    }

    /// Parse an uncompressed point and check that it lies on the curve.
    pub fn deserialize_point_uncompressed(&self, bytes: &[u8]) -> Result<Point> {
        if bytes.len() != 65 {
            return Err(Error::Length {
                context: "uncompressed point",
                expected: 65,
                actual: bytes.len(),
            });
        }
        if bytes[0] != 0x04 {
            return Err(Error::param("point", "expected uncompressed format byte 0x04"));
        }
        let x = BigUint::from_bytes_be(&bytes[1..33]);
        let y = BigUint::from_bytes_be(&bytes[33..65]);
        let point = Point::Affine { x, y };
        if !self.is_on_curve(&point) {
            return Err(Error::param("point", "coordinates do not satisfy the curve equation"));
        }
        Ok(point)
    }

    /// Binary double-and-add over the magnitude of the scalar.
    fn mul_uint(&self, point: &Point, k: &BigUint) -> Point {
        if point.is_infinity() {
            return Point::Infinity;
        }
        let mut acc = Point::Infinity;
        let mut base = point.clone();
        let mut k = k.clone();
        while !k.is_zero() {
            if k.is_odd() {
                acc = self.add(&acc, &base);
            }
            base = self.double(&base);
            k >>= 1u32;
        }
        acc
    }

    /// Third intersection of the chord/tangent with slope `lambda`:
    /// `x3 = lambda² - x1 - x2`, `y3 = lambda(x1 - x3) - y1`, all mod p.
    fn chord_point(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let p = &self.params.p;
        let lambda_sq = (lambda * lambda) % p;
        let x3 = (lambda_sq + p + p - x1 - x2) % p;
        let y3 = ((lambda * ((x1 + p - &x3) % p)) % p + p - y1) % p;
        Point::Affine { x: x3, y: y3 }
    }

    /// Invert a nonzero residue mod the field prime.
    ///
    /// The callers reduce their operands first and only divide by nonzero
    /// residues, which are always invertible mod a prime; a failure here
    /// means the parameter set violated its construction contract.
    fn invert_nonzero(&self, value: &BigUint) -> BigUint {
        modular::inverse_mod(value, &self.params.p)
            .expect("nonzero residues are invertible mod a prime field modulus")
    }
}
