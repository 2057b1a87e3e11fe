//! Immutable 3D vector value used by console scripts
//!
//! Every operation returns a new `Vector3`; nothing mutates its receiver.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Raised by [`Vector3::try_normalized`] for a zero-length vector
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Cannot normalize a zero-length vector")]
pub struct DegenerateVectorError;

/// Method names a script can call on a vector, in declaration order
pub const SCRIPT_METHODS: &[&str] = &[
    "add",
    "subtract",
    "scale",
    "dot",
    "length",
    "normalized",
    "cross",
    "toString",
];

/// A point or direction in 3D space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Components as `[x, y, z]`
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Componentwise sum
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference
    pub fn subtract(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiply every component by `factor`
    pub fn scale(self, factor: f64) -> Vector3 {
        Vector3::new(factor * self.x, factor * self.y, factor * self.z)
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm, never negative
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector yields non-finite (NaN) components instead of
    /// failing. Check `length() > 0.0` first or use [`Vector3::try_normalized`].
    pub fn normalized(self) -> Vector3 {
        self.scale(1.0 / self.length())
    }

    /// Like [`Vector3::normalized`] but rejects zero-length input
    pub fn try_normalized(self) -> Result<Vector3, DegenerateVectorError> {
        let length = self.length();
        if length > 0.0 {
            Ok(self.scale(1.0 / length))
        } else {
            Err(DegenerateVectorError)
        }
    }

    /// Right-handed cross product
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Help text shown by the console for vector values
    pub fn help() -> String {
        let entries = [
            ("add(Vector3)", "addition of vectors"),
            ("subtract(Vector3)", "subtraction of vectors"),
            ("scale(factor)", "scales the vector"),
            ("dot(Vector3)", "scalar product"),
            ("length()", "length of vector"),
            ("normalized()", "returns normalized vector (length=1)"),
            ("cross(Vector3)", "cross product"),
        ];

        let mut text = String::from("Vector3 method help:\n");
        for (signature, summary) in entries {
            text.push_str(&format!("    {}: {}\n", signature, summary));
        }
        text
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3({},{},{})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        self.scale(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.scale(-1.0)
    }
}

/// A point produced by a projection or intersection query, together with
/// the distance error of that query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDirectionResult {
    point: Vector3,
    error_distance: f64,
}

impl PointDirectionResult {
    pub fn new(point: Vector3, error_distance: f64) -> Self {
        Self {
            point,
            error_distance,
        }
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    pub fn error_distance(&self) -> f64 {
        self.error_distance
    }
}

impl std::fmt::Display for PointDirectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ point: {}, errorDistance = {} }}",
            self.point, self.error_distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn samples() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.5, 0.25, 7.0),
            Vector3::new(0.0, -1.0, 0.5),
            Vector3::new(1e3, -2e-3, 42.0),
        ]
    }

    #[test]
    fn test_add_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.add(b), b.add(a));
            }
        }
    }

    #[test]
    fn test_dot_is_bilinear() {
        for a in samples() {
            for b in samples() {
                for c in samples() {
                    let lhs = a.add(b).dot(c);
                    let rhs = a.dot(c) + b.dot(c);
                    assert!((lhs - rhs).abs() <= 1e-9 * lhs.abs().max(1.0));
                }
            }
        }
    }

    #[test]
    fn test_cross_is_anti_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.cross(b), b.cross(a).scale(-1.0));
            }
        }
    }

    #[test]
    fn test_cross_of_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalized_has_unit_length() {
        for v in samples() {
            assert!(v.length() > 0.0);
            assert!((v.normalized().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_length_and_subtract() {
        let a = Vector3::new(4.0, 6.0, 3.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.subtract(b), Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(a.subtract(b).length(), 5.0);
        assert_eq!(Vector3::zero().length(), 0.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Vector3::zero().normalized();
        assert!(!v.is_finite());
        assert!(v.x.is_nan());

        assert_eq!(Vector3::zero().try_normalized(), Err(DegenerateVectorError));
        let unit = Vector3::new(0.0, 0.0, 2.0).try_normalized().unwrap();
        assert_eq!(unit, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(3.0, 2.0, 1.0);
        let _ = a.add(b).scale(2.0).cross(b);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(2.0, 2.0, 2.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 3.0, a.scale(3.0));
        assert_eq!(-a, a.scale(-1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_string(), "Vector3(1,2,3)");
        assert_eq!(Vector3::new(0.5, -1.0, 0.0).to_string(), "Vector3(0.5,-1,0)");
    }

    #[test]
    fn test_help_lists_methods() {
        let help = Vector3::help();
        assert!(help.starts_with("Vector3 method help:"));
        for name in ["add(", "subtract(", "scale(", "dot(", "length(", "normalized(", "cross("] {
            assert!(help.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_point_direction_result() {
        let result = PointDirectionResult::new(Vector3::new(1.0, 2.0, 3.0), 0.25);
        assert_eq!(result.point(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(result.error_distance(), 0.25);
        assert_eq!(
            result.to_string(),
            "{ point: Vector3(1,2,3), errorDistance = 0.25 }"
        );
    }
}
