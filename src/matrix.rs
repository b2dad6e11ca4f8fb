//! Affine transformation matrices in homogeneous coordinates.

use crate::point::Point;

/// The rotation angles the engine supports, measured counter-clockwise in
/// a mathematical (y-up) coordinate system.
///
/// Only quarter-turn angles are offered: their matrix entries are exact,
/// with no trigonometric rounding error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

/// A 3×3 affine transformation matrix in homogeneous coordinates.
///
/// Rows are stored in row-major order. The bottom row is `[0, 0, 1]` for
/// every matrix this library constructs:
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// |  0   0   1  |
/// ```
///
/// Matrices are plain values and are never composed: each panel action
/// builds exactly one matrix, applies it, and commits the result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub rows: [[f64; 3]; 3],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// The identity matrix (no transformation).
    pub fn identity() -> Matrix {
        Matrix {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// A rotation matrix for one of the supported quarter-turn angles.
    pub fn rotation(angle: Angle) -> Matrix {
        let rows = match angle {
            Angle::Deg90 => [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            Angle::Deg180 => [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
            Angle::Deg270 => [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        };
        Matrix { rows }
    }

    /// A translation matrix. `dx` and `dy` may be any real number; a
    /// non-finite offset propagates through [`apply`](Matrix::apply)
    /// rather than being rejected.
    pub fn translation(dx: f64, dy: f64) -> Matrix {
        Matrix {
            rows: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// A uniform scaling matrix. A factor of 0 collapses every point onto
    /// the origin; a negative factor reflects through it.
    pub fn scaling(k: f64) -> Matrix {
        Matrix {
            rows: [[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Apply the matrix to a point.
    ///
    /// The third homogeneous coordinate is implicitly 1 and never
    /// materialized. Total for all inputs: NaN and infinity flow through
    /// to the result instead of panicking.
    pub fn apply(&self, point: Point) -> Point {
        let m = &self.rows;
        Point {
            x: point.x * m[0][0] + point.y * m[0][1] + m[0][2],
            y: point.x * m[1][0] + point.y * m[1][1] + m[1][2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point::new(12.5, -3.75);
        assert_eq!(Matrix::identity().apply(p), p);
        assert_eq!(Matrix::default().apply(p), p);
    }

    #[test]
    fn quarter_turn_entries_are_exact() {
        assert_eq!(
            Matrix::rotation(Angle::Deg90).rows,
            [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(
            Matrix::rotation(Angle::Deg180).rows,
            [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(
            Matrix::rotation(Angle::Deg270).rows,
            [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn four_quarter_turns_return_home() {
        let m = Matrix::rotation(Angle::Deg90);
        let mut p = Point::new(1.0, 0.0);
        for expected in [
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(1.0, 0.0),
        ] {
            p = m.apply(p);
            assert_eq!(p, expected);
        }
    }

    #[test]
    fn translation_round_trip_is_exact() {
        let p = Point::new(7.25, -0.5);
        let there = Matrix::translation(12.125, -40.5).apply(p);
        let back = Matrix::translation(-12.125, 40.5).apply(there);
        assert_eq!(back, p);
    }

    #[test]
    fn scaling_by_one_is_identity() {
        let p = Point::new(-43.3, 25.0);
        assert_eq!(Matrix::scaling(1.0).apply(p), p);
    }

    #[test]
    fn scaling_by_zero_collapses_to_origin() {
        let p = Matrix::scaling(0.0).apply(Point::new(123.0, -456.0));
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn negative_scale_reflects_through_origin() {
        let p = Matrix::scaling(-2.0).apply(Point::new(3.0, -4.0));
        assert_eq!(p, Point::new(-6.0, 8.0));
    }

    #[test]
    fn nan_entries_poison_the_result() {
        let p = Matrix::translation(f64::NAN, 0.0).apply(Point::new(1.0, 2.0));
        assert!(p.x.is_nan());
        assert_eq!(p.y, 2.0);
    }
}
