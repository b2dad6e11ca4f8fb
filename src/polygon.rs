use crate::matrix::Matrix;
use crate::point::Point;

/// An ordered sequence of points.
///
/// Order is significant: it defines edge connectivity when the polygon is
/// stroked. Duplicate points are permitted and produce degenerate edges.
/// A polygon is rebuilt fresh from the panel fields on every cycle; it has
/// no identity across operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// An empty polygon.
    pub fn new() -> Polygon {
        Polygon::default()
    }

    pub fn from_points(points: Vec<Point>) -> Polygon {
        Polygon { points }
    }

    /// The vertices, in winding order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Apply a transformation to every point, preserving order.
    pub fn transformed(&self, matrix: &Matrix) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| matrix.apply(*p)).collect(),
        }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Polygon {
        Polygon {
            points: iter.into_iter().collect(),
        }
    }
}
