//! Predefined shapes, centred on the origin.

use crate::point::Point;
use crate::polygon::Polygon;

/// The shapes offered by the preset buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapePreset {
    Square,
    Triangle,
    Quadrilateral,
}

impl ShapePreset {
    /// Look a preset up by its external name: `"square"`, `"triangle"` or
    /// `"quadri"`.
    pub fn from_name(name: &str) -> Option<ShapePreset> {
        match name {
            "square" => Some(ShapePreset::Square),
            "triangle" => Some(ShapePreset::Triangle),
            "quadri" => Some(ShapePreset::Quadrilateral),
            _ => None,
        }
    }

    /// The vertices of the shape, in winding order.
    pub fn points(self) -> Polygon {
        let points = match self {
            ShapePreset::Square => vec![
                Point::new(-30.0, 30.0),
                Point::new(30.0, 30.0),
                Point::new(30.0, -30.0),
                Point::new(-30.0, -30.0),
            ],
            ShapePreset::Triangle => vec![
                Point::new(0.0, 50.0),
                Point::new(-43.3, -25.0),
                Point::new(43.3, -25.0),
            ],
            ShapePreset::Quadrilateral => vec![
                Point::new(-60.0, 30.0),
                Point::new(60.0, 30.0),
                Point::new(60.0, -30.0),
                Point::new(-60.0, -30.0),
            ],
        };
        Polygon::from_points(points)
    }
}

/// String-keyed preset lookup. An unknown name yields an empty polygon, not
/// an error.
pub fn predefined_shape(name: &str) -> Polygon {
    ShapePreset::from_name(name)
        .map(ShapePreset::points)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_presets() {
        assert_eq!(ShapePreset::from_name("square"), Some(ShapePreset::Square));
        assert_eq!(
            ShapePreset::from_name("triangle"),
            Some(ShapePreset::Triangle)
        );
        assert_eq!(
            ShapePreset::from_name("quadri"),
            Some(ShapePreset::Quadrilateral)
        );
        assert_eq!(ShapePreset::from_name("pentagon"), None);
    }

    #[test]
    fn unknown_name_yields_empty_polygon() {
        assert!(predefined_shape("unknown").is_empty());
    }

    #[test]
    fn triangle_vertices_match_the_preset() {
        let triangle = predefined_shape("triangle");
        assert_eq!(
            triangle.points(),
            &[
                Point::new(0.0, 50.0),
                Point::new(-43.3, -25.0),
                Point::new(43.3, -25.0),
            ]
        );
    }
}
