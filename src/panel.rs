//! The field-backed boundary layer.

use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::matrix::{Angle, Matrix};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::shape::{predefined_shape, ShapePreset};

/// The input surface of the tool, restated as plain text fields.
///
/// Fields hold exactly what was typed; nothing is validated on entry. Each
/// action parses the fields into an immutable [`Polygon`], applies exactly
/// one transformation matrix, and commits the result back into the fields.
/// Invalid numeric text parses to NaN, flows through the transform
/// unchanged, and surfaces as `"NaN"` in the written-back field rather
/// than as an error.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    /// Per-point (x, y) coordinate fields.
    pub points: Vec<(String, String)>,
    /// The stroke colour field, in `#rrggbb` picker form.
    pub colour: String,
    /// Translation offset fields.
    pub translate_x: String,
    pub translate_y: String,
    /// Uniform scale factor field.
    pub scale_factor: String,
}

fn parse_coord(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// At most three decimal places, trailing zeros trimmed. NaN stays "NaN".
fn format_coord(value: f64) -> String {
    format!("{value:.3}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl Panel {
    pub fn new() -> Panel {
        Panel {
            colour: "#000000".into(),
            ..Panel::default()
        }
    }

    /// Number of point field pairs currently on the panel.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Regenerate the point fields for a new count; fields that survive
    /// keep their text, new ones read "0".
    pub fn set_point_count(&mut self, count: usize) {
        self.points.resize_with(count, || ("0".into(), "0".into()));
    }

    /// Parse the current fields into a polygon, in field order.
    pub fn polygon(&self) -> Polygon {
        self.points
            .iter()
            .map(|(x, y)| Point::new(parse_coord(x), parse_coord(y)))
            .collect()
    }

    /// Write a polygon back into the fields, replacing them.
    pub fn set_polygon(&mut self, polygon: &Polygon) {
        self.points = polygon
            .points()
            .iter()
            .map(|p| (format_coord(p.x), format_coord(p.y)))
            .collect();
    }

    /// The stroke colour; an unparseable field falls back to black.
    pub fn stroke_colour(&self) -> Colour {
        Colour::from_hex(&self.colour).unwrap_or(colours::BLACK)
    }

    fn commit(&mut self, matrix: Matrix) {
        let next = self.polygon().transformed(&matrix);
        self.set_polygon(&next);
    }

    /// Rotate the current points by a quarter-turn angle and commit.
    pub fn rotate(&mut self, angle: Angle) {
        self.commit(Matrix::rotation(angle));
    }

    /// Translate the current points by the offsets in the translation
    /// fields and commit.
    pub fn translate(&mut self) {
        let dx = parse_coord(&self.translate_x);
        let dy = parse_coord(&self.translate_y);
        self.commit(Matrix::translation(dx, dy));
    }

    /// Scale the current points by the factor field and commit.
    pub fn rescale(&mut self) {
        self.commit(Matrix::scaling(parse_coord(&self.scale_factor)));
    }

    /// Replace the point fields with a preset's vertices.
    pub fn load_preset(&mut self, preset: ShapePreset) {
        self.set_polygon(&preset.points());
    }

    /// Replace the point fields with the named preset; an unknown name
    /// clears them.
    pub fn load_shape(&mut self, name: &str) {
        self.set_polygon(&predefined_shape(name));
    }

    /// One draw cycle: the grid, then the current polygon in the panel
    /// colour.
    pub fn draw_onto(&self, canvas: &mut Canvas) {
        canvas.grid();
        canvas.stroke_polygon(&self.polygon(), self.stroke_colour());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_format_to_three_decimals_trimmed() {
        assert_eq!(format_coord(43.3), "43.3");
        assert_eq!(format_coord(-43.3), "-43.3");
        assert_eq!(format_coord(100.0), "100");
        assert_eq!(format_coord(0.0), "0");
        assert_eq!(format_coord(1.0 / 3.0), "0.333");
        assert_eq!(format_coord(f64::NAN), "NaN");
    }

    #[test]
    fn invalid_text_parses_to_nan() {
        assert!(parse_coord("twelve").is_nan());
        assert!(parse_coord("").is_nan());
        assert_eq!(parse_coord(" -4.5 "), -4.5);
    }

    #[test]
    fn point_count_regenerates_fields_with_zero_defaults() {
        let mut panel = Panel::new();
        panel.set_point_count(3);
        assert_eq!(panel.points, vec![("0".to_string(), "0".to_string()); 3]);
        panel.points[1] = ("5".into(), "-5".into());
        panel.set_point_count(4);
        assert_eq!(panel.points[1], ("5".to_string(), "-5".to_string()));
        assert_eq!(panel.points[3], ("0".to_string(), "0".to_string()));
    }

    #[test]
    fn translate_reads_fields_and_commits() {
        let mut panel = Panel::new();
        panel.points = vec![("10".into(), "20".into()), ("-4.5".into(), "0".into())];
        panel.translate_x = "1.5".into();
        panel.translate_y = "-2".into();
        panel.translate();
        assert_eq!(panel.points[0], ("11.5".to_string(), "18".to_string()));
        assert_eq!(panel.points[1], ("-3".to_string(), "-2".to_string()));
    }

    #[test]
    fn rescale_commits_scaled_fields() {
        let mut panel = Panel::new();
        panel.points = vec![("-30".into(), "30".into())];
        panel.scale_factor = "0.5".into();
        panel.rescale();
        assert_eq!(panel.points[0], ("-15".to_string(), "15".to_string()));
    }

    #[test]
    fn invalid_field_text_surfaces_as_nan_after_commit() {
        let mut panel = Panel::new();
        panel.points = vec![("abc".into(), "1".into())];
        panel.rotate(Angle::Deg90);
        // NaN times any entry poisons both output coordinates
        assert_eq!(panel.points[0], ("NaN".to_string(), "NaN".to_string()));
    }

    #[test]
    fn preset_loads_into_fields() {
        let mut panel = Panel::new();
        panel.load_preset(ShapePreset::Triangle);
        assert_eq!(
            panel.points,
            vec![
                ("0".to_string(), "50".to_string()),
                ("-43.3".to_string(), "-25".to_string()),
                ("43.3".to_string(), "-25".to_string()),
            ]
        );
        panel.load_shape("nonagon");
        assert!(panel.points.is_empty());
    }

    #[test]
    fn bad_colour_field_falls_back_to_black() {
        let mut panel = Panel::new();
        panel.colour = "rebeccapurple".into();
        assert_eq!(panel.stroke_colour(), colours::BLACK);
        panel.colour = "#00ff00".into();
        assert_eq!(panel.stroke_colour(), colours::GREEN);
    }
}
