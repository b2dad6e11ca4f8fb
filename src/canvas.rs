//! The drawing surface: a reference grid with a polygon stroked over it.

use crate::colour::Colour;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::polygon::Polygon;
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// Spacing between reference grid lines.
const GRID_STEP: Pt = Pt(50.0);

/// A drawing surface for one page.
///
/// The mathematical origin sits at the centre of the page, x growing right
/// and y growing up. PDF page space is already y-up, so mathematical
/// coordinates land on the page without a flip.
pub struct Canvas {
    size: PageSize,
    content: Content,
}

impl Canvas {
    pub fn new(size: PageSize) -> Canvas {
        Canvas {
            size,
            content: Content::new(),
        }
    }

    fn centre(&self) -> (f32, f32) {
        (*self.size.0 / 2.0, *self.size.1 / 2.0)
    }

    fn to_screen_x(&self, x: f64) -> f32 {
        self.centre().0 + x as f32
    }

    fn to_screen_y(&self, y: f64) -> f32 {
        self.centre().1 + y as f32
    }

    /// Draw the reference grid: minor lines every `GRID_STEP`, the two
    /// axes through the centre, and their labels.
    pub fn grid(&mut self) {
        let (w, h) = (*self.size.0, *self.size.1);
        let (cx, cy) = self.centre();

        // minor lines, phased so one runs along each axis
        self.content.set_stroke_gray(0.85);
        self.content.set_line_width(0.5);
        let mut x = Pt(cx.rem_euclid(*GRID_STEP));
        while x <= Pt(w) {
            self.content.move_to(*x, 0.0);
            self.content.line_to(*x, h);
            x += GRID_STEP;
        }
        let mut y = Pt(cy.rem_euclid(*GRID_STEP));
        while y <= Pt(h) {
            self.content.move_to(0.0, *y);
            self.content.line_to(w, *y);
            y += GRID_STEP;
        }
        self.content.stroke();

        // axes
        self.content.set_stroke_gray(0.6);
        self.content.set_line_width(1.0);
        self.content.move_to(0.0, cy);
        self.content.line_to(w, cy);
        self.content.move_to(cx, 0.0);
        self.content.line_to(cx, h);
        self.content.stroke();

        // axis labels
        self.content.set_fill_gray(0.0);
        self.content.begin_text();
        self.content.set_font(Name(b"F0"), 10.0);
        self.content.next_line(w - 20.0, cy + 10.0);
        self.content.show(Str(b"X"));
        self.content.end_text();
        self.content.begin_text();
        self.content.set_font(Name(b"F0"), 10.0);
        self.content.next_line(cx + 10.0, h - 20.0);
        self.content.show(Str(b"Y"));
        self.content.end_text();
    }

    /// Stroke a polygon as a closed path in the given colour. An empty
    /// polygon draws nothing.
    pub fn stroke_polygon(&mut self, polygon: &Polygon, colour: Colour) {
        let Some((first, rest)) = polygon.points().split_first() else {
            return;
        };

        match colour {
            Colour::RGB { r, g, b } => self.content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => self.content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => self.content.set_stroke_gray(g),
        };
        self.content.set_line_width(2.0);

        let (sx, sy) = (self.to_screen_x(first.x), self.to_screen_y(first.y));
        self.content.move_to(sx, sy);
        for point in rest.iter() {
            let (sx, sy) = (self.to_screen_x(point.x), self.to_screen_y(point.y));
            self.content.line_to(sx, sy);
        }
        self.content.close_path();
        self.content.stroke();
    }

    /// Finish the drawing into a page of the canvas size.
    pub fn into_page(self) -> Page {
        let mut page = Page::new(self.size);
        page.add_content(self.content);
        page
    }
}
