use poly_sketch::pagesize;
use poly_sketch::{Angle, Canvas, Document, Panel, ShapePreset};

fn main() {
    let mut doc = Document::default();
    let mut panel = Panel::new();
    panel.colour = "#cb4b16".into();
    panel.load_preset(ShapePreset::Triangle);

    // four quarter turns bring the triangle back where it started
    for _ in 0..4 {
        let mut canvas = Canvas::new(pagesize::A4);
        panel.draw_onto(&mut canvas);
        doc.add_page(canvas.into_page());
        panel.rotate(Angle::Deg90);
    }

    // then shift it off the origin and double it
    panel.translate_x = "40".into();
    panel.translate_y = "-25".into();
    panel.translate();
    panel.scale_factor = "2".into();
    panel.rescale();

    let mut canvas = Canvas::new(pagesize::A4);
    panel.draw_onto(&mut canvas);
    doc.add_page(canvas.into_page());

    let mut out = std::fs::File::create("spin.pdf").unwrap();
    doc.write(&mut out).unwrap();
    println!("wrote spin.pdf");
}
