use poly_sketch::pagesize::{self, PageOrientation};
use poly_sketch::{Canvas, Document, Info, Panel, ShapePreset};

fn main() {
    let mut doc = Document::default();
    let mut info = Info::new();
    info.title("Predefined shapes");
    doc.set_info(info);

    for (preset, colour) in [
        (ShapePreset::Square, "#d33682"),
        (ShapePreset::Triangle, "#268bd2"),
        (ShapePreset::Quadrilateral, "#859900"),
    ] {
        let mut panel = Panel::new();
        panel.colour = colour.into();
        panel.load_preset(preset);

        let mut canvas = Canvas::new(pagesize::LETTER.landscape());
        panel.draw_onto(&mut canvas);
        doc.add_page(canvas.into_page());
    }

    let mut out = std::fs::File::create("presets.pdf").unwrap();
    doc.write(&mut out).unwrap();
    println!("wrote presets.pdf");
}
