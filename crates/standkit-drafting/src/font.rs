//! System font lookup for sheet lettering

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point, Font, Scale};
use std::fs;
use std::sync::OnceLock;
use tracing::warn;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Sheet lettering font, resolved from the system once per weight.
///
/// Returns `None` when the host offers no usable sans-serif face; callers
/// skip lettering instead of failing the sheet, so a headless box without
/// fonts still produces geometry and dimension lines.
pub fn sheet_font(bold: bool) -> Option<&'static Font<'static>> {
    static REGULAR: OnceLock<Option<&'static Font<'static>>> = OnceLock::new();
    static BOLD: OnceLock<Option<&'static Font<'static>>> = OnceLock::new();
    let slot = if bold { &BOLD } else { &REGULAR };
    *slot.get_or_init(|| match load_system_font(bold) {
        Some(font) => Some(Box::leak(Box::new(font))),
        None => {
            warn!(bold, "no system sans-serif font found, sheet lettering disabled");
            None
        }
    })
}

fn load_system_font(bold: bool) -> Option<Font<'static>> {
    let families = [
        Family::Name("Liberation Sans"),
        Family::Name("DejaVu Sans"),
        Family::Name("Arial"),
        Family::Name("Helvetica"),
        Family::SansSerif,
    ];
    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}

/// Advance width of `text` at `size`, in pixels.
pub fn measure_text(font: &Font<'_>, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    let mut width: f32 = 0.0;
    for glyph in font.layout(text, scale, point(0.0, 0.0)) {
        width = width.max(glyph.position().x + glyph.unpositioned().h_metrics().advance_width);
    }
    width
}
