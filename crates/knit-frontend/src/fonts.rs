//! Font configuration for the application
//!
//! The domain data is Korean, so a CJK-capable font is loaded from the system
//! on startup. Falls back to egui's bundled fonts (Latin only) when none of the
//! known locations exist.

use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};

/// Well-known system locations of CJK-capable fonts, tried in order
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Configure application fonts, preferring a system CJK font
pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    match load_cjk_font() {
        Some((path, bytes)) => {
            tracing::info!("Loaded CJK font from {path}");
            fonts
                .font_data
                .insert("cjk".to_owned(), Arc::new(FontData::from_owned(bytes)));

            if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
                family.insert(0, "cjk".to_owned());
            }
            if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
                family.push("cjk".to_owned());
            }
        }
        None => {
            tracing::warn!("No CJK font found; Korean labels may render as boxes");
        }
    }

    ctx.set_fonts(fonts);
}

fn load_cjk_font() -> Option<(&'static str, Vec<u8>)> {
    FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
}
