use super::*;
use crate::raster::layer::Layer;

#[test]
fn bold_candidates_fall_back_to_regular_faces() {
    let bold = font_candidates(FontWeight::Bold);
    let regular = font_candidates(FontWeight::Regular);
    assert!(bold.len() > regular.len());
    assert!(
        bold.iter()
            .any(|p| p.to_string_lossy().contains("DejaVuSans-Bold"))
    );
    let last_regular = regular.last().unwrap();
    assert_eq!(bold.last().unwrap(), last_regular);
}

#[test]
fn missing_font_files_fall_back_to_bitmap() {
    let missing = [PathBuf::from("/nonexistent/goalwave/font.ttf")];
    let mut painter = TextPainter::with_candidates(&missing, &missing);
    assert!(!painter.has_font_file());

    let block = painter
        .layout("GOALS", 16.0, FontWeight::Bold, [255, 0, 0])
        .unwrap();
    assert!(matches!(block, TextBlock::Bitmap { .. }));
    assert_eq!(block.width(), bitmap_font::measure("GOALS", 16.0).0);
}

#[test]
fn layout_rejects_non_positive_sizes() {
    let mut painter = TextPainter::bitmap_only();
    assert!(painter.layout("x", 0.0, FontWeight::Regular, [0, 0, 0]).is_err());
    assert!(
        painter
            .layout("x", f32::NAN, FontWeight::Regular, [0, 0, 0])
            .is_err()
    );
}

#[test]
fn bitmap_text_draws_pixels() {
    let mut painter = TextPainter::bitmap_only();
    let block = painter
        .layout("HI", 16.0, FontWeight::Regular, [0, 255, 0])
        .unwrap();
    let layer = Layer::paint(64, 32, |ctx| {
        block.draw(ctx, 4.0, 4.0);
        Ok(())
    })
    .unwrap();
    let lit = layer.data().chunks_exact(4).filter(|px| px[3] > 0).count();
    assert!(lit > 0);
}

#[test]
fn system_font_measures_wider_text_as_wider() {
    // Uses whichever font resolves on this machine; the bitmap fallback obeys the same rule.
    let mut painter = TextPainter::new();
    let (short, _) = painter.measure("AB", 20.0, FontWeight::Regular).unwrap();
    let (long, h) = painter
        .measure("ABABABAB", 20.0, FontWeight::Regular)
        .unwrap();
    assert!(long > short);
    assert!(h > 0.0);
}
