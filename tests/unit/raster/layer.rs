use super::*;

#[test]
fn paint_fills_rect_with_opaque_color() {
    let layer = Layer::paint(16, 16, |ctx| {
        ctx.set_paint(paint_color([255, 0, 0], 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(4.0, 4.0, 12.0, 12.0));
        Ok(())
    })
    .unwrap();

    assert_eq!(layer.pixel(8, 8), [255, 0, 0, 255]);
    assert_eq!(layer.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(layer.pixel(100, 100), [0, 0, 0, 0]);
}

#[test]
fn paint_clips_out_of_bounds_content() {
    let layer = Layer::paint(8, 8, |ctx| {
        ctx.set_paint(paint_color([0, 255, 0], 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(-50.0, -50.0, 400.0, 2.0));
        Ok(())
    })
    .unwrap();
    assert_eq!(layer.pixel(3, 0), [0, 255, 0, 255]);
    assert_eq!(layer.pixel(3, 5)[3], 0);
}

#[test]
fn paint_rejects_zero_sized_layers() {
    assert!(Layer::paint(0, 8, |_| Ok(())).is_err());
}

#[test]
fn glow_spreads_beyond_sharp_content() {
    let layer = Layer::from_fn(9, 9, |x, y| {
        if x == 4 && y == 4 {
            [255, 255, 255, 255]
        } else {
            [0, 0, 0, 0]
        }
    });
    let mut canvas = RgbImage::new(9, 9);
    add_glow(&mut canvas, &layer, 2).unwrap();
    assert_eq!(canvas.get_pixel(4, 4).0, [255, 255, 255]);
    assert!(canvas.get_pixel(5, 4).0[0] > 0);
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn composite_rejects_size_mismatch() {
    let layer = Layer::transparent(4, 4);
    let mut canvas = RgbImage::new(5, 4);
    assert!(layer.composite_onto(&mut canvas, 1.0).is_err());
}

#[test]
fn polygon_closes_only_with_three_points() {
    let tri = polygon(&[
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 3.0),
    ]);
    assert_eq!(tri.elements().len(), 4);
    let seg = polygon(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
    assert_eq!(seg.elements().len(), 2);
}
