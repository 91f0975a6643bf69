use image::Rgba;
use shade_core::{
    AdjustRequest, AdjustmentFactor, Color, ColorAdjuster, ColorBatch, StripConfig,
};
use shade_surface::{RasterSurface, SvgSurface};

fn primaries() -> ColorBatch {
    ColorBatch::new(vec![
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255),
    ])
    .expect("non-empty batch")
}

fn opaque(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

#[test]
fn raster_strip_has_old_row_above_new_row() {
    let mut surface = RasterSurface::new();
    let factor = AdjustmentFactor::new(-0.2).unwrap();
    let adjusted = ColorAdjuster::with_surface(&mut surface).adjust(&primaries(), factor, true);

    let image = surface.image();
    // 3 cells of 64 x two rows of 96.
    assert_eq!(image.dimensions(), (192, 192));

    // Corners are clear of the centered labels.
    for (i, (old, new)) in primaries().iter().zip(adjusted.iter()).enumerate() {
        let x = i as u32 * 64 + 2;
        assert_eq!(*image.get_pixel(x, 2), opaque(*old), "old cell {i}");
        assert_eq!(*image.get_pixel(x, 190), opaque(*new), "new cell {i}");
    }
    assert_eq!(adjusted.to_hex_strings(), ["#CC0000", "#00CC00", "#0000CC"]);
}

#[test]
fn raster_labels_are_translucent_overlays() {
    let mut surface = RasterSurface::new();
    ColorAdjuster::with_surface(&mut surface).adjust(&primaries(), AdjustmentFactor::IDENTITY, true);
    let image = surface.image();

    // Backdrop-only pixel left of the "old" text, over the red cell.
    let p = image.get_pixel(56, 48);
    assert!(
        (100..160).contains(&p[0]) && p[1] == 0 && p[2] == 0,
        "expected darkened red under the backdrop, got {p:?}"
    );

    // The "old" text sits over the green cell; white glyphs lift its red channel.
    let lit = (70..122)
        .flat_map(|x| (30..66).map(move |y| (x, y)))
        .filter(|&(x, y)| image.get_pixel(x, y)[0] > 60)
        .count();
    assert!(lit > 0, "no label text painted over the green cell");
}

#[test]
fn svg_strip_lists_cells_and_labels() {
    let mut surface = SvgSurface::new();
    let config = StripConfig {
        cell_width: 10,
        row_height: 20,
        old_label: "before".to_owned(),
        new_label: "after".to_owned(),
        ..Default::default()
    };
    ColorAdjuster::with_surface(&mut surface)
        .strip_config(config)
        .adjust(&primaries(), AdjustmentFactor::WHITE, true);

    let doc = surface.finish();
    assert!(doc.contains("viewBox=\"0 0 30 40\""), "{doc}");
    assert!(doc.contains("fill=\"#FF0000\""), "{doc}");
    assert_eq!(doc.matches("fill=\"#FFFFFF\"").count(), 3 + 2, "{doc}");
    assert!(doc.contains(">before</text>"), "{doc}");
    assert!(doc.contains(">after</text>"), "{doc}");
    assert_eq!(doc.matches("fill-opacity").count(), 4, "{doc}");
}

#[test]
fn json_request_with_plot_draws() {
    let mut surface = RasterSurface::new();
    let mut adjuster = ColorAdjuster::with_surface(&mut surface);
    let response = AdjustRequest::from_json(r##"{ "cols": ["#000000", "white"], "adj": 0.5, "plot": true }"##)
        .and_then(|req| req.run(&mut adjuster))
        .unwrap();
    drop(adjuster);

    assert_eq!(response.colors.unwrap(), ["#808080", "#FFFFFF"]);
    assert_eq!(surface.image().dimensions(), (128, 192));
    assert_eq!(*surface.image().get_pixel(1, 191), Rgba([128, 128, 128, 255]));
}
