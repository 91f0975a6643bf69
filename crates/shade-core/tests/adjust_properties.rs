use shade_core::{
    AdjustError, AdjustmentFactor, Arg, Color, ColorAdjuster, ColorBatch, ColorInput, ErrorKind,
    FactorInput, FlagInput, adjust_color, adjust_colours,
};

/// A spread of colors covering channel extremes and mid values.
fn sample_colors() -> Vec<Color> {
    let levels = [0u8, 1, 63, 127, 128, 200, 254, 255];
    let mut colors = Vec::new();
    for &r in &levels {
        for &g in &levels {
            for &b in &[0u8, 128, 255] {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    colors
}

fn sample_factors() -> Vec<AdjustmentFactor> {
    [-1.0, -0.75, -0.5, -0.2, -0.01, 0.0, 0.01, 0.2, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|f| AdjustmentFactor::new(f).expect("factor in range"))
        .collect()
}

fn hex_inputs(colors: &[Color]) -> Arg<Vec<ColorInput>> {
    Arg::Value(colors.iter().map(|c| ColorInput::Spec(c.to_hex())).collect())
}

fn number(f: f64) -> Arg<FactorInput> {
    Arg::Value(FactorInput::Number(f))
}

fn no_plot() -> Arg<FlagInput> {
    Arg::Value(FlagInput::Bool(false))
}

#[test]
fn zero_factor_is_identity() {
    for c in sample_colors() {
        assert_eq!(adjust_color(c, AdjustmentFactor::IDENTITY), c, "identity failed for {c}");
    }
}

#[test]
fn full_factors_hit_white_and_black() {
    for c in sample_colors() {
        assert_eq!(adjust_color(c, AdjustmentFactor::WHITE), Color::WHITE, "f=1 for {c}");
        assert_eq!(adjust_color(c, AdjustmentFactor::BLACK), Color::BLACK, "f=-1 for {c}");
    }
}

#[test]
fn lightening_never_darkens_and_darkening_never_lightens() {
    for c in sample_colors() {
        for f in sample_factors() {
            let out = adjust_color(c, f);
            for (before, after) in c.channels().into_iter().zip(out.channels()) {
                if f.get() > 0.0 {
                    assert!(after >= before, "{c} lightened by {f} gave {out}");
                } else {
                    assert!(after <= before, "{c} darkened by {f} gave {out}");
                }
            }
        }
    }
}

#[test]
fn batch_preserves_length_and_order() {
    let colors = sample_colors();
    let batch = ColorBatch::new(colors.clone()).unwrap();
    for f in sample_factors() {
        let out = ColorAdjuster::new().adjust(&batch, f, false);
        assert_eq!(out.len(), batch.len());
        for (i, (input, output)) in colors.iter().zip(out.iter()).enumerate() {
            assert_eq!(*output, adjust_color(*input, f), "position {i} out of order");
        }
    }
}

#[test]
fn loose_entry_point_matches_typed_transform() {
    let colors = sample_colors();
    let out = adjust_colours(hex_inputs(&colors), number(-0.5), no_plot())
        .unwrap()
        .unwrap();
    let expected: Vec<String> = colors
        .iter()
        .map(|c| adjust_color(*c, AdjustmentFactor::new(-0.5).unwrap()).to_hex())
        .collect();
    assert_eq!(out, expected);
}

#[test]
fn documented_scenarios() {
    let out = adjust_colours(hex_inputs(&[Color::rgb(255, 0, 0)]), number(-0.2), no_plot());
    assert_eq!(out.unwrap(), Some(vec!["#CC0000".to_owned()]));

    let out = adjust_colours(hex_inputs(&[Color::BLACK]), number(0.5), no_plot());
    assert_eq!(out.unwrap(), Some(vec!["#808080".to_owned()]));
}

#[test]
fn null_sentinels_pass_through() {
    assert_eq!(adjust_colours(Arg::Null, number(0.3), no_plot()).unwrap(), None);
    assert_eq!(
        adjust_colours(hex_inputs(&[Color::WHITE]), Arg::Null, no_plot()).unwrap(),
        None
    );
}

#[test]
fn range_and_coercion_errors() {
    let err = adjust_colours(hex_inputs(&[Color::WHITE]), number(1.5), no_plot()).unwrap_err();
    assert!(matches!(err, AdjustError::FactorOutOfRange(v) if v == 1.5), "{err}");
    assert_eq!(err.to_string(), "adj must be between -1 and 1");

    let err = adjust_colours(
        hex_inputs(&[Color::WHITE]),
        Arg::Value(FactorInput::from("abc")),
        no_plot(),
    )
    .unwrap_err();
    assert!(matches!(err, AdjustError::Coercion { name: "adj", .. }), "{err}");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn unparseable_color_is_named() {
    let err = adjust_colours(
        Arg::Value(vec![ColorInput::from("notacolor")]),
        number(0.0),
        no_plot(),
    )
    .unwrap_err();
    let AdjustError::InvalidColors(invalid) = &err else {
        panic!("expected InvalidColors, got {err}");
    };
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].input, "notacolor");
    assert!(err.to_string().contains("notacolor"), "{err}");
}

#[test]
fn named_and_triple_inputs_mix() {
    let out = adjust_colours(
        Arg::Value(vec![
            ColorInput::from("white"),
            ColorInput::from([0, 0, 0]),
            ColorInput::from("rgb(255, 0, 0)"),
        ]),
        number(-0.2),
        no_plot(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(out, ["#CCCCCC", "#000000", "#CC0000"]);
}
