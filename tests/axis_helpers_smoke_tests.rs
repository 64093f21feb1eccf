use approx::assert_relative_eq;
use axis_math::{AxisError, LabelExtent, bound, intervals, max_width};

#[test]
fn bound_clamps_into_range() {
    assert_eq!(bound(0.0, 5.0, 10.0), 5.0);
    assert_eq!(bound(0.0, -3.0, 10.0), 0.0);
    assert_eq!(bound(0.0, 15.0, 10.0), 10.0);
}

#[test]
fn intervals_match_reference_axes() {
    assert_eq!(intervals(0.0, 10.0, 5).expect("ticks"), vec![0.0, 5.0, 10.0]);
    assert_eq!(
        intervals(0.0, 10.0, 3).expect("ticks"),
        vec![0.0, 3.0, 6.0, 9.0, 10.0]
    );
    assert_eq!(intervals(0.0, 0.0, 1).expect("ticks"), vec![0.0, 0.0]);
}

#[test]
fn intervals_keep_fractional_endpoints_verbatim() {
    let ticks = intervals(0.25, 20.75, 10).expect("ticks");
    assert_relative_eq!(ticks[0], 0.25);
    assert_relative_eq!(ticks[ticks.len() - 1], 20.75);
    assert_eq!(&ticks[1..ticks.len() - 1], &[10.0, 20.0]);
}

#[test]
fn intervals_reject_zero_delta() {
    let err = intervals(0.0, 10.0, 0).expect_err("zero delta must fail");
    assert!(matches!(err, AxisError::InvalidArgument(_)));
}

#[test]
fn max_width_over_measured_labels() {
    assert_eq!(max_width(Vec::<LabelExtent>::new()), 0.0);

    let labels = vec![
        LabelExtent::new(3.0, 14.0),
        LabelExtent::new(7.0, 14.0),
        LabelExtent::new(2.0, 14.0),
    ];
    let before = labels.clone();
    assert_eq!(max_width(labels.iter()), 7.0);
    assert_eq!(labels, before);
}

#[test]
fn axis_width_fits_widest_tick_label() {
    let ticks = intervals(0.0, 100.0, 25).expect("ticks");
    let char_px = 7.5;
    let extents: Vec<LabelExtent> = ticks
        .iter()
        .map(|tick| LabelExtent::new(format!("{tick}").len() as f64 * char_px, 12.0))
        .collect();

    assert_relative_eq!(max_width(&extents), 3.0 * char_px);
}
