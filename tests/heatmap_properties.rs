//! Property tests for heatmap accumulation on randomized fixations.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use gaze_metrics::{
    accumulate, CanvasSize, DisplayThreshold, HeatmapAccumulator, HeatmapConfig, Point,
};

fn random_points(rng: &mut Xoshiro256PlusPlus, n: usize, canvas: CanvasSize) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..canvas.width as f64),
                rng.gen_range(0.0..canvas.height as f64),
            )
        })
        .collect()
}

#[test]
fn empty_input_gives_zero_grid_of_requested_size() {
    for (w, h) in [(1, 1), (17, 5), (1024, 768)] {
        let heatmap = accumulate(&[], &[], CanvasSize::new(w, h)).unwrap();
        assert_eq!(heatmap.width(), w);
        assert_eq!(heatmap.height(), h);
        assert!(heatmap.raw().iter().all(|&v| v == 0.0));
        assert!(heatmap.display().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn centered_point_has_weight_as_peak_and_full_mass() {
    let acc = HeatmapAccumulator::with_config(HeatmapConfig::raw()).unwrap();
    let canvas = CanvasSize::new(1024, 768);
    let weight = 312.0;
    let heatmap = acc
        .accumulate(&[Point::new(512.0, 384.0)], &[weight], canvas)
        .unwrap();

    assert_eq!(heatmap.value_at(512, 384), Some(weight));
    assert_eq!(heatmap.peak(), weight);
    let expected = weight * acc.kernel().mass();
    assert!(
        (heatmap.total_mass() - expected).abs() < 1e-9 * expected,
        "mass {} vs {}",
        heatmap.total_mass(),
        expected
    );
}

#[test]
fn edge_placement_loses_mass_and_never_leaks_outside() {
    let acc = HeatmapAccumulator::with_config(HeatmapConfig::raw()).unwrap();
    let canvas = CanvasSize::new(300, 200);
    let full = acc.kernel().mass();

    for p in [
        Point::new(0.0, 100.0),
        Point::new(299.0, 100.0),
        Point::new(150.0, 0.0),
        Point::new(150.0, 199.5),
        Point::new(299.0, 199.0),
        Point::new(-60.0, -60.0),
    ] {
        let heatmap = acc.accumulate(&[p], &[1.0], canvas).unwrap();
        assert_eq!(heatmap.width(), 300);
        assert_eq!(heatmap.height(), 200);
        let mass = heatmap.total_mass();
        assert!(mass > 0.0, "point {:?} should bleed into the canvas", p);
        assert!(mass < full, "point {:?} mass {} not clipped", p, mass);
    }
}

#[test]
fn accumulation_is_additive_across_calls() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let canvas = CanvasSize::new(320, 240);
    let points = random_points(&mut rng, 40, canvas);
    let weights: Vec<f64> = (0..40).map(|_| rng.gen_range(50.0..600.0)).collect();
    let acc = HeatmapAccumulator::new().threshold(DisplayThreshold::None);

    let all = acc.accumulate(&points, &weights, canvas).unwrap();
    let first = acc.accumulate(&points[..20], &weights[..20], canvas).unwrap();
    let second = acc.accumulate(&points[20..], &weights[20..], canvas).unwrap();

    let sum = first.raw() + second.raw();
    let max_err = (all.raw() - sum).amax();
    assert!(max_err < 1e-9, "max error {}", max_err);
}

#[test]
fn display_threshold_only_masks_cells_below_lowbound() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let canvas = CanvasSize::new(256, 192);
    let points = random_points(&mut rng, 25, canvas);
    let weights = vec![200.0; 25];

    let heatmap = accumulate(&points, &weights, canvas).unwrap();
    let lowbound = heatmap.lowbound().expect("grid has positive cells");

    for (raw, shown) in heatmap.raw().iter().zip(heatmap.display().iter()) {
        if *raw < lowbound {
            assert!(shown.is_nan());
        } else {
            assert_eq!(raw, shown);
        }
    }
}

#[test]
fn smaller_kernel_concentrates_mass() {
    let small = HeatmapAccumulator::with_config(HeatmapConfig {
        kernel_size: 60,
        ..HeatmapConfig::raw()
    })
    .unwrap();
    let big = HeatmapAccumulator::with_config(HeatmapConfig::raw()).unwrap();
    let canvas = CanvasSize::new(400, 400);
    let p = [Point::new(200.0, 200.0)];

    let a = small.accumulate(&p, &[1.0], canvas).unwrap();
    let b = big.accumulate(&p, &[1.0], canvas).unwrap();
    assert_eq!(a.peak(), 1.0);
    assert!(a.total_mass() < b.total_mass());
    assert_eq!(a.value_at(260, 200), Some(0.0));
}
