//! Behavioural properties of a rider driven through its host-facing calls.

use ccrider_engine::{EngineError, RecordingSink, Rider, RiderConfig, RiderState};
use proptest::prelude::*;

type TestResult = Result<(), EngineError>;

fn rider_with(points: &[f32]) -> Result<Rider<RecordingSink>, EngineError> {
    let config = RiderConfig::new("test")
        .with_active_count(points.len().max(2))
        .with_points(points.to_vec());
    Rider::new(&config, RecordingSink::new())
}

fn display_points(count: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.0f32..=100.0, count)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_endpoints_are_exact(points in prop::collection::vec(0.0f32..=100.0, 2..=9)) {
        let mut rider = rider_with(&points).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let first = rider.point(0);
        let last = rider.point(points.len() - 1);

        prop_assert_eq!(rider.evaluate(0.0).map(f32::to_bits), first.map(f32::to_bits));
        prop_assert_eq!(rider.evaluate(1.0).map(f32::to_bits), last.map(f32::to_bits));
    }

    #[test]
    fn prop_output_stays_in_unit_range(
        points in prop::collection::vec(0.0f32..=100.0, 2..=9),
        input in 0.0f32..=1.0,
    ) {
        let mut rider = rider_with(&points).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let output = rider.set_input(input);
        prop_assert!(output.is_some_and(|v| (0.0..=1.0).contains(&v)), "{output:?}");
    }

    #[test]
    fn prop_resample_down_and_up_preserves_shape(points in display_points(5)) {
        let mut rider = rider_with(&points).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let samples: Vec<f32> = (0..=64).map(|i| i as f32 / 64.0).collect();
        let reference: Vec<Option<f32>> = samples.iter().map(|t| rider.evaluate(*t)).collect();

        rider.on_active_count_changed(2);
        rider.on_active_count_changed(5);
        prop_assert_eq!(rider.active_count(), 5);

        for (t, expected) in samples.iter().zip(reference) {
            let actual = rider.evaluate(*t);
            let (Some(actual), Some(expected)) = (actual, expected) else {
                return Err(TestCaseError::fail(format!("no curve at t={t}")));
            };
            prop_assert!(
                (actual - expected).abs() < 0.02,
                "t={t}: {actual} vs {expected}"
            );
        }
    }

    #[test]
    fn prop_repeated_point_write_emits_once(
        index in 0usize..3,
        value in 0.0f32..=100.0,
        input in 0.0f32..=1.0,
    ) {
        let mut rider = rider_with(&[0.0, 50.0, 100.0]).map_err(|e| TestCaseError::fail(e.to_string()))?;
        rider.set_input(input);
        let before = rider.sink().emit_count();

        rider.on_point_changed(index, value);
        rider.on_point_changed(index, value);
        prop_assert!(rider.sink().emit_count() - before <= 1);
    }

    #[test]
    fn prop_memoized_lookup_is_deterministic(
        points in prop::collection::vec(0.0f32..=100.0, 2..=9),
        t in 0.0f32..=1.0,
    ) {
        let mut rider = rider_with(&points).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let first = rider.evaluate(t).map(f32::to_bits);
        let second = rider.evaluate(t).map(f32::to_bits);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn straight_line_passes_through_midpoint() -> TestResult {
    let mut rider = rider_with(&[0.0, 100.0])?;
    let output = rider.set_input(0.5);
    assert!(
        output.is_some_and(|v| (v - 0.5).abs() < 1.0 / 128.0),
        "{output:?}"
    );
    Ok(())
}

#[test]
fn peak_does_not_overshoot() -> TestResult {
    let mut rider = rider_with(&[0.0, 100.0, 0.0])?;
    for step in 0..=1000 {
        let t = step as f32 / 1000.0;
        let value = rider.evaluate(t);
        assert!(
            value.is_some_and(|v| (0.0..=1.0).contains(&v)),
            "t={t}: {value:?}"
        );
    }
    Ok(())
}

#[test]
fn fewer_than_two_points_silences_output() -> TestResult {
    let mut rider = rider_with(&[0.0, 50.0, 100.0])?;
    rider.set_input(0.3);
    assert_eq!(rider.sink().emit_count(), 1);

    rider.on_active_count_changed(1);
    assert_eq!(rider.state(), RiderState::NoCurve);
    assert!(rider.set_input(0.7).is_none());
    assert!(rider.on_point_changed(0, 20.0).is_none());
    assert_eq!(rider.sink().emit_count(), 1);

    rider.on_active_count_changed(0);
    assert_eq!(rider.state(), RiderState::NoCurve);

    let output = rider.on_active_count_changed(3);
    assert_eq!(rider.state(), RiderState::HasCurve);
    assert!(output.is_some());
    assert_eq!(rider.sink().emit_count(), 2);
    Ok(())
}

#[test]
fn count_change_without_input_emits_nothing() -> TestResult {
    let mut rider = rider_with(&[0.0, 100.0])?;
    assert!(rider.on_active_count_changed(4).is_none());
    assert_eq!(rider.sink().emit_count(), 0);
    assert_eq!(rider.sink().refresh_count(), 1);
    Ok(())
}

#[test]
fn host_echo_of_resampled_point_is_ignored() -> TestResult {
    let mut rider = rider_with(&[0.0, 30.0, 100.0])?;
    rider.set_input(0.5);
    rider.on_active_count_changed(5);
    let generation = rider.generation();
    let emitted = rider.sink().emit_count();

    // The host reads back the new slider values and writes them again.
    for index in 0..5 {
        if let Some(display) = rider.display_value(index) {
            assert!(rider.on_point_changed(index, display).is_none());
        }
    }

    assert_eq!(rider.generation(), generation);
    assert_eq!(rider.sink().emit_count(), emitted);
    assert!(rider.has_backup());
    Ok(())
}

#[test]
fn sub_notch_edit_updates_point() -> TestResult {
    let mut rider = Rider::new(&RiderConfig::new("test"), RecordingSink::new())?;
    rider.set_input(0.5);
    let emitted = rider.sink().emit_count();

    // 50.3 rounds to the same slider notch as the stored 50.0
    let output = rider.on_point_changed(1, 50.3);
    assert!(output.is_some_and(|v| (v - 0.503).abs() < 0.01));
    assert!(rider.point(1).is_some_and(|v| (v - 0.503).abs() < 1e-6));
    assert_eq!(rider.sink().emit_count(), emitted + 1);

    // writing the same raw value again is still a no-op
    assert!(rider.on_point_changed(1, 50.3).is_none());
    assert_eq!(rider.sink().emit_count(), emitted + 1);
    Ok(())
}
