use super::*;
use crate::foundation::core::{Canvas, Point};
use crate::trajectory::curve::{Cardioid, FigureEight};

const CANVAS: Canvas = Canvas {
    width: 1020,
    height: 632,
};

/// Straight line at constant velocity: strictly increasing chord length.
struct Line {
    vx: f64,
    vy: f64,
}

impl Trajectory for Line {
    fn position(&self, param: f64) -> Point {
        Point::new(self.vx * param, self.vy * param)
    }
}

/// Locally flat everywhere: the chord speed never leaves zero.
struct Flat;

impl Trajectory for Flat {
    fn position(&self, _param: f64) -> Point {
        Point::new(12.0, 34.0)
    }
}

fn est_speed(curve: &impl Trajectory, param: f64, mp: MovePrediction, dt: f64) -> f64 {
    distance(curve.position(param + mp.dp), curve.position(param)) / dt
}

#[test]
fn rejects_non_positive_speed_and_dt() {
    let line = Line { vx: 1.0, vy: 0.0 };
    for (speed, dt) in [(0.0, 0.005), (-5.0, 0.005), (f64::NAN, 0.005), (100.0, 0.0), (100.0, -1.0)] {
        assert!(matches!(
            predict_move(&line, 0.0, speed, dt),
            Err(CurvepaceError::Validation(_))
        ));
    }
}

#[test]
fn monotonic_profile_converges_within_tolerance() {
    let line = Line { vx: 3.0, vy: 4.0 };
    let mp = predict_move(&line, 2.0, 500.0, 0.016).unwrap();
    assert!(mp.dp >= 0.0);
    let est = est_speed(&line, 2.0, mp, 0.016);
    assert!((est - 500.0).abs() <= 500.0 * RELATIVE_TOLERANCE);
}

#[test]
fn flat_curve_diverges_in_the_bracket_phase() {
    let err = predict_move(&Flat, 0.0, 100.0, 0.005).unwrap_err();
    match err {
        CurvepaceError::SearchDiverged { phase, .. } => {
            assert_eq!(phase, SearchPhase::Bracket);
        }
        other => panic!("expected SearchDiverged, got {other}"),
    }
}

#[test]
fn bracketing_is_deterministic() {
    let eight = FigureEight::fitted(CANVAS, 11.0);
    let a = predict_move(&eight, 1.3, 18000.0, 0.005).unwrap();
    let b = predict_move(&eight, 1.3, 18000.0, 0.005).unwrap();
    assert_eq!(a, b);
}

#[test]
fn dp_stays_non_negative_and_speed_matches_across_params() {
    let eight = FigureEight::fitted(CANVAS, 11.0);
    let cardioid = Cardioid::fitted(CANVAS, 11.0);
    let speed = 18000.0;
    let dt = 0.005;

    for i in 0..48 {
        let param = 0.37 * f64::from(i);
        for mp in [
            predict_move(&eight, param, speed, dt).unwrap(),
            predict_move(&cardioid, param, speed, dt).unwrap(),
        ] {
            assert!(mp.dp >= 0.0, "dp must advance forward, got {}", mp.dp);
        }
        let est = est_speed(&eight, param, predict_move(&eight, param, speed, dt).unwrap(), dt);
        assert!((est - speed).abs() <= speed * RELATIVE_TOLERANCE);
    }
}

#[test]
fn figure_eight_first_tick_matches_the_target_speed() {
    // Default-config scenario: figure eight on a 1020x632 surface at
    // 18000 px/s, 5 ms per tick.
    let eight = FigureEight::fitted(CANVAS, 11.0);
    let mp = predict_move(&eight, 0.0, 18000.0, 0.005).unwrap();
    assert!(mp.dp >= 0.0);
    let est = est_speed(&eight, 0.0, mp, 0.005);
    assert!((est - 18000.0).abs() <= 180.0);
}

#[test]
fn cardioid_cusp_does_not_stall_the_search() {
    // At the cusp the local speed vanishes; the bracket must expand past it
    // rather than hang or step backwards.
    let cardioid = Cardioid::fitted(CANVAS, 11.0);
    let mp = predict_move(&cardioid, 0.0, 18000.0, 0.005).unwrap();
    assert!(mp.dp > 0.0);
    let est = est_speed(&cardioid, 0.0, mp, 0.005);
    assert!((est - 18000.0).abs() <= 18000.0 * RELATIVE_TOLERANCE);
}
