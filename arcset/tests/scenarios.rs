//! End-to-end scenarios for union, difference, containment and angle arithmetic.

use approx::assert_abs_diff_eq;
use arcset::{Angle, AngleInterval, ArcError, BinaryOp, NumericErrorKind};
use core::f64::consts::PI;

// ==================== Helper Functions ====================

fn closed(start: f64, end: f64) -> AngleInterval {
    AngleInterval::closed(start, end)
}

fn parse(text: &str) -> AngleInterval {
    text.parse().unwrap()
}

// ==================== Union ====================

#[test]
fn union_scenarios() {
    assert_eq!(closed(0.0, PI / 2.0) + closed(PI / 3.0, PI), closed(0.0, PI));
    assert_eq!(closed(0.0, PI) + closed(PI, 3.0 * PI / 2.0), closed(0.0, 3.0 * PI / 2.0));
    assert_eq!(
        closed(5.0 * PI / 3.0, PI / 3.0) + closed(0.0, PI / 2.0),
        closed(5.0 * PI / 3.0, PI / 2.0)
    );
    assert_eq!((closed(PI, 3.0 * PI / 2.0) + closed(0.0, PI / 4.0)).len(), 2);
    assert_eq!(closed(0.0, 2.0 * PI) + closed(PI / 2.0, PI), closed(0.0, 2.0 * PI));
}

// ==================== Difference ====================

#[test]
fn difference_scenarios() {
    let d = closed(0.0, PI) - closed(PI, 2.0 * PI);
    assert_eq!(d.to_string(), format!("{{(0, {})}}", PI));

    assert!((closed(0.0, PI) - closed(0.0, PI)).is_empty());
    assert_eq!((closed(0.0, PI) - parse("(0, pi)")).len(), 2);

    let d = closed(0.0, PI) - closed(0.0, PI / 2.0);
    assert!(d.as_single().is_some_and(|i| i.same_bounds(&parse("(pi/2, pi]"))));

    let d = closed(0.0, PI) - closed(PI / 2.0, PI);
    assert!(d.as_single().is_some_and(|i| i.same_bounds(&parse("[0, pi/2)"))));

    let d = closed(0.0, PI) - parse("(0, pi/2]");
    assert_eq!(d.len(), 2);
    assert!(d[0].same_bounds(&AngleInterval::point(0.0)));

    let d = closed(0.0, PI) - parse("[pi/2, pi)");
    assert_eq!(d.len(), 2);
    assert!(d[1].same_bounds(&AngleInterval::point(PI)));

    let d = closed(0.0, PI) - AngleInterval::point(PI / 2.0);
    assert_eq!(d.len(), 2);
    assert_abs_diff_eq!(d.total_length(), PI, epsilon = 1e-12);

    let d = closed(PI / 2.0, 3.0 * PI / 2.0) - closed(3.0 * PI / 2.0, PI / 2.0);
    assert!(d.as_single().is_some_and(|i| i.same_bounds(&parse("(pi/2, 3pi/2)"))));

    let d = closed(3.0 * PI / 2.0, PI / 2.0) - closed(0.0, PI / 4.0);
    assert_eq!(d.len(), 2);
    assert_abs_diff_eq!(d.total_length(), 3.0 * PI / 4.0, epsilon = 1e-12);

    let d = closed(3.0 * PI / 2.0, PI / 2.0) - closed(PI, 0.0);
    assert!(d.as_single().is_some_and(|i| i.same_bounds(&parse("(0, pi/2]"))));
}

// ==================== Containment and equality ====================

#[test]
fn containment_scenarios() {
    let b = closed(0.0, PI);
    assert!(b.contains(&closed(PI / 4.0, PI / 2.0)));
    assert!(!b.contains(&closed(3.0 * PI / 2.0, PI / 2.0)));
    assert!(b.contains(&closed(PI / 6.0, 5.0 * PI / 6.0)));

    let q = closed(3.0 * PI / 2.0, 5.0 * PI / 4.0);
    assert!(q.contains(&AngleInterval::from_angle(Angle::from_degrees(180.0))));
    assert!(!q.contains(&AngleInterval::from_angle(Angle::from_degrees(270.0))));
}

#[test]
fn equality_scenarios() {
    assert_eq!(closed(PI / 2.0, PI), closed(5.0 * PI / 2.0, 3.0 * PI));
    assert_eq!(parse("[90°, 180°]"), closed(PI / 2.0, PI));
}

// ==================== Angle arithmetic ====================

#[test]
fn angle_arithmetic_scenarios() {
    let a = Angle::new(PI / 2.0);
    let b = Angle::new(PI / 2.0);
    let c = Angle::new(PI);

    assert_eq!(a + b, Angle::new(PI));
    assert_eq!(a + PI, Angle::new(3.0 * PI / 2.0));
    assert_eq!(a * 2.0, Angle::new(PI));
    assert_eq!(c - b, Angle::new(PI / 2.0));
    assert!(c > a);
    assert_eq!(a, b);
    assert_eq!(a.to_f64(), PI / 2.0);
    assert_eq!(a.to_i64(), 1);
    assert_eq!(a.to_string(), (PI / 2.0).to_string());
}

#[test]
fn checked_arithmetic_reports_errors() {
    let a = Angle::new(1.0);
    assert!(matches!(
        a.apply(BinaryOp::Mul, Angle::new(2.0)),
        Err(ArcError::UnsupportedOperation { op: "*", .. })
    ));
    assert_eq!(
        a.apply(BinaryOp::Div, 0.0),
        Err(ArcError::NumericDomain { op: "/", kind: NumericErrorKind::DivisionByZero })
    );
    assert_eq!(a.apply(BinaryOp::Add, 2.0).map(Angle::radians), Ok(3.0));
}
