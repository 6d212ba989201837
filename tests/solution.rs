use approx::assert_abs_diff_eq;
use numlab::prelude::*;

mod common;
use common::{opts, SHO};

#[test]
fn iter_pairs_times_with_states() {
    let sol = solve_ivp(&SHO, 0.0, 1.0, &[1.0, 0.0], opts(Method::RK4, 0.25)).unwrap();
    let pairs: Vec<(f64, &[f64])> = sol.iter().collect();
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0], (0.0, &[1.0, 0.0][..]));
    for ((t, y), (&ts, ys)) in sol.iter().zip(sol.t.iter().zip(&sol.y)) {
        assert_eq!(t, ts);
        assert_eq!(y, ys.as_slice());
    }
    let (t_end, y_end) = sol.iter().last().unwrap();
    assert_eq!(t_end, 1.0);
    assert_abs_diff_eq!(y_end[0], 1.0f64.cos(), epsilon = 1e-4);
}

#[test]
fn component_extracts_one_state() {
    let sol = solve_ivp(&SHO, 0.0, 1.0, &[1.0, 0.0], opts(Method::Midpoint, 0.5)).unwrap();
    let velocity = sol.component(1).unwrap();
    assert_eq!(velocity.len(), sol.t.len());
    assert_eq!(velocity[0], 0.0);
    assert!(sol.component(2).is_none());
}
