use approx::assert_abs_diff_eq;
use numlab::prelude::*;

mod common;
use common::{opts, Decay, SHO};

#[test]
fn backward_integration_works() {
    let x0 = 2.0 * std::f64::consts::PI;
    let xend = 0.0;
    let y0 = [1.0, 0.0];
    for method in [Method::Midpoint, Method::RK4] {
        let sol = solve_ivp(&SHO, x0, xend, &y0, opts(method, -0.01)).unwrap();
        assert_eq!(sol.status, Status::Success);
        assert_eq!(sol.t.first(), Some(&x0));
        assert_eq!(sol.t.last(), Some(&xend));
        assert!(sol.t.windows(2).all(|w| w[1] < w[0]));
        let y_end = sol.y.last().unwrap();
        assert_abs_diff_eq!(y_end[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(y_end[1], 0.0, epsilon = 1e-3);
    }
}

#[test]
fn wrong_step_sign_is_rejected() {
    for method in [Method::Midpoint, Method::RK4] {
        let err = solve_ivp(&Decay, 0.0, 1.0, &[1.0], opts(method, -0.1)).unwrap_err();
        assert_eq!(err, Error::InvalidStepSize(-0.1));
    }
}

#[test]
fn nmax_limits_step_count() {
    let options = Options::builder().h(1e-3).nmax(10).build();
    let err = solve_ivp(&Decay, 0.0, 1.0, &[1.0], options).unwrap_err();
    assert_eq!(err, Error::NMaxExceeded(10));
}

#[test]
fn last_step_lands_on_xend() {
    let xend = 1.05;
    let sol = solve_ivp(&Decay, 0.0, xend, &[1.0], opts(Method::Midpoint, 0.1)).unwrap();
    // ten full steps then a shortened one
    assert_eq!(sol.nstep, 11);
    assert_eq!(sol.t.len(), 12);
    assert_eq!(*sol.t.last().unwrap(), xend);
    assert_abs_diff_eq!(sol.t[10] - sol.t[9], 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(sol.t[11] - sol.t[10], 0.05, epsilon = 1e-12);
}

#[test]
fn interrupt_stops_integration() {
    struct StopAfter(usize);
    impl SolOut for StopAfter {
        fn solout(&mut self, _xold: f64, _x: f64, _y: &[f64]) -> ControlFlag {
            if self.0 == 0 {
                return ControlFlag::Interrupt;
            }
            self.0 -= 1;
            ControlFlag::Continue
        }
    }

    // initial call plus two steps pass, the third step interrupts
    let mut stop = StopAfter(3);
    let sol = midpoint(&Decay, 0.0, 1.0, &[1.0], 0.1, Some(&mut stop), Settings::default()).unwrap();
    assert_eq!(sol.status, Status::Interrupted);
    assert_eq!(sol.nstep, 3);
    assert_abs_diff_eq!(sol.x, 0.3, epsilon = 1e-12);
}
