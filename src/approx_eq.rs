pub const EPSILON: f64 = 1.0e-5;
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !$crate::approx_eq::ApproxEq::approx_eq_low_prec(left_val, right_val) {
                    panic!(
                        "assertion `left ~= right` failed\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_within_epsilon() {
        assert!(1.0_f64.approx_eq(&(1.0 + EPSILON / 2.)));
        assert!(!1.0_f64.approx_eq(&(1.0 + EPSILON * 2.)));
        assert!(1.0_f64.approx_eq_low_prec(&(1.0 + EPSILON * 2.)));
    }
}
