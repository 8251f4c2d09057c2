use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;

/// Numeric component types accepted by [`Vector2`](linalg::Vector2) and
/// [`Vector3`](linalg::Vector3).
pub mod scalar {
    use num_traits::{Float, Signed};
    use std::fmt::{Debug, Display};

    /// A signed number with the square root and inverse cosine needed by the vector types.
    ///
    /// Floating-point implementations use the native [`Float`] methods. Integer
    /// implementations compute in `f64` and truncate the result back, so
    /// `Scalar::sqrt(8_i32) == 2`.
    ///
    /// Unsigned integers are not [`Scalar`]: reversing a vector needs negation.
    pub trait Scalar: Signed + Copy + PartialOrd + Display + Debug {
        #[must_use]
        fn sqrt(self) -> Self;
        #[must_use]
        fn acos(self) -> Self;
    }

    macro_rules! impl_scalar_float {
        ($($t:ty),*) => {$(
            impl Scalar for $t {
                fn sqrt(self) -> Self {
                    Float::sqrt(self)
                }
                fn acos(self) -> Self {
                    Float::acos(self)
                }
            }
        )*};
    }

    macro_rules! impl_scalar_int {
        ($($t:ty),*) => {$(
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            impl Scalar for $t {
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
                fn acos(self) -> Self {
                    (self as f64).acos() as $t
                }
            }
        )*};
    }

    impl_scalar_float!(f32, f64);
    impl_scalar_int!(i8, i16, i32, i64, isize);

    /// Clamps `x` to the closed range `[-1, 1]`, the domain of [`Scalar::acos`].
    ///
    /// `NaN` is passed through unchanged.
    pub fn clamp_unit<T: Scalar>(x: T) -> T {
        num_traits::clamp(x, -T::one(), T::one())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::f64::consts::{FRAC_PI_2, PI};

        #[test]
        fn float_sqrt_and_acos() {
            assert_eq!(Scalar::sqrt(16.0_f32), 4.0);
            assert_eq!(Scalar::sqrt(2.25_f64), 1.5);
            assert_eq!(Scalar::acos(1.0_f64), 0.0);
            assert!((Scalar::acos(0.0_f64) - FRAC_PI_2).abs() < 1e-12);
            assert!((Scalar::acos(-1.0_f64) - PI).abs() < 1e-12);
            assert!(Scalar::sqrt(-1.0_f32).is_nan());
        }

        #[test]
        fn integer_sqrt_truncates() {
            assert_eq!(Scalar::sqrt(9_i32), 3);
            assert_eq!(Scalar::sqrt(8_i32), 2);
            assert_eq!(Scalar::sqrt(0_i64), 0);
            assert_eq!(Scalar::sqrt(2_i8), 1);
        }

        #[test]
        fn integer_acos_truncates() {
            assert_eq!(Scalar::acos(1_i32), 0);
            assert_eq!(Scalar::acos(0_i32), 1);
            assert_eq!(Scalar::acos(-1_i32), 3);
        }

        #[test]
        fn clamp_unit_bounds() {
            assert_eq!(clamp_unit(1.000_000_1_f64), 1.0);
            assert_eq!(clamp_unit(-1.5_f32), -1.0);
            assert_eq!(clamp_unit(0.25_f64), 0.25);
            assert_eq!(clamp_unit(7_i32), 1);
            assert_eq!(clamp_unit(-7_i32), -1);
            assert!(clamp_unit(f64::NAN).is_nan());
        }
    }
}

/// Installs a `tracing` subscriber that writes to [`LOG_FILE`].
///
/// Fails if the log file cannot be opened or a global subscriber is already set.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)
        .with_context(|| format!("failed to open {LOG_FILE}"))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
