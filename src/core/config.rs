/// Tolerance for approximate floating-point comparisons, such as
/// [`Vector2::almost_eq`](crate::util::linalg::Vector2::almost_eq).
pub const EPSILON: f32 = 1e-5;
pub const LOG_FILE: &str = "run.log";
