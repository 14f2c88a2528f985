use thiserror::Error;

/// Errors that can occur while verifying a solve outcome.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("root {x:e} leaves residual {residual:e}, above tolerance {tol:e}")]
    ResidualTooLarge { x: f64, residual: f64, tol: f64 },

    #[error("solver reported an overflow")]
    Overflow,
}
