/// Configuration for root verification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Largest accepted `|a·x² + b·x + c|` for a reported root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { residual_tol: 1e-5 }
    }
}

impl Config {
    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        Ok(())
    }
}
