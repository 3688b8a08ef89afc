use crate::error::GridError;

/// Solver parameters for the fluid simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParams {
    pub dt: f64,
    pub diffusion: f64,
    pub viscosity: f64,
    /// Gauss-Seidel sweeps per diffusion or pressure solve.
    pub iterations: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            dt: 0.1,
            diffusion: 0.0001,
            viscosity: 0.0001,
            iterations: 20,
        }
    }
}

impl SolverParams {
    pub fn new(dt: f64, diffusion: f64, viscosity: f64) -> Self {
        Self {
            dt,
            diffusion,
            viscosity,
            ..Self::default()
        }
    }

    /// Reject parameters the solver cannot step with.
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(GridError::InvalidConfiguration(format!(
                "time step must be finite and non-negative, got {}",
                self.dt
            )));
        }
        if !self.diffusion.is_finite() || self.diffusion < 0.0 {
            return Err(GridError::InvalidConfiguration(format!(
                "diffusion rate must be finite and non-negative, got {}",
                self.diffusion
            )));
        }
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(GridError::InvalidConfiguration(format!(
                "viscosity must be finite and non-negative, got {}",
                self.viscosity
            )));
        }
        if self.iterations == 0 {
            return Err(GridError::InvalidConfiguration(
                "relaxation needs at least one iteration".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SolverParams::default();
        assert_eq!(params.dt, 0.1);
        assert_eq!(params.diffusion, 0.0001);
        assert_eq!(params.viscosity, 0.0001);
        assert_eq!(params.iterations, 20);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_new_keeps_default_iterations() {
        let params = SolverParams::new(0.01, 1.0, 0.5);
        assert_eq!(params.dt, 0.01);
        assert_eq!(params.diffusion, 1.0);
        assert_eq!(params.viscosity, 0.5);
        assert_eq!(params.iterations, 20);
    }

    #[test]
    fn test_zero_dt_is_allowed() {
        assert!(SolverParams::new(0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_dt_rejected() {
        let err = SolverParams::new(-0.1, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_nan_viscosity_rejected() {
        assert!(SolverParams::new(0.1, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_negative_diffusion_rejected() {
        assert!(SolverParams::new(0.1, -1.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let params = SolverParams {
            iterations: 0,
            ..SolverParams::default()
        };
        assert!(params.validate().is_err());
    }
}
