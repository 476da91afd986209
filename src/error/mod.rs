use thiserror::Error;


/// A set of errors that may occur when using the library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpineError {
    /// A construction parameter or a directly set state value is outside of its allowed range
    #[error("Invalid parameter `{name}`: {value} (must be {requirement})")]
    InvalidParameter {
        /// Name of the offending field of [`SpineParameters`](crate::spine::SpineParameters),
        /// or of the state value being set (`membrane_potential`)
        name: &'static str,
        /// Value that was supplied
        value: f64,
        /// Human readable description of the allowed range
        requirement: &'static str,
    },
    /// Timestep passed to an integration call is not positive and finite
    #[error("Invalid timestep: {0} (must be positive and finite)")]
    InvalidStep(f64),
    /// Spike timestamp is not finite
    #[error("Invalid spike time: {0} (must be finite)")]
    InvalidSpikeTime(f64),
    /// Index does not refer to a spine in the population
    #[error("Spine not found at index {0}")]
    SpineNotFound(usize),
}

/// Checks that a timestep can be used to advance a spine
pub(crate) fn check_step(dt: f64) -> Result<(), SpineError> {
    if dt.is_finite() && dt > 0. {
        Ok(())
    } else {
        Err(SpineError::InvalidStep(dt))
    }
}

/// Checks that a spike timestamp can be recorded
pub(crate) fn check_spike_time(time: f64) -> Result<(), SpineError> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(SpineError::InvalidSpikeTime(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_validation() {
        assert!(check_step(0.01).is_ok());
        assert_eq!(check_step(0.), Err(SpineError::InvalidStep(0.)));
        assert_eq!(check_step(-1.), Err(SpineError::InvalidStep(-1.)));
        assert!(matches!(check_step(f64::NAN), Err(SpineError::InvalidStep(_))));
        assert!(check_step(f64::INFINITY).is_err());
    }

    #[test]
    fn test_spike_time_validation() {
        assert!(check_spike_time(-5.).is_ok());
        assert!(check_spike_time(f64::NEG_INFINITY).is_err());
        assert!(check_spike_time(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SpineError::InvalidParameter {
            name: "capacitance", value: 0., requirement: "positive and finite",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter `capacitance`: 0 (must be positive and finite)",
        );
        assert_eq!(SpineError::SpineNotFound(3).to_string(), "Spine not found at index 3");
    }
}
