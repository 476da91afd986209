//! Construction parameters of a [`Spine`](super::Spine) and their validation

use crate::error::SpineError;
use super::integrator::Integrator;


/// Full parameter set of a dendritic spine, time is in ms, potentials in mV,
/// conductances in nS, capacitance in pF and surface area in um^2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineParameters {
    /// Membrane capacitance (pF)
    pub capacitance: f64,
    /// Membrane surface area (um^2)
    pub surface_area: f64,
    /// Leak conductance (nS)
    pub leak_conductance: f64,
    /// Leak reversal potential (mV)
    pub leak_reversal_potential: f64,
    /// Maximal AMPA conductance (nS)
    pub ampa_conductance: f64,
    /// AMPA reversal potential (mV)
    pub ampa_reversal_potential: f64,
    /// Decay of the AMPA pulse following a presynaptic spike (ms)
    pub ampa_time_constant: f64,
    /// Saturating value of the release probability
    pub release_probability_base: f64,
    /// Recovery of the release probability after a presynaptic spike (ms)
    pub release_probability_time_constant: f64,
    /// Maximal NMDA conductance (nS)
    pub nmda_conductance: f64,
    /// NMDA reversal potential (mV)
    pub nmda_reversal_potential: f64,
    /// Fast NMDA decay (ms)
    pub nmda_time_constant_fast: f64,
    /// Slow NMDA decay (ms)
    pub nmda_time_constant_slow: f64,
    /// NMDA rise (ms)
    pub nmda_time_constant_rise: f64,
    /// Extracellular magnesium concentration (mM)
    pub magnesium: f64,
    /// Peak of the back-propagating potential (mV)
    pub max_back_propagation_potential: f64,
    /// Weight of the fast back-propagation decay mode
    pub fast_back_propagation_contribution: f64,
    /// Weight of the slow back-propagation decay mode
    pub slow_back_propagation_contribution: f64,
    /// Fast back-propagation decay (ms)
    pub back_propagation_time_constant_fast: f64,
    /// Slow back-propagation decay (ms)
    pub back_propagation_time_constant_slow: f64,
    /// Membrane potential at time 0 and after a reset (mV)
    pub initial_membrane_potential: f64,
    /// Fixed step scheme used to integrate the membrane potential
    pub integrator: Integrator,
}

impl Default for SpineParameters {
    fn default() -> Self {
        SpineParameters {
            capacitance: 1.,
            surface_area: 1.,
            leak_conductance: 0.1,
            leak_reversal_potential: -70.,
            ampa_conductance: 1.0, // 1.0 nS
            ampa_reversal_potential: 0., // 0.0 mV
            ampa_time_constant: 2.,
            release_probability_base: 0.5,
            release_probability_time_constant: 10.,
            nmda_conductance: 0.6, // 0.6 nS
            nmda_reversal_potential: 0., // 0.0 mV
            nmda_time_constant_fast: 10.,
            nmda_time_constant_slow: 100.,
            nmda_time_constant_rise: 2.,
            magnesium: 1., // 1 mM of Mg
            max_back_propagation_potential: 10.,
            fast_back_propagation_contribution: 0.75,
            slow_back_propagation_contribution: 0.25,
            back_propagation_time_constant_fast: 3.,
            back_propagation_time_constant_slow: 25.,
            initial_membrane_potential: -70.,
            integrator: Integrator::default(),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SpineError> {
    if value.is_finite() && value > 0. {
        Ok(())
    } else {
        Err(SpineError::InvalidParameter { name, value, requirement: "positive and finite" })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), SpineError> {
    if value.is_finite() && value >= 0. {
        Ok(())
    } else {
        Err(SpineError::InvalidParameter { name, value, requirement: "non-negative and finite" })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), SpineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpineError::InvalidParameter { name, value, requirement: "finite" })
    }
}

impl SpineParameters {
    /// Checks every parameter against its allowed range, returns the first
    /// offending field as [`SpineError::InvalidParameter`]
    pub fn validate(&self) -> Result<(), SpineError> {
        positive("capacitance", self.capacitance)?;
        positive("surface_area", self.surface_area)?;

        non_negative("leak_conductance", self.leak_conductance)?;
        non_negative("ampa_conductance", self.ampa_conductance)?;
        non_negative("nmda_conductance", self.nmda_conductance)?;
        non_negative("release_probability_base", self.release_probability_base)?;
        non_negative("magnesium", self.magnesium)?;

        positive("ampa_time_constant", self.ampa_time_constant)?;
        positive("release_probability_time_constant", self.release_probability_time_constant)?;
        positive("nmda_time_constant_fast", self.nmda_time_constant_fast)?;
        positive("nmda_time_constant_slow", self.nmda_time_constant_slow)?;
        positive("nmda_time_constant_rise", self.nmda_time_constant_rise)?;
        positive("back_propagation_time_constant_fast", self.back_propagation_time_constant_fast)?;
        positive("back_propagation_time_constant_slow", self.back_propagation_time_constant_slow)?;

        finite("leak_reversal_potential", self.leak_reversal_potential)?;
        finite("ampa_reversal_potential", self.ampa_reversal_potential)?;
        finite("nmda_reversal_potential", self.nmda_reversal_potential)?;
        finite("max_back_propagation_potential", self.max_back_propagation_potential)?;
        finite("fast_back_propagation_contribution", self.fast_back_propagation_contribution)?;
        finite("slow_back_propagation_contribution", self.slow_back_propagation_contribution)?;
        finite("initial_membrane_potential", self.initial_membrane_potential)?;

        // equal decays make the normalization denominator vanish
        if self.nmda_time_constant_fast == self.nmda_time_constant_slow {
            return Err(SpineError::InvalidParameter {
                name: "nmda_time_constant_slow",
                value: self.nmda_time_constant_slow,
                requirement: "different from nmda_time_constant_fast",
            });
        }

        let normalization = self.nmda_normalization();
        if !normalization.is_finite() {
            return Err(SpineError::InvalidParameter {
                name: "nmda_time_constant_rise",
                value: self.nmda_time_constant_rise,
                requirement: "such that the NMDA normalization is finite",
            });
        }

        Ok(())
    }

    /// NMDA normalization derived from this parameter set's time constants
    pub fn nmda_normalization(&self) -> f64 {
        nmda_normalization(
            self.nmda_time_constant_fast,
            self.nmda_time_constant_slow,
            self.nmda_time_constant_rise,
        )
    }
}

/// Normalization of the dual exponential NMDA kernel,
/// `1 / (r^(rise / slow) - r^(rise / fast))` where `r = fast / slow`
pub fn nmda_normalization(fast: f64, slow: f64, rise: f64) -> f64 {
    let ratio = fast / slow;

    1. / (ratio.powf(rise / slow) - ratio.powf(rise / fast))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        assert!(SpineParameters::default().validate().is_ok());
    }

    #[test]
    fn test_normalization_formula() {
        let ratio: f64 = 10. / 100.;
        let expected = 1. / (ratio.powf(2. / 100.) - ratio.powf(2. / 10.));

        assert_relative_eq!(nmda_normalization(10., 100., 2.), expected);
        assert_relative_eq!(SpineParameters::default().nmda_normalization(), expected);
        assert!(expected > 0.);
    }

    #[test]
    fn test_non_positive_capacitance_rejected() {
        let parameters = SpineParameters { capacitance: 0., ..SpineParameters::default() };

        assert_eq!(
            parameters.validate(),
            Err(SpineError::InvalidParameter {
                name: "capacitance", value: 0., requirement: "positive and finite",
            }),
        );
    }

    #[test]
    fn test_zero_conductances_allowed() {
        let parameters = SpineParameters {
            leak_conductance: 0.,
            ampa_conductance: 0.,
            nmda_conductance: 0.,
            ..SpineParameters::default()
        };

        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_negative_conductance_rejected() {
        let parameters = SpineParameters { ampa_conductance: -1., ..SpineParameters::default() };

        assert!(matches!(
            parameters.validate(),
            Err(SpineError::InvalidParameter { name: "ampa_conductance", .. })
        ));
    }

    #[test]
    fn test_time_constants_rejected() {
        let parameters = SpineParameters { ampa_time_constant: -2., ..SpineParameters::default() };
        assert!(matches!(
            parameters.validate(),
            Err(SpineError::InvalidParameter { name: "ampa_time_constant", .. })
        ));

        let parameters = SpineParameters {
            back_propagation_time_constant_slow: f64::NAN,
            ..SpineParameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(SpineError::InvalidParameter { name: "back_propagation_time_constant_slow", .. })
        ));
    }

    #[test]
    fn test_equal_nmda_decays_rejected() {
        let parameters = SpineParameters {
            nmda_time_constant_fast: 50.,
            nmda_time_constant_slow: 50.,
            ..SpineParameters::default()
        };

        assert!(matches!(
            parameters.validate(),
            Err(SpineError::InvalidParameter { name: "nmda_time_constant_slow", .. })
        ));
    }

    #[test]
    fn test_non_finite_potential_rejected() {
        let parameters = SpineParameters {
            initial_membrane_potential: f64::INFINITY,
            ..SpineParameters::default()
        };

        assert!(parameters.validate().is_err());
    }
}
