//! A single dendritic spine compartment whose membrane potential is driven by
//! a leak current and by AMPA and NMDA synaptic currents triggered by presynaptic
//! spikes, with a back-propagating potential added after postsynaptic spikes.
//!
//! ```rust
//! use dendritic_spine::spine::{Spine, SpineParameters};
//! # use dendritic_spine::error::SpineError;
//!
//! # fn main() -> Result<(), SpineError> {
//! let mut spine = Spine::new(SpineParameters::default())?;
//!
//! spine.record_presynaptic_spike(1.)?;
//! let potentials = spine.run(0.01, 500)?;
//!
//! assert_eq!(potentials.len(), 501);
//! assert_eq!(spine.total_potential(), potentials[500]);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, trace, warn};
use crate::error::{check_spike_time, check_step, SpineError};

pub mod back_propagation;
pub mod currents;
pub mod integrator;
pub mod parameters;

pub use currents::SpineCurrents;
pub use integrator::Integrator;
pub use parameters::{nmda_normalization, SpineParameters};


/// Returns `exp((spike - time) / time_constant)`, or `0` if no spike has occurred
pub(crate) fn spike_decay(spike: Option<f64>, time: f64, time_constant: f64) -> f64 {
    match spike {
        Some(spike) => ((spike - time) / time_constant).exp(),
        None => 0.,
    }
}

/// Dendritic spine state, mutated in place by spike recording and integration
#[derive(Debug, Clone, PartialEq)]
pub struct Spine {
    parameters: SpineParameters,
    /// Derived from the NMDA time constants at construction
    nmda_normalization: f64,
    /// Simulated time (ms)
    current_time: f64,
    /// Integrated membrane potential (mV)
    membrane_potential: f64,
    /// Membrane potential plus back-propagating potential (mV)
    total_potential: f64,
    /// Time of last presynaptic spike (ms)
    last_presynaptic_spike: Option<f64>,
    /// Time of last postsynaptic spike (ms)
    last_postsynaptic_spike: Option<f64>,
}

impl Spine {
    /// Validates the parameters and creates a spine at time 0 that has not seen any spikes
    pub fn new(parameters: SpineParameters) -> Result<Self, SpineError> {
        parameters.validate()?;

        Ok(Spine::from_valid_parameters(parameters))
    }

    /// Returns a spine built from [`SpineParameters::default`]
    pub fn default_impl() -> Self {
        Spine::from_valid_parameters(SpineParameters::default())
    }

    fn from_valid_parameters(parameters: SpineParameters) -> Self {
        let nmda_normalization = parameters.nmda_normalization();
        debug!(nmda_normalization, integrator = ?parameters.integrator, "created spine");

        Spine {
            parameters,
            nmda_normalization,
            current_time: 0.,
            membrane_potential: parameters.initial_membrane_potential,
            total_potential: parameters.initial_membrane_potential,
            last_presynaptic_spike: None,
            last_postsynaptic_spike: None,
        }
    }

    /// Sets the time of the last presynaptic spike, ordering relative to the
    /// current time is not checked
    pub fn record_presynaptic_spike(&mut self, time: f64) -> Result<(), SpineError> {
        check_spike_time(time)?;
        debug!(time, "presynaptic spike");
        self.last_presynaptic_spike = Some(time);

        Ok(())
    }

    /// Sets the time of the last postsynaptic spike, ordering relative to the
    /// current time is not checked
    ///
    /// The total potential is left as is, the back-propagating potential from this
    /// spike is first included by the next [`Spine::advance`]
    pub fn record_postsynaptic_spike(&mut self, time: f64) -> Result<(), SpineError> {
        check_spike_time(time)?;
        debug!(time, "postsynaptic spike");
        self.last_postsynaptic_spike = Some(time);

        Ok(())
    }

    /// Advances the membrane potential by one step of size `dt` and returns
    /// the updated total potential
    ///
    /// Nothing is mutated if `dt` is not positive and finite. A diverging
    /// integration (for example from a `dt` too large for the fastest time constant)
    /// is not masked, the non-finite potential is stored and returned.
    pub fn advance(&mut self, dt: f64) -> Result<f64, SpineError> {
        check_step(dt)?;

        let capacitance = self.parameters.capacitance;
        let change = self.parameters.integrator.step(
            |voltage, time| self.current(voltage, time) / capacitance,
            self.membrane_potential,
            self.current_time,
            dt,
        );

        let was_finite = self.total_potential.is_finite();

        self.membrane_potential += change;
        self.current_time += dt;
        self.total_potential = self.membrane_potential + self.back_propagation(self.current_time);

        trace!(time = self.current_time, total_potential = self.total_potential, "advanced spine");
        if was_finite && !self.total_potential.is_finite() {
            warn!(
                time = self.current_time,
                dt,
                total_potential = self.total_potential,
                "spine potential diverged"
            );
        }

        Ok(self.total_potential)
    }

    /// Advances the spine `iterations` times and returns the total potential over
    /// time, starting with the value before the first step
    pub fn run(&mut self, dt: f64, iterations: usize) -> Result<Vec<f64>, SpineError> {
        check_step(dt)?;

        let mut potentials = Vec::with_capacity(iterations + 1);
        potentials.push(self.total_potential);

        for _ in 0..iterations {
            potentials.push(self.advance(dt)?);
        }

        Ok(potentials)
    }

    /// Overrides the integrated membrane potential, the total potential is
    /// recalculated at the current time
    pub fn set_membrane_potential(&mut self, voltage: f64) -> Result<(), SpineError> {
        if !voltage.is_finite() {
            return Err(SpineError::InvalidParameter {
                name: "membrane_potential", value: voltage, requirement: "finite",
            });
        }

        self.membrane_potential = voltage;
        self.total_potential = voltage + self.back_propagation(self.current_time);

        Ok(())
    }

    /// Returns the spine to time 0 at its initial membrane potential and forgets
    /// every recorded spike
    pub fn reset(&mut self) {
        self.current_time = 0.;
        self.membrane_potential = self.parameters.initial_membrane_potential;
        self.total_potential = self.membrane_potential;
        self.last_presynaptic_spike = None;
        self.last_postsynaptic_spike = None;
    }

    /// Membrane potential plus back-propagating potential (mV)
    pub fn total_potential(&self) -> f64 {
        self.total_potential
    }

    /// Integrated membrane potential (mV)
    pub fn membrane_potential(&self) -> f64 {
        self.membrane_potential
    }

    /// Simulated time (ms)
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn last_presynaptic_spike(&self) -> Option<f64> {
        self.last_presynaptic_spike
    }

    pub fn last_postsynaptic_spike(&self) -> Option<f64> {
        self.last_postsynaptic_spike
    }

    pub fn nmda_normalization(&self) -> f64 {
        self.nmda_normalization
    }

    pub fn parameters(&self) -> &SpineParameters {
        &self.parameters
    }
}
