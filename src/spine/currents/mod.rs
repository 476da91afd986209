//! Transmembrane currents of the spine, every function here is pure in
//! `(voltage, time)` and the spine's parameters and spike times

use super::{spike_decay, Spine};


/// Breakdown of the currents at a given voltage and time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineCurrents {
    /// Leak current
    pub leak: f64,
    /// AMPA receptor current
    pub ampa: f64,
    /// NMDA receptor current
    pub nmda: f64,
    /// Sum of AMPA and NMDA currents
    pub synaptic: f64,
    /// Net current driving the membrane potential
    pub net: f64,
}

impl Spine {
    /// Net current, synaptic current is scaled by surface area while leak current is not
    pub fn current(&self, voltage: f64, time: f64) -> f64 {
        self.synaptic_current(voltage, time) / self.parameters.surface_area - self.leak_current(voltage)
    }

    pub fn leak_current(&self, voltage: f64) -> f64 {
        self.parameters.leak_conductance * (voltage - self.parameters.leak_reversal_potential)
    }

    pub fn synaptic_current(&self, voltage: f64, time: f64) -> f64 {
        self.ampa_current(voltage, time) + self.nmda_current(voltage, time)
    }

    pub fn ampa_current(&self, voltage: f64, time: f64) -> f64 {
        -self.parameters.ampa_conductance * self.ampa_release_probability(time)
            * (voltage - self.parameters.ampa_reversal_potential)
    }

    /// Release probability shaped into a pulse decaying from the last presynaptic spike
    pub fn ampa_release_probability(&self, time: f64) -> f64 {
        self.release_probability(time)
            * spike_decay(self.last_presynaptic_spike, time, self.parameters.ampa_time_constant)
    }

    pub fn nmda_current(&self, voltage: f64, time: f64) -> f64 {
        -self.parameters.nmda_conductance * self.nmda_release_probability(time)
            * self.nmda_magnesium_blockade(voltage) * (voltage - self.parameters.nmda_reversal_potential)
    }

    /// Release probability shaped by the normalized difference of the fast and slow NMDA decays
    pub fn nmda_release_probability(&self, time: f64) -> f64 {
        let fast = spike_decay(self.last_presynaptic_spike, time, self.parameters.nmda_time_constant_fast);
        let slow = spike_decay(self.last_presynaptic_spike, time, self.parameters.nmda_time_constant_slow);

        self.release_probability(time) * self.nmda_normalization * (fast - slow)
    }

    /// Fraction of NMDA receptors relieved from magnesium block, voltage should be in mV
    pub fn nmda_magnesium_blockade(&self, voltage: f64) -> f64 {
        1. / (1. + self.parameters.magnesium / 3.57 * (-voltage / 16.13).exp())
    }

    /// Vesicle release probability, zero right at a presynaptic spike and recovering
    /// towards the base probability afterwards
    pub fn release_probability(&self, time: f64) -> f64 {
        self.parameters.release_probability_base * (
            1. - spike_decay(
                self.last_presynaptic_spike, time, self.parameters.release_probability_time_constant
            )
        )
    }

    /// Breakdown of currents at a given voltage and time
    pub fn currents_at(&self, voltage: f64, time: f64) -> SpineCurrents {
        let leak = self.leak_current(voltage);
        let ampa = self.ampa_current(voltage, time);
        let nmda = self.nmda_current(voltage, time);
        let synaptic = ampa + nmda;

        SpineCurrents {
            leak,
            ampa,
            nmda,
            synaptic,
            net: synaptic / self.parameters.surface_area - leak,
        }
    }

    /// Breakdown of currents at the current membrane potential and time
    pub fn currents(&self) -> SpineCurrents {
        self.currents_at(self.membrane_potential, self.current_time)
    }
}
