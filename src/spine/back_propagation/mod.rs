//! Potential injected into the spine by an action potential travelling back from the soma

use super::{spike_decay, Spine};


impl Spine {
    /// Back-propagating potential at a given time, a weighted sum of a fast and a
    /// slow exponential decay from the last postsynaptic spike, zero if no
    /// postsynaptic spike has been recorded
    pub fn back_propagation(&self, time: f64) -> f64 {
        let parameters = &self.parameters;

        let fast = spike_decay(
            self.last_postsynaptic_spike, time, parameters.back_propagation_time_constant_fast
        );
        let slow = spike_decay(
            self.last_postsynaptic_spike, time, parameters.back_propagation_time_constant_slow
        );

        parameters.max_back_propagation_potential * (
            parameters.fast_back_propagation_contribution * fast
                + parameters.slow_back_propagation_contribution * slow
        )
    }
}
