//! A collection of independent spines advanced together, each spine only
//! touches its own state so a step is run across spines in parallel.
//!
//! The spines share no state and are not connected to each other, this is not
//! a network. Spikes are routed to a single spine by index and no spine's
//! potential ever feeds into another.

use rayon::prelude::*;
use tracing::debug;
use crate::{
    error::{check_step, SpineError},
    spine::{Spine, SpineParameters},
};


/// Independent spines sharing a simulation clock
#[derive(Debug, Clone, Default)]
pub struct SpinePopulation {
    spines: Vec<Spine>,
}

impl SpinePopulation {
    pub fn new(spines: Vec<Spine>) -> Self {
        SpinePopulation { spines }
    }

    /// Creates `size` identical spines from one parameter set
    pub fn from_parameters(parameters: SpineParameters, size: usize) -> Result<Self, SpineError> {
        let spine = Spine::new(parameters)?;
        debug!(size, "created spine population");

        Ok(SpinePopulation { spines: vec![spine; size] })
    }

    pub fn len(&self) -> usize {
        self.spines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Spine> {
        self.spines.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Spine> {
        self.spines.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spine> {
        self.spines.iter()
    }

    pub fn push(&mut self, spine: Spine) {
        self.spines.push(spine);
    }

    fn spine_mut(&mut self, index: usize) -> Result<&mut Spine, SpineError> {
        self.spines.get_mut(index).ok_or(SpineError::SpineNotFound(index))
    }

    /// Records a presynaptic spike at the spine at `index`
    pub fn record_presynaptic_spike(&mut self, index: usize, time: f64) -> Result<(), SpineError> {
        self.spine_mut(index)?.record_presynaptic_spike(time)
    }

    /// Records a postsynaptic spike at the spine at `index`
    pub fn record_postsynaptic_spike(&mut self, index: usize, time: f64) -> Result<(), SpineError> {
        self.spine_mut(index)?.record_postsynaptic_spike(time)
    }

    /// Advances every spine by `dt` and returns their total potentials in order,
    /// no spine is mutated if `dt` is invalid
    pub fn advance(&mut self, dt: f64) -> Result<Vec<f64>, SpineError> {
        check_step(dt)?;

        self.spines
            .par_iter_mut()
            .map(|spine| spine.advance(dt))
            .collect()
    }

    /// Advances the population `iterations` times, returns the total potentials
    /// of every spine at each step starting with the values before the first step
    pub fn run(&mut self, dt: f64, iterations: usize) -> Result<Vec<Vec<f64>>, SpineError> {
        check_step(dt)?;

        let mut history = Vec::with_capacity(iterations + 1);
        history.push(self.total_potentials());

        for _ in 0..iterations {
            history.push(self.advance(dt)?);
        }

        Ok(history)
    }

    /// Total potential of every spine
    pub fn total_potentials(&self) -> Vec<f64> {
        self.spines.iter().map(|spine| spine.total_potential()).collect()
    }
}

impl From<Vec<Spine>> for SpinePopulation {
    fn from(spines: Vec<Spine>) -> Self {
        SpinePopulation::new(spines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_index() {
        let mut population = SpinePopulation::from_parameters(SpineParameters::default(), 2).unwrap();

        assert_eq!(population.record_presynaptic_spike(2, 1.), Err(SpineError::SpineNotFound(2)));
        assert_eq!(population.record_postsynaptic_spike(5, 1.), Err(SpineError::SpineNotFound(5)));
        assert!(population.record_presynaptic_spike(1, 1.).is_ok());
    }

    #[test]
    fn test_empty_population() {
        let mut population = SpinePopulation::default();

        assert!(population.is_empty());
        assert_eq!(population.advance(0.1), Ok(vec![]));
        assert_eq!(population.run(0.1, 3).unwrap().len(), 4);
    }

    #[test]
    fn test_spines_are_unconnected() {
        let mut population = SpinePopulation::from_parameters(SpineParameters::default(), 3).unwrap();
        population.record_presynaptic_spike(0, 0.).unwrap();
        population.record_postsynaptic_spike(0, 0.).unwrap();

        population.run(0.01, 500).unwrap();

        assert!(population.get(0).unwrap().total_potential() != -70.);
        assert_eq!(population.get(1), population.get(2));
        for index in 1..3 {
            let spine = population.get(index).unwrap();
            assert_eq!(spine.total_potential(), -70.);
            assert_eq!(spine.last_presynaptic_spike(), None);
            assert_eq!(spine.last_postsynaptic_spike(), None);
        }
    }

    #[test]
    fn test_invalid_step() {
        let mut population = SpinePopulation::from_parameters(SpineParameters::default(), 3).unwrap();

        assert_eq!(population.advance(0.), Err(SpineError::InvalidStep(0.)));
        assert!(population.iter().all(|spine| spine.current_time() == 0.));
    }
}
