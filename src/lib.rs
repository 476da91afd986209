//! # Dendritic Spine
//!
//! `dendritic_spine` models the electrical and synaptic dynamics of a single
//! dendritic spine compartment. The membrane potential is driven by a leak current
//! and by AMPA and NMDA synaptic currents following presynaptic spikes, where
//! NMDA current is gated by a voltage dependent magnesium block and both currents
//! are scaled by a release probability that recovers after each presynaptic spike.
//! Postsynaptic spikes add a back-propagating potential that decays with a fast
//! and a slow mode.
//!
//! The membrane potential is integrated with a fixed step scheme, fourth order
//! Runge-Kutta by default. Spike detection, plasticity and recording are left to
//! the caller, which supplies spike times and drives the clock.
//!
//! ## Example Code
//!
//! ### Driving a spine with presynaptic and postsynaptic spikes
//!
//! ```rust
//! use dendritic_spine::{
//!     error::SpineError,
//!     spine::{Integrator, Spine, SpineParameters},
//! };
//!
//! fn main() -> Result<(), SpineError> {
//!     let parameters = SpineParameters {
//!         nmda_conductance: 1.2,
//!         integrator: Integrator::RungeKutta4,
//!         ..SpineParameters::default()
//!     };
//!     let mut spine = Spine::new(parameters)?;
//!
//!     let dt = 0.01;
//!     let mut voltages = vec![];
//!     for step in 0..5000 {
//!         let time = step as f64 * dt;
//!         // presynaptic spike every 20 ms, postsynaptic spike shortly after
//!         if step % 2000 == 0 {
//!             spine.record_presynaptic_spike(time)?;
//!         }
//!         if step % 2000 == 500 {
//!             spine.record_postsynaptic_spike(time)?;
//!         }
//!
//!         voltages.push(spine.advance(dt)?);
//!     }
//!
//!     assert!(voltages.iter().all(|voltage| voltage.is_finite()));
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Advancing many independent spines in parallel
//!
//! ```rust
//! use dendritic_spine::{
//!     error::SpineError,
//!     population::SpinePopulation,
//!     spine::SpineParameters,
//! };
//!
//! fn main() -> Result<(), SpineError> {
//!     let mut population = SpinePopulation::from_parameters(SpineParameters::default(), 8)?;
//!     population.record_presynaptic_spike(3, 0.)?;
//!
//!     let history = population.run(0.01, 100)?;
//!
//!     assert_eq!(history.len(), 101);
//!     assert_eq!(history[100].len(), 8);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod population;
pub mod spine;
