//! Fixed step schemes for advancing the membrane potential

/// Fixed step scheme used to integrate `dV/dt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Forward Euler, one derivative evaluation per step
    Euler,
    /// Classical fourth order Runge-Kutta with 1:2:2:1 weighting
    #[default]
    RungeKutta4,
    /// Fourth order Runge-Kutta slopes summed with equal weights and divided by 6,
    /// reproduces traces of models that averaged the slopes this way
    UniformRungeKutta4,
}

fn runge_kutta_slopes<F: Fn(f64, f64) -> f64>(
    derivative: F,
    voltage: f64,
    time: f64,
    dt: f64,
) -> (f64, f64, f64, f64) {
    let k1 = dt * derivative(voltage, time);
    let k2 = dt * derivative(voltage + k1 / 2., time + dt / 2.);
    let k3 = dt * derivative(voltage + k2 / 2., time + dt / 2.);
    let k4 = dt * derivative(voltage + k3, time + dt);

    (k1, k2, k3, k4)
}

impl Integrator {
    /// Returns the change in voltage over one step of size `dt` starting from
    /// `(voltage, time)`, `derivative` should return `dV/dt` at a given voltage and time
    pub fn step<F: Fn(f64, f64) -> f64>(
        &self,
        derivative: F,
        voltage: f64,
        time: f64,
        dt: f64,
    ) -> f64 {
        match self {
            Integrator::Euler => dt * derivative(voltage, time),
            Integrator::RungeKutta4 => {
                let (k1, k2, k3, k4) = runge_kutta_slopes(derivative, voltage, time, dt);

                (k1 + 2. * k2 + 2. * k3 + k4) / 6.
            }
            Integrator::UniformRungeKutta4 => {
                let (k1, k2, k3, k4) = runge_kutta_slopes(derivative, voltage, time, dt);

                (k1 + k2 + k3 + k4) / 6.
            }
        }
    }
}
