#![feature(test)]
extern crate test;


mod tests {
    use test::Bencher;
    extern crate dendritic_spine;
    use dendritic_spine::{
        population::SpinePopulation,
        spine::{Integrator, Spine, SpineParameters},
    };

    fn spiking_spine(integrator: Integrator) -> Spine {
        let mut spine = Spine::new(SpineParameters { integrator, ..SpineParameters::default() })
            .expect("Default parameters are valid");
        spine.record_presynaptic_spike(0.).expect("Finite spike time");
        spine.record_postsynaptic_spike(0.).expect("Finite spike time");

        spine
    }

    #[bench]
    fn bench_runge_kutta(b: &mut Bencher) {
        let mut spine = spiking_spine(Integrator::RungeKutta4);

        b.iter(|| {
            spine.advance(0.01)
        })
    }

    #[bench]
    fn bench_euler(b: &mut Bencher) {
        let mut spine = spiking_spine(Integrator::Euler);

        b.iter(|| {
            spine.advance(0.01)
        })
    }

    #[bench]
    fn bench_population(b: &mut Bencher) {
        let mut population = SpinePopulation::new(vec![spiking_spine(Integrator::RungeKutta4); 1000]);

        b.iter(|| {
            population.advance(0.01)
        })
    }
}
