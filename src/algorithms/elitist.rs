use rand::Rng;

use crate::{
    errors::Error,
    operators::{
        evaluation::Evaluation, initialisation::InitPop, mutation::Mutation,
        reproduction::make_children, selection::get_smallest, tour::Tour,
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    pub pop_size: usize,
    pub num_elites: usize,
    pub children_per_elite: usize,
    pub num_generations: usize,
}

impl Parameters {
    pub fn validate(&self) -> Result<(), Error> {
        if self.pop_size == 0 {
            return Err(Error::InvalidParameter(
                "population size must be 1 or greater".to_string(),
            ));
        }

        if self.num_elites == 0 {
            return Err(Error::InvalidParameter(
                "number of elites must be 1 or greater".to_string(),
            ));
        }

        if self.num_elites > self.pop_size {
            return Err(Error::InvalidParameter(format!(
                "{} elites cannot be selected from a population of {}",
                self.num_elites, self.pop_size
            )));
        }

        // Every later generation holds the children plus the retained best
        let next_size = self.num_elites * self.children_per_elite + 1;
        if self.num_elites > next_size {
            return Err(Error::InvalidParameter(format!(
                "{} elites cannot be selected from a generation of {}",
                self.num_elites, next_size
            )));
        }

        Ok(())
    }
}

/**
    Runs exactly `num_generations` rounds of elitist evolution and returns the
    cheapest tour in the final population.

    Each round keeps the `num_elites` cheapest tours, breeds
    `children_per_elite` mutants from each, and carries the single best elite
    over unchanged. The observer sees the initial population as generation 0,
    then every new population.
**/
pub fn run<Init, Eval, Mutate, R>(
    init_pop: &Init,
    evaluate: &Eval,
    mutation: &Mutate,
    params: &Parameters,
    rng: &mut R,
    mut iteration_observer: impl FnMut(usize, &[Tour]),
) -> Result<Tour, Error>
where
    Init: InitPop,
    Eval: Evaluation,
    Mutate: Mutation,
    R: Rng + ?Sized,
{
    params.validate()?;

    let mut population = init_pop.apply(params.pop_size, rng);
    iteration_observer(0, &population);

    for generation in 1..=params.num_generations {
        let mut elites = get_smallest(population, params.num_elites)?;

        let mut children = make_children(
            &elites,
            params.children_per_elite,
            mutation,
            evaluate,
            rng,
        );

        // Elites come out cheapest first and validate keeps num_elites >= 1
        let best = elites.swap_remove(0);

        children.push(best);
        population = children;

        log::trace!(
            "Generation {} complete with {} tours",
            generation,
            population.len()
        );
        iteration_observer(generation, &population);
    }

    let mut winner = get_smallest(population, 1)?;
    Ok(winner.swap_remove(0))
}
