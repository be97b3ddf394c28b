use rand::Rng;

use crate::operators::{evaluation::Evaluation, mutation::Mutation, tour::Tour};

/// Produces `children_per_elite` mutated copies of every elite, in elite order.
///
/// Each child starts from its own copy of the elite's locations, so mutating
/// it can never reach the elite or a sibling.
pub fn make_children<M, E, R>(
    elites: &[Tour],
    children_per_elite: usize,
    mutation: &M,
    evaluation: &E,
    rng: &mut R,
) -> Vec<Tour>
where
    M: Mutation,
    E: Evaluation + ?Sized,
    R: Rng + ?Sized,
{
    let mut children = Vec::with_capacity(elites.len() * children_per_elite);

    for elite in elites {
        for _ in 0..children_per_elite {
            let mut child = elite.locations().to_vec();
            mutation.mutate(&mut child, rng);

            children.push(Tour::new(child, evaluation));
        }
    }

    children
}
