use crate::{errors::Error, operators::tour::Tour};

/**
    Positions of the `k` cheapest tours, cheapest first.
    Each round scans the whole population for the cheapest tour not yet taken.
    The running minimum is only replaced on a strictly lower cost, so among
    equal costs the lowest position wins and no position is taken twice.
**/
pub fn smallest_indices(population: &[Tour], k: usize) -> Result<Vec<usize>, Error> {
    if k > population.len() {
        return Err(Error::SelectionExceedsPopulation {
            requested: k,
            available: population.len(),
        });
    }

    let mut taken = vec![false; population.len()];
    let mut smallest = Vec::with_capacity(k);

    for _ in 0..k {
        let mut index: Option<usize> = None;

        for (j, tour) in population.iter().enumerate() {
            if taken[j] {
                continue;
            }

            match index {
                Some(curr) if tour.cost() >= population[curr].cost() => {}
                _ => index = Some(j),
            }
        }

        // k <= len guarantees an untaken position remains
        if let Some(j) = index {
            taken[j] = true;
            smallest.push(j);
        }
    }

    Ok(smallest)
}

/// Moves the `k` cheapest tours out of the population, cheapest first.
pub fn get_smallest(population: Vec<Tour>, k: usize) -> Result<Vec<Tour>, Error> {
    let indices = smallest_indices(&population, k)?;

    let mut slots: Vec<Option<Tour>> = population.into_iter().map(Some).collect();

    Ok(indices
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect())
}

/// The cheapest tour, first-seen on ties.
pub fn best(population: &[Tour]) -> Option<&Tour> {
    smallest_indices(population, 1)
        .ok()
        .and_then(|indices| indices.first().map(|&i| &population[i]))
}
