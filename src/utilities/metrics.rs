use crate::operators::tour::Tour;

pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

pub fn min(x: &[f64]) -> f64 {
    x.iter().copied().fold(std::f64::INFINITY, f64::min)
}

pub fn costs(population: &[Tour]) -> Vec<f64> {
    population.iter().map(|tour| tour.cost()).collect()
}

// ----- Unit tests ---- //
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_min() {
        let a = vec![4.0, 1.0, 3.0, 2.0];

        assert_eq!(mean(&a), 2.5);
        assert_eq!(min(&a), 1.0);
        assert_eq!(min(&[]), std::f64::INFINITY);
        assert!(mean(&[]).is_nan());
    }
}
