//! The ordered list of examples and how to run them

use tracing::debug;

use crate::config::Config;
use crate::data::{self, NUMBERS};
use crate::error::{Result, TourError};
use crate::matrix::Matrix;
use crate::snippets;
use crate::types::{Outcome, Step, Value};

pub const EXAMPLE_COUNT: u8 = 10;

/// Example ids and titles, in run order
pub const EXAMPLES: [(u8, &str); EXAMPLE_COUNT as usize] = [
    (1, "Filter numbers above a threshold"),
    (2, "Double the numbers above a threshold"),
    (3, "Names starting with a letter"),
    (4, "Names containing a substring"),
    (5, "Maximum of each matrix row"),
    (6, "Maximum of each sublist"),
    (7, "Names matching every condition"),
    (8, "Names matching either condition"),
    (9, "Flatten a list of lists"),
    (10, "Flatten and filter a list of lists"),
];

/// Everything an example needs beyond its literal inputs
#[derive(Debug, Clone)]
pub struct Tour {
    config: Config,
    seed: u64,
}

impl Tour {
    /// Create a tour; `seed` wins over the configured one, otherwise one is drawn from the OS
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let seed = seed
            .or(config.matrix.seed)
            .unwrap_or_else(rand::random);
        Self { config, seed }
    }

    /// Seed used for the random matrix
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run every example in order
    pub fn run_all(&self) -> Result<Vec<Outcome>> {
        EXAMPLES.iter().map(|&(id, _)| self.run(id)).collect()
    }

    /// Run a single example by id
    pub fn run(&self, id: u8) -> Result<Outcome> {
        let title = title(id)?;
        debug!("Running example {}: {}", id, title);

        let thresholds = &self.config.thresholds;
        let p = &self.config.predicates;
        let names = data::names();
        let lists = data::list_of_lists();

        let steps = match id {
            1 => vec![Step::new(
                format!("x > {}", thresholds.numbers),
                Value::Numbers(snippets::greater_than(&NUMBERS, thresholds.numbers)),
            )],
            2 => vec![Step::new(
                format!("x * 2 for x > {}", thresholds.numbers),
                Value::Numbers(snippets::doubled_greater_than(&NUMBERS, thresholds.numbers)),
            )],
            3 => vec![Step::new(
                format!("starts with {:?}", p.prefix),
                Value::Names(snippets::starting_with(&names, &p.prefix)),
            )],
            4 => vec![Step::new(
                format!("contains {:?}", p.needle),
                Value::Names(snippets::containing(&names, &p.needle)),
            )],
            5 => {
                let m = &self.config.matrix;
                let matrix = Matrix::seeded(m.rows, m.cols, m.upper, self.seed)?;
                let maxima = snippets::row_max(&matrix)?;
                vec![
                    Step::new(format!("matrix (seed {})", self.seed), Value::Matrix(matrix)),
                    Step::new("max of each row", Value::Numbers(maxima)),
                ]
            }
            6 => vec![Step::new(
                "max of each sublist",
                Value::Numbers(snippets::sublist_max(&lists)?),
            )],
            7 => vec![Step::new(
                format!("starts with {:?} and contains {:?} and contains ' '", p.prefix, p.also_contains),
                Value::Names(snippets::all_conditions(&names, &p.prefix, &p.also_contains)),
            )],
            8 => vec![Step::new(
                format!("starts with {:?} or ends with {:?}", p.prefix, p.suffix),
                Value::Names(snippets::any_condition(&names, &p.prefix, &p.suffix)),
            )],
            9 => vec![
                Step::new("flat_map", Value::Numbers(snippets::flatten(&lists))),
                Step::new("nested loops", Value::Numbers(snippets::flatten_with_loops(&lists))),
            ],
            10 => vec![Step::new(
                format!("flattened y > {}", thresholds.flatten),
                Value::Numbers(snippets::flatten_greater_than(&lists, thresholds.flatten)),
            )],
            _ => return Err(TourError::UnknownExample(id)),
        };

        Ok(Outcome { id, title, steps })
    }
}

/// Title of an example
pub fn title(id: u8) -> Result<&'static str> {
    EXAMPLES
        .iter()
        .find(|(n, _)| *n == id)
        .map(|(_, t)| *t)
        .ok_or(TourError::UnknownExample(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour() -> Tour {
        Tour::new(Config::default(), Some(11))
    }

    #[test]
    fn test_unknown_example() {
        assert_eq!(tour().run(0), Err(TourError::UnknownExample(0)));
        assert_eq!(tour().run(11), Err(TourError::UnknownExample(11)));
    }

    #[test]
    fn test_run_all_in_order() {
        let outcomes = tour().run_all().unwrap();
        let ids: Vec<u8> = outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, (1..=EXAMPLE_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_explicit_seed_beats_config() {
        let mut config = Config::default();
        config.matrix.seed = Some(1);
        assert_eq!(Tour::new(config.clone(), Some(2)).seed(), 2);
        assert_eq!(Tour::new(config, None).seed(), 1);
    }

    #[test]
    fn test_flatten_example_prints_both_forms() {
        let outcome = tour().run(9).unwrap();
        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.steps[0].value, outcome.steps[1].value);
    }

    #[test]
    fn test_bad_matrix_config_surfaces() {
        let mut config = Config::default();
        config.matrix.rows = 0;
        let err = Tour::new(config, Some(3)).run(5).unwrap_err();
        assert!(matches!(err, TourError::InvalidMatrix { rows: 0, .. }));
    }
}
