use crate::Field;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Game of Life driver: two equally shaped buffers that swap roles on every step.
pub struct Simulation {
    curr: Field,
    next: Field,
    width: usize,
    height: usize,
    generation: u64,
}

impl Simulation {
    /// Creates a simulation seeded from entropy.
    pub fn new(width: usize, height: usize) -> Self {
        Self::random(width, height, None)
    }

    /// Creates a simulation with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>) -> Self {
        use rand::SeedableRng;

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        Self::with_rng(width, height, &mut rng)
    }

    /// Creates a simulation seeded by `rng`.
    ///
    /// Picks `width * height / 4` cells with replacement and marks them alive,
    /// so repeated picks leave the initial density below a quarter.
    pub fn with_rng<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut field = Field::blank(width, height);
        for _ in 0..width * height / 4 {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            field.set(x, y, true);
        }
        let result = Self::from_field(field);
        debug!(
            width,
            height,
            population = result.population(),
            "seeded simulation"
        );
        result
    }

    /// Starts from the given generation instead of a random one.
    pub fn from_field(field: Field) -> Self {
        let (width, height) = field.size();
        Self {
            next: Field::blank(width, height),
            curr: field,
            width,
            height,
            generation: 0,
        }
    }

    /// [`(width, height)`] of the grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The current generation.
    pub fn field(&self) -> &Field {
        &self.curr
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.curr.population()
    }

    /// Advances the simulation by one generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.next.set(x, y, self.curr.next(x as i64, y as i64));
            }
        }
        std::mem::swap(&mut self.curr, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
    }

    /// Text snapshot of the current generation: `height` lines of `width`
    /// characters, `'X'` for alive and `' '` for dead, each ended by `'\n'`.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.curr.alive(x as i64, y as i64) {
                    'X'
                } else {
                    ' '
                };
                result.push(c);
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Simulation;
    use crate::Field;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    const SEED: u64 = 42;

    #[test]
    fn render_shape() {
        let life = Simulation::random(40, 15, Some(SEED));
        let text = life.render();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|l| l.len() == 40));
        assert!(text.chars().all(|c| matches!(c, 'X' | ' ' | '\n')));
        assert!(text.ends_with('\n'));
        assert_eq!(text, life.to_string());
    }

    #[test]
    fn same_seed_same_history() {
        let mut a = Simulation::random(20, 10, Some(SEED));
        let mut b = Simulation::random(20, 10, Some(SEED));
        for _ in 0..10 {
            assert_eq!(a.render(), b.render());
            a.step();
            b.step();
        }
    }

    #[test]
    fn repeated_picks_collapse() {
        // every draw lands on (0, 0)
        let mut rng = StepRng::new(0, 0);
        let life = Simulation::with_rng(8, 8, &mut rng);
        assert_eq!(life.population(), 1);
        assert!(life.field().alive(0, 0));
    }

    #[test]
    fn step_keeps_dimensions_and_counts_generations() {
        let mut life = Simulation::random(13, 7, Some(SEED));
        for i in 1..=5 {
            life.step();
            assert_eq!(life.size(), (13, 7));
            assert_eq!(life.field().size(), (13, 7));
            assert_eq!(life.generation(), i);
        }
    }

    #[test]
    fn step_matches_rule_on_previous_generation() {
        let mut life = Simulation::random(16, 9, Some(SEED));
        for _ in 0..4 {
            let prev = life.field().clone();
            life.step();
            for y in 0..9 {
                for x in 0..16 {
                    assert_eq!(life.field().alive(x, y), prev.next(x, y));
                }
            }
        }
    }

    #[test]
    fn from_field_keeps_cells() {
        let mut field = Field::blank(3, 2);
        field.set(2, 1, true);
        let life = Simulation::from_field(field);
        assert_eq!(life.render(), "   \n  X\n");
        assert_eq!(life.generation(), 0);
    }

    proptest! {
        #[test]
        fn initial_density_is_at_most_a_quarter(
            w in 1usize..40,
            h in 1usize..40,
            seed in any::<u64>(),
        ) {
            let life = Simulation::random(w, h, Some(seed));
            prop_assert!(life.population() <= w * h / 4);
        }
    }
}
