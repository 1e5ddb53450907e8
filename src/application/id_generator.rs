// src/application/id_generator.rs
use crate::constants::ID_RANGE_END;
use crate::domain::Note;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Source of ids for newly created notes
pub trait IdGenerator {
    /// Produce an id for a note about to be appended to `existing`
    fn next_id(&mut self, existing: &[Note]) -> i64;
}

/// Draws ids uniformly from `[0, ID_RANGE_END)`, redrawing on collision.
///
/// When every id in the range is taken the generator falls back to
/// `max + 1`, so it always terminates with an unused id.
pub struct RandomIdGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomIdGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomIdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdGenerator for RandomIdGenerator<R> {
    fn next_id(&mut self, existing: &[Note]) -> i64 {
        let taken: HashSet<i64> = existing.iter().map(|n| n.id).collect();
        let taken_in_range = taken
            .iter()
            .filter(|id| (0..ID_RANGE_END).contains(*id))
            .count() as i64;

        if taken_in_range >= ID_RANGE_END {
            let id = next_after_max(existing);
            debug!(id, "Id range exhausted, falling back to max + 1");
            return id;
        }

        loop {
            let candidate = self.rng.gen_range(0..ID_RANGE_END);
            if !taken.contains(&candidate) {
                return candidate;
            }
            trace!(candidate, "Id collision, drawing again");
        }
    }
}

/// Hands out `max + 1` over the existing ids, starting at 1
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIdGenerator;

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, existing: &[Note]) -> i64 {
        next_after_max(existing)
    }
}

fn next_after_max(existing: &[Note]) -> i64 {
    existing.iter().map(|n| n.id).max().map_or(1, |max| max + 1)
}
