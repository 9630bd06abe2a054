//! Randomness source abstraction.
//!
//! Entropy is an external collaborator: the engine asks for one uniform
//! integer in a domain per resolution and validates the answer only for
//! range. Keeping the seam a trait lets tests script exact outcomes.

use rand::Rng;
use std::collections::VecDeque;

/// Supplies one unpredictable integer per outcome resolution.
pub trait RandomnessSource: Send {
    /// Draw a uniform integer in `[0, upper)`. `upper` is at least 2.
    fn draw(&mut self, upper: u32) -> u32;
}

/// Production source backed by the thread-local OS-seeded generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomness;

impl RandomnessSource for OsRandomness {
    fn draw(&mut self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Scripted source for deterministic tests.
///
/// Values are consumed front to back and the requested domain is ignored;
/// the sequence panics when exhausted so a test that draws more than it
/// scripted fails loudly.
#[derive(Clone, Debug, Default)]
pub struct FixedSequence {
    values: VecDeque<u32>,
}

impl FixedSequence {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomnessSource for FixedSequence {
    fn draw(&mut self, _upper: u32) -> u32 {
        self.values
            .pop_front()
            .expect("FixedSequence exhausted: test drew more values than scripted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_randomness_stays_in_range() {
        let mut source = OsRandomness;
        for _ in 0..200 {
            assert!(source.draw(2) < 2);
            assert!(source.draw(6) < 6);
            assert!(source.draw(37) < 37);
        }
    }

    #[test]
    fn test_fixed_sequence_is_ordered() {
        let mut source = FixedSequence::new([5, 0, 36]);
        assert_eq!(source.draw(37), 5);
        assert_eq!(source.draw(37), 0);
        assert_eq!(source.draw(37), 36);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_fixed_sequence_panics_when_exhausted() {
        let mut source = FixedSequence::new([1]);
        source.draw(2);
        source.draw(2);
    }
}
