//! Lock-free serial numbers
//!
//! A single `fetch_add` hands every caller a distinct value without a mutex.
//! Values are unique, but the order in which callers observe them says nothing
//! about the order in which they asked.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SERIAL_NUMBER: SerialNumberGenerator = SerialNumberGenerator::new();

/// Issues the next process-wide serial number, starting at 0.
pub fn generate_serial_number() -> u64 {
    NEXT_SERIAL_NUMBER.issue()
}

#[derive(Debug, Default)]
pub struct SerialNumberGenerator {
    next: AtomicU64,
}

impl SerialNumberGenerator {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the current value and bumps the counter in one atomic step.
    /// Wraps to 0 after `u64::MAX`.
    pub fn issue(&self) -> u64 {
        // Relaxed: only atomicity of the increment matters here
        let serial = self.next.fetch_add(1, Ordering::Relaxed);
        log::trace!("issued serial number {}", serial);
        serial
    }

    /// The value the next `issue` would return, without consuming it.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn issue_concurrently(generator: &SerialNumberGenerator, callers: usize) -> Vec<u64> {
        let issued = Mutex::new(Vec::with_capacity(callers));

        crossbeam::scope(|s| {
            for _ in 0..callers {
                s.spawn(|_| {
                    let serial = generator.issue();
                    issued.lock().unwrap().push(serial);
                });
            }
        })
        .unwrap();

        issued.into_inner().unwrap()
    }

    #[test]
    fn test_sequential_issue() {
        let generator = SerialNumberGenerator::new();
        assert_eq!(generator.issue(), 0);
        assert_eq!(generator.issue(), 1);
        assert_eq!(generator.issue(), 2);
    }

    #[test]
    fn test_concurrent_issue_is_unique() {
        let generator = SerialNumberGenerator::new();
        let issued = issue_concurrently(&generator, 200);

        let unique: HashSet<u64> = issued.iter().copied().collect();
        assert_eq!(unique.len(), issued.len());
    }

    #[test]
    fn test_concurrent_issue_covers_exact_range() {
        let generator = SerialNumberGenerator::new();
        let mut issued = issue_concurrently(&generator, 100);

        issued.sort_unstable();
        assert_eq!(issued, (0..100).collect::<Vec<u64>>());
    }

    #[test]
    fn test_thousand_callers_complete() {
        let generator = SerialNumberGenerator::new();
        let issued = issue_concurrently(&generator, 1000);

        assert_eq!(issued.len(), 1000);
        let unique: HashSet<u64> = issued.into_iter().collect();
        assert_eq!(unique.len(), 1000);
        assert_eq!(generator.peek(), 1000);
    }

    #[test]
    fn test_parallel_iterator_callers() {
        let generator = SerialNumberGenerator::new();
        let issued: HashSet<u64> = (0..10_000).into_par_iter().map(|_| generator.issue()).collect();

        assert_eq!(issued.len(), 10_000);
        assert_eq!(issued.iter().max(), Some(&9_999));
    }

    #[test]
    fn test_overflow_wraps() {
        let generator = SerialNumberGenerator::starting_at(u64::MAX);
        assert_eq!(generator.issue(), u64::MAX);
        assert_eq!(generator.issue(), 0);
        assert_eq!(generator.issue(), 1);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let generator = SerialNumberGenerator::starting_at(41);
        assert_eq!(generator.peek(), 41);
        assert_eq!(generator.peek(), 41);
        assert_eq!(generator.issue(), 41);
        assert_eq!(generator.peek(), 42);
    }
}
