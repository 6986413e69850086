//! Re-orders results streamed from worker threads
//!
//! Workers finish in any order; output must follow (day, part). Results that
//! arrive early wait in a sorted buffer until every key before them is in.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

/// Output position of a result
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            day: r.day,
            part: r.part,
        }
    }
}

/// Releases results in key order as soon as the prefix is complete
pub struct ResultAggregator {
    /// Keys still owed, smallest first
    expected: VecDeque<ResultKey>,
    /// Early arrivals
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Buffer `result` and return whatever is now releasable, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            let Some(result) = self.pending.remove(next) else {
                break;
            };
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Everything still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// True once every expected key has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            day,
            part,
            answer: Ok(format!("{day}.{part}")),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    fn keys(results: &[SolverResult]) -> Vec<(u8, u8)> {
        results.iter().map(|r| (r.day, r.part)).collect()
    }

    fn expect(pairs: &[(u8, u8)]) -> ResultAggregator {
        ResultAggregator::new(
            pairs
                .iter()
                .map(|&(day, part)| ResultKey { day, part })
                .collect(),
        )
    }

    #[test]
    fn test_day_two_waits_for_day_one() {
        let mut agg = expect(&[(2, 1), (1, 1), (1, 2), (2, 2)]);

        assert!(agg.add(result(2, 1)).is_empty());
        assert!(agg.add(result(2, 2)).is_empty());
        assert_eq!(keys(&agg.add(result(1, 1))), vec![(1, 1)]);
        assert_eq!(keys(&agg.add(result(1, 2))), vec![(1, 2), (2, 1), (2, 2)]);
        assert!(agg.is_complete());
        assert!(agg.drain().is_empty());
    }

    #[test]
    fn test_drain_releases_stragglers_in_order() {
        let mut agg = expect(&[(1, 1), (1, 2), (2, 1)]);

        agg.add(result(2, 1));
        agg.add(result(1, 2));

        assert_eq!(keys(&agg.drain()), vec![(1, 2), (2, 1)]);
        assert!(!agg.is_complete());
    }
}
