//! Rank assignment with tie handling
//!
//! Standalone take on `rankdata`: ranks are 1-based, ties are exact equality.

use std::cmp::Ordering;

/// How tied values share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RankMethod {
    /// Mean of the ranks the tie group jointly occupies (may be fractional)
    #[default]
    Average,
    /// Lowest (best) rank in the tie group
    Min,
}

/// Which end of the value range gets rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// Largest value is rank 1
    #[default]
    Descending,
    /// Smallest value is rank 1
    Ascending,
}

/// Ranks in input order, typed by method.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranks {
    Average(Vec<f64>),
    Min(Vec<usize>),
}

impl Ranks {
    pub fn len(&self) -> usize {
        match self {
            Ranks::Average(r) => r.len(),
            Ranks::Min(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All ranks as floats, whatever the method.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Ranks::Average(r) => r.clone(),
            Ranks::Min(r) => r.iter().map(|&rank| rank as f64).collect(),
        }
    }
}

/// Rank `values`, returning one rank per input in input order.
///
/// Values incomparable with themselves (NaN) rank after every other value
/// in either order and never tie with each other.
///
/// ```
/// use pltform::{rankdata, RankMethod, RankOrder, Ranks};
///
/// let ranks = rankdata(&[10, 20, 20, 5], RankMethod::Average, RankOrder::Descending);
/// assert_eq!(ranks, Ranks::Average(vec![3.0, 1.5, 1.5, 4.0]));
/// ```
pub fn rankdata<T: PartialOrd>(values: &[T], method: RankMethod, order: RankOrder) -> Ranks {
    let n = values.len();

    // stable sort of indices by value, incomparable values last
    let mut sorted: Vec<usize> = (0..n).collect();
    sorted.sort_by(|&a, &b| {
        let (a, b) = (&values[a], &values[b]);
        match (is_incomparable(a), is_incomparable(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
                match order {
                    RankOrder::Descending => ord.reverse(),
                    RankOrder::Ascending => ord,
                }
            }
        }
    });

    // tie groups as (start, end) over sorted positions; group holds ranks start+1 ..= end
    let mut groups = Vec::new();
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[sorted[end]] == values[sorted[start]] {
            end += 1;
        }
        groups.push((start, end));
        start = end;
    }

    match method {
        RankMethod::Min => {
            let mut ranks = vec![0; n];
            for &(start, end) in &groups {
                for &idx in &sorted[start..end] {
                    ranks[idx] = start + 1;
                }
            }
            Ranks::Min(ranks)
        }
        RankMethod::Average => {
            let mut ranks = vec![0.0; n];
            for &(start, end) in &groups {
                let rank = (start + 1 + end) as f64 / 2.0;
                for &idx in &sorted[start..end] {
                    ranks[idx] = rank;
                }
            }
            Ranks::Average(ranks)
        }
    }
}

fn is_incomparable<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}
