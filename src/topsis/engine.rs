//! TOPSIS ranking engine.
//!
//! Scores every item by its relative closeness to an ideal best point and
//! away from an ideal worst point in weighted, vector-normalized criterion
//! space, then sorts best first.

use super::config::{TieBreaker, TopsisConfig};
use super::criteria::Criteria;
use super::error::{Result, TopsisError};
use super::types::{Criterion, Direction, IdealPoint, Ranking, TopsisResult};
use tracing::{debug, trace, warn};

/// Weighted-normalized values, one column per criterion, plus the ideal
/// points derived from each column.
struct DecisionMatrix {
    columns: Vec<Vec<f64>>,
    ideals: Vec<IdealPoint>,
    n_items: usize,
}

impl DecisionMatrix {
    /// Reads every criterion's value for every item, in item order.
    fn extract<T>(criteria: &[Criterion<T>], items: &[T]) -> Vec<Vec<f64>> {
        criteria
            .iter()
            .map(|c| items.iter().map(|item| c.value(item)).collect())
            .collect()
    }

    /// Normalizes each column by its Euclidean norm, applies the
    /// sum-normalized weight, and derives the ideal points.
    ///
    /// Zero total weight and zero-norm columns are not guarded: they turn
    /// into non-finite values that flow through to the scores.
    fn weigh<T>(criteria: &[Criterion<T>], mut columns: Vec<Vec<f64>>, n_items: usize) -> Self {
        let sum_weight: f64 = criteria.iter().map(|c| c.weight()).sum();
        if sum_weight == 0.0 || !sum_weight.is_finite() {
            warn!(sum_weight, "criterion weights do not sum to a usable total");
        }

        let mut ideals = Vec::with_capacity(criteria.len());
        for (idx, (criterion, column)) in criteria.iter().zip(columns.iter_mut()).enumerate() {
            let norm = euclidean_norm(column);
            if norm == 0.0 && n_items > 0 {
                warn!(criterion = idx, "criterion has zero norm");
            }

            let factor = criterion.weight() / sum_weight;
            for v in column.iter_mut() {
                *v = *v / norm * factor;
            }

            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let ideal = match criterion.direction() {
                Direction::Positive => IdealPoint {
                    best: max,
                    worst: min,
                },
                Direction::Negative => IdealPoint {
                    best: min,
                    worst: max,
                },
            };
            trace!(
                criterion = idx,
                best = ideal.best,
                worst = ideal.worst,
                "ideal point"
            );
            ideals.push(ideal);
        }

        Self {
            columns,
            ideals,
            n_items,
        }
    }

    fn build<T>(criteria: &[Criterion<T>], items: &[T]) -> Self {
        Self::weigh(criteria, Self::extract(criteria, items), items.len())
    }

    /// Closeness coefficient of one item: `d_worst / (d_worst + d_best)`.
    ///
    /// An item that sits on both ideals scores `0 / 0 = NaN`.
    fn closeness(&self, item: usize) -> f64 {
        let mut d_best = 0.0;
        let mut d_worst = 0.0;
        for (column, ideal) in self.columns.iter().zip(&self.ideals) {
            let v = column[item];
            d_best += (v - ideal.best).powi(2);
            d_worst += (v - ideal.worst).powi(2);
        }
        let d_best = d_best.sqrt();
        let d_worst = d_worst.sqrt();
        d_worst / (d_worst + d_best)
    }

    fn scores(&self, parallel: bool) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if parallel {
                return (0..self.n_items)
                    .into_par_iter()
                    .map(|i| self.closeness(i))
                    .collect();
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        (0..self.n_items).map(|i| self.closeness(i)).collect()
    }
}

/// `sqrt(Σ v²)`, scaled by the largest magnitude so that squaring cannot
/// overflow or underflow for extreme but finite values.
fn euclidean_norm(column: &[f64]) -> f64 {
    let scale = column.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return column.iter().map(|v| v * v).sum::<f64>().sqrt();
    }
    scale * column.iter().map(|v| (v / scale).powi(2)).sum::<f64>().sqrt()
}

/// Sort key placing NaN scores after every real score.
fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

fn order<'a, T>(scores: Vec<f64>, items: &'a [T], tie_breaker: TieBreaker) -> Ranking<'a, T> {
    let mut ranking: Ranking<'a, T> = scores
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(index, (score, item))| TopsisResult { score, item, index })
        .collect();

    let by_score_desc = |a: &TopsisResult<'a, T>, b: &TopsisResult<'a, T>| {
        sort_key(b.score).total_cmp(&sort_key(a.score))
    };
    match tie_breaker {
        TieBreaker::PreserveOrder => ranking.sort_by(by_score_desc),
        TieBreaker::Unspecified => ranking.sort_unstable_by(by_score_desc),
    }
    ranking
}

/// Engine that ranks items against a set of [`Criteria`].
///
/// Holds only configuration; every call is independent and leaves its
/// inputs untouched.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::{Criteria, Direction, TieBreaker, TopsisConfig, TopsisEngine};
///
/// let criteria = Criteria::new()
///     .with_criterion(|x: &(f64, f64)| x.0, 1.0, Direction::Positive)
///     .with_criterion(|x: &(f64, f64)| x.1, 1.0, Direction::Negative);
///
/// let items = vec![(3.0, 1.0), (1.0, 3.0), (2.0, 2.0)];
/// let engine = TopsisEngine::new(
///     TopsisConfig::default().with_tie_breaker(TieBreaker::PreserveOrder),
/// );
///
/// let ranking = engine.rank(&criteria, &items);
/// assert_eq!(ranking[0].index, 0);
/// assert_eq!(ranking[2].index, 1);
///
/// let checked = engine.try_rank(&criteria, &items).unwrap();
/// assert_eq!(checked[0].index, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TopsisEngine {
    config: TopsisConfig,
}

impl TopsisEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: TopsisConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &TopsisConfig {
        &self.config
    }

    /// Ranks `items`, best first.
    ///
    /// Returns one result per item. No input checks are made: zero total
    /// weight, a criterion whose values are all zero, or a single item
    /// yield non-finite scores rather than errors. NaN scores sort last.
    pub fn rank<'a, T>(&self, criteria: &Criteria<T>, items: &'a [T]) -> Ranking<'a, T> {
        debug!(
            criteria = criteria.len(),
            items = items.len(),
            "ranking items"
        );
        let matrix = DecisionMatrix::build(criteria.as_slice(), items);
        let scores = matrix.scores(self.config.use_parallel(items.len()));
        order(scores, items, self.config.tie_breaker)
    }

    /// Ranks `items`, rejecting inputs that would produce undefined scores.
    ///
    /// On success the ranking is identical to [`rank`](Self::rank).
    ///
    /// # Errors
    ///
    /// - [`TopsisError::InvalidConfig`] if the configuration fails validation
    /// - [`TopsisError::EmptyCriteria`] / [`TopsisError::EmptyItems`]
    /// - [`TopsisError::InvalidWeight`] for a weight that is not finite and positive
    /// - [`TopsisError::NonFiniteValue`] for an extracted NaN or infinity
    /// - [`TopsisError::ZeroNorm`] for a criterion whose values are all zero
    /// - [`TopsisError::UndefinedScore`] for an item at both ideal points
    pub fn try_rank<'a, T>(
        &self,
        criteria: &Criteria<T>,
        items: &'a [T],
    ) -> Result<Ranking<'a, T>> {
        self.config.validate().map_err(TopsisError::InvalidConfig)?;
        if criteria.is_empty() {
            return Err(TopsisError::EmptyCriteria);
        }
        if items.is_empty() {
            return Err(TopsisError::EmptyItems);
        }
        for (idx, c) in criteria.iter().enumerate() {
            let weight = c.weight();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(TopsisError::InvalidWeight {
                    criterion: idx,
                    weight,
                });
            }
        }

        let criteria = criteria.as_slice();
        let columns = DecisionMatrix::extract(criteria, items);
        for (c, column) in columns.iter().enumerate() {
            if let Some((item, &value)) = column.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(TopsisError::NonFiniteValue {
                    criterion: c,
                    item,
                    value,
                });
            }
            if column.iter().all(|&v| v == 0.0) {
                return Err(TopsisError::ZeroNorm { criterion: c });
            }
        }

        debug!(
            criteria = criteria.len(),
            items = items.len(),
            "ranking items (checked)"
        );
        let matrix = DecisionMatrix::weigh(criteria, columns, items.len());
        let scores = matrix.scores(self.config.use_parallel(items.len()));
        if let Some(item) = scores.iter().position(|s| !s.is_finite()) {
            return Err(TopsisError::UndefinedScore { item });
        }
        Ok(order(scores, items, self.config.tie_breaker))
    }
}

/// Ranks `items` by TOPSIS closeness with the default configuration.
///
/// Results are sorted by descending score; equal scores keep their input
/// order. See [`TopsisEngine::rank`] for the handling of degenerate input.
pub fn compute<'a, T>(criteria: &Criteria<T>, items: &'a [T]) -> Ranking<'a, T> {
    TopsisEngine::default().rank(criteria, items)
}

/// Checked counterpart of [`compute`]. See [`TopsisEngine::try_rank`].
pub fn try_compute<'a, T>(criteria: &Criteria<T>, items: &'a [T]) -> Result<Ranking<'a, T>> {
    TopsisEngine::default().try_rank(criteria, items)
}

/// Returns the ideal best and worst weighted-normalized value of each
/// criterion, in criterion order.
pub fn ideal_points<T>(criteria: &Criteria<T>, items: &[T]) -> Vec<IdealPoint> {
    DecisionMatrix::build(criteria.as_slice(), items).ideals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topsis::CriterionValue;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Looks {
        BelowAverage = 2,
        Average,
        Good,
        Excellent,
    }

    impl CriterionValue for Looks {
        fn to_f64(self) -> f64 {
            self as i32 as f64
        }
    }

    #[derive(Debug, PartialEq)]
    struct Phone {
        name: &'static str,
        price: u32,
        storage: u32,
        camera: u32,
        looks: Looks,
    }

    fn phones() -> Vec<Phone> {
        vec![
            Phone {
                name: "Mobile 1",
                price: 250,
                storage: 16,
                camera: 12,
                looks: Looks::Excellent,
            },
            Phone {
                name: "Mobile 2",
                price: 200,
                storage: 16,
                camera: 8,
                looks: Looks::Average,
            },
            Phone {
                name: "Mobile 3",
                price: 300,
                storage: 32,
                camera: 16,
                looks: Looks::Good,
            },
            Phone {
                name: "Mobile 4",
                price: 275,
                storage: 32,
                camera: 8,
                looks: Looks::Good,
            },
            Phone {
                name: "Mobile 5",
                price: 225,
                storage: 16,
                camera: 16,
                looks: Looks::BelowAverage,
            },
        ]
    }

    fn phone_criteria(price: f64, rest: f64) -> Criteria<Phone> {
        Criteria::new()
            .with_criterion(|p: &Phone| p.price, price, Direction::Negative)
            .with_criterion(|p: &Phone| p.storage, rest, Direction::Positive)
            .with_criterion(|p: &Phone| p.camera, rest, Direction::Positive)
            .with_criterion(|p: &Phone| p.looks, rest, Direction::Positive)
    }

    fn by_first() -> Criteria<(i32, char)> {
        Criteria::new().with_criterion(|x: &(i32, char)| x.0, 1.0, Direction::Positive)
    }

    fn names<'a>(ranking: &Ranking<'a, Phone>) -> Vec<&'static str> {
        ranking.iter().map(|r| r.item.name).collect()
    }

    #[test]
    fn test_phones_equal_weights() {
        let items = phones();
        let ranking = compute(&phone_criteria(0.25, 0.25), &items);

        assert_eq!(
            names(&ranking),
            vec!["Mobile 3", "Mobile 4", "Mobile 1", "Mobile 5", "Mobile 2"]
        );
        assert!((ranking[0].score - 0.691_632_231).abs() < 1e-6);
        assert!((ranking[4].score - 0.308_367_769).abs() < 1e-6);

        let pos = |name: &str| ranking.iter().position(|r| r.item.name == name).unwrap();
        assert!(pos("Mobile 3") < pos("Mobile 2"));
    }

    #[test]
    fn test_phones_price_heavy() {
        let items = phones();
        let equal = compute(&phone_criteria(0.25, 0.25), &items);
        let heavy = compute(&phone_criteria(0.7, 0.1), &items);

        assert!(heavy[0].item.price <= 225);
        assert!(heavy[0].item.price < equal[0].item.price);
        assert_eq!(
            names(&heavy),
            vec!["Mobile 2", "Mobile 5", "Mobile 1", "Mobile 4", "Mobile 3"]
        );
        assert!((heavy[0].score - 0.722_149_363).abs() < 1e-6);
    }

    #[test]
    fn test_unnormalized_weights_match() {
        let items = phones();
        let quarter = compute(&phone_criteria(0.25, 0.25), &items);
        let ones = compute(&phone_criteria(1.0, 1.0), &items);

        for (a, b) in quarter.iter().zip(&ones) {
            assert_eq!(a.index, b.index);
            assert!((a.score - b.score).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Phone> = vec![];
        let ranking = compute(&phone_criteria(0.25, 0.25), &items);
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_single_item_score_is_nan() {
        let items = vec![phones().remove(0)];
        let ranking = compute(&phone_criteria(0.25, 0.25), &items);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].index, 0);
        assert!(ranking[0].score.is_nan());
    }

    #[test]
    fn test_zero_total_weight_is_not_guarded() {
        let items = phones();
        let ranking = compute(&phone_criteria(0.0, 0.0), &items);

        assert_eq!(ranking.len(), items.len());
        assert!(ranking.iter().all(|r| !r.score.is_finite()));
    }

    #[test]
    fn test_no_criteria_is_degenerate() {
        let items = phones();
        let ranking = compute(&Criteria::<Phone>::new(), &items);

        assert_eq!(ranking.len(), items.len());
        assert!(ranking.iter().all(|r| r.score.is_nan()));
        let idx: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_nan_scores_sort_last() {
        let scores = vec![f64::NAN, 0.2, 0.9, f64::NAN, 0.5];
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        let ranking = order(scores, &items, TieBreaker::PreserveOrder);

        let sorted: Vec<char> = ranking.iter().map(|r| *r.item).collect();
        assert_eq!(sorted, vec!['c', 'e', 'b', 'a', 'd']);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (1, 'e')];
        let ranking = compute(&by_first(), &items);

        let order: Vec<char> = ranking.iter().map(|r| r.item.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c', 'e']);
    }

    #[test]
    fn test_unspecified_ties_still_sorted() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (1, 'e')];
        let config = TopsisConfig::default().with_tie_breaker(TieBreaker::Unspecified);
        let engine = TopsisEngine::new(config);
        let ranking = engine.rank(&by_first(), &items);

        let top: Vec<i32> = ranking.iter().map(|r| r.item.0).collect();
        assert_eq!(top, vec![2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_inputs_untouched() {
        let items = phones();
        let criteria = phone_criteria(0.25, 0.25);
        let _ = compute(&criteria, &items);

        assert_eq!(items[0].name, "Mobile 1");
        assert_eq!(criteria.len(), 4);
        assert!((criteria.total_weight() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ideal_points_follow_direction() {
        let items = vec![(1.0, 1.0), (3.0, 3.0)];
        let criteria = Criteria::new()
            .with_criterion(|x: &(f64, f64)| x.0, 1.0, Direction::Positive)
            .with_criterion(|x: &(f64, f64)| x.1, 1.0, Direction::Negative);
        let ideals = ideal_points(&criteria, &items);

        // norm = sqrt(10), effective weight = 0.5
        let hi = 3.0 / 10f64.sqrt() * 0.5;
        let lo = 1.0 / 10f64.sqrt() * 0.5;
        assert_eq!(ideals.len(), 2);
        assert!((ideals[0].best - hi).abs() < 1e-12);
        assert!((ideals[0].worst - lo).abs() < 1e-12);
        assert!((ideals[1].best - lo).abs() < 1e-12);
        assert!((ideals[1].worst - hi).abs() < 1e-12);
    }

    #[test]
    fn test_engine_accessors() {
        let engine = TopsisEngine::new(TopsisConfig::throughput());
        assert_eq!(engine.config(), &TopsisConfig::throughput());
        assert_eq!(TopsisEngine::default().config(), &TopsisConfig::default());
    }

    // ---- Checked ranking ----

    #[test]
    fn test_try_compute_matches_compute() {
        let items = phones();
        let criteria = phone_criteria(0.25, 0.25);
        let checked = try_compute(&criteria, &items).unwrap();
        let unchecked = compute(&criteria, &items);

        assert_eq!(checked, unchecked);
    }

    #[test]
    fn test_try_compute_empty_criteria() {
        let items = phones();
        let err = try_compute(&Criteria::<Phone>::new(), &items).unwrap_err();
        assert_eq!(err, TopsisError::EmptyCriteria);
    }

    #[test]
    fn test_try_compute_empty_items() {
        let items: Vec<Phone> = vec![];
        let err = try_compute(&phone_criteria(0.25, 0.25), &items).unwrap_err();
        assert_eq!(err, TopsisError::EmptyItems);
    }

    #[test]
    fn test_try_compute_invalid_weight() {
        let items = phones();
        let criteria = Criteria::new()
            .with_criterion(|p: &Phone| p.price, 1.0, Direction::Negative)
            .with_criterion(|p: &Phone| p.storage, 0.0, Direction::Positive);
        let err = try_compute(&criteria, &items).unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidWeight {
                criterion: 1,
                weight: 0.0
            }
        );

        let mut criteria = Criteria::new();
        criteria.push(Criterion::new(|p: &Phone| p.price, f64::NAN, Direction::Negative));
        assert!(matches!(
            try_compute(&criteria, &items),
            Err(TopsisError::InvalidWeight { criterion: 0, .. })
        ));
    }

    #[test]
    fn test_try_compute_non_finite_value() {
        let items = vec![1.0, f64::INFINITY, 2.0];
        let criteria = Criteria::new().with_criterion(|x: &f64| *x, 1.0, Direction::Positive);
        let err = try_compute(&criteria, &items).unwrap_err();
        assert_eq!(
            err,
            TopsisError::NonFiniteValue {
                criterion: 0,
                item: 1,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_try_compute_zero_norm() {
        let items = vec![(1.0, 0.0), (2.0, 0.0)];
        let criteria = Criteria::new()
            .with_criterion(|x: &(f64, f64)| x.0, 1.0, Direction::Positive)
            .with_criterion(|x: &(f64, f64)| x.1, 1.0, Direction::Positive);
        let err = try_compute(&criteria, &items).unwrap_err();
        assert_eq!(err, TopsisError::ZeroNorm { criterion: 1 });
    }

    #[test]
    fn test_try_compute_large_values_keep_ranking() {
        let unit = vec![(1.0, 1.0), (2.0, 3.0), (3.0, 2.0)];
        let huge = vec![(1.0, 1e200), (2.0, 3e200), (3.0, 2e200)];
        let criteria = Criteria::new()
            .with_criterion(|x: &(f64, f64)| x.0, 1.0, Direction::Positive)
            .with_criterion(|x: &(f64, f64)| x.1, 1.0, Direction::Positive);

        let score_of = |ranking: &Ranking<'_, (f64, f64)>| {
            let mut scores = vec![0.0; ranking.len()];
            for r in ranking {
                scores[r.index] = r.score;
            }
            scores
        };
        let expected = score_of(&try_compute(&criteria, &unit).unwrap());
        let scores = score_of(&try_compute(&criteria, &huge).unwrap());

        assert_eq!(scores[0], 0.0);
        for (a, b) in scores.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!((scores[1] - scores[2]).abs() < 1e-12);
        assert!(scores[1] > 0.5);
    }

    #[test]
    fn test_tiny_values_are_not_zero_norm() {
        let unit = vec![1.0, 3.0, 2.0];
        let tiny = vec![1e-200, 3e-200, 2e-200];
        let criteria = Criteria::new().with_criterion(|x: &f64| *x, 1.0, Direction::Negative);

        let expected = try_compute(&criteria, &unit).unwrap();
        let ranking = try_compute(&criteria, &tiny).unwrap();

        let order: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 2, 1]);
        for (a, b) in ranking.iter().zip(&expected) {
            assert!((a.score - b.score).abs() < 1e-12);
        }
    }

    #[test]
    fn test_try_compute_single_item_undefined() {
        let items = vec![phones().remove(2)];
        let err = try_compute(&phone_criteria(0.25, 0.25), &items).unwrap_err();
        assert_eq!(err, TopsisError::UndefinedScore { item: 0 });
    }

    #[test]
    fn test_try_rank_invalid_config() {
        let items = phones();
        let engine = TopsisEngine::new(TopsisConfig::default().with_parallel_threshold(0));
        let err = engine
            .try_rank(&phone_criteria(0.25, 0.25), &items)
            .unwrap_err();
        assert!(matches!(err, TopsisError::InvalidConfig(_)));
        assert!(err.to_string().contains("parallel_threshold"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let items: Vec<(f64, f64, f64)> = (0..500)
            .map(|i| {
                let x = i as f64;
                (
                    1.0 + x % 17.0,
                    3.0 + (x * 7.0) % 23.0,
                    2.0 + (x * 3.0) % 11.0,
                )
            })
            .collect();
        let criteria = Criteria::new()
            .with_criterion(|x: &(f64, f64, f64)| x.0, 0.5, Direction::Positive)
            .with_criterion(|x: &(f64, f64, f64)| x.1, 0.3, Direction::Negative)
            .with_criterion(|x: &(f64, f64, f64)| x.2, 0.2, Direction::Positive);

        let seq = TopsisEngine::default().rank(&criteria, &items);
        let par = TopsisEngine::new(
            TopsisConfig::default()
                .with_parallel(true)
                .with_parallel_threshold(1),
        )
        .rank(&criteria, &items);

        assert_eq!(seq, par);
    }

    // ---- Properties ----

    const DIM: usize = 3;

    fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
        prop::collection::vec(prop::collection::vec(1.0f64..100.0, DIM), 2..40)
    }

    fn criteria_for(weights: &[f64], positive: &[bool]) -> Criteria<Vec<f64>> {
        let mut criteria = Criteria::new();
        for (c, (&w, &p)) in weights.iter().zip(positive).enumerate() {
            let direction = if p {
                Direction::Positive
            } else {
                Direction::Negative
            };
            criteria.push(Criterion::new(move |row: &Vec<f64>| row[c], w, direction));
        }
        criteria
    }

    fn scores_by_index(ranking: &Ranking<'_, Vec<f64>>) -> Vec<f64> {
        let mut scores = vec![0.0; ranking.len()];
        for r in ranking {
            scores[r.index] = r.score;
        }
        scores
    }

    proptest! {
        #[test]
        fn prop_ranking_is_permutation(
            items in matrix_strategy(),
            weights in prop::collection::vec(0.1f64..10.0, DIM),
            positive in prop::collection::vec(any::<bool>(), DIM),
        ) {
            let ranking = compute(&criteria_for(&weights, &positive), &items);
            prop_assert_eq!(ranking.len(), items.len());

            let mut idx: Vec<usize> = ranking.iter().map(|r| r.index).collect();
            idx.sort_unstable();
            prop_assert_eq!(idx, (0..items.len()).collect::<Vec<_>>());
            for r in &ranking {
                prop_assert!(std::ptr::eq(r.item, &items[r.index]));
            }
        }

        #[test]
        fn prop_scores_bounded_and_descending(
            items in matrix_strategy(),
            weights in prop::collection::vec(0.1f64..10.0, DIM),
            positive in prop::collection::vec(any::<bool>(), DIM),
        ) {
            let ranking = compute(&criteria_for(&weights, &positive), &items);
            for r in &ranking {
                prop_assert!(r.score >= 0.0 && r.score <= 1.0, "score {} out of range", r.score);
            }
            for w in ranking.windows(2) {
                prop_assert!(w[0].score >= w[1].score);
            }
        }

        #[test]
        fn prop_single_criterion_direction(
            values in prop::collection::vec(-50.0f64..50.0, 2..40),
            positive in any::<bool>(),
        ) {
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assume!(max > min);
            let direction = if positive { Direction::Positive } else { Direction::Negative };
            let criteria = Criteria::new().with_criterion(|x: &f64| *x, 1.0, direction);
            let ranking = compute(&criteria, &values);

            let expected = if positive { max } else { min };
            prop_assert_eq!(*ranking[0].item, expected);
        }

        #[test]
        fn prop_weight_scaling_invariant(
            items in matrix_strategy(),
            weights in prop::collection::vec(0.1f64..10.0, DIM),
            positive in prop::collection::vec(any::<bool>(), DIM),
            k in 0.01f64..100.0,
        ) {
            let scaled: Vec<f64> = weights.iter().map(|w| w * k).collect();
            let base = compute(&criteria_for(&weights, &positive), &items);
            let other = compute(&criteria_for(&scaled, &positive), &items);

            let a = scores_by_index(&base);
            let b = scores_by_index(&other);
            for (x, y) in a.iter().zip(&b) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }
    }
}
