//! Ordered criteria specification.

use super::engine::compute;
use super::types::{Criterion, CriterionValue, Direction, Ranking};

/// An ordered list of criteria, built incrementally and then handed to
/// the ranking engine.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::{Criteria, Direction};
///
/// struct Laptop {
///     price: u32,
///     battery_hours: f64,
/// }
///
/// let criteria = Criteria::new()
///     .with_criterion(|l: &Laptop| l.price, 0.6, Direction::Negative)
///     .with_criterion(|l: &Laptop| l.battery_hours, 0.4, Direction::Positive);
///
/// let laptops = vec![
///     Laptop { price: 900, battery_hours: 10.0 },
///     Laptop { price: 1400, battery_hours: 8.0 },
/// ];
///
/// let ranking = criteria.rank(&laptops);
/// assert_eq!(ranking[0].item.price, 900);
/// ```
pub struct Criteria<T> {
    criteria: Vec<Criterion<T>>,
}

impl<T> Criteria<T> {
    /// Creates an empty criteria list.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Appends a criterion.
    ///
    /// `extractor` may return any [`CriterionValue`]: integers, floats,
    /// or an ordinal enum implementing the trait. Weights are stored as
    /// given; zero or negative weights are not rejected here.
    pub fn with_criterion<F, V>(mut self, extractor: F, weight: f64, direction: Direction) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: CriterionValue,
    {
        self.criteria.push(Criterion::new(extractor, weight, direction));
        self
    }

    /// Appends a criterion with a display name.
    pub fn with_named_criterion<F, V>(
        mut self,
        name: impl Into<String>,
        extractor: F,
        weight: f64,
        direction: Direction,
    ) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: CriterionValue,
    {
        self.criteria.push(Criterion::new(extractor, weight, direction).with_name(name));
        self
    }

    /// Appends a prebuilt criterion without consuming the list.
    pub fn push(&mut self, criterion: Criterion<T>) {
        self.criteria.push(criterion);
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` if no criteria have been added.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Iterates over criteria in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Criterion<T>> {
        self.criteria.iter()
    }

    /// Returns the criteria as a slice.
    pub fn as_slice(&self) -> &[Criterion<T>] {
        &self.criteria
    }

    /// Returns display names in order; unnamed criteria yield `None`.
    pub fn names(&self) -> Vec<Option<&str>> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    /// Sum of the raw weights.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight()).sum()
    }

    /// Ranks `items` with the default engine settings.
    ///
    /// Equivalent to [`compute(self, items)`](compute).
    pub fn rank<'a>(&self, items: &'a [T]) -> Ranking<'a, T> {
        compute(self, items)
    }
}

impl<T> Default for Criteria<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Criterion<T>>> for Criteria<T> {
    fn from(criteria: Vec<Criterion<T>>) -> Self {
        Self { criteria }
    }
}

impl<'c, T> IntoIterator for &'c Criteria<T> {
    type Item = &'c Criterion<T>;
    type IntoIter = std::slice::Iter<'c, Criterion<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

impl<T> std::fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.criteria.iter()).finish()
    }
}
