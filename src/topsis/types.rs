//! Core types for TOPSIS ranking.
//!
//! A [`Criterion`] pairs a value extractor with a weight and a
//! [`Direction`]. Extracted values go through [`CriterionValue`], the one
//! conversion point from typed item fields to `f64`.

/// Whether larger or smaller raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher values are better (benefit criterion).
    Positive,

    /// Lower values are better (cost criterion).
    Negative,
}

/// Conversion from a typed criterion source into a real number.
///
/// Built-in implementations cover all primitive integers, floats and
/// `bool`. Ordinal enumerations implement it by returning their
/// discriminant:
///
/// ```
/// use u_topsis::topsis::CriterionValue;
///
/// #[derive(Clone, Copy)]
/// enum Looks {
///     Terrible = 1,
///     Average = 3,
///     Excellent = 5,
/// }
///
/// impl CriterionValue for Looks {
///     fn to_f64(self) -> f64 {
///         self as i32 as f64
///     }
/// }
///
/// assert_eq!(Looks::Average.to_f64(), 3.0);
/// ```
pub trait CriterionValue {
    /// Converts the value to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_criterion_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl CriterionValue for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_criterion_value!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CriterionValue for bool {
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

type Extractor<T> = Box<dyn Fn(&T) -> f64 + Send + Sync>;

/// A single evaluation axis: how to read a value from an item, how much
/// it counts, and which direction is preferred.
///
/// Weights are relative. They are normalized by their sum at ranking time,
/// so `0.25 / 0.25` and `1.0 / 1.0` describe the same preference. No
/// validation happens here; see [`try_compute`](super::try_compute) for
/// the checked path.
pub struct Criterion<T> {
    name: Option<String>,
    extractor: Extractor<T>,
    weight: f64,
    direction: Direction,
}

impl<T> Criterion<T> {
    /// Creates a criterion from a value extractor.
    pub fn new<F, V>(extractor: F, weight: f64, direction: Direction) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: CriterionValue,
    {
        Self {
            name: None,
            extractor: Box::new(move |item| extractor(item).to_f64()),
            weight,
            direction,
        }
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the raw (caller-supplied) weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the preferred direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Extracts this criterion's value from an item.
    #[inline]
    pub fn value(&self, item: &T) -> f64 {
        (self.extractor)(item)
    }
}

impl<T> std::fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Criterion")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// One scored entry of a ranking.
///
/// `score` is the closeness coefficient: `1.0` coincides with the ideal
/// best point, `0.0` with the ideal worst. `index` is the item's position
/// in the slice passed to the engine.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopsisResult<'a, T> {
    /// Closeness coefficient in `[0, 1]` for regular inputs.
    pub score: f64,

    /// The ranked item.
    pub item: &'a T,

    /// Position of `item` in the input slice.
    pub index: usize,
}

impl<T> Clone for TopsisResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TopsisResult<'_, T> {}

/// A ranking, best first.
pub type Ranking<'a, T> = Vec<TopsisResult<'a, T>>;

/// Ideal best and worst weighted-normalized values for one criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdealPoint {
    /// Best attainable value in the preferred direction.
    pub best: f64,

    /// Worst attainable value in the preferred direction.
    pub worst: f64,
}
