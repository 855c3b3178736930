use num_traits::AsPrimitive;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the averaging functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The sequence had no elements, so the mean would divide by zero.
    #[error("cannot average an empty sequence")]
    EmptyInput,
}

/// Compute the arithmetic mean of `numbers`.
///
/// Values are converted to `f64` and summed in encounter order, then divided by the count.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `numbers` is empty.
pub fn average<T>(numbers: &[T]) -> Result<f64, StatsError>
where
    T: AsPrimitive<f64>,
{
    let (sum, count) = sum_and_count(numbers)?;
    Ok(sum / count as f64)
}

fn sum_and_count<T>(numbers: &[T]) -> Result<(f64, usize), StatsError>
where
    T: AsPrimitive<f64>,
{
    if numbers.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sum = 0.0;
    for &val in numbers {
        sum += val.as_();
    }
    Ok((sum, numbers.len()))
}

/// Count, sum and mean of a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Sum of the values in encounter order.
    pub sum: f64,
    /// Arithmetic mean, equal to [`average`] of the same values.
    pub mean: f64,
}

impl Summary {
    pub fn from_values<T>(numbers: &[T]) -> Result<Self, StatsError>
    where
        T: AsPrimitive<f64>,
    {
        let (sum, count) = sum_and_count(numbers)?;
        log::debug!("summarized {count} values");
        Ok(Self {
            count,
            sum,
            mean: sum / count as f64,
        })
    }
}
