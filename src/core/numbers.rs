use crate::utils::error::{Result, TourError};

/// Squares of the even inputs, keeping only those below 50, in input order.
pub fn process_numbers(numbers: &[i64]) -> Vec<i64> {
    let squares = numbers
        .iter()
        .filter(|&&x| x % 2 == 0)
        // an overflowing square is far above the cut-off anyway
        .filter_map(|&x| x.checked_mul(x));

    squares.filter(|&square| square < 50).collect()
}

/// Left fold with multiplication. `None` for an empty slice.
pub fn product(numbers: &[i64]) -> Result<Option<i64>> {
    let multiply = |x: i64, y: i64| {
        x.checked_mul(y).ok_or_else(|| TourError::OverflowError {
            operation: format!("{} * {}", x, y),
        })
    };

    let mut iter = numbers.iter().copied();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    iter.try_fold(first, multiply).map(Some)
}

/// Splits into first element, everything in between, and last element.
/// Needs at least two elements.
pub fn split_ends<T>(items: &[T]) -> Option<(&T, &[T], &T)> {
    match items {
        [head, middle @ .., tail] => Some((head, middle, tail)),
        _ => None,
    }
}

pub fn length_notice<T>(items: &[T]) -> Option<String> {
    match items.len() {
        n @ 4.. => Some(format!("List has {} items", n)),
        _ => None,
    }
}
