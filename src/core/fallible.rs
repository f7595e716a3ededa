use crate::utils::error::{Result, TourError};
use crate::utils::transcript::Transcript;

pub fn divide(numerator: i64, denominator: i64) -> Result<i64> {
    if denominator == 0 {
        return Err(TourError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| TourError::OverflowError {
            operation: format!("{} / {}", numerator, denominator),
        })
}

/// Divides, swallowing only division by zero.
///
/// A caught error is reported as `Caught an error: ...`. Either way
/// `This always executes` is written last, before any other error is
/// handed back.
pub fn guarded_divide(numerator: i64, denominator: i64, transcript: &Transcript) -> Result<Option<i64>> {
    let outcome = match divide(numerator, denominator) {
        Ok(quotient) => Ok(Some(quotient)),
        Err(e @ TourError::DivisionByZero) => {
            tracing::debug!("Recovered from {:?}", e);
            transcript.line(format!("Caught an error: {}", e));
            Ok(None)
        }
        Err(e) => Err(e),
    };

    transcript.line("This always executes");
    outcome
}

pub fn demonstrate_error(transcript: &Transcript) -> Result<Option<i64>> {
    guarded_divide(10, 0, transcript)
}
