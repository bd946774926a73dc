use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rescale `value` into the [0, 1] interval against a fixed floor and cap.
///
/// Values below `min` or above `max` clamp to the ends rather than erroring,
/// so out-of-range business data degrades gracefully. A degenerate range
/// (`max <= min`) yields 0.
pub fn normalize(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if max <= min {
        return Decimal::ZERO;
    }
    ((value - min) / (max - min)).clamp(Decimal::ZERO, Decimal::ONE)
}

/// Scale a [0, 1] fraction onto the 0-100 score range, clamped at both ends.
/// Inputs above 1 (a boosted fraction, for example) cap at 100.
pub fn scale_to_100(fraction: Decimal) -> f64 {
    (fraction * dec!(100))
        .clamp(Decimal::ZERO, dec!(100))
        .to_f64()
        .unwrap_or(0.0)
}
