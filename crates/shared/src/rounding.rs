/// Rounds half away from zero to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds half away from zero to a whole number.
pub fn round_whole(value: f64) -> f64 {
    value.round()
}

/// Integer percentage of `actual` against `target`, 0 when there is no target.
pub fn percentage_of(actual: f64, target: f64) -> i64 {
    if target <= 0.0 {
        return 0;
    }

    (100.0 * actual / target).round() as i64
}
