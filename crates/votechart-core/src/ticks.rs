//! Tick selection and labelling for linear axes.

/// Returns a "nice" tick spacing (1, 2 or 5 times a power of ten) yielding
/// roughly `count` intervals over `[start, stop]`.
///
/// Returns `None` for empty or non-finite extents and for a zero count.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let span = hi - lo;
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return None;
    }
    let m = count as f64;
    let mut step = 10f64.powf((span / m).log10().floor());
    let err = m / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Returns the multiples of [`tick_step`] that fall within the extent, in
/// ascending order.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, stop, count) else {
        return Vec::new();
    };
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    // Scale to an integer step so 3 * 0.1 comes out as 0.3.
    let k = integer_scale(step);
    let scaled_step = (step * k).round();
    (first..=last)
        .map(|idx| idx as f64 * scaled_step / k)
        .collect()
}

fn integer_scale(step: f64) -> f64 {
    let mut k = 1.0;
    while ((step * k).fract()).abs() > 1e-9 && k < 1e15 {
        k *= 10.0;
    }
    k
}

/// Decimal places needed to tell percent ticks spaced `step` apart.
pub fn percent_precision(step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) {
        return 0;
    }
    let decimals = -(step.log10() + 0.01).floor() - 2.0;
    decimals.clamp(0.0, 20.0) as usize
}

/// Formats a fraction as a percentage, e.g. `0.3` as `30%`.
pub fn format_percent(value: f64, precision: usize) -> String {
    let percent = value * 100.0;
    // Avoid rendering "-0%".
    let percent = if percent == 0.0 { 0.0 } else { percent };
    format!("{percent:.precision$}%")
}
