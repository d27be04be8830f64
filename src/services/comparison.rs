use crate::models::{PageMetrics, Savings};

/// Compare the raw fetch against the cleaned extraction.
///
/// Pure function over the two records. Percentages are `None` when the
/// corresponding baseline value is zero; `multiplier` is 0 when the
/// extraction measured zero bytes.
pub fn compare(before: &PageMetrics, after: &PageMetrics) -> Savings {
    let pct = if before.cost > 0.0 {
        Some((before.cost - after.cost) / before.cost * 100.0)
    } else {
        None
    };

    let reduction = if before.size > 0 {
        Some((before.size as f64 - after.size as f64) / before.size as f64 * 100.0)
    } else {
        None
    };

    let multiplier = if after.size > 0 {
        before.size as f64 / after.size as f64
    } else {
        0.0
    };

    Savings {
        degenerate: pct.is_none() || reduction.is_none(),
        pct,
        reduction,
        multiplier,
    }
}
