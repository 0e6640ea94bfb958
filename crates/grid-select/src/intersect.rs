//! Intersection of sorted coordinate arrays onto a common covered range.

/// Index ranges that slice each sorted array to the range covered by all of
/// them.
///
/// The common range is `[max(per-array minima), min(per-array maxima)]`.
/// Each array is then binary-searched independently: the lower bound uses the
/// leftmost insertion point (first index whose value is >= the bound), the
/// upper bound uses the rightmost insertion point (first index whose value is
/// > the bound), giving half-open `[start, end)` pairs in input order.
///
/// An empty intersection is not an error: every array then yields a
/// zero-length pair. Inputs are assumed sorted non-decreasing; minima and
/// maxima are still found by scanning, so a two-element bound pair passed in
/// either order behaves the same.
pub fn common_range_indices<T>(arrays: &[&[T]]) -> Vec<(usize, usize)>
where
    T: PartialOrd + Copy,
{
    if arrays.is_empty() {
        return Vec::new();
    }
    if arrays.iter().any(|a| a.is_empty()) {
        return arrays.iter().map(|_| (0, 0)).collect();
    }

    // max of minima / min of maxima across all arrays
    let mut lower: Option<T> = None;
    let mut upper: Option<T> = None;
    for arr in arrays {
        let mut lo = arr[0];
        let mut hi = arr[0];
        for &v in arr.iter() {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        lower = Some(match lower {
            Some(l) if l > lo => l,
            _ => lo,
        });
        upper = Some(match upper {
            Some(u) if u < hi => u,
            _ => hi,
        });
    }
    let (Some(lower), Some(upper)) = (lower, upper) else {
        return Vec::new();
    };

    arrays
        .iter()
        .map(|arr| {
            let start = arr.partition_point(|x| *x < lower);
            let end = arr.partition_point(|x| *x <= upper);
            (start, end.max(start))
        })
        .collect()
}
