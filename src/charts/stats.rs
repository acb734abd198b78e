//! Small aggregation helpers shared by the chart builders.

/// Mean value per key, keys in first-seen order. Pairs whose value is
/// missing must be filtered out by the caller before grouping.
pub fn grouped_mean<K: PartialEq + Clone>(pairs: impl IntoIterator<Item = (K, f64)>) -> Vec<(K, f64)> {
    let mut keys: Vec<K> = Vec::new();
    let mut sums: Vec<(f64, u64)> = Vec::new();

    for (key, value) in pairs {
        match keys.iter().position(|k| *k == key) {
            Some(index) => {
                sums[index].0 += value;
                sums[index].1 += 1;
            }
            None => {
                keys.push(key);
                sums.push((value, 1));
            }
        }
    }

    keys.into_iter()
        .zip(sums)
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// The `n` largest groups by value, descending. The sort is stable, so
/// equal means keep their first-seen order.
pub fn top_n_desc<K>(mut groups: Vec<(K, f64)>, n: usize) -> Vec<(K, f64)> {
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    groups.truncate(n);
    groups
}

/// Ordinary least squares fit y = slope * x + intercept. Returns `None`
/// for fewer than two points or zero variance in x.
pub fn ols_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    for (x, y) in points {
        ss_xx += (x - mean_x) * (x - mean_x);
        ss_xy += (x - mean_x) * (y - mean_y);
    }

    if ss_xx == 0.0 {
        return None;
    }

    let slope = ss_xy / ss_xx;
    Some((slope, mean_y - slope * mean_x))
}
