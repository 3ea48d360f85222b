//! Zone normalization performed at commit time
//!
//! Zones of one category are sorted by their lower edge, overlapping zones
//! are merged, and the result is flattened into the `lower, upper, ...`
//! integer list stored in font info.

use super::zone::{BlueZone, ZoneCategory};

/// Sort and merge overlapping integer ranges
///
/// A range is merged into the previous one only when its lower bound is
/// strictly below the running upper bound, so zones that merely touch stay
/// separate.
pub fn merge_ranges(mut ranges: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    for range in ranges.iter_mut() {
        if range.0 > range.1 {
            *range = (range.1, range.0);
        }
    }
    ranges.sort_by_key(|range| range.0);

    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if low < last.1 => {
                if high > last.1 {
                    last.1 = high;
                }
            }
            _ => merged.push((low, high)),
        }
    }
    merged
}

/// Flatten ranges into `[low, high, low, high, ...]`
pub fn flatten(ranges: &[(i32, i32)]) -> Vec<i32> {
    ranges.iter().flat_map(|&(low, high)| [low, high]).collect()
}

/// Normalized, flattened values for every zone of `category`
pub fn category_values(zones: &[BlueZone], category: ZoneCategory) -> Vec<i32> {
    let ranges = zones
        .iter()
        .filter(|zone| zone.category == category)
        .map(BlueZone::range)
        .collect();
    flatten(&merge_ranges(ranges))
}

/// Build zones from a flat list of stored values
///
/// A trailing unpaired value is ignored.
pub fn zones_from_values(values: &[f64], category: ZoneCategory) -> Vec<BlueZone> {
    values
        .chunks_exact(2)
        .map(|pair| BlueZone::new(pair[0], pair[1], category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_ranges_merge() {
        let merged = merge_ranges(vec![(10, 20), (15, 25), (30, 40)]);
        assert_eq!(flatten(&merged), vec![10, 25, 30, 40]);
    }

    #[test]
    fn contained_range_is_absorbed() {
        assert_eq!(merge_ranges(vec![(0, 50), (10, 20)]), vec![(0, 50)]);
    }

    #[test]
    fn touching_ranges_stay_separate() {
        assert_eq!(
            merge_ranges(vec![(20, 30), (10, 20)]),
            vec![(10, 20), (20, 30)]
        );
    }

    #[test]
    fn reversed_ranges_are_ordered() {
        let flat = flatten(&merge_ranges(vec![(25, 5), (-10, -20)]));
        assert_eq!(flat, vec![-20, -10, 5, 25]);
        for pair in flat.chunks(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn normalized_input_is_unchanged() {
        let ranges = vec![(-15, 0), (500, 510), (700, 712)];
        let once = merge_ranges(ranges.clone());
        assert_eq!(once, ranges);
        assert_eq!(merge_ranges(once.clone()), once);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(merge_ranges(Vec::new()).is_empty());
        assert!(category_values(&[], ZoneCategory::Other).is_empty());
    }

    #[test]
    fn category_values_only_use_that_category() {
        let zones = vec![
            BlueZone::new(10.0, 20.0, ZoneCategory::Primary),
            BlueZone::new(-200.0, -180.0, ZoneCategory::Other),
            BlueZone::new(18.0, 12.0, ZoneCategory::Primary),
        ];
        assert_eq!(category_values(&zones, ZoneCategory::Primary), vec![10, 20]);
        assert_eq!(category_values(&zones, ZoneCategory::Other), vec![-200, -180]);
    }

    #[test]
    fn values_pair_into_zones() {
        let zones = zones_from_values(&[-10.0, 0.0, 500.0, 510.0, 99.0], ZoneCategory::Other);
        assert_eq!(zones.len(), 2);
        assert_eq!((zones[1].start, zones[1].end), (500.0, 510.0));
        assert!(zones.iter().all(|z| z.category == ZoneCategory::Other));
    }
}
