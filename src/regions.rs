//! Fixed six-way horizontal partition of a chart into timeframe slices.
//!
//! Timeframes are purely positional: the leftmost sixth of the image is
//! labelled "5 minutes", the rightmost "1 day". Boundaries use integer
//! division of the width at 1/6, 1/3, 1/2, 2/3 and 5/6, and every slice spans
//! the full height, so the slices tile `[0, width) × [0, height)` exactly.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timeframe label attached to a horizontal slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5 minutes")]
    FiveMinutes,
    #[serde(rename = "10 minutes")]
    TenMinutes,
    #[serde(rename = "20 minutes")]
    TwentyMinutes,
    #[serde(rename = "40 minutes")]
    FortyMinutes,
    #[serde(rename = "1 hour")]
    OneHour,
    #[serde(rename = "1 day")]
    OneDay,
}

impl Timeframe {
    /// All timeframes in canonical (left-to-right) order.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::FiveMinutes,
        Timeframe::TenMinutes,
        Timeframe::TwentyMinutes,
        Timeframe::FortyMinutes,
        Timeframe::OneHour,
        Timeframe::OneDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::FiveMinutes => "5 minutes",
            Timeframe::TenMinutes => "10 minutes",
            Timeframe::TwentyMinutes => "20 minutes",
            Timeframe::FortyMinutes => "40 minutes",
            Timeframe::OneHour => "1 hour",
            Timeframe::OneDay => "1 day",
        }
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis-aligned rectangle `[x1, x2) × [y1, y2)` in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Region {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> usize {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> usize {
        self.y2.saturating_sub(self.y1)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// The six timeframe slices of a `width × height` image, in canonical order.
///
/// For `width < 6` some slices are empty (`x1 == x2`); callers treat them as
/// slices without structure.
pub fn timeframe_regions(width: usize, height: usize) -> [(Timeframe, Region); 6] {
    let bounds = [
        0,
        width / 6,
        width / 3,
        width / 2,
        2 * width / 3,
        5 * width / 6,
        width,
    ];
    Timeframe::ALL.map(|tf| {
        let i = tf.index();
        (tf, Region::new(bounds[i], 0, bounds[i + 1], height))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_pixel_image_splits_in_pairs() {
        let regions = timeframe_regions(12, 10);
        let xs: Vec<(usize, usize)> = regions.iter().map(|(_, r)| (r.x1, r.x2)).collect();
        assert_eq!(xs, vec![(0, 2), (2, 4), (4, 6), (6, 8), (8, 10), (10, 12)]);
        assert!(regions.iter().all(|(_, r)| r.y1 == 0 && r.y2 == 10));
        let labels: Vec<&str> = regions.iter().map(|(tf, _)| tf.label()).collect();
        assert_eq!(
            labels,
            vec!["5 minutes", "10 minutes", "20 minutes", "40 minutes", "1 hour", "1 day"]
        );
    }

    #[test]
    fn slices_tile_the_width_exactly() {
        for width in 6..=257 {
            let regions = timeframe_regions(width, 7);
            let mut covered = vec![0u8; width];
            for (_, r) in &regions {
                assert!(r.x1 < r.x2, "width {width}: empty slice {r:?}");
                for c in &mut covered[r.x1..r.x2] {
                    *c += 1;
                }
            }
            assert!(covered.iter().all(|&c| c == 1), "width {width}");
            for pair in regions.windows(2) {
                assert_eq!(pair[0].1.x2, pair[1].1.x1);
            }
        }
    }

    #[test]
    fn narrow_images_produce_empty_slices() {
        let regions = timeframe_regions(4, 3);
        let empty = regions.iter().filter(|(_, r)| r.is_empty()).count();
        assert!(empty > 0);
        assert_eq!(regions[5].1.x2, 4);
        assert_eq!(regions[0].1.x1, 0);
    }

    #[test]
    fn timeframes_serialize_as_labels() {
        let json = serde_json::to_string(&Timeframe::OneHour).unwrap();
        assert_eq!(json, "\"1 hour\"");
    }
}
