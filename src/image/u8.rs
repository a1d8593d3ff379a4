/// Borrowed 8-bit single-channel view with an explicit row stride.
///
/// Sub-views produced by [`ImageU8::crop`] share the parent's buffer and
/// stride, so slicing an edge map into timeframe regions never copies pixels.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Borrow the rectangle `[x1, x2) × [y1, y2)` as a view in local coordinates.
    ///
    /// Bounds are clamped to the view; an inverted or out-of-range rectangle
    /// yields a 0×0 view with no rows.
    pub fn crop(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> ImageU8<'a> {
        let x2 = x2.min(self.w);
        let y2 = y2.min(self.h);
        let x1 = x1.min(x2);
        let y1 = y1.min(y2);
        let (w, h) = (x2 - x1, y2 - y1);
        if w == 0 || h == 0 {
            return ImageU8 {
                w: 0,
                h: 0,
                stride: self.stride,
                data: &[],
            };
        }
        let offset = y1 * self.stride + x1;
        let end = offset + (h - 1) * self.stride + w;
        ImageU8 {
            w,
            h,
            stride: self.stride,
            data: &self.data[offset..end],
        }
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        (0..self.h)
            .map(|y| {
                let start = y * self.stride;
                self.data[start..start + self.w]
                    .iter()
                    .filter(|&&v| v != 0)
                    .count()
            })
            .sum()
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn crop_reads_local_coordinates() {
        let data: Vec<u8> = (0..24).collect();
        let view = ImageU8 {
            w: 6,
            h: 4,
            stride: 6,
            data: &data,
        };
        let sub = view.crop(2, 1, 5, 3);
        assert_eq!((sub.w, sub.h), (3, 2));
        assert_eq!(sub.get(0, 0), 8);
        assert_eq!(sub.row(1), &[14, 15, 16]);
        assert!(sub.as_slice().is_none());
    }

    #[test]
    fn crop_with_zero_width_is_empty() {
        let data = vec![255u8; 20];
        let view = ImageU8 {
            w: 5,
            h: 4,
            stride: 5,
            data: &data,
        };
        let sub = view.crop(3, 0, 3, 4);
        assert!(sub.is_empty());
        assert_eq!((sub.w, sub.h), (0, 0));
        assert_eq!(sub.count_nonzero(), 0);
        assert_eq!(sub.rows().count(), 0);
    }

    #[test]
    fn crop_with_zero_height_is_empty() {
        let data = vec![255u8; 20];
        let view = ImageU8 {
            w: 5,
            h: 4,
            stride: 5,
            data: &data,
        };
        let sub = view.crop(0, 2, 5, 2);
        assert_eq!((sub.w, sub.h), (0, 0));
        assert_eq!(sub.count_nonzero(), 0);
    }
}
