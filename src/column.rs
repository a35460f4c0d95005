use image::{ImageBuffer, Pixel};
use std::ops::{Deref, Range};

/// Bitmap stored column by column, so scanning a single column reads one contiguous slice.
#[derive(Clone)]
pub struct ColumnImage<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> ColumnImage<T>
where
    T: Copy,
{
    /// Creates a `ColumnImage` from an `image::ImageBuffer`. The `conversion` function maps every pixel to the value kept for it.
    pub fn from_image<P: 'static, C: Deref<Target = [P::Subpixel]>, CvFn>(
        image: &ImageBuffer<P, C>,
        conversion: CvFn,
    ) -> ColumnImage<T>
    where
        CvFn: Fn(&P) -> T,
        P: Pixel,
    {
        let (width, height) = (image.width() as usize, image.height() as usize);

        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            data.extend((0..height).map(|y| conversion(image.get_pixel(x as u32, y as u32))));
        }

        ColumnImage {
            data,
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Values of column `x`, top to bottom.
    ///
    /// Panics if `x` is outside the image.
    pub fn column(&self, x: usize) -> &[T] {
        &self.data[self.column_range(x)]
    }

    fn column_range(&self, x: usize) -> Range<usize> {
        assert!(x < self.width, "column {} out of bounds (width {})", x, self.width);
        let start = x * self.height;
        start..start + self.height
    }
}
