//! Converting copies between sample grids.
//!
//! The copier walks the target in its storage order and reads the source
//! at the same coordinate, so source and target can store different sample
//! kinds as long as their extents match.

use crate::{
    channel::{ChannelImage, CoordIterator, SampleSource},
    ValueRange,
};

/// Writes `convert(source[coord])` into every target element.
///
/// The target is visited exactly once per coordinate, in its storage
/// order; the source is read by positioned lookup at that coordinate.
/// Extents must match, a smaller source is a caller error.
pub fn copy_convert<S, T, Src, F>(
    source: &Src,
    target: &mut ChannelImage<T>,
    convert: F,
) -> Result<(), &'static str>
where
    Src: SampleSource<S>,
    T: Copy,
    F: Fn(S) -> T,
{
    let size = target.get_size();
    let data = target.get_slice_mut().ok_or("Target image is not writable")?;
    let cursor = CoordIterator::from_dims(size);

    for (slot, pos) in data.iter_mut().zip(cursor) {
        *slot = convert(source.get_data(pos.x, pos.y, pos.z));
    }

    Ok(())
}

/// Linear rescale of `value` from `range` onto the full 16bit range.
///
/// `range.low` maps to 0, `range.high` to 65535, values outside the
/// range saturate. Rounds to nearest. A degenerate range maps all
/// samples to 0.
pub fn rescale_to_u16(value: f32, range: ValueRange) -> u16 {
    let span = range.high - range.low;
    if span <= 0.0 {
        return 0;
    }
    let t = ((value - range.low) / span).clamp(0.0, 1.0);
    (t * 65535.0).round() as u16
}

/// Rescaled 16bit copy of a real valued channel.
/// Allocates fresh storage, the source is left untouched.
pub fn rescaled_copy(
    source: &ChannelImage<f32>,
    range: ValueRange,
) -> Result<ChannelImage<u16>, &'static str> {
    let mut target = ChannelImage::zeroed(source.get_size());
    copy_convert(source, &mut target, move |v| rescale_to_u16(v, range))?;
    Ok(target)
}

/// [`rescaled_copy`] over a whole channel list, same bounds for every channel.
pub fn rescaled_copies(
    sources: &[ChannelImage<f32>],
    range: ValueRange,
) -> Result<Vec<ChannelImage<u16>>, &'static str> {
    sources.iter().map(|s| rescaled_copy(s, range)).collect()
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;
    use crate::test_helpers::gradient_channel;

    #[test]
    fn every_coordinate_converted_once() {
        let size = vector![3, 2, 2];
        let source = gradient_channel(size);
        let mut target: ChannelImage<u16> = ChannelImage::zeroed(size);

        copy_convert(&source, &mut target, |v: u8| v as u16 * 3).unwrap();

        // distinct source samples, so equality also proves single visitation
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    assert_eq!(target.get_data(x, y, z), source.get_data(x, y, z) as u16 * 3);
                }
            }
        }
    }

    #[test]
    fn rescale_edges() {
        let range = ValueRange { low: -4.0, high: 4.0 };
        assert_eq!(rescale_to_u16(-4.0, range), 0);
        assert_eq!(rescale_to_u16(4.0, range), 65535);
        assert_eq!(rescale_to_u16(0.0, range), 32768);
    }

    #[test]
    fn rescale_saturates() {
        let range = ValueRange { low: 0.0, high: 1.0 };
        assert_eq!(rescale_to_u16(-100.0, range), 0);
        assert_eq!(rescale_to_u16(100.0, range), 65535);
    }

    #[test]
    fn rescale_monotonic() {
        let range = ValueRange { low: 0.0, high: 10.0 };
        let mut last = 0;
        for i in 0..=1000 {
            let v = -1.0 + 0.012 * i as f32;
            let scaled = rescale_to_u16(v, range);
            assert!(scaled >= last);
            last = scaled;
        }
    }

    #[test]
    fn rescale_degenerate_range() {
        let range = ValueRange { low: 1.0, high: 1.0 };
        assert_eq!(rescale_to_u16(1.0, range), 0);
        assert_eq!(rescale_to_u16(5.0, range), 0);
    }

    #[test]
    fn rescaled_copy_spans_range() {
        let size = vector![4, 4, 4];
        let low = 2.0;
        let high = 6.0;
        let voxels = size.x * size.y * size.z;
        let step = (high - low) / (voxels - 1) as f32;
        let data: Vec<f32> = (0..voxels).map(|i| low + step * i as f32).collect();
        let source = ChannelImage::from_vec(size, data).unwrap();

        let copy = rescaled_copy(&source, ValueRange { low, high }).unwrap();

        assert_eq!(copy.get_slice()[0], 0);
        assert_eq!(copy.get_slice()[voxels - 1], 65535);
    }
}
