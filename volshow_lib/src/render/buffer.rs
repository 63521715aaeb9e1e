use byteorder::{ByteOrder, LittleEndian};
use nalgebra::Vector3;

/// Sample kinds the render window accepts without conversion.
///
/// Real valued samples are not uploadable; they go through the 16bit
/// rescale first.
pub trait VolumeSample: Copy {
    const BYTES_PER_SAMPLE: usize;

    /// Serialize in sample order, little-endian.
    /// `bytes` must hold exactly `samples.len() * BYTES_PER_SAMPLE`.
    fn write_bytes(samples: &[Self], bytes: &mut [u8]);
}

impl VolumeSample for u8 {
    const BYTES_PER_SAMPLE: usize = 1;

    fn write_bytes(samples: &[Self], bytes: &mut [u8]) {
        bytes.copy_from_slice(samples);
    }
}

impl VolumeSample for u16 {
    const BYTES_PER_SAMPLE: usize = 2;

    fn write_bytes(samples: &[Self], bytes: &mut [u8]) {
        LittleEndian::write_u16_into(samples, bytes);
    }
}

/// One channel worth of renderer-native bytes, paired with its extents.
pub struct VolumeBuffer {
    pub bytes: Vec<u8>,
    pub size: Vector3<usize>,
}

impl VolumeBuffer {
    pub fn from_samples<S>(samples: &[S], size: Vector3<usize>) -> Result<VolumeBuffer, &'static str>
    where
        S: VolumeSample,
    {
        if samples.len() != size.x * size.y * size.z {
            return Err("Sample count does not match extents");
        }
        let mut bytes = vec![0_u8; samples.len() * S::BYTES_PER_SAMPLE];
        S::write_bytes(samples, &mut bytes);
        Ok(VolumeBuffer { bytes, size })
    }
}

/// Low byte first, sample order preserved.
pub fn pack_u16_le(samples: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0_u8; samples.len() * 2];
    LittleEndian::write_u16_into(samples, &mut bytes);
    bytes
}

/// Inverse of [`pack_u16_le`].
pub fn unpack_u16_le(bytes: &[u8]) -> Result<Vec<u16>, &'static str> {
    if bytes.len() % 2 != 0 {
        return Err("Byte count is not a multiple of the sample width");
    }
    let mut samples = vec![0_u16; bytes.len() / 2];
    LittleEndian::read_u16_into(bytes, &mut samples);
    Ok(samples)
}
