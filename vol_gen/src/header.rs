use byteorder::{ByteOrder, LittleEndian};
use volshow_lib::premade::parse::CSVF_HEADER_LEN;

use crate::config::Config;

/// csvf header, see `volshow_lib::premade::parse`
/// little-endian, total length 16B
/// 1. extents -- 3x 32bit ints (x,y,z)
/// 2. sample width -- 1x 8bit
/// 3. channel count -- 1x 8bit
/// 4. 2 bytes padding
pub fn generate_header(cfg: &Config) -> Vec<u8> {
    let mut vec = vec![0; CSVF_HEADER_LEN];
    let slice = &mut vec[..];

    LittleEndian::write_u32(&mut slice[0..4], cfg.dims.x);
    LittleEndian::write_u32(&mut slice[4..8], cfg.dims.y);
    LittleEndian::write_u32(&mut slice[8..12], cfg.dims.z);
    slice[12] = cfg.kind.bytes_per_sample();
    slice[13] = cfg.channels as u8;
    // trailing pad bytes stay zero

    vec
}
