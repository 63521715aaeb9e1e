//! Parser for the csvf multi-channel volume format.
//!
//! Header, little-endian, 16 B total:
//! 1. extents -- 3x 32bit ints (x,y,z)
//! 2. sample width -- 1 byte (1, 2 or 4)
//! 3. channel count -- 1 byte
//! 4. 2 bytes padding
//!
//! Channel data follows channel-major, samples in storage order (z axis
//! fastest). Wide samples are reinterpreted in place, so parsing 16bit
//! and real files assumes a little-endian host.

use std::path::Path;

use nalgebra::{vector, Vector3};
use nom::{
    bytes::complete::take,
    number::complete::{le_u32, le_u8},
    sequence::tuple,
    IResult,
};

use crate::channel::{ChannelImage, DataSource};

pub const CSVF_HEADER_LEN: usize = 3 * 4 + 1 + 1 + 2;

const WIDTH_U8: u8 = 1;
const WIDTH_U16: u8 = 2;
const WIDTH_F32: u8 = 4;

/// All channels of one parsed volume file.
/// Channels share extents and sample kind.
pub enum ChannelStack {
    Raw8(Vec<ChannelImage<u8>>),
    Raw16(Vec<ChannelImage<u16>>),
    Real32(Vec<ChannelImage<f32>>),
}

impl ChannelStack {
    pub fn channel_count(&self) -> usize {
        match self {
            ChannelStack::Raw8(c) => c.len(),
            ChannelStack::Raw16(c) => c.len(),
            ChannelStack::Real32(c) => c.len(),
        }
    }
}

/// Maps the file and parses it into a channel stack.
pub fn from_file<P>(path: P) -> Result<ChannelStack, &'static str>
where
    P: AsRef<Path>,
{
    let ds: DataSource<u8> = DataSource::from_file(path)?;
    channel_stack_parser(ds)
}

struct ExtractedHeader {
    size: Vector3<usize>,
    sample_width: u8,
    channels: usize,
}

pub fn channel_stack_parser(data_source: DataSource<u8>) -> Result<ChannelStack, &'static str> {
    let header = {
        let slice = data_source.get_slice();
        match header_inner(slice) {
            Ok((_rest, header)) => header,
            Err(_) => return Err("Parse error"),
        }
    };

    let ExtractedHeader {
        size,
        sample_width,
        channels,
    } = header;

    let voxels = size.x * size.y * size.z;
    let channel_bytes = voxels * sample_width as usize;
    let needed = CSVF_HEADER_LEN + channels * channel_bytes;
    if data_source.get_slice().len() < needed {
        return Err("File too short for its header");
    }

    let channel_source =
        |ch: usize| data_source.clone_with_offset(CSVF_HEADER_LEN + ch * channel_bytes);

    match sample_width {
        WIDTH_U8 => {
            let images = (0..channels)
                .map(|ch| ChannelImage::from_data_source(size, channel_source(ch)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ChannelStack::Raw8(images))
        }
        WIDTH_U16 => {
            let images = (0..channels)
                .map(|ch| ChannelImage::from_data_source(size, channel_source(ch).into_transmute()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ChannelStack::Raw16(images))
        }
        WIDTH_F32 => {
            let images = (0..channels)
                .map(|ch| ChannelImage::from_data_source(size, channel_source(ch).into_transmute()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ChannelStack::Real32(images))
        }
        _ => Err("Unknown sample width"),
    }
}

fn header_inner(s: &[u8]) -> IResult<&[u8], ExtractedHeader> {
    let mut header = tuple((tuple((le_u32, le_u32, le_u32)), le_u8, le_u8, take(2_u8)));

    let (s, (size, sample_width, channels, _pad)) = header(s)?;

    let size = vector![size.0 as usize, size.1 as usize, size.2 as usize];

    Ok((
        s,
        ExtractedHeader {
            size,
            sample_width,
            channels: channels as usize,
        },
    ))
}
