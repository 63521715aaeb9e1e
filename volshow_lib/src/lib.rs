pub mod channel;
pub mod color;
pub mod convert;
pub mod premade;
pub mod render;
pub mod test_helpers;
mod value_range;

pub use channel::{ChannelImage, CoordIterator, DataSource, SampleSource};
pub use value_range::ValueRange;

use crate::color::RGBA;

/// Transfer function
///
/// Maps a normalized sample `<0;1>` to color and opacity.
pub type TF = fn(f32) -> RGBA;

/// Shows the channels of a volume file in a fresh render window.
///
/// Raw 8bit and 16bit channels are uploaded as-is, real valued channels
/// are rescaled to 16bit over the value range found in the data.
pub fn show_file<R, P>(path: P, options: &render::WindowOptions) -> Result<R, &'static str>
where
    R: render::RenderWindow,
    P: AsRef<std::path::Path>,
{
    use crate::premade::parse::ChannelStack;

    let stack = premade::parse::from_file(path)?;
    match stack {
        ChannelStack::Raw8(channels) => render::show_u8_channels(&channels, options),
        ChannelStack::Raw16(channels) => render::show_u16_channels(&channels, options),
        ChannelStack::Real32(channels) => {
            // Value bounds come from a separate pass, the copy itself takes them as input
            let range = ValueRange::from_samples(
                channels.iter().flat_map(|image| image.get_slice().iter().copied()),
            );
            render::show_f32_channels(&channels, options, range)
        }
    }
}
