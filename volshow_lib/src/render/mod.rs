mod buffer;
mod display;
mod window;

pub use buffer::{pack_u16_le, unpack_u16_le, VolumeBuffer, VolumeSample};
pub use display::{
    init_f32_channels, init_u16_channels, init_u8_channels, show_f32_channels, show_u16_channels,
    show_u8_channels,
};
pub use window::{RenderWindow, RendererConfig, WindowOptions};
