//! Entry points: package channel images and hand them to a render window.
//!
//! One pair of `init`/`show` functions per supported sample kind. `init`
//! constructs and configures the window, `show` also makes it visible.
//! Layer index, channel index and transfer function stay in lock-step on
//! every path.

use crate::{
    channel::{ChannelImage, SampleSource},
    convert::rescaled_copies,
    premade::transfer_functions::transfer_function_for_channel,
    ValueRange,
};

use super::{
    buffer::{VolumeBuffer, VolumeSample},
    window::{RenderWindow, RendererConfig, WindowOptions},
};

/// One generic path for every uploadable sample kind.
fn init_channels<S, R>(channels: &[ChannelImage<S>], options: &WindowOptions) -> Result<R, &'static str>
where
    S: VolumeSample,
    R: RenderWindow,
{
    let config = RendererConfig {
        window: options.clone(),
        bytes_per_sample: S::BYTES_PER_SAMPLE,
        layer_count: channels.len(),
    };
    let mut window = R::create(config)?;

    for (channel, image) in channels.iter().enumerate() {
        window.set_current_layer(channel);
        let buffer = VolumeBuffer::from_samples(image.get_slice(), image.get_size())?;
        window.set_volume_data(buffer)?;
        window.set_transfer_function(transfer_function_for_channel(channel));
    }

    Ok(window)
}

/// Configures a window for 8bit channels, one layer per channel.
pub fn init_u8_channels<R>(
    channels: &[ChannelImage<u8>],
    options: &WindowOptions,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    init_channels(channels, options)
}

/// Shows 8bit channels. The window presents itself on creation.
pub fn show_u8_channels<R>(
    channels: &[ChannelImage<u8>],
    options: &WindowOptions,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    init_u8_channels(channels, options)
}

/// Configures a window for 16bit channels, one layer per channel.
pub fn init_u16_channels<R>(
    channels: &[ChannelImage<u16>],
    options: &WindowOptions,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    init_channels(channels, options)
}

/// Shows 16bit channels. The window presents itself on creation.
pub fn show_u16_channels<R>(
    channels: &[ChannelImage<u16>],
    options: &WindowOptions,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    init_u16_channels(channels, options)
}

/// Rescales real valued channels into fresh 16bit copies and configures
/// a window for them. Every channel is duplicated in memory.
pub fn init_f32_channels<R>(
    channels: &[ChannelImage<f32>],
    options: &WindowOptions,
    range: ValueRange,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    let copies = rescaled_copies(channels, range)?;
    init_u16_channels(&copies, options)
}

/// Shows real valued channels and explicitly requests display.
pub fn show_f32_channels<R>(
    channels: &[ChannelImage<f32>],
    options: &WindowOptions,
    range: ValueRange,
) -> Result<R, &'static str>
where
    R: RenderWindow,
{
    let mut window = init_f32_channels::<R>(channels, options, range)?;
    window.request_display();
    Ok(window)
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;
    use crate::{
        premade::transfer_functions::{
            blue_gradient_tf, gray_tf, green_gradient_tf, rainbow_tf, red_gradient_tf,
        },
        test_helpers::{gradient_channel, RecordingWindow},
        TF,
    };

    #[test]
    fn layer_per_channel() {
        let size = vector![4, 4, 4];
        let channels: Vec<_> = (0..3).map(|_| gradient_channel(size)).collect();

        let window: RecordingWindow =
            init_u8_channels(&channels, &WindowOptions::new("test", 100, 100)).unwrap();

        assert_eq!(window.config.layer_count, 3);
        assert_eq!(window.config.bytes_per_sample, 1);
        for layer in &window.layers {
            assert_eq!(layer.size, size);
            assert_eq!(layer.bytes.len(), 64);
        }
    }

    #[test]
    fn transfer_functions_cycle() {
        let size = vector![2, 2, 2];
        let channels: Vec<_> = (0..7).map(|_| gradient_channel(size)).collect();

        let window: RecordingWindow =
            init_u8_channels(&channels, &WindowOptions::new("test", 100, 100)).unwrap();

        let expected: [TF; 7] = [
            gray_tf,
            green_gradient_tf,
            red_gradient_tf,
            blue_gradient_tf,
            rainbow_tf,
            gray_tf,
            green_gradient_tf,
        ];
        for (layer, tf) in window.layers.iter().zip(expected) {
            assert_eq!(layer.tf, Some(tf));
        }
    }

    #[test]
    fn upload_failure_aborts() {
        #[derive(Debug)]
        struct FailingWindow {
            uploads: usize,
        }

        impl RenderWindow for FailingWindow {
            fn create(_config: RendererConfig) -> Result<Self, &'static str> {
                Ok(FailingWindow { uploads: 0 })
            }

            fn set_current_layer(&mut self, _layer: usize) {}

            fn set_volume_data(&mut self, _buffer: VolumeBuffer) -> Result<(), &'static str> {
                self.uploads += 1;
                Err("Out of texture memory")
            }

            fn set_transfer_function(&mut self, _tf: TF) {
                panic!("configured a layer after a failed upload");
            }

            fn request_display(&mut self) {}
        }

        let channels: Vec<_> = (0..3).map(|_| gradient_channel(vector![2, 2, 2])).collect();
        let res: Result<FailingWindow, _> =
            init_u8_channels(&channels, &WindowOptions::new("test", 100, 100));

        assert_eq!(res.unwrap_err(), "Out of texture memory");
    }

    #[test]
    fn show_u8_does_not_request_display() {
        let channels = vec![gradient_channel(vector![2, 2, 2])];
        let window: RecordingWindow =
            show_u8_channels(&channels, &WindowOptions::new("test", 100, 100)).unwrap();
        assert_eq!(window.display_requests, 0);
    }
}
