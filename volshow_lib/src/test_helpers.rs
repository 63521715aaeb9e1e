//! Module with helper functions
//! Saves repetition in unit tests

use nalgebra::{vector, Vector3};

use crate::{
    channel::ChannelImage,
    render::{RenderWindow, RendererConfig, VolumeBuffer},
    ValueRange, TF,
};

pub fn white_channel(size: Vector3<usize>) -> ChannelImage<u8> {
    let data = vec![255; size.x * size.y * size.z];
    ChannelImage::from_vec(size, data).unwrap()
}

/// Channel with a distinct sample per coordinate (wrapping at 256).
pub fn gradient_channel(size: Vector3<usize>) -> ChannelImage<u8> {
    let data = (0..size.x * size.y * size.z)
        .map(|i| (i % 256) as u8)
        .collect();
    ChannelImage::from_vec(size, data).unwrap()
}

/// Real valued channel sweeping `range` linearly in storage order.
pub fn ramp_channel(size: Vector3<usize>, range: ValueRange) -> ChannelImage<f32> {
    let voxels = size.x * size.y * size.z;
    let step = if voxels > 1 {
        (range.high - range.low) / (voxels - 1) as f32
    } else {
        0.0
    };
    let data = (0..voxels).map(|i| range.low + step * i as f32).collect();
    ChannelImage::from_vec(size, data).unwrap()
}

/// What one layer of a [`RecordingWindow`] has been configured with.
pub struct RecordedLayer {
    pub bytes: Vec<u8>,
    pub size: Vector3<usize>,
    pub tf: Option<TF>,
}

/// Render window double that records every call instead of drawing.
pub struct RecordingWindow {
    pub config: RendererConfig,
    pub layers: Vec<RecordedLayer>,
    pub current_layer: usize,
    pub display_requests: usize,
}

impl RenderWindow for RecordingWindow {
    fn create(config: RendererConfig) -> Result<Self, &'static str> {
        let layers = (0..config.layer_count)
            .map(|_| RecordedLayer {
                bytes: Vec::new(),
                size: vector![0, 0, 0],
                tf: None,
            })
            .collect();
        Ok(RecordingWindow {
            config,
            layers,
            current_layer: 0,
            display_requests: 0,
        })
    }

    fn set_current_layer(&mut self, layer: usize) {
        self.current_layer = layer;
    }

    fn set_volume_data(&mut self, buffer: VolumeBuffer) -> Result<(), &'static str> {
        let layer = &mut self.layers[self.current_layer];
        layer.bytes = buffer.bytes;
        layer.size = buffer.size;
        Ok(())
    }

    fn set_transfer_function(&mut self, tf: TF) {
        self.layers[self.current_layer].tf = Some(tf);
    }

    fn request_display(&mut self) {
        self.display_requests += 1;
    }
}
