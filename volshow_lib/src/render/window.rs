use crate::TF;

use super::VolumeBuffer;

/// Window parameters of the external render window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub window_name: String,
    pub window_width: usize,
    pub window_height: usize,
    pub max_texture_width: usize,
    pub max_texture_height: usize,
    /// Set when the window embeds into an existing UI instead of owning one
    pub use_in_canvas: bool,
}

impl WindowOptions {
    pub fn new(window_name: &str, window_width: usize, window_height: usize) -> WindowOptions {
        WindowOptions {
            window_name: window_name.into(),
            window_width,
            window_height,
            max_texture_width: 1024,
            max_texture_height: 1024,
            use_in_canvas: false,
        }
    }
}

/// Full configuration handed to the window factory.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub window: WindowOptions,
    /// 1 for 8bit samples, 2 for 16bit
    pub bytes_per_sample: usize,
    /// One layer per channel
    pub layer_count: usize,
}

/// A layered volume render window.
///
/// Each layer holds one channel's sample buffer and transfer function.
/// The window lives outside this library; implementations wrap whatever
/// renderer actually draws the volume. Failures propagate as-is, nothing
/// is retried here.
pub trait RenderWindow: Sized {
    /// Construct a window sized for `config`.
    /// The window may present itself right away.
    fn create(config: RendererConfig) -> Result<Self, &'static str>;

    /// Select the layer that subsequent uploads and transfer functions
    /// apply to.
    fn set_current_layer(&mut self, layer: usize);

    /// Upload one channel into the current layer.
    /// The buffer carries its own extents.
    fn set_volume_data(&mut self, buffer: VolumeBuffer) -> Result<(), &'static str>;

    fn set_transfer_function(&mut self, tf: TF);

    /// Ask the window to make itself visible.
    fn request_display(&mut self);
}
