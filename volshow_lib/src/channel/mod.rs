mod cursor;
mod data_source;
mod image;

pub use cursor::CoordIterator;
pub use data_source::{DataSource, TypedMmap};
pub use image::{ChannelImage, SampleSource};
