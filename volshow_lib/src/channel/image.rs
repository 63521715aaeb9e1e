use nalgebra::Vector3;

use super::DataSource;

/// Positioned access into a 3D sample grid.
pub trait SampleSource<T> {
    fn get_size(&self) -> Vector3<usize>;

    /// Sample at grid coordinates.
    /// Coordinates outside the grid are a caller error.
    fn get_data(&self, x: usize, y: usize, z: usize) -> T;
}

/// One channel of a volume: extents and samples of a single kind.
pub struct ChannelImage<T> {
    size: Vector3<usize>,
    data: DataSource<T>,
}

impl<T> std::fmt::Debug for ChannelImage<T>
where
    T: Copy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelImage")
            .field("size", &self.size)
            .field("data len", &self.data.get_slice().len())
            .finish()
    }
}

impl<T> ChannelImage<T>
where
    T: Copy,
{
    /// The source may be longer than the extents need; the image only
    /// exposes the leading `x * y * z` samples.
    pub fn from_data_source(
        size: Vector3<usize>,
        data: DataSource<T>,
    ) -> Result<ChannelImage<T>, &'static str> {
        let needed = size.x * size.y * size.z;
        if data.get_slice().len() < needed {
            return Err("Not enough sample data for given extents");
        }
        Ok(ChannelImage { size, data })
    }

    pub fn from_vec(size: Vector3<usize>, data: Vec<T>) -> Result<ChannelImage<T>, &'static str> {
        ChannelImage::from_data_source(size, DataSource::from_vec(data))
    }

    /// Writable image filled with the default sample.
    pub fn zeroed(size: Vector3<usize>) -> ChannelImage<T>
    where
        T: Default,
    {
        let data = vec![T::default(); size.x * size.y * size.z];
        ChannelImage {
            size,
            data: DataSource::from_vec(data),
        }
    }

    pub fn voxel_count(&self) -> usize {
        self.size.x * self.size.y * self.size.z
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }

    pub fn get_slice(&self) -> &[T] {
        &self.data.get_slice()[..self.voxel_count()]
    }

    /// Mutable samples, `None` when the image is backed by a mapped file.
    pub fn get_slice_mut(&mut self) -> Option<&mut [T]> {
        let voxels = self.voxel_count();
        self.data.get_slice_mut().map(|s| &mut s[..voxels])
    }
}

impl<T> SampleSource<T> for ChannelImage<T>
where
    T: Copy,
{
    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> T {
        self.get_slice()[self.get_3d_index(x, y, z)]
    }
}
