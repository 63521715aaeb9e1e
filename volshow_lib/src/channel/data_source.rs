use std::{fs::File, marker::PhantomData, mem::size_of, path::Path, sync::Arc};

use memmap::{Mmap, MmapOptions};

/// Typed view into a memory mapped file.
///
/// The byte offset must keep the view aligned for `T`.
pub struct TypedMmap<T> {
    mmap: Arc<Mmap>,
    offset: usize,
    t: PhantomData<T>,
}

impl<T> Clone for TypedMmap<T> {
    fn clone(&self) -> Self {
        TypedMmap {
            mmap: Arc::clone(&self.mmap),
            offset: self.offset,
            t: PhantomData,
        }
    }
}

impl<T> TypedMmap<T>
where
    T: Copy,
{
    pub fn from_map(mmap: Mmap) -> TypedMmap<T> {
        TypedMmap {
            mmap: Arc::new(mmap),
            offset: 0,
            t: Default::default(),
        }
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn get_all(&self) -> &[T] {
        let bytes: &[u8] = &self.mmap;
        let s = &bytes[self.offset..];
        unsafe { std::slice::from_raw_parts(s.as_ptr() as *const T, s.len() / size_of::<T>()) }
    }

    pub fn get(&self, index: usize) -> T {
        self.get_all()[index]
    }

    fn retag<U>(self) -> TypedMmap<U> {
        TypedMmap {
            mmap: self.mmap,
            offset: self.offset,
            t: PhantomData,
        }
    }
}

/// Sample storage of a channel image.
///
/// Either an owned vector or a window into a memory mapped file.
pub enum DataSource<T> {
    Vec(Vec<T>),
    Mmap(TypedMmap<T>),
}

impl<T> DataSource<T>
where
    T: Copy,
{
    pub fn get_slice(&self) -> &[T] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => m.get_all(),
        }
    }

    /// Mutable samples, `None` for read-only mapped sources.
    pub fn get_slice_mut(&mut self) -> Option<&mut [T]> {
        match self {
            DataSource::Vec(v) => Some(v.as_mut_slice()),
            DataSource::Mmap(_) => None,
        }
    }

    pub fn from_mmap(mmap: Mmap) -> DataSource<T> {
        let typed_map = TypedMmap::from_map(mmap);
        DataSource::Mmap(typed_map)
    }

    pub fn from_vec(vec: Vec<T>) -> DataSource<T> {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource<T>, &'static str>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err("Path does not lead to a file");
        }

        let file = File::open(path);

        let file = match file {
            Ok(f) => f,
            Err(_) => return Err("Cannot open file"),
        };

        let mmap = unsafe { MmapOptions::new().map(&file) };
        let mmap = match mmap {
            Ok(mmap) => mmap,
            Err(_) => return Err("Cannot create memory map"),
        };

        let data_source = DataSource::from_mmap(mmap);
        Ok(data_source)
    }

    /// New source starting `offset` elements into this one.
    ///
    /// Mapped sources share the mapping, vector sources copy the tail.
    pub fn clone_with_offset(&self, offset: usize) -> DataSource<T> {
        match self {
            DataSource::Vec(v) => DataSource::Vec(v[offset..].to_vec()),
            DataSource::Mmap(m) => {
                let mut m = m.clone();
                m.set_offset(m.offset + offset * size_of::<T>());
                DataSource::Mmap(m)
            }
        }
    }

    /// Reinterpret the raw bytes as samples of type `U`, native byte order.
    /// Trailing bytes that do not fill a whole sample are dropped.
    pub fn into_transmute<U>(self) -> DataSource<U>
    where
        U: Copy,
    {
        match self {
            DataSource::Vec(v) => {
                let bytes = v.len() * size_of::<T>();
                let elems = bytes / size_of::<U>();
                let mut out: Vec<U> = Vec::with_capacity(elems);
                unsafe {
                    std::ptr::copy_nonoverlapping(
                        v.as_ptr() as *const u8,
                        out.as_mut_ptr() as *mut u8,
                        elems * size_of::<U>(),
                    );
                    out.set_len(elems);
                }
                DataSource::Vec(out)
            }
            DataSource::Mmap(m) => DataSource::Mmap(m.retag()),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn vec_slice() {
        let ds = DataSource::from_vec(vec![1_u8, 2, 3, 4]);
        assert_eq!(ds.get_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn offset_clone() {
        let ds = DataSource::from_vec(vec![1_u8, 2, 3, 4]);
        let tail = ds.clone_with_offset(2);
        assert_eq!(tail.get_slice(), &[3, 4]);
    }

    #[test]
    fn transmute_to_u16() {
        let samples = [300_u16, 65535, 0];
        let mut bytes = vec![];
        for s in samples {
            bytes.extend_from_slice(&s.to_ne_bytes());
        }

        let ds: DataSource<u16> = DataSource::from_vec(bytes).into_transmute();
        assert_eq!(ds.get_slice(), &samples);
    }

    #[test]
    fn transmute_drops_partial_sample() {
        let ds: DataSource<u16> = DataSource::from_vec(vec![0_u8; 5]).into_transmute();
        assert_eq!(ds.get_slice().len(), 2);
    }

    #[test]
    fn missing_file() {
        let res: Result<DataSource<u8>, _> = DataSource::from_file("does/not/exist.csvf");
        assert!(res.is_err());
    }
}
