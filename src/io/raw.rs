/// Read / write float arrays as raw little-endian binary

use std::fs::File;
use std::io::{Write, Read, BufWriter, BufReader};
use std::path::Path;

/// Floats that can be streamed to and from raw little-endian bytes
pub trait RawFloat: Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;
    fn to_le(self) -> Self::Bytes;
    fn from_le(bytes: Self::Bytes) -> Self;
}

impl RawFloat for f32 {
    type Bytes = [u8; 4];
    fn to_le(self) -> Self::Bytes { self.to_le_bytes() }
    fn from_le(bytes: Self::Bytes) -> Self { f32::from_le_bytes(bytes) }
}

impl RawFloat for f64 {
    type Bytes = [u8; 8];
    fn to_le(self) -> Self::Bytes { self.to_le_bytes() }
    fn from_le(bytes: Self::Bytes) -> Self { f64::from_le_bytes(bytes) }
}

pub fn write<T: RawFloat>(data: impl Iterator<Item = T>, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut buf = BufWriter::new(file);
    for datum in data {
        buf.write_all(datum.to_le().as_ref())?;
    }
    buf.flush()
}

type IORes<T> = std::io::Result<T>;

/// Lazily read consecutive `T`s from `path`. A trailing partial value is
/// reported as an `UnexpectedEof` error rather than silently dropped.
pub fn read<'a, T: RawFloat + 'a>(path: &Path) -> IORes<impl Iterator<Item = IORes<T>> + 'a> {
    let file = File::open(path)?;
    let mut buf = BufReader::new(file);

    Ok(std::iter::from_fn(move || {
        let mut bytes = T::Bytes::default();
        let bytes_slice = bytes.as_mut();
        let mut filled = 0;
        while filled < bytes_slice.len() {
            match buf.read(&mut bytes_slice[filled..]) {
                Ok(0) if filled == 0 => return None,
                Ok(0) => return Some(Err(std::io::ErrorKind::UnexpectedEof.into())),
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {},
                Err(e) => return Some(Err(e)),
            }
        }
        Some(Ok(T::from_le(bytes)))
    }))
}

/// Read the whole of `path` into memory
pub fn read_all<T: RawFloat>(path: &Path) -> IORes<Vec<T>> {
    read(path)?.collect()
}
