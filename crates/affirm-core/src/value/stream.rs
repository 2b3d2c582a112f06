//! Seekable byte streams compared by content.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Readers a [`ByteStream`] can wrap.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

/// A shared, seekable byte stream with a known length.
///
/// Cloning shares the underlying reader. The reader is rewound before
/// every comparison, so the same stream can be compared repeatedly.
///
/// # Examples
///
/// ```
/// use affirm_core::ByteStream;
///
/// let stream = ByteStream::from_bytes(b"hello".to_vec());
/// assert_eq!(stream.len(), 5);
/// assert!(stream.ptr_eq(&stream.clone()));
/// ```
#[derive(Clone)]
pub struct ByteStream {
    reader: Arc<Mutex<Box<dyn ReadSeek>>>,
    len: u64,
}

impl ByteStream {
    /// Wraps a reader, measuring its length by seeking to the end.
    pub fn new<R: ReadSeek + 'static>(mut reader: R) -> io::Result<Self> {
        let len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader: Arc::new(Mutex::new(Box::new(reader))),
            len,
        })
    }

    /// Creates an in-memory stream.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let len = bytes.len() as u64;
        Self {
            reader: Arc::new(Mutex::new(Box::new(Cursor::new(bytes)))),
            len,
        }
    }

    /// Opens a file for comparison.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::new(File::open(path)?)
    }

    /// Total length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if both handles share one reader.
    pub fn ptr_eq(&self, other: &ByteStream) -> bool {
        Arc::ptr_eq(&self.reader, &other.reader)
    }

    /// Runs `f` with exclusive access to the reader, rewound to the start.
    pub fn with_reader<T>(&self, f: impl FnOnce(&mut dyn ReadSeek) -> io::Result<T>) -> io::Result<T> {
        let mut guard = self
            .reader
            .lock()
            .map_err(|_| io::Error::other("byte stream lock poisoned"))?;
        let reader: &mut dyn ReadSeek = &mut **guard;
        reader.seek(SeekFrom::Start(0))?;
        f(reader)
    }
}

impl PartialEq for ByteStream {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream").field("len", &self.len).finish()
    }
}
