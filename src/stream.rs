//! Block-based stream copying.
//!
//! [`copy_blocks`] is the base for every other operation in this module: it
//! moves bytes from a reader to a writer through a single fixed-size buffer.
//! The remaining functions are convenience wrappers over it for whole-stream
//! and whole-file shapes, all defaulting to
//! [`DEFAULT_BLOCK_SIZE`](crate::config::DEFAULT_BLOCK_SIZE).

use crate::config::DEFAULT_BLOCK_SIZE;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Copy all bytes from `from` to `to` in blocks of `block_size` bytes.
///
/// Reads up to `block_size` bytes at a time and writes exactly the bytes
/// read, so a partial final block never carries stale buffer contents. Both
/// handles are consumed and released when this function returns, whether the
/// copy succeeded or failed; the writer is flushed before release, and a copy
/// failure takes reporting precedence over a flush failure.
///
/// # Arguments
///
/// * `from` - The source to read from
/// * `to` - The destination to write to
/// * `block_size` - Buffer size in bytes, at least 1
///
/// # Returns
///
/// The total number of bytes copied.
///
/// # Errors
///
/// [`Error::InvalidBlockSize`] for a zero block size (checked before any
/// I/O), otherwise any read or write failure as [`Error::Io`].
pub fn copy_blocks<R: Read, W: Write>(mut from: R, mut to: W, block_size: usize) -> Result<u64> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize(block_size));
    }

    let mut buffer = vec![0u8; block_size];
    let mut copied = 0u64;
    let outcome = loop {
        let read = match from.read(&mut buffer) {
            Ok(0) => break Ok(()),
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => break Err(err),
        };
        if let Err(err) = to.write_all(&buffer[..read]) {
            break Err(err);
        }
        copied += read as u64;
    };

    // Flush even when the copy failed; both handles drop on return either
    // way. The copy error outranks a flush error.
    let flushed = to.flush();
    outcome?;
    flushed?;
    Ok(copied)
}

/// Wrapper for [`copy_blocks`] using the default block size.
pub fn copy<R: Read, W: Write>(from: R, to: W) -> Result<u64> {
    copy_blocks(from, to, DEFAULT_BLOCK_SIZE)
}

/// Read all remaining bytes from `from` into memory.
///
/// Composes [`copy_blocks`] with a growable in-memory destination.
pub fn read_whole_blocks<R: Read>(from: R, block_size: usize) -> Result<Vec<u8>> {
    let mut contents = Vec::new();
    copy_blocks(from, &mut contents, block_size)?;
    Ok(contents)
}

/// Wrapper for [`read_whole_blocks`] using the default block size.
pub fn read_whole<R: Read>(from: R) -> Result<Vec<u8>> {
    read_whole_blocks(from, DEFAULT_BLOCK_SIZE)
}

/// Read all remaining bytes from `from` and decode them as UTF-8.
///
/// # Errors
///
/// [`Error::Utf8`] if the accumulated bytes are not valid UTF-8.
pub fn read_whole_string<R: Read>(from: R) -> Result<String> {
    Ok(String::from_utf8(read_whole(from)?)?)
}

/// Read the whole file at `path` into memory.
///
/// The buffer is pre-sized from the file metadata when available. Fails if
/// the file cannot be opened.
pub fn read_whole_file_blocks(path: impl AsRef<Path>, block_size: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let capacity = file.metadata().map(|meta| meta.len() as usize).unwrap_or(0);
    let mut contents = Vec::with_capacity(capacity);
    copy_blocks(file, &mut contents, block_size)?;
    Ok(contents)
}

/// Wrapper for [`read_whole_file_blocks`] using the default block size.
pub fn read_whole_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    read_whole_file_blocks(path, DEFAULT_BLOCK_SIZE)
}

/// Read the whole file at `path` and decode it as UTF-8.
pub fn read_whole_file_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(String::from_utf8(read_whole_file(path)?)?)
}

/// Write the given bytes to `to` in blocks of `block_size` bytes.
///
/// Accepts anything viewable as bytes; `&str` text is written as its UTF-8
/// bytes. Delegates to [`copy_blocks`] with an in-memory source.
pub fn write_whole_blocks<W: Write>(
    data: impl AsRef<[u8]>,
    to: W,
    block_size: usize,
) -> Result<u64> {
    copy_blocks(data.as_ref(), to, block_size)
}

/// Wrapper for [`write_whole_blocks`] using the default block size.
pub fn write_whole<W: Write>(data: impl AsRef<[u8]>, to: W) -> Result<u64> {
    write_whole_blocks(data, to, DEFAULT_BLOCK_SIZE)
}

/// Write the given bytes to the file at `path`, creating or truncating it.
///
/// Delegates to [`write_whole_blocks`]; fails if the file cannot be opened
/// for writing.
pub fn write_to_file_blocks(
    data: impl AsRef<[u8]>,
    path: impl AsRef<Path>,
    block_size: usize,
) -> Result<u64> {
    let file = File::create(path)?;
    write_whole_blocks(data, file, block_size)
}

/// Wrapper for [`write_to_file_blocks`] using the default block size.
pub fn write_to_file(data: impl AsRef<[u8]>, path: impl AsRef<Path>) -> Result<u64> {
    write_to_file_blocks(data, path, DEFAULT_BLOCK_SIZE)
}
