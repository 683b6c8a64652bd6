use std::io::SeekFrom;

/// Opaque identifier for an open file.
///
/// Minted by the file bridge; ids are never recycled within a process, so a
/// stale id cannot alias a later open.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FileId(pub(crate) u64);

/// File access capability handed to the toolkit for document/font loading.
///
/// Paths are toolkit-side virtual paths resolved against mounted search
/// roots. Operations on an unknown or closed id are benign no-ops (zero
/// bytes read, zero length) rather than failures, matching the toolkit's
/// expectation of a C-style file API.
pub trait FileInterface {
    /// Opens `path` for reading. `None` when no mounted root contains it.
    fn open(&mut self, path: &str) -> Option<FileId>;

    /// Closes an open file. Closing an unknown id is ignored.
    fn close(&mut self, file: FileId);

    /// Reads up to `buffer.len()` bytes; returns the number of bytes read.
    fn read(&mut self, file: FileId, buffer: &mut [u8]) -> usize;

    /// Repositions the read cursor. Returns `false` on failure.
    fn seek(&mut self, file: FileId, pos: SeekFrom) -> bool;

    /// Current read cursor position from the start of the file.
    fn tell(&mut self, file: FileId) -> u64;

    /// Total length of the file in bytes.
    fn length(&mut self, file: FileId) -> u64;
}
