//! File access capability: a mount-path virtual filesystem over `std::fs`.
//!
//! The toolkit opens virtual paths ("fonts/body.ttf"); the bridge resolves
//! them against mounted search roots in mount order, first hit wins. With no
//! roots mounted, paths are tried against the plain filesystem, so the
//! bridge stays usable in tools that never set up a mount table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read as _, Seek as _, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};

use crate::interface::{FileId, FileInterface};

/// File capability implementation.
///
/// Open-file ids are never recycled, so a stale id cannot alias a later
/// open; operations on unknown ids return C-style benign defaults (zero
/// bytes, zero length) instead of failing.
#[derive(Debug, Default)]
pub struct FileBridge {
    roots: Vec<PathBuf>,
    open: HashMap<u64, File>,
    next_id: u64,
}

impl FileBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a search root. Later mounts are consulted after earlier ones.
    pub fn mount(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let root = root.into();
        ensure!(root.is_dir(), "mount root {} is not a directory", root.display());
        log::debug!("mounted {}", root.display());
        self.roots.push(root);
        Ok(())
    }

    /// Number of currently open files.
    pub fn open_files(&self) -> usize {
        self.open.len()
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));

        if self.roots.is_empty() {
            let direct = Path::new(path);
            return direct.is_file().then(|| direct.to_path_buf());
        }

        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

impl FileInterface for FileBridge {
    fn open(&mut self, path: &str) -> Option<FileId> {
        let resolved = self.resolve(path)?;
        match File::open(&resolved) {
            Ok(file) => {
                self.next_id += 1;
                self.open.insert(self.next_id, file);
                Some(FileId(self.next_id))
            }
            Err(err) => {
                log::warn!("open of {} failed: {err}", resolved.display());
                None
            }
        }
    }

    fn close(&mut self, file: FileId) {
        self.open.remove(&file.0);
    }

    fn read(&mut self, file: FileId, buffer: &mut [u8]) -> usize {
        let Some(handle) = self.open.get_mut(&file.0) else {
            return 0;
        };

        // fread semantics: fill the buffer unless the file ends first.
        let mut total = 0;
        while total < buffer.len() {
            match handle.read(&mut buffer[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    log::warn!("read failed: {err}");
                    break;
                }
            }
        }
        total
    }

    fn seek(&mut self, file: FileId, pos: SeekFrom) -> bool {
        let Some(handle) = self.open.get_mut(&file.0) else {
            return false;
        };
        handle.seek(pos).is_ok()
    }

    fn tell(&mut self, file: FileId) -> u64 {
        let Some(handle) = self.open.get_mut(&file.0) else {
            return 0;
        };
        handle.stream_position().unwrap_or(0)
    }

    fn length(&mut self, file: FileId) -> u64 {
        let Some(handle) = self.open.get(&file.0) else {
            return 0;
        };
        handle.metadata().map(|m| m.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn mounted_dir(files: &[(&str, &[u8])]) -> (tempfile::TempDir, FileBridge) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(&path).unwrap().write_all(contents).unwrap();
        }
        let mut bridge = FileBridge::new();
        bridge.mount(dir.path()).unwrap();
        (dir, bridge)
    }

    #[test]
    fn open_read_close() {
        let (_dir, mut fs) = mounted_dir(&[("doc.rml", b"<body/>")]);
        let id = fs.open("doc.rml").unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(fs.read(id, &mut buf), 7);
        assert_eq!(&buf[..7], b"<body/>");
        fs.close(id);
        assert_eq!(fs.open_files(), 0);
    }

    #[test]
    fn leading_slash_is_a_virtual_root() {
        let (_dir, mut fs) = mounted_dir(&[("fonts/body.ttf", b"xyz")]);
        assert!(fs.open("/fonts/body.ttf").is_some());
        assert!(fs.open("fonts/body.ttf").is_some());
    }

    #[test]
    fn earlier_mount_wins() {
        let (_a, mut fs) = mounted_dir(&[("same.txt", b"first")]);
        let other = tempfile::tempdir().unwrap();
        File::create(other.path().join("same.txt"))
            .unwrap()
            .write_all(b"second")
            .unwrap();
        fs.mount(other.path()).unwrap();

        let id = fs.open("same.txt").unwrap();
        let mut buf = [0u8; 8];
        let n = fs.read(id, &mut buf);
        assert_eq!(&buf[..n], b"first");
    }

    #[test]
    fn seek_tell_length() {
        let (_dir, mut fs) = mounted_dir(&[("data.bin", b"0123456789")]);
        let id = fs.open("data.bin").unwrap();
        assert_eq!(fs.length(id), 10);
        assert!(fs.seek(id, SeekFrom::Start(4)));
        assert_eq!(fs.tell(id), 4);

        let mut buf = [0u8; 2];
        fs.read(id, &mut buf);
        assert_eq!(&buf, b"45");
        assert_eq!(fs.tell(id), 6);

        assert!(fs.seek(id, SeekFrom::End(-1)));
        assert_eq!(fs.tell(id), 9);
    }

    #[test]
    fn missing_file_opens_as_none() {
        let (_dir, mut fs) = mounted_dir(&[]);
        assert!(fs.open("nope.txt").is_none());
    }

    #[test]
    fn mount_of_non_directory_fails() {
        let mut fs = FileBridge::new();
        assert!(fs.mount("/definitely/not/here").is_err());
    }

    #[test]
    fn operations_on_closed_id_are_benign() {
        let (_dir, mut fs) = mounted_dir(&[("f", b"abc")]);
        let id = fs.open("f").unwrap();
        fs.close(id);

        let mut buf = [0u8; 4];
        assert_eq!(fs.read(id, &mut buf), 0);
        assert_eq!(fs.length(id), 0);
        assert_eq!(fs.tell(id), 0);
        assert!(!fs.seek(id, SeekFrom::Start(0)));
    }

    #[test]
    fn unmounted_bridge_falls_back_to_plain_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loose.txt");
        File::create(&path).unwrap().write_all(b"ok").unwrap();

        let mut fs = FileBridge::new();
        let id = fs.open(path.to_str().unwrap()).unwrap();
        assert_eq!(fs.length(id), 2);
    }
}
