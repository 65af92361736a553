//! File-backed name store
//!
//! Format: UTF-8 text, one username per line, newline-terminated, no header.
//! Appends take an exclusive `fs2` lock so concurrent processes never
//! interleave partial lines. Full rewrites go through a temp file + rename.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::ports::outbound::NameStore;

/// Name store persisted to a flat text file.
pub struct FileNameStore {
    path: PathBuf,
}

impl FileNameStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }
}

/// Split file contents into names, dropping blank lines and `\r`.
fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a non-empty file ends mid-line, so an append must start a new one.
fn lacks_trailing_newline(file: &mut File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl NameStore for FileNameStore {
    fn load_all(&self) -> Result<Vec<String>, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| self.io_error(e))?;

        let contents = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %self.path.display(), "Names file is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let names = parse_lines(&contents);
        info!(path = %self.path.display(), count = names.len(), "Read names file");
        Ok(names)
    }

    fn append(&self, name: &str) -> Result<(), StoreError> {
        self.ensure_parent_dir()?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // Held until `file` drops
        file.lock_exclusive().map_err(|source| StoreError::Lock {
            path: self.path.clone(),
            source,
        })?;

        let separator = if lacks_trailing_newline(&mut file).map_err(|e| self.io_error(e))? {
            "\n"
        } else {
            ""
        };

        writeln!(file, "{}{}", separator, name)
            .and_then(|_| file.flush())
            .and_then(|_| file.sync_data())
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), username = name, "Appended name");
        Ok(())
    }

    fn replace_all(&self, names: &[String]) -> Result<(), StoreError> {
        self.ensure_parent_dir()?;

        let mut contents = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
        for name in names {
            contents.push_str(name);
            contents.push('\n');
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| self.io_error(e))?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), count = names.len(), "Rewrote names file");
        Ok(())
    }
}
