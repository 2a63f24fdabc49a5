//! Output streams shared between line writers
//!
//! A [`SharedStream`] is a cloneable handle to one append-only destination:
//! the process stdout/stderr, a file, or an in-memory buffer. Clones share a
//! single lock, so every line written through any clone lands whole.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where a stream writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamTarget {
    Stdout,
    Stderr,
    File(PathBuf),
    Memory,
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamTarget::Stdout => write!(f, "stdout"),
            StreamTarget::Stderr => write!(f, "stderr"),
            StreamTarget::File(path) => write!(f, "{}", path.display()),
            StreamTarget::Memory => write!(f, "memory"),
        }
    }
}

/// Cloneable, lock-protected handle to an output destination
#[derive(Clone)]
pub struct SharedStream {
    target: StreamTarget,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedStream {
    /// Wrap an arbitrary writer
    pub fn new(target: StreamTarget, writer: impl Write + Send + 'static) -> Self {
        Self {
            target,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// The process standard output
    pub fn stdout() -> Self {
        Self::new(StreamTarget::Stdout, io::stdout())
    }

    /// The process standard error
    pub fn stderr() -> Self {
        Self::new(StreamTarget::Stderr, io::stderr())
    }

    /// Open `path` for appending, creating it if absent.
    pub fn open_append(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o660);
        }
        let file = options.open(path)?;
        Ok(Self::new(StreamTarget::File(path.to_path_buf()), file))
    }

    /// Resolve a configured path to a stream.
    ///
    /// An empty or whitespace-only path selects `fallback`. A path that cannot
    /// be opened is reported on `diagnostics` and also selects `fallback`.
    pub fn open_or_fallback(
        path: Option<&str>,
        fallback: &SharedStream,
        diagnostics: &SharedStream,
    ) -> SharedStream {
        let path = match path.map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => return fallback.clone(),
        };

        match Self::open_append(path) {
            Ok(stream) => stream,
            Err(e) => {
                diagnostics.write_line(&format!("Could not open {}: {}", path, e));
                fallback.clone()
            }
        }
    }

    /// What this stream writes to
    pub fn target(&self) -> &StreamTarget {
        &self.target
    }

    /// Whether both handles refer to the same underlying writer
    pub fn same_as(&self, other: &SharedStream) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Append `line` plus a newline (if missing) under the stream lock.
    ///
    /// Write errors are swallowed: logging never fails its caller.
    pub fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writer.write_all(line.as_bytes());
        if !line.ends_with('\n') {
            let _ = writer.write_all(b"\n");
        }
        let _ = writer.flush();
    }

    /// Flush buffered output
    pub fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

impl fmt::Debug for SharedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStream")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// In-memory destination, mainly for capturing output in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`SharedStream`] appending into this buffer
    pub fn stream(&self) -> SharedStream {
        SharedStream::new(StreamTarget::Memory, self.clone())
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
