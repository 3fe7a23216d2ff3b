//! System identity and stream utilities
//!
//! Two small, independent conveniences:
//!
//! - **System identity**: classify the host OS into a coarse family and
//!   derive a per-application private data directory under the user's home,
//!   following each platform's convention.
//! - **Stream copying**: move bytes between readers and writers through a
//!   fixed-size buffer, with whole-stream and whole-file helpers.
//!
//! # Private directories
//!
//! ```rust,no_run
//! use syskit::Sys;
//!
//! let sys = Sys::current()?;
//! let config_path = sys.private_file("MyApp", "config.json")?;
//! // <home>/.local/share/MyApp/config.json on Linux; the directory now
//! // exists, the file is left to the caller.
//! # Ok::<(), syskit::Error>(())
//! ```
//!
//! # Stream copying
//!
//! ```rust
//! use syskit::stream;
//!
//! let source = b"some bytes worth keeping";
//! let mut destination = Vec::new();
//! let copied = stream::copy(&source[..], &mut destination)?;
//! assert_eq!(copied, source.len() as u64);
//! assert_eq!(destination, source);
//! # Ok::<(), syskit::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod stream;
pub mod sys;

pub use config::DEFAULT_BLOCK_SIZE;
pub use error::{Error, Result};
pub use sys::{OsFamily, Sys};
