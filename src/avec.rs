//! Convenience interfaces for common decoding patterns.
//!
//! The [`Messages`] iterator decodes data messages from any reader, one at a
//! time, as they are requested. The functions in [`slice`] collect the
//! messages of an in-memory document, and [`reader::open`] decodes a file by
//! path.
//!
//! ```
//! for message in freehub::avec::open("ride.fit")? {
//!     let message = message?;
//!     if message.name == "record" {
//!         println!("{:?}", message.get("heart_rate"));
//!     }
//! }
//! ```

pub mod cursor;
pub mod reader;
pub mod slice;

#[cfg(feature = "profile")]
pub use reader::open;
pub use reader::Messages;
#[cfg(feature = "profile")]
pub use slice::decode as decode_slice;

use thiserror::Error;

use crate::sans::header::FileHeaderError;

/// Errors occurring while decoding a document.
///
/// Every error is fatal to the document: message boundaries cannot be found
/// again without the definitions of the messages before them.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Incorrect file type marker, or too few bytes to hold a file header.
    #[error("Incorrect file type marker.")]
    InvalidFormat,
    /// Header size leaves an extension too short to hold a checksum.
    #[error("Irregular file header size ({0}).")]
    MalformedHeader(u8),
    /// Found a data message for a local slot with no definition.
    #[error("Found data for undefined local message {0}.")]
    MissingDefinition(u8),
    /// A message extends past the end of the payload.
    #[error("Message needs {requested} bytes, but only {remaining} remain.")]
    Overrun { requested: u64, remaining: u64 },
}

impl From<FileHeaderError> for Error {
    fn from(err: FileHeaderError) -> Self {
        match err {
            FileHeaderError::InvalidFormat => Self::InvalidFormat,
            FileHeaderError::MalformedHeader(size) => Self::MalformedHeader(size),
        }
    }
}
