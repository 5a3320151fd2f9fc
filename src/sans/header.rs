//! File and record headers.

use core::fmt;

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::{
    FromBytes,
    byteorder::little_endian::{U16, U32},
};

/// An error decoding a file header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileHeaderError {
    /// Incorrect file type marker.
    #[error("Incorrect file type marker.")]
    InvalidFormat,
    /// Header size leaves an extension too short to hold a checksum.
    #[error("Irregular file header size ({0}).")]
    MalformedHeader(u8),
}

/// A `major.minor` version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The header preceding the messages of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Size of the header, including any extension.
    pub header_size: u8,
    pub protocol_version: Version,
    pub profile_version: Version,
    /// Bytes of message data following the header.
    pub payload_size: u32,
}

impl FileHeader {
    /// Bytes always present at the start of a file.
    pub const SIZE: usize = 12;

    /// Decode the fixed part of a file header.
    ///
    /// The file type marker is checked before the header size.
    pub fn parse(r: [u8; Self::SIZE]) -> Result<Self, FileHeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawFileHeader {
            header_size: u8,
            protocol_version: u8,
            profile_version: U16,
            payload_size: U32,
            data_type: [u8; 4],
        }

        let RawFileHeader {
            header_size,
            protocol_version,
            profile_version,
            payload_size,
            data_type,
        } = zerocopy::transmute!(r);

        if &data_type != b".FIT" {
            Err(FileHeaderError::InvalidFormat)?;
        }

        // Any extension must at least hold a checksum.
        match usize::from(header_size).checked_sub(Self::SIZE) {
            Some(0) => {}
            Some(extension) if extension >= 2 => {}
            _ => Err(FileHeaderError::MalformedHeader(header_size))?,
        }

        let profile_version = profile_version.get();

        Ok(Self {
            header_size,
            protocol_version: Version {
                major: u16::from(protocol_version >> 4),
                minor: u16::from(protocol_version & 0x0F),
            },
            profile_version: Version {
                major: profile_version / 100,
                minor: profile_version % 100,
            },
            payload_size: payload_size.get(),
        })
    }

    /// Bytes of header following the fixed part, skipped when decoding.
    pub fn extension_len(&self) -> usize {
        usize::from(self.header_size).saturating_sub(Self::SIZE)
    }
}

/// The kind of message following a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A definition message, optionally followed by developer field definitions.
    Definition { developer_data: bool },
    Data,
}

/// A decoded record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordHeader {
    Normal { kind: MessageKind, local: u8 },
    /// Always precedes a data message.
    CompressedTimestamp { local: u8, time_offset: u8 },
}

impl RecordHeader {
    /// Decode a record header.
    pub fn decode(r: [u8; 1]) -> Self {
        let r = r[0];

        bitfield! {
            struct Header(u8) {
                [7] is_compressed,
            }
        }

        if Header(r).is_compressed() {
            bitfield! {
                struct CompressedHeader(u8) {
                    [0..5] time_offset: u8,
                    [5..7] local_message: u8,
                }
            }

            let header = CompressedHeader(r);

            Self::CompressedTimestamp {
                local: header.local_message(),
                time_offset: header.time_offset(),
            }
        } else {
            bitfield! {
                struct NormalHeader(u8) {
                    [0..4] local_message: u8,
                    [5] is_developer,
                    [6] is_definition,
                }
            }

            let header = NormalHeader(r);

            let kind = if header.is_definition() {
                MessageKind::Definition {
                    developer_data: header.is_developer(),
                }
            } else {
                MessageKind::Data
            };

            Self::Normal {
                kind,
                local: header.local_message(),
            }
        }
    }

    /// The local message slot this header refers to.
    pub fn local(&self) -> u8 {
        match *self {
            Self::Normal { local, .. } | Self::CompressedTimestamp { local, .. } => local,
        }
    }

    /// Seconds elapsed since the last timestamp, for compressed headers.
    pub fn time_offset(&self) -> Option<u8> {
        match *self {
            Self::Normal { .. } => None,
            Self::CompressedTimestamp { time_offset, .. } => Some(time_offset),
        }
    }
}
