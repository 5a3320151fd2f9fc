//! Reader-based decoder implementation.

#[cfg(feature = "profile")]
use std::{fs::File, io::BufReader, path::Path};
use std::io::{ErrorKind, Read};

use either::Either::{self, Left, Right};
use tracing::{debug, trace};

#[cfg(feature = "profile")]
use crate::profile::Profile;
use crate::{
    profile::Catalog,
    sans::{
        data::{self, DataMessage},
        definition::{Definition, DefinitionHeader, Slots},
        header::{FileHeader, MessageKind, RecordHeader},
    },
};

use super::{Error, cursor::ByteCursor};

/// Bytes at the end of the payload reserved for a checksum, which is not
/// verified.
pub const TRAILER_SIZE: u64 = 2;

/// Open a file by path and decode its data messages with the built-in profile.
///
/// The file is closed when the returned iterator is dropped.
///
/// _Requires Cargo feature `profile`._
#[cfg(feature = "profile")]
pub fn open(path: impl AsRef<Path>) -> Result<Messages<BufReader<File>, Profile>, Error> {
    let file = File::open(path)?;
    Messages::new(BufReader::new(file))
}

/// An iterator decoding data messages from a reader.
///
/// Each call to `next` reads exactly as much of the reader as is needed to
/// produce one data message, storing any definition messages met on the way.
/// Iteration ends once no more than the checksum remains of the payload, or
/// after the first error.
#[derive(Debug)]
pub struct Messages<R, C> {
    cursor: ByteCursor<R>,
    header: FileHeader,
    slots: Slots,
    catalog: C,
    finished: bool,
}

#[cfg(feature = "profile")]
impl<R: Read> Messages<R, Profile> {
    /// Decode the file header from a reader, using the built-in profile.
    ///
    /// _Requires Cargo feature `profile`._
    pub fn new(r: R) -> Result<Self, Error> {
        Self::with_catalog(r, Profile)
    }
}

impl<R: Read, C: Catalog> Messages<R, C> {
    /// Decode the file header from a reader, resolving messages against a
    /// catalog.
    pub fn with_catalog(r: R, catalog: C) -> Result<Self, Error> {
        let mut cursor = ByteCursor::new(r, FileHeader::SIZE as u64);

        let bytes = cursor.take().map_err(|err| match err {
            Error::Io(err) if err.kind() == ErrorKind::UnexpectedEof => Error::InvalidFormat,
            err => err,
        })?;

        let header = FileHeader::parse(bytes)?;

        cursor.set_remaining(header.extension_len() as u64);
        cursor.skip(header.extension_len())?;
        cursor.set_remaining(header.payload_size.into());

        debug!(
            header_size = header.header_size,
            protocol_version = %header.protocol_version,
            profile_version = %header.profile_version,
            payload_size = header.payload_size,
            "decoded file header"
        );

        Ok(Self {
            cursor,
            header,
            slots: Slots::default(),
            catalog,
            finished: false,
        })
    }

    /// The header of the file being decoded.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Bytes of payload not yet read, including the checksum.
    pub fn bytes_remaining(&self) -> u64 {
        self.cursor.remaining()
    }

    /// Decode the next message, whether definition or data.
    ///
    /// Returns the definition just stored, or the decoded data message, or
    /// `None` once the payload is exhausted or an error has been returned.
    pub fn next_message(&mut self) -> Result<Option<Either<&Definition, DataMessage>>, Error> {
        if self.finished || self.cursor.remaining() <= TRAILER_SIZE {
            self.finished = true;
            return Ok(None);
        }

        let message = match self.advance() {
            Ok(message) => message,
            Err(err) => {
                self.finished = true;
                return Err(err);
            }
        };

        Ok(Some(match message {
            Left(local) => Left(self.slots.get(local).ok_or(Error::MissingDefinition(local))?),
            Right(message) => Right(message),
        }))
    }

    /// Read one message, returning the slot of a stored definition or a
    /// decoded data message.
    fn advance(&mut self) -> Result<Either<u8, DataMessage>, Error> {
        match RecordHeader::decode(self.cursor.take()?) {
            RecordHeader::Normal {
                kind: MessageKind::Definition { developer_data },
                local,
            } => {
                self.read_definition(local, developer_data)?;
                Ok(Left(local))
            }
            RecordHeader::Normal {
                kind: MessageKind::Data,
                local,
            } => self.read_data(local, None).map(Right),
            RecordHeader::CompressedTimestamp { local, time_offset } => {
                self.read_data(local, Some(time_offset)).map(Right)
            }
        }
    }

    fn read_definition(&mut self, local: u8, developer_data: bool) -> Result<(), Error> {
        let header = DefinitionHeader::parse(self.cursor.take()?);
        let mut definition = Definition::new(local, header, &self.catalog);

        for _ in 0..header.field_count {
            definition.add_field(self.cursor.take()?);
        }

        if developer_data {
            let [count] = self.cursor.take()?;
            for _ in 0..count {
                definition.add_developer_field(self.cursor.take()?);
            }
        }

        trace!(
            local,
            global = definition.global,
            name = definition.name,
            fields = definition.fields.len(),
            developer_fields = definition.developer_fields.len(),
            "stored definition"
        );

        let global = definition.global;
        if let Some(previous) = self.slots.store(definition) {
            if previous.global != global {
                debug!(
                    local,
                    previous = previous.name,
                    global,
                    "redefined local message"
                );
            }
        }

        Ok(())
    }

    fn read_data(&mut self, local: u8, time_offset: Option<u8>) -> Result<DataMessage, Error> {
        let definition = self
            .slots
            .get(local)
            .ok_or(Error::MissingDefinition(local))?;

        let body = self.cursor.take_vec(definition.data_size())?;

        Ok(data::decode(definition, &body, &self.catalog, time_offset))
    }
}

impl<R: Read, C: Catalog> Iterator for Messages<R, C> {
    type Item = Result<DataMessage, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_message() {
                Ok(Some(Right(message))) => return Some(Ok(message)),
                Ok(Some(Left(_))) => continue,
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl<R: Read, C: Catalog> core::iter::FusedIterator for Messages<R, C> {}
