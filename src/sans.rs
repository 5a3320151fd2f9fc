//! I/O-free decoding of file headers, record headers and messages.
//!
//! The types in this module operate on fixed-size byte arrays and slices
//! already taken from a document; they never read or seek. A decoder built on
//! them must:
//!
//! - Decode the [`header::FileHeader`], skip its extension, and read no more
//! than its payload size in messages.
//!
//! - For each message, decode a [`header::RecordHeader`] from one byte. For a
//! definition, decode a [`definition::DefinitionHeader`] from the next five
//! bytes, then add its field definitions three bytes at a time, and (if the
//! record header indicates developer data) a count byte followed by developer
//! field definitions. Store the result in its [`definition::Slots`] entry.
//!
//! - For data, look up the active definition of the local slot, take
//! [`definition::Definition::data_size`] bytes, and pass them to
//! [`data::decode`].
//!
//! A decoder following these steps is provided in [`crate::avec::reader`].
//! Implementers are recommended to begin by studying and modifying it.

pub mod base;
pub mod data;
pub mod definition;
pub mod header;
