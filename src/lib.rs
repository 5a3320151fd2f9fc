//! A streaming decoder for Garmin's Flexible and Interoperable Data Transfer
//! protocol.
//!
//! Freehub reads the messages of a document in order, resolving each against a
//! profile [`Catalog`](profile::Catalog) to produce named, scaled and labelled
//! field values. Fields whose meaning depends on another field of the same
//! message (dynamic fields) are resolved to the matching subfield.
//!
//! Most users should begin with the iterator and functions in the [`avec`]
//! module. Applications needing finer control over reading (such as those
//! decoding from unusual sources) can compose the I/O-free pieces in the
//! [`sans`] module directly. The [`profile`] module describes catalogs, and
//! provides a built-in one covering common activity messages.
//!
//! The checksum ending each document is not verified.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `profile`: enable the built-in profile catalog (default).

pub mod avec;
pub mod profile;
pub mod sans;

pub use avec::{Error, Messages};
pub use sans::data::{DataMessage, DecodedField, Value};
