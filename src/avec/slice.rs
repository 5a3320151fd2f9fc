//! Slice-based decoding.

#[cfg(feature = "profile")]
use crate::profile::Profile;
use crate::{profile::Catalog, sans::data::DataMessage};

use super::{Error, Messages};

/// Decode every data message of a document held in a slice, using the
/// built-in profile.
///
/// This method is also re-exported as `freehub::avec::decode_slice`.
///
/// _Requires Cargo feature `profile`._
#[cfg(feature = "profile")]
pub fn decode(r: &[u8]) -> Result<Vec<DataMessage>, Error> {
    decode_with(r, Profile)
}

/// Decode every data message of a document held in a slice, resolving
/// messages against a catalog.
///
/// Messages decoded before an error are discarded with it.
pub fn decode_with(r: &[u8], catalog: impl Catalog) -> Result<Vec<DataMessage>, Error> {
    Messages::with_catalog(r, catalog)?.collect()
}
