//! The profile catalog: names, scaling and subfield rules for messages.
//!
//! The wire format only carries numbers. A [`Catalog`] supplies what those
//! numbers mean: the name of each global message, the name, units, scale and
//! offset of each of its fields, labels for enumerated codes, and the rules
//! selecting between the subfields of dynamic fields.
//!
//! Catalogs are read-only tables built before decoding begins. Entries are
//! `'static`, so definitions can refer to them without borrowing the catalog.
//!
//! _The built-in [`Profile`] requires Cargo feature `profile`._

#[cfg(feature = "profile")]
mod builtin;

#[cfg(feature = "profile")]
pub use builtin::Profile;

use crate::sans::{base::BaseType, data::Value};

/// Name given to messages and fields missing from a catalog.
pub const UNKNOWN: &str = "unknown";

/// A source of message and field metadata.
pub trait Catalog {
    /// Retrieve a message by its global message number, if known.
    fn message(&self, global: u16) -> Option<&'static MessageMeta>;

    /// Whether values of a field are codes of an enumeration.
    fn is_enumerated(&self, field: &str) -> bool;

    /// Retrieve the label of an enumerated code, if known.
    fn label(&self, field: &str, code: u64) -> Option<&'static str>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn message(&self, global: u16) -> Option<&'static MessageMeta> {
        (**self).message(global)
    }

    fn is_enumerated(&self, field: &str) -> bool {
        (**self).is_enumerated(field)
    }

    fn label(&self, field: &str, code: u64) -> Option<&'static str> {
        (**self).label(field, code)
    }
}

/// Metadata for a global message.
#[derive(Debug, PartialEq)]
pub struct MessageMeta {
    pub number: u16,
    pub name: &'static str,
    pub fields: &'static [FieldMeta],
}

impl MessageMeta {
    /// Retrieve a field by its field number, if known.
    pub fn field(&'static self, number: u8) -> Option<&'static FieldMeta> {
        self.fields.iter().find(|f| f.number == number)
    }
}

/// Metadata for a field of a message.
#[derive(Debug, PartialEq)]
pub struct FieldMeta {
    pub number: u8,
    pub name: &'static str,
    /// Base type the profile expects; definitions may disagree.
    pub base_type: &'static BaseType,
    pub scale: Option<f64>,
    pub offset: Option<f64>,
    pub units: &'static str,
    /// Alternative interpretations, making the field dynamic when non-empty.
    pub subfields: &'static [Subfield],
}

impl FieldMeta {
    pub const fn new(number: u8, name: &'static str, base_type: &'static BaseType) -> Self {
        Self {
            number,
            name,
            base_type,
            scale: None,
            offset: None,
            units: "",
            subfields: &[],
        }
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub const fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub const fn units(mut self, units: &'static str) -> Self {
        self.units = units;
        self
    }

    pub const fn subfields(mut self, subfields: &'static [Subfield]) -> Self {
        self.subfields = subfields;
        self
    }

    pub fn is_dynamic(&self) -> bool {
        !self.subfields.is_empty()
    }
}

/// An interpretation of a dynamic field, selected by another field's value.
#[derive(Debug, PartialEq)]
pub struct Subfield {
    pub name: &'static str,
    /// Base type the raw bytes of the field are re-read as.
    pub base_type: &'static BaseType,
    pub scale: Option<f64>,
    pub offset: Option<f64>,
    pub units: &'static str,
    pub reference: Reference,
}

impl Subfield {
    pub const fn new(
        name: &'static str,
        base_type: &'static BaseType,
        field: &'static str,
        values: &'static [RefValue],
    ) -> Self {
        Self {
            name,
            base_type,
            scale: None,
            offset: None,
            units: "",
            reference: Reference { field, values },
        }
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub const fn units(mut self, units: &'static str) -> Self {
        self.units = units;
        self
    }
}

/// The field selecting a subfield, and the values selecting it.
#[derive(Debug, PartialEq)]
pub struct Reference {
    /// Name of the reference field in the same message.
    pub field: &'static str,
    pub values: &'static [RefValue],
}

impl Reference {
    /// Whether a decoded reference field value selects this subfield.
    pub fn accepts(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v.matches(value))
    }
}

/// A reference value, compared against the decoded value of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefValue {
    /// An enumeration label.
    Label(&'static str),
    /// A numeric value, as decoded after scaling.
    Number(f64),
}

impl RefValue {
    pub fn matches(&self, value: &Value) -> bool {
        match (*self, value) {
            (Self::Label(a), Value::Label(b)) => a == *b,
            (Self::Label(a), Value::Text(b)) => a == b,
            (Self::Number(a), Value::Integer(b)) => a == *b as f64,
            (Self::Number(a), Value::Float(b)) => a == *b,
            _ => false,
        }
    }
}
