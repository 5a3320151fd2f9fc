//! Data messages: decoding field values against their definition.
//!
//! Decoding happens in two passes. The first reads every field according to
//! its definition, drops those holding their 'invalid' marker value, and
//! normalizes the rest: enumerated codes become labels, and numbers are
//! scaled and offset as the catalog directs. Dynamic fields are kept as raw
//! bytes, since their type is not yet known.
//!
//! The second pass resolves each dynamic field by finding the subfield whose
//! reference field (another field of the same message) holds one of its
//! accepted values. The raw bytes are then re-read as that subfield. A field
//! matching no subfield, or more than one, is dropped from the message; the
//! rest of the message is unaffected.

use core::fmt;

use either::Either::{self, Left, Right};
use tracing::debug;

use crate::profile::{Catalog, Subfield};

use super::{
    base::{BaseType, Endianness, Primitive},
    definition::{Definition, FieldDefinition},
};

/// A normalized field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An enumerated code without a label.
    Integer(i64),
    /// A number after scale and offset.
    Float(f64),
    Text(String),
    /// The label of an enumerated code.
    Label(&'static str),
    /// The elements of an array field, in position, with `None` for invalid
    /// ones.
    Array(Vec<Option<Value>>),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Integer(x) => Some(x as f64),
            Self::Float(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(x) => Some(x),
            Self::Label(x) => Some(x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(x) => f.write_str(x),
            Self::Label(x) => f.write_str(x),
            Self::Array(xs) => {
                for (i, x) in xs.iter().enumerate() {
                    if i != 0 {
                        f.write_str("|")?;
                    }
                    if let Some(x) = x {
                        write!(f, "{x}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// A decoded field: name, value and units.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedField {
    pub name: &'static str,
    pub value: Value,
    pub units: &'static str,
}

/// A decoded data message.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMessage {
    pub name: &'static str,
    pub global: u16,
    /// Local message slot of the definition used.
    pub local: u8,
    /// Seconds since the last timestamp, from a compressed timestamp header.
    pub time_offset: Option<u8>,
    /// Valid fields, in definition order.
    pub fields: Vec<DecodedField>,
}

impl DataMessage {
    /// Retrieve a field by name.
    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Retrieve a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.field(name).map(|f| &f.value)
    }
}

/// Decode the body of a data message.
///
/// The body must hold [`Definition::data_size`] bytes; fields extending past
/// its end are skipped. Developer field bytes follow the regular fields and
/// are ignored.
pub fn decode(
    definition: &Definition,
    body: &[u8],
    catalog: &impl Catalog,
    time_offset: Option<u8>,
) -> DataMessage {
    let mut offset = 0;

    // First pass: raw bytes for dynamic fields, values for the rest.
    let first: Vec<(&FieldDefinition, Either<&[u8], Value>)> = definition
        .fields
        .iter()
        .filter_map(|field| {
            let start = offset;
            offset += usize::from(field.size);
            let r = body.get(start..offset)?;

            if field.is_dynamic() {
                return Some((field, Left(r)));
            }

            let meta = field.meta;
            let value = unpack(field.base_type, r, field.endianness)?;
            let value = normalize(
                value,
                field.name(),
                meta.and_then(|m| m.scale),
                meta.and_then(|m| m.offset),
                catalog,
            );

            Some((field, Right(value)))
        })
        .collect();

    let fields = if definition.is_dynamic() {
        resolve(&first, catalog)
    } else {
        first
            .into_iter()
            .filter_map(|(field, value)| {
                value.right().map(|value| DecodedField {
                    name: field.name(),
                    value,
                    units: field.units(),
                })
            })
            .collect()
    };

    DataMessage {
        name: definition.name,
        global: definition.global,
        local: definition.local,
        time_offset,
        fields,
    }
}

/// Second pass: replace dynamic fields with their matching subfield.
fn resolve(
    first: &[(&FieldDefinition, Either<&[u8], Value>)],
    catalog: &impl Catalog,
) -> Vec<DecodedField> {
    // The decoded value of a field of this message, by name.
    let reference = |name: &str| {
        first
            .iter()
            .find(|(field, _)| field.name() == name)
            .and_then(|(_, value)| value.as_ref().right())
    };

    first
        .iter()
        .filter_map(|(field, value)| {
            let r = match value {
                Right(value) => {
                    return Some(DecodedField {
                        name: field.name(),
                        value: value.clone(),
                        units: field.units(),
                    });
                }
                Left(r) => *r,
            };

            let subfields = field.meta.map_or(&[][..], |m| m.subfields);

            let mut matches = subfields.iter().filter(|subfield| {
                reference(subfield.reference.field)
                    .is_some_and(|value| subfield.reference.accepts(value))
            });

            let subfield = match (matches.next(), matches.next()) {
                (Some(subfield), None) => subfield,
                (found, _) => {
                    debug!(
                        field = field.name(),
                        ambiguous = found.is_some(),
                        "dropping unresolved dynamic field"
                    );
                    return None;
                }
            };

            read_subfield(subfield, r, field.endianness, catalog)
        })
        .collect()
}

/// Re-read the raw bytes of a dynamic field as a subfield.
fn read_subfield(
    subfield: &'static Subfield,
    r: &[u8],
    endianness: Endianness,
    catalog: &impl Catalog,
) -> Option<DecodedField> {
    let value = unpack(subfield.base_type, r, endianness)?;
    let value = normalize(
        value,
        subfield.name,
        subfield.scale,
        subfield.offset,
        catalog,
    );

    Some(DecodedField {
        name: subfield.name,
        value,
        units: subfield.units,
    })
}

/// Read the elements of a field.
///
/// Single-element fields are scalars; a field with no valid element is absent.
fn unpack(
    base_type: &'static BaseType,
    r: &[u8],
    endianness: Endianness,
) -> Option<Either<Primitive, Vec<Option<Primitive>>>> {
    let mut elements: Vec<_> = base_type.parse_elements(r, endianness).collect();

    if base_type.element_count(r.len()) == 1 {
        elements.pop().flatten().map(Left)
    } else if elements.iter().all(Option::is_none) {
        None
    } else {
        Some(Right(elements))
    }
}

/// Label enumerated codes, and apply scale and offset to other numbers.
fn normalize(
    value: Either<Primitive, Vec<Option<Primitive>>>,
    name: &str,
    scale: Option<f64>,
    offset: Option<f64>,
    catalog: &impl Catalog,
) -> Value {
    let enumerated = catalog.is_enumerated(name);

    let one = |x: Primitive| match x {
        Primitive::Text(x) => Value::Text(x),
        x => match (enumerated, x.code()) {
            (true, Some(code)) => catalog
                .label(name, code)
                .map_or(Value::Integer(code as i64), Value::Label),
            _ => {
                let x = x.as_f64().unwrap_or(f64::NAN);
                Value::Float(x / scale.unwrap_or(1.0) - offset.unwrap_or(0.0))
            }
        },
    };

    match value {
        Left(x) => one(x),
        Right(xs) => Value::Array(xs.into_iter().map(|x| x.map(&one)).collect()),
    }
}
