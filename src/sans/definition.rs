//! Definition messages, and the table of local message slots they fill.

use tracing::{trace, warn};
use zerocopy::FromBytes;

use crate::profile::{Catalog, FieldMeta, MessageMeta, UNKNOWN};

use super::base::{BYTE, BaseType, Endianness};

/// The fixed part of a definition message, following its record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionHeader {
    pub endianness: Endianness,
    pub global: u16,
    pub field_count: u8,
}

impl DefinitionHeader {
    /// Bytes in the fixed part of a definition message.
    pub const SIZE: usize = 5;

    /// Decode the fixed part of a definition message.
    ///
    /// The architecture byte selects the byte order of the global message
    /// number, and of every value in data messages using this definition.
    pub fn parse(r: [u8; Self::SIZE]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct DefinitionContent {
            _reserved: u8,
            architecture: u8,
            global_message: [u8; 2],
            field_count: u8,
        }

        let DefinitionContent {
            architecture,
            global_message,
            field_count,
            ..
        } = zerocopy::transmute!(r);

        let endianness = Endianness::from_architecture(architecture);
        let global = match endianness {
            Endianness::Little => u16::from_le_bytes(global_message),
            Endianness::Big => u16::from_be_bytes(global_message),
        };

        Self {
            endianness,
            global,
            field_count,
        }
    }
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct FieldHeader {
    field: u8,
    size: u8,
    base_type: u8,
}

/// The layout of a single field in data messages.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub number: u8,
    /// Bytes occupied in each data message.
    pub size: u8,
    pub base_type: &'static BaseType,
    pub meta: Option<&'static FieldMeta>,
    pub endianness: Endianness,
}

impl FieldDefinition {
    /// Bytes in a field definition.
    pub const SIZE: usize = 3;

    /// Decode a field definition, resolving it against its message's metadata.
    ///
    /// Unrecognized base types are read as `byte`.
    pub fn parse(
        r: [u8; Self::SIZE],
        message: Option<&'static MessageMeta>,
        endianness: Endianness,
    ) -> Self {
        let FieldHeader {
            field,
            size,
            base_type,
        } = zerocopy::transmute!(r);

        let meta = message.and_then(|m| m.field(field));

        let base_type = BaseType::from_identifier(base_type).unwrap_or_else(|| {
            warn!(field, base_type, "unrecognized base type, reading as bytes");
            &BYTE
        });

        if let Some(meta) = meta {
            if meta.base_type != base_type {
                trace!(
                    field = meta.name,
                    expected = meta.base_type.name,
                    found = base_type.name,
                    "base type differs from profile"
                );
            }
        }

        Self {
            number: field,
            size,
            base_type,
            meta,
            endianness,
        }
    }

    pub fn name(&self) -> &'static str {
        self.meta.map_or(UNKNOWN, |m| m.name)
    }

    pub fn units(&self) -> &'static str {
        self.meta.map_or("", |m| m.units)
    }

    /// Whether the meaning of this field depends on another field's value.
    pub fn is_dynamic(&self) -> bool {
        self.meta.is_some_and(FieldMeta::is_dynamic)
    }

    /// Number of base type elements held by this field.
    pub fn element_count(&self) -> usize {
        self.base_type.element_count(self.size.into())
    }
}

/// The layout of a developer field in data messages.
///
/// Developer fields are described by messages within the file rather than by
/// the catalog; only their size is used, to step over their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeveloperFieldDefinition {
    pub number: u8,
    pub size: u8,
    pub developer_index: u8,
}

impl DeveloperFieldDefinition {
    pub fn parse(r: [u8; FieldDefinition::SIZE]) -> Self {
        let FieldHeader {
            field,
            size,
            base_type,
        } = zerocopy::transmute!(r);

        Self {
            number: field,
            size,
            developer_index: base_type,
        }
    }
}

/// A definition message: the layout of data messages in a local slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub local: u8,
    pub global: u16,
    pub name: &'static str,
    pub endianness: Endianness,
    pub meta: Option<&'static MessageMeta>,
    pub fields: Vec<FieldDefinition>,
    pub developer_fields: Vec<DeveloperFieldDefinition>,
}

impl Definition {
    /// Begin a definition from its fixed part, before its field definitions.
    pub fn new(local: u8, header: DefinitionHeader, catalog: &impl Catalog) -> Self {
        let meta = catalog.message(header.global);

        Self {
            local,
            global: header.global,
            name: meta.map_or(UNKNOWN, |m| m.name),
            endianness: header.endianness,
            meta,
            fields: Vec::with_capacity(header.field_count.into()),
            developer_fields: Vec::new(),
        }
    }

    /// Append the next field definition.
    pub fn add_field(&mut self, r: [u8; FieldDefinition::SIZE]) {
        let field = FieldDefinition::parse(r, self.meta, self.endianness);
        self.fields.push(field);
    }

    /// Append the next developer field definition.
    pub fn add_developer_field(&mut self, r: [u8; FieldDefinition::SIZE]) {
        self.developer_fields.push(DeveloperFieldDefinition::parse(r));
    }

    /// Bytes occupied by each data message using this definition.
    pub fn data_size(&self) -> usize {
        let fields = self.fields.iter().map(|f| usize::from(f.size));
        let developer_fields = self.developer_fields.iter().map(|f| usize::from(f.size));

        fields.chain(developer_fields).sum()
    }

    /// Whether any field of this definition is dynamic.
    pub fn is_dynamic(&self) -> bool {
        self.fields.iter().any(FieldDefinition::is_dynamic)
    }
}

/// Number of local message slots addressable by normal record headers.
///
/// Compressed timestamp headers address the first four.
pub const SLOT_COUNT: usize = 16;

/// The most recent definition stored in each local message slot.
#[derive(Debug, Default)]
pub struct Slots([Option<Definition>; SLOT_COUNT]);

impl Slots {
    /// Store a definition in its slot, returning any definition it replaced.
    pub fn store(&mut self, definition: Definition) -> Option<Definition> {
        let slot = usize::from(definition.local) % SLOT_COUNT;
        self.0[slot].replace(definition)
    }

    /// Retrieve the active definition for a slot, if one has been stored.
    pub fn get(&self, local: u8) -> Option<&Definition> {
        self.0.get(usize::from(local))?.as_ref()
    }
}
