//! Base types: the primitive wire formats field values are encoded with.

use either::Either::{Left, Right};

/// Byte order of the multi-byte values in messages of a local type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Interpret the architecture byte of a definition message.
    pub fn from_architecture(architecture: u8) -> Self {
        if architecture == 0 {
            Self::Little
        } else {
            Self::Big
        }
    }
}

/// Numeric format of the elements of a base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Unsigned,
    Signed,
    Float,
    String,
}

/// A value read from the wire, before any profile normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl Primitive {
    /// The value as a numeric code, for enumerated fields.
    pub fn code(&self) -> Option<u64> {
        match *self {
            Self::Unsigned(x) => Some(x),
            Self::Signed(x) => u64::try_from(x).ok(),
            Self::Float(_) | Self::Text(_) => None,
        }
    }

    /// The value as a float, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Unsigned(x) => Some(x as f64),
            Self::Signed(x) => Some(x as f64),
            Self::Float(x) => Some(x),
            Self::Text(_) => None,
        }
    }
}

/// A primitive wire type.
#[derive(Debug, PartialEq, Eq)]
pub struct BaseType {
    /// Name as written in the published profile.
    pub name: &'static str,
    /// Code found in field definitions.
    pub identifier: u8,
    /// Bytes per element.
    pub width: u8,
    pub format: WireFormat,
    /// Bit pattern marking an element as holding no data.
    pub invalid: u64,
}

macro_rules! base_type {
    ($t:ident, $name:literal, $id:literal, $width:literal, $format:ident, $invalid:literal) => {
        #[doc = concat!("`", $name, "`")]
        pub static $t: BaseType = BaseType {
            name: $name,
            identifier: $id,
            width: $width,
            format: WireFormat::$format,
            invalid: $invalid,
        };
    };
}

base_type!(ENUM, "enum", 0x00, 1, Unsigned, 0xFF);
base_type!(SINT8, "sint8", 0x01, 1, Signed, 0x7F);
base_type!(UINT8, "uint8", 0x02, 1, Unsigned, 0xFF);
base_type!(SINT16, "sint16", 0x83, 2, Signed, 0x7FFF);
base_type!(UINT16, "uint16", 0x84, 2, Unsigned, 0xFFFF);
base_type!(SINT32, "sint32", 0x85, 4, Signed, 0x7FFF_FFFF);
base_type!(UINT32, "uint32", 0x86, 4, Unsigned, 0xFFFF_FFFF);
base_type!(STRING, "string", 0x07, 1, String, 0x00);
base_type!(FLOAT32, "float32", 0x88, 4, Float, 0xFFFF_FFFF);
base_type!(FLOAT64, "float64", 0x89, 8, Float, 0xFFFF_FFFF_FFFF_FFFF);
base_type!(UINT8Z, "uint8z", 0x0A, 1, Unsigned, 0x00);
base_type!(UINT16Z, "uint16z", 0x8B, 2, Unsigned, 0x0000);
base_type!(UINT32Z, "uint32z", 0x8C, 4, Unsigned, 0x0000_0000);
base_type!(BYTE, "byte", 0x0D, 1, Unsigned, 0xFF);

/// Every known base type.
pub static BASE_TYPES: [&BaseType; 14] = [
    &ENUM, &SINT8, &UINT8, &SINT16, &UINT16, &SINT32, &UINT32, &STRING, &FLOAT32, &FLOAT64,
    &UINT8Z, &UINT16Z, &UINT32Z, &BYTE,
];

impl BaseType {
    /// Look up a base type by the code found in a field definition.
    pub fn from_identifier(identifier: u8) -> Option<&'static BaseType> {
        BASE_TYPES.iter().copied().find(|b| b.identifier == identifier)
    }

    /// Look up a base type by its profile name.
    pub fn from_name(name: &str) -> Option<&'static BaseType> {
        BASE_TYPES.iter().copied().find(|b| b.name == name)
    }

    /// Number of elements held by a field of `size` bytes.
    ///
    /// Strings are a single element regardless of size.
    pub fn element_count(&self, size: usize) -> usize {
        match self.format {
            WireFormat::String => usize::from(size != 0),
            _ => size / usize::from(self.width),
        }
    }

    /// Convert the bytes of a single element, if valid.
    ///
    /// Strings end at their first terminator and are invalid when empty.
    /// Floats are invalid when NaN, which includes their marker value.
    pub fn parse(&self, r: &[u8], endianness: Endianness) -> Option<Primitive> {
        if let WireFormat::String = self.format {
            let end = r.iter().position(|b| *b == 0).unwrap_or(r.len());
            return match &r[..end] {
                [] => None,
                text => Some(Primitive::Text(String::from_utf8_lossy(text).into_owned())),
            };
        }

        if r.len() != usize::from(self.width) {
            return None;
        }

        let bits = match endianness {
            Endianness::Little => r.iter().rev().fold(0, |acc, b| acc << 8 | u64::from(*b)),
            Endianness::Big => r.iter().fold(0, |acc, b| acc << 8 | u64::from(*b)),
        };

        if bits == self.invalid {
            return None;
        }

        let value = match (self.format, self.width) {
            (WireFormat::Signed, width) => {
                // Sign-extend from the element width.
                let shift = 64 - 8 * u32::from(width);
                Primitive::Signed(((bits << shift) as i64) >> shift)
            }
            (WireFormat::Float, 4) => Primitive::Float(f64::from(f32::from_bits(bits as u32))),
            (WireFormat::Float, _) => Primitive::Float(f64::from_bits(bits)),
            _ => Primitive::Unsigned(bits),
        };

        match value {
            Primitive::Float(x) if x.is_nan() => None,
            value => Some(value),
        }
    }

    /// Convert each element of a field, yielding `None` for invalid ones.
    ///
    /// One item is yielded per element, so positions are preserved. Fields of
    /// `byte` are opaque: every byte is yielded unless all hold the marker.
    pub fn parse_elements<'a>(
        &'static self,
        r: &'a [u8],
        endianness: Endianness,
    ) -> impl Iterator<Item = Option<Primitive>> + 'a {
        if self.identifier == BYTE.identifier {
            let valid = r.iter().any(|b| u64::from(*b) != self.invalid);
            return Left(
                r.iter()
                    .map(move |b| valid.then_some(Primitive::Unsigned(u64::from(*b)))),
            );
        }

        let width = match self.format {
            WireFormat::String => r.len().max(1),
            _ => usize::from(self.width),
        };

        Right(
            r.chunks_exact(width)
                .take(self.element_count(r.len()))
                .map(move |element| self.parse(element, endianness)),
        )
    }
}
