#![allow(dead_code)]

//! Builds documents byte by byte for decoding tests.

/// Little-endian architecture byte.
pub const LITTLE: u8 = 0;
/// Big-endian architecture byte.
pub const BIG: u8 = 1;

pub struct FitBuilder {
    header_size: u8,
    body: Vec<u8>,
}

impl Default for FitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FitBuilder {
    pub fn new() -> Self {
        Self {
            header_size: 14,
            body: Vec::new(),
        }
    }

    /// Use a header of a given size, padding any extension with zeros.
    pub fn header_size(mut self, size: u8) -> Self {
        self.header_size = size;
        self
    }

    /// Append a definition message. Fields are `(number, size, base type)`.
    pub fn definition(self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.definition_with(local, LITTLE, global, fields, &[])
    }

    /// Append a definition message with a chosen architecture, and developer
    /// fields given as `(number, size, developer index)`.
    pub fn definition_with(
        mut self,
        local: u8,
        architecture: u8,
        global: u16,
        fields: &[(u8, u8, u8)],
        developer_fields: &[(u8, u8, u8)],
    ) -> Self {
        let developer = !developer_fields.is_empty();
        let flag = if developer { 0x20 } else { 0 };
        self.body.push(0x40 | flag | (local & 0x0F));

        let global = match architecture {
            BIG => global.to_be_bytes(),
            _ => global.to_le_bytes(),
        };
        self.body.extend_from_slice(&[0, architecture, global[0], global[1]]);

        self.body.push(fields.len() as u8);
        for &(number, size, base_type) in fields {
            self.body.extend_from_slice(&[number, size, base_type]);
        }

        if developer {
            self.body.push(developer_fields.len() as u8);
            for &(number, size, index) in developer_fields {
                self.body.extend_from_slice(&[number, size, index]);
            }
        }

        self
    }

    /// Append a data message with a normal header.
    pub fn data(mut self, local: u8, body: &[u8]) -> Self {
        self.body.push(local & 0x0F);
        self.body.extend_from_slice(body);
        self
    }

    /// Append a data message with a compressed timestamp header.
    pub fn compressed(mut self, local: u8, time_offset: u8, body: &[u8]) -> Self {
        self.body.push(0x80 | (local & 0x03) << 5 | (time_offset & 0x1F));
        self.body.extend_from_slice(body);
        self
    }

    /// Append bytes verbatim.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Finish the document, declaring a payload that includes the trailing
    /// checksum bytes.
    pub fn build(self) -> Vec<u8> {
        let payload_size = self.body.len() as u32 + 2;

        let mut out = vec![self.header_size, 0x20];
        out.extend_from_slice(&2132_u16.to_le_bytes());
        out.extend_from_slice(&payload_size.to_le_bytes());
        out.extend_from_slice(b".FIT");
        out.resize(usize::from(self.header_size.max(12)), 0);

        out.extend_from_slice(&self.body);
        out.extend_from_slice(&[0, 0]);
        out
    }
}
