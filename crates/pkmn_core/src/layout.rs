use crate::error::CoreError;

/// Half-open byte range into an owned save buffer. Views and record handles
/// are expressed as ranges instead of borrowed pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Sub-range relative to this range's start.
    pub const fn sub(&self, offset: usize, len: usize) -> Self {
        Self::at(self.start + offset, len)
    }

    /// The `index`th element of `len`-byte elements packed from the start.
    pub const fn element(&self, index: usize, len: usize) -> Self {
        Self::at(self.start + index * len, len)
    }

    pub fn slice<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8], CoreError> {
        buf.get(self.start..self.end).ok_or(CoreError::InvalidLength {
            what: "byte range",
            expected: self.end,
            actual: buf.len(),
        })
    }

    pub fn slice_mut<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], CoreError> {
        let actual = buf.len();
        buf.get_mut(self.start..self.end)
            .ok_or(CoreError::InvalidLength {
                what: "byte range",
                expected: self.end,
                actual,
            })
    }
}

// Little-endian field access over fixed layouts. Offsets come from layout
// tables sized against the owning buffer, so slicing cannot go out of bounds.

pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

pub fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Extracts `width` bits starting at bit `shift`.
pub const fn bits(value: u32, shift: u32, width: u32) -> u32 {
    (value >> shift) & mask(width)
}

/// Replaces `width` bits starting at bit `shift`; excess bits of `field` are dropped.
pub const fn with_bits(value: u32, shift: u32, width: u32, field: u32) -> u32 {
    let m = mask(width) << shift;
    (value & !m) | ((field << shift) & m)
}

const fn mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

pub fn bit(buf: &[u8], index: usize) -> bool {
    buf[index / 8] & (1 << (index % 8)) != 0
}

pub fn set_bit(buf: &mut [u8], index: usize, on: bool) {
    let b = &mut buf[index / 8];
    if on {
        *b |= 1 << (index % 8);
    } else {
        *b &= !(1 << (index % 8));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_fields_replace_only_their_window() {
        let v = with_bits(0xFFFF_FFFF, 5, 5, 0);
        assert_eq!(v, 0xFFFF_FC1F);
        assert_eq!(bits(with_bits(0, 25, 5, 31), 25, 5), 31);
        assert_eq!(with_bits(0, 0, 5, 0xFF), 0x1F);
    }

    #[test]
    fn range_slicing_reports_short_buffers() {
        let buf = [0u8; 4];
        assert!(ByteRange::at(2, 4).slice(&buf).is_err());
        assert_eq!(ByteRange::at(1, 2).slice(&buf).map(<[u8]>::len), Ok(2));
    }
}
