//! CRC-32 for container chunks.
//!
//! Reflected CRC-32 with polynomial `0xEDB88320`, the checksum PNG uses for
//! every chunk. The 256-entry table is computed at compile time and shared
//! read-only by all encoder calls.

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-indexed CRC-32 table.
pub static CRC_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Feed `bytes` into a running (pre-inverted) CRC register.
#[inline]
pub fn update(crc: u32, bytes: &[u8]) -> u32 {
    bytes.iter().fold(crc, |c, &b| {
        CRC_TABLE[((c ^ b as u32) & 0xff) as usize] ^ (c >> 8)
    })
}

/// CRC-32 of a byte slice.
pub fn crc32(bytes: &[u8]) -> u32 {
    update(0xFFFF_FFFF, bytes) ^ 0xFFFF_FFFF
}

/// CRC-32 over a chunk's type tag followed by its data.
pub fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    update(update(0xFFFF_FFFF, chunk_type), data) ^ 0xFFFF_FFFF
}
