//! Indexed-palette container encoder and chunk reader.
//!
//! The output is a plain PNG with colour type 3 (indexed) at bit depth 1 or
//! 2: signature, `IHDR`, `PLTE`, a single `IDAT` and `IEND`. Every chunk is
//! written by hand; only the deflate step is delegated to `miniz_oxide`.

use eink_tone::{BitDepth, PixelIndexBuffer};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

use super::crc::chunk_crc;
use crate::error::EncodeError;

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const COLOR_TYPE_INDEXED: u8 = 3;
const COMPRESSION_DEFLATE: u8 = 0;
const FILTER_METHOD_ADAPTIVE: u8 = 0;
const INTERLACE_NONE: u8 = 0;

/// Row filter selector written in front of every packed row.
const FILTER_NONE: u8 = 0;

/// One chunk as read back from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: [u8; 4],
    pub data: Vec<u8>,
    /// Stored trailer, already verified against the computed CRC.
    pub crc: u32,
}

impl Chunk {
    /// Type tag as text, e.g. `"IHDR"`.
    pub fn kind_str(&self) -> String {
        String::from_utf8_lossy(&self.kind).into_owned()
    }
}

/// Encode an index buffer as an indexed PNG.
///
/// # Example
///
/// ```
/// use eink_tone::{BitDepth, PixelIndexBuffer};
/// use inkpress::rendering::{encode_indexed, read_chunks};
///
/// let indices = PixelIndexBuffer::new(2, 2, BitDepth::TwoPixelBit, vec![0, 1, 2, 3]).unwrap();
/// let bytes = encode_indexed(&indices).unwrap();
///
/// let kinds: Vec<String> = read_chunks(&bytes).unwrap().iter().map(|c| c.kind_str()).collect();
/// assert_eq!(kinds, ["IHDR", "PLTE", "IDAT", "IEND"]);
/// ```
pub fn encode_indexed(indices: &PixelIndexBuffer) -> Result<Vec<u8>, EncodeError> {
    if indices.is_empty() {
        return Err(EncodeError::EmptyImage);
    }
    let (width, height) = (indices.width(), indices.height());
    let overflow = || EncodeError::DimensionOverflow { width, height };
    let width_u32 = u32::try_from(width).map_err(|_| overflow())?;
    let height_u32 = u32::try_from(height).map_err(|_| overflow())?;

    let depth = indices.depth();
    let raw = pack_rows(indices);
    let compressed = compress_to_vec_zlib(&raw, CompressionLevel::BestCompression as u8);

    let mut out = Vec::with_capacity(SIGNATURE.len() + compressed.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &header_data(width_u32, height_u32, depth));
    write_chunk(&mut out, b"PLTE", &palette_data(depth));
    write_chunk(&mut out, b"IDAT", &compressed);
    write_chunk(&mut out, b"IEND", &[]);

    tracing::debug!(
        width,
        height,
        bits = depth.bits(),
        raw = raw.len(),
        compressed = compressed.len(),
        bytes = out.len(),
        "Encoded indexed container"
    );
    Ok(out)
}

/// Encode raw palette indices with a numeric bit depth.
///
/// Convenience for callers that carry the depth as a plain number.
pub fn encode_raw(
    width: usize,
    height: usize,
    bits: u8,
    indices: Vec<u8>,
) -> Result<Vec<u8>, EncodeError> {
    let depth = BitDepth::from_bits(bits).map_err(|_| EncodeError::UnsupportedDepth(bits))?;
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage);
    }
    let buffer = PixelIndexBuffer::new(width, height, depth, indices)
        .map_err(|e| EncodeError::InvalidIndices(e.to_string()))?;
    encode_indexed(&buffer)
}

/// 13-byte `IHDR` payload.
fn header_data(width: u32, height: u32, depth: BitDepth) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = depth.bits();
    data[9] = COLOR_TYPE_INDEXED;
    data[10] = COMPRESSION_DEFLATE;
    data[11] = FILTER_METHOD_ADAPTIVE;
    data[12] = INTERLACE_NONE;
    data
}

/// `PLTE` payload: the depth's fixed greys as RGB triples.
pub fn palette_data(depth: BitDepth) -> Vec<u8> {
    depth.palette().iter().flatten().copied().collect()
}

/// Pack indices MSB-first, each row prefixed by a no-filter selector byte.
pub fn pack_rows(indices: &PixelIndexBuffer) -> Vec<u8> {
    let depth = indices.depth();
    let bits = depth.bits();
    let pixels_per_byte = depth.pixels_per_byte();
    let row_bytes = depth.row_bytes(indices.width());
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity((row_bytes + 1) * indices.height());

    for row in indices.rows() {
        packed.push(FILTER_NONE);
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let slot = i % pixels_per_byte;
            let shift = (8 - bits) - slot as u8 * bits;
            byte |= (idx & mask) << shift;

            if slot == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

/// Append `length | type | data | crc` to `out`.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    // Chunk payloads here are bounded by the panel size, far below u32::MAX.
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(chunk_type, data).to_be_bytes());
}

/// Parse a container, verifying the signature and every chunk CRC.
///
/// Stops after `IEND`; trailing bytes are ignored.
pub fn read_chunks(bytes: &[u8]) -> Result<Vec<Chunk>, EncodeError> {
    let signature = bytes
        .get(..SIGNATURE.len())
        .ok_or(EncodeError::Truncated {
            offset: bytes.len(),
        })?;
    if signature != SIGNATURE {
        return Err(EncodeError::BadSignature);
    }

    let mut chunks = Vec::new();
    let mut offset = SIGNATURE.len();
    while offset < bytes.len() {
        let truncated = EncodeError::Truncated { offset };
        let head = bytes.get(offset..offset + 8).ok_or(truncated)?;
        let length = u32::from_be_bytes([head[0], head[1], head[2], head[3]]) as usize;
        let kind = [head[4], head[5], head[6], head[7]];

        let data_start = offset + 8;
        let data_end = data_start
            .checked_add(length)
            .ok_or(EncodeError::Truncated { offset })?;
        let data = bytes
            .get(data_start..data_end)
            .ok_or(EncodeError::Truncated { offset })?;
        let trailer = bytes
            .get(data_end..data_end + 4)
            .ok_or(EncodeError::Truncated { offset: data_end })?;
        let stored = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

        let computed = chunk_crc(&kind, data);
        if computed != stored {
            return Err(EncodeError::CrcMismatch {
                chunk: String::from_utf8_lossy(&kind).into_owned(),
                expected: computed,
                actual: stored,
            });
        }

        chunks.push(Chunk {
            kind,
            data: data.to_vec(),
            crc: stored,
        });
        offset = data_end + 4;
        if &kind == b"IEND" {
            break;
        }
    }

    Ok(chunks)
}
