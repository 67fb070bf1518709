// crates/rffs-core/src/format/checksum.rs

/// crc32 of an encoded record, for quick comparison in tooling output.
pub fn record_crc32(record: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(record);
    h.finalize()
}

/// First 16 bytes of blake3 over an encoded record.
pub fn record_digest_16(record: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(record).as_bytes()[..16]);
    out
}

pub fn to_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
