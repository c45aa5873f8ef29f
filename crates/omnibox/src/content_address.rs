//! Shape checks for peer-to-peer and content-addressed locations.
//!
//! These only decide whether text *looks like* an address of a given kind.
//! Nothing here resolves or fetches anything.

const DAT_KEY_LEN: usize = 64;

/// Upper bound on encoded identifiers we are willing to decode.
const MAX_ENCODED_LEN: usize = 256;

/// Returns `true` if `value` starts with a 64 character alphanumeric key,
/// compared case-insensitively.
pub fn has_dat_key_prefix(value: &str) -> bool {
    value.len() >= DAT_KEY_LEN
        && value.as_bytes()[..DAT_KEY_LEN]
            .iter()
            .all(|b| b.is_ascii_alphanumeric())
}

/// Returns `true` if `value` is a base58btc encoded multihash with a known
/// hash function code and a digest length matching its header.
pub fn is_multihash(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_ENCODED_LEN {
        return false;
    }
    match bs58::decode(value).into_vec() {
        Ok(bytes) => is_multihash_bytes(&bytes),
        Err(_) => false,
    }
}

/// Returns `true` for `/ipfs/<cid>` optionally followed by a path, query or fragment.
pub fn is_ipfs_path(value: &str) -> bool {
    match path_segment(value, "/ipfs/") {
        Some(cid) => is_cid(cid),
        None => false,
    }
}

/// Returns `true` for `/ipns/<name>` optionally followed by a path, query or fragment.
pub fn is_ipns_path(value: &str) -> bool {
    path_segment(value, "/ipns/").is_some()
}

/// Strips a single leading and a single trailing `/`.
pub fn strip_outer_slashes(value: &str) -> &str {
    let value = value.strip_prefix('/').unwrap_or(value);
    value.strip_suffix('/').unwrap_or(value)
}

/// Abbreviates a 64 character key as `first6..last2`. Other values are
/// returned unchanged.
pub fn pretty_hash(value: &str) -> String {
    if value.len() == DAT_KEY_LEN && value.is_ascii() {
        format!("{}..{}", &value[..6], &value[DAT_KEY_LEN - 2..])
    } else {
        value.to_string()
    }
}

fn path_segment<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(prefix)?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let segment = &rest[..end];
    (!segment.is_empty()).then_some(segment)
}

fn is_cid(value: &str) -> bool {
    if is_multihash(value) {
        return true;
    }
    // CIDv1 in the default multibase (`b` = lowercase base32).
    let Some(encoded) = value.strip_prefix('b') else {
        return false;
    };
    let Some(bytes) = decode_base32_lower(encoded) else {
        return false;
    };
    let Some((version, rest)) = read_varint(&bytes) else {
        return false;
    };
    if version != 1 {
        return false;
    }
    match read_varint(rest) {
        Some((_codec, multihash)) => is_multihash_bytes(multihash),
        None => false,
    }
}

fn is_multihash_bytes(bytes: &[u8]) -> bool {
    let Some((code, rest)) = read_varint(bytes) else {
        return false;
    };
    let Some((len, digest)) = read_varint(rest) else {
        return false;
    };
    is_known_hash_code(code) && len > 0 && digest.len() as u64 == len
}

fn is_known_hash_code(code: u64) -> bool {
    matches!(
        code,
        // sha1, sha2, sha3, shake, keccak, blake3
        0x11..=0x1e
            // dbl-sha2-256
            | 0x56
            // blake2b / blake2s
            | 0xb201..=0xb260
    )
}

/// Unsigned LEB128 as used by multiformats (at most 9 bytes).
fn read_varint(bytes: &[u8]) -> Option<(u64, &[u8])> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate().take(9) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, &bytes[i + 1..]));
        }
    }
    None
}

fn decode_base32_lower(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() || value.len() > MAX_ENCODED_LEN {
        return None;
    }

    let mut out = Vec::with_capacity(value.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for ch in value.bytes() {
        let digit = match ch {
            b'a'..=b'z' => ch - b'a',
            b'2'..=b'7' => ch - b'2' + 26,
            _ => return None,
        };
        buffer = (buffer << 5) | u32::from(digit);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID_V0: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
    const CID_V1: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

    #[test]
    fn dat_key_prefix_requires_64_alphanumerics() {
        let key = "a".repeat(64);
        assert!(has_dat_key_prefix(&key));
        assert!(has_dat_key_prefix(&format!("{}/index.html", key.to_uppercase())));
        assert!(!has_dat_key_prefix(&"a".repeat(63)));
        assert!(!has_dat_key_prefix(&format!("{}-{}", "a".repeat(30), "b".repeat(33))));
    }

    #[test]
    fn recognizes_base58_multihash() {
        assert!(is_multihash(CID_V0));
        assert!(!is_multihash("QmNotAHash"));
        assert!(!is_multihash("example.com"));
        // `0` is outside the base58 alphabet
        assert!(!is_multihash("Qm0wAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"));
        assert!(!is_multihash(""));
    }

    #[test]
    fn oversized_input_is_not_decoded() {
        let long = format!("{CID_V0}{}", "1".repeat(MAX_ENCODED_LEN));
        assert!(!is_multihash(&long));
        assert!(!is_ipfs_path(&format!("/ipfs/{long}")));
    }

    #[test]
    fn recognizes_ipfs_paths() {
        assert!(is_ipfs_path(&format!("/ipfs/{CID_V0}")));
        assert!(is_ipfs_path(&format!("/ipfs/{CID_V0}/readme.md")));
        assert!(is_ipfs_path(&format!("/ipfs/{CID_V1}")));
        assert!(!is_ipfs_path("/ipfs/"));
        assert!(!is_ipfs_path("/ipfs/not-a-cid"));
        assert!(!is_ipfs_path(CID_V0));
    }

    #[test]
    fn recognizes_ipns_paths() {
        assert!(is_ipns_path("/ipns/ipfs.io"));
        assert!(is_ipns_path("/ipns/ipfs.io/docs?x=1"));
        assert!(!is_ipns_path("/ipns/"));
        assert!(!is_ipns_path("ipns/ipfs.io"));
    }

    #[test]
    fn strips_one_slash_each_side() {
        assert_eq!(strip_outer_slashes("/abc/"), "abc");
        assert_eq!(strip_outer_slashes("//abc//"), "/abc/");
        assert_eq!(strip_outer_slashes("abc"), "abc");
    }

    #[test]
    fn pretty_hash_abbreviates_keys_only() {
        let key = format!("abcdef{}yz", "0".repeat(56));
        assert_eq!(pretty_hash(&key), "abcdef..yz");
        assert_eq!(pretty_hash("example.com"), "example.com");
    }
}
