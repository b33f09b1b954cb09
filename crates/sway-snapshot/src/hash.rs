//! Lattice fingerprinting.
//!
//! Uses FNV-1a over the side length and every cell's bit pattern. Not
//! cryptographically secure; meant for fast equality checks between runs.

use sway_core::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash a lattice.
///
/// Two lattices hash equal when they have the same side and bit-identical
/// cells, so `0.0` and `-0.0` hash differently.
pub fn lattice_hash(lattice: &Lattice) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, lattice.side() as u64);
    for &v in lattice.values() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}
