//! Fixed-size key derivation from textual identifiers.
//!
//! [`KeyArray`] turns a short string into exactly `N` bytes suitable
//! for fixed-width map keys: input bytes are copied front-to-back
//! with zero bytes skipped, and the unused tail is filled with an
//! FNV-1a hash chain so distinct short inputs keep distinct,
//! deterministic keys. Comparison is plain lexicographic byte order.

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET: u64 = 14695981039346656037;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 1099511628211;

#[inline(always)]
const fn fnv1a_step(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| fnv1a_step(hash, b))
}

/// Fixed-size byte key derived from text, 8-byte aligned.
///
/// # Type Parameters
/// * `N` - Key size in bytes, must be greater than zero
#[repr(align(8))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyArray<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> KeyArray<N> {
    /// Creates an all-zero key.
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "KeyArray requires N > 0") }
        Self { bytes: [0u8; N] }
    }

    /// Derives a key from a narrow string. See
    /// [`set_text`](Self::set_text).
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        let mut key = Self::new();
        key.set_text(s);
        key
    }

    /// Derives a key from wide-string units. See
    /// [`set_wide`](Self::set_wide).
    #[must_use]
    pub fn from_wide(units: &[u16]) -> Self {
        let mut key = Self::new();
        key.set_wide(units);
        key
    }

    /// Rederives the key from a narrow string: clear, copy the first
    /// `min(len, N)` input bytes skipping zeros, then fill the tail
    /// with the hash chain. An empty (or all-zero) input leaves the
    /// key all-zero.
    pub fn set_text(&mut self, s: &str) {
        self.bytes = [0u8; N];
        let limit = s.len().min(N);
        let mut filled = 0;
        for &b in &s.as_bytes()[..limit] {
            if b == 0 {
                continue;
            }
            self.bytes[filled] = b;
            filled += 1;
        }
        self.derive_tail(filled);
    }

    /// Rederives the key from wide-string units: clear, split each
    /// unit into its two stream-order bytes, copy skipping zeros until
    /// the array fills or input runs out, then fill the tail with the
    /// hash chain.
    pub fn set_wide(&mut self, units: &[u16]) {
        self.bytes = [0u8; N];
        let mut filled = 0;
        'outer: for &unit in units {
            for b in unit.to_le_bytes() {
                if b == 0 {
                    continue;
                }
                self.bytes[filled] = b;
                filled += 1;
                if filled == N {
                    break 'outer;
                }
            }
        }
        self.derive_tail(filled);
    }

    /// Fills slots past `filled` with a zero terminator followed by
    /// the FNV-1a chain: each padding slot updates the hash with the
    /// most recently written byte and stores the low byte of the hash.
    fn derive_tail(&mut self, filled: usize) {
        if filled == 0 {
            return;
        }
        let mut hash = fnv1a(&self.bytes[..filled]);
        let mut at = filled;
        if at < N {
            self.bytes[at] = 0;
            at += 1;
        }
        while at < N {
            hash = fnv1a_step(hash, self.bytes[at - 1]);
            self.bytes[at] = hash as u8;
            at += 1;
        }
    }

    /// Returns the key bytes.
    #[inline(always)]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// FNV-1a hash over all `N` bytes.
    #[must_use]
    pub fn hash64(&self) -> u64 {
        fnv1a(&self.bytes)
    }

    /// Resets every byte to zero.
    pub fn clear(&mut self) {
        self.bytes = [0u8; N];
    }

    /// Fills the key with an arithmetic byte sequence starting at
    /// `initial` and stepping by `step`, wrapping.
    pub fn fill_with_range(&mut self, initial: u8, step: u8) {
        let mut value = initial;
        for slot in &mut self.bytes {
            *slot = value;
            value = value.wrapping_add(step);
        }
    }

    /// Returns the bytes up to the first NUL as text, lossily decoded.
    #[must_use]
    pub fn text(&self) -> String {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }

    /// Returns the first `min(count, N)` bytes as text, lossily
    /// decoded.
    #[must_use]
    pub fn text_n(&self, count: usize) -> String {
        String::from_utf8_lossy(&self.bytes[..count.min(N)]).into_owned()
    }
}

impl<const N: usize> Default for KeyArray<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for KeyArray<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> std::fmt::Debug for KeyArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyArray")
            .field("len", &N)
            .field("text", &self.text())
            .finish()
    }
}
