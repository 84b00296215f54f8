//! Double-byte glyph resolution
//!
//! Built-in tables only cover single-byte ASCII; every other glyph lives
//! as a fixed-size bitmap block in external nonvolatile storage. Lookup
//! goes code point -> index table -> store offset, with a small FIFO cache
//! in front so repeated characters do not hit the store every time.

use crate::font::CJK_GLYPH_BYTES;
use crate::traits::{DisplayError, GlyphStore};

/// Default number of cache slots (32 bytes of glyph data each)
pub const DEFAULT_CACHE_SLOTS: usize = 16;

/// One entry of the glyph index table
///
/// The table is a linear array; entry order is irrelevant. Code points are
/// expected to be unique - the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphIndexEntry {
    /// Decoded 16-bit code point
    pub code_point: u16,
    /// Glyph slot number inside the store table; the byte address is
    /// `base_address + offset * CJK_GLYPH_BYTES`
    pub offset: u16,
}

/// A single cache slot
#[derive(Clone, Copy)]
enum CacheSlot {
    Empty,
    Occupied {
        code_point: u16,
        data: [u8; CJK_GLYPH_BYTES],
    },
}

/// Fixed-capacity FIFO glyph cache
///
/// Slots are overwritten in strict circular order; entries are never
/// individually freed. Inserting a code point that is already cached
/// updates that entry in place, so at most one slot per code point is
/// live at any time.
pub struct GlyphCache<const N: usize> {
    slots: [CacheSlot; N],
    cursor: usize,
}

impl<const N: usize> Default for GlyphCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GlyphCache<N> {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            slots: [CacheSlot::Empty; N],
            cursor: 0,
        }
    }

    /// Find the slot holding `code_point`, if cached
    fn find(&self, code_point: u16) -> Option<usize> {
        self.slots.iter().position(|slot| {
            matches!(slot, CacheSlot::Occupied { code_point: cp, .. } if *cp == code_point)
        })
    }

    /// Bitmap bytes of a slot, if occupied
    fn data(&self, slot: usize) -> Option<&[u8; CJK_GLYPH_BYTES]> {
        match &self.slots[slot] {
            CacheSlot::Occupied { data, .. } => Some(data),
            CacheSlot::Empty => None,
        }
    }

    /// Install a glyph, returning the slot it landed in
    ///
    /// An already-cached code point is updated in place; otherwise the
    /// slot under the FIFO cursor is overwritten, even if still in use,
    /// and the cursor advances.
    fn insert(&mut self, code_point: u16, data: [u8; CJK_GLYPH_BYTES]) -> usize {
        let slot = match self.find(code_point) {
            Some(existing) => existing,
            None => {
                let next = self.cursor;
                self.cursor = (self.cursor + 1) % N;
                next
            }
        };
        self.slots[slot] = CacheSlot::Occupied { code_point, data };
        slot
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, CacheSlot::Occupied { .. }))
            .count()
    }
}

/// Maps code points to glyph bitmaps, caching store reads
///
/// Owns the store handle, the index table reference and the cache; one
/// resolver per display.
pub struct GlyphResolver<S, const N: usize = DEFAULT_CACHE_SLOTS> {
    store: S,
    index: &'static [GlyphIndexEntry],
    base_address: u32,
    cache: GlyphCache<N>,
}

impl<S: GlyphStore, const N: usize> GlyphResolver<S, N> {
    /// Create a resolver over `store`, with the glyph table starting at
    /// `base_address`
    pub fn new(store: S, index: &'static [GlyphIndexEntry], base_address: u32) -> Self {
        Self {
            store,
            index,
            base_address,
            cache: GlyphCache::new(),
        }
    }

    /// Resolve a double-byte code point to its bitmap
    ///
    /// Cache hit: no store traffic. Cache miss: one index scan and, when
    /// the code point is indexed, a single store read of
    /// [`CJK_GLYPH_BYTES`] which is then installed in the cache.
    ///
    /// `Ok(None)` is the recoverable glyph-not-found condition; callers
    /// substitute a placeholder. Store failure is reported as `Err` and
    /// leaves the cache untouched.
    pub fn resolve(&mut self, code_point: u16) -> Result<Option<&[u8; CJK_GLYPH_BYTES]>, DisplayError> {
        let slot = match self.cache.find(code_point) {
            Some(hit) => hit,
            None => {
                let Some(entry) = self
                    .index
                    .iter()
                    .find(|entry| entry.code_point == code_point)
                else {
                    return Ok(None);
                };

                let address = self.base_address + entry.offset as u32 * CJK_GLYPH_BYTES as u32;
                let mut data = [0u8; CJK_GLYPH_BYTES];
                self.store.read(address, &mut data)?;
                self.cache.insert(code_point, data)
            }
        };
        Ok(self.cache.data(slot))
    }
}
