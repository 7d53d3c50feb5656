//! Pixel value and the 64-slot color cache shared by both engines.

/// Number of slots in the color cache.
pub(crate) const CACHE_SIZE: usize = 64;

/// One RGBA pixel. 3-channel streams carry an implicit alpha of 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Starting value of both engines' previous-pixel state.
    pub(crate) const OPAQUE_BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub(crate) const ZERO: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Cache slot for this pixel. The multipliers are part of the wire
    /// format: the slot number a decoder computes must match the one the
    /// encoder used, so this exact formula is load-bearing.
    pub(crate) const fn cache_index(self) -> usize {
        (self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11)
            % CACHE_SIZE
    }
}

/// Content-addressed lookback table of recently seen pixels.
///
/// Scoped to a single encode or decode call. Seeded to the zero pixel in
/// every slot, with the opaque-black starting pixel placed at its natural
/// slot so that a back-reference to it resolves before it is ever written.
#[derive(Clone, Debug)]
pub(crate) struct ColorCache {
    slots: [Rgba; CACHE_SIZE],
}

impl ColorCache {
    pub(crate) fn new() -> ColorCache {
        let mut slots = [Rgba::ZERO; CACHE_SIZE];
        slots[Rgba::OPAQUE_BLACK.cache_index()] = Rgba::OPAQUE_BLACK;
        ColorCache { slots }
    }

    #[inline]
    pub(crate) fn get(&self, slot: usize) -> Rgba {
        self.slots[slot & (CACHE_SIZE - 1)]
    }

    #[inline]
    pub(crate) fn put(&mut self, px: Rgba) -> usize {
        let slot = px.cache_index();
        self.slots[slot] = px;
        slot
    }

    /// Whether `px` already occupies its own slot.
    #[inline]
    pub(crate) fn contains(&self, px: Rgba) -> bool {
        self.slots[px.cache_index()] == px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_formula() {
        let px = Rgba {
            r: 10,
            g: 20,
            b: 30,
            a: 255,
        };
        assert_eq!(px.cache_index(), (10 * 3 + 20 * 5 + 30 * 7 + 255 * 11) % 64);
    }

    #[test]
    fn cache_seeds_opaque_black_at_natural_slot() {
        let cache = ColorCache::new();
        let slot = Rgba::OPAQUE_BLACK.cache_index();
        assert_eq!(slot, (255 * 11) % 64);
        assert_eq!(cache.get(slot), Rgba::OPAQUE_BLACK);
        assert!(cache.contains(Rgba::OPAQUE_BLACK));
        // every other slot holds the zero pixel
        for i in (0..CACHE_SIZE).filter(|&i| i != slot) {
            assert_eq!(cache.get(i), Rgba::ZERO);
        }
    }

    #[test]
    fn put_then_contains() {
        let mut cache = ColorCache::new();
        let px = Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 4,
        };
        assert!(!cache.contains(px));
        let slot = cache.put(px);
        assert_eq!(cache.get(slot), px);
        assert!(cache.contains(px));
    }
}
