use thiserror::Error;

use crate::host::RawTextureId;
use crate::interface::TextureHandle;

/// Recoverable texture operation failures.
///
/// Reported as plain result values at the call site; nothing crosses the
/// toolkit boundary as a panic.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read texture source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode texture source: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid texture dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} rgba8")]
    PixelSizeMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    #[error("host refused allocation of a {width}x{height} texture")]
    Allocation { width: u32, height: u32 },
}

#[derive(Debug)]
struct Slot {
    /// Bumped on every release; a handle is live only while its generation
    /// matches the slot's.
    generation: u32,
    texture: Option<RawTextureId>,
}

/// Owner of toolkit-visible texture handles.
///
/// A slot arena keyed by `(index, generation)`. Slots are recycled after
/// release, but the generation bump guarantees a released handle never
/// resolves again — stale use is caught here instead of aliasing a newer
/// texture.
///
/// The registry tracks the mapping only; creating and destroying the
/// underlying host resources is the caller's job (see
/// [`RenderBridge`](super::RenderBridge)).
#[derive(Debug, Default)]
pub struct TextureRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a host texture and mints a handle for it.
    pub fn insert(&mut self, texture: RawTextureId) -> TextureHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.texture.is_none());
            slot.texture = Some(texture);
            TextureHandle { index, generation: slot.generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, texture: Some(texture) });
            TextureHandle { index, generation: 0 }
        }
    }

    /// Resolves a handle to its host texture, or `None` if the handle is
    /// stale or was never minted here.
    pub fn resolve(&self, handle: TextureHandle) -> Option<RawTextureId> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.texture
    }

    /// Unregisters a handle, returning the host texture it referred to.
    ///
    /// The slot is recycled for later inserts under a new generation.
    /// Removing a stale handle returns `None` and changes nothing.
    pub fn remove(&mut self, handle: TextureHandle) -> Option<RawTextureId> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let texture = slot.texture.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(texture)
    }

    /// Number of live (inserted, not yet removed) textures.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── insert/resolve ────────────────────────────────────────────────────

    #[test]
    fn insert_then_resolve() {
        let mut reg = TextureRegistry::new();
        let h = reg.insert(7);
        assert_eq!(reg.resolve(h), Some(7));
        assert_eq!(reg.live(), 1);
    }

    #[test]
    fn handles_are_distinct() {
        let mut reg = TextureRegistry::new();
        let a = reg.insert(1);
        let b = reg.insert(2);
        assert_ne!(a, b);
        assert_eq!(reg.resolve(a), Some(1));
        assert_eq!(reg.resolve(b), Some(2));
    }

    // ── remove/staleness ──────────────────────────────────────────────────

    #[test]
    fn remove_returns_texture_and_drops_live_count() {
        let mut reg = TextureRegistry::new();
        let h = reg.insert(9);
        assert_eq!(reg.remove(h), Some(9));
        assert_eq!(reg.live(), 0);
        assert_eq!(reg.resolve(h), None);
    }

    #[test]
    fn removed_handle_does_not_alias_recycled_slot() {
        let mut reg = TextureRegistry::new();
        let old = reg.insert(1);
        reg.remove(old);

        // Recycles the same slot index under a new generation.
        let new = reg.insert(2);
        assert_eq!(new.index, old.index);
        assert_eq!(reg.resolve(old), None);
        assert_eq!(reg.resolve(new), Some(2));
    }

    #[test]
    fn double_remove_is_inert() {
        let mut reg = TextureRegistry::new();
        let h = reg.insert(3);
        assert_eq!(reg.remove(h), Some(3));
        assert_eq!(reg.remove(h), None);
        assert_eq!(reg.live(), 0);
    }

    #[test]
    fn foreign_handle_resolves_to_none() {
        let reg = TextureRegistry::new();
        let fake = TextureHandle { index: 42, generation: 0 };
        assert_eq!(reg.resolve(fake), None);
    }
}
