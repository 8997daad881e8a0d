use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Opaque, generation-checked reference to one live chart.
///
/// A handle stays unique for the registry's lifetime: once its chart is
/// disposed the slot may be reused, but under a new generation, so the old
/// handle never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle {
    index: u32,
    generation: u32,
}

impl ViewHandle {
    /// Packs the handle into the integer form handed to the host.
    #[must_use]
    pub fn to_raw(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self {
            index: raw as u32,
            generation: (raw >> 32) as u32,
        }
    }

    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug)]
struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    fn slot(&self, handle: ViewHandle) -> Option<&Slot<T>> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.value.is_some())
    }

    fn slot_mut(&mut self, handle: ViewHandle) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.value.is_some())
    }
}

/// Thread-safe table of live chart instances keyed by `ViewHandle`.
///
/// Every operation runs under one mutex and is atomic on its own; no ordering
/// is promised between operations on different handles.
#[derive(Debug)]
pub struct ChartViewRegistry<T> {
    inner: Mutex<Arena<T>>,
}

impl<T> Default for ChartViewRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChartViewRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Arena {
                slots: Vec::new(),
                free: Vec::new(),
                len: 0,
            }),
        }
    }

    // Values are plain data replaced wholesale, so a panic in another caller
    // cannot leave a slot half-written.
    fn arena(&self) -> MutexGuard<'_, Arena<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, value: T) -> ViewHandle {
        let mut arena = self.arena();
        arena.len += 1;

        if let Some(index) = arena.free.pop() {
            let slot = &mut arena.slots[index as usize];
            slot.value = Some(value);
            let handle = ViewHandle {
                index,
                generation: slot.generation,
            };
            trace!(index, generation = handle.generation, "reused registry slot");
            return handle;
        }

        let index = u32::try_from(arena.slots.len()).unwrap_or(u32::MAX);
        arena.slots.push(Slot {
            generation: 1,
            value: Some(value),
        });
        trace!(index, "allocated registry slot");
        ViewHandle {
            index,
            generation: 1,
        }
    }

    /// Removes and returns the instance; `None` for unknown or stale handles.
    pub fn remove(&self, handle: ViewHandle) -> Option<T> {
        let mut arena = self.arena();
        let slot = arena.slot_mut(handle)?;
        let value = slot.value.take();
        slot.generation = match slot.generation.wrapping_add(1) {
            0 => 1,
            next => next,
        };
        arena.free.push(handle.index);
        arena.len -= 1;
        value
    }

    #[must_use]
    pub fn contains(&self, handle: ViewHandle) -> bool {
        self.arena().slot(handle).is_some()
    }

    /// Runs `f` on the live instance behind `handle` while holding the lock.
    pub fn with_instance<U>(&self, handle: ViewHandle, f: impl FnOnce(&T) -> U) -> Option<U> {
        let arena = self.arena();
        arena.slot(handle).and_then(|slot| slot.value.as_ref()).map(f)
    }

    /// Mutable variant of `with_instance`.
    pub fn with_instance_mut<U>(
        &self,
        handle: ViewHandle,
        f: impl FnOnce(&mut T) -> U,
    ) -> Option<U> {
        let mut arena = self.arena();
        arena
            .slot_mut(handle)
            .and_then(|slot| slot.value.as_mut())
            .map(f)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena().len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
