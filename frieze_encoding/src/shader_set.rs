// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse tables resolving an enumerated rendering mode to a shader.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::blend::{BlendMode, FillRule};

/// A small dense enumeration usable as a [`ShaderModeSet`] key.
pub trait ShaderMode: Copy {
    /// Slot index of the mode, starting at 0.
    fn index(self) -> usize;
}

struct Entry<S> {
    shader: Option<Arc<S>>,
    mode_data: u64,
}

// Manual impls: the derives would demand `S: Clone + Default`, but the
// shader type itself is opaque and only ever held behind an `Arc`.
impl<S> Clone for Entry<S> {
    fn clone(&self) -> Self {
        Self {
            shader: self.shader.clone(),
            mode_data: self.mode_data,
        }
    }
}

impl<S> Default for Entry<S> {
    fn default() -> Self {
        Self {
            shader: None,
            mode_data: 0,
        }
    }
}

/// A mapping from a mode enumeration `M` to a shader of type `S` plus a
/// packed auxiliary value.
///
/// Registries are built during backend setup and read thereafter.
/// Querying a mode that was never registered, including intermediate
/// slots created by growth, is normal control flow and yields the null
/// entry (`None` shader, zero mode data). Cloning duplicates every slot;
/// two sets never alias the same storage, though the shaders themselves
/// stay shared through their `Arc`s.
pub struct ShaderModeSet<M, S> {
    entries: Vec<Entry<S>>,
    _mode: PhantomData<M>,
}

/// Blend shader table, one slot per Porter-Duff mode. The auxiliary
/// value is a packed [`crate::Blend`].
pub type BlendShaderSet<S> = ShaderModeSet<BlendMode, S>;

/// Fill shader table, one slot per fill rule.
pub type FillShaderSet<S> = ShaderModeSet<FillRule, S>;

impl<M: ShaderMode, S> ShaderModeSet<M, S> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            _mode: PhantomData,
        }
    }

    /// Returns the shader registered for `mode`, or `None` if the mode
    /// is beyond the registered range or its slot was never filled.
    pub fn shader(&self, mode: M) -> Option<&Arc<S>> {
        self.entries.get(mode.index()).and_then(|e| e.shader.as_ref())
    }

    /// Returns the auxiliary value registered for `mode`, or 0.
    ///
    /// Independent of whether the slot holds a shader.
    pub fn mode_data(&self, mode: M) -> u64 {
        self.entries.get(mode.index()).map_or(0, |e| e.mode_data)
    }

    /// Registers a shader and its auxiliary value for `mode`, growing
    /// the table with null entries as needed. Chainable:
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use frieze_encoding::{Blend, BlendMode, BlendShaderSet};
    /// # struct GlProgram;
    /// # let (src_over, clear) = (Arc::new(GlProgram), Arc::new(GlProgram));
    /// let mut set = BlendShaderSet::new();
    /// set.register(BlendMode::SrcOver, Blend::default().packed(), src_over)
    ///     .register(BlendMode::Clear, 0, clear);
    /// ```
    pub fn register(&mut self, mode: M, mode_data: u64, shader: Arc<S>) -> &mut Self {
        let index = mode.index();
        if index >= self.entries.len() {
            self.entries.resize_with(index + 1, Entry::default);
        } else if self.entries[index].shader.is_some() {
            log::warn!("overwriting shader registered at mode index {index}");
        }
        self.entries[index] = Entry {
            shader: Some(shader),
            mode_data,
        };
        self
    }

    /// Number of allocated slots, which can exceed the number of
    /// explicitly registered modes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slots have been allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: ShaderMode, S> Default for ShaderModeSet<M, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, S> Clone for ShaderModeSet<M, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _mode: PhantomData,
        }
    }
}
