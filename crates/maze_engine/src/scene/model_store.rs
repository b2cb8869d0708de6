//! Packed vertex storage shared by every loaded model
//!
//! All model geometry lives in one contiguous `f32` buffer so the rendering
//! backend can upload it once and address each model by vertex range.

use crate::foundation::math::Vector3;
use serde::{Deserialize, Serialize};

/// Scalars per vertex: position (3), normal (3), texture coordinate (2)
pub const FLOATS_PER_VERTEX: usize = 8;

/// Index of a model in load order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub usize);

impl ModelId {
    /// Raw index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Contiguous vertex range of one model inside the packed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRange {
    /// First vertex of the model
    pub start: usize,
    /// Number of vertices in the model
    pub count: usize,
}

impl ModelRange {
    /// One past the last vertex
    pub const fn end(&self) -> usize {
        self.start + self.count
    }
}

/// Decoded view of one packed vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Object-space position
    pub position: Vector3,
    /// Surface normal
    pub normal: Vector3,
    /// Texture coordinate (u, v)
    pub tex_coord: [f32; 2],
}

impl Vertex {
    fn from_floats(f: &[f32]) -> Self {
        Self {
            position: Vector3::new(f[0], f[1], f[2]),
            normal: Vector3::new(f[3], f[4], f[5]),
            tex_coord: [f[6], f[7]],
        }
    }
}

/// Append-only store of every model's vertices plus per-model start indices
///
/// Model ids are assigned in load order and never change. Each model's vertex
/// count is the distance to the next model's start (or to the end of the
/// buffer for the last model).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedModelStore {
    data: Vec<f32>,
    start_vertices: Vec<usize>,
}

impl PackedModelStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one model's packed vertex floats and return its id.
    ///
    /// `floats.len()` must be a multiple of [`FLOATS_PER_VERTEX`]; the model
    /// loader guarantees this before calling.
    pub fn push_model(&mut self, floats: &[f32]) -> ModelId {
        debug_assert_eq!(floats.len() % FLOATS_PER_VERTEX, 0);
        let id = ModelId(self.start_vertices.len());
        self.start_vertices.push(self.vertex_count());
        self.data.extend_from_slice(floats);
        id
    }

    /// Total number of vertices across all models
    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    /// Number of models loaded so far
    pub fn model_count(&self) -> usize {
        self.start_vertices.len()
    }

    /// Start vertex of every model, indexed by model id
    pub fn start_vertices(&self) -> &[usize] {
        &self.start_vertices
    }

    /// Vertex range for `id`, `None` for an unknown model
    pub fn model_range(&self, id: ModelId) -> Option<ModelRange> {
        let start = *self.start_vertices.get(id.index())?;
        let end = self
            .start_vertices
            .get(id.index() + 1)
            .copied()
            .unwrap_or_else(|| self.vertex_count());
        Some(ModelRange {
            start,
            count: end - start,
        })
    }

    /// Packed floats for `id`
    pub fn model_floats(&self, id: ModelId) -> Option<&[f32]> {
        let range = self.model_range(id)?;
        self.data
            .get(range.start * FLOATS_PER_VERTEX..range.end() * FLOATS_PER_VERTEX)
    }

    /// Decode vertex `index` of the packed buffer
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        let offset = index.checked_mul(FLOATS_PER_VERTEX)?;
        self.data
            .get(offset..offset + FLOATS_PER_VERTEX)
            .map(Vertex::from_floats)
    }

    /// The whole packed buffer
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The whole packed buffer as bytes, ready for a vertex-buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(count: usize, seed: f32) -> Vec<f32> {
        (0..count * FLOATS_PER_VERTEX).map(|i| seed + i as f32).collect()
    }

    #[test]
    fn test_push_assigns_ids_and_starts_in_order() {
        let mut store = PackedModelStore::new();
        let cube = store.push_model(&vertices(3, 0.0));
        let key = store.push_model(&vertices(2, 100.0));

        assert_eq!(cube, ModelId(0));
        assert_eq!(key, ModelId(1));
        assert_eq!(store.model_count(), 2);
        assert_eq!(store.vertex_count(), 5);
        assert_eq!(store.start_vertices(), &[0, 3]);
        assert_eq!(store.model_range(cube), Some(ModelRange { start: 0, count: 3 }));
        assert_eq!(store.model_range(key), Some(ModelRange { start: 3, count: 2 }));
        assert_eq!(store.model_range(ModelId(2)), None);
    }

    #[test]
    fn test_model_floats_and_vertex_view() {
        let mut store = PackedModelStore::new();
        store.push_model(&vertices(1, 0.0));
        let second = store.push_model(&vertices(1, 10.0));

        assert_eq!(store.model_floats(second), Some(&vertices(1, 10.0)[..]));

        let v = store.vertex(1).unwrap();
        assert_eq!(v.position, Vector3::new(10.0, 11.0, 12.0));
        assert_eq!(v.normal, Vector3::new(13.0, 14.0, 15.0));
        assert_eq!(v.tex_coord, [16.0, 17.0]);
        assert_eq!(store.vertex(2), None);
    }

    #[test]
    fn test_empty_model_keeps_ranges_consistent() {
        let mut store = PackedModelStore::new();
        let empty = store.push_model(&[]);
        let next = store.push_model(&vertices(2, 0.0));

        assert_eq!(store.model_range(empty), Some(ModelRange { start: 0, count: 0 }));
        assert_eq!(store.model_range(next), Some(ModelRange { start: 0, count: 2 }));
    }

    #[test]
    fn test_as_bytes_length() {
        let mut store = PackedModelStore::new();
        store.push_model(&vertices(2, 0.0));

        assert_eq!(store.as_bytes().len(), 2 * FLOATS_PER_VERTEX * std::mem::size_of::<f32>());
    }
}
