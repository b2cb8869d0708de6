//! Draw instructions handed to the rendering backend
//!
//! The core never talks to the GPU. Each frame it produces a [`DrawList`];
//! the backend issues one draw call per instruction using the model's vertex
//! range from the packed model store.

use crate::foundation::math::{Color, Mat4, Vector3};
use crate::scene::ModelId;

/// One model instance to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    /// Model to draw
    pub model: ModelId,

    /// World position of the instance
    pub position: Vector3,

    /// Flat color applied to the whole instance
    pub tint: Color,
}

impl DrawInstruction {
    /// Create a new draw instruction
    pub fn new(model: ModelId, position: Vector3, tint: Color) -> Self {
        Self {
            model,
            position,
            tint,
        }
    }

    /// Model-to-world matrix (pure translation)
    pub fn model_matrix(&self) -> Mat4 {
        let translation: nalgebra::Vector3<f32> = self.position.into();
        Mat4::new_translation(&translation)
    }
}

/// Ordered instructions for one frame
///
/// Kept by the engine between frames so the allocation is reused.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Instructions in submission order
    pub instructions: Vec<DrawInstruction>,
}

impl DrawList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
        }
    }

    /// Append an instruction
    pub fn push(&mut self, instruction: DrawInstruction) {
        self.instructions.push(instruction);
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Remove every instruction, keeping the allocation
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Iterate in submission order
    pub fn iter(&self) -> std::slice::Iter<'_, DrawInstruction> {
        self.instructions.iter()
    }

    /// Number of instructions drawn with exactly `tint`
    pub fn count_with_tint(&self, tint: Color) -> usize {
        self.instructions.iter().filter(|i| i.tint == tint).count()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawInstruction;
    type IntoIter = std::slice::Iter<'a, DrawInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_model_matrix_translates() {
        let instruction = DrawInstruction::new(ModelId(0), Vector3::new(2.0, 3.0, -1.0), Color::WHITE);
        let moved = instruction.model_matrix().transform_point(&Point3::new(0.5, 0.5, 0.5));

        assert_eq!(moved, Point3::new(2.5, 3.5, -0.5));
    }

    #[test]
    fn test_draw_list_basics() {
        let mut list = DrawList::with_capacity(4);
        assert!(list.is_empty());

        list.push(DrawInstruction::new(ModelId(0), Vector3::ZERO, Color::WHITE));
        list.push(DrawInstruction::new(ModelId(0), Vector3::UNIT_X, Color::gray(0.5)));
        list.push(DrawInstruction::new(ModelId(1), Vector3::UNIT_Y, Color::WHITE));

        assert_eq!(list.len(), 3);
        assert_eq!(list.count_with_tint(Color::WHITE), 2);
        assert_eq!((&list).into_iter().filter(|i| i.model == ModelId(1)).count(), 1);

        list.clear();
        assert!(list.is_empty());
    }
}
