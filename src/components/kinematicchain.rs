//! Kinematic bone chain stored as an arena.
//!
//! Bones are records in a `Vec`, each holding an optional parent index;
//! joint and tip positions are recovered by index-chasing from the root
//! instead of walking parent/child pointers. The arena enforces at
//! construction time that every bone is claimed as a child at most once, so
//! traversal never needs a runtime "already has a child" check.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// One bone record: an offset vector from its joint to its tip, plus the
/// oscillation parameters the motion system animates it with.
#[derive(Clone, Copy, Debug)]
pub struct Bone {
    /// Offset from the bone's joint to its tip, in world units.
    pub vector: Vector2,
    /// Index of the parent bone, `None` for the root.
    pub parent: Option<usize>,
    /// Angular speed of the oscillation, radians per second.
    pub speed: f32,
    /// Amplitude of the oscillation, world units.
    pub length: f32,
    /// Set once a later bone claims this one as parent.
    has_child: bool,
}

/// Chain of bones anchored at the owning entity's position.
#[derive(Component, Clone, Debug, Default)]
pub struct KinematicChain {
    bones: Vec<Bone>,
}

impl KinematicChain {
    pub fn new() -> Self {
        Self { bones: Vec::new() }
    }

    /// Append a bone and return its index.
    ///
    /// Fails if `parent` is out of range or already has a child; both are
    /// assembly mistakes and are reported immediately rather than tolerated.
    pub fn push_bone(
        &mut self,
        parent: Option<usize>,
        speed: f32,
        length: f32,
    ) -> Result<usize, String> {
        if let Some(parent_index) = parent {
            let parent_bone = self
                .bones
                .get_mut(parent_index)
                .ok_or_else(|| format!("bone parent index {} out of range", parent_index))?;
            if parent_bone.has_child {
                return Err(format!("bone {} already has a child", parent_index));
            }
            parent_bone.has_child = true;
        }
        self.bones.push(Bone {
            vector: Vector2 { x: 0.0, y: 0.0 },
            parent,
            speed,
            length,
            has_child: false,
        });
        Ok(self.bones.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut [Bone] {
        &mut self.bones
    }

    /// Absolute tip position of bone `index`: the chain origin plus the sum
    /// of bone vectors from the root down to `index`.
    pub fn tip(&self, origin: Vector2, index: usize) -> Vector2 {
        let mut sum = self.bones[index].vector;
        let mut current = self.bones[index].parent;
        while let Some(i) = current {
            sum += self.bones[i].vector;
            current = self.bones[i].parent;
        }
        origin + sum
    }

    /// Absolute joint position of bone `index`: the parent's tip, or the
    /// chain origin for the root.
    pub fn joint(&self, origin: Vector2, index: usize) -> Vector2 {
        match self.bones[index].parent {
            Some(parent) => self.tip(origin, parent),
            None => origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn push_bone_links_parents() {
        let mut chain = KinematicChain::new();
        let root = chain.push_bone(None, 1.0, 1.0).unwrap();
        let middle = chain.push_bone(Some(root), 1.0, 1.0).unwrap();
        let tip = chain.push_bone(Some(middle), 1.0, 1.0).unwrap();
        assert_eq!((root, middle, tip), (0, 1, 2));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn duplicate_child_is_rejected() {
        let mut chain = KinematicChain::new();
        let root = chain.push_bone(None, 1.0, 1.0).unwrap();
        chain.push_bone(Some(root), 1.0, 1.0).unwrap();
        let err = chain.push_bone(Some(root), 1.0, 1.0).unwrap_err();
        assert!(err.contains("already has a child"));
        // The failed push must not have appended a bone.
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn out_of_range_parent_is_rejected() {
        let mut chain = KinematicChain::new();
        assert!(chain.push_bone(Some(7), 1.0, 1.0).is_err());
    }

    #[test]
    fn tips_accumulate_down_the_chain() {
        let mut chain = KinematicChain::new();
        let root = chain.push_bone(None, 1.0, 1.0).unwrap();
        let second = chain.push_bone(Some(root), 1.0, 1.0).unwrap();
        chain.bones_mut()[root].vector = Vector2 { x: 1.0, y: 0.0 };
        chain.bones_mut()[second].vector = Vector2 { x: 0.0, y: 2.0 };

        let origin = Vector2 { x: 10.0, y: 10.0 };
        assert!(vec_approx_eq(
            chain.joint(origin, root),
            Vector2 { x: 10.0, y: 10.0 }
        ));
        assert!(vec_approx_eq(
            chain.tip(origin, root),
            Vector2 { x: 11.0, y: 10.0 }
        ));
        assert!(vec_approx_eq(
            chain.joint(origin, second),
            Vector2 { x: 11.0, y: 10.0 }
        ));
        assert!(vec_approx_eq(
            chain.tip(origin, second),
            Vector2 { x: 11.0, y: 12.0 }
        ));
    }
}
