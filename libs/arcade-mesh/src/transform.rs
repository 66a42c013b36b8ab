//! # Transformation Algebra
//!
//! Axis permutations and their composition. Every builder takes an optional
//! transformation and pushes all of its points through it; the `mirrors`
//! flag tells emitters when handedness flips so they can keep faces
//! outward.
//!
//! ```rust
//! use arcade_mesh::Transformation;
//! use glam::DVec3;
//!
//! let t = Transformation::compose(Transformation::SwapXZ, Transformation::SwapXY);
//! assert_eq!(t.apply(DVec3::new(1.0, 2.0, 3.0)), DVec3::new(3.0, 1.0, 2.0));
//! assert!(!t.mirrors());
//! ```

use crate::Point3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A mapping of 3D points built from coordinate-axis swaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    /// Leaves points unchanged.
    #[default]
    Identity,
    /// `(x, y, z) -> (y, x, z)`
    #[serde(rename = "swap_xy")]
    SwapXY,
    /// `(x, y, z) -> (z, y, x)`
    #[serde(rename = "swap_xz")]
    SwapXZ,
    /// `(x, y, z) -> (x, z, y)`
    #[serde(rename = "swap_yz")]
    SwapYZ,
    /// Applies `inner` first, then `outer`. Operands are shared, so cloning a
    /// composition does not copy the tree below it.
    Composed {
        outer: Arc<Transformation>,
        inner: Arc<Transformation>,
    },
}

/// Shared identity used when a builder is called without a transformation.
pub static IDENTITY: Transformation = Transformation::Identity;

impl Transformation {
    /// Composes two transformations: the result applies `inner`, then `outer`.
    pub fn compose(outer: Transformation, inner: Transformation) -> Self {
        Self::Composed {
            outer: Arc::new(outer),
            inner: Arc::new(inner),
        }
    }

    /// Maps a missing transformation to [`IDENTITY`].
    #[inline]
    pub fn resolve(transform: Option<&Transformation>) -> &Transformation {
        transform.unwrap_or(&IDENTITY)
    }

    /// Applies the transformation to a point.
    pub fn apply(&self, p: Point3) -> Point3 {
        match self {
            Self::Identity => p,
            Self::SwapXY => Point3::new(p.y, p.x, p.z),
            Self::SwapXZ => Point3::new(p.z, p.y, p.x),
            Self::SwapYZ => Point3::new(p.x, p.z, p.y),
            Self::Composed { outer, inner } => outer.apply(inner.apply(p)),
        }
    }

    /// Returns true if the transformation reverses handedness.
    ///
    /// A single transposition of two axes always does; a composition mirrors
    /// when exactly one of its operands does.
    pub fn mirrors(&self) -> bool {
        match self {
            Self::Identity => false,
            Self::SwapXY | Self::SwapXZ | Self::SwapYZ => true,
            Self::Composed { outer, inner } => outer.mirrors() != inner.mirrors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Point3 {
        Point3::new(1.0, 2.0, 3.0)
    }

    fn all_basic() -> Vec<Transformation> {
        vec![
            Transformation::Identity,
            Transformation::SwapXY,
            Transformation::SwapXZ,
            Transformation::SwapYZ,
        ]
    }

    #[test]
    fn test_identity_is_noop() {
        assert_eq!(Transformation::Identity.apply(p()), p());
        assert!(!Transformation::Identity.mirrors());
    }

    #[test]
    fn test_single_swaps() {
        assert_eq!(Transformation::SwapXY.apply(p()), Point3::new(2.0, 1.0, 3.0));
        assert_eq!(Transformation::SwapXZ.apply(p()), Point3::new(3.0, 2.0, 1.0));
        assert_eq!(Transformation::SwapYZ.apply(p()), Point3::new(1.0, 3.0, 2.0));
        assert!(Transformation::SwapXY.mirrors());
        assert!(Transformation::SwapXZ.mirrors());
        assert!(Transformation::SwapYZ.mirrors());
    }

    #[test]
    fn test_composed_applies_inner_first() {
        // inner: (1,2,3) -> (2,1,3); outer: -> (3,1,2)
        let t = Transformation::compose(Transformation::SwapXZ, Transformation::SwapXY);
        assert_eq!(t.apply(p()), Point3::new(3.0, 1.0, 2.0));

        let reversed = Transformation::compose(Transformation::SwapXY, Transformation::SwapXZ);
        assert_eq!(reversed.apply(p()), Point3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_composed_mirror_is_xor() {
        for outer in all_basic() {
            for inner in all_basic() {
                let expected = outer.mirrors() != inner.mirrors();
                let t = Transformation::compose(outer.clone(), inner.clone());
                assert_eq!(t.mirrors(), expected, "{outer:?} after {inner:?}");
            }
        }
    }

    #[test]
    fn test_nested_composition_mirror_is_xor() {
        let two = Transformation::compose(Transformation::SwapXY, Transformation::SwapYZ);
        let three = Transformation::compose(Transformation::SwapXZ, two.clone());
        assert!(!two.mirrors());
        assert!(three.mirrors());
        assert!(!Transformation::compose(three.clone(), three).mirrors());
    }

    #[test]
    fn test_swap_twice_is_identity() {
        for swap in [
            Transformation::SwapXY,
            Transformation::SwapXZ,
            Transformation::SwapYZ,
        ] {
            let twice = Transformation::compose(swap.clone(), swap);
            assert_eq!(twice.apply(p()), p());
            assert!(!twice.mirrors());
        }
    }

    #[test]
    fn test_clone_shares_operands() {
        let deep = Transformation::compose(
            Transformation::compose(Transformation::SwapXY, Transformation::SwapYZ),
            Transformation::SwapXZ,
        );
        let copy = deep.clone();
        let (
            Transformation::Composed { outer: a, inner: b },
            Transformation::Composed { outer: c, inner: d },
        ) = (&deep, &copy)
        else {
            panic!("expected compositions");
        };
        assert!(Arc::ptr_eq(a, c));
        assert!(Arc::ptr_eq(b, d));
    }

    #[test]
    fn test_resolve_defaults_to_identity() {
        assert_eq!(Transformation::resolve(None), &Transformation::Identity);
        let t = Transformation::SwapYZ;
        assert_eq!(Transformation::resolve(Some(&t)), &t);
    }

    #[test]
    fn test_deserialize_composed() {
        let json = r#"{"composed": {"outer": "swap_xy", "inner": "identity"}}"#;
        let t: Transformation = serde_json::from_str(json).unwrap();
        assert_eq!(
            t,
            Transformation::compose(Transformation::SwapXY, Transformation::Identity)
        );
    }
}
