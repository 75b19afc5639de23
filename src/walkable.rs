//! Single-method capability, implemented two ways.
//!
//! `DoubleStride` spells the implementation out on a named type. Any closure
//! with the right signature gets the same capability through the blanket
//! impl, so callers never care which one they were handed.

/// Anything that can walk a number of steps.
pub trait Walkable {
    fn walk(&self, steps: i32, enabled: bool) -> i32;
}

impl<F> Walkable for F
where
    F: Fn(i32, bool) -> i32,
{
    fn walk(&self, steps: i32, enabled: bool) -> i32 {
        self(steps, enabled)
    }
}

/// Covers two units per step while enabled, nothing otherwise. Large step
/// counts wrap around like any 32-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleStride;

impl Walkable for DoubleStride {
    fn walk(&self, steps: i32, enabled: bool) -> i32 {
        if enabled {
            steps.wrapping_mul(2)
        } else {
            0
        }
    }
}

/// Closure with the same behavior as `DoubleStride`.
pub fn double_stride_closure() -> impl Fn(i32, bool) -> i32 {
    |steps: i32, enabled| if enabled { steps.wrapping_mul(2) } else { 0 }
}

pub fn walk_with<W: Walkable + ?Sized>(walker: &W, steps: i32, enabled: bool) -> i32 {
    walker.walk(steps, enabled)
}

pub fn walk_all<W: Walkable + ?Sized>(walker: &W, steps: &[i32], enabled: bool) -> Vec<i32> {
    steps.iter().map(|&s| walker.walk(s, enabled)).collect()
}
