//! Overlay resource arena.
//!
//! Checkout/return storage for the transient values the camera's fade
//! effects need: an overlay color (RGB plus an animated alpha) and the
//! alpha tween driving it. Handles are slotmap keys, so releasing a
//! handle twice or touching a stale one is inert rather than undefined.
//!
//! Ownership discipline: the camera acquires on effect start, is the sole
//! holder of the keys while the effect runs, and releases on natural
//! completion or when a new effect of the same direction replaces the old
//! one. Replacement sites must release before overwriting.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use slotmap::{SlotMap, new_key_type};

use crate::components::tween::AlphaTween;

new_key_type! {
    /// Handle to a pooled overlay color.
    pub struct OverlayColorKey;
    /// Handle to a pooled alpha tween.
    pub struct AlphaTweenKey;
}

/// A pooled overlay color: base RGB plus the animated alpha in [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct OverlayColor {
    /// Base color; its own alpha channel records the acquisition-time
    /// alpha and is not consulted at draw time.
    pub color: Color,
    /// Current animated alpha.
    pub alpha: f32,
}

impl OverlayColor {
    /// The drawable color with the animated alpha applied.
    pub fn current(&self) -> Color {
        Color::new(
            self.color.r,
            self.color.g,
            self.color.b,
            (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Arena for overlay colors and alpha tweens.
#[derive(Resource, Default)]
pub struct OverlayPool {
    colors: SlotMap<OverlayColorKey, OverlayColor>,
    tweens: SlotMap<AlphaTweenKey, AlphaTween>,
}

impl OverlayPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out an overlay color starting at the given alpha.
    pub fn acquire_color(&mut self, color: Color, alpha: f32) -> OverlayColorKey {
        self.colors.insert(OverlayColor { color, alpha })
    }

    pub fn color(&self, key: OverlayColorKey) -> Option<&OverlayColor> {
        self.colors.get(key)
    }

    pub fn color_mut(&mut self, key: OverlayColorKey) -> Option<&mut OverlayColor> {
        self.colors.get_mut(key)
    }

    /// Return a color to the pool. Returns false if the handle was stale.
    pub fn release_color(&mut self, key: OverlayColorKey) -> bool {
        self.colors.remove(key).is_some()
    }

    /// Check out an alpha tween.
    pub fn acquire_tween(&mut self, tween: AlphaTween) -> AlphaTweenKey {
        self.tweens.insert(tween)
    }

    pub fn tween(&self, key: AlphaTweenKey) -> Option<&AlphaTween> {
        self.tweens.get(key)
    }

    pub fn tween_mut(&mut self, key: AlphaTweenKey) -> Option<&mut AlphaTween> {
        self.tweens.get_mut(key)
    }

    /// Return a tween to the pool. Returns false if the handle was stale.
    pub fn release_tween(&mut self, key: AlphaTweenKey) -> bool {
        self.tweens.remove(key).is_some()
    }

    /// Number of colors currently checked out. Used by leak assertions.
    pub fn active_colors(&self) -> usize {
        self.colors.len()
    }

    /// Number of tweens currently checked out. Used by leak assertions.
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release_color() {
        let mut pool = OverlayPool::new();
        let key = pool.acquire_color(Color::RED, 1.0);
        assert_eq!(pool.active_colors(), 1);
        assert!(pool.color(key).is_some());

        assert!(pool.release_color(key));
        assert_eq!(pool.active_colors(), 0);
        assert!(pool.color(key).is_none());
    }

    #[test]
    fn test_double_release_is_inert() {
        let mut pool = OverlayPool::new();
        let key = pool.acquire_color(Color::WHITE, 0.5);
        assert!(pool.release_color(key));
        assert!(!pool.release_color(key));
        assert_eq!(pool.active_colors(), 0);
    }

    #[test]
    fn test_stale_handle_does_not_alias_new_allocation() {
        let mut pool = OverlayPool::new();
        let old = pool.acquire_color(Color::RED, 1.0);
        pool.release_color(old);
        let fresh = pool.acquire_color(Color::BLUE, 0.25);

        // The recycled slot must not be reachable through the old key.
        assert!(pool.color(old).is_none());
        assert!(pool.color(fresh).is_some());
    }

    #[test]
    fn test_tween_checkout_cycle() {
        let mut pool = OverlayPool::new();
        let key = pool.acquire_tween(AlphaTween::new(1.0, 0.0, 1.0));
        assert_eq!(pool.active_tweens(), 1);

        let value = pool.tween_mut(key).unwrap().advance(0.5);
        assert!((value - 0.5).abs() < 1e-6);

        assert!(pool.release_tween(key));
        assert!(pool.tween(key).is_none());
        assert_eq!(pool.active_tweens(), 0);
    }

    #[test]
    fn test_overlay_color_current_applies_alpha() {
        let overlay = OverlayColor {
            color: Color::new(10, 20, 30, 255),
            alpha: 0.5,
        };
        let current = overlay.current();
        assert_eq!(current.r, 10);
        assert_eq!(current.g, 20);
        assert_eq!(current.b, 30);
        assert_eq!(current.a, 128);
    }

    #[test]
    fn test_overlay_color_current_clamps_alpha() {
        let overlay = OverlayColor {
            color: Color::WHITE,
            alpha: 1.5,
        };
        assert_eq!(overlay.current().a, 255);

        let overlay = OverlayColor {
            color: Color::WHITE,
            alpha: -0.5,
        };
        assert_eq!(overlay.current().a, 0);
    }
}
