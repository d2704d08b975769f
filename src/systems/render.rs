//! Camera draw pass.
//!
//! [`draw_camera`] implements the camera's draw contract against the
//! renderer and scene collaborator traits. The renderer and scene live
//! outside the ECS world (they borrow the active frame), so this is a
//! plain function the frame driver calls between `begin`/`end` drawing.

use raylib::prelude::Vector2;

use crate::render::{Renderer2D, Scene, ScopedTranslate};
use crate::resources::camera2d::Camera2D;
use crate::resources::overlaypool::OverlayPool;

/// Draw everything visible in the camera's viewport.
///
/// The scene's rendering transform is shifted by the negated camera
/// position plus shake offset for the duration of the pass; the shift is
/// reverted by a drop guard even if a draw hook panics. Content drawing
/// is delegated to the scene with the camera's world rectangle for
/// culling; the camera contributes only its fade overlays, painted
/// between the scene content and the post-draw hook.
pub fn draw_camera(
    camera: &mut Camera2D,
    pool: &mut OverlayPool,
    renderer: &mut dyn Renderer2D,
    scene: &mut dyn Scene,
) {
    let translate = Vector2 {
        x: camera.pos().x + camera.shake_offset().x,
        y: camera.pos().y + camera.shake_offset().y,
    };

    let mut scoped = ScopedTranslate::new(scene, -translate.x, -translate.y);

    renderer.set_projection(camera.projection());
    renderer.clip_rect(0.0, 0.0, camera.width(), camera.height());

    let view = camera.view_rect();
    scoped.pre_draw(renderer);
    scoped.draw(renderer, &view);
    camera.draw_fx(pool, renderer);
    scoped.post_draw(renderer);
}
