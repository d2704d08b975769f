//! 2D orthographic camera resource.
//!
//! [`Camera2D`] owns the visible window into the scene: it follows a
//! target through a deadzone with damped convergence, clamps its position
//! to world bounds, runs the shake and fade effect state machines, and
//! maintains an orthographic projection plus the inverse of its forward
//! transform for screen/world conversion.
//!
//! The camera is driven once per frame by
//! [`camera_update_system`](crate::systems::camera::camera_update_system)
//! and drawn through
//! [`draw_camera`](crate::systems::render::draw_camera).

use bevy_ecs::prelude::{Entity, Resource};
use glam::{Affine2, Mat4, Vec2};
use log::debug;
use raylib::prelude::{Color, Rectangle, Vector2};
use smallvec::SmallVec;
use std::fmt;

use crate::components::bounds::Bounds;
use crate::components::deadzone::Deadzone;
use crate::components::tween::{AlphaTween, EffectCallback};
use crate::render::Renderer2D;
use crate::resources::overlaypool::{AlphaTweenKey, OverlayColorKey, OverlayPool};
use crate::resources::worldtime::WorldTime;

use crate::resources::cameraconfig::CameraConfig;

/// Default near projection plane.
pub const DEFAULT_NEAR: f32 = -1000.0;
/// Default far projection plane.
pub const DEFAULT_FAR: f32 = 1000.0;
/// Default fade duration in seconds.
pub const DEFAULT_FADE_DURATION: f32 = 1.0;
/// Divisor deriving the default deadzone from the viewport size.
pub const DEFAULT_DEADZONE_DIVISOR: f32 = 6.0;

/// Per-axis distance below which damped convergence snaps exactly onto
/// the desired position.
const CONVERGENCE_TOLERANCE: f32 = 0.005;

/// Which axes an effect or the follow engine may adjust.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Axis {
    fn horizontal(self) -> bool {
        matches!(self, Axis::Horizontal | Axis::Both)
    }

    fn vertical(self) -> bool {
        matches!(self, Axis::Vertical | Axis::Both)
    }
}

/// What the camera follows.
///
/// A fixed world point is usable immediately; an entity target is
/// resolved against its `MapPosition` once per frame by the update
/// system. The camera holds only the entity id and never extends the
/// entity's lifetime.
#[derive(Copy, Clone, Debug)]
pub enum FollowTarget {
    /// Fixed world point.
    Point(Vector2),
    /// Entity carrying a [`MapPosition`](crate::components::mapposition::MapPosition).
    Entity(Entity),
}

/// Rejected follow target; no camera state is changed when this is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowTargetError {
    /// A fixed-point target had a NaN or infinite coordinate.
    NonFinitePoint { x: f32, y: f32 },
}

impl fmt::Display for FollowTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowTargetError::NonFinitePoint { x, y } => {
                write!(f, "invalid follow target: non-finite point ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for FollowTargetError {}

/// Notification queued by camera mutators, drained once per frame by the
/// update system and republished as typed messages.
#[derive(Debug, Clone, Copy)]
pub enum CameraNotice {
    /// Position or transform changed this frame.
    Changed { pos: Vector2 },
    /// A resize completed.
    Resized { width: f32, height: f32 },
}

struct ShakeState {
    intensity: f32,
    duration: f32,
    axis: Axis,
    on_complete: Option<EffectCallback>,
}

impl Default for ShakeState {
    fn default() -> Self {
        ShakeState {
            intensity: 0.0,
            duration: 0.0,
            axis: Axis::Both,
            on_complete: None,
        }
    }
}

#[derive(Default)]
struct FadeState {
    color: Option<OverlayColorKey>,
    tween: Option<AlphaTweenKey>,
}

impl FadeState {
    fn active(&self) -> bool {
        self.tween.is_some()
    }
}

/// The camera/viewport orchestrator. See the module docs.
#[derive(Resource)]
pub struct Camera2D {
    pos: Vector2,
    width: f32,
    height: f32,
    near: f32,
    far: f32,
    bounds: Bounds,
    deadzone: Deadzone,
    deadzone_divisor: f32,
    target: Option<FollowTarget>,
    target_pos: Option<Vector2>,
    follow_axis: Axis,
    damping: f32,
    smooth_follow: bool,
    force_snap: bool,
    shake: ShakeState,
    offset: Vector2,
    fade_in: FadeState,
    fade_out: FadeState,
    projection: Mat4,
    transform: Affine2,
    inv_transform: Affine2,
    scene_origin: Vector2,
    pending: SmallVec<[CameraNotice; 4]>,
    rng: fastrand::Rng,
}

/// Total clamp; unlike `f32::clamp` it tolerates `low > high` (degenerate
/// bounds) by checking the lower limit first.
fn clamp(value: f32, low: f32, high: f32) -> f32 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

fn close_enough(a: f32, b: f32) -> bool {
    (a - b).abs() < CONVERGENCE_TOLERANCE
}

fn to_glam(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn from_glam(v: Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

impl Camera2D {
    /// Create a camera whose viewport spans `(min_x, min_y)` to
    /// `(max_x, max_y)`; bounds default to the same rectangle.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        let width = max_x - min_x;
        let height = max_y - min_y;
        let mut camera = Camera2D {
            pos: Vector2 { x: min_x, y: min_y },
            width,
            height,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            bounds: Bounds::default(),
            deadzone: Deadzone::default(),
            deadzone_divisor: DEFAULT_DEADZONE_DIVISOR,
            target: None,
            target_pos: None,
            follow_axis: Axis::None,
            damping: 1.0,
            smooth_follow: true,
            force_snap: false,
            shake: ShakeState::default(),
            offset: Vector2 { x: 0.0, y: 0.0 },
            fade_in: FadeState::default(),
            fade_out: FadeState::default(),
            projection: Mat4::IDENTITY,
            transform: Affine2::IDENTITY,
            inv_transform: Affine2::IDENTITY,
            scene_origin: Vector2 { x: 0.0, y: 0.0 },
            pending: SmallVec::new(),
            rng: fastrand::Rng::new(),
        };
        camera.set_deadzone(
            width / camera.deadzone_divisor,
            height / camera.deadzone_divisor,
        );
        camera.bounds.set_min_max(min_x, min_y, max_x, max_y);
        camera.update_projection_matrix();
        camera
    }

    /// Create a camera from a [`CameraConfig`].
    pub fn from_config(config: &CameraConfig) -> Self {
        let (w, h) = config.viewport_size();
        let mut camera = Self::new(0.0, 0.0, w as f32, h as f32);
        camera.near = config.near;
        camera.far = config.far;
        camera.damping = config.damping;
        camera.deadzone_divisor = config.deadzone_divisor;
        camera.set_deadzone(
            camera.width / camera.deadzone_divisor,
            camera.height / camera.deadzone_divisor,
        );
        camera.update_projection_matrix();
        camera
    }

    // -- accessors ---

    pub fn pos(&self) -> Vector2 {
        self.pos
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn deadzone(&self) -> &Deadzone {
        &self.deadzone
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Set the follow damping, clamped into [0, 1]. Non-finite values
    /// fall back to 1.0 (instant snap).
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = if damping.is_finite() {
            clamp(damping, 0.0, 1.0)
        } else {
            1.0
        };
    }

    /// Whether damped convergence is enabled. Mutators disable it
    /// briefly so programmatic repositioning is immediate.
    pub fn smooth_follow(&self) -> bool {
        self.smooth_follow
    }

    pub fn set_smooth_follow(&mut self, smooth: bool) {
        self.smooth_follow = smooth;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Change the projection planes; the projection matrix is recomputed
    /// immediately.
    pub fn set_near_far(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
        self.update_projection_matrix();
    }

    pub fn follow_axis(&self) -> Axis {
        self.follow_axis
    }

    pub fn target(&self) -> Option<FollowTarget> {
        self.target
    }

    /// Shake offset added to the render-time translation. Never affects
    /// the clamped position.
    pub fn shake_offset(&self) -> Vector2 {
        self.offset
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.duration > 0.0
    }

    pub fn is_fading(&self) -> bool {
        self.fade_in.active() || self.fade_out.active()
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Forward transform. External code may replace it between frames;
    /// the inverse is refreshed on every update.
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Affine2 {
        &mut self.transform
    }

    pub fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    pub fn inv_transform(&self) -> Affine2 {
        self.inv_transform
    }

    /// World position of the scene root, used by the coordinate mapper.
    pub fn scene_origin(&self) -> Vector2 {
        self.scene_origin
    }

    pub fn set_scene_origin(&mut self, origin: Vector2) {
        self.scene_origin = origin;
    }

    /// The camera's visible world rectangle.
    pub fn view_rect(&self) -> Rectangle {
        Rectangle {
            x: self.pos.x,
            y: self.pos.y,
            width: self.width,
            height: self.height,
        }
    }

    /// The camera's visible world rectangle as [`Bounds`].
    pub fn view_bounds(&self) -> Bounds {
        Bounds::from_rect(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Drain the queued notices. Called once per frame by the update
    /// system, which republishes them as typed messages.
    pub fn take_notices(&mut self) -> SmallVec<[CameraNotice; 4]> {
        std::mem::take(&mut self.pending)
    }

    // -- private helpers ---

    fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::orthographic_rh_gl(0.0, self.width, self.height, 0.0, self.near, self.far);
    }

    fn follow_h(&self, target: Vector2) -> f32 {
        let mut target_x = self.pos.x;
        if target.x - self.pos.x > self.deadzone.right() {
            target_x = (target.x - self.deadzone.right()).min(self.bounds.width() - self.width);
        } else if target.x - self.pos.x < self.deadzone.left() {
            target_x = (target.x - self.deadzone.left()).max(self.bounds.left());
        }
        target_x
    }

    fn follow_v(&self, target: Vector2) -> f32 {
        let mut target_y = self.pos.y;
        if target.y - self.pos.y > self.deadzone.bottom() {
            target_y = (target.y - self.deadzone.bottom()).min(self.bounds.height() - self.height);
        } else if target.y - self.pos.y < self.deadzone.top() {
            target_y = (target.y - self.deadzone.top()).max(self.bounds.top());
        }
        target_y
    }

    /// One follow/convergence pass. Returns whether the position moved.
    ///
    /// Snaps when smoothing is off or damping is 1.0; within the
    /// convergence tolerance it snaps exactly onto the desired position
    /// and reports no further change.
    fn update_target(&mut self) -> bool {
        let Some(target) = self.target_pos else {
            return false;
        };

        let mut desired = self.pos;
        if self.follow_axis.horizontal() {
            desired.x = self.follow_h(target);
        }
        if self.follow_axis.vertical() {
            desired.y = self.follow_v(target);
        }

        if self.pos.x != desired.x || self.pos.y != desired.y {
            if self.smooth_follow && self.damping < 1.0 {
                if close_enough(desired.x, self.pos.x) && close_enough(desired.y, self.pos.y) {
                    self.pos = desired;
                    return false;
                }
                self.pos = lerp_v2(self.pos, desired, self.damping);
            } else {
                self.pos = desired;
            }
            return true;
        }
        false
    }

    // -- public operations ---

    /// Reset the camera position to the given coordinates, drop the
    /// follow target, restore the damping defaults and reset both
    /// transforms to identity.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vector2 { x, y };

        self.unfollow();

        self.smooth_follow = true;
        self.damping = 1.0;

        self.transform = Affine2::IDENTITY;
        self.inv_transform = Affine2::IDENTITY;

        self.update_projection_matrix();
    }

    /// Change the deadzone to a `w × h` rectangle derived from the
    /// current viewport size, then force one convergence pass so the
    /// camera settles against the new zone immediately.
    pub fn set_deadzone(&mut self, w: f32, h: f32) {
        self.deadzone = Deadzone::for_viewport(self.width, self.height, w, h);

        self.smooth_follow = false;
        self.update_target();
        self.smooth_follow = true;
    }

    /// Resize the viewport.
    ///
    /// Bounds reset to `(0, 0, w, h)` and the deadzone is re-derived
    /// before the forced convergence pass runs, so the clamp never sees
    /// stale geometry. Degenerate dimensions are the caller's
    /// responsibility.
    pub fn resize(&mut self, w: f32, h: f32) {
        self.width = w;
        self.height = h;

        self.smooth_follow = false;

        self.set_bounds(0.0, 0.0, w, h);
        self.set_deadzone(w / self.deadzone_divisor, h / self.deadzone_divisor);
        self.update_target();
        self.smooth_follow = true;

        self.update_projection_matrix();

        debug!("camera resized to {}x{}", w, h);
        self.pending.push(CameraNotice::Resized {
            width: w,
            height: h,
        });
    }

    /// Set the camera boundaries. The camera cannot move outside of the
    /// rectangle `[x, x+w] × [y, y+h]`; the current position is
    /// re-clamped immediately.
    pub fn set_bounds(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.smooth_follow = false;
        self.bounds.set_min_max(x, y, w + x, h + y);
        self.move_to(self.pos.x, self.pos.y);
        self.update_target();
        self.smooth_follow = true;
    }

    /// Follow the given target.
    ///
    /// Fails fast on a non-finite fixed point; no state changes in that
    /// case. Damping is clamped into [0, 1]. Fixed points converge
    /// immediately; entity targets snap on the first update that resolves
    /// their position, so programmatic re-follows are never smoothed.
    pub fn follow(
        &mut self,
        target: FollowTarget,
        axis: Axis,
        damping: f32,
    ) -> Result<(), FollowTargetError> {
        let resolved = match target {
            FollowTarget::Point(point) => {
                if !point.x.is_finite() || !point.y.is_finite() {
                    return Err(FollowTargetError::NonFinitePoint {
                        x: point.x,
                        y: point.y,
                    });
                }
                Some(point)
            }
            FollowTarget::Entity(_) => None,
        };

        self.target = Some(target);
        self.follow_axis = axis;
        self.set_damping(damping);

        match resolved {
            Some(point) => {
                self.target_pos = Some(point);
                self.force_snap = false;
                self.smooth_follow = false;
                self.update_target();
                self.smooth_follow = true;
            }
            None => {
                self.target_pos = None;
                self.force_snap = true;
            }
        }
        Ok(())
    }

    /// Stop following the current target.
    pub fn unfollow(&mut self) {
        self.target = None;
        self.target_pos = None;
        self.follow_axis = Axis::None;
        self.force_snap = false;
    }

    /// Store the follow target position resolved for this frame.
    ///
    /// Called by the update system before [`update`](Self::update); fixed
    /// points resolve to themselves, entity targets to their current
    /// `MapPosition` (or `None` while unresolvable).
    pub fn set_target_position(&mut self, pos: Option<Vector2>) {
        self.target_pos = pos;
    }

    /// Move the camera upper-left position by the given offset.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.move_to(self.pos.x + dx, self.pos.y + dy);
    }

    /// Move the camera upper-left position to the given coordinates,
    /// clamped into bounds. Queues a change notice only if the position
    /// actually moved.
    ///
    /// The upper clamp intentionally uses the bounds *size*, not its
    /// right/bottom edge; bounds anchored away from the origin keep the
    /// historical clamping behavior.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let old_x = self.pos.x;
        let old_y = self.pos.y;

        self.pos.x = clamp(x, self.bounds.left(), self.bounds.width());
        self.pos.y = clamp(y, self.bounds.top(), self.bounds.height());

        if old_x != self.pos.x || old_y != self.pos.y {
            self.pending.push(CameraNotice::Changed { pos: self.pos });
        }
    }

    /// Center the camera on a drawable described by its position and
    /// local bounds.
    pub fn focus_on(&mut self, pos: Vector2, bounds: &Bounds) {
        self.move_to(
            pos.x + bounds.left() + bounds.width() / 2.0,
            pos.y + bounds.top() + bounds.height() / 2.0,
        );
    }

    /// Per-frame entry point.
    ///
    /// Resolves follow/damping, advances the shake and fade effects and
    /// refreshes the inverse transform. Returns whether anything visible
    /// changed this frame. The inverse refresh runs unconditionally
    /// because external code may have replaced the forward transform
    /// since the previous frame.
    pub fn update(&mut self, time: &WorldTime, pool: &mut OverlayPool) -> bool {
        let dt = time.delta;

        // Deferred snap for targets that resolved this frame.
        let forced = self.force_snap && self.target_pos.is_some();
        if forced {
            self.force_snap = false;
        }
        let prev_smooth = self.smooth_follow;
        if forced {
            self.smooth_follow = false;
        }
        let mut updated = self.update_target();
        self.smooth_follow = prev_smooth;

        if self.shake.duration > 0.0 {
            self.shake.duration -= dt;
            if self.shake.duration <= 0.0 {
                self.shake.duration = 0.0;
                self.offset = Vector2 { x: 0.0, y: 0.0 };
                if let Some(callback) = self.shake.on_complete.take() {
                    callback();
                }
            } else {
                if self.shake.axis.horizontal() {
                    self.offset.x = (self.rng.f32() - 0.5) * self.shake.intensity;
                }
                if self.shake.axis.vertical() {
                    self.offset.y = (self.rng.f32() - 0.5) * self.shake.intensity;
                }
            }
            updated = true;
        }

        if updated {
            self.pending.push(CameraNotice::Changed { pos: self.pos });
        }

        let fading = Self::advance_fade(&self.fade_in, time, pool)
            | Self::advance_fade(&self.fade_out, time, pool);
        if fading {
            updated = true;
        }

        if self.transform != Affine2::IDENTITY {
            self.inv_transform = self.transform.inverse();
        } else {
            self.inv_transform = Affine2::IDENTITY;
        }

        updated
    }

    /// Shake the camera.
    ///
    /// Starts only from idle unless `force` is set, so a weaker shake
    /// cannot interrupt a stronger one by accident. The jitter is applied
    /// per enabled axis in `[-intensity/2, +intensity/2]` and only at
    /// render time.
    pub fn shake(
        &mut self,
        intensity: f32,
        duration: f32,
        axis: Axis,
        on_complete: Option<EffectCallback>,
        force: bool,
    ) {
        if self.shake.duration <= 0.0 || force {
            self.shake.intensity = intensity;
            self.shake.duration = duration;
            self.shake.axis = axis;
            self.shake.on_complete = on_complete;
        }
    }

    /// Fade-out (flash) effect: the screen fills with `color` and the
    /// overlay alpha animates from the color's own alpha down to zero
    /// over `duration` seconds.
    ///
    /// Starting a new fade-out while one runs replaces it; the previous
    /// pooled color and tween are released first.
    pub fn fade_out(
        &mut self,
        pool: &mut OverlayPool,
        color: Color,
        duration: f32,
        on_complete: Option<EffectCallback>,
    ) {
        Self::release_fade(&mut self.fade_out, pool);

        let start_alpha = color.a as f32 / 255.0;
        let color_key = pool.acquire_color(color, start_alpha);
        let mut tween = AlphaTween::new(start_alpha, 0.0, duration).persistent();
        if let Some(callback) = on_complete {
            tween = tween.with_on_complete(callback);
        }
        self.fade_out.tween = Some(pool.acquire_tween(tween));
        self.fade_out.color = Some(color_key);
    }

    /// Fade-in effect: the overlay alpha animates from zero up to the
    /// color's own alpha over `duration` seconds.
    ///
    /// Same replacement and release semantics as
    /// [`fade_out`](Self::fade_out).
    pub fn fade_in(
        &mut self,
        pool: &mut OverlayPool,
        color: Color,
        duration: f32,
        on_complete: Option<EffectCallback>,
    ) {
        Self::release_fade(&mut self.fade_in, pool);

        let terminal_alpha = color.a as f32 / 255.0;
        let color_key = pool.acquire_color(color, 0.0);
        let mut tween = AlphaTween::new(0.0, terminal_alpha, duration).persistent();
        if let Some(callback) = on_complete {
            tween = tween.with_on_complete(callback);
        }
        self.fade_in.tween = Some(pool.acquire_tween(tween));
        self.fade_in.color = Some(color_key);
    }

    fn release_fade(state: &mut FadeState, pool: &mut OverlayPool) {
        if let Some(color_key) = state.color.take() {
            pool.release_color(color_key);
        }
        if let Some(tween_key) = state.tween.take() {
            pool.release_tween(tween_key);
        }
    }

    /// Advance one fade instance. Returns whether the instance is active.
    fn advance_fade(state: &FadeState, time: &WorldTime, pool: &mut OverlayPool) -> bool {
        let (Some(tween_key), Some(color_key)) = (state.tween, state.color) else {
            return false;
        };
        let Some(tween) = pool.tween_mut(tween_key) else {
            return false;
        };
        let dt = if tween.persistent {
            time.raw_delta
        } else {
            time.delta
        };
        let alpha = tween.advance(dt);
        let callback = if tween.finished() {
            tween.take_on_complete()
        } else {
            None
        };
        if let Some(overlay) = pool.color_mut(color_key) {
            overlay.alpha = alpha;
        }
        if let Some(callback) = callback {
            callback();
        }
        true
    }

    /// Paint the active fade overlays over the whole viewport.
    ///
    /// Once a fade has delivered its terminal alpha its pooled color and
    /// tween are returned to the pool, exactly once, and the instance
    /// goes inactive.
    pub fn draw_fx(&mut self, pool: &mut OverlayPool, renderer: &mut dyn Renderer2D) {
        let width = self.width;
        let height = self.height;
        Self::draw_fade(&mut self.fade_in, pool, renderer, width, height);
        Self::draw_fade(&mut self.fade_out, pool, renderer, width, height);
    }

    fn draw_fade(
        state: &mut FadeState,
        pool: &mut OverlayPool,
        renderer: &mut dyn Renderer2D,
        width: f32,
        height: f32,
    ) {
        let (Some(color_key), Some(tween_key)) = (state.color, state.tween) else {
            return;
        };

        if let Some(overlay) = pool.color(color_key) {
            renderer.save();
            // The overlay covers the whole camera area regardless of the
            // scene transform.
            renderer.reset_transform();
            renderer.set_color(overlay.current());
            renderer.fill_rect(0.0, 0.0, width, height);
            renderer.restore();
        }

        let done = pool.tween(tween_key).map(|t| t.finished()).unwrap_or(true);
        if done {
            pool.release_color(color_key);
            pool.release_tween(tween_key);
            state.color = None;
            state.tween = None;
        }
    }

    /// Convert local (screen) coordinates into world coordinates.
    pub fn local_to_world(&self, x: f32, y: f32) -> Vector2 {
        let mut v = Vector2 {
            x: x + self.pos.x - self.scene_origin.x,
            y: y + self.pos.y - self.scene_origin.y,
        };
        if self.transform != Affine2::IDENTITY {
            v = from_glam(self.inv_transform.transform_point2(to_glam(v)));
        }
        v
    }

    /// Convert world coordinates into local (screen) coordinates.
    ///
    /// Exact inverse of [`local_to_world`](Self::local_to_world) while
    /// the forward/inverse transform pair is consistent.
    pub fn world_to_local(&self, x: f32, y: f32) -> Vector2 {
        let mut v = Vector2 { x, y };
        if self.transform != Affine2::IDENTITY {
            v = from_glam(self.transform.transform_point2(to_glam(v)));
        }
        Vector2 {
            x: v.x - self.pos.x + self.scene_origin.x,
            y: v.y - self.pos.y + self.scene_origin.y,
        }
    }

    /// Whether a drawable is visible in this camera.
    ///
    /// Floating drawables live in screen space and test against the
    /// renderer; everything else tests against the camera's world
    /// rectangle.
    pub fn is_visible(&self, bounds: &Bounds, floating: bool, renderer: &dyn Renderer2D) -> bool {
        if floating {
            renderer.overlaps(&bounds.as_rect())
        } else {
            bounds.overlaps(&self.view_bounds())
        }
    }
}
