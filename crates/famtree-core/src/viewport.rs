use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::hierarchy::Point;

/// Maps drawing coordinates to screen coordinates: `screen = t + k * p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportTransform {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, k: 1.0 };

    pub const fn new(x: f32, y: f32, k: f32) -> Self {
        Self { x, y, k }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.x + self.k * p.x, self.y + self.k * p.y)
    }

    pub fn invert(&self, screen: Point) -> Point {
        Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }

    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            k: self.k + (to.k - self.k) * t,
        }
    }
}

/// Direct manipulation from the user. Always applied to the transform as
/// it is at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Pan { dx: f32, dy: f32 },
    /// Multiply the scale, keeping the drawing point under `anchor`
    /// (screen space) fixed.
    Zoom { factor: f32, anchor: Point },
    Set(ViewportTransform),
}

pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// One in-flight interpolation. The start time is latched by the first
/// `tick`, so callers need not know the clock when they start it.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub from: ViewportTransform,
    pub to: ViewportTransform,
    pub started: Option<Duration>,
    pub duration: Duration,
}

impl Animation {
    pub fn new(from: ViewportTransform, to: ViewportTransform, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: None,
            duration,
        }
    }

    /// Transform at `now` and whether the animation has finished.
    pub fn sample(&mut self, now: Duration) -> (ViewportTransform, bool) {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_sub(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from.lerp(&self.to, ease_cubic_in_out(t)), false)
    }
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    transform: ViewportTransform,
    width: f32,
    height: f32,
    min_scale: f32,
    max_scale: f32,
    animation: Option<Animation>,
}

impl ViewportController {
    pub fn new(width: f32, height: f32, min_scale: f32, max_scale: f32) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            transform: ViewportTransform::IDENTITY,
            width,
            height,
            min_scale,
            max_scale,
            animation: None,
        }
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn clamp_scale(&self, k: f32) -> f32 {
        k.clamp(self.min_scale, self.max_scale)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Immediate, clamped; cancels any animation.
    pub fn set_transform(&mut self, t: ViewportTransform) {
        self.cancel_animation();
        self.transform = ViewportTransform {
            k: self.clamp_scale(t.k),
            ..t
        };
    }

    /// Transform that puts `point` (drawing coordinates) at the viewport
    /// centre at the clamped `scale`.
    pub fn centered_on(&self, point: Point, scale: f32) -> ViewportTransform {
        let k = self.clamp_scale(scale);
        ViewportTransform::new(
            self.width / 2.0 - point.x * k,
            self.height / 2.0 - point.y * k,
            k,
        )
    }

    pub fn center_on(&mut self, point: Point, scale: f32, duration: Duration) {
        let to = self.centered_on(point, scale);
        self.animate_to(to, duration);
    }

    pub fn reset(&mut self, duration: Duration) {
        self.animate_to(ViewportTransform::IDENTITY, duration);
    }

    fn animate_to(&mut self, to: ViewportTransform, duration: Duration) {
        if self.animation.is_some() {
            tracing::debug!("viewport animation replaced");
        }
        tracing::debug!(x = to.x, y = to.y, k = to.k, ?duration, "viewport animation started");
        self.animation = Some(Animation::new(self.transform, to, duration));
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            tracing::debug!("viewport animation cancelled");
        }
    }

    pub fn apply_user_transform(&mut self, gesture: Gesture) {
        let cur = self.transform;
        let next = match gesture {
            Gesture::Pan { dx, dy } => ViewportTransform::new(cur.x + dx, cur.y + dy, cur.k),
            Gesture::Zoom { factor, anchor } => {
                let k = self.clamp_scale(cur.k * factor);
                let under = cur.invert(anchor);
                ViewportTransform::new(anchor.x - under.x * k, anchor.y - under.y * k, k)
            }
            Gesture::Set(t) => t,
        };
        self.set_transform(next);
    }

    /// Advance the in-flight animation. Returns true when the transform moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        let (next, done) = anim.sample(now);
        if done {
            self.animation = None;
        }
        let changed = next != self.transform;
        self.transform = next;
        changed
    }

    pub fn to_screen(&self, p: Point) -> Point {
        self.transform.apply(p)
    }

    pub fn to_layout(&self, screen: Point) -> Point {
        self.transform.invert(screen)
    }
}
