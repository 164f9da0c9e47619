//! Ripple particle: one transient expanding-ring effect instance.
//!
//! A ripple never moves after creation; it only grows and fades. All
//! mutation happens in the per-frame step, event handlers just append.

/// Per-frame opacity decay shared by both spawn profiles.
pub const FADE_STEP: f32 = 0.008;

/// Profile boundary above which a ripple is eligible for the secondary
/// inner ring (only the click profile clears it).
pub const SECONDARY_RING_PROFILE: f32 = 80.0;

/// The secondary ring stays hidden until the primary radius clears this.
pub const SECONDARY_RING_MIN_RADIUS: f32 = 20.0;

/// Which pointer gesture spawned a ripple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleKind {
    Movement,
    Click,
}

/// Spawn-time parameters selected by the ripple kind.
///
/// `max_radius` is a profile selector, not a cap: the radius keeps growing
/// past it and the fade-out alone bounds the visible lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnProfile {
    pub max_radius: f32,
    pub opacity: f32,
    pub growth: f32,
}

impl RippleKind {
    pub fn profile(self) -> SpawnProfile {
        match self {
            // Movement ripples: smaller, dimmer, slower growth.
            RippleKind::Movement => SpawnProfile {
                max_radius: 60.0,
                opacity: 0.3,
                growth: 2.0,
            },
            // Click ripples: larger, brighter, faster growth.
            RippleKind::Click => SpawnProfile {
                max_radius: 120.0,
                opacity: 0.6,
                growth: 3.0,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    kind: RippleKind,
    growth: f32,
    spawn_opacity: f32,
    age: u32,
}

impl Ripple {
    pub fn new(x: f32, y: f32, kind: RippleKind) -> Self {
        let profile = kind.profile();
        Ripple {
            x,
            y,
            radius: 0.0,
            max_radius: profile.max_radius,
            opacity: profile.opacity,
            kind,
            growth: profile.growth,
            spawn_opacity: profile.opacity,
            age: 0,
        }
    }

    pub fn kind(&self) -> RippleKind {
        self.kind
    }

    /// Advance one frame: grow the radius, decay the opacity.
    /// Returns false once fully faded; a retired ripple is never drawn.
    ///
    /// Opacity is derived from the frame age, keeping the fade-out frame
    /// exact: a 0.6 spawn opacity is gone after 75 steps of 0.008.
    pub fn advance(&mut self) -> bool {
        self.age += 1;
        self.radius += self.growth;
        self.opacity = self.spawn_opacity - FADE_STEP * self.age as f32;
        self.opacity > 0.0
    }

    /// Secondary inner ring: click-profile ripples only, once the primary
    /// ring has expanded past the reveal radius.
    pub fn secondary_ring(&self) -> bool {
        self.max_radius > SECONDARY_RING_PROFILE && self.radius > SECONDARY_RING_MIN_RADIUS
    }
}
