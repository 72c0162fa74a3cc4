use serde::{Deserialize, Serialize};

/// Below this length a vector has no usable direction.
const DIRECTION_EPSILON: f32 = 0.0001;

/// 2D vector for positions, displacements and aim directions (tile units)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Continuous position in the unbounded tile world.
pub type WorldPosition = Vec2;

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, +x axis is zero).
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn has_direction(&self) -> bool {
        self.length() > DIRECTION_EPSILON
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > DIRECTION_EPSILON {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::ZERO
        }
    }

    /// Scale down to `max` length; shorter vectors pass through untouched.
    pub fn clamp_length(&self, max: f32) -> Self {
        let len = self.length();
        if len > max && len > DIRECTION_EPSILON {
            *self * (max / len)
        } else {
            *self
        }
    }

    /// `self + (target - self) * t`, unclamped (t > 1 extrapolates past `target`).
    pub fn lerp(&self, target: Vec2, t: f32) -> Self {
        *self + (target - *self) * t
    }

    /// Signed angle in radians from `self` to `other`, in (-PI, PI].
    ///
    /// `None` when either vector is too short to have a direction.
    pub fn angle_to(&self, other: Vec2) -> Option<f32> {
        if !self.has_direction() || !other.has_direction() {
            return None;
        }
        Some(self.cross(other).atan2(self.dot(other)))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
