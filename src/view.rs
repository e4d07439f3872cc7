//! Free camera with an explicit orthonormal basis
//!
//! The viewport owns the eye position and three orthonormal basis vectors:
//! `u` (right), `v` (up), `n` (forward). Movement translates along a basis
//! vector; rotation spins the whole basis about one of them, so the camera
//! always turns about its own axes rather than the world's.

use glam::{Quat, Vec2, Vec3};

use crate::consts::{CAMERA_START, FOCAL_LENGTH, NEAR_PLANE};
use crate::input::{CameraAxis, CameraCommand, CameraTuning};

/// A point projected into square (pre-aspect) normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// NDC center.
    pub center: Vec2,
    /// World-units-to-NDC scale at this depth; multiply a world radius by
    /// this to get its NDC radius.
    pub scale: f32,
}

/// One projected guide line and the index of the world axis it traces.
#[derive(Debug, Clone, Copy)]
pub struct GuideLine {
    pub a: Vec2,
    pub b: Vec2,
    pub axis: usize,
}

#[derive(Debug, Clone, Copy)]
struct Pose {
    pos: Vec3,
    u: Vec3,
    v: Vec3,
    n: Vec3,
}

/// Free camera / viewport.
#[derive(Debug, Clone)]
pub struct Viewport {
    pose: Pose,
    home: Pose,
}

impl Viewport {
    /// Camera at `pos` with `u` right and `v` up; forward is their cross
    /// product. The pose is also remembered as home for [`reset`](Self::reset).
    pub fn new(pos: Vec3, u: Vec3, v: Vec3) -> Self {
        let pose = Pose {
            pos,
            u,
            v,
            n: u.cross(v),
        };
        Self { pose, home: pose }
    }

    /// The source sketch's start pose: pulled back on -Z, axis-aligned,
    /// looking at the origin.
    pub fn start() -> Self {
        Self::new(Vec3::from(CAMERA_START), Vec3::X, Vec3::Y)
    }

    pub fn pos(&self) -> Vec3 {
        self.pose.pos
    }

    /// Right basis vector.
    pub fn u(&self) -> Vec3 {
        self.pose.u
    }

    /// Up basis vector.
    pub fn v(&self) -> Vec3 {
        self.pose.v
    }

    /// Forward basis vector.
    pub fn n(&self) -> Vec3 {
        self.pose.n
    }

    pub fn move_to(&mut self, pos: Vec3) {
        self.pose.pos = pos;
    }

    /// Rotate the basis by `angle` about `about`, keeping the eye fixed.
    ///
    /// `u` and `v` are renormalized and `n` rebuilt from their cross product
    /// so the basis stays orthonormal and right-handed as rotations
    /// accumulate.
    pub fn rotate(&mut self, angle: f32, about: Vec3) {
        let rot = Quat::from_axis_angle(about.normalize(), angle);
        self.pose.u = (rot * self.pose.u).normalize();
        self.pose.v = (rot * self.pose.v).normalize();
        self.pose.n = self.pose.u.cross(self.pose.v);
    }

    /// Restore the home pose.
    pub fn reset(&mut self) {
        self.pose = self.home;
    }

    /// Execute one camera command with the given tuning.
    pub fn apply(&mut self, cmd: CameraCommand, tuning: &CameraTuning) {
        match cmd {
            CameraCommand::Move(axis, sign) => {
                let dir = self.axis(axis) * sign.factor();
                self.move_to(self.pos() + dir * tuning.move_step);
            }
            CameraCommand::Rotate(axis, sign) => {
                self.rotate(tuning.rotate_step * sign.factor(), self.axis(axis));
            }
            CameraCommand::Reset => self.reset(),
        }
    }

    fn axis(&self, axis: CameraAxis) -> Vec3 {
        match axis {
            CameraAxis::U => self.pose.u,
            CameraAxis::V => self.pose.v,
            CameraAxis::N => self.pose.n,
        }
    }

    /// Project a world point to square NDC. Returns None when the point is
    /// at or behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let d = point - self.pose.pos;
        let z = d.dot(self.pose.n);
        if z <= NEAR_PLANE {
            return None;
        }
        let scale = FOCAL_LENGTH / z;
        let center = Vec2::new(d.dot(self.pose.u), d.dot(self.pose.v)) * scale;
        Some(Projected { center, scale })
    }

    /// Project the world-axis guide lines through the origin. An axis with
    /// an endpoint behind the near plane is dropped rather than clipped.
    pub fn guides(&self, half_len: f32) -> Vec<GuideLine> {
        let mut lines = Vec::with_capacity(3);
        for (axis, dir) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().enumerate() {
            let (Some(a), Some(b)) = (
                self.project(dir * -half_len),
                self.project(dir * half_len),
            ) else {
                continue;
            };
            lines.push(GuideLine {
                a: a.center,
                b: b.center,
                axis,
            });
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CameraAxis, CameraCommand, Sign};
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn tuning() -> CameraTuning {
        CameraTuning {
            move_step: 10.0,
            rotate_step: 0.1,
        }
    }

    #[test]
    fn start_pose_looks_down_positive_z() {
        let vp = Viewport::start();
        assert_eq!(vp.pos(), Vec3::new(0.0, 0.0, -2000.0));
        assert_eq!(vp.u(), Vec3::X);
        assert_eq!(vp.v(), Vec3::Y);
        assert_eq!(vp.n(), Vec3::Z);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let vp = Viewport::start();
        let p = vp.project(Vec3::ZERO).unwrap();
        assert!(p.center.length() < EPS);
    }

    #[test]
    fn projection_scale_halves_with_doubled_depth() {
        let vp = Viewport::start();
        let near = vp.project(Vec3::ZERO).unwrap();
        let far = vp.project(Vec3::new(0.0, 0.0, 2000.0)).unwrap();
        assert!((near.scale - 2.0 * far.scale).abs() < EPS);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let vp = Viewport::start();
        assert!(vp.project(Vec3::new(0.0, 0.0, -3000.0)).is_none());
    }

    #[test]
    fn move_command_translates_along_basis() {
        let mut vp = Viewport::start();
        vp.apply(CameraCommand::Move(CameraAxis::N, Sign::Pos), &tuning());
        assert_eq!(vp.pos(), Vec3::new(0.0, 0.0, -1990.0));

        vp.apply(CameraCommand::Move(CameraAxis::U, Sign::Neg), &tuning());
        assert_eq!(vp.pos(), Vec3::new(-10.0, 0.0, -1990.0));
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut vp = Viewport::start();
        vp.apply(CameraCommand::Move(CameraAxis::V, Sign::Pos), &tuning());
        vp.apply(CameraCommand::Rotate(CameraAxis::U, Sign::Pos), &tuning());
        vp.apply(CameraCommand::Reset, &tuning());

        assert_eq!(vp.pos(), Vec3::new(0.0, 0.0, -2000.0));
        assert!((vp.n() - Vec3::Z).length() < EPS);
    }

    #[test]
    fn rotation_about_v_turns_forward_toward_u() {
        let mut vp = Viewport::start();
        vp.rotate(std::f32::consts::FRAC_PI_2, vp.v());
        // Right-handed: a quarter turn about +Y sends +Z to +X
        assert!((vp.n() - Vec3::X).length() < EPS);
    }

    #[test]
    fn guides_cover_all_axes_from_start_pose() {
        let vp = Viewport::start();
        let lines = vp.guides(1000.0);
        let axes: Vec<usize> = lines.iter().map(|l| l.axis).collect();
        assert_eq!(axes, vec![0, 1, 2]);
    }

    proptest! {
        #[test]
        fn basis_stays_orthonormal_under_rotation(
            spins in prop::collection::vec((0usize..3, -20i32..20), 0..40)
        ) {
            let mut vp = Viewport::start();
            for (axis, steps) in spins {
                let about = match axis {
                    0 => vp.u(),
                    1 => vp.v(),
                    _ => vp.n(),
                };
                vp.rotate(steps as f32 * 0.0314, about);
            }

            prop_assert!((vp.u().length() - 1.0).abs() < EPS);
            prop_assert!((vp.v().length() - 1.0).abs() < EPS);
            prop_assert!((vp.n().length() - 1.0).abs() < EPS);
            prop_assert!(vp.u().dot(vp.v()).abs() < EPS);
            prop_assert!(vp.u().dot(vp.n()).abs() < EPS);
            prop_assert!(vp.v().dot(vp.n()).abs() < EPS);
        }
    }
}
