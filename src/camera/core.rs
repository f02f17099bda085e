use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// Camera placement produced once per frame by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Pose at `eye` looking at `target` with world +Y up.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit vector from the eye toward the target.
    ///
    /// Falls back to -Z when the eye sits on the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Distance between eye and target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

/// Perspective projection parameters for a render driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection from camera options at the given aspect ratio.
    #[must_use]
    pub fn from_options(opts: &CameraOptions, aspect: f32) -> Self {
        Self {
            aspect,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 75.0,
        }
    }

    /// Update uniform fields from a resolved pose and projection.
    pub fn update(&mut self, pose: &CameraPose, projection: &Projection) {
        let view_proj = projection.build_matrix() * pose.view_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = pose.eye.to_array();
        self.aspect = projection.aspect;
        self.forward = pose.forward().to_array();
        self.fovy = projection.fovy;
    }

    /// Raw bytes for a uniform buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_points_at_target() {
        let pose = CameraPose::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((pose.distance() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_pose_has_fallback_forward() {
        let pose = CameraPose::looking_at(Vec3::ONE, Vec3::ONE);
        assert_eq!(pose.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z_axis() {
        let pose = CameraPose::looking_at(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO);
        let p = pose.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!((p.z + 3.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_tracks_pose() {
        let pose = CameraPose::looking_at(Vec3::new(0.0, 2.0, 0.5), Vec3::ZERO);
        let projection = Projection::from_options(&CameraOptions::default(), 1.5);
        let mut uniform = CameraUniform::new();
        uniform.update(&pose, &projection);
        assert_eq!(uniform.position, [0.0, 2.0, 0.5]);
        assert_eq!(uniform.aspect, 1.5);
        assert_eq!(uniform.as_bytes().len(), size_of::<CameraUniform>());
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut projection = Projection::from_options(&CameraOptions::default(), 1.0);
        projection.resize(800, 0);
        assert_eq!(projection.aspect, 1.0);
        projection.resize(800, 400);
        assert_eq!(projection.aspect, 2.0);
    }
}
