#![allow(dead_code)]

use gesture_estimator::{Finger, Point3};

const SEGMENT: f32 = 0.3;

/// Per-finger pose used to synthesize a landmark frame in image coordinates
/// (y down). Fingers bend toward +z, away from the camera.
#[derive(Clone, Copy, Debug)]
pub struct FingerSpec {
    /// Base-to-tip direction of the first bone, in the x/y plane.
    pub direction: [f32; 2],
    /// Total bend over the two finger joints, in degrees.
    pub bend_degrees: f32,
}

pub const UP: [f32; 2] = [0.0, -1.0];
pub const DOWN: [f32; 2] = [0.0, 1.0];
pub const LEFT: [f32; 2] = [-1.0, 0.0];
pub const RIGHT: [f32; 2] = [1.0, 0.0];

pub fn straight(direction: [f32; 2]) -> FingerSpec {
    FingerSpec {
        direction,
        bend_degrees: 0.0,
    }
}

pub fn bent(bend_degrees: f32) -> FingerSpec {
    FingerSpec {
        direction: UP,
        bend_degrees,
    }
}

pub fn folded() -> FingerSpec {
    bent(180.0)
}

#[derive(Clone, Debug)]
pub struct HandBuilder {
    fingers: [FingerSpec; 5],
}

impl HandBuilder {
    pub fn uniform(spec: FingerSpec) -> Self {
        Self { fingers: [spec; 5] }
    }

    pub fn open_up() -> Self {
        Self::uniform(straight(UP))
    }

    pub fn fist() -> Self {
        Self::uniform(folded())
    }

    pub fn finger(mut self, finger: Finger, spec: FingerSpec) -> Self {
        self.fingers[finger.index()] = spec;
        self
    }

    pub fn build(&self) -> Vec<Point3> {
        let mut points = vec![[0.0, 0.0, 0.0]];
        for (idx, spec) in self.fingers.iter().enumerate() {
            let base = [-0.4 + idx as f32 * 0.2, -0.6, 0.0];
            points.extend(finger_joints(base, spec));
        }
        points
    }
}

fn finger_joints(base: Point3, spec: &FingerSpec) -> [Point3; 4] {
    let [dx, dy] = spec.direction;
    let len = (dx * dx + dy * dy).sqrt();
    let d = [dx / len, dy / len, 0.0];
    let n = [0.0, 0.0, 1.0];
    let half = spec.bend_degrees.to_radians() / 2.0;

    let bone = |angle: f32| -> Point3 {
        let (s, c) = angle.sin_cos();
        [
            SEGMENT * (c * d[0] + s * n[0]),
            SEGMENT * (c * d[1] + s * n[1]),
            SEGMENT * (c * d[2] + s * n[2]),
        ]
    };

    let mut joints = [base; 4];
    for (k, angle) in [0.0, half, 2.0 * half].into_iter().enumerate() {
        let b = bone(angle);
        let prev = joints[k];
        joints[k + 1] = [prev[0] + b[0], prev[1] + b[1], prev[2] + b[2]];
    }
    joints
}
