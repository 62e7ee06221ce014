//! 头部姿态
//!
//! 外部（摄像头姿态估计）给出的 pitch/yaw/roll，各自独立限幅后
//! 转成头部/颈部骨骼的旋转，不走 morph 通道。缺失输入 = 本帧无贡献。

use glam::{EulerRot, Quat};

use crate::config::EngineConfig;

/// 头部姿态（弧度）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadPose {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl HeadPose {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// 各轴独立限幅到安全范围
    pub fn clamped(&self, cfg: &EngineConfig) -> HeadPose {
        HeadPose {
            pitch: self.pitch.clamp(-cfg.head_pitch_limit, cfg.head_pitch_limit),
            yaw: self.yaw.clamp(-cfg.head_yaw_limit, cfg.head_yaw_limit),
            roll: self.roll.clamp(-cfg.head_roll_limit, cfg.head_roll_limit),
        }
    }

    /// 限幅后转成头部骨骼旋转
    pub fn to_rotation(&self, cfg: &EngineConfig) -> Quat {
        let p = self.clamped(cfg);
        Quat::from_euler(EulerRot::XYZ, p.pitch, p.yaw, p.roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_per_axis() {
        let cfg = EngineConfig::default();
        let p = HeadPose::new(2.0, -3.0, 0.1).clamped(&cfg);
        assert!((p.pitch - cfg.head_pitch_limit).abs() < 1e-6);
        assert!((p.yaw + cfg.head_yaw_limit).abs() < 1e-6);
        assert!((p.roll - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_identity_when_zero() {
        let cfg = EngineConfig::default();
        let q = HeadPose::default().to_rotation(&cfg);
        assert!((q.w - 1.0).abs() < 1e-6);
    }
}
