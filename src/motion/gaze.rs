//! 视线游移
//!
//! 每 1~2 秒随机选取一个目标偏移（水平/垂直各在 [-range, range] 内），
//! 当前视线逐帧以固定步长系数向目标线性插值。
//! 有符号分量拆成非负的 in/out（水平）和 up/down（垂直）四对 key，
//! 每对同一时刻只有一侧非零；"in" 指朝鼻侧，左右眼水平方向交叉。

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::blendshape::{
    BlendWeights, EYE_LOOK_DOWN_LEFT, EYE_LOOK_DOWN_RIGHT, EYE_LOOK_IN_LEFT, EYE_LOOK_IN_RIGHT,
    EYE_LOOK_OUT_LEFT, EYE_LOOK_OUT_RIGHT, EYE_LOOK_UP_LEFT, EYE_LOOK_UP_RIGHT,
};
use crate::config::EngineConfig;

/// 视线游移控制器
pub struct GazeWander {
    /// 当前平滑后的视线偏移（x 水平，y 垂直）
    current: Vec2,
    /// 插值目标
    target: Vec2,
    /// 距上次改向已累计时间（秒）
    timer: f32,
    /// 下一次改向间隔（秒）
    next_in: f32,
    rng: StdRng,
}

impl GazeWander {
    /// 创建控制器（熵种子）
    pub fn new(cfg: &EngineConfig) -> Self {
        Self::from_rng(StdRng::from_entropy(), cfg)
    }

    /// 创建控制器（固定种子，测试用）
    pub fn with_seed(seed: u64, cfg: &EngineConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), cfg)
    }

    fn from_rng(mut rng: StdRng, cfg: &EngineConfig) -> Self {
        let next_in = rng.gen_range(cfg.gaze_retarget_min..=cfg.gaze_retarget_max);
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            timer: 0.0,
            next_in,
            rng,
        }
    }

    /// 推进一帧，返回平滑后的视线偏移
    pub fn update(&mut self, dt: f32, cfg: &EngineConfig) -> Vec2 {
        self.timer += dt;
        if self.timer >= self.next_in {
            self.timer = 0.0;
            self.next_in = self
                .rng
                .gen_range(cfg.gaze_retarget_min..=cfg.gaze_retarget_max);
            self.target = Vec2::new(
                self.rng.gen_range(-cfg.gaze_range..=cfg.gaze_range),
                self.rng.gen_range(-cfg.gaze_range..=cfg.gaze_range),
            );
        }

        // 固定逐帧步长（保留参考行为，不乘 dt）
        self.current += (self.target - self.current) * cfg.gaze_lerp_step;
        self.current
    }

    /// 当前视线偏移
    pub fn value(&self) -> Vec2 {
        self.current
    }

    /// 重置回正视（dispose 时调用）
    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
        self.target = Vec2::ZERO;
        self.timer = 0.0;
    }
}

/// 把视线偏移写入四对 eye-look key
///
/// 水平 h > 0 = 视线向左偏：左眼向外（eyeLookOutLeft）、右眼向鼻侧（eyeLookInRight）；
/// h < 0 镜像。垂直 v > 0 = 向上。每对只写非零一侧，另一侧写 0。
pub fn write_gaze_keys(weights: &mut BlendWeights, gaze: Vec2) {
    let h = gaze.x;
    let v = gaze.y;

    if h >= 0.0 {
        weights.set(EYE_LOOK_OUT_LEFT, h);
        weights.set(EYE_LOOK_IN_LEFT, 0.0);
        weights.set(EYE_LOOK_IN_RIGHT, h);
        weights.set(EYE_LOOK_OUT_RIGHT, 0.0);
    } else {
        weights.set(EYE_LOOK_IN_LEFT, -h);
        weights.set(EYE_LOOK_OUT_LEFT, 0.0);
        weights.set(EYE_LOOK_OUT_RIGHT, -h);
        weights.set(EYE_LOOK_IN_RIGHT, 0.0);
    }

    if v >= 0.0 {
        weights.set(EYE_LOOK_UP_LEFT, v);
        weights.set(EYE_LOOK_UP_RIGHT, v);
        weights.set(EYE_LOOK_DOWN_LEFT, 0.0);
        weights.set(EYE_LOOK_DOWN_RIGHT, 0.0);
    } else {
        weights.set(EYE_LOOK_DOWN_LEFT, -v);
        weights.set(EYE_LOOK_DOWN_RIGHT, -v);
        weights.set(EYE_LOOK_UP_LEFT, 0.0);
        weights.set(EYE_LOOK_UP_RIGHT, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_converges_to_target() {
        let cfg = EngineConfig::default();
        let mut g = GazeWander::with_seed(3, &cfg);
        // 跑到第一次改向之后再跑半秒，当前值应明显离开原点
        let mut moved = false;
        for _ in 0..(4.0 / DT) as usize {
            let v = g.update(DT, &cfg);
            assert!(v.x.abs() <= cfg.gaze_range + 1e-4);
            assert!(v.y.abs() <= cfg.gaze_range + 1e-4);
            if v.length() > 0.01 {
                moved = true;
            }
        }
        assert!(moved, "gaze never wandered");
    }

    #[test]
    fn test_crossed_horizontal_mapping() {
        let mut w = BlendWeights::zeroed();
        write_gaze_keys(&mut w, Vec2::new(0.2, 0.0));
        assert!(w.get(EYE_LOOK_OUT_LEFT) > 0.0);
        assert_eq!(w.get(EYE_LOOK_IN_LEFT), 0.0);
        assert!(w.get(EYE_LOOK_IN_RIGHT) > 0.0);
        assert_eq!(w.get(EYE_LOOK_OUT_RIGHT), 0.0);

        write_gaze_keys(&mut w, Vec2::new(-0.2, 0.0));
        assert!(w.get(EYE_LOOK_IN_LEFT) > 0.0);
        assert_eq!(w.get(EYE_LOOK_OUT_LEFT), 0.0);
        assert!(w.get(EYE_LOOK_OUT_RIGHT) > 0.0);
        assert_eq!(w.get(EYE_LOOK_IN_RIGHT), 0.0);
    }

    #[test]
    fn test_pairs_mutually_exclusive() {
        let mut w = BlendWeights::zeroed();
        let samples = [
            Vec2::new(0.2, 0.1),
            Vec2::new(-0.15, -0.2),
            Vec2::new(0.0, 0.0),
            Vec2::new(-0.01, 0.2),
        ];
        for s in samples {
            write_gaze_keys(&mut w, s);
            assert_eq!(w.get(EYE_LOOK_IN_LEFT) * w.get(EYE_LOOK_OUT_LEFT), 0.0);
            assert_eq!(w.get(EYE_LOOK_IN_RIGHT) * w.get(EYE_LOOK_OUT_RIGHT), 0.0);
            assert_eq!(w.get(EYE_LOOK_UP_LEFT) * w.get(EYE_LOOK_DOWN_LEFT), 0.0);
            assert_eq!(w.get(EYE_LOOK_UP_RIGHT) * w.get(EYE_LOOK_DOWN_RIGHT), 0.0);
        }
    }

    #[test]
    fn test_vertical_mapping() {
        let mut w = BlendWeights::zeroed();
        write_gaze_keys(&mut w, Vec2::new(0.0, -0.12));
        assert!((w.get(EYE_LOOK_DOWN_LEFT) - 0.12).abs() < 1e-6);
        assert!((w.get(EYE_LOOK_DOWN_RIGHT) - 0.12).abs() < 1e-6);
        assert_eq!(w.get(EYE_LOOK_UP_LEFT), 0.0);
        assert_eq!(w.get(EYE_LOOK_UP_RIGHT), 0.0);
    }
}
