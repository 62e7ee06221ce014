//! 说话下颌振荡
//!
//! 说话时 jawOpen 用经过时间的正弦函数覆盖（优先于情绪预设的下颌值），
//! 摆动区间约 [0.3, 0.5]。相位在实例创建时随机一次，
//! 避免多个形象同屏时下颌同步开合。

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;

/// 下颌振荡器
pub struct JawOscillator {
    /// 每实例固定的随机相位
    phase: f32,
}

impl JawOscillator {
    /// 创建振荡器（熵种子相位）
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// 创建振荡器（固定种子，测试用）
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        Self {
            phase: rng.gen_range(0.0..TAU),
        }
    }

    /// 指定相位创建（测试用）
    pub fn with_phase(phase: f32) -> Self {
        Self { phase }
    }

    /// 按经过时间取 jawOpen 值，落在 [base - amp, base + amp]
    pub fn value(&self, elapsed: f32, cfg: &EngineConfig) -> f32 {
        cfg.jaw_base + cfg.jaw_amplitude * (cfg.jaw_frequency * elapsed + self.phase).sin()
    }

    /// 当前相位
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Default for JawOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_in_range() {
        let cfg = EngineConfig::default();
        let jaw = JawOscillator::with_seed(11);
        // 扫一个完整周期以上
        let mut t = 0.0f32;
        let mut max = f32::MIN;
        let mut min = f32::MAX;
        while t < 2.0 {
            let v = jaw.value(t, &cfg);
            assert!((0.3 - 1e-4..=0.5 + 1e-4).contains(&v), "jaw {} at t={}", v, t);
            max = max.max(v);
            min = min.min(v);
            t += 1.0 / 120.0;
        }
        // 一个周期内应接近两端
        assert!(max > 0.49);
        assert!(min < 0.31);
    }

    #[test]
    fn test_phase_randomized_per_instance() {
        let a = JawOscillator::with_seed(1);
        let b = JawOscillator::with_seed(2);
        assert!((a.phase() - b.phase()).abs() > 1e-3);
    }
}
