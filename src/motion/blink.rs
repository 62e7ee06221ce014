//! 眨眼状态机
//!
//! idle →（随机 2.5~5s 定时到期）→ closing（线性 0→1）→ opening（线性 1→0）→ idle，
//! 回到 idle 时重新抽取下一次间隔。
//! 输出值无条件覆盖两个眨眼 key，优先级高于情绪和音素。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;

/// 眨眼阶段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkPhase {
    /// 睁眼等待中
    Idle,
    /// 闭眼斜坡
    Closing,
    /// 睁眼斜坡
    Opening,
}

/// 眨眼控制器
pub struct BlinkController {
    phase: BlinkPhase,
    /// 眨眼进度 [0,1]，0 = 全睁，1 = 全闭
    progress: f32,
    /// idle 已累计时间（秒）
    timer: f32,
    /// 下一次眨眼的触发间隔（秒）
    next_in: f32,
    rng: StdRng,
}

impl BlinkController {
    /// 创建控制器（熵种子）
    pub fn new(cfg: &EngineConfig) -> Self {
        Self::from_rng(StdRng::from_entropy(), cfg)
    }

    /// 创建控制器（固定种子，测试用）
    pub fn with_seed(seed: u64, cfg: &EngineConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), cfg)
    }

    fn from_rng(mut rng: StdRng, cfg: &EngineConfig) -> Self {
        let next_in = rng.gen_range(cfg.blink_interval_min..=cfg.blink_interval_max);
        Self {
            phase: BlinkPhase::Idle,
            progress: 0.0,
            timer: 0.0,
            next_in,
            rng,
        }
    }

    /// 推进一帧，返回当前眨眼进度 [0,1]
    pub fn update(&mut self, dt: f32, cfg: &EngineConfig) -> f32 {
        match self.phase {
            BlinkPhase::Idle => {
                self.timer += dt;
                if self.timer >= self.next_in {
                    self.phase = BlinkPhase::Closing;
                }
            }
            BlinkPhase::Closing => {
                self.progress += dt * cfg.blink_close_speed;
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.phase = BlinkPhase::Opening;
                }
            }
            BlinkPhase::Opening => {
                self.progress -= dt * cfg.blink_open_speed;
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.phase = BlinkPhase::Idle;
                    self.timer = 0.0;
                    self.next_in = self
                        .rng
                        .gen_range(cfg.blink_interval_min..=cfg.blink_interval_max);
                }
            }
        }
        self.progress
    }

    /// 当前眨眼进度 [0,1]
    pub fn value(&self) -> f32 {
        self.progress
    }

    /// 当前阶段
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// 重置到 idle（dispose 时调用）
    pub fn reset(&mut self) {
        self.phase = BlinkPhase::Idle;
        self.progress = 0.0;
        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_initial_idle() {
        let cfg = EngineConfig::default();
        let b = BlinkController::with_seed(7, &cfg);
        assert_eq!(b.phase(), BlinkPhase::Idle);
        assert_eq!(b.value(), 0.0);
    }

    #[test]
    fn test_full_blink_cycle() {
        let cfg = EngineConfig::default();
        let mut b = BlinkController::with_seed(7, &cfg);

        // 最多 6 秒内必定触发一次眨眼（间隔上限 5s）
        let mut peaked = false;
        let mut returned = false;
        let mut started = false;
        for _ in 0..(6.0 / DT) as usize {
            let v = b.update(DT, &cfg);
            assert!((0.0..=1.0).contains(&v));
            if b.phase() != BlinkPhase::Idle {
                started = true;
            }
            if (v - 1.0).abs() < 1e-6 {
                peaked = true;
            }
            if started && peaked && b.phase() == BlinkPhase::Idle {
                returned = true;
                break;
            }
        }
        assert!(started, "blink never triggered");
        assert!(peaked, "blink never fully closed");
        assert!(returned, "blink never returned to idle");
    }

    #[test]
    fn test_interval_resampled() {
        let cfg = EngineConfig::default();
        let mut b = BlinkController::with_seed(42, &cfg);
        // 跑 30 秒，应出现多次眨眼
        let mut blinks = 0;
        let mut was_closing = false;
        for _ in 0..(30.0 / DT) as usize {
            b.update(DT, &cfg);
            let closing = b.phase() == BlinkPhase::Closing;
            if closing && !was_closing {
                blinks += 1;
            }
            was_closing = closing;
        }
        // 间隔 2.5~5s，30 秒应有 5 次以上
        assert!(blinks >= 5, "only {} blinks in 30s", blinks);
    }

    #[test]
    fn test_reset() {
        let cfg = EngineConfig::default();
        let mut b = BlinkController::with_seed(7, &cfg);
        for _ in 0..(6.0 / DT) as usize {
            b.update(DT, &cfg);
        }
        b.reset();
        assert_eq!(b.phase(), BlinkPhase::Idle);
        assert_eq!(b.value(), 0.0);
        // 再次 reset 无副作用
        b.reset();
        assert_eq!(b.value(), 0.0);
    }
}
