//! 表情混合器 - 每帧的权重聚合管线
//!
//! 固定顺序合成四路信号：
//! 1. 清零
//! 2. 情绪预设（mouth/brow/cheek/eye/nose 前缀放大，下颌/眨眼除外）
//! 3. 说话时 jawOpen 用正弦振荡覆盖（优先于预设）
//! 4. 音素口型抬升到下限（max 语义，保留情绪已有激活；眨眼 key 除外）
//! 5. 眨眼值无条件覆盖两个眨眼 key（最高优先级）
//! 6. 视线游移写入四对 eye-look key（仅启用时）
//! 7. 全部 clamp 到 [0,1]
//!
//! 纯同步计算，无 I/O、无阻塞；所有输入可缺省，缺省 = 本帧无贡献。

use crate::blendshape::{is_blink_key, BlendWeights, EYE_BLINK_LEFT, EYE_BLINK_RIGHT, JAW_OPEN};
use crate::config::EngineConfig;
use crate::expression::{apply_preset, phoneme_target, plateau_for, Emotion};
use crate::head::HeadPose;
use crate::motion::{write_gaze_keys, BlinkController, GazeWander, JawOscillator};

/// 一帧的输入信号，全部可缺省
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput<'a> {
    /// 当前情绪预设
    pub emotion: Option<Emotion>,
    /// 当前活动音素符号（不说话时为 None）
    pub phoneme: Option<&'a str>,
    /// 是否在说话（驱动下颌振荡）
    pub is_speaking: bool,
    /// 是否启用视线游移
    pub gaze_wander: bool,
    /// 摄像头头部姿态（驱动骨骼，不走 morph）
    pub head_pose: Option<HeadPose>,
}

/// 表情混合器
///
/// 持有一个形象的全部程序化状态（眨眼相位、视线目标、下颌相位）
/// 和复用的权重图。多实例时各自独立，互不共享。
pub struct ExpressionCompositor {
    blink: BlinkController,
    gaze: GazeWander,
    jaw: JawOscillator,
    weights: BlendWeights,
}

impl ExpressionCompositor {
    /// 创建混合器（熵种子）
    pub fn new(cfg: &EngineConfig) -> Self {
        Self {
            blink: BlinkController::new(cfg),
            gaze: GazeWander::new(cfg),
            jaw: JawOscillator::new(),
            weights: BlendWeights::zeroed(),
        }
    }

    /// 创建混合器（固定种子，测试用）
    pub fn with_seed(seed: u64, cfg: &EngineConfig) -> Self {
        Self {
            blink: BlinkController::with_seed(seed, cfg),
            gaze: GazeWander::with_seed(seed.wrapping_add(1), cfg),
            jaw: JawOscillator::with_seed(seed.wrapping_add(2)),
            weights: BlendWeights::zeroed(),
        }
    }

    /// 合成一帧的权重图
    ///
    /// - `dt`: 帧间隔（秒），推进眨眼/视线状态机
    /// - `elapsed`: 渲染开始以来的时钟（秒），驱动下颌正弦
    pub fn compose(
        &mut self,
        input: &FrameInput,
        dt: f32,
        elapsed: f32,
        cfg: &EngineConfig,
    ) -> &BlendWeights {
        // 1. 清零
        self.weights.reset();

        // 2. 情绪预设
        if let Some(emotion) = input.emotion {
            apply_preset(&mut self.weights, emotion, cfg.emotion_amplification);
        }

        // 3. 下颌振荡覆盖
        if input.is_speaking {
            self.weights.set(JAW_OPEN, self.jaw.value(elapsed, cfg));
        }

        // 4. 音素下限
        if let Some(symbol) = input.phoneme {
            if let Some(target) = phoneme_target(symbol) {
                if !is_blink_key(target) {
                    self.weights.raise(target, plateau_for(target, cfg));
                }
            }
        }

        // 5. 眨眼覆盖（无条件）
        let blink = self.blink.update(dt, cfg);
        self.weights.set(EYE_BLINK_LEFT, blink);
        self.weights.set(EYE_BLINK_RIGHT, blink);

        // 6. 视线游移
        if input.gaze_wander {
            let gaze = self.gaze.update(dt, cfg);
            write_gaze_keys(&mut self.weights, gaze);
        }

        // 7. 收口
        self.weights.clamp_all();
        &self.weights
    }

    /// 当前眨眼进度
    pub fn blink_value(&self) -> f32 {
        self.blink.value()
    }

    /// 最近一次合成的权重图
    pub fn weights(&self) -> &BlendWeights {
        &self.weights
    }

    /// 重置全部程序化状态
    pub fn reset(&mut self) {
        self.blink.reset();
        self.gaze.reset();
        self.weights.reset();
    }
}
