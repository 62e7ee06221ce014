//! 表情引擎调参配置
//!
//! 所有参数扁平化。这些数值来自参考行为的手调结果（magic number），
//! 没有"正确值"可推导，按需覆盖即可。

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 引擎配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // ========== 情绪预设 ==========
    /// 情绪权重放大系数，默认 3.0
    /// 只作用于 mouth/brow/cheek/eye/nose 前缀的 key，
    /// jawOpen 和眨眼 key 由独立通道驱动，不参与放大
    pub emotion_amplification: f32,

    // ========== 口型（音素下限）==========
    /// jawOpen 类音素的下限权重，默认 0.85
    pub viseme_jaw_plateau: f32,
    /// 其他口型 key 的下限权重，默认 0.55
    pub viseme_mouth_plateau: f32,

    // ========== 说话下颌振荡 ==========
    /// 振荡角频率（rad/s），默认 6.0
    pub jaw_frequency: f32,
    /// 振荡中心值，默认 0.4
    pub jaw_base: f32,
    /// 振荡幅度，默认 0.1
    /// base ± amplitude 即 jawOpen 的摆动区间 [0.3, 0.5]
    pub jaw_amplitude: f32,

    // ========== 眨眼 ==========
    /// 两次眨眼之间的最短间隔（秒），默认 2.5
    pub blink_interval_min: f32,
    /// 两次眨眼之间的最长间隔（秒），默认 5.0
    pub blink_interval_max: f32,
    /// 闭眼斜坡速度（进度/秒），默认 12.0
    /// 越大 → 闭眼越快
    pub blink_close_speed: f32,
    /// 睁眼斜坡速度（进度/秒），默认 8.0
    /// 略慢于闭眼，更接近真实眨眼
    pub blink_open_speed: f32,

    // ========== 视线游移 ==========
    /// 视线目标的水平/垂直偏移范围，默认 0.2
    /// 目标在 [-range, range] 内均匀采样
    pub gaze_range: f32,
    /// 每帧向目标插值的固定步长系数，默认 0.07
    /// 注意这是逐帧步长，不乘 delta-time（保留参考行为）
    pub gaze_lerp_step: f32,
    /// 重新选取视线目标的最短间隔（秒），默认 1.0
    pub gaze_retarget_min: f32,
    /// 重新选取视线目标的最长间隔（秒），默认 2.0
    pub gaze_retarget_max: f32,

    // ========== 头部姿态限幅 ==========
    /// pitch 限幅（弧度），默认 0.5
    pub head_pitch_limit: f32,
    /// yaw 限幅（弧度），默认 0.8
    pub head_yaw_limit: f32,
    /// roll 限幅（弧度），默认 0.4
    pub head_roll_limit: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            emotion_amplification: 3.0,

            viseme_jaw_plateau: 0.85,
            viseme_mouth_plateau: 0.55,

            jaw_frequency: 6.0,
            jaw_base: 0.4,
            jaw_amplitude: 0.1,

            blink_interval_min: 2.5,
            blink_interval_max: 5.0,
            blink_close_speed: 12.0,
            blink_open_speed: 8.0,

            gaze_range: 0.2,
            gaze_lerp_step: 0.07,
            gaze_retarget_min: 1.0,
            gaze_retarget_max: 2.0,

            head_pitch_limit: 0.5,
            head_yaw_limit: 0.8,
            head_roll_limit: 0.4,
        }
    }
}

/// 全局配置实例
static ENGINE_CONFIG: Lazy<RwLock<EngineConfig>> = Lazy::new(|| {
    RwLock::new(EngineConfig::default())
});

/// 获取当前配置（只读快照）
pub fn get_config() -> EngineConfig {
    ENGINE_CONFIG.read().unwrap().clone()
}

/// 手动设置配置（用于运行时调参）
/// 只影响之后创建的 AvatarInstance，已有实例持有自己的快照
pub fn set_config(config: EngineConfig) {
    *ENGINE_CONFIG.write().unwrap() = config;
}

/// 重置为默认配置
pub fn reset_config() {
    *ENGINE_CONFIG.write().unwrap() = EngineConfig::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let cfg = EngineConfig::default();
        assert!(cfg.blink_interval_min < cfg.blink_interval_max);
        assert!(cfg.gaze_retarget_min < cfg.gaze_retarget_max);
        // jaw 摆动区间 [0.3, 0.5]
        assert!((cfg.jaw_base - cfg.jaw_amplitude - 0.3).abs() < 1e-6);
        assert!((cfg.jaw_base + cfg.jaw_amplitude - 0.5).abs() < 1e-6);
    }
}
