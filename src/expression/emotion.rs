//! 情绪预设
//!
//! 每个情绪是一组不可变的基础权重。应用到权重图时，
//! mouth/brow/cheek/eye/nose 前缀的 key 乘以放大系数（默认 3.0），
//! 下颌和眨眼 key 保持原值（它们由独立通道驱动）。

use crate::blendshape::{is_amplified_key, BlendWeights};
use crate::{AvatarError, Result};

/// 离散情绪
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Surprised,
    Angry,
}

/// 各情绪的基础权重表（手调值）
const NEUTRAL: &[(&str, f32)] = &[];

const HAPPY: &[(&str, f32)] = &[
    ("mouthSmileLeft", 0.8),
    ("mouthSmileRight", 0.8),
    ("cheekSquintLeft", 0.3),
    ("cheekSquintRight", 0.3),
    ("eyeSquintLeft", 0.15),
    ("eyeSquintRight", 0.15),
    ("browInnerUp", 0.1),
];

const SAD: &[(&str, f32)] = &[
    ("mouthFrownLeft", 0.6),
    ("mouthFrownRight", 0.6),
    ("mouthShrugLower", 0.3),
    ("browInnerUp", 0.5),
    ("eyeSquintLeft", 0.1),
    ("eyeSquintRight", 0.1),
];

const SURPRISED: &[(&str, f32)] = &[
    ("browInnerUp", 0.7),
    ("browOuterUpLeft", 0.7),
    ("browOuterUpRight", 0.7),
    ("eyeWideLeft", 0.6),
    ("eyeWideRight", 0.6),
    ("mouthFunnel", 0.3),
    ("jawOpen", 0.3),
];

const ANGRY: &[(&str, f32)] = &[
    ("browDownLeft", 0.7),
    ("browDownRight", 0.7),
    ("noseSneerLeft", 0.4),
    ("noseSneerRight", 0.4),
    ("mouthFrownLeft", 0.4),
    ("mouthFrownRight", 0.4),
    ("eyeSquintLeft", 0.4),
    ("eyeSquintRight", 0.4),
    ("jawForward", 0.2),
];

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Angry,
    ];

    /// 通过名称查找情绪
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "neutral" => Ok(Emotion::Neutral),
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "surprised" => Ok(Emotion::Surprised),
            "angry" => Ok(Emotion::Angry),
            _ => Err(AvatarError::UnknownEmotion(name.to_string())),
        }
    }

    /// 获取名称
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprised => "surprised",
            Emotion::Angry => "angry",
        }
    }

    /// 获取基础权重表
    pub fn weights(&self) -> &'static [(&'static str, f32)] {
        match self {
            Emotion::Neutral => NEUTRAL,
            Emotion::Happy => HAPPY,
            Emotion::Sad => SAD,
            Emotion::Surprised => SURPRISED,
            Emotion::Angry => ANGRY,
        }
    }
}

/// 把情绪预设写入权重图（覆盖语义）
///
/// 放大后的值可能超过 1，由最终的 clamp_all 收口，
/// 这里不提前截断，保持和参考行为一致。
pub fn apply_preset(weights: &mut BlendWeights, emotion: Emotion, amplification: f32) {
    for &(key, base) in emotion.weights() {
        if is_amplified_key(key) {
            weights.set(key, base * amplification);
        } else {
            weights.set(key, base);
        }
    }
}
