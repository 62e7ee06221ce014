//! 固定的 morph target 词汇表
//!
//! ARKit 52 个标准 blendshape 名称，外加 Oculus 口型（viseme）名称。
//! 不同模型暴露的 morph 子集不同，绑定时按名称匹配，缺失的 key 静默忽略。

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const JAW_OPEN: &str = "jawOpen";
pub const EYE_BLINK_LEFT: &str = "eyeBlinkLeft";
pub const EYE_BLINK_RIGHT: &str = "eyeBlinkRight";

pub const EYE_LOOK_IN_LEFT: &str = "eyeLookInLeft";
pub const EYE_LOOK_OUT_LEFT: &str = "eyeLookOutLeft";
pub const EYE_LOOK_IN_RIGHT: &str = "eyeLookInRight";
pub const EYE_LOOK_OUT_RIGHT: &str = "eyeLookOutRight";
pub const EYE_LOOK_UP_LEFT: &str = "eyeLookUpLeft";
pub const EYE_LOOK_UP_RIGHT: &str = "eyeLookUpRight";
pub const EYE_LOOK_DOWN_LEFT: &str = "eyeLookDownLeft";
pub const EYE_LOOK_DOWN_RIGHT: &str = "eyeLookDownRight";

/// 全部已知 key（ARKit 52 + viseme）
///
/// 权重图以此为索引基准，顺序固定。
pub const ALL_KEYS: &[&str] = &[
    // 眉
    "browDownLeft",
    "browDownRight",
    "browInnerUp",
    "browOuterUpLeft",
    "browOuterUpRight",
    // 脸颊
    "cheekPuff",
    "cheekSquintLeft",
    "cheekSquintRight",
    // 眼
    EYE_BLINK_LEFT,
    EYE_BLINK_RIGHT,
    EYE_LOOK_DOWN_LEFT,
    EYE_LOOK_DOWN_RIGHT,
    EYE_LOOK_IN_LEFT,
    EYE_LOOK_IN_RIGHT,
    EYE_LOOK_OUT_LEFT,
    EYE_LOOK_OUT_RIGHT,
    EYE_LOOK_UP_LEFT,
    EYE_LOOK_UP_RIGHT,
    "eyeSquintLeft",
    "eyeSquintRight",
    "eyeWideLeft",
    "eyeWideRight",
    // 下颌
    "jawForward",
    "jawLeft",
    JAW_OPEN,
    "jawRight",
    // 嘴
    "mouthClose",
    "mouthDimpleLeft",
    "mouthDimpleRight",
    "mouthFrownLeft",
    "mouthFrownRight",
    "mouthFunnel",
    "mouthLeft",
    "mouthLowerDownLeft",
    "mouthLowerDownRight",
    "mouthPressLeft",
    "mouthPressRight",
    "mouthPucker",
    "mouthRight",
    "mouthRollLower",
    "mouthRollUpper",
    "mouthShrugLower",
    "mouthShrugUpper",
    "mouthSmileLeft",
    "mouthSmileRight",
    "mouthStretchLeft",
    "mouthStretchRight",
    "mouthUpperUpLeft",
    "mouthUpperUpRight",
    // 鼻
    "noseSneerLeft",
    "noseSneerRight",
    // 舌
    "tongueOut",
    // Oculus viseme（Ready Player Me 模型额外暴露）
    "viseme_sil",
    "viseme_PP",
    "viseme_FF",
    "viseme_TH",
    "viseme_DD",
    "viseme_kk",
    "viseme_CH",
    "viseme_SS",
    "viseme_nn",
    "viseme_RR",
    "viseme_aa",
    "viseme_E",
    "viseme_I",
    "viseme_O",
    "viseme_U",
];

/// key -> 词汇表索引
static KEY_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    ALL_KEYS
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect()
});

/// 查找 key 在词汇表中的索引，未知 key 返回 None
pub fn key_index(name: &str) -> Option<usize> {
    KEY_INDEX.get(name).copied()
}

/// 是否是眨眼 key
pub fn is_blink_key(name: &str) -> bool {
    name == EYE_BLINK_LEFT || name == EYE_BLINK_RIGHT
}

/// 是否是下颌 key
pub fn is_jaw_key(name: &str) -> bool {
    name.starts_with("jaw")
}

/// 是否参与情绪放大
///
/// mouth/brow/cheek/eye/nose 前缀参与，
/// 下颌和眨眼 key 由独立通道驱动，排除在外。
pub fn is_amplified_key(name: &str) -> bool {
    if is_blink_key(name) || is_jaw_key(name) {
        return false;
    }
    name.starts_with("mouth")
        || name.starts_with("brow")
        || name.starts_with("cheek")
        || name.starts_with("eye")
        || name.starts_with("nose")
}
