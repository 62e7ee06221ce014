//! 音素 → 口型映射
//!
//! 每个音素映射到一个主导 morph target。混合时不覆盖，
//! 而是把该 key 抬升到音素对应的下限（jawOpen 类 0.85，其余 0.55），
//! 已超过下限的情绪激活保持不变。
//!
//! 符号集：Oculus viseme（sil/PP/FF/.../U）加参考行为用过的字母别名。

use crate::blendshape::{is_jaw_key, JAW_OPEN};
use crate::config::EngineConfig;

/// 音素 → 主导 morph target
///
/// 未知符号返回 None（本帧无口型贡献）；"sil" 是静音，同样返回 None。
pub fn phoneme_target(symbol: &str) -> Option<&'static str> {
    let target = match symbol {
        // 双唇闭合
        "PP" | "P" | "B" | "M" => "mouthPressLeft",
        // 唇齿
        "FF" | "F" | "V" => "mouthRollLower",
        // 舌尖伸出
        "TH" => "tongueOut",
        // 舌尖抵龈 / 软腭，开颌
        "DD" | "D" | "T" | "kk" | "K" | "G" => JAW_OPEN,
        // 龈后擦音，圆唇前突
        "CH" | "J" | "SH" => "mouthFunnel",
        // 齿擦音，横向拉伸
        "SS" | "S" | "Z" => "mouthStretchLeft",
        // 鼻音/边音
        "nn" | "N" | "L" => "mouthShrugUpper",
        // R 音，嘟唇
        "RR" | "R" => "mouthPucker",
        // 元音
        "aa" | "A" => JAW_OPEN,
        "E" => "mouthStretchLeft",
        "I" | "ih" => "mouthSmileLeft",
        "O" | "oh" => "mouthFunnel",
        "U" | "ou" => "mouthPucker",
        _ => return None,
    };
    Some(target)
}

/// 音素下限权重：jawOpen 类比横向口型高
pub fn plateau_for(target: &str, cfg: &EngineConfig) -> f32 {
    if is_jaw_key(target) {
        cfg.viseme_jaw_plateau
    } else {
        cfg.viseme_mouth_plateau
    }
}
