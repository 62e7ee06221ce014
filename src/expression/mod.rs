//! 表情静态查找表 - 情绪预设和音素口型映射
//!
//! 进程级常量，加载后不可变。

mod emotion;
mod viseme;

pub use emotion::{apply_preset, Emotion};
pub use viseme::{phoneme_target, plateau_for};
