//! Avatar 表情引擎 - 每帧混合表情/口型/闲置动作的运行时
//!
//! 为 3D 虚拟形象提供与渲染器解耦的表情计算：
//! - ARKit 风格 blendshape 权重图（BlendWeights）
//! - 情绪预设（neutral / happy / sad / surprised / angry）
//! - 音素 → 口型映射（lip-sync 下限混合）
//! - 程序化闲置动作（眨眼、视线游移、说话下颌振荡）
//! - 头部姿态（pitch/yaw/roll，驱动头部骨骼而非 morph）
//!
//! 所有计算纯同步、不阻塞，每帧调用一次。
//! 随机定时（眨眼间隔、视线改向）用帧间 delta-time 状态机实现，
//! 不依赖宿主定时器，固定种子下行为可复现。

pub mod avatar;
pub mod blendshape;
pub mod config;
pub mod expression;
pub mod head;
pub mod mesh;
pub mod motion;

pub use avatar::{AvatarInstance, ExpressionCompositor, FrameInput};
pub use blendshape::BlendWeights;
pub use config::EngineConfig;
pub use expression::Emotion;
pub use head::HeadPose;
pub use mesh::MorphBinding;
pub use motion::{BlinkController, GazeWander, JawOscillator};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("unknown emotion preset: {0}")]
    UnknownEmotion(String),

    #[error("morph binding error: {0}")]
    Binding(String),
}

pub type Result<T> = std::result::Result<T, AvatarError>;
