//! Avatar 实例 - 每帧混合管线和实例状态

mod compositor;
mod runtime;

pub use compositor::{ExpressionCompositor, FrameInput};
pub use runtime::AvatarInstance;
