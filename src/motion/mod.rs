//! 程序化闲置动作 - 眨眼、视线游移、说话下颌振荡
//!
//! 全部以帧间 delta-time 推进的状态机实现，不使用宿主定时器。
//! 每个 AvatarInstance 持有自己的一套状态，多个实例互不影响。

mod blink;
mod gaze;
mod speech;

pub use blink::{BlinkController, BlinkPhase};
pub use gaze::{write_gaze_keys, GazeWander};
pub use speech::JawOscillator;
