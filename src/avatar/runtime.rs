//! Avatar 运行时实例
//!
//! 一个在屏形象对应一个实例，持有自己的混合器状态、morph 绑定
//! 和头部旋转输出。实例之间不共享任何可变状态。

use std::collections::HashMap;

use glam::Quat;

use crate::avatar::{ExpressionCompositor, FrameInput};
use crate::blendshape::BlendWeights;
use crate::config::{self, EngineConfig};
use crate::mesh::MorphBinding;
use crate::Result;

/// Avatar 实例
pub struct AvatarInstance {
    name: String,
    /// 本实例的配置快照（创建时取全局配置，可单独覆盖）
    cfg: EngineConfig,
    compositor: ExpressionCompositor,
    binding: Option<MorphBinding>,
    /// 本帧的头部骨骼旋转输出
    head_rotation: Quat,
    disposed: bool,
}

impl AvatarInstance {
    /// 创建实例，配置取全局快照
    pub fn new(name: impl Into<String>) -> Self {
        let cfg = config::get_config();
        let name = name.into();
        log::debug!("创建 avatar 实例: {}", name);
        Self {
            compositor: ExpressionCompositor::new(&cfg),
            name,
            cfg,
            binding: None,
            head_rotation: Quat::IDENTITY,
            disposed: false,
        }
    }

    /// 创建实例（固定种子，测试用）
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        let cfg = config::get_config();
        Self {
            compositor: ExpressionCompositor::with_seed(seed, &cfg),
            name: name.into(),
            cfg,
            binding: None,
            head_rotation: Quat::IDENTITY,
            disposed: false,
        }
    }

    /// 覆盖本实例的配置
    pub fn set_engine_config(&mut self, cfg: EngineConfig) {
        self.cfg = cfg;
    }

    /// 绑定网格的 morph 字典
    ///
    /// `dictionary`: morph 名称 → influence 下标；
    /// `influence_count`: influences 数组长度。
    pub fn bind_mesh(
        &mut self,
        dictionary: HashMap<String, usize>,
        influence_count: usize,
    ) -> Result<()> {
        let binding = MorphBinding::new(dictionary, influence_count)?;
        log::info!(
            "avatar '{}' 绑定网格: {} 个 morph, {} 个 influence 槽位",
            self.name,
            binding.morph_count(),
            influence_count
        );
        self.binding = Some(binding);
        Ok(())
    }

    /// 推进一帧
    ///
    /// - `dt`: 帧间隔（秒）
    /// - `elapsed`: 渲染开始以来的时钟（秒）
    ///
    /// 合成权重图、写入 influences、更新头部旋转。
    /// 已 dispose 的实例是 no-op。
    pub fn update(&mut self, input: &FrameInput, dt: f32, elapsed: f32) {
        if self.disposed {
            return;
        }

        self.compositor.compose(input, dt, elapsed, &self.cfg);
        if let Some(binding) = &mut self.binding {
            binding.apply(self.compositor.weights());
        }

        self.head_rotation = match input.head_pose {
            Some(pose) => pose.to_rotation(&self.cfg),
            None => Quat::IDENTITY,
        };
    }

    /// 最近一帧的权重图
    pub fn weights(&self) -> &BlendWeights {
        self.compositor.weights()
    }

    /// 最近一帧的头部骨骼旋转
    pub fn head_rotation(&self) -> Quat {
        self.head_rotation
    }

    /// 渲染器上传用的 influences（未绑定网格时为 None）
    pub fn influences(&self) -> Option<&[f32]> {
        self.binding.as_ref().map(|b| b.influences())
    }

    /// 实例名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 是否已释放
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// 释放实例：清空程序化状态、解除网格绑定
    ///
    /// 重复调用是 no-op。
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.compositor.reset();
        self.binding = None;
        self.head_rotation = Quat::IDENTITY;
        log::debug!("释放 avatar 实例: {}", self.name);
    }
}

impl Drop for AvatarInstance {
    fn drop(&mut self) {
        self.dispose();
    }
}
