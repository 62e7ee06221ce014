//! Morph 绑定
//!
//! 镜像宿主蒙皮网格的 morph 字典（名称 → influence 下标）和并行的
//! influences 数组。每帧把权重图写入对应槽位；网格没有的 key 不写。
//! 绑定时对词汇表做一次校验并记录缺失 key，之后静默跳过。

use std::collections::HashMap;

use crate::blendshape::{key_index, BlendWeights};
use crate::{AvatarError, Result};

/// Morph target 绑定
pub struct MorphBinding {
    /// morph 名称 → influence 下标
    name_to_index: HashMap<String, usize>,
    /// influence 槽位（与网格的 morphTargetInfluences 等长）
    influences: Vec<f32>,
}

impl MorphBinding {
    /// 从网格字典创建绑定
    ///
    /// 字典中超出 influences 长度的下标是数据错误，直接拒绝；
    /// 引擎词汇表里网格缺失的 key 只告警一次，不算错误。
    pub fn new(dictionary: HashMap<String, usize>, influence_count: usize) -> Result<Self> {
        for (name, &index) in &dictionary {
            if index >= influence_count {
                return Err(AvatarError::Binding(format!(
                    "morph '{}' index {} out of range (influences len {})",
                    name, index, influence_count
                )));
            }
        }

        let unknown: Vec<&str> = dictionary
            .keys()
            .filter(|name| key_index(name).is_none())
            .map(|s| s.as_str())
            .collect();
        if !unknown.is_empty() {
            log::debug!("网格包含引擎词汇表外的 morph（忽略）: {:?}", unknown);
        }

        let missing = crate::blendshape::ALL_KEYS
            .iter()
            .filter(|&&k| !dictionary.contains_key(k))
            .count();
        if missing > 0 {
            log::warn!(
                "网格缺失 {} 个引擎词汇表 key（该部分输出将被丢弃）",
                missing
            );
        }

        Ok(Self {
            name_to_index: dictionary,
            influences: vec![0.0; influence_count],
        })
    }

    /// 把权重图写入 influences，未知 key 不动
    pub fn apply(&mut self, weights: &BlendWeights) {
        for (name, weight) in weights.iter() {
            if let Some(&i) = self.name_to_index.get(name) {
                self.influences[i] = weight;
            }
        }
    }

    /// 渲染器上传用的 influences 切片
    pub fn influences(&self) -> &[f32] {
        &self.influences
    }

    /// 网格是否暴露指定 morph
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// morph 数量
    pub fn morph_count(&self) -> usize {
        self.name_to_index.len()
    }
}
