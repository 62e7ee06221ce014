//! 权重图
//!
//! 以固定词汇表为索引的权重向量，每帧复用同一实例，不重复分配。

use super::keys::{key_index, ALL_KEYS};

/// Blendshape 权重图（key -> [0,1] 标量）
///
/// 缺失 key 视为 0。未知 key 的写入是静默 no-op，
/// 不同模型词汇表不一致属正常情况，不作为错误处理。
#[derive(Clone, Debug)]
pub struct BlendWeights {
    values: Vec<f32>,
}

impl BlendWeights {
    /// 创建全零权重图
    pub fn zeroed() -> Self {
        Self {
            values: vec![0.0; ALL_KEYS.len()],
        }
    }

    /// 全部清零
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    /// 设置权重（覆盖）
    pub fn set(&mut self, name: &str, weight: f32) {
        if let Some(i) = key_index(name) {
            self.values[i] = weight;
        }
    }

    /// 抬升权重到下限：weight = max(existing, floor)
    ///
    /// 音素口型用此语义，保留情绪已有的部分激活。
    pub fn raise(&mut self, name: &str, floor: f32) {
        if let Some(i) = key_index(name) {
            if self.values[i] < floor {
                self.values[i] = floor;
            }
        }
    }

    /// 获取权重，未知 key 返回 0
    pub fn get(&self, name: &str) -> f32 {
        key_index(name).map(|i| self.values[i]).unwrap_or(0.0)
    }

    /// 把所有权重限制到 [0,1]
    ///
    /// 输出给渲染器之前必须调用，越界权重会产生视觉异常的网格。
    pub fn clamp_all(&mut self) {
        for v in &mut self.values {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// 遍历 (key, weight)
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        ALL_KEYS
            .iter()
            .zip(self.values.iter())
            .map(|(&name, &w)| (name, w))
    }

    /// key 数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut w = BlendWeights::zeroed();
        assert_eq!(w.get("mouthSmileLeft"), 0.0);
        w.set("mouthSmileLeft", 0.8);
        assert!((w.get("mouthSmileLeft") - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_key_noop() {
        let mut w = BlendWeights::zeroed();
        w.set("doesNotExist", 0.5);
        w.raise("doesNotExist", 0.5);
        assert_eq!(w.get("doesNotExist"), 0.0);
        // 其他 key 不受影响
        assert!(w.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_raise_is_floor() {
        let mut w = BlendWeights::zeroed();
        w.set("mouthPressLeft", 0.7);
        w.raise("mouthPressLeft", 0.55);
        assert!((w.get("mouthPressLeft") - 0.7).abs() < 1e-6);
        w.raise("mouthPressLeft", 0.9);
        assert!((w.get("mouthPressLeft") - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_all() {
        let mut w = BlendWeights::zeroed();
        w.set("jawOpen", 2.4);
        w.set("mouthFunnel", -0.3);
        w.clamp_all();
        assert_eq!(w.get("jawOpen"), 1.0);
        assert_eq!(w.get("mouthFunnel"), 0.0);
    }
}
