//! Blendshape 词汇表和权重图

mod keys;
mod weights;

pub use keys::{
    is_amplified_key, is_blink_key, is_jaw_key, key_index, ALL_KEYS, EYE_BLINK_LEFT,
    EYE_BLINK_RIGHT, EYE_LOOK_DOWN_LEFT, EYE_LOOK_DOWN_RIGHT, EYE_LOOK_IN_LEFT,
    EYE_LOOK_IN_RIGHT, EYE_LOOK_OUT_LEFT, EYE_LOOK_OUT_RIGHT, EYE_LOOK_UP_LEFT,
    EYE_LOOK_UP_RIGHT, JAW_OPEN,
};
pub use weights::BlendWeights;
