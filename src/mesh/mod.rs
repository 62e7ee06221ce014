//! 消费端边界 - morph target 字典与 influences 绑定

mod binding;

pub use binding::MorphBinding;
