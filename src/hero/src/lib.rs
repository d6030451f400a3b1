// src/hero/src/lib.rs

//! 英雄构建系统
//!
//! 通过链式构建器 [`HeroBuilder`] 生成不可变的 [`Hero`]。

mod appearance;
mod builder;
mod class;
mod core;
mod gear;

pub mod codec;


// 重新导出主要类型
pub use self::{
    appearance::{HairColor, HairType},
    builder::HeroBuilder,
    class::Profession,
    core::Hero,
    gear::{Armor, Weapon},
};
pub use error::HeroError;
