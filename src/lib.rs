//! 英雄构建演示
//!
//! 通过构建器组装不可变的 [`Hero`] 并输出角色描述。

pub use error::{HeroError, handle_error};
pub use hero::{Armor, HairColor, HairType, Hero, HeroBuilder, Profession, Weapon, codec};

use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// 未设置 `RUST_LOG` 时的默认日志级别
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 安装输出到 stderr 的日志订阅器，stdout 只留给角色描述
///
/// 已存在全局订阅器时返回错误。
pub fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

/// 演示用的法师
pub fn demo_hero() -> Result<Hero, HeroError> {
    let mage = HeroBuilder::new(Profession::Mage, "Riobard")?
        .with_hair_color(HairColor::Black)
        .with_weapon(Weapon::Dagger)
        .with_hair_type(HairType::LongStraight)
        .build();
    Ok(mage)
}
