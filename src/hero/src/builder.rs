// src/hero/src/builder.rs

use error::HeroError;
use tracing::{debug, warn};

use crate::{Armor, HairColor, HairType, Hero, Profession, Weapon};

/// 英雄构建器
///
/// 创建时校验必填字段（职业、名字），其余属性通过链式调用设置，
/// 任意顺序、后写覆盖前写。`build` 不消耗构建器，可重复构建。
///
/// ```
/// use hero::{HairColor, HeroBuilder, Profession, Weapon};
///
/// let mage = HeroBuilder::new(Profession::Mage, "Riobard")?
///     .with_hair_color(HairColor::Black)
///     .with_weapon(Weapon::Dagger)
///     .build();
///
/// assert_eq!(mage.name(), "Riobard");
/// assert_eq!(mage.hair_type(), None);
/// # Ok::<(), hero::HeroError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroBuilder {
    pub(crate) profession: Profession,
    pub(crate) name: String,
    pub(crate) hair_type: Option<HairType>,
    pub(crate) hair_color: Option<HairColor>,
    pub(crate) armor: Option<Armor>,
    pub(crate) weapon: Option<Weapon>,
}

impl HeroBuilder {
    /// 以必填字段创建构建器，名字为空时返回 `InvalidArgument`
    pub fn new(profession: Profession, name: impl Into<String>) -> Result<Self, HeroError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            profession,
            name,
            hair_type: None,
            hair_color: None,
            armor: None,
            weapon: None,
        })
    }

    /// 接受可能缺失的输入，任一必填字段缺失即失败
    pub fn from_parts(profession: Option<Profession>, name: Option<&str>) -> Result<Self, HeroError> {
        match (profession, name) {
            (Some(profession), Some(name)) => Self::new(profession, name),
            _ => {
                warn!(?profession, ?name, "rejected hero without profession or name");
                Err(HeroError::invalid_argument(
                    "profession and name can not be null",
                ))
            }
        }
    }

    /// 从文本解析职业（不区分大小写），未知职业返回 `InvalidArgument`
    pub fn parse(profession: &str, name: &str) -> Result<Self, HeroError> {
        let parsed = profession.trim().parse::<Profession>().map_err(|_| {
            warn!(profession, "rejected unknown profession");
            HeroError::invalid_argument(format!("unknown profession `{profession}`"))
        })?;
        Self::new(parsed, name)
    }

    pub fn with_hair_type(mut self, hair_type: impl Into<Option<HairType>>) -> Self {
        self.hair_type = hair_type.into();
        self
    }

    pub fn with_hair_color(mut self, hair_color: impl Into<Option<HairColor>>) -> Self {
        self.hair_color = hair_color.into();
        self
    }

    pub fn with_armor(mut self, armor: impl Into<Option<Armor>>) -> Self {
        self.armor = armor.into();
        self
    }

    pub fn with_weapon(mut self, weapon: impl Into<Option<Weapon>>) -> Self {
        self.weapon = weapon.into();
        self
    }

    /// 按当前状态生成新英雄
    pub fn build(&self) -> Hero {
        debug!(
            name = %self.name,
            profession = %self.profession,
            "building hero"
        );
        Hero::from_builder(self)
    }
}

/// 名字不能为空串（空白字符照常保留）
pub(crate) fn validate_name(name: &str) -> Result<(), HeroError> {
    if name.is_empty() {
        warn!("rejected hero with empty name");
        return Err(HeroError::invalid_argument("name can not be empty"));
    }
    Ok(())
}
