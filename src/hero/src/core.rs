// src/hero/src/core.rs
use std::fmt;

use error::HeroError;
use serde::{Deserialize, Serialize};

use crate::{Armor, HairColor, HairType, HeroBuilder, Profession, Weapon, codec::HeroRecord};

/// 英雄核心数据结构（构建后不可变）
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HeroRecord", into = "HeroRecord")]
pub struct Hero {
    profession: Profession,
    name: String,
    hair_type: Option<HairType>,
    hair_color: Option<HairColor>,
    armor: Option<Armor>,
    weapon: Option<Weapon>,
}

impl Hero {
    /// 等同于 `HeroBuilder::new`
    pub fn builder(profession: Profession, name: impl Into<String>) -> Result<HeroBuilder, HeroError> {
        HeroBuilder::new(profession, name)
    }

    pub(crate) fn from_builder(builder: &HeroBuilder) -> Self {
        Self {
            profession: builder.profession,
            name: builder.name.clone(),
            hair_type: builder.hair_type,
            hair_color: builder.hair_color,
            armor: builder.armor,
            weapon: builder.weapon,
        }
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hair_type(&self) -> Option<HairType> {
        self.hair_type
    }

    pub fn hair_color(&self) -> Option<HairColor> {
        self.hair_color
    }

    pub fn armor(&self) -> Option<Armor> {
        self.armor
    }

    pub fn weapon(&self) -> Option<Weapon> {
        self.weapon
    }
}

/// 角色描述语句
impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Character {} is a {}", self.name, self.profession)?;

        if let Some(armor) = self.armor {
            write!(f, " wearing {armor}")?;
        }

        match (self.hair_type, self.hair_color) {
            (Some(hair_type), Some(hair_color)) => write!(f, " with {hair_type}, {hair_color} hair")?,
            (Some(hair_type), None) => write!(f, " with {hair_type} hair")?,
            (None, Some(hair_color)) => write!(f, " with {hair_color} hair")?,
            (None, None) => {}
        }

        match self.weapon {
            Some(weapon) => write!(f, " and is ready to battle with his {weapon}."),
            None => write!(f, " and is ready to battle bare-handed."),
        }
    }
}

impl TryFrom<HeroRecord> for Hero {
    type Error = HeroError;

    fn try_from(record: HeroRecord) -> Result<Self, Self::Error> {
        let builder = HeroBuilder::new(record.profession, record.name)?
            .with_hair_type(record.hair_type)
            .with_hair_color(record.hair_color)
            .with_armor(record.armor)
            .with_weapon(record.weapon);
        Ok(builder.build())
    }
}

impl From<Hero> for HeroRecord {
    fn from(hero: Hero) -> Self {
        Self {
            profession: hero.profession,
            name: hero.name,
            hair_type: hero.hair_type,
            hair_color: hero.hair_color,
            armor: hero.armor,
            weapon: hero.weapon,
        }
    }
}
