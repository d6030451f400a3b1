//! 英雄快照编解码
//!
//! 使用 bincode 标准配置在内存中编码 `Hero`。解码经过与构建器相同的校验，
//! 损坏或伪造的快照不会产生非法英雄。

use bincode::{Decode, Encode, config};
use error::HeroError;
use serde::{Deserialize, Serialize};

use crate::{Armor, HairColor, HairType, Hero, Profession, Weapon};

/// 快照的线上格式，字段与 `Hero` 一一对应
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub(crate) struct HeroRecord {
    pub(crate) profession: Profession,
    pub(crate) name: String,
    pub(crate) hair_type: Option<HairType>,
    pub(crate) hair_color: Option<HairColor>,
    pub(crate) armor: Option<Armor>,
    pub(crate) weapon: Option<Weapon>,
}

/// 编码英雄快照
pub fn encode(hero: &Hero) -> Result<Vec<u8>, HeroError> {
    let record = HeroRecord::from(hero.clone());
    Ok(bincode::encode_to_vec(&record, config::standard())?)
}

/// 解码英雄快照，尾部多余字节视为损坏
pub fn decode(bytes: &[u8]) -> Result<Hero, HeroError> {
    let (record, read): (HeroRecord, usize) =
        bincode::decode_from_slice(bytes, config::standard())?;
    if read != bytes.len() {
        return Err(HeroError::Decode(format!(
            "{} trailing bytes after hero snapshot",
            bytes.len() - read
        )));
    }
    Hero::try_from(record)
}
