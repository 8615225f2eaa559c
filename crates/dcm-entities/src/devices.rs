//! Entity для таблицы devices.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "devices")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Автоинкрементный первичный ключ, назначается БД
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: Option<String>,

    pub mac_address: Option<String>,

    pub ip_address: Option<String>,

    /// Тип устройства (колонка `type`)
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub device_type: Option<String>,

    pub serial_number: Option<String>,

    /// Владелец устройства
    pub owner: Option<String>,

    /// Произвольная конфигурация, хранится как есть
    pub config: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Входные данные устройства: JSON-тело API или поля HTML-формы.
///
/// `id` отсутствует при создании и задан при полной замене записи.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub config: Option<String>,
}

impl DeviceInput {
    /// Собрать ActiveModel: все колонки кроме id выставлены, id берётся из входа.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: match self.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(self.name),
            mac_address: Set(self.mac_address),
            ip_address: Set(self.ip_address),
            device_type: Set(self.device_type),
            serial_number: Set(self.serial_number),
            owner: Set(self.owner),
            config: Set(self.config),
        }
    }
}
