//! Репозиторий устройств: CRUD и поиск по одной колонке таблицы devices.

use crate::error::AppError;
use crate::services::search::{MatchMode, SearchField};
use async_trait::async_trait;
use dcm_entities::devices::{Column, DeviceInput, Entity as DeviceEntity, Model};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

/// Доступ к хранилищу устройств.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Все устройства в порядке id.
    async fn list_all(&self) -> Result<Vec<Model>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Model>, AppError>;

    /// Создать (id не задан) или полностью заменить (id задан) запись.
    /// Явный id, которого нет в таблице, отклоняется с `NotFound`.
    async fn save(&self, device: DeviceInput) -> Result<Model, AppError>;

    /// Удалить по id. Возвращает `true`, если запись существовала.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn find_by_field(&self, field: SearchField, value: &str)
        -> Result<Vec<Model>, AppError>;
}

/// Реализация репозитория поверх sea-orm.
#[derive(Clone)]
pub struct SeaOrmDeviceRepository {
    db: DatabaseConnection,
}

impl SeaOrmDeviceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeviceRepository for SeaOrmDeviceRepository {
    async fn list_all(&self) -> Result<Vec<Model>, AppError> {
        let devices = DeviceEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        Ok(devices)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Model>, AppError> {
        Ok(DeviceEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn save(&self, device: DeviceInput) -> Result<Model, AppError> {
        let Some(id) = device.id else {
            let saved = device.into_active_model().insert(&self.db).await?;
            tracing::debug!("Создано устройство {}", saved.id);
            return Ok(saved);
        };

        if !self.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Устройство не найдено: {id}")));
        }

        // Строку могли удалить между проверкой и обновлением
        let saved = device
            .into_active_model()
            .update(&self.db)
            .await
            .map_err(|e| update_error(id, e))?;
        tracing::debug!("Обновлено устройство {id}");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = DeviceEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let count = DeviceEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn find_by_field(
        &self,
        field: SearchField,
        value: &str,
    ) -> Result<Vec<Model>, AppError> {
        let column = field.column();
        let query = DeviceEntity::find().order_by_asc(Column::Id);

        let devices = match field.match_mode() {
            MatchMode::Exact => query.filter(column.eq(value)).all(&self.db).await?,
            // LOWER() в SQLite складывает только ASCII, поэтому регистр сравнивается здесь
            MatchMode::ContainsIgnoreCase => {
                let needle = value.to_lowercase();
                query
                    .filter(column.is_not_null())
                    .all(&self.db)
                    .await?
                    .into_iter()
                    .filter(|d| {
                        d.name
                            .as_deref()
                            .is_some_and(|n| contains_ignore_case(n, &needle))
                    })
                    .collect()
            }
        };
        Ok(devices)
    }
}

/// Ошибка UPDATE: строка, исчезнувшая после проверки существования, даёт `NotFound`.
fn update_error(id: i64, e: DbErr) -> AppError {
    match e {
        DbErr::RecordNotUpdated => AppError::NotFound(format!("Устройство не найдено: {id}")),
        other => other.into(),
    }
}

/// Содержит ли `haystack` подстроку `needle` (уже в нижнем регистре) без учёта регистра.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
