//! Поиск устройств по имени поля: общая таблица диспетчеризации для API и HTML-представления.

use crate::error::AppError;
use crate::services::device_repository::DeviceRepository;
use dcm_entities::devices::{Column, Model};

/// Поле, по которому разрешён поиск.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Owner,
    MacAddress,
    Type,
    SerialNumber,
    IpAddress,
    Config,
}

/// Способ сравнения значения с колонкой.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Подстрока без учёта регистра
    ContainsIgnoreCase,
    /// Точное совпадение с учётом регистра
    Exact,
}

/// Что делать с нераспознанным именем поля.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownField {
    /// Ошибка 400 (JSON API)
    Reject,
    /// Вернуть полный список (HTML-представление)
    ListAll,
}

/// Имена полей в нижнем регистре, как их принимает параметр `field`.
const SEARCH_FIELDS: [(&str, SearchField); 7] = [
    ("name", SearchField::Name),
    ("owner", SearchField::Owner),
    ("macaddress", SearchField::MacAddress),
    ("type", SearchField::Type),
    ("serialnumber", SearchField::SerialNumber),
    ("ipaddress", SearchField::IpAddress),
    ("config", SearchField::Config),
];

impl SearchField {
    /// Разобрать имя поля без учёта регистра.
    pub fn parse(field: &str) -> Option<Self> {
        let key = field.to_lowercase();
        SEARCH_FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, f)| *f)
    }

    pub fn column(self) -> Column {
        match self {
            SearchField::Name => Column::Name,
            SearchField::Owner => Column::Owner,
            SearchField::MacAddress => Column::MacAddress,
            SearchField::Type => Column::DeviceType,
            SearchField::SerialNumber => Column::SerialNumber,
            SearchField::IpAddress => Column::IpAddress,
            SearchField::Config => Column::Config,
        }
    }

    /// Только имя ищется по подстроке без учёта регистра, остальные поля точно.
    pub fn match_mode(self) -> MatchMode {
        match self {
            SearchField::Name => MatchMode::ContainsIgnoreCase,
            _ => MatchMode::Exact,
        }
    }
}

/// Найти устройства по полю `field` со значением `value`.
pub async fn search_devices(
    repo: &dyn DeviceRepository,
    field: &str,
    value: &str,
    unknown: UnknownField,
) -> Result<Vec<Model>, AppError> {
    match (SearchField::parse(field), unknown) {
        (Some(search_field), _) => repo.find_by_field(search_field, value).await,
        (None, UnknownField::Reject) => Err(AppError::BadRequest(format!(
            "Invalid search field: {field}"
        ))),
        (None, UnknownField::ListAll) => {
            tracing::debug!("Неизвестное поле поиска '{field}', возвращаю все устройства");
            repo.list_all().await
        }
    }
}
