//! Доступ к данным и поиск устройств.

pub mod device_repository;
pub mod search;
