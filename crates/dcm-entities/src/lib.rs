//! Сущности sea-orm для инвентаря устройств.

pub mod devices;
