//! Общие типы DSS: представления и навигация, бизнес-записи и статические
//! коллекции данных. Не зависит от целевой платформы, тестируется на хосте.

pub mod domain;
pub mod enums;
pub mod navigation;
