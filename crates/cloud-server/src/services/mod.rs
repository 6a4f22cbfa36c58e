//! Сервисы: граница хранилища для серверов и ВМ.

pub mod server_service;
pub mod vm_service;
