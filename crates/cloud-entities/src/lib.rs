//! Entities реестра облачных ресурсов: серверы и виртуальные машины.

pub mod servers;
pub mod vms;
