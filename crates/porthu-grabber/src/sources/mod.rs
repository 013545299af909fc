//! Guide data providers

pub mod porthu;
