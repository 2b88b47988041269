pub mod auth_modal;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod service;
