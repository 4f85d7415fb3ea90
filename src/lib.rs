// lib.rs - Library root for the richbar editor toolbar

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod header;
pub mod i18n;
pub mod menu;
pub mod tooltip;
pub mod ui;
