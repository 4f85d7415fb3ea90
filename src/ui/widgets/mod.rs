// ui/widgets/mod.rs - UI widgets

pub mod document_pane;
pub mod header_bar;
pub mod status_bar;
pub mod tooltip;
