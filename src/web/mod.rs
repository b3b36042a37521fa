// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web/mod.rs
// Version: 1.0.0
//
// This file declares the web module: the axum server and the HTML rendering
// of the calculator page.
//
// Tree Location:
// - src/web/mod.rs (web module entry point)
// - Submodules: server, page, components, theme

pub mod components;
pub mod page;
pub mod server;
pub mod theme;

pub use page::render_page;
pub use server::{AppState, router, start_web_server};

// Changelog:
// - v1.0.0 (2026-10-18): Web module with server, page, components and theme.
