// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! The page script (`web/search.js`) fetches `search_index.json`, hands the body
//! to [`wasm::SearchWidget::load`] and forwards every input event. State,
//! querying and rendering decisions stay on the Rust side.

#[cfg(feature = "wasm")]
pub mod wasm;
