// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the player.

pub mod controls;
pub mod drag;
pub mod hover;
pub mod progress_bar;
pub mod thumbnail;
