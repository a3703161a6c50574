// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for the player.

pub mod progress;
pub mod store;
pub mod thumbnail;
