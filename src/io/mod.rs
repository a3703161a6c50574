// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for configuration, thumbnail manifests and images.

pub mod manifest;
pub mod media;
pub mod serialization;
