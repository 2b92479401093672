// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text encodings for wire messages.

pub mod json;

pub use json::JsonCodec;
