// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pad module — canvas allocation and alpha-over compositing.

pub mod padder;

pub use padder::ImagePadder;
