// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text module — normalization passes and calm presentation.

pub mod normalizer;
pub mod present;

pub use normalizer::normalize;
