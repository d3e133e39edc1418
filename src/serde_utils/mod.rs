// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Macros for wrapper tuples.
mod tuples;

/// Visitor pattern.
mod visitors;

#[allow(unused)]
pub use self::tuples::*;
pub use self::visitors::*;
