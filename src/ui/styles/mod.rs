// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the snackbar and demo widgets.

pub mod button;
pub mod container;
