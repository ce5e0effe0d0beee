// SPDX-License-Identifier: MPL-2.0
//! UI state value types shared between configuration and widgets.

pub mod dismiss_delay;

pub use dismiss_delay::DismissDelay;
