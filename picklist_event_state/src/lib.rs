// Copyright 2025 the Picklist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picklist Event State: small state machines for time- and focus-dependent
//! widget behavior.
//!
//! None of these helpers own a timer. Time is a caller-supplied millisecond
//! clock passed into every call, and pending work is surfaced through
//! `poll`-style methods that hosts invoke from their frame or timer loop.
//!
//! - [`debounce::Debouncer`] delays a notification until input has been quiet
//!   for a configured interval.
//! - [`announce::Announcer`] holds screen-reader text that clears itself after
//!   a fixed delay.
//! - [`blur::BlurCheck`] defers the "did focus leave the widget?" check until
//!   the platform has moved focus to its new target.
//!
//! This crate is `no_std`.

#![no_std]

pub mod announce;
pub mod blur;
pub mod debounce;
