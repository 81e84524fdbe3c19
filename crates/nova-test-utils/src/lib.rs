// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for NOVA integration tests.
//!
//! - [`MockChannel`] - channel adapter with event injection and send capture
//! - [`TestHarness`] - a real bot loop wired to the mock channel and temp storage
//! - [`events`] - inbound event builders

pub mod events;
pub mod harness;
pub mod mock_channel;

pub use harness::{TEST_ADMIN_ID, TEST_WALLET, TestHarness};
pub use mock_channel::MockChannel;
