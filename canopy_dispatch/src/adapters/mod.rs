// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters connecting the dispatcher to concrete object graphs.
//!
//! Applications with their own scene graph implement
//! [`ParentLookup`](crate::types::ParentLookup) directly over it; the
//! [`forest`] adapter covers the common case of a standalone parent-link
//! store.

pub mod forest;
