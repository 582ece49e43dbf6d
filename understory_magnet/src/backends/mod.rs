// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storage backends for edge-sets.
//!
//! - `ordered`: a `BTreeSet`; logarithmic inserts and removals while punching (default).
//! - `sorted_vec`: a sorted `Vec` searched with `partition_point`; compact and cache
//!   friendly, with linear-time inserts. Competitive for the few dozen windows a
//!   typical desktop has.
//!
//! Both yield identical results; the benches compare build and query costs.

pub mod ordered;
pub mod sorted_vec;
