// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backend;
mod decode;
mod error;
mod wire;

#[cfg(test)]
mod tests;

pub use backend::ScheduleBackend;
pub use decode::{
    availability_set, roster_from_items, roster_rows, schedule_meta, schedule_rows, slot_from_raw,
};
pub use error::{ApiError, BackendError, translate_core_error, translate_domain_error};
pub use wire::{
    AckResponse, AllAvailabilityResponse, AvailabilityItem, AvailabilityResponse, BackendRequest,
    MetaItem, MetaResponse, PersonSlotItem, ScheduleItem, ScheduleResponse, ScheduleRowItem,
    availability_items, schedule_items,
};
