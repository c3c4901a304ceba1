// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harborlords presentation layer.
//!
//! The board is drawn in a fixed 2000x3000 logical coordinate space through
//! the [`surface::Surface`] trait, so the same scene code runs against egui
//! in the app and against a recording surface in tests. Each render pass
//! rebuilds the [`regions::ClickRegionRegistry`] from scratch, which keeps
//! clickable areas in lockstep with what the pass actually drew.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod app;
pub mod art;
pub mod demo;
pub mod dispatch;
pub mod icons;
pub mod layout;
pub mod msg;
pub mod palette;
pub mod regions;
pub mod scene;
pub mod subscriber;
pub mod surface;
pub mod surface_egui;
pub mod test_util;
