// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

pub mod access;
pub mod feature;
pub mod matrix;
pub mod resolver;
pub mod roles;

pub use access::{AccessLevel, BannerKind, UiContract};
pub use feature::Feature;
pub use matrix::{AccessMatrix, MatrixRow};
pub use resolver::PermissionResolver;
pub use roles::{Role, RoleCatalog, RoleId};
