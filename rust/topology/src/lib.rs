// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topology Explorer: Finite Topology
//!
//! Finite topological spaces for exercise evaluation.
//!
//! A space is a base set plus a list of open sets, both made of
//! [`FiniteSet`]s over an opaque [`Element`] type. The crate answers three
//! kinds of question about such a space:
//!
//! - **Is it a topology?** [`validate`] checks the axioms and reports every
//!   [`Violation`] it finds. Union closure is only checked on request, see
//!   [`validation`].
//! - **What are its derived sets?** Closure, interior, boundary and the
//!   closed-set test live on [`TopologicalSpace`] (see [`derivation`]).
//! - **How do I build a correct one?** [`builders`] produces spaces that are
//!   topologies by construction.
//!
//! Every operation is a pure function of its arguments. Spaces are never
//! mutated after construction, so they can be shared freely across threads.

pub mod builders;
pub mod derivation;
pub mod element;
pub mod error;
pub mod serialization;
pub mod set;
pub mod space;
pub mod validation;

pub use builders::{power_set, MAX_POWER_SET_BASE};
pub use element::Element;
pub use error::{Error, Result};
pub use serialization::SpaceSnapshot;
pub use set::FiniteSet;
pub use space::TopologicalSpace;
pub use validation::{validate, ValidationResult, Validator, Violation};
