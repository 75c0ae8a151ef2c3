//! Core library for the shipcheck-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the unit tests. The modules are structured
//! to keep responsibilities narrow and composable: IO adapters live under
//! [`shipcheck::tools::io`], data representations inside
//! [`shipcheck::tools::model`], the machinery-label canonicalization engine in
//! [`shipcheck::tools::normalize`], the per-file grouping and two-file diff in
//! [`shipcheck::tools::aggregate`] and [`shipcheck::tools::diff`], and the
//! comparison orchestration under [`shipcheck::tools::compare`].

pub mod shipcheck;

pub use shipcheck::tools::{
    Result, ToolError, aggregate, compare, diff, error, io, model, normalize, report,
};
