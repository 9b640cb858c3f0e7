//! Expected-JSON fixtures for tests.
//!
//! Fixtures live at `json/<class>/<method>/<file>.json` under a resource root
//! (`tests/resources` by default). [`FixtureLoader`] reads them,
//! [`JsonVerifier`] compares produced JSON against them, and [`json_equals`]
//! gives a [`predicates::Predicate`] for ad-hoc comparisons. Equality ignores
//! object key order, honors array order and compares numbers by value.

mod config;
mod context;
mod engine;
mod error;
mod input;
mod loader;
mod matcher;
mod path;
mod store;
mod verifier;

pub use config::{FixtureConfig, ROOT_ENV, TRACE_ENV};
pub use context::TestContext;
pub use engine::{diff, equal, JsonDiffEngine};
pub use error::{FixtureError, Result, Side};
pub use input::JsonInput;
pub use json_patch::{DiffOptions, JsonDiff, JsonPatch, NumberMode};
pub use json_pointer::JsonPointer;
pub use loader::{load_fixture, FixtureLoader};
pub use matcher::{json_equals, json_equals_with, JsonMatcher};
pub use path::{fixture_path, DEFAULT_REQUEST, DEFAULT_RESPONSE};
pub use store::{DirResourceStore, MemoryResourceStore, ResourceStore};
pub use verifier::{assert_json_equal, JsonVerifier};
