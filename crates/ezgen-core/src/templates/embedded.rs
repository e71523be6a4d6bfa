//! Compile-time embedded templates for file scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/ezgen-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under the appropriate `templates/` subdirectory
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<path>")`
//! 3. Use the constant in the matching generator module
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what the generators pass in.

// -------------------------------------------------------
// CMake targets
// -------------------------------------------------------

pub const CMAKE_BANNER: &str = include_str!("../../../../templates/cmake/banner.cmake.tmpl");
pub const CMAKE_LIBRARY: &str = include_str!("../../../../templates/cmake/library.cmake.tmpl");
pub const CMAKE_EXECUTABLE: &str = include_str!("../../../../templates/cmake/executable.cmake.tmpl");
pub const CMAKE_TEST: &str = include_str!("../../../../templates/cmake/test.cmake.tmpl");

// -------------------------------------------------------
// C component (header + source)
// -------------------------------------------------------

pub const C_BANNER: &str = include_str!("../../../../templates/component/banner.c.tmpl");
pub const COMPONENT_HEADER: &str = include_str!("../../../../templates/component/header.h.tmpl");
pub const COMPONENT_SOURCE: &str = include_str!("../../../../templates/component/source.c.tmpl");

// -------------------------------------------------------
// Unity unit test
// -------------------------------------------------------

pub const UNITTEST_SOURCE: &str = include_str!("../../../../templates/unittest/unittest.c.tmpl");
