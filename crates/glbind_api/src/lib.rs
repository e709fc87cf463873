//! glbind GL surface
//!
//! Typed OpenGL entry points on top of [`glbind_core`]:
//!
//! - [`types`]: registry scalar types
//! - [`consts`]: named enums
//! - [`Gl`]: a bound context handle with one `unsafe fn` per entry point
//! - [`current`]: the thread's active [`Gl`]

#[macro_use]
mod macros;

pub mod consts;
pub mod current;
mod functions;
pub mod gl;
pub mod types;

pub use functions::catalog;
pub use gl::Gl;
