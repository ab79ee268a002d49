//! Pipeline stages for splitting a PDF into page images.
//!
//! Each submodule implements exactly one step, and control flow between them
//! is strictly linear — no feedback loops, no retries.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ prepare ──▶ render
//! (path)   (out dir)   (pdfium)
//! ```
//!
//! 1. [`input`]   — validate the user-supplied PDF path (exists, readable,
//!    `%PDF` magic bytes)
//! 2. [`prepare`] — ensure the output directory exists (idempotent
//!    create-if-absent)
//! 3. [`render`]  — rasterise every page to an image file via the
//!    [`render::Rasterizer`] seam; the only stage that touches pdfium

pub mod input;
pub mod prepare;
pub mod render;
