//! Built-in Dart template bodies.
//!
//! Bodies use `{{key}}` placeholders rendered by
//! [`RenderContext`](crate::domain::RenderContext).

pub mod components;
pub mod provider;
pub mod riverpod;
pub mod shared;
