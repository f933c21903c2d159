//! Core logic: scroll-stack layout, frame scheduling, chat model and the
//! server-side text generation proxy

pub mod activity_trail;
pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod frame_scheduler;
#[cfg(feature = "ssr")]
pub mod generation;
#[cfg(feature = "ssr")]
pub mod generation_api;
mod scroll_stack;
#[cfg(test)]
mod tests;

pub use scroll_stack::*;
