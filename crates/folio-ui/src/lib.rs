//! WASM page interaction controller for the portfolio
//!
//! This crate attaches behaviour to the portfolio's server-authored HTML.
//! It renders no page of its own: it looks elements up, listens for browser
//! events, and writes classes, styles and text back.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown), built with Trunk
//! - web-sys listeners wrapped in owned handles for explicit teardown
//! - gloo-net for the project list and the remote contact form
//! - Pure decisions (angles, thresholds, validation) live in `folio-core`
//!
//! ## Module Structure
//! - `page`: `init`/`boot` and the per-subsystem handles
//! - `tilt`: badge tilt effect
//! - `navbar`: scroll-triggered navbar
//! - `smooth_scroll`: smooth in-page navigation
//! - `projects`: project list loader
//! - `reveal`: reveal-on-scroll observer
//! - `animation`: the `Animator` capability and its gsap adapter
//! - `contact`: local and remote contact form handling
//! - `task`: single-occupancy abortable tasks
//! - `listener`: event listener registration
//! - `dom`: DOM lookup helpers
//! - `config`: embedded configuration loading
//! - `logging`: tracing subscriber writing to the browser console
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod listener;
pub mod logging;
pub mod navbar;
pub mod page;
pub mod projects;
pub mod reveal;
pub mod smooth_scroll;
pub mod task;
pub mod tilt;

pub use animation::{Animator, GsapAnimator, NoopAnimator};
pub use error::{Result, UiError};
pub use page::{PageHandles, boot, init};
