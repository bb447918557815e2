//! Target-independent behaviour of the portfolio page
//!
//! Everything in this crate is plain data and pure functions so it can be
//! tested natively. The browser wiring lives in `folio-ui`, which only
//! reads the DOM, calls into these functions, and writes the result back.
//!
//! ## Module Structure
//! - `config`: page configuration with defaults for every selector and constant
//! - `tilt`: pointer-to-rotation maths for the hero badge
//! - `navbar`: scroll threshold for the navigation bar
//! - `anchor`: fragment extraction for in-page links
//! - `project`: project records decoded from `projetos.json`
//! - `contact`: local validation of the contact form
//! - `remote`: interpretation of the form endpoint's error bodies
//! - `reveal`: reveal animation options and the once-only gate
//! - `status`: user-visible status messages and their tones
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod navbar;
pub mod project;
pub mod remote;
pub mod reveal;
pub mod status;
pub mod tilt;

pub use config::PortfolioConfig;
pub use contact::ContactSubmission;
pub use error::{ConfigError, ProjectDecodeError, ValidationError};
pub use project::ProjectRecord;
pub use reveal::{RevealGate, RevealOptions};
pub use status::{StatusMessage, StatusTone};
pub use tilt::TiltAngles;
