//! # aquaflow-core
//!
//! Host-independent model behind the AquaFlow Pro landing page.
//!
//! The page itself is a Leptos CSR app (see the `aquaflow-landing` crate). Everything
//! that can be reasoned about without a browser lives here, so it can be unit-tested
//! on the host:
//!
//! - [`config`] - business identity (name, phone, email, city) and outbound URIs
//! - [`content`] - the literal content slices each section renders
//! - [`icon`] - the closed set of icons and their SVG path data
//! - [`motion`] - scroll-linked interpolation and entrance stagger timing
//! - [`menu`] - the mobile menu state machine
//! - [`form`] - contact form state and the submission contract
//! - [`anchor`] - in-page anchor audit
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```rust
//! use aquaflow_core::form::{FormField, FormState};
//! use aquaflow_core::error::NotifyError;
//!
//! let mut form = FormState::default();
//! form.set(FormField::Name, "Jane");
//! form.edit("message", "leak").unwrap();
//!
//! let outcome = form.submit(&|_: &FormState| Ok::<(), NotifyError>(()));
//! assert!(outcome.is_ok());
//! assert!(form.is_empty());
//! ```
//!
//! ---
//!
//! Developed by the AquaFlow Pro web team (c)2025

pub mod anchor;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod icon;
pub mod menu;
pub mod motion;

pub use config::{BUSINESS, BusinessConfig, VERSION};
pub use error::{FormError, NotifyError};
pub use form::{FormField, FormState, SubmissionNotifier};
pub use icon::IconKind;
pub use menu::MenuState;
pub use motion::{HeroMotion, ScrollTransform};
