//! Render messages as an HTML document plus a plaintext fallback
//!
//! A [`Message`] is rendered by an [`Engine`] through the two skeletons of a
//! [`Theme`]. Tables become ASCII boxes in the plaintext output, free-form
//! markdown is converted once per render and spliced into both outputs.
//!
//! ```no_run
//! use missive::{Body, Engine, Message, Product};
//!
//! let engine = Engine::new(Product {
//!     name: "Acme".to_string(),
//!     link: "https://acme.example/".to_string(),
//!     ..Default::default()
//! });
//! let message = Message {
//!     body: Body {
//!         name: "Jon Snow".to_string(),
//!         intros: vec!["Welcome aboard!".to_string()],
//!         ..Default::default()
//!     },
//! };
//! let rendered = engine.render(&message)?;
//! println!("{}", rendered.plain_text);
//! # Ok::<(), missive::MissiveError>(())
//! ```

pub mod button;
pub mod config;
pub mod defaults;
pub mod error;
pub mod inline;
pub mod markup;
pub mod models;
pub mod renderer;
pub mod table;
pub mod template;
pub mod theme;

pub use error::{MissiveError, Result};
pub use models::{
    Action, Alignment, Body, Button, Columns, Entry, Message, Product, Table, TextDirection,
};
pub use renderer::{Engine, Rendered};
pub use theme::{Theme, ThemeRegistry};
