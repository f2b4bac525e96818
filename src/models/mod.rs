//! Data models module
//!
//! Defines the message content model supplied by callers (Product, Message,
//! Body, Entry, Table, Action) and the merged working copy the renderer
//! consumes (MergedBody, Heading, Content).

pub mod content;
pub mod message;

pub use content::{Content, Heading, MergedBody, TextDirection};
pub use message::{
    Action, Alignment, Body, Button, CallToAction, Columns, Entry, Message, Product, Table,
};
