//! Main library for claude-setup, used by its CLI.
//!
//! A new project is described by a [`scaffold::ProjectRequest`] and created
//! with [`scaffold::create`], which writes every entry of
//! [`manifest::MANIFEST`] under the new project directory.

pub mod manifest;
pub mod scaffold;
pub mod template;
