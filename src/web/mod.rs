//! Embedded static HTML assets served by the web UI.
//!
//! The shell is kept as a `&'static str` so it can be bundled directly
//! inside the binary without filesystem lookups. It is a thin display
//! surface: every filter action asks the server for a fresh scene and
//! applies it wholesale.

mod shell;

pub use shell::MAP_SHELL_HTML;
