// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run the interactive menus.
//
// Module responsibilities:
// - `settings`: the accessibility record and the typed menu actions.
// - `account`: login and sign-up form data and the sign-up checks.
// - `console`: the prompt/print seam, with a terminal and a plain-line
//   implementation.
// - `config`: environment configuration.
// - `ui`: the menu flows, written against `console::Console`.
pub mod account;
pub mod config;
pub mod console;
pub mod settings;
pub mod ui;
