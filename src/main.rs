//! FundingSense Dashboard
//!
//! Startup funding intelligence front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Evidence-backed investor-fit analysis reports
//! - Grounded Q&A chat about analysis results
//! - Evidence browser over cited sources and the intelligence library
//! - Multilingual UI with external full-page translation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All substantive computation lives in the FundingSense API;
//! this crate is presentational: pages, layout chrome, and a thin typed
//! HTTP client.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod i18n;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
