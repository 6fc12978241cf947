// src/site/render.rs
use super::content::*;
use crate::health::Status;
use std::fmt::Write;
use url::Url;

pub fn status_line(status: Status) -> String {
    format!("Backend Status: {}", status.label())
}

/// Landing page as plain text. The status line is the only part that
/// depends on runtime state.
pub fn render_landing(status: Status, api_url: &Url) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", PRODUCT_NAME);
    let _ = writeln!(out, "{}", "=".repeat(PRODUCT_NAME.len()));
    let _ = writeln!(out, "{}", TAGLINE);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", status_line(status));
    let _ = writeln!(out);
    let _ = writeln!(out, "[{}] {}", INSTALL_LINK.text, INSTALL_LINK.href);
    let _ = writeln!(out, "[{}] {}", TEST_API_TEXT, api_url);
    let _ = writeln!(out);

    for (i, step) in STEPS.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step.title);
        let _ = writeln!(out, "   {}", step.detail);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", WHY_HEADING);
    for point in WHY_POINTS {
        let _ = writeln!(out, "  - {}", point);
    }

    out
}

pub fn render_setup() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", SETUP_HEADING);
    let _ = writeln!(out, "{}", "=".repeat(SETUP_HEADING.len()));
    for (i, instruction) in SETUP_INSTRUCTIONS.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, instruction);
    }

    out
}
