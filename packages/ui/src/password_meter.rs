use dioxus::prelude::*;
use store::PasswordStrength;

/// Strength feedback under the signup password field. Informational only;
/// the minimum-length rule in the validator is what actually gates
/// submission.
#[component]
pub fn PasswordStrengthMeter(password: String) -> Element {
    if password.is_empty() {
        return rsx! {};
    }

    let strength = PasswordStrength::classify(&password);
    let bucket = match strength {
        PasswordStrength::TooShort => "too-short",
        PasswordStrength::Weak => "weak",
        PasswordStrength::Medium => "medium",
        PasswordStrength::Strong => "strong",
    };
    // 0..=3 → a visible fill even for the lowest bucket.
    let width = match strength.score() {
        0 => 10,
        1 => 33,
        2 => 67,
        _ => 100,
    };

    rsx! {
        div {
            class: "strength-meter",
            div {
                class: "strength-row",
                span { "Password strength:" }
                span { class: "strength-label strength-label--{bucket}", "{strength.label()}" }
            }
            div {
                class: "strength-track",
                div {
                    class: "strength-fill strength-fill--{bucket}",
                    style: "width: {width}%",
                }
            }
        }
    }
}
