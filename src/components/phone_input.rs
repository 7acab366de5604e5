//! Phone number input widget

use dioxus::prelude::*;

/// Props for PhoneInput
#[derive(Props, Clone, PartialEq)]
pub struct PhoneInputProps {
    /// Current phone number value
    pub value: String,
    /// Fired with the normalized value on every change
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub placeholder: &'static str,
    #[props(default)]
    pub class: &'static str,
}

/// Text-like control for entering a phone number.
///
/// Raw input is normalized to an E.164-style string (one leading `+`, then
/// digits) before the change event fires, so callers always see a value the
/// registration API accepts.
#[component]
pub fn PhoneInput(props: PhoneInputProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        input {
            r#type: "tel",
            value: "{props.value}",
            oninput: move |e| on_change.call(sanitize_phone(&e.value())),
            placeholder: props.placeholder,
            class: props.class,
            required: props.required,
        }
    }
}

/// Keep one leading `+` and digits, dropping separators and stray characters
fn sanitize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if (c == '+' && i == 0) || c.is_ascii_digit() {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_e164_input() {
        assert_eq!(sanitize_phone("+15551234567"), "+15551234567");
    }

    #[test]
    fn test_sanitize_strips_separators() {
        assert_eq!(sanitize_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(sanitize_phone("555.123.4567"), "5551234567");
    }

    #[test]
    fn test_sanitize_plus_only_allowed_leading() {
        assert_eq!(sanitize_phone("55+12"), "5512");
        assert_eq!(sanitize_phone("+55+12"), "+5512");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_phone("+1 555 123 4567 ext. 9");
        assert_eq!(sanitize_phone(&once), once);
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_phone(""), "");
    }
}
