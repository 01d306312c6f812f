pub mod badge;
pub mod button;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

/// Class list of a form control, with the invalid modifier when flagged
pub fn control_class(base: &str, invalid: bool, extra: &str) -> String {
    let mut class = base.to_string();
    if invalid {
        class.push(' ');
        class.push_str(base);
        class.push_str("--invalid");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class() {
        assert_eq!(control_class("form__input", false, ""), "form__input");
        assert_eq!(
            control_class("form__input", true, "ltr"),
            "form__input form__input--invalid ltr"
        );
    }
}
