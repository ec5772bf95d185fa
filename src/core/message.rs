pub const MESSAGE_LABEL: &str = "Message: ";

/// Prepends [`MESSAGE_LABEL`] to `message`. The text is otherwise copied as is.
pub fn format_message(message: &str) -> String {
    let mut formatted = String::with_capacity(MESSAGE_LABEL.len() + message.len());
    formatted.push_str(MESSAGE_LABEL);
    formatted.push_str(message);
    formatted
}
