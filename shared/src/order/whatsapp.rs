//! WhatsApp deep-link builder

/// Default sales number (international format, no `+`)
pub const DEFAULT_NUMBER: &str = "94779980801";

/// Build a `wa.me` deep link that opens a chat with `number` pre-filled
/// with `message`.
///
/// The message is percent-encoded as a whole; WhatsApp's own `*bold*`
/// and `_italic_` markers survive encoding and are interpreted client
/// side after decoding.
pub fn order_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}
