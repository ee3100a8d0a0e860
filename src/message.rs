//! Share and quote-request messages, and the sinks that deliver them.
//!
//! Formatting is pure. Delivery goes through a [`MessageSink`]: the system
//! URL handler opening a messaging deep link, or the clipboard. Whether the
//! message actually reaches anyone is not observable from here, so dispatch
//! failures are logged and reported but never fatal.

use anyhow::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::MessagingConfig;
use crate::models::design_name;
use crate::session::DesignSession;

/// Tapestry size quoted in every request.
pub const STANDARD_SIZE: &str = "Estándar (30x45cm)";

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Which template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Short message with the design name, total and a link
    Share,
    /// Full specification with every color and follow-up questions
    Quote,
}

impl MessageKind {
    /// Short label for status messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Share => "share",
            Self::Quote => "quote request",
        }
    }
}

/// Builds the share message.
#[must_use]
pub fn share_message(session: &DesignSession, link: &str) -> String {
    let name = design_name(session.selected_design());
    let total = session.quote().total;

    format!(
        "🎨 *Mi Diseño de Tapiz Personalizado*\n\n\
         📐 Diseño: {name}\n\
         🌈 Colores personalizados\n\
         💰 Cotización: {total}\n\n\
         ¡Hola! Me encantó este diseño que creé en tu app. ¿Podrías hacerme una cotización detallada?\n\n\
         🔗 Link del diseño: {link}"
    )
}

/// Builds the quote-request message, listing every color on its own line.
#[must_use]
pub fn quote_request_message(session: &DesignSession) -> String {
    let name = design_name(session.selected_design());
    let total = session.quote().total;
    let colors_list = session
        .colors()
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎨 *Solicitud de Cotización - Tapiz Artesanal*\n\n\
         👋 ¡Hola! Me interesa encargar un tapiz con estas especificaciones:\n\n\
         📐 *Diseño:* {name}\n\
         📏 *Tamaño:* {STANDARD_SIZE}\n\
         🌈 *Paleta de colores:*\n{colors_list}\n\n\
         💰 *Cotización estimada:* {total}\n\n\
         ¿Podrías confirmarme:\n\
         • Precio final\n\
         • Tiempo de entrega\n\
         • Opciones de pago\n\
         • Si es posible hacer ajustes al diseño\n\n\
         ¡Gracias!"
    )
}

/// Deep link of the form `https://<host>/<recipient>?text=<encoded>`.
///
/// ```
/// use tapiz_designer::message::messaging_url;
///
/// assert_eq!(
///     messaging_url("wa.me", "5491123456789", "¡Hola!\nTapiz"),
///     "https://wa.me/5491123456789?text=%C2%A1Hola!%0ATapiz"
/// );
/// ```
#[must_use]
pub fn messaging_url(host: &str, recipient: &str, text: &str) -> String {
    format!(
        "https://{host}/{recipient}?text={}",
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

/// A formatted message ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    /// Template used
    pub kind: MessageKind,
    /// Plain text
    pub text: String,
    /// Messaging deep link carrying the text
    pub url: String,
}

impl OutgoingMessage {
    /// Formats the message for the current session.
    #[must_use]
    pub fn compose(
        session: &DesignSession,
        kind: MessageKind,
        messaging: &MessagingConfig,
        link: &str,
    ) -> Self {
        let text = match kind {
            MessageKind::Share => share_message(session, link),
            MessageKind::Quote => quote_request_message(session),
        };
        let url = messaging_url(&messaging.host, &messaging.recipient, &text);
        Self { kind, text, url }
    }
}

/// Somewhere a message can be handed off to.
pub trait MessageSink {
    /// Short name used in logs and status messages.
    fn name(&self) -> &'static str;

    /// Delivers the message. Success only means the hand-off happened.
    fn deliver(&mut self, message: &OutgoingMessage) -> Result<()>;
}

/// Opens the messaging deep link with the system URL handler.
#[derive(Debug, Default)]
pub struct BrowserSink;

impl MessageSink for BrowserSink {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<()> {
        open::that(&message.url).context("Failed to open messaging link")
    }
}

/// Copies the plain text to the system clipboard.
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl MessageSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(message.text.clone())
            .context("Failed to copy message to clipboard")
    }
}

/// Keeps every delivered message in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Messages in delivery order
    pub delivered: Vec<OutgoingMessage>,
}

impl MessageSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<()> {
        self.delivered.push(message.clone());
        Ok(())
    }
}

/// Hands `message` to `sink`, logging the outcome.
///
/// Returns the delivery error, if any, so callers can show it; nothing is retried.
pub fn dispatch(sink: &mut dyn MessageSink, message: &OutgoingMessage) -> Result<()> {
    match sink.deliver(message) {
        Ok(()) => {
            info!(sink = sink.name(), kind = message.kind.label(), "message handed off");
            Ok(())
        }
        Err(e) => {
            warn!(sink = sink.name(), kind = message.kind.label(), error = %e, "message hand-off failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorKey;

    const LINK: &str = "https://tapiz.local/disenador";

    #[test]
    fn test_share_message_contents() {
        let session = DesignSession::new();
        let message = share_message(&session, LINK);
        assert!(message.contains("Diseño: Girasoles Clásicos"));
        assert!(message.to_lowercase().contains("colores personalizados"));
        assert!(message.contains("Cotización: 170"));
        assert!(message.ends_with(&format!("Link del diseño: {LINK}")));
        // No color listing in the short message
        assert!(!message.contains("#FFD700"));
    }

    #[test]
    fn test_share_message_premium_total() {
        let mut session = DesignSession::new();
        session.select_design("abstract");
        assert!(share_message(&session, LINK).contains("Cotización: 200"));
    }

    #[test]
    fn test_unknown_design_uses_fallback_name() {
        let mut session = DesignSession::new();
        session.select_design("tulips");
        let message = share_message(&session, LINK);
        assert!(message.contains("Diseño: Diseño personalizado"));
        assert!(message.contains("Cotización: 170"));
    }

    #[test]
    fn test_quote_request_lists_every_color() {
        let mut session = DesignSession::new();
        session.set_color(ColorKey::Leaves, "#00FF00");
        let message = quote_request_message(&session);

        let color_lines: Vec<&str> = message
            .lines()
            .filter(|line| {
                ColorKey::ALL
                    .iter()
                    .any(|key| line.starts_with(&format!("{key}: ")))
            })
            .collect();
        assert_eq!(color_lines.len(), 8);
        assert!(color_lines.contains(&"leaves: #00FF00"));
        assert_eq!(color_lines[0], "sun: #FFD700");
        assert_eq!(color_lines[7], "fringe: #D2B48C");

        assert!(message.contains("*Tamaño:* Estándar (30x45cm)"));
        assert!(message.contains("*Cotización estimada:* 170"));
        assert!(message.contains("• Tiempo de entrega"));
        assert!(message.ends_with("¡Gracias!"));
    }

    #[test]
    fn test_messaging_url_encodes_like_encode_uri_component() {
        let url = messaging_url("wa.me", "5491123456789", "a b*c\n(d)'~!_.-&=?/#");
        assert_eq!(
            url,
            "https://wa.me/5491123456789?text=a%20b*c%0A(d)'~!_.-%26%3D%3F%2F%23"
        );
    }

    #[test]
    fn test_messaging_url_encodes_emoji_as_utf8() {
        let url = messaging_url("wa.me", "1", "🎨");
        assert!(url.ends_with("?text=%F0%9F%8E%A8"));
    }

    #[test]
    fn test_compose_uses_configured_destination() {
        let session = DesignSession::new();
        let messaging = MessagingConfig {
            host: "chat.example".to_string(),
            recipient: "42".to_string(),
        };
        let outgoing = OutgoingMessage::compose(&session, MessageKind::Quote, &messaging, LINK);
        assert!(outgoing.url.starts_with("https://chat.example/42?text="));
        assert_eq!(outgoing.text, quote_request_message(&session));
    }

    #[test]
    fn test_dispatch_records_message() {
        let session = DesignSession::new();
        let outgoing = OutgoingMessage::compose(
            &session,
            MessageKind::Share,
            &MessagingConfig::default(),
            LINK,
        );
        let mut sink = RecordingSink::default();
        dispatch(&mut sink, &outgoing).unwrap();
        assert_eq!(sink.delivered, vec![outgoing]);
    }

    struct FailingSink;

    impl MessageSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn deliver(&mut self, _message: &OutgoingMessage) -> Result<()> {
            anyhow::bail!("popup blocked")
        }
    }

    #[test]
    fn test_dispatch_failure_is_returned_not_panicked() {
        let session = DesignSession::new();
        let outgoing = OutgoingMessage::compose(
            &session,
            MessageKind::Quote,
            &MessagingConfig::default(),
            LINK,
        );
        let err = dispatch(&mut FailingSink, &outgoing).unwrap_err();
        assert!(err.to_string().contains("popup blocked"));
    }
}
