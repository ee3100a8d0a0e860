//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) to make
//! future rebranding easier.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Diseñador de Tapices Artesanales";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "tapiz";

/// The directory name for application data (config, logs).
///
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "TapizDesigner";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TAPIZ_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Personaliza tu tapiz con los colores que más te gusten";

/// Footer lines shown under the quote panel.
pub const FOOTER_LINES: [&str; 2] = [
    "✨ Cada tapiz es hecho a mano con amor y dedicación",
    "Tiempo de entrega: 7-10 días hábiles",
];

/// Messaging deep link host.
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

/// Workshop number receiving quote requests.
pub const DEFAULT_RECIPIENT: &str = "5491123456789";

/// Link appended to share messages when none is configured.
pub const DEFAULT_SHARE_LINK: &str = "https://tapiz.local/disenador";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "tapiz.log";
