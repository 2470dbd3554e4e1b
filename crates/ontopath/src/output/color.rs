//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Start term:     green
//!   - End term:       magenta
//!   - Path term:      red
//!   - Neighbor term:  blue
//!   - Term IDs:       cyan
//!   - Muted:          dimmed (relation labels, connectors)
//!   - Emphasis:       bold   (section headers)

use crate::layout::NodeRole;
use colored::Colorize;

use super::OutputConfig;

/// Colorize a term ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Apply dimmed style to text (for relation labels and connectors).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Get the icon for a node role, with ASCII fallback support.
pub(crate) fn role_icon(role: NodeRole, config: &OutputConfig) -> &'static str {
    if config.use_ascii {
        match role {
            NodeRole::Start => ">",
            NodeRole::End => "<",
            NodeRole::Path => "*",
            NodeRole::Neighbor => "o",
        }
    } else {
        match role {
            NodeRole::Start => "▶",
            NodeRole::End => "◀",
            NodeRole::Path => "●",
            NodeRole::Neighbor => "○",
        }
    }
}

/// Get a colored icon for a node role.
pub(crate) fn colored_role_icon(role: NodeRole, config: &OutputConfig) -> String {
    let icon = role_icon(role, config);
    if !config.use_colors {
        return icon.to_string();
    }
    match role {
        NodeRole::Start => icon.green().bold().to_string(),
        NodeRole::End => icon.magenta().bold().to_string(),
        NodeRole::Path => icon.red().to_string(),
        NodeRole::Neighbor => icon.blue().to_string(),
    }
}
