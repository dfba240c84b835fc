//! User-facing notices for unmet requirements.
//!
//! The resolver only produces a [`Notice`]; the presentation layer decides
//! when to show it and calls [`Notice::render_html`] with the current
//! request's context.

use std::collections::BTreeSet;

use serde::Serialize;

/// Capability a user needs to see requirement notices.
pub const INSTALL_PLUGINS_CAPABILITY: &str = "install_plugins";

/// Display name used when the header carries no `Plugin Name`.
pub const UNKNOWN_PLUGIN_NAME: &str = "Unknown Plugin Name";

/// Notice severity, mapped onto the host's notice CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Error => "notice-error",
        }
    }
}

/// Which declared minimums the environment failed to meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UnmetRequirement {
    Php { required: String },
    Platform { required: String },
    Both { php: String, platform: String },
}

impl UnmetRequirement {
    /// Combine the failing declared versions, if any failed.
    pub fn from_failures(php: Option<&str>, platform: Option<&str>) -> Option<Self> {
        match (php, platform) {
            (Some(php), Some(platform)) => Some(Self::Both {
                php: php.to_string(),
                platform: platform.to_string(),
            }),
            (Some(php), None) => Some(Self::Php {
                required: php.to_string(),
            }),
            (None, Some(platform)) => Some(Self::Platform {
                required: platform.to_string(),
            }),
            (None, None) => None,
        }
    }

    fn message(&self, plugin: &str, platform_name: &str) -> String {
        match self {
            Self::Php { required } => format!(
                "{plugin} requires PHP version {required} or higher. \
                 Please update PHP to activate this plugin."
            ),
            Self::Platform { required } => format!(
                "{plugin} requires {platform_name} version {required} or higher. \
                 Please update {platform_name} to activate this plugin."
            ),
            Self::Both { php, platform } => format!(
                "{plugin} requires PHP version {php} or higher and {platform_name} version \
                 {platform} or higher. Please update PHP and {platform_name} to activate this plugin."
            ),
        }
    }
}

/// A message for the presentation layer, with the severity and capability it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    message: String,
    severity: Severity,
    required_capability: String,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            required_capability: INSTALL_PLUGINS_CAPABILITY.to_string(),
        }
    }

    /// Build the error notice shown when a plugin cannot be activated.
    pub fn unmet_requirements(
        plugin_name: Option<&str>,
        unmet: &UnmetRequirement,
        platform_name: &str,
    ) -> Self {
        let plugin = plugin_name.unwrap_or(UNKNOWN_PLUGIN_NAME);
        Self::new(unmet.message(plugin, platform_name), Severity::Error)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn required_capability(&self) -> &str {
        &self.required_capability
    }

    /// Render the notice as escaped HTML.
    ///
    /// Returns `None` outside an admin context or when the user lacks
    /// [`required_capability`](Self::required_capability).
    pub fn render_html(&self, context: &NoticeContext) -> Option<String> {
        if !context.is_admin() || !context.has_capability(&self.required_capability) {
            return None;
        }
        Some(format!(
            "<div class=\"notice {}\"><p>{}</p></div>",
            self.severity.css_class(),
            escape_html(&self.message)
        ))
    }
}

/// The request context a notice is rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeContext {
    is_admin: bool,
    capabilities: BTreeSet<String>,
}

impl NoticeContext {
    /// An administrative screen with no capabilities granted yet.
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            capabilities: BTreeSet::new(),
        }
    }

    /// A public-facing request; notices never render here.
    pub fn front_end() -> Self {
        Self::default()
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn installer() -> NoticeContext {
        NoticeContext::admin().with_capability(INSTALL_PLUGINS_CAPABILITY)
    }

    #[test]
    fn test_from_failures_selects_variant() {
        assert_eq!(UnmetRequirement::from_failures(None, None), None);
        assert_eq!(
            UnmetRequirement::from_failures(Some("8.1"), None),
            Some(UnmetRequirement::Php {
                required: "8.1".to_string()
            })
        );
        assert!(matches!(
            UnmetRequirement::from_failures(Some("8.1"), Some("6.4")),
            Some(UnmetRequirement::Both { .. })
        ));
    }

    #[test]
    fn test_php_message_omits_platform() {
        let unmet = UnmetRequirement::from_failures(Some("99.0"), None).unwrap();
        let notice = Notice::unmet_requirements(Some("Demo"), &unmet, "WordPress");
        assert_eq!(
            notice.message(),
            "Demo requires PHP version 99.0 or higher. Please update PHP to activate this plugin."
        );
        assert_eq!(notice.severity(), Severity::Error);
    }

    #[test]
    fn test_platform_message_uses_platform_name() {
        let unmet = UnmetRequirement::from_failures(None, Some("7.0")).unwrap();
        let notice = Notice::unmet_requirements(None, &unmet, "ClassicPress");
        assert!(notice.message().starts_with("Unknown Plugin Name requires ClassicPress"));
        assert!(!notice.message().contains("PHP"));
    }

    #[test]
    fn test_render_html_escapes_markup() {
        let notice = Notice::new("<b>Tom & Jerry's</b>", Severity::Error);
        let html = notice.render_html(&installer()).unwrap();
        assert_eq!(
            html,
            "<div class=\"notice notice-error\"><p>&lt;b&gt;Tom &amp; Jerry&#x27;s&lt;/b&gt;</p></div>"
        );
    }

    #[test]
    fn test_render_html_requires_admin_and_capability() {
        let notice = Notice::new("blocked", Severity::Error);
        assert!(notice.render_html(&NoticeContext::front_end()).is_none());
        assert!(notice.render_html(&NoticeContext::admin()).is_none());
        assert!(
            notice
                .render_html(&NoticeContext::admin().with_capability("edit_posts"))
                .is_none()
        );
        assert!(notice.render_html(&installer()).is_some());
    }

    #[test]
    fn test_render_html_on_front_end_ignores_capability() {
        let notice = Notice::new("blocked", Severity::Error);
        let context = NoticeContext::front_end().with_capability(INSTALL_PLUGINS_CAPABILITY);
        assert!(notice.render_html(&context).is_none());
    }
}
