//! Edit controls generated from attribute metadata.
//!
//! One control per declared attribute: a select when the attribute has
//! options, a number input for numeric attributes, a text input otherwise.
//! Each control starts at the attribute's default.

use serde::Serialize;

use crate::attributes::{AttributeKind, AttributeSpec};
use crate::components::ComponentDescriptor;

/// Widget used to edit one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlKind {
    Select {
        options: Vec<&'static str>,
        selected: Option<&'static str>,
    },
    Number {
        value: String,
    },
    Text {
        value: String,
    },
}

/// An edit control bound to one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub attribute: &'static str,
    pub kind: ControlKind,
    pub description: &'static str,
}

impl Control {
    pub fn for_attribute(spec: &AttributeSpec) -> Self {
        let initial = spec.default.unwrap_or("").to_string();
        let kind = match (spec.options, spec.kind) {
            (Some(options), _) => ControlKind::Select {
                options: options.to_vec(),
                selected: spec.default.filter(|d| options.contains(d)),
            },
            (None, AttributeKind::Number) => ControlKind::Number { value: initial },
            (None, AttributeKind::String) => ControlKind::Text { value: initial },
        };
        Self {
            attribute: spec.name,
            kind,
            description: spec.description,
        }
    }

    /// Current value shown by the control.
    pub fn value(&self) -> &str {
        match &self.kind {
            ControlKind::Select { selected, .. } => selected.unwrap_or(""),
            ControlKind::Number { value } | ControlKind::Text { value } => value.as_str(),
        }
    }

    /// Reflect an edit in the control. Unknown select options are ignored.
    pub fn set_value(&mut self, new_value: &str) {
        match &mut self.kind {
            ControlKind::Select { options, selected } => {
                if let Some(option) = options.iter().find(|o| **o == new_value) {
                    *selected = Some(*option);
                }
            }
            ControlKind::Number { value } | ControlKind::Text { value } => {
                new_value.clone_into(value);
            }
        }
    }
}

/// Controls for every attribute of `descriptor`, in declaration order.
pub fn controls_for(descriptor: &ComponentDescriptor) -> Vec<Control> {
    descriptor.attributes.iter().map(Control::for_attribute).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{button, sprite};

    #[test]
    fn test_button_controls() {
        let controls = controls_for(&button::METADATA);
        assert_eq!(controls.len(), 3);
        assert_eq!(controls[0].kind, ControlKind::Text { value: "Click Me".into() });
        assert_eq!(
            controls[1].kind,
            ControlKind::Select {
                options: vec!["primary", "success", "danger"],
                selected: Some("primary"),
            }
        );
    }

    #[test]
    fn test_sprite_controls() {
        let controls = controls_for(&sprite::METADATA);
        // src has no default: empty text input
        assert_eq!(controls[0].kind, ControlKind::Text { value: String::new() });
        assert_eq!(controls[1].kind, ControlKind::Number { value: "32".into() });
        assert!(matches!(controls[6].kind, ControlKind::Select { .. }));
    }

    #[test]
    fn test_set_value() {
        let mut controls = controls_for(&button::METADATA);
        controls[1].set_value("danger");
        assert_eq!(controls[1].value(), "danger");
        controls[1].set_value("neon");
        assert_eq!(controls[1].value(), "danger");
        controls[0].set_value("Go");
        assert_eq!(controls[0].value(), "Go");
    }
}
