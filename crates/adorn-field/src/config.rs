//! Declarative field configuration.
//!
//! ```rust
//! use adorn_field::config::{BehaviourKind, FieldAttributes};
//!
//! let attrs = FieldAttributes::from_json(r#"{ "right_behaviour": "clear_button", "error": true }"#)?;
//! assert_eq!(attrs.right_behaviour, BehaviourKind::ClearButton);
//! assert!(attrs.status().error());
//! # Ok::<(), adorn_field::config::ConfigError>(())
//! ```

use std::rc::Rc;

use adorn_core::{FieldStatus, RelativeSlot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::behaviour::{
    Behaviour, ButtonBehaviour, ClearButton, ClickHandler, NoneBehaviour, PasswordButton,
};
use crate::controller::CompoundDrawablesController;
use crate::drawable::Drawable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed field attributes: {0}")]
    Json(#[from] serde_json::Error),
    #[error("button behaviour requires a content description")]
    MissingContentDescription,
    #[error("button behaviour requires a click handler")]
    MissingClickHandler,
    #[error("{slot:?} title requires a label renderer")]
    MissingLabelRenderer { slot: RelativeSlot },
}

/// Turns title text into a decoration.
pub trait LabelRenderer {
    fn render(&self, text: &str) -> Rc<dyn Drawable>;
}

/// Behaviour installed on the end slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBehaviour", rename_all = "snake_case")]
pub enum BehaviourKind {
    #[default]
    None,
    ClearButton,
    Password,
    Button,
}

// accepted on input: the numeric code or the name
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBehaviour {
    Code(i64),
    Name(String),
}

impl From<RawBehaviour> for BehaviourKind {
    fn from(raw: RawBehaviour) -> Self {
        match raw {
            RawBehaviour::Code(0) => BehaviourKind::None,
            RawBehaviour::Code(1) => BehaviourKind::ClearButton,
            RawBehaviour::Code(2) => BehaviourKind::Password,
            RawBehaviour::Code(3) => BehaviourKind::Button,
            RawBehaviour::Name(name) => match name.as_str() {
                "none" => BehaviourKind::None,
                "clear_button" => BehaviourKind::ClearButton,
                "password" => BehaviourKind::Password,
                "button" => BehaviourKind::Button,
                _ => {
                    log::warn!("unknown right_behaviour {name:?}, using none");
                    BehaviourKind::None
                }
            },
            RawBehaviour::Code(code) => {
                log::warn!("unknown right_behaviour {code}, using none");
                BehaviourKind::None
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAttributes {
    pub left_title: Option<String>,
    pub right_title: Option<String>,
    pub right_behaviour: BehaviourKind,
    pub right_content_description: Option<String>,
    pub error: bool,
    pub success: bool,
    pub refresh_while_pressed: bool,
}

impl FieldAttributes {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let attrs: FieldAttributes = serde_json::from_str(json)?;
        attrs.validate()?;
        Ok(attrs)
    }

    /// Checks what can be checked without the host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.right_behaviour == BehaviourKind::Button
            && self
                .right_content_description
                .as_deref()
                .is_none_or(str::is_empty)
        {
            return Err(ConfigError::MissingContentDescription);
        }
        Ok(())
    }

    /// Initial status; error wins when both flags are set.
    pub fn status(&self) -> FieldStatus {
        FieldStatus::restore(self.error, self.success)
    }

    pub fn build_behaviour(
        &self,
        on_click: Option<ClickHandler>,
    ) -> Result<Rc<dyn Behaviour>, ConfigError> {
        Ok(match self.right_behaviour {
            BehaviourKind::None => NoneBehaviour::shared(),
            BehaviourKind::ClearButton => Rc::new(ClearButton::new()),
            BehaviourKind::Password => Rc::new(PasswordButton::new()),
            BehaviourKind::Button => {
                let description = self
                    .right_content_description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .ok_or(ConfigError::MissingContentDescription)?;
                let handler = on_click.ok_or(ConfigError::MissingClickHandler)?;
                Rc::new(ButtonBehaviour::new(description, handler))
            }
        })
    }

    /// Configures `controller` and returns the status the host should adopt.
    ///
    /// Titles become pending decorations, installed on
    /// [`CompoundDrawablesController::on_attached_to_window`]. Nothing is
    /// applied if any part of the configuration is invalid.
    pub fn apply(
        &self,
        controller: &CompoundDrawablesController,
        labels: Option<&dyn LabelRenderer>,
        on_click: Option<ClickHandler>,
    ) -> Result<FieldStatus, ConfigError> {
        self.validate()?;
        let titles = [
            (RelativeSlot::Start, self.left_title.as_deref()),
            (RelativeSlot::End, self.right_title.as_deref()),
        ];
        let mut rendered = Vec::new();
        for (slot, title) in titles {
            let Some(title) = title else { continue };
            let renderer = labels.ok_or(ConfigError::MissingLabelRenderer { slot })?;
            rendered.push((slot, renderer.render(title)));
        }
        let behaviour = self.build_behaviour(on_click)?;

        controller.set_refresh_while_pressed(self.refresh_while_pressed);
        for (slot, drawable) in rendered {
            controller.set_pending_drawable(slot, Some(drawable));
        }
        controller.set_compound_drawable_behaviour_relative(RelativeSlot::End, behaviour);
        Ok(self.status())
    }
}
