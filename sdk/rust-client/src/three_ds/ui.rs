use std::collections::HashMap;

use payorch_api_models::ui_customization::{
    AppearanceCustomization, ButtonCustomization, LabelCustomization, TextBoxCustomization,
    ToolbarCustomization, UiCustomization, ViewCustomization,
};
use serde::Serialize;

/// Appearance keys the device 3DS runtime expects. Fixed, uppercase,
/// vendor-mandated.
pub const DEFAULT_APPEARANCE_KEY: &str = "DEFAULT";
pub const DARK_APPEARANCE_KEY: &str = "DARK";

/// Translates caller styling into the runtime's configuration shape, one
/// entry per non-empty appearance. Returns `None` when the input is absent
/// or carries no set leaf field anywhere, since an all-empty configuration
/// would act as an accidental override in the runtime.
pub fn map_ui_customization(
    customization: Option<&UiCustomization>,
) -> Option<HashMap<String, ProviderUiCustomization>> {
    let customization = customization?;
    if customization.is_empty() {
        return None;
    }

    let mut by_appearance = HashMap::new();
    if let Some(light) = non_empty(customization.light.as_ref()) {
        by_appearance.insert(DEFAULT_APPEARANCE_KEY.to_string(), map_appearance(light));
    }
    if let Some(dark) = non_empty(customization.dark.as_ref()) {
        by_appearance.insert(DARK_APPEARANCE_KEY.to_string(), map_appearance(dark));
    }
    Some(by_appearance)
}

fn non_empty(tree: Option<&AppearanceCustomization>) -> Option<&AppearanceCustomization> {
    tree.filter(|tree| !tree.is_empty())
}

fn map_appearance(appearance: &AppearanceCustomization) -> ProviderUiCustomization {
    ProviderUiCustomization {
        label: appearance
            .label
            .as_ref()
            .filter(|label| !label.is_empty())
            .map(map_label),
        toolbar: appearance
            .toolbar
            .as_ref()
            .filter(|toolbar| !toolbar.is_empty())
            .map(map_toolbar),
        text_box: appearance
            .text_box
            .as_ref()
            .filter(|text_box| !text_box.is_empty())
            .map(map_text_box),
        background: appearance
            .view
            .as_ref()
            .filter(|view| !view.is_empty())
            .map(map_view),
        buttons: map_buttons(appearance),
    }
}

fn map_label(label: &LabelCustomization) -> ProviderLabelStyle {
    ProviderLabelStyle {
        heading_text_color: label.heading_text_color.clone(),
        heading_font_name: label.heading_font_name.clone(),
        heading_font_size: label.heading_font_size,
        text_color: label.text_color.clone(),
        font_name: label.font_name.clone(),
        font_size: label.font_size,
    }
}

fn map_toolbar(toolbar: &ToolbarCustomization) -> ProviderToolbarStyle {
    ProviderToolbarStyle {
        background_color: toolbar.background_color.clone(),
        header_text: toolbar.header_text.clone(),
        button_text: toolbar.button_text.clone(),
        text_color: toolbar.text_color.clone(),
        font_name: toolbar.font_name.clone(),
        font_size: toolbar.font_size,
    }
}

fn map_text_box(text_box: &TextBoxCustomization) -> ProviderTextBoxStyle {
    ProviderTextBoxStyle {
        border_color: text_box.border_color.clone(),
        border_width: text_box.border_width,
        corner_radius: text_box.corner_radius,
        text_color: text_box.text_color.clone(),
        font_name: text_box.font_name.clone(),
        font_size: text_box.font_size,
    }
}

fn map_view(view: &ViewCustomization) -> ProviderBackgroundStyle {
    ProviderBackgroundStyle {
        challenge_color: view.challenge_view_background_color.clone(),
        progress_color: view.progress_view_background_color.clone(),
    }
}

fn map_buttons(
    appearance: &AppearanceCustomization,
) -> HashMap<ProviderButtonType, ProviderButtonStyle> {
    let mut buttons = HashMap::new();
    let Some(source) = appearance.buttons.as_ref() else {
        return buttons;
    };
    let slots = [
        (ProviderButtonType::Submit, source.submit.as_ref()),
        (ProviderButtonType::Continue, source.continue_button.as_ref()),
        (ProviderButtonType::Next, source.next.as_ref()),
        (ProviderButtonType::Cancel, source.cancel.as_ref()),
        (ProviderButtonType::Resend, source.resend.as_ref()),
    ];
    for (button_type, customization) in slots {
        if let Some(style) = customization.filter(|button| !button.is_empty()) {
            buttons.insert(button_type, map_button(style));
        }
    }
    buttons
}

fn map_button(button: &ButtonCustomization) -> ProviderButtonStyle {
    ProviderButtonStyle {
        background_color: button.background_color.clone(),
        corner_radius: button.corner_radius,
        text_color: button.text_color.clone(),
        font_name: button.font_name.clone(),
        font_size: button.font_size,
    }
}

/// Per-appearance configuration in the shape the device runtime consumes.
/// Empty sub-trees are omitted rather than passed as empty objects.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderUiCustomization {
    pub label: Option<ProviderLabelStyle>,
    pub toolbar: Option<ProviderToolbarStyle>,
    pub text_box: Option<ProviderTextBoxStyle>,
    pub background: Option<ProviderBackgroundStyle>,
    pub buttons: HashMap<ProviderButtonType, ProviderButtonStyle>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderLabelStyle {
    pub heading_text_color: Option<String>,
    pub heading_font_name: Option<String>,
    pub heading_font_size: Option<u32>,
    pub text_color: Option<String>,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderToolbarStyle {
    pub background_color: Option<String>,
    pub header_text: Option<String>,
    pub button_text: Option<String>,
    pub text_color: Option<String>,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderTextBoxStyle {
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub corner_radius: Option<u32>,
    pub text_color: Option<String>,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderBackgroundStyle {
    pub challenge_color: Option<String>,
    pub progress_color: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, strum::Display)]
pub enum ProviderButtonType {
    Submit,
    Continue,
    Next,
    Cancel,
    Resend,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProviderButtonStyle {
    pub background_color: Option<String>,
    pub corner_radius: Option<u32>,
    pub text_color: Option<String>,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
}
