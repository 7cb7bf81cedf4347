use serde::{Deserialize, Serialize};

/// Appearance-scoped styling for the 3DS challenge screens, one tree for the
/// default (light) appearance and one for dark. Colors and font names are
/// opaque strings passed through to the device 3DS runtime unvalidated.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<AppearanceCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<AppearanceCustomization>,
}

impl UiCustomization {
    /// True when neither appearance carries any set leaf field. An empty
    /// tree must not be handed to the device runtime, where it would count
    /// as an override.
    pub fn is_empty(&self) -> bool {
        self.light.as_ref().map_or(true, AppearanceCustomization::is_empty)
            && self.dark.as_ref().map_or(true, AppearanceCustomization::is_empty)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppearanceCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<ToolbarCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_box: Option<TextBoxCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<ButtonCustomizations>,
}

impl AppearanceCustomization {
    pub fn is_empty(&self) -> bool {
        self.label.as_ref().map_or(true, LabelCustomization::is_empty)
            && self.toolbar.as_ref().map_or(true, ToolbarCustomization::is_empty)
            && self.text_box.as_ref().map_or(true, TextBoxCustomization::is_empty)
            && self.view.as_ref().map_or(true, ViewCustomization::is_empty)
            && self.buttons.as_ref().map_or(true, ButtonCustomizations::is_empty)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl LabelCustomization {
    pub fn is_empty(&self) -> bool {
        self.heading_text_color.is_none()
            && self.heading_font_name.is_none()
            && self.heading_font_size.is_none()
            && self.text_color.is_none()
            && self.font_name.is_none()
            && self.font_size.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolbarCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl ToolbarCustomization {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.header_text.is_none()
            && self.button_text.is_none()
            && self.text_color.is_none()
            && self.font_name.is_none()
            && self.font_size.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBoxCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl TextBoxCustomization {
    pub fn is_empty(&self) -> bool {
        self.border_color.is_none()
            && self.border_width.is_none()
            && self.corner_radius.is_none()
            && self.text_color.is_none()
            && self.font_name.is_none()
            && self.font_size.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_view_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_view_background_color: Option<String>,
}

impl ViewCustomization {
    pub fn is_empty(&self) -> bool {
        self.challenge_view_background_color.is_none()
            && self.progress_view_background_color.is_none()
    }
}

/// One optional style per challenge-screen button type.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonCustomizations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<ButtonCustomization>,
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_button: Option<ButtonCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ButtonCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<ButtonCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend: Option<ButtonCustomization>,
}

impl ButtonCustomizations {
    pub fn is_empty(&self) -> bool {
        self.submit.as_ref().map_or(true, ButtonCustomization::is_empty)
            && self.continue_button.as_ref().map_or(true, ButtonCustomization::is_empty)
            && self.next.as_ref().map_or(true, ButtonCustomization::is_empty)
            && self.cancel.as_ref().map_or(true, ButtonCustomization::is_empty)
            && self.resend.as_ref().map_or(true, ButtonCustomization::is_empty)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl ButtonCustomization {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.corner_radius.is_none()
            && self.text_color.is_none()
            && self.font_name.is_none()
            && self.font_size.is_none()
    }
}
