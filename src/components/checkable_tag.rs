use cosmic::widget::{button, text};
use cosmic::{Element, theme};

/// Emitted by [`CheckableTag::view`]; carries the new checked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Toggled(bool),
}

/// A tag that toggles like a checkbox, for filter chips and the like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableTag {
    label: String,
    checked: bool,
}

impl CheckableTag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn update(&mut self, event: Event) {
        let Event::Toggled(checked) = event;
        self.checked = checked;
    }

    pub fn view(&self) -> Element<'static, Event> {
        let class = if self.checked {
            theme::Button::Suggested
        } else {
            theme::Button::Text
        };
        button::custom(text::caption(self.label.clone()).size(11.0))
            .padding([2, 8])
            .class(class)
            .on_press(Event::Toggled(!self.checked))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_by_default() {
        let tag = CheckableTag::new("rust");
        assert!(!tag.is_checked());
    }

    #[test]
    fn toggle_flips_state() {
        let mut tag = CheckableTag::new("rust");
        tag.update(Event::Toggled(true));
        assert!(tag.is_checked());
        tag.update(Event::Toggled(false));
        assert!(!tag.is_checked());
    }

    #[test]
    fn builder_sets_initial_state() {
        let tag = CheckableTag::new("rust").checked(true);
        assert!(tag.is_checked());
    }
}
