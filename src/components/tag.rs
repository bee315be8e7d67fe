use std::sync::Once;

use cosmic::iced::{Alignment, Background, Border};
use cosmic::widget::{button, container, icon, row, text, tooltip};
use cosmic::{Element, theme};

use crate::color::TagColor;

const DEFAULT_DISMISS_ICON: &str = "window-close-symbolic";

/// Emitted by [`Tag::view`]; route back through [`Tag::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CloseRequested,
    Pressed,
}

/// Passed to the close callback; call [`prevent_default`](Self::prevent_default)
/// to keep the tag on screen.
#[derive(Debug, Default)]
pub struct CloseEvent {
    prevented: bool,
}

impl CloseEvent {
    pub fn prevent_default(&mut self) {
        self.prevented = true;
    }

    pub fn is_prevented(&self) -> bool {
        self.prevented
    }
}

type CloseCallback = Box<dyn Fn(&mut CloseEvent)>;

/// Dismiss affordance configuration: icon override and accessible label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closable {
    pub icon_name: Option<String>,
    pub label: Option<String>,
}

/// An inline label chip: text, optional leading icon, optional color,
/// optional dismiss control.
///
/// The tag owns one piece of lifecycle state, a hidden flag flipped when the
/// user dismisses it. Hosts that want full control supply a visibility value
/// via [`set_visible`](Self::set_visible); that value wins over local state.
pub struct Tag {
    content: String,
    icon_name: Option<String>,
    color: Option<TagColor>,
    closable: Option<Closable>,
    bordered: bool,
    pressable: bool,
    rtl: bool,
    controlled: Option<bool>,
    hidden: bool,
    on_close: Option<CloseCallback>,
}

impl Tag {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            icon_name: None,
            color: None,
            closable: None,
            bordered: true,
            pressable: false,
            rtl: false,
            controlled: None,
            hidden: false,
            on_close: None,
        }
    }

    /// Leading icon, by freedesktop icon name.
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon_name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<TagColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Render a dismiss control with the default icon.
    pub fn closable(mut self) -> Self {
        self.closable = Some(Closable::default());
        self
    }

    /// Render a dismiss control with a custom icon and accessible label.
    pub fn closable_with(mut self, closable: Closable) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Suppress (or restore) the border.
    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Emit [`Event::Pressed`] on click, with press feedback.
    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    /// Mirror icon / label / dismiss ordering for right-to-left scripts.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Invoked when the dismiss control is clicked, before the tag hides.
    pub fn on_close(mut self, callback: impl Fn(&mut CloseEvent) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Compatibility shim for the old controlled-visibility prop.
    #[deprecated(note = "drop the tag from the host view instead, or use `set_visible`")]
    pub fn visible(mut self, visible: bool) -> Self {
        warn_visible_deprecated();
        self.controlled = Some(visible);
        self
    }

    /// Hand visibility control to the host. `Some` always wins over the
    /// tag's own close-driven state; `None` returns control to the tag.
    pub fn set_visible(&mut self, visible: Option<bool>) {
        self.controlled = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.controlled.unwrap_or(!self.hidden)
    }

    pub fn is_closable(&self) -> bool {
        self.closable.is_some()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Run the close flow: notify the callback, then hide unless it
    /// prevented the default. Controlled tags keep showing the host value.
    pub fn close(&mut self) {
        let mut event = CloseEvent::default();
        if let Some(callback) = &self.on_close {
            callback(&mut event);
        }
        if !event.is_prevented() {
            self.hidden = true;
        }
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::CloseRequested => self.close(),
            Event::Pressed => {}
        }
    }

    /// Render the tag, or `None` while hidden.
    pub fn view(&self) -> Option<Element<'static, Event>> {
        if !self.is_visible() {
            return None;
        }

        let mut parts: Vec<Element<'static, Event>> = Vec::new();

        if let Some(name) = &self.icon_name {
            parts.push(icon::from_name(name.clone()).size(14).icon().into());
        }

        parts.push(text::caption(self.content.clone()).size(11.0).into());

        if let Some(closable) = &self.closable {
            parts.push(dismiss_button(closable));
        }

        if self.rtl {
            parts.reverse();
        }

        let body = container(
            row::with_children(parts)
                .spacing(4)
                .align_y(Alignment::Center),
        )
        .padding([2, 8])
        .class(self.body_class());

        if self.pressable {
            Some(
                button::custom(body)
                    .padding(0)
                    .class(theme::Button::Text)
                    .on_press(Event::Pressed)
                    .into(),
            )
        } else {
            Some(body.into())
        }
    }

    fn body_class(&self) -> theme::Container<'static> {
        let bordered = self.bordered;
        match self.color {
            Some(color) => {
                let fill = color.fill();
                let foreground = color.text_color();
                theme::Container::custom(move |_theme| container::Style {
                    background: Some(Background::Color(fill)),
                    text_color: Some(foreground),
                    icon_color: Some(foreground),
                    border: Border {
                        color: fill,
                        width: if bordered { 1.0 } else { 0.0 },
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                })
            }
            None => theme::Container::custom(move |theme| {
                let cosmic = theme.cosmic();
                container::Style {
                    background: Some(Background::Color(
                        cosmic.background.component.base.into(),
                    )),
                    border: Border {
                        color: cosmic.background.component.divider.into(),
                        width: if bordered { 1.0 } else { 0.0 },
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            }),
        }
    }
}

fn dismiss_button(closable: &Closable) -> Element<'static, Event> {
    let name = closable
        .icon_name
        .clone()
        .unwrap_or_else(|| DEFAULT_DISMISS_ICON.to_string());
    let btn = button::icon(icon::from_name(name).size(12))
        .padding(0)
        .class(theme::Button::Text)
        .on_press(Event::CloseRequested);

    match &closable.label {
        Some(label) => tooltip(btn, text::caption(label.clone()), tooltip::Position::Top).into(),
        None => btn.into(),
    }
}

fn warn_visible_deprecated() {
    if cfg!(debug_assertions) {
        static WARNED: Once = Once::new();
        WARNED.call_once(|| {
            log::warn!("Tag::visible is deprecated; drop the tag from the host view instead");
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn close_without_callback_hides() {
        let mut tag = Tag::new("beta").closable();
        assert!(tag.is_visible());
        tag.close();
        assert!(!tag.is_visible());
        assert!(tag.view().is_none());
    }

    #[test]
    fn close_routes_through_update() {
        let mut tag = Tag::new("beta").closable();
        tag.update(Event::CloseRequested);
        assert!(!tag.is_visible());
    }

    #[test]
    fn callback_runs_before_hiding() {
        let called = Rc::new(Cell::new(false));
        let seen = called.clone();
        let mut tag = Tag::new("beta")
            .closable()
            .on_close(move |_| seen.set(true));
        tag.close();
        assert!(called.get());
        assert!(!tag.is_visible());
    }

    #[test]
    fn prevent_default_keeps_tag_visible() {
        let mut tag = Tag::new("beta")
            .closable()
            .on_close(|event| event.prevent_default());
        tag.close();
        assert!(tag.is_visible());
        assert!(tag.view().is_some());
    }

    #[test]
    fn controlled_value_wins_over_close() {
        let mut tag = Tag::new("beta").closable();
        tag.set_visible(Some(true));
        tag.close();
        assert!(tag.is_visible());

        tag.set_visible(Some(false));
        assert!(!tag.is_visible());
        tag.set_visible(Some(true));
        assert!(tag.is_visible());
    }

    #[test]
    fn releasing_control_restores_local_state() {
        let mut tag = Tag::new("beta").closable();
        tag.set_visible(Some(true));
        tag.close();
        tag.set_visible(None);
        assert!(!tag.is_visible());
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_visible_builder_controls() {
        let tag = Tag::new("beta").visible(false);
        assert!(!tag.is_visible());
        assert!(tag.view().is_none());
    }

    #[test]
    fn not_closable_by_default() {
        let tag = Tag::new("beta");
        assert!(!tag.is_closable());
        assert!(tag.view().is_some());
    }

    #[test]
    fn closable_spec_carries_overrides() {
        let tag = Tag::new("beta").closable_with(Closable {
            icon_name: Some("edit-delete-symbolic".into()),
            label: Some("Remove beta".into()),
        });
        assert!(tag.is_closable());
        assert!(tag.view().is_some());
    }
}
