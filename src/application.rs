use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::Length;
use cosmic::widget::{button, checkbox, column, flex_row, row, scrollable, text, text_input};
use cosmic::{Application, Element, executor};

use uuid::Uuid;

use marque::color::{PresetColor, StatusColor, TagColor};
use marque::components::checkable_tag::CheckableTag;
use marque::components::tag::{Closable, Tag};
use marque::config::MarqueConfig;

use crate::message::Message;

pub struct Flags {
    pub config: MarqueConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

pub struct Marque {
    core: Core,
    config: MarqueConfig,
    cosmic_config: cosmic::cosmic_config::Config,

    // Dismissible gallery tags
    tags: Vec<(Uuid, Tag)>,

    // Host-controlled tag: the checkbox value always wins over its close button
    controlled_tag: Tag,
    controlled_visible: bool,

    // Filter chips
    filters: Vec<CheckableTag>,

    new_tag_input: String,
}

fn sample_tags(config: &MarqueConfig) -> Vec<(Uuid, Tag)> {
    let colors: [Option<TagColor>; 4] = [
        None,
        Some(PresetColor::Cyan.into()),
        Some(StatusColor::Warning.into()),
        Some(PresetColor::Purple.into()),
    ];

    let mut tags: Vec<(Uuid, Tag)> = ["alpha", "beta", "gamma", "delta"]
        .into_iter()
        .zip(colors)
        .map(|(label, color)| {
            let mut tag = Tag::new(label)
                .bordered(config.bordered)
                .rtl(config.rtl)
                .closable_with(Closable {
                    icon_name: Some(config.dismiss_icon.clone()),
                    label: Some(format!("Remove {label}")),
                });
            if let Some(color) = color {
                tag = tag.color(color);
            }
            (Uuid::new_v4(), tag)
        })
        .collect();

    // Refuses to close, to show the callback veto
    let pinned = Tag::new("pinned")
        .icon("starred-symbolic")
        .color(StatusColor::Error)
        .bordered(config.bordered)
        .rtl(config.rtl)
        .closable()
        .on_close(|event| {
            log::info!("pinned tag kept its close");
            event.prevent_default();
        });
    tags.push((Uuid::new_v4(), pinned));

    tags
}

fn sample_filters() -> Vec<CheckableTag> {
    vec![
        CheckableTag::new("rust").checked(true),
        CheckableTag::new("cosmic"),
        CheckableTag::new("widgets"),
    ]
}

impl Application for Marque {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.marque.demo";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        let tags = sample_tags(&config);
        let mut controlled_tag = Tag::new("managed by host")
            .color(PresetColor::GeekBlue)
            .bordered(config.bordered)
            .rtl(config.rtl)
            .closable();
        controlled_tag.set_visible(Some(true));

        let app = Self {
            core,
            cosmic_config: flags.cosmic_config,
            tags,
            controlled_tag,
            controlled_visible: true,
            filters: sample_filters(),
            new_tag_input: String::new(),
            config,
        };

        (app, CosmicTask::none())
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::Tag(id, event) => {
                if let Some((_, tag)) = self.tags.iter_mut().find(|(tag_id, _)| *tag_id == id) {
                    tag.update(event);
                }
            }

            Message::ControlledTag(event) => {
                // Routed for completeness; the checkbox value wins
                self.controlled_tag.update(event);
            }

            Message::ControlledToggled(visible) => {
                self.controlled_visible = visible;
                self.controlled_tag.set_visible(Some(visible));
            }

            Message::Filter(index, event) => {
                if let Some(filter) = self.filters.get_mut(index) {
                    filter.update(event);
                }
            }

            Message::Pressed(label) => {
                log::debug!("tag pressed: {label}");
            }

            Message::NewTagInput(value) => {
                self.new_tag_input = value;
            }

            Message::NewTagSubmit => {
                let label = self.new_tag_input.trim().to_string();
                if !label.is_empty() {
                    let tag = Tag::new(label)
                        .bordered(self.config.bordered)
                        .rtl(self.config.rtl)
                        .closable();
                    self.tags.push((Uuid::new_v4(), tag));
                    self.new_tag_input.clear();
                }
            }

            Message::ResetTags => {
                self.tags = sample_tags(&self.config);
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column().spacing(16).padding(16);

        // Preset palette, pressable to show press feedback
        content = content.push(text::title4("Presets"));
        let preset_items: Vec<Element<'_, Message>> = PresetColor::ALL
            .iter()
            .filter_map(|preset| {
                Tag::new(preset.name())
                    .color(*preset)
                    .bordered(self.config.bordered)
                    .pressable(true)
                    .view()
                    .map(|element| element.map(|_| Message::Pressed(preset.name())))
            })
            .collect();
        content = content.push(flex_row(preset_items).row_spacing(4).column_spacing(4));

        // Status colors and an arbitrary hex fill
        content = content.push(text::title4("Statuses and custom colors"));
        let mut status_items: Vec<Element<'_, Message>> = Vec::new();
        for status in [
            StatusColor::Success,
            StatusColor::Processing,
            StatusColor::Error,
            StatusColor::Warning,
        ] {
            if let Some(element) = Tag::new(status.name())
                .color(status)
                .bordered(self.config.bordered)
                .pressable(true)
                .view()
            {
                status_items.push(element.map(move |_| Message::Pressed(status.name())));
            }
        }
        if let Ok(custom) = "#875fc0".parse::<TagColor>() {
            if let Some(element) = Tag::new("#875fc0")
                .color(custom)
                .bordered(self.config.bordered)
                .pressable(true)
                .view()
            {
                status_items.push(element.map(|_| Message::Pressed("custom")));
            }
        }
        content = content.push(flex_row(status_items).row_spacing(4).column_spacing(4));

        // Dismissible tags
        content = content.push(text::title4("Dismissible"));
        let tag_items: Vec<Element<'_, Message>> = self
            .tags
            .iter()
            .filter_map(|(id, tag)| {
                let id = *id;
                tag.view().map(|element| element.map(move |event| Message::Tag(id, event)))
            })
            .collect();
        content = content.push(flex_row(tag_items).row_spacing(4).column_spacing(4));

        let input = text_input::text_input("New tag...", &self.new_tag_input)
            .on_input(Message::NewTagInput)
            .on_submit(|_| Message::NewTagSubmit)
            .width(Length::Fixed(220.0));
        content = content.push(
            row()
                .spacing(8)
                .push(input)
                .push(button::standard("Reset").on_press(Message::ResetTags)),
        );

        // Controlled visibility
        content = content.push(text::title4("Controlled"));
        let mut controlled_row = row().spacing(8).push(
            checkbox("Visible", self.controlled_visible).on_toggle(Message::ControlledToggled),
        );
        if let Some(element) = self.controlled_tag.view() {
            controlled_row = controlled_row.push(element.map(Message::ControlledTag));
        }
        content = content.push(controlled_row);

        // Filter chips
        content = content.push(text::title4("Filters"));
        let filter_items: Vec<Element<'_, Message>> = self
            .filters
            .iter()
            .enumerate()
            .map(|(index, filter)| {
                filter
                    .view()
                    .map(move |event| Message::Filter(index, event))
            })
            .collect();
        content = content.push(flex_row(filter_items).row_spacing(4).column_spacing(4));

        scrollable(content.width(Length::Fill)).into()
    }
}
