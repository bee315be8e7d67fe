use uuid::Uuid;

use marque::components::{checkable_tag, tag};

#[derive(Debug, Clone)]
pub enum Message {
    /// Event from one of the dismissible gallery tags.
    Tag(Uuid, tag::Event),
    /// Event from the host-controlled tag.
    ControlledTag(tag::Event),
    ControlledToggled(bool),
    /// Event from a filter chip, by index.
    Filter(usize, checkable_tag::Event),
    /// A pressable gallery tag was clicked.
    Pressed(&'static str),
    NewTagInput(String),
    NewTagSubmit,
    ResetTags,
}
