use bevy_ecs::prelude::Component;

/// Optional lookup name for an element, resolved via
/// [`UiStage::find`](crate::stage::UiStage::find).
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct UiName(pub String);

impl UiName {
    pub fn new(name: impl Into<String>) -> Self {
        UiName(name.into())
    }
}
