use std::any::Any;

pub mod player;

/// Implemented by every type the bus can dispatch, usually through
/// `#[derive(Event)]` from `nameplate-macros`.
///
/// Dispatch is keyed on the event name rather than `TypeId` so that it keeps
/// working when handlers live in dynamically loaded host plugins.
pub trait Event: Any + Send + Sync {
    fn get_name_static() -> &'static str
    where
        Self: Sized;
    fn get_name(&self) -> &'static str;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone)]
// Lowest priority handlers are executed first, so that higher priority handlers can override their changes
pub enum EventPriority {
    Highest,
    High,
    Normal,
    Low,
    Lowest,
}
