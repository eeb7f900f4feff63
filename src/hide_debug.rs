use std::{fmt::Debug, ops::Deref};

/// Wraps the config and template registry so `#[tracing::instrument]` spans
/// don't dump their entire contents into every log line.
#[derive(Clone)]
pub struct HideDebug<T>(pub T);

impl<T> Debug for HideDebug<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", std::any::type_name::<T>())
    }
}

impl<T> Deref for HideDebug<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
