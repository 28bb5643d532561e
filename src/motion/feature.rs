use log::debug;

use super::MountError;

/// An enhancement that may or may not have found its markup.
///
/// Setup functions hand back `Inert` when their anchors are missing, so the
/// page code can call into a feature without checking first.
pub enum Feature<T> {
    Active(T),
    Inert,
}

impl<T> Feature<T> {
    pub fn from_result(name: &str, result: Result<T, MountError>) -> Self {
        match result {
            Ok(inner) => Feature::Active(inner),
            Err(e) => {
                debug!("{} disabled: {}", name, e);
                Feature::Inert
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Feature::Active(_))
    }

    pub fn active(&self) -> Option<&T> {
        match self {
            Feature::Active(inner) => Some(inner),
            Feature::Inert => None,
        }
    }

    /// Runs `f` against the active feature; does nothing when inert.
    pub fn with<F: FnOnce(&T)>(&self, f: F) {
        if let Feature::Active(inner) = self {
            f(inner);
        }
    }
}

impl<T> Default for Feature<T> {
    fn default() -> Self {
        Feature::Inert
    }
}
