use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Chooses between the dark and light variant of a class string.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write {key}")]
    WriteFailed { key: String },
}

/// Key/value persistence for UI preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key: key.to_string() })
    }
}

/// The theme together with the store it is persisted in.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePreference<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Reads the persisted preference, falling back to dark.
    pub fn load(store: S) -> Self {
        let theme = match store.read(THEME_STORAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("Ignoring stored theme: {}", err);
                Theme::default()
            }),
            None => Theme::default(),
        };
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists it. A failed write is logged and the
    /// in-memory value flips anyway.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.write(THEME_STORAGE_KEY, self.theme.as_str()) {
            warn!("Theme preference not saved: {}", err);
        }
        self.theme
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let preference = use_mut_ref(|| ThemePreference::load(BrowserStorage));
    let theme = use_state_eq({
        let preference = preference.clone();
        move || preference.borrow().theme()
    });

    let toggle = {
        let theme = theme.clone();
        use_callback(
            move |_: (), _| {
                let next = preference.borrow_mut().toggle();
                info!("Switched to {} theme", next);
                theme.set(next);
            },
            (),
        )
    };

    // Mirror the theme on <html> so page-level styles can follow it
    use_effect_with_deps(
        |theme| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let classes = root.class_list();
                let _ = if theme.is_dark() {
                    classes.add_1("dark")
                } else {
                    classes.remove_1("dark")
                };
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
            || ()
        },
        *theme,
    );

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme; dark when rendered outside a [`ThemeProvider`].
#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.theme)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Unavailable);
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_to_dark() {
        let pref = ThemePreference::load(MemoryStore::default());
        assert_eq!(pref.theme(), Theme::Dark);
    }

    #[test]
    fn loads_persisted_value() {
        let store = MemoryStore::default();
        store.write(THEME_STORAGE_KEY, "light").unwrap();
        assert_eq!(ThemePreference::load(store).theme(), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_dark() {
        let store = MemoryStore::default();
        store.write(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::load(store).theme(), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips_and_persists() {
        let store = MemoryStore::default();
        let mut pref = ThemePreference::load(store.clone());
        let original = pref.theme();

        let first = pref.toggle();
        assert_eq!(first, Theme::Light);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some(first.as_str()));

        let second = pref.toggle();
        assert_eq!(second, original);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some(second.as_str()));
    }

    #[test]
    fn failed_write_still_flips_in_memory() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let mut pref = ThemePreference::load(store);
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn parses_and_serializes_lowercase() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark!".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(Theme::Dark.pick("bg-gray-900", "bg-gray-50"), "bg-gray-900");
        assert_eq!(Theme::Light.pick("bg-gray-900", "bg-gray-50"), "bg-gray-50");
    }
}
