//! Application state observed by home screen widgets.

use std::cell::RefCell;

use homescreen_core::{Signal, StateHolder, SubId, signal};
use serde::{Deserialize, Serialize};

/// Name of the built-in wallpaper every install starts with.
pub const DEFAULT_WALLPAPER_NAME: &str = "default";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperCollection {
    pub name: String,
    pub heading: Option<String>,
    pub description: Option<String>,
}

/// A home screen background. Identity is the `name`; the colors are packed
/// `0xAARRGGBB` values supplied with downloadable wallpapers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub name: String,
    #[serde(default)]
    pub collection: WallpaperCollection,
    #[serde(default)]
    pub text_color: Option<u32>,
    #[serde(default)]
    pub card_color_light: Option<u32>,
    #[serde(default)]
    pub card_color_dark: Option<u32>,
}

impl Wallpaper {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collection: WallpaperCollection::default(),
            text_color: None,
            card_color_light: None,
            card_color_dark: None,
        }
    }

    pub fn default_wallpaper() -> Self {
        Self::new(DEFAULT_WALLPAPER_NAME).collection(WallpaperCollection {
            name: "default".into(),
            heading: None,
            description: None,
        })
    }

    pub fn collection(mut self, collection: WallpaperCollection) -> Self {
        self.collection = collection;
        self
    }

    pub fn text_color(mut self, argb: u32) -> Self {
        self.text_color = Some(argb);
        self
    }

    pub fn card_colors(mut self, light: u32, dark: u32) -> Self {
        self.card_color_light = Some(light);
        self.card_color_dark = Some(dark);
        self
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_WALLPAPER_NAME
    }
}

impl Default for Wallpaper {
    fn default() -> Self {
        Self::default_wallpaper()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallpaperState {
    pub current_wallpaper: Wallpaper,
    pub available_wallpapers: Vec<Wallpaper>,
}

impl Default for WallpaperState {
    fn default() -> Self {
        Self {
            current_wallpaper: Wallpaper::default_wallpaper(),
            available_wallpapers: vec![Wallpaper::default_wallpaper()],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub wallpaper_state: WallpaperState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Select an available wallpaper by name.
    UpdateCurrentWallpaper(String),
    /// Replace the available set. A current wallpaper that is no longer
    /// available falls back to the default.
    UpdateAvailableWallpapers(Vec<Wallpaper>),
}

pub struct AppReducer;

impl StateHolder for AppReducer {
    type State = AppState;
    type Event = AppAction;

    fn initial_state() -> AppState {
        AppState::default()
    }

    fn reduce(state: &AppState, event: AppAction) -> AppState {
        let ws = &state.wallpaper_state;
        match event {
            AppAction::UpdateCurrentWallpaper(name) => {
                match ws.available_wallpapers.iter().find(|w| w.name == name) {
                    Some(w) => AppState {
                        wallpaper_state: WallpaperState {
                            current_wallpaper: w.clone(),
                            available_wallpapers: ws.available_wallpapers.clone(),
                        },
                    },
                    None => {
                        log::warn!("ignoring unknown wallpaper {name:?}");
                        state.clone()
                    }
                }
            }
            AppAction::UpdateAvailableWallpapers(available) => {
                let current = available
                    .iter()
                    .find(|w| w.name == ws.current_wallpaper.name)
                    .cloned()
                    .unwrap_or_default();
                AppState {
                    wallpaper_state: WallpaperState {
                        current_wallpaper: current,
                        available_wallpapers: available,
                    },
                }
            }
        }
    }
}

/// Pure reducer for [`AppStore`].
pub fn reduce(state: &AppState, action: AppAction) -> AppState {
    AppReducer::reduce(state, action)
}

/// Shared handle to the application state. Clones observe the same state.
#[derive(Clone)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppReducer::initial_state())
    }
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: signal(initial),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.get()
    }

    /// Read a slice of the current state without cloning all of it.
    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(selector)
    }

    pub fn dispatch(&self, action: AppAction) {
        log::debug!("dispatch {action:?}");
        let next = self.state.with(|s| reduce(s, action));
        if self.state.with(|s| *s != next) {
            self.state.set(next);
        }
    }

    /// Calls `listener` with the selected slice every time it changes.
    ///
    /// The listener does not run for the current value and always sees the
    /// latest state, even when notified from inside another dispatch.
    /// Observation stops when the returned [`Subscription`] is dropped.
    pub fn observe<S, F, L>(&self, selector: F, listener: L) -> Subscription
    where
        S: Clone + PartialEq + 'static,
        F: Fn(&AppState) -> S + 'static,
        L: Fn(&S) + 'static,
    {
        let last = RefCell::new(self.state.with(&selector));
        let current = self.state.clone();
        // Nested dispatches deliver snapshots out of order; compare against
        // the latest state, not the delivered one.
        let id = self.state.subscribe(move |_| {
            let slice = current.with(&selector);
            if *last.borrow() == slice {
                return;
            }
            last.replace(slice.clone());
            listener(&slice);
        });
        let state = self.state.clone();
        Subscription {
            unsubscribe: Some(Box::new(move || {
                state.unsubscribe(id);
            })),
            id,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.state.subscriber_count()
    }
}

/// Active store observation; unsubscribes on drop.
pub struct Subscription {
    id: SubId,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn id(&self) -> SubId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn store_with(names: &[&str]) -> AppStore {
        let mut available = vec![Wallpaper::default_wallpaper()];
        available.extend(names.iter().map(|n| Wallpaper::new(*n)));
        let store = AppStore::default();
        store.dispatch(AppAction::UpdateAvailableWallpapers(available));
        store
    }

    #[test]
    fn test_default_state_uses_default_wallpaper() {
        let s = AppStore::default().state();
        assert!(s.wallpaper_state.current_wallpaper.is_default());
    }

    #[test]
    fn test_select_known_wallpaper() {
        let store = store_with(&["amethyst"]);
        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        let current = store.select(|s| s.wallpaper_state.current_wallpaper.clone());
        assert_eq!(current.name, "amethyst");
        assert!(!current.is_default());
    }

    #[test]
    fn test_unknown_wallpaper_is_ignored() {
        let store = store_with(&["amethyst"]);
        let before = store.state();
        store.dispatch(AppAction::UpdateCurrentWallpaper("nope".into()));
        assert_eq!(store.state(), before);
    }

    #[test]
    fn test_removing_current_wallpaper_falls_back_to_default() {
        let store = store_with(&["amethyst"]);
        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        store.dispatch(AppAction::UpdateAvailableWallpapers(vec![
            Wallpaper::default_wallpaper(),
        ]));
        assert!(store.state().wallpaper_state.current_wallpaper.is_default());
    }

    #[test]
    fn test_observe_fires_on_slice_change_only() {
        let store = store_with(&["amethyst", "cerulean"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            store.observe(
                |s| s.wallpaper_state.current_wallpaper.name.clone(),
                move |name| seen.borrow_mut().push(name.clone()),
            )
        };

        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        // Same selection again: state unchanged, no notification.
        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        // Available list changes but the selected name does not.
        store.dispatch(AppAction::UpdateAvailableWallpapers(vec![
            Wallpaper::default_wallpaper(),
            Wallpaper::new("amethyst"),
        ]));
        store.dispatch(AppAction::UpdateCurrentWallpaper("default".into()));
        assert_eq!(*seen.borrow(), vec!["amethyst", "default"]);

        drop(sub);
        assert_eq!(store.observer_count(), 0);
        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_observe_sees_latest_state_after_nested_dispatch() {
        let store = store_with(&["amethyst", "cerulean"]);
        let name = |s: &AppState| s.wallpaper_state.current_wallpaper.name.clone();

        // First observer redirects the first switch to "amethyst".
        let redirected = Rc::new(std::cell::Cell::new(false));
        let _redirect = {
            let store2 = store.clone();
            let redirected = redirected.clone();
            store.observe(name, move |n| {
                if n == "amethyst" && !redirected.replace(true) {
                    store2.dispatch(AppAction::UpdateCurrentWallpaper("cerulean".into()));
                }
            })
        };
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            store.observe(name, move |n| seen.borrow_mut().push(n.clone()))
        };

        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        assert_eq!(*seen.borrow(), vec!["cerulean"]);

        store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
        assert_eq!(*seen.borrow(), vec!["cerulean", "amethyst"]);
        assert_eq!(name(&store.state()), "amethyst");
    }
}
