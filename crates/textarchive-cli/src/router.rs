//! Static path → view table.
//!
//! Each route owns a loader; the view behind it is built the first time the
//! route is navigated to and reused afterwards. Paths must match exactly and
//! unknown paths resolve to nothing.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Ocr,
    Memos,
    Schedules,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Ocr,
        Route::Memos,
        Route::Schedules,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Ocr => "/ocr",
            Route::Memos => "/memos",
            Route::Schedules => "/schedules",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::Register => "register",
            Route::Ocr => "ocr",
            Route::Memos => "memos",
            Route::Schedules => "schedules",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.path())
    }
}

pub type Loader<V> = fn() -> Box<V>;

struct Entry<V: ?Sized> {
    route: Route,
    loader: Loader<V>,
    view: OnceLock<Box<V>>,
}

pub struct Router<V: ?Sized> {
    entries: Vec<Entry<V>>,
}

impl<V: ?Sized> Default for Router<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V: ?Sized> Router<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `loader` for `route`, replacing any earlier registration.
    pub fn route(mut self, route: Route, loader: Loader<V>) -> Self {
        self.entries.retain(|entry| entry.route != route);
        self.entries.push(Entry {
            route,
            loader,
            view: OnceLock::new(),
        });
        self
    }

    /// Route registered for `path`, without loading its view.
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let route = Route::from_path(path)?;
        self.entry(route).map(|entry| entry.route)
    }

    /// View for `path`, loading it on first use.
    pub fn navigate(&self, path: &str) -> Option<&V> {
        let route = self.resolve(path)?;
        self.view(route)
    }

    pub fn view(&self, route: Route) -> Option<&V> {
        let entry = self.entry(route)?;
        let view = entry.view.get_or_init(|| {
            tracing::debug!(route = route.name(), "Loading view");
            (entry.loader)()
        });
        Some(&**view)
    }

    pub fn is_loaded(&self, route: Route) -> bool {
        self.entry(route)
            .is_some_and(|entry| entry.view.get().is_some())
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.entries.iter().map(|entry| entry.route)
    }

    fn entry(&self, route: Route) -> Option<&Entry<V>> {
        self.entries.iter().find(|entry| entry.route == route)
    }
}
