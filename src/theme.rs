use std::collections::HashMap;

/// One of the five option mappings a statement can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Server,
    GlobalSession,
    Session,
    GlobalWindow,
    Window,
}

impl Scope {
    /// Every scope, in display order.
    pub const ALL: [Scope; 5] = [
        Scope::Server,
        Scope::GlobalSession,
        Scope::Session,
        Scope::GlobalWindow,
        Scope::Window,
    ];

    /// Probe order for `#{name}` interpolation: most specific scope wins.
    pub const LOOKUP_ORDER: [Scope; 5] = [
        Scope::Window,
        Scope::GlobalWindow,
        Scope::Session,
        Scope::GlobalSession,
        Scope::Server,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scope::Server => "server",
            Scope::GlobalSession => "global-session",
            Scope::Session => "session",
            Scope::GlobalWindow => "global-window",
            Scope::Window => "window",
        }
    }

    pub fn from_name(name: &str) -> Option<Scope> {
        Scope::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// The layered option store a theme resolves into.
///
/// The five mappings are independent; executing a document is the only
/// thing in this crate that mutates them. Keys are opaque option names —
/// a `@` prefix marks a user option but is just part of the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub server_options: HashMap<String, String>,
    pub global_session_options: HashMap<String, String>,
    pub session_options: HashMap<String, String>,
    pub global_window_options: HashMap<String, String>,
    pub window_options: HashMap<String, String>,
}

impl Theme {
    pub fn new() -> Self {
        Theme::default()
    }

    pub fn options(&self, scope: Scope) -> &HashMap<String, String> {
        match scope {
            Scope::Server => &self.server_options,
            Scope::GlobalSession => &self.global_session_options,
            Scope::Session => &self.session_options,
            Scope::GlobalWindow => &self.global_window_options,
            Scope::Window => &self.window_options,
        }
    }

    pub fn options_mut(&mut self, scope: Scope) -> &mut HashMap<String, String> {
        match scope {
            Scope::Server => &mut self.server_options,
            Scope::GlobalSession => &mut self.global_session_options,
            Scope::Session => &mut self.session_options,
            Scope::GlobalWindow => &mut self.global_window_options,
            Scope::Window => &mut self.window_options,
        }
    }

    /// Resolves an option name across scopes, most specific first
    /// (window, global-window, session, global-session, server).
    /// Unknown names resolve to the empty string.
    pub fn lookup(&self, name: &str) -> &str {
        for scope in Scope::LOOKUP_ORDER {
            if let Some(value) = self.options(scope).get(name) {
                return value;
            }
        }
        ""
    }
}
