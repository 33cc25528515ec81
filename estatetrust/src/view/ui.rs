use std::{collections::VecDeque, fmt, str::FromStr};

/// A screen of the client, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    AddPhysicalAsset,
    AddMonetaryAsset,
    AddBeneficiary,
    AddTrustee,
    /// Catch-all for paths that match no screen.
    NotFound(String),
}

impl Route {
    /// Every routable screen, in navigation order.
    pub const ALL: &'static [Route] = &[
        Route::Home,
        Route::Login,
        Route::Register,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::AddPhysicalAsset,
        Route::AddMonetaryAsset,
        Route::AddBeneficiary,
        Route::AddTrustee,
    ];

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
            Self::AddPhysicalAsset => "/add-physical-asset",
            Self::AddMonetaryAsset => "/add-monetary-asset",
            Self::AddBeneficiary => "/add-beneficiary",
            Self::AddTrustee => "/add-trustee",
            Self::NotFound(path) => path,
        }
    }

    /// Resolves a path. Unknown paths resolve to [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            v => v,
        };
        Self::ALL
            .iter()
            .find(|v| v.path() == normalized)
            .cloned()
            .unwrap_or_else(|| Self::NotFound(trimmed.to_owned()))
    }

    /// Returns whether the screen is only useful to a signed-in grantor.
    pub fn requires_grantor(&self) -> bool {
        matches!(
            self,
            Self::AddPhysicalAsset
                | Self::AddMonetaryAsset
                | Self::AddBeneficiary
                | Self::AddTrustee
        )
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::Home
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
}

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    /// How long a toast stays visible, in milliseconds.
    pub const DURATION_MS: u64 = 3000;

    pub fn success<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error<D: Into<String>>(description: D) -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Error".to_owned(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// The navigation state and the pending toasts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ui {
    route: Route,
    toasts: VecDeque<Toast>,
}

impl Ui {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            toasts: VecDeque::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
    }

    pub fn toast(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Removes and returns every pending toast, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        for route in Route::ALL {
            assert_eq!(&Route::parse(route.path()), route);
        }
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn parse_unknown_path() {
        let route = Route::parse("/settings");
        assert_eq!(route, Route::NotFound("/settings".to_owned()));
        assert_eq!(route.path(), "/settings");
    }

    #[test]
    fn toasts_drain_in_order() {
        let mut ui = Ui::default();
        ui.toast(Toast::success("Asset Added", "The asset has been successfully added."));
        ui.toast(Toast::error("boom"));
        let toasts = ui.drain_toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].kind, ToastKind::Error);
        assert_eq!(ui.toasts().count(), 0);
    }
}
