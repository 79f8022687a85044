use serde::{Deserialize, Serialize};

use crate::navigation::NavigationError;

/// Верхнеуровневые представления приложения (роли + экраны входа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Admin,
    Client,
    Customer,
    Driver,
    SignIn,
    SignUp,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Home,
        View::Admin,
        View::Client,
        View::Customer,
        View::Driver,
        View::SignIn,
        View::SignUp,
    ];

    /// Путь маршрута
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Admin => "/admin",
            View::Client => "/client",
            View::Customer => "/customer",
            View::Driver => "/driver",
            View::SignIn => "/signin",
            View::SignUp => "/signup",
        }
    }

    /// Ключ представления (первый сегмент пути)
    pub fn key(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Admin => "admin",
            View::Client => "client",
            View::Customer => "customer",
            View::Driver => "driver",
            View::SignIn => "signin",
            View::SignUp => "signup",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Admin => "Admin",
            View::Client => "Client",
            View::Customer => "Customer",
            View::Driver => "Driver",
            View::SignIn => "Sign In",
            View::SignUp => "Sign Up",
        }
    }

    /// Ролевые дашборды (у них есть вкладки)
    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            View::Admin | View::Client | View::Customer | View::Driver
        )
    }

    /// Парсинг ключа. Неизвестный ключ - ошибка, решение о fallback принимает вызывающий.
    pub fn from_key(key: &str) -> Result<Self, NavigationError> {
        let key = key.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.key() == key)
            .ok_or(NavigationError::UnknownView(key))
    }

    /// Разрешение пути в представление. Чистая функция: query, fragment и
    /// завершающий слэш игнорируются, всё неизвестное - Home.
    pub fn resolve_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return View::Home;
        }
        View::ALL
            .into_iter()
            .find(|v| v.path() == trimmed)
            .unwrap_or(View::Home)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(View::resolve_path("/"), View::Home);
        assert_eq!(View::resolve_path("/admin"), View::Admin);
        assert_eq!(View::resolve_path("/client"), View::Client);
        assert_eq!(View::resolve_path("/customer"), View::Customer);
        assert_eq!(View::resolve_path("/driver"), View::Driver);
        assert_eq!(View::resolve_path("/signin"), View::SignIn);
        assert_eq!(View::resolve_path("/signup"), View::SignUp);
    }

    #[test]
    fn test_unknown_path_resolves_home() {
        assert_eq!(View::resolve_path("/nonexistent"), View::Home);
        assert_eq!(View::resolve_path("/client/billing/extra"), View::Home);
        assert_eq!(View::resolve_path(""), View::Home);
        assert_eq!(View::resolve_path("admin"), View::Home);
    }

    #[test]
    fn test_resolve_ignores_query_and_trailing_slash() {
        assert_eq!(View::resolve_path("/client/"), View::Client);
        assert_eq!(View::resolve_path("/driver?tab=history"), View::Driver);
        assert_eq!(View::resolve_path("/admin#fleet"), View::Admin);
    }

    #[test]
    fn test_path_and_key_are_consistent() {
        for view in View::ALL {
            assert_eq!(View::resolve_path(view.path()), view);
            assert_eq!(View::from_key(view.key()).ok(), Some(view));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        let err = View::from_key("warehouse").unwrap_err();
        assert_eq!(err, NavigationError::UnknownView("warehouse".to_string()));
        assert_eq!(View::from_key(" Client ").ok(), Some(View::Client));
    }

    #[test]
    fn test_dashboards() {
        let dashboards: Vec<View> = View::ALL.into_iter().filter(View::is_dashboard).collect();
        assert_eq!(
            dashboards,
            vec![View::Admin, View::Client, View::Customer, View::Driver]
        );
    }
}
