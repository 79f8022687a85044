use serde::{Deserialize, Serialize};

use super::tabs::{initial_tab, DashboardTab};
use crate::enums::view::View;

/// Намерение навигации: куда перейти и какую вкладку открыть.
///
/// `target_path` переносится как есть, интерпретирует его представление-получатель.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    #[serde(rename = "targetView")]
    pub target_view: View,
    #[serde(rename = "targetTab", default, skip_serializing_if = "Option::is_none")]
    pub target_tab: Option<String>,
    #[serde(rename = "targetPath", default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
}

impl NavigationIntent {
    pub fn new(target_view: View) -> Self {
        Self {
            target_view,
            target_tab: None,
            target_path: None,
        }
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.target_tab = Some(tab.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Intent на конкретную вкладку дашборда
    pub fn to_tab<T: DashboardTab>(tab: T) -> Self {
        Self::new(T::VIEW).with_tab(tab.key())
    }

    /// Вкладка, на которую должен встать дашборд `T`.
    /// Чужой или неизвестный `target_tab` даёт вкладку по умолчанию.
    pub fn tab_for<T: DashboardTab>(&self) -> T {
        initial_tab::<T>(Some(self))
    }

    /// Разбор ссылок действий из уведомлений.
    ///
    /// `/driver/available-orders` -> Driver + вкладка; `/tracking/DEL001`
    /// (первый сегмент не является представлением) -> вкладка и путь
    /// внутри `current`.
    pub fn parse_link(link: &str, current: View) -> Self {
        let mut segments = link
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty());

        let first = match segments.next() {
            Some(first) => first,
            None => return Self::new(current),
        };

        let (view, tab) = match View::from_key(first) {
            Ok(view) => (view, segments.next()),
            Err(_) => (current, Some(first)),
        };

        Self {
            target_view: view,
            target_tab: tab.map(str::to_string),
            target_path: segments.next().map(str::to_string),
        }
    }
}

/// Одноразовый слот для intent, переживающий ровно один переход маршрута.
///
/// Каждое представление при монтировании вызывает `take_for`, который
/// всегда опустошает слот: intent, адресованный другому представлению,
/// просто отбрасывается и никогда не будет применён позже.
#[derive(Debug, Clone, Default)]
pub struct PendingIntent {
    slot: Option<NavigationIntent>,
}

impl PendingIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Положить intent. Непрочитанный предыдущий intent заменяется.
    pub fn put(&mut self, intent: NavigationIntent) {
        self.slot = Some(intent);
    }

    pub fn take_for(&mut self, view: View) -> Option<NavigationIntent> {
        self.slot.take().filter(|intent| intent.target_view == view)
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::tabs::{ClientTab, CustomerTab, DriverTab};

    #[test]
    fn test_take_consumes_once() {
        let mut pending = PendingIntent::new();
        pending.put(NavigationIntent::to_tab(ClientTab::Billing));

        let first = pending.take_for(View::Client);
        assert_eq!(
            first.map(|i| i.tab_for::<ClientTab>()),
            Some(ClientTab::Billing)
        );
        assert!(pending.take_for(View::Client).is_none());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_mismatched_view_drains_slot() {
        let mut pending = PendingIntent::new();
        pending.put(NavigationIntent::new(View::Client).with_tab("billing"));

        // Пользователь ушёл на Admin раньше, чем смонтировался Client
        assert!(pending.take_for(View::Admin).is_none());
        // Возврат на Client без нового intent не воспроизводит старый
        assert!(pending.take_for(View::Client).is_none());
    }

    #[test]
    fn test_put_replaces_unconsumed() {
        let mut pending = PendingIntent::new();
        pending.put(NavigationIntent::new(View::Client).with_tab("billing"));
        pending.put(NavigationIntent::new(View::Client).with_tab("tracking"));

        let intent = pending.take_for(View::Client).unwrap();
        assert_eq!(intent.target_tab.as_deref(), Some("tracking"));
    }

    #[test]
    fn test_unknown_tab_falls_back() {
        let intent = NavigationIntent::new(View::Customer).with_tab("not-a-real-tab");
        assert_eq!(intent.tab_for::<CustomerTab>(), CustomerTab::Tracking);
    }

    #[test]
    fn test_parse_link_with_view() {
        let intent = NavigationIntent::parse_link("/driver/available-orders", View::Driver);
        assert_eq!(intent.target_view, View::Driver);
        assert_eq!(intent.tab_for::<DriverTab>(), DriverTab::AvailableOrders);
        assert!(intent.target_path.is_none());

        let intent = NavigationIntent::parse_link("/client/communication", View::Driver);
        assert_eq!(intent.target_view, View::Client);
        assert_eq!(intent.target_tab.as_deref(), Some("communication"));
    }

    #[test]
    fn test_parse_link_relative() {
        let intent = NavigationIntent::parse_link("/tracking/DEL001", View::Customer);
        assert_eq!(intent.target_view, View::Customer);
        assert_eq!(intent.target_tab.as_deref(), Some("tracking"));
        assert_eq!(intent.target_path.as_deref(), Some("DEL001"));
    }

    #[test]
    fn test_parse_link_unknown_tab_keeps_view() {
        let intent = NavigationIntent::parse_link("/driver/messages", View::Home);
        assert_eq!(intent.target_view, View::Driver);
        assert_eq!(intent.tab_for::<DriverTab>(), DriverTab::Dashboard);
    }

    #[test]
    fn test_parse_empty_link() {
        let intent = NavigationIntent::parse_link("", View::Client);
        assert_eq!(intent, NavigationIntent::new(View::Client));
    }

    #[test]
    fn test_serialized_field_names() {
        let intent = NavigationIntent::new(View::Client).with_tab("billing");
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["targetView"], "client");
        assert_eq!(json["targetTab"], "billing");
        assert!(json.get("targetPath").is_none());
    }
}
