use crate::enums::view::View;

use super::intent::NavigationIntent;

/// Перечисление вкладок ролевого дашборда.
///
/// Порядок `ALL` - порядок отображения; первая вкладка - вкладка по умолчанию.
pub trait DashboardTab: Copy + Eq + Send + Sync + std::fmt::Debug + 'static {
    const VIEW: View;
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.key() == key)
    }

    fn default_tab() -> Self {
        Self::ALL[0]
    }
}

/// Начальная вкладка при монтировании: вкладка из intent, если intent
/// адресован этому дашборду и вкладка ему известна, иначе вкладка по умолчанию.
pub fn initial_tab<T: DashboardTab>(intent: Option<&NavigationIntent>) -> T {
    intent
        .filter(|intent| intent.target_view == T::VIEW)
        .and_then(|intent| intent.target_tab.as_deref())
        .and_then(T::from_key)
        .unwrap_or_else(T::default_tab)
}

macro_rules! dashboard_tabs {
    (
        $(#[$meta:meta])*
        $name:ident for $view:expr => {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl DashboardTab for $name {
            const VIEW: View = $view;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

dashboard_tabs! {
    /// Вкладки администратора
    AdminTab for View::Admin => {
        Overview => ("overview", "Overview"),
        Fleet => ("fleet", "Fleet"),
        Personnel => ("personnel", "Personnel"),
        Analytics => ("analytics", "Analytics"),
        Settings => ("settings", "Settings"),
    }
}

dashboard_tabs! {
    /// Вкладки клиента (отправителя)
    ClientTab for View::Client => {
        Orders => ("orders", "Orders"),
        Tracking => ("tracking", "Tracking"),
        Communication => ("communication", "Communication"),
        Billing => ("billing", "Billing"),
    }
}

dashboard_tabs! {
    /// Вкладки получателя
    CustomerTab for View::Customer => {
        Tracking => ("tracking", "Live Tracking"),
        Orders => ("orders", "Order History"),
        Notifications => ("notifications", "Notifications"),
        Contact => ("contact", "Contact"),
        Preferences => ("preferences", "Preferences"),
    }
}

dashboard_tabs! {
    /// Вкладки водителя
    DriverTab for View::Driver => {
        Dashboard => ("dashboard", "Dashboard"),
        AvailableOrders => ("available-orders", "Available Orders"),
        ActiveDelivery => ("active-delivery", "Active Delivery"),
        History => ("history", "History"),
        Notifications => ("notifications", "Notifications"),
        Profile => ("profile", "Profile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_keys<T: DashboardTab>() {
        for (i, a) in T::ALL.iter().enumerate() {
            for b in &T::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "duplicate tab key in {:?}", T::VIEW);
            }
            assert_eq!(T::from_key(a.key()), Some(*a));
        }
    }

    #[test]
    fn test_tab_keys_unique_and_parseable() {
        assert_unique_keys::<AdminTab>();
        assert_unique_keys::<ClientTab>();
        assert_unique_keys::<CustomerTab>();
        assert_unique_keys::<DriverTab>();
    }

    #[test]
    fn test_default_is_first_declared() {
        assert_eq!(initial_tab::<AdminTab>(None), AdminTab::Overview);
        assert_eq!(initial_tab::<ClientTab>(None), ClientTab::Orders);
        assert_eq!(initial_tab::<CustomerTab>(None), CustomerTab::Tracking);
        assert_eq!(initial_tab::<DriverTab>(None), DriverTab::Dashboard);
    }

    #[test]
    fn test_intent_selects_tab() {
        let intent = NavigationIntent::new(View::Client).with_tab("billing");
        assert_eq!(initial_tab::<ClientTab>(Some(&intent)), ClientTab::Billing);
    }

    #[test]
    fn test_intent_for_other_view_is_ignored() {
        // "tracking" есть и у клиента, и у получателя
        let intent = NavigationIntent::new(View::Customer).with_tab("tracking");
        assert_eq!(initial_tab::<ClientTab>(Some(&intent)), ClientTab::Orders);
    }

    #[test]
    fn test_intent_without_tab_uses_default() {
        let intent = NavigationIntent::new(View::Driver).with_path("DD001");
        assert_eq!(initial_tab::<DriverTab>(Some(&intent)), DriverTab::Dashboard);
    }

    #[test]
    fn test_tab_keys_are_case_sensitive() {
        assert_eq!(ClientTab::from_key("Billing"), None);
        assert_eq!(DriverTab::from_key("available-orders"), Some(DriverTab::AvailableOrders));
    }
}
