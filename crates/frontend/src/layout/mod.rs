pub mod dashboard;
pub mod footer;
pub mod header;
pub mod navigation_bridge;

pub use navigation_bridge::{
    use_navigate_to_tab, use_navigate_with_intent, use_navigate_with_intent_key,
    use_navigation_bridge, NavigationBridge,
};
