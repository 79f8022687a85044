pub mod aggregate;
pub mod fixtures;

pub use aggregate::{next_order_id, ClientOrder, OrderDraft, OrderStage, OrderType, PackageSize};
pub use fixtures::recent_orders;
