use once_cell::sync::Lazy;

use super::aggregate::{ClientOrder, OrderStage};

static RECENT: Lazy<Vec<ClientOrder>> = Lazy::new(|| {
    use OrderStage::*;
    [
        ("#4392", InTransit, "123 Main St, New York", "Today, 2:30 PM"),
        ("#4391", Processing, "456 Park Ave, Boston", "Tomorrow, 10:00 AM"),
        ("#4390", Delivered, "789 Oak Dr, Chicago", "Completed"),
        ("#4389", Delivered, "321 Pine St, Seattle", "Completed"),
        ("#4388", Delivered, "654 Maple Rd, Denver", "Completed"),
    ]
    .into_iter()
    .map(|(order_id, stage, destination, eta)| ClientOrder {
        order_id: order_id.into(),
        stage,
        destination: destination.into(),
        eta: eta.into(),
    })
    .collect()
});

pub fn recent_orders() -> &'static [ClientOrder] {
    &RECENT
}
