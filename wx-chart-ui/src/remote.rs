//! Runs gateway operations into `Remote` slots.
//!
//! Every panel follows the same steps: take a ticket, spawn the request,
//! resolve the slot with the outcome, and notify the caller on success.

use dioxus::prelude::*;
use log::info;
use wx_data::{Remote, Resolution};
use wx_gateway::{GatewayClient, Operation};

/// A component-local slot, initially `Idle`.
pub fn use_remote<T: 'static>() -> Signal<Remote<T>> {
    use_signal(Remote::new)
}

/// Start `op` and store its outcome in `slot`.
///
/// `on_success` runs only if this request is still the latest one for the
/// slot when it finishes.
pub fn launch<O, F>(mut slot: Signal<Remote<O::Output>>, gateway: GatewayClient, op: O, on_success: F)
where
    O: Operation + 'static,
    O::Output: 'static,
    F: FnOnce(&O::Output) + 'static,
{
    let ticket = slot.write().begin();
    spawn(async move {
        let outcome = gateway.run(&op).await;
        let resolution = slot.write().resolve_with(ticket, outcome, on_success);
        if resolution == Resolution::Stale {
            info!("{}: newer request pending, response dropped", op.name());
        }
    });
}
