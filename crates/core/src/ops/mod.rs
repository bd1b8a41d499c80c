//! Stateless request/shape functions over a [`CloudProvider`](crate::cloud_provider::CloudProvider).
//! Each validates its local inputs, then issues exactly one remote call
//! (plus the best-effort tag call hidden behind launch).

mod launch;
mod lifecycle;
mod list;

#[cfg(test)]
pub(crate) mod fake;

pub use launch::launch_instance;
pub use lifecycle::{
    TerminateOutcome, reboot_instances, start_instances, stop_instances, terminate_instances,
};
pub use list::{filter_instances_by_state, list_instances};
