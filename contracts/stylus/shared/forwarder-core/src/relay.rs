//! Invoice validation, dispatch and outcome propagation.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    dispatch::{DispatchError, Dispatcher},
    errors::ForwardError,
    invoice::CallInvoice,
    registry::WhitelistRegistry,
};

/// Lifecycle of one invoice.
///
/// `Pending -> Authorized | Rejected`, then `Authorized -> Completed | Reverted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Authorized,
    Rejected,
    Completed,
    Reverted,
}

impl InvoiceStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Reverted)
    }

    /// Terminal status reached by a finished relay.
    pub fn of<T>(outcome: &Result<T, ForwardError>) -> Self {
        match outcome {
            Ok(_) => Self::Completed,
            Err(ForwardError::NotAuthorized { .. }) => Self::Rejected,
            Err(ForwardError::TargetReverted { .. } | ForwardError::DispatchUnreachable { .. }) => {
                Self::Reverted
            }
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Reverted => "reverted",
        };
        f.write_str(name)
    }
}

/// Gate a pending invoice on its declared sender: `Authorized` or `Rejected`.
pub fn authorize<R>(registry: &R, invoice: &CallInvoice) -> InvoiceStatus
where
    R: WhitelistRegistry + ?Sized,
{
    if registry.is_authorized(invoice.sender) {
        InvoiceStatus::Authorized
    } else {
        InvoiceStatus::Rejected
    }
}

/// Relay one invoice and return the target's raw return data.
///
/// The payload is passed through unchanged. Nothing is dispatched unless the sender is
/// authorized and the target has code.
pub fn relay_invoice<R, D>(
    registry: &R,
    dispatcher: &mut D,
    invoice: CallInvoice,
) -> Result<Vec<u8>, ForwardError>
where
    R: WhitelistRegistry + ?Sized,
    D: Dispatcher + ?Sized,
{
    if authorize(registry, &invoice) == InvoiceStatus::Rejected {
        return Err(ForwardError::NotAuthorized {
            sender: invoice.sender,
        });
    }

    let target = invoice.target;
    if !dispatcher.has_code(target) {
        return Err(ForwardError::DispatchUnreachable { target });
    }

    dispatcher
        .dispatch(target, invoice.value, &invoice.payload)
        .map_err(|err| match err {
            DispatchError::Reverted(reason) => ForwardError::TargetReverted { target, reason },
            DispatchError::Unreachable => ForwardError::DispatchUnreachable { target },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryWhitelist;
    use alloc::{vec, vec::Vec};
    use alloy_primitives::{Address, U256};

    const OWNER: Address = Address::repeat_byte(0xAA);
    const USER: Address = Address::repeat_byte(0x11);
    const TARGET: Address = Address::repeat_byte(0xC0);

    /// Records every dispatch and answers with a canned result.
    struct RecordingDispatcher {
        code: Vec<Address>,
        answer: Result<Vec<u8>, DispatchError>,
        calls: Vec<(Address, U256, Vec<u8>)>,
    }

    impl RecordingDispatcher {
        fn answering(answer: Result<Vec<u8>, DispatchError>) -> Self {
            Self {
                code: vec![TARGET],
                answer,
                calls: Vec::new(),
            }
        }
    }

    impl Dispatcher for RecordingDispatcher {
        fn has_code(&self, target: Address) -> bool {
            self.code.contains(&target)
        }

        fn dispatch(
            &mut self,
            target: Address,
            value: U256,
            payload: &[u8],
        ) -> Result<Vec<u8>, DispatchError> {
            self.calls.push((target, value, payload.to_vec()));
            self.answer.clone()
        }
    }

    #[test]
    fn owner_relays_without_membership() {
        let registry = MemoryWhitelist::new(OWNER);
        let mut dispatcher = RecordingDispatcher::answering(Ok(vec![0x01]));
        let invoice = CallInvoice::new(OWNER, TARGET, vec![0xde, 0xad]);

        let out = relay_invoice(&registry, &mut dispatcher, invoice);
        assert_eq!(out, Ok(vec![0x01]));
        assert_eq!(dispatcher.calls, vec![(TARGET, U256::ZERO, vec![0xde, 0xad])]);
        assert_eq!(InvoiceStatus::of(&out), InvoiceStatus::Completed);
    }

    #[test]
    fn unknown_sender_is_rejected_before_dispatch() {
        let registry = MemoryWhitelist::new(OWNER);
        let mut dispatcher = RecordingDispatcher::answering(Ok(Vec::new()));
        let invoice = CallInvoice::new(USER, TARGET, vec![0x01]);

        let out = relay_invoice(&registry, &mut dispatcher, invoice);
        assert_eq!(out, Err(ForwardError::NotAuthorized { sender: USER }));
        assert!(dispatcher.calls.is_empty());
        assert_eq!(InvoiceStatus::of(&out), InvoiceStatus::Rejected);
    }

    #[test]
    fn whitelisted_sender_passes_value_and_payload_through() {
        let mut registry = MemoryWhitelist::new(OWNER);
        registry.add_whitelist(USER, OWNER).unwrap();
        let mut dispatcher = RecordingDispatcher::answering(Ok(Vec::new()));
        let invoice = CallInvoice::new(USER, TARGET, vec![1, 2, 3])
            .with_value(U256::from(7))
            .with_kind(U256::from(1));

        relay_invoice(&registry, &mut dispatcher, invoice).unwrap();
        assert_eq!(dispatcher.calls, vec![(TARGET, U256::from(7), vec![1, 2, 3])]);
    }

    #[test]
    fn revert_data_is_surfaced_verbatim() {
        let registry = MemoryWhitelist::new(OWNER);
        let reason = vec![0x08, 0xc3, 0x79, 0xa0, 0xff];
        let mut dispatcher =
            RecordingDispatcher::answering(Err(DispatchError::Reverted(reason.clone())));

        let out = relay_invoice(
            &registry,
            &mut dispatcher,
            CallInvoice::new(OWNER, TARGET, Vec::new()),
        );
        assert_eq!(
            out,
            Err(ForwardError::TargetReverted {
                target: TARGET,
                reason
            })
        );
        assert_eq!(InvoiceStatus::of(&out), InvoiceStatus::Reverted);
    }

    #[test]
    fn target_without_code_is_unreachable() {
        let registry = MemoryWhitelist::new(OWNER);
        let mut dispatcher = RecordingDispatcher::answering(Ok(Vec::new()));
        let nowhere = Address::repeat_byte(0x99);

        let out = relay_invoice(
            &registry,
            &mut dispatcher,
            CallInvoice::new(OWNER, nowhere, vec![0x01]),
        );
        assert_eq!(out, Err(ForwardError::DispatchUnreachable { target: nowhere }));
        assert!(dispatcher.calls.is_empty());
    }

    #[test]
    fn dispatcher_reported_unreachable_keeps_its_kind() {
        let registry = MemoryWhitelist::new(OWNER);
        let mut dispatcher = RecordingDispatcher::answering(Err(DispatchError::Unreachable));

        let out = relay_invoice(
            &registry,
            &mut dispatcher,
            CallInvoice::new(OWNER, TARGET, Vec::new()),
        );
        assert_eq!(out, Err(ForwardError::DispatchUnreachable { target: TARGET }));
    }

    #[test]
    fn gate_decides_between_authorized_and_rejected() {
        let mut registry = MemoryWhitelist::new(OWNER);
        let from_user = CallInvoice::new(USER, TARGET, Vec::new());
        assert_eq!(authorize(&registry, &from_user), InvoiceStatus::Rejected);
        assert_eq!(
            authorize(&registry, &CallInvoice::new(OWNER, TARGET, Vec::new())),
            InvoiceStatus::Authorized
        );

        registry.add_whitelist(USER, OWNER).unwrap();
        assert_eq!(authorize(&registry, &from_user), InvoiceStatus::Authorized);
    }

    #[test]
    fn terminal_states() {
        assert!(!InvoiceStatus::Pending.is_terminal());
        assert!(!InvoiceStatus::Authorized.is_terminal());
        assert!(InvoiceStatus::Rejected.is_terminal());
        assert!(InvoiceStatus::Completed.is_terminal());
        assert!(InvoiceStatus::Reverted.is_terminal());
    }
}
