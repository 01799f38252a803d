use tracing::trace;

use crate::{Envelope, Operation, OperationName, Origin, Participant, Payload};

/// Build an envelope for a signal raised by `sender`.
///
/// The origin follows the sender's [`Role`](crate::Role): models produce
/// [`Origin::Model`], controllers [`Origin::Controller`], views [`Origin::View`],
/// and everything else [`Origin::Generic`].
///
/// A missing sender or a blank operation name yields [`Envelope::null`]. No error
/// is raised; the envelope simply reports `is_valid() == false`.
pub fn create_event<P, S>(sender: Option<&S>, operation: impl Operation) -> Envelope<P>
where
    P: Payload,
    S: Participant + ?Sized,
{
    let operation = OperationName::new(operation);
    match sender {
        Some(sender) if !operation.is_blank() => {
            Envelope::new(Origin::from(sender.role()), sender.id().clone(), operation)
        }
        Some(sender) => {
            trace!(participant = %sender.id(), "blank operation name, using null envelope");
            Envelope::null()
        }
        None => {
            trace!(operation = %operation, "missing sender, using null envelope");
            Envelope::null()
        }
    }
}

/// Same as [`create_event`], with a payload attached to valid envelopes.
pub fn create_event_with_payload<P, S>(
    sender: Option<&S>,
    operation: impl Operation,
    payload: P,
) -> Envelope<P>
where
    P: Payload,
    S: Participant + ?Sized,
{
    create_event(sender, operation).with_payload(payload)
}
