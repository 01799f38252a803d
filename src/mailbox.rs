use tokio::{
    select,
    sync::mpsc::{Receiver, Sender, channel, error::TryRecvError},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{Config, Dispatcher, Envelope, Payload, Result};

/// Create a connected poster/mailbox pair sized by `config`.
///
/// The mailbox stops running when `cancel_token` fires. Use
/// [`AppContext::mailbox`](crate::AppContext::mailbox) to get a pair tied to the
/// application's shutdown.
pub fn mailbox<P: Payload + Send>(
    config: &Config,
    cancel_token: CancellationToken,
) -> (Poster<P>, Mailbox<P>) {
    let (tx, rx) = channel(config.mailbox_capacity.max(1));
    let poster = Poster { sender: tx };
    let mailbox = Mailbox {
        receiver: rx,
        max_per_drain: config.max_signals_per_drain.max(1),
        cancel_token,
    };
    (poster, mailbox)
}

/// Sending half of a mailbox. Cheap to clone and safe to move to other threads.
#[derive(Debug)]
pub struct Poster<P: Payload> {
    sender: Sender<Envelope<P>>,
}

impl<P: Payload> Clone for Poster<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<P: Payload + Send> Poster<P> {
    /// Post without waiting. Fails with [`Error::MailboxFull`](crate::Error::MailboxFull)
    /// when the mailbox is at capacity.
    pub fn post(&self, envelope: Envelope<P>) -> Result<()> {
        self.sender.try_send(envelope)?;
        Ok(())
    }

    /// Post, waiting for capacity.
    pub async fn post_wait(&self, envelope: Envelope<P>) -> Result<()> {
        self.sender.send(envelope).await?;
        Ok(())
    }

    /// Post from outside an async context, blocking the current thread until
    /// there is capacity. Must not be called from within a runtime.
    pub fn blocking_post(&self, envelope: Envelope<P>) -> Result<()> {
        self.sender.blocking_send(envelope)?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Receiving half of a mailbox. Lives on the thread that owns the participant.
#[derive(Debug)]
pub struct Mailbox<P: Payload> {
    receiver: Receiver<Envelope<P>>,
    max_per_drain: usize,
    cancel_token: CancellationToken,
}

impl<P: Payload> Mailbox<P> {
    /// Dispatch envelopes that are already waiting, oldest first, up to the
    /// configured per-drain limit. Returns how many were dispatched.
    ///
    /// Meant to be called from the owner's frame or idle callback.
    pub fn drain<D>(&mut self, target: &mut D) -> usize
    where
        D: Dispatcher<Payload = P>,
    {
        let mut count = 0;
        while count < self.max_per_drain {
            match self.receiver.try_recv() {
                Ok(envelope) => {
                    target.send_signal(envelope);
                    count += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    trace!(participant = %target.id(), "all posters dropped");
                    break;
                }
            }
        }
        count
    }

    /// Dispatch envelopes as they arrive until every poster is dropped or the
    /// cancel token fires. Once cancelled, envelopes still queued are left in
    /// the mailbox undelivered.
    ///
    /// The future is not `Send`; run it on the owning thread, for example with
    /// `LocalSet` or a current-thread runtime.
    pub async fn run<D>(&mut self, target: &mut D) -> Result<()>
    where
        D: Dispatcher<Payload = P>,
    {
        loop {
            select! {
                biased;
                _ = self.cancel_token.cancelled() => {
                    debug!(participant = %target.id(), "mailbox cancelled");
                    break;
                }
                envelope = self.receiver.recv() => match envelope {
                    Some(envelope) => target.send_signal(envelope),
                    None => break,
                },
            }
        }
        Ok(())
    }

    /// Stop accepting new envelopes. Already queued ones can still be drained.
    pub fn close(&mut self) {
        self.receiver.close();
    }

    /// Number of envelopes waiting.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Participant, ParticipantId, Registry};

    struct Sink {
        id: ParticipantId,
        receivers: Registry<Sink>,
        seen: Vec<String>,
    }

    impl Sink {
        fn new() -> Self {
            let mut sink = Sink {
                id: ParticipantId::new("sink"),
                receivers: Registry::new(),
                seen: Vec::new(),
            };
            sink.on("tick", |s, e| s.seen.push(e.source().unwrap().to_string()));
            sink
        }
    }

    impl Participant for Sink {
        fn id(&self) -> &ParticipantId {
            &self.id
        }
    }

    impl Dispatcher for Sink {
        type Payload = ();

        fn registry(&self) -> Option<&Registry<Self>> {
            Some(&self.receivers)
        }

        fn registry_mut(&mut self) -> Option<&mut Registry<Self>> {
            Some(&mut self.receivers)
        }
    }

    fn tick(from: &str) -> Envelope {
        Envelope::generic(ParticipantId::new(from), "tick")
    }

    #[test]
    fn test_drain_respects_limit_and_order() {
        let config = Config::default().with_max_signals_per_drain(2);
        let (poster, mut mailbox) = mailbox(&config, CancellationToken::new());
        for name in ["a", "b", "c"] {
            poster.post(tick(name)).unwrap();
        }

        let mut sink = Sink::new();
        assert_eq!(mailbox.drain(&mut sink), 2);
        assert_eq!(sink.seen, ["a", "b"]);
        assert_eq!(mailbox.drain(&mut sink), 1);
        assert_eq!(mailbox.drain(&mut sink), 0);
        assert_eq!(sink.seen, ["a", "b", "c"]);
    }

    #[test]
    fn test_post_to_full_mailbox() {
        let config = Config::default().with_mailbox_capacity(1);
        let (poster, _mailbox) = mailbox::<()>(&config, CancellationToken::new());
        poster.post(tick("a")).unwrap();
        assert!(matches!(poster.post(tick("b")), Err(Error::MailboxFull)));
    }

    #[test]
    fn test_post_to_closed_mailbox() {
        let (poster, mut mailbox) = mailbox::<()>(&Config::default(), CancellationToken::new());
        mailbox.close();
        assert!(matches!(poster.post(tick("a")), Err(Error::MailboxClosed(_))));
    }

    #[test]
    fn test_posting_from_another_thread() {
        let (poster, mut mailbox) = mailbox(&Config::default(), CancellationToken::new());
        let worker = std::thread::spawn(move || {
            for i in 0..5 {
                poster.blocking_post(tick(&format!("worker-{i}"))).unwrap();
            }
        });
        worker.join().unwrap();

        let mut sink = Sink::new();
        assert_eq!(mailbox.drain(&mut sink), 5);
        assert_eq!(sink.seen[4], "worker-4");
    }

    #[tokio::test]
    async fn test_run_until_posters_dropped() {
        let (poster, mut mailbox) = mailbox(&Config::default(), CancellationToken::new());
        poster.post_wait(tick("a")).await.unwrap();
        poster.post_wait(tick("b")).await.unwrap();
        drop(poster);

        let mut sink = Sink::new();
        mailbox.run(&mut sink).await.unwrap();
        assert_eq!(sink.seen, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let token = CancellationToken::new();
        let (poster, mut mailbox) = mailbox::<()>(&Config::default(), token.clone());
        token.cancel();

        let mut sink = Sink::new();
        mailbox.run(&mut sink).await.unwrap();
        assert!(!poster.is_closed());
    }

    #[tokio::test]
    async fn test_run_skips_queued_envelopes_after_cancel() {
        for _ in 0..50 {
            let token = CancellationToken::new();
            let (poster, mut mailbox) = mailbox(&Config::default(), token.clone());
            for i in 0..10 {
                poster.post(tick(&format!("t-{i}"))).unwrap();
            }
            token.cancel();

            let mut sink = Sink::new();
            mailbox.run(&mut sink).await.unwrap();
            assert!(sink.seen.is_empty());
            assert_eq!(mailbox.len(), 10);
        }
    }
}
