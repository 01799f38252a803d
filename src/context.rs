use std::collections::{HashMap, HashSet};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{Config, Error, Mailbox, ParticipantId, Payload, Poster, Result, mailbox};

/// Explicitly owned application state shared by participants.
///
/// Built once by the application entry point and passed to whatever needs it;
/// there are no process-wide singletons. It owns:
/// - the [`Config`],
/// - the set of participant names in use (names are unique per context),
/// - the string table for the active locale,
/// - a cancellation token that stops every mailbox created through it.
///
/// Call [`shutdown`](AppContext::shutdown) on teardown. Afterwards no new
/// participants can be named and running mailboxes return.
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    names: HashSet<ParticipantId>,
    strings: HashMap<String, String>,
    cancel_token: CancellationToken,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!(locale = %config.locale, "application context created");
        Ok(Self {
            config,
            names: HashSet::new(),
            strings: HashMap::new(),
            cancel_token: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reserve a unique participant id.
    pub fn participant_id(&mut self, name: &str) -> Result<ParticipantId> {
        if self.is_shut_down() {
            return Err(Error::ContextClosed);
        }
        if name.trim().is_empty() {
            return Err(Error::BlankParticipantName);
        }
        let id = ParticipantId::new(name);
        if self.names.contains(&id) {
            return Err(Error::ParticipantAlreadyExists(id));
        }
        self.names.insert(id.clone());
        debug!(participant = %id, "participant named");
        Ok(id)
    }

    /// Give a name back once its participant is dropped, so it can be reused.
    pub fn release(&mut self, id: &ParticipantId) -> bool {
        self.names.remove(id)
    }

    /// Replace the string table, switching to `locale`. A blank locale is
    /// rejected and leaves the current table in place.
    ///
    /// Loading tables from disk is up to the application; the context only holds
    /// the one in use.
    pub fn set_strings<I, K, V>(&mut self, locale: &str, strings: I) -> Result
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if locale.trim().is_empty() {
            return Err(Error::InvalidConfig("locale must not be blank".into()));
        }
        self.strings = strings
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.config.locale = locale.to_string();
        debug!(locale, entries = self.strings.len(), "string table replaced");
        Ok(())
    }

    /// Look up a localized string, falling back to the key itself.
    pub fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// Create a mailbox that stops when this context shuts down.
    pub fn mailbox<P: Payload + Send>(&self) -> (Poster<P>, Mailbox<P>) {
        mailbox(&self.config, self.cancel_token.child_token())
    }

    /// Token cancelled by [`shutdown`](AppContext::shutdown), for the
    /// application's own background work.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn shutdown(&mut self) {
        if self.is_shut_down() {
            return;
        }
        self.cancel_token.cancel();
        self.names.clear();
        info!("application context shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AppContext {
        AppContext::new(Config::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = AppContext::new(Config::default().with_max_signals_per_drain(0));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_participant_names_are_unique() {
        let mut ctx = context();
        let board = ctx.participant_id("board").unwrap();
        assert_eq!(board.name(), "board");
        assert!(matches!(
            ctx.participant_id("board"),
            Err(Error::ParticipantAlreadyExists(id)) if id == board
        ));
        assert!(matches!(ctx.participant_id(" "), Err(Error::BlankParticipantName)));

        assert!(ctx.release(&board));
        assert!(ctx.participant_id("board").is_ok());
    }

    #[test]
    fn test_no_names_after_shutdown() {
        let mut ctx = context();
        ctx.participant_id("board").unwrap();
        ctx.shutdown();
        assert!(ctx.is_shut_down());
        assert!(matches!(ctx.participant_id("palette"), Err(Error::ContextClosed)));
    }

    #[test]
    fn test_localize_falls_back_to_key() {
        let mut ctx = context();
        assert_eq!(ctx.locale(), "en");
        ctx.set_strings("de", [("menu.file", "Datei")]).unwrap();
        assert_eq!(ctx.locale(), "de");
        assert_eq!(ctx.localize("menu.file"), "Datei");
        assert_eq!(ctx.localize("menu.edit"), "menu.edit");
    }

    #[test]
    fn test_blank_locale_is_rejected() {
        let mut ctx = context();
        ctx.set_strings("de", [("menu.file", "Datei")]).unwrap();
        assert!(matches!(
            ctx.set_strings("  ", [("menu.file", "File")]),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(ctx.locale(), "de");
        assert_eq!(ctx.localize("menu.file"), "Datei");
        assert!(ctx.config().validate().is_ok());
    }

    #[test]
    fn test_shutdown_cancels_mailboxes() {
        let mut ctx = context();
        let (_poster, _mailbox) = ctx.mailbox::<()>();
        let token = ctx.cancel_token();
        assert!(!token.is_cancelled());
        ctx.shutdown();
        assert!(token.is_cancelled());
    }
}
