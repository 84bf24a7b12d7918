use crate::core::error::TinderError;
use crate::core::ledger::SwipeLedger;
use crate::core::matcher::MatchResolver;
use crate::models::{Identity, Message};

/// Append-only message log that only accepts mutual matches
#[derive(Debug, Default)]
pub struct MessagingGate {
    log: Vec<Message>,
}

impl MessagingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `body` from `sender` to `recipient`
    ///
    /// Fails with `NotMutualMatch` unless the two are mutually matched at
    /// call time.
    pub fn send(
        &mut self,
        ledger: &SwipeLedger,
        sender: &Identity,
        recipient: &Identity,
        body: String,
    ) -> Result<&Message, TinderError> {
        if !MatchResolver::new(ledger).is_match(sender, recipient) {
            return Err(TinderError::NotMutualMatch);
        }

        let message = Message {
            id: uuid::Uuid::new_v4(),
            sender: sender.clone(),
            recipient: recipient.clone(),
            body,
            sent_at: chrono::Utc::now(),
        };

        tracing::info!(
            message_id = %message.id,
            sender = %message.sender,
            recipient = %message.recipient,
            "Message delivered"
        );

        self.log.push(message);
        Ok(&self.log[self.log.len() - 1])
    }

    /// Messages exchanged between `a` and `b` in either direction, oldest first
    pub fn conversation<'s>(
        &'s self,
        a: &'s Identity,
        b: &'s Identity,
    ) -> impl Iterator<Item = &'s Message> + 's {
        self.log.iter().filter(move |m| {
            (&m.sender == a && &m.recipient == b) || (&m.sender == b && &m.recipient == a)
        })
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
