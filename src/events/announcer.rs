//! Live-region announcements
//!
//! Widgets announce state changes ("Copied", "3 results") for assistive
//! technology. Instead of a document-wide event name, the channel is an
//! explicit [`Announcer`] handed to widgets through context.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Error;

/// How urgently an announcement should interrupt the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

/// A message for a live region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

/// Handle returned by [`Announcer::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type AnnouncementCallback = Arc<dyn Fn(&Announcement) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, AnnouncementCallback)>,
    streams: Vec<UnboundedSender<Announcement>>,
}

/// Publish/subscribe channel for announcements
#[derive(Clone, Default)]
pub struct Announcer {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl std::fmt::Debug for Announcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcer")
            .field("subscribers", &"[Subscribers]")
            .finish()
    }
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Subscribers>, Error> {
        self.subscribers.lock().map_err(|e| {
            log::warn!("announcer subscribers poisoned: {e}");
            Error::Lock(format!("Failed to lock announcer subscribers: {e}"))
        })
    }

    /// Register a callback for every future announcement
    pub fn subscribe(
        &self,
        callback: impl Fn(&Announcement) + Send + Sync + 'static,
    ) -> Result<SubscriptionId, Error> {
        let mut subscribers = self.lock()?;
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.callbacks.push((id, Arc::new(callback)));
        Ok(id)
    }

    /// Remove a callback; `false` if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, Error> {
        let mut subscribers = self.lock()?;
        let before = subscribers.callbacks.len();
        subscribers.callbacks.retain(|(existing, _)| *existing != id);
        Ok(subscribers.callbacks.len() != before)
    }

    /// Receive future announcements as a stream.
    ///
    /// Dropping the receiver unsubscribes it on the next announcement.
    pub fn stream(&self) -> Result<UnboundedReceiver<Announcement>, Error> {
        let (sender, receiver) = mpsc::unbounded();
        self.lock()?.streams.push(sender);
        Ok(receiver)
    }

    /// Deliver a message to every subscriber; returns how many received it
    pub fn announce(
        &self,
        message: impl Into<String>,
        politeness: Politeness,
    ) -> Result<usize, Error> {
        let announcement = Announcement {
            message: message.into(),
            politeness,
        };

        // Callbacks run without the lock held so they may announce in turn
        let (callbacks, streamed) = {
            let mut subscribers = self.lock()?;
            subscribers
                .streams
                .retain(|sender| sender.unbounded_send(announcement.clone()).is_ok());
            let callbacks: Vec<AnnouncementCallback> = subscribers
                .callbacks
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect();
            (callbacks, subscribers.streams.len())
        };

        for callback in &callbacks {
            callback(&announcement);
        }
        log::trace!(
            "announced {:?} to {} subscribers",
            announcement.message,
            callbacks.len() + streamed
        );
        Ok(callbacks.len() + streamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_callbacks_receive_announcements() {
        let announcer = Announcer::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let id = announcer
            .subscribe(move |announcement| {
                assert_eq!(announcement.message, "Saved");
                count_clone.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert_eq!(announcer.announce("Saved", Politeness::Polite).unwrap(), 1);
        assert!(announcer.unsubscribe(id).unwrap());
        assert!(!announcer.unsubscribe(id).unwrap());
        assert_eq!(announcer.announce("Saved", Politeness::Polite).unwrap(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stream_subscription() {
        let announcer = Announcer::new();
        let mut stream = announcer.stream().unwrap();

        announcer.announce("one", Politeness::Polite).unwrap();
        announcer.announce("two", Politeness::Assertive).unwrap();

        let first = futures::executor::block_on(stream.next()).unwrap();
        let second = futures::executor::block_on(stream.next()).unwrap();
        assert_eq!(first.message, "one");
        assert_eq!(second.politeness, Politeness::Assertive);
    }

    #[test]
    fn test_dropped_stream_is_pruned() {
        let announcer = Announcer::new();
        drop(announcer.stream().unwrap());
        assert_eq!(announcer.announce("gone", Politeness::Polite).unwrap(), 0);
    }

    #[test]
    fn test_callback_may_reannounce() {
        let announcer = Announcer::new();
        let inner = announcer.clone();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        announcer
            .subscribe(move |announcement| {
                count_clone.fetch_add(1, Ordering::SeqCst);
                if announcement.message == "first" {
                    inner.announce("second", Politeness::Polite).unwrap();
                }
            })
            .unwrap();

        announcer.announce("first", Politeness::Polite).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
