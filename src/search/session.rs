//! Async driver for a [`SearchWidget`]
//!
//! Events arrive on a channel; the debounce deadline is a tokio timer. The
//! parsed page is not `Send`, so the session runs on the task that owns it
//! (await it directly or `tokio::join!` it) instead of being spawned.

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use super::render::ResultsContainer;
use super::widget::{ClickAction, Key, SearchWidget};

/// Input from the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Input(String),
    Submit(String),
    Key(Key),
    DocumentClick { inside_search: bool },
    ResultClick(usize),
}

/// Output for the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The dropdown changed
    Container(ResultsContainer),
    /// A result was activated
    Action(ClickAction),
}

pub struct SearchSession {
    widget: SearchWidget,
    events: mpsc::Receiver<WidgetEvent>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
    published: ResultsContainer,
}

impl SearchSession {
    #[must_use]
    pub fn new(
        widget: SearchWidget,
        events: mpsc::Receiver<WidgetEvent>,
        updates: mpsc::UnboundedSender<SessionUpdate>,
    ) -> Self {
        let published = widget.container().clone();
        Self {
            widget,
            events,
            updates,
            published,
        }
    }

    /// Process events until the event channel closes, then hand the widget
    /// back.
    pub async fn run(mut self) -> SearchWidget {
        tracing::debug!("Search session started");

        loop {
            let deadline = self.widget.next_deadline();
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if self.widget.poll(Instant::now()) {
                        tracing::debug!(query = self.widget.query(), "Debounced search ran");
                    }
                }
            }
            self.publish_container();
        }

        tracing::debug!("Search session ended");
        self.widget
    }

    fn handle(&mut self, event: WidgetEvent) {
        let action = match event {
            WidgetEvent::Input(value) => {
                self.widget.input(&value, Instant::now());
                ClickAction::None
            }
            WidgetEvent::Submit(value) => {
                self.widget.submit(&value);
                ClickAction::None
            }
            WidgetEvent::Key(key) => self.widget.key(key),
            WidgetEvent::DocumentClick { inside_search } => {
                self.widget.document_click(inside_search);
                ClickAction::None
            }
            WidgetEvent::ResultClick(index) => self.widget.click(index),
        };

        if action != ClickAction::None {
            self.send(SessionUpdate::Action(action));
        }
    }

    fn publish_container(&mut self) {
        if self.widget.container() != &self.published {
            self.published = self.widget.container().clone();
            self.send(SessionUpdate::Container(self.published.clone()));
        }
    }

    fn send(&self, update: SessionUpdate) {
        if self.updates.send(update).is_err() {
            tracing::debug!("Update receiver dropped");
        }
    }
}
