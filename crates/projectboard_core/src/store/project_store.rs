//! Observable project collection and subscription registry.
//!
//! # Responsibility
//! - Own the ordered project sequence exclusively.
//! - Notify every subscriber synchronously after each committed mutation.
//!
//! # Invariants
//! - Subscribers receive snapshot copies, never the live sequence.
//! - Notification order is registration order.
//! - A move that changes nothing notifies nobody.

use crate::model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Callback invoked with a snapshot after every committed mutation.
pub type ProjectListener = Box<dyn Fn(&[Project]) + Send>;

/// Handle for sharing one store across an embedder.
///
/// The store itself is single-threaded by design; the mutex exists so that
/// hosts with real parallelism serialize access instead of observing a
/// partially updated collection.
pub type SharedProjectStore = Arc<Mutex<ProjectStore>>;

/// Opaque handle identifying one registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// In-memory store for one board session.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    // Keys are allocated monotonically, so iteration order over the map
    // matches registration order.
    listeners: BTreeMap<u64, ProjectListener>,
    next_subscription: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps this store in the shared handle embedders pass around.
    pub fn into_shared(self) -> SharedProjectStore {
        Arc::new(Mutex::new(self))
    }

    /// Registers one subscriber and returns its handle.
    ///
    /// Subscriptions are not de-duplicated: registering the same callback
    /// twice yields two handles and two notifications per mutation.
    pub fn subscribe(&mut self, listener: ProjectListener) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.insert(id, listener);
        debug!("event=subscriber_added subscription={id}");
        SubscriptionId(id)
    }

    /// Removes one subscriber. Returns whether the handle was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.listeners.remove(&id.0).is_some();
        debug!(
            "event=subscriber_removed subscription={} removed={removed}",
            id.0
        );
        removed
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns a snapshot copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Admits a new active project and notifies every subscriber.
    ///
    /// Admission rule checks are the caller's job; this only enforces the
    /// model invariants that no code path may bypass.
    ///
    /// # Errors
    /// - Returns the model admission error when the fields cannot form a
    ///   valid project. Nothing is appended and nobody is notified.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<ProjectId, ProjectValidationError> {
        let project = Project::new(title, description, people)?;
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added id={id} people={people} total={}",
            self.projects.len()
        );
        self.notify_listeners();
        Ok(id)
    }

    /// Moves one project to another bucket and notifies every subscriber.
    ///
    /// Unknown ids and moves to the current bucket are silent no-ops: the
    /// collection is untouched and no notification fires. Returns whether a
    /// move was committed.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                info!("event=project_moved id={id} status={new_status}");
                self.notify_listeners();
                true
            }
            Some(_) => {
                debug!("event=project_move_skipped id={id} reason=same_status");
                false
            }
            None => {
                debug!("event=project_move_skipped id={id} reason=not_found");
                false
            }
        }
    }

    fn notify_listeners(&self) {
        let snapshot = self.projects.clone();
        for listener in self.listeners.values() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectStore, SubscriptionId};
    use crate::model::project::{ProjectStatus, ProjectValidationError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_listener(counter: Arc<AtomicUsize>) -> super::ProjectListener {
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn add_appends_and_notifies_each_subscriber_once() {
        let mut store = ProjectStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        store.subscribe(counting_listener(Arc::clone(&calls)));

        let id = store.add_project("Build X", "A short desc", 3).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.last().unwrap().id, id);
        assert_eq!(snapshot.last().unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn invalid_admission_leaves_store_silent() {
        let mut store = ProjectStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        store.subscribe(counting_listener(Arc::clone(&calls)));

        let err = store.add_project("", "A short desc", 3).unwrap_err();
        assert_eq!(err, ProjectValidationError::EmptyTitle);
        assert!(store.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_stops_delivery_and_reports_unknown_handles() {
        let mut store = ProjectStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let subscription = store.subscribe(counting_listener(Arc::clone(&calls)));

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        assert!(!store.unsubscribe(SubscriptionId(99)));

        store.add_project("Build X", "A short desc", 3).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
