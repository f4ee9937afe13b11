use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use super::errors::{RosterError, RosterResult};
use super::events::RosterEvent;
use super::messages::{self, RosterAction};
use super::policy::{CoordinatorConfig, RefreshPolicy};
use super::state::RosterState;
use crate::domain::group::GroupName;
use crate::domain::person::{Person, PersonName, Team};
use crate::domain::repositories::{RosterRepository, StorageError};

/// Drives the roster view of a single group
///
/// The coordinator owns the view state (selected team, pending input,
/// loading flag, roster) and mediates every change through the injected
/// repository. Storage is the authority: after each successful mutation
/// the roster is fetched again instead of being patched locally.
///
/// Actions never return errors. Failures become [`RosterEvent::Notice`]
/// events for subscribers, and storage failures are also logged.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use pickup_roster::domain::group::GroupName;
/// use pickup_roster::domain::person::Team;
/// use pickup_roster::infrastructure::repositories::InMemoryRosterRepository;
/// use pickup_roster::roster::RosterCoordinator;
///
/// # tokio_test_block(async {
/// let group = GroupName::new("Thursday futsal").unwrap();
/// let roster = RosterCoordinator::new(group, Arc::new(InMemoryRosterRepository::new()));
///
/// roster.mount().await;
/// roster.add_person("Ana").await;
/// roster.switch_team(Team::TeamB).await;
///
/// assert!(roster.snapshot().roster.is_empty());
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
pub struct RosterCoordinator {
    group: GroupName,
    repository: Arc<dyn RosterRepository>,
    config: CoordinatorConfig,
    inner: Mutex<Inner>,
    events: broadcast::Sender<RosterEvent>,
}

struct Inner {
    view: RosterState,
    /// Ticket of the most recently started refresh
    issued: u64,
    /// Ticket of the most recently applied refresh
    applied: u64,
    /// A confirmed group removal is waiting on storage
    removing: bool,
    closed: bool,
}

enum Settled {
    Applied { people: usize },
    Discarded,
    Failed(StorageError),
    FailedSuperseded(StorageError),
}

impl RosterCoordinator {
    /// Creates a coordinator for `group` with the default configuration
    pub fn new(group: GroupName, repository: Arc<dyn RosterRepository>) -> Self {
        Self::with_config(group, repository, CoordinatorConfig::default())
    }

    pub fn with_config(
        group: GroupName,
        repository: Arc<dyn RosterRepository>,
        config: CoordinatorConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        Self {
            group,
            repository,
            config,
            inner: Mutex::new(Inner {
                view: RosterState::default(),
                issued: 0,
                applied: 0,
                removing: false,
                closed: false,
            }),
            events,
        }
    }

    /// Returns the group this coordinator is bound to
    pub fn group(&self) -> &GroupName {
        &self.group
    }

    /// Subscribes to state changes, notices and navigation intents
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events.subscribe()
    }

    /// Returns a copy of the current view state
    pub fn snapshot(&self) -> RosterState {
        self.lock().view.clone()
    }

    /// Returns true once the group has been removed
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Loads the roster for the initially selected team
    pub async fn mount(&self) {
        info!(group = %self.group, "roster view mounted");
        self.refresh_roster().await;
    }

    /// Selects a team and reloads the roster for it
    ///
    /// Selecting the team that is already selected still reloads.
    pub async fn switch_team(&self, team: Team) {
        if self.ignore_if_closed("switch team") {
            return;
        }

        debug!(group = %self.group, team = %team, "switching team");
        self.update(|view| view.selected_team = team);
        self.refresh_roster().await;
    }

    /// Replaces the contents of the add-person input
    pub fn set_pending_name(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|view| view.pending_name = text);
    }

    /// Adds whoever is named in the add-person input
    pub async fn submit_pending_name(&self) {
        let name = self.lock().view.pending_name.clone();
        self.add_person(&name).await;
    }

    /// Adds a person to the selected team
    ///
    /// On success the input is cleared and released before the roster is
    /// reloaded. On failure the input is left as it was.
    pub async fn add_person(&self, name: &str) {
        if self.ignore_if_closed("add person") {
            return;
        }

        let team = self.lock().view.selected_team;
        match self.try_add_person(name, team).await {
            Ok(()) => {
                self.update(|view| view.pending_name.clear());
                self.emit(RosterEvent::InputFocusReleased);
                self.refresh_roster().await;
            }
            Err(err) => self.report(RosterAction::AddPerson, &err),
        }
    }

    async fn try_add_person(&self, name: &str, team: Team) -> RosterResult<()> {
        let person = Person::new(name, team)?;
        self.repository.add_person(&self.group, &person).await?;

        info!(group = %self.group, team = %team, person = %person.name, "person added");
        Ok(())
    }

    /// Removes a person from the group and reloads the roster
    ///
    /// The roster is never edited locally; on failure it stays as it was.
    pub async fn remove_person(&self, name: &PersonName) {
        if self.ignore_if_closed("remove person") {
            return;
        }

        match self.repository.remove_person(&self.group, name).await {
            Ok(()) => {
                info!(group = %self.group, person = %name, "person removed");
                self.refresh_roster().await;
            }
            Err(err) => self.report(RosterAction::RemovePerson, &RosterError::from(err)),
        }
    }

    /// Asks the user to confirm removal of the whole group
    ///
    /// Publishes a confirmation prompt and returns the pending request;
    /// nothing is removed until [`GroupRemovalRequest::confirm`] runs.
    /// Once the group is gone no prompt is published and confirming does
    /// nothing.
    pub fn request_group_removal(&self) -> GroupRemovalRequest<'_> {
        if !self.ignore_if_closed("request group removal") {
            self.emit(RosterEvent::ConfirmationRequested(
                messages::group_removal_prompt(),
            ));
        }
        GroupRemovalRequest { coordinator: self }
    }

    async fn remove_group(&self) {
        if self.ignore_if_closed("remove group") {
            return;
        }
        {
            let mut inner = self.lock();
            if inner.removing {
                warn!(group = %self.group, "group removal already in progress");
                return;
            }
            inner.removing = true;
        }

        let result = self.repository.remove_group(&self.group).await;

        let first_close = {
            let mut inner = self.lock();
            inner.removing = false;
            result.is_ok() && !std::mem::replace(&mut inner.closed, true)
        };

        match result {
            Ok(()) if first_close => {
                info!(group = %self.group, "group removed");
                self.emit(RosterEvent::NavigateToGroups);
            }
            Ok(()) => debug!(group = %self.group, "group already removed"),
            Err(err) => self.report(RosterAction::RemoveGroup, &RosterError::from(err)),
        }
    }

    async fn refresh_roster(&self) {
        let (ticket, team) = {
            let mut inner = self.lock();
            if inner.closed {
                return;
            }
            inner.issued += 1;
            inner.view.is_loading = true;
            (inner.issued, inner.view.selected_team)
        };
        self.publish();

        debug!(group = %self.group, team = %team, ticket, "refreshing roster");
        let result = self
            .repository
            .list_by_group_and_team(&self.group, team)
            .await;

        let settled = {
            let mut inner = self.lock();
            self.settle(&mut inner, ticket, result)
        };

        match settled {
            Settled::Applied { people } => {
                debug!(group = %self.group, team = %team, ticket, people, "roster applied");
                self.publish();
            }
            Settled::Discarded => {
                debug!(group = %self.group, team = %team, ticket, "stale roster discarded");
            }
            Settled::Failed(err) => {
                self.publish();
                self.report(RosterAction::LoadRoster, &RosterError::from(err));
            }
            Settled::FailedSuperseded(err) => {
                warn!(
                    group = %self.group,
                    team = %team,
                    ticket,
                    error = %err,
                    "superseded roster refresh failed"
                );
            }
        }
    }

    fn settle(
        &self,
        inner: &mut Inner,
        ticket: u64,
        result: Result<Vec<Person>, StorageError>,
    ) -> Settled {
        match self.config.refresh_policy {
            RefreshPolicy::LastWriteWins => {
                inner.view.is_loading = false;
                match result {
                    Ok(people) => {
                        inner.applied = ticket;
                        inner.view.roster = people;
                        Settled::Applied {
                            people: inner.view.roster.len(),
                        }
                    }
                    Err(err) => Settled::Failed(err),
                }
            }
            RefreshPolicy::Sequenced => {
                if ticket < inner.applied {
                    return match result {
                        Ok(_) => Settled::Discarded,
                        Err(err) => Settled::FailedSuperseded(err),
                    };
                }

                let latest = ticket == inner.issued;
                inner.applied = ticket;
                if latest {
                    inner.view.is_loading = false;
                }

                match result {
                    Ok(people) => {
                        inner.view.roster = people;
                        Settled::Applied {
                            people: inner.view.roster.len(),
                        }
                    }
                    Err(err) if latest => Settled::Failed(err),
                    Err(err) => Settled::FailedSuperseded(err),
                }
            }
        }
    }

    fn report(&self, action: RosterAction, err: &RosterError) {
        match err {
            RosterError::Storage(inner) => {
                error!(group = %self.group, action = %action, error = %inner, "storage failure");
            }
            RosterError::Domain(inner) => {
                info!(group = %self.group, action = %action, reason = %inner, "rejected by storage");
            }
            RosterError::Validation(inner) => {
                debug!(group = %self.group, action = %action, reason = %inner, "invalid input");
            }
        }
        self.emit(RosterEvent::Notice(action.notice(err)));
    }

    fn ignore_if_closed(&self, action: &str) -> bool {
        let closed = self.lock().closed;
        if closed {
            warn!(group = %self.group, action, "ignoring action on removed group");
        }
        closed
    }

    fn update(&self, apply: impl FnOnce(&mut RosterState)) {
        apply(&mut self.lock().view);
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.emit(RosterEvent::StateChanged(snapshot));
    }

    fn emit(&self, event: RosterEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A group removal waiting for the user's answer
#[must_use = "a group removal request must be confirmed or cancelled"]
pub struct GroupRemovalRequest<'a> {
    coordinator: &'a RosterCoordinator,
}

impl GroupRemovalRequest<'_> {
    /// Leaves the group untouched
    pub fn cancel(self) {
        debug!(group = %self.coordinator.group, "group removal cancelled");
    }

    /// Removes the group; on success a navigation intent is published
    pub async fn confirm(self) {
        self.coordinator.remove_group().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryRosterRepository;

    fn coordinator() -> RosterCoordinator {
        RosterCoordinator::new(
            GroupName::new("G").unwrap(),
            Arc::new(InMemoryRosterRepository::new()),
        )
    }

    #[test]
    fn starts_on_team_a_with_empty_input() {
        let roster = coordinator();
        let state = roster.snapshot();

        assert_eq!(state.selected_team, Team::TeamA);
        assert!(state.pending_name.is_empty());
        assert!(!roster.is_closed());
    }

    #[test]
    fn pending_name_updates_publish_state() {
        let roster = coordinator();
        let mut events = roster.subscribe();

        roster.set_pending_name("An");

        match events.try_recv().unwrap() {
            RosterEvent::StateChanged(state) => assert_eq!(state.pending_name, "An"),
            other => panic!("Expected StateChanged, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn mount_loads_and_clears_loading() {
        let roster = coordinator();
        roster.mount().await;

        let state = roster.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.empty_message(), Some(messages::EMPTY_TEAM));
    }

    #[tokio::test]
    async fn submit_pending_name_adds_and_clears_input() {
        let roster = coordinator();
        roster.mount().await;

        roster.set_pending_name(" Ana ");
        roster.submit_pending_name().await;

        let state = roster.snapshot();
        assert!(state.pending_name.is_empty());
        assert!(state.contains("Ana"));
    }

    #[test]
    fn sequenced_settle_discards_older_ticket() {
        let roster = coordinator();
        let mut inner = roster.lock();
        inner.issued = 2;

        let newer = vec![Person::new("B", Team::TeamB).unwrap()];
        assert!(matches!(
            roster.settle(&mut inner, 2, Ok(newer)),
            Settled::Applied { people: 1 }
        ));
        assert!(matches!(
            roster.settle(&mut inner, 1, Ok(Vec::new())),
            Settled::Discarded
        ));
        assert_eq!(inner.view.roster.len(), 1);
    }

    #[test]
    fn sequenced_settle_keeps_loading_until_latest() {
        let roster = coordinator();
        let mut inner = roster.lock();
        inner.issued = 2;
        inner.view.is_loading = true;

        let _ = roster.settle(&mut inner, 1, Ok(Vec::new()));
        assert!(inner.view.is_loading);

        let _ = roster.settle(&mut inner, 2, Ok(Vec::new()));
        assert!(!inner.view.is_loading);
    }
}
