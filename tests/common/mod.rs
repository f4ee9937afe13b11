//! Shared test doubles for roster coordinator tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{broadcast, Semaphore};

use pickup_roster::domain::group::GroupName;
use pickup_roster::domain::person::{Person, PersonName, Team};
use pickup_roster::domain::repositories::{RosterRepository, StorageError};
use pickup_roster::infrastructure::repositories::InMemoryRosterRepository;
use pickup_roster::roster::{Notice, RosterEvent};

/// Storage operations a test can observe or break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    List,
    Remove,
    RemoveGroup,
}

/// In-memory repository that records calls, injects failures and can hold
/// roster listings until a test releases them
#[derive(Default)]
pub struct ScriptedRepository {
    inner: InMemoryRosterRepository,
    calls: Mutex<Vec<Op>>,
    failing: Mutex<HashSet<Op>>,
    failing_after_hold: Mutex<HashSet<Team>>,
    gates: Mutex<HashMap<Team, Arc<Semaphore>>>,
}

impl ScriptedRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds a person directly, bypassing call recording
    pub async fn seed(&self, group: &GroupName, name: &str, team: Team) {
        self.inner
            .add_person(group, &Person::new(name, team).unwrap())
            .await
            .unwrap();
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    /// Fails listings of `team` once they are released from a hold
    pub fn fail_after_hold(&self, team: Team) {
        self.failing_after_hold.lock().unwrap().insert(team);
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    /// Holds every later listing of `team` until `release` is called
    pub fn hold(&self, team: Team) {
        self.gates
            .lock()
            .unwrap()
            .insert(team, Arc::new(Semaphore::new(0)));
    }

    /// Lets one held listing of `team` settle
    pub fn release(&self, team: Team) {
        if let Some(gate) = self.gates.lock().unwrap().get(&team) {
            gate.add_permits(1);
        }
    }

    /// Returns what storage holds, ignoring failures and gates
    pub async fn stored(&self, group: &GroupName, team: Team) -> Vec<Person> {
        self.inner.list_by_group_and_team(group, team).await.unwrap()
    }

    fn record(&self, op: Op) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(StorageError::Backend(format!("{:?} unavailable", op)));
        }
        Ok(())
    }
}

#[async_trait]
impl RosterRepository for ScriptedRepository {
    async fn add_person(&self, group: &GroupName, person: &Person) -> Result<(), StorageError> {
        self.record(Op::Add)?;
        self.inner.add_person(group, person).await
    }

    async fn list_by_group(&self, group: &GroupName) -> Result<Vec<Person>, StorageError> {
        self.record(Op::List)?;
        self.inner.list_by_group(group).await
    }

    async fn list_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> Result<Vec<Person>, StorageError> {
        self.record(Op::List)?;
        let people = self.inner.list_by_group_and_team(group, team).await;

        let gate = self.gates.lock().unwrap().get(&team).cloned();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.failing_after_hold.lock().unwrap().contains(&team) {
            return Err(StorageError::Backend(format!("{} listing unavailable", team)));
        }

        people
    }

    async fn remove_person(
        &self,
        group: &GroupName,
        name: &PersonName,
    ) -> Result<(), StorageError> {
        self.record(Op::Remove)?;
        self.inner.remove_person(group, name).await
    }

    async fn remove_group(&self, group: &GroupName) -> Result<(), StorageError> {
        self.record(Op::RemoveGroup)?;
        // Suspend once so concurrent confirmations overlap
        tokio::task::yield_now().await;
        self.inner.remove_group(group).await
    }
}

/// Collects every event already published
pub fn drain(events: &mut broadcast::Receiver<RosterEvent>) -> Vec<RosterEvent> {
    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    collected
}

pub fn notices(events: &[RosterEvent]) -> Vec<Notice> {
    events
        .iter()
        .filter_map(|e| e.as_notice().cloned())
        .collect()
}

pub fn group() -> GroupName {
    GroupName::new("Thursday futsal").unwrap()
}

pub fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}
