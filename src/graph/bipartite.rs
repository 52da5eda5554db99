//! Two-mode affiliation graph and its one-mode projection onto people

use std::collections::{BTreeSet, HashMap};
use itertools::Itertools;
use log;
use crate::error::{AnalysisError, AnalysisResult};
use crate::graph::{CompressedGraph, GraphBuilder};

/// People × events affiliation graph.
///
/// The two node classes are kept in separate index spaces, so an edge can
/// only ever join a person to an event. An identifier may not be used in
/// both classes.
#[derive(Debug, Default, Clone)]
pub struct BipartiteGraph {
    people: Vec<String>,
    person_index: HashMap<String, u32>,
    events: Vec<String>,
    event_index: HashMap<String, u32>,
    /// Person indices attending each event
    attendees: Vec<BTreeSet<u32>>,
    affiliation_count: usize,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person, even one who attends nothing
    pub fn add_person(&mut self, id: &str) -> AnalysisResult<u32> {
        if self.event_index.contains_key(id) {
            return Err(AnalysisError::InvalidGraph(format!(
                "{id} is already an event and cannot also be a person"
            )));
        }
        if let Some(&idx) = self.person_index.get(id) {
            return Ok(idx);
        }
        let idx = self.people.len() as u32;
        self.person_index.insert(id.to_string(), idx);
        self.people.push(id.to_string());
        Ok(idx)
    }

    /// Register an event, even one nobody attends
    pub fn add_event(&mut self, id: &str) -> AnalysisResult<u32> {
        if self.person_index.contains_key(id) {
            return Err(AnalysisError::InvalidGraph(format!(
                "{id} is already a person and cannot also be an event"
            )));
        }
        if let Some(&idx) = self.event_index.get(id) {
            return Ok(idx);
        }
        let idx = self.events.len() as u32;
        self.event_index.insert(id.to_string(), idx);
        self.events.push(id.to_string());
        self.attendees.push(BTreeSet::new());
        Ok(idx)
    }

    /// Record that `person` attended `event`. Repeats collapse into one affiliation.
    pub fn add_affiliation(&mut self, person: &str, event: &str) -> AnalysisResult<()> {
        let p = self.add_person(person)?;
        let e = self.add_event(event)?;
        if self.attendees[e as usize].insert(p) {
            self.affiliation_count += 1;
        }
        Ok(())
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Number of distinct person-event edges
    pub fn affiliation_count(&self) -> usize {
        self.affiliation_count
    }

    /// Attendees of an event, if it exists
    pub fn attendees(&self, event: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let &e = self.event_index.get(event)?;
        Some(
            self.attendees[e as usize]
                .iter()
                .map(move |&p| self.people[p as usize].as_str()),
        )
    }

    /// Project onto the people class.
    ///
    /// Two people are adjacent iff they share at least one event; the edge
    /// weight counts how many. Node indices follow person registration order.
    pub fn project(&self) -> AnalysisResult<CompressedGraph> {
        log::info!(
            "Projecting {} people across {} events ({} affiliations)",
            self.people.len(),
            self.events.len(),
            self.affiliation_count
        );

        let mut builder = GraphBuilder::with_capacity(self.people.len());
        for person in &self.people {
            builder.get_or_create_node(person);
        }

        let mut pair_visits = 0usize;
        for members in &self.attendees {
            for (a, b) in members.iter().tuple_combinations() {
                builder.add_edge_by_index(*a, *b, 1)?;
                pair_visits += 1;
            }
        }

        let graph = builder.build();
        log::info!(
            "Projected graph has {} nodes and {} edges ({} co-attendance pairs)",
            graph.node_count(),
            graph.edge_count(),
            pair_visits
        );

        Ok(graph)
    }
}
