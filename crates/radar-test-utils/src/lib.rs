//! Testing utilities for the tech radar workspace
//!
//! Shared fixtures, in-memory collaborators and builders.

#![allow(missing_docs)]

use radar_core::{
    diff, ArtifactStore, GenerateOptions, Generator, Meta, Quadrant, RenderError, RenderPayload,
    Renderer, Ring, Snapshot, SnapshotDate, StoreError, Technology,
};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub fn two_ring_meta() -> Meta {
    Meta::new(
        "Test Radar",
        "Test Description",
        vec![
            Quadrant::new("Languages", "languages"),
            Quadrant::new("Frameworks", "frameworks"),
        ],
        vec![Ring::new("Adopt", "adopt"), Ring::new("Trial", "trial")],
    )
    .unwrap()
}

pub fn tech(name: &str, ring: &str, quadrant: &str) -> Technology {
    Technology::new(name, ring, quadrant, format!("{name} description"))
}

pub fn snapshot(date: &str, entries: &[(&str, &str, &str)]) -> Snapshot {
    Snapshot::new(
        date,
        entries
            .iter()
            .map(|(name, ring, quadrant)| tech(name, ring, quadrant))
            .collect(),
    )
}

/// Store that keeps documents in memory and counts writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub documents: BTreeMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_existing(dates: &[&str]) -> Self {
        Self {
            documents: dates
                .iter()
                .map(|d| ((*d).to_string(), "existing".to_string()))
                .collect(),
            writes: 0,
        }
    }

    pub fn document(&self, date: &str) -> Option<&str> {
        self.documents.get(date).map(String::as_str)
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, date: &SnapshotDate) -> Result<bool, StoreError> {
        Ok(self.documents.contains_key(date.raw()))
    }

    fn write(&mut self, date: &SnapshotDate, document: &str) -> Result<(), StoreError> {
        self.documents.insert(date.raw().to_string(), document.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Renderer that records every payload and emits a one-line summary
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub payloads: RefCell<Vec<RenderPayload>>,
}

impl RecordingRenderer {
    pub fn payload(&self, snapshot: &str) -> Option<RenderPayload> {
        self.payloads
            .borrow()
            .iter()
            .find(|p| p.snapshot == snapshot)
            .cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, payload: &RenderPayload) -> Result<String, RenderError> {
        self.payloads.borrow_mut().push(payload.clone());
        let labels: Vec<_> = payload.entries.iter().map(|e| e.label.as_str()).collect();
        Ok(format!("{}|{}|{}", payload.title, payload.date, labels.join(",")))
    }
}

/// Renderer that rejects the payload for one snapshot
#[derive(Debug)]
pub struct FailingRenderer {
    pub fail_on: String,
}

impl Renderer for FailingRenderer {
    fn render(&self, payload: &RenderPayload) -> Result<String, RenderError> {
        if payload.snapshot == self.fail_on {
            Err(RenderError::execute(&payload.snapshot, "template rejected payload"))
        } else {
            Ok(String::new())
        }
    }
}

fn diffed_payload(date: &str, add_changes_summary: bool) -> RenderPayload {
    let meta = two_ring_meta();
    let previous = diff(
        snapshot("20231101", &[("Go", "Adopt", "Languages"), ("Angular", "Trial", "Frameworks")]),
        None,
    );
    let current = diff(
        snapshot(date, &[("Go", "Trial", "Languages"), ("React", "Adopt", "frameworks")]),
        Some(&previous),
    );
    let renderer = RecordingRenderer::default();
    let mut store = MemoryStore::default();
    let options = GenerateOptions {
        add_changes_summary,
        ..GenerateOptions::default()
    };
    Generator::new(&meta, &renderer, &mut store, options)
        .payload(&current, false)
        .unwrap()
}

/// Payload with a moved, a new and a deleted technology, no changes summary
pub fn payload(date: &str) -> RenderPayload {
    diffed_payload(date, false)
}

/// Same as [`payload`] with the changes summary attached
pub fn payload_with_changes(date: &str) -> RenderPayload {
    diffed_payload(date, true)
}
