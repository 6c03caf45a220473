//! # Follow-up Tasks
//!
//! Work that runs after a commit has fully landed, on the same
//! single-threaded queue as the edit that scheduled it.
//!
//! Every mutation opens a new generation. Tasks remember the generation they
//! were scheduled in, and a task from an older generation is dropped instead
//! of run once a newer mutation has started.

use jsongraph_graph::NodeId;
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Select the node with this id, or clear the selection if it is gone
    Reselect { node_id: NodeId },
}

/// Task waiting for the queue to drain
#[derive(Debug, Clone)]
pub struct PendingTask {
    pub generation: u64,
    pub task: Task,
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    generation: u64,
    tasks: VecDeque<PendingTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open a new generation, dropping everything queued before it
    pub fn begin(&mut self) -> u64 {
        if !self.tasks.is_empty() {
            debug!(dropped = self.tasks.len(), "Superseded tasks discarded");
        }
        self.tasks.clear();
        self.generation += 1;
        self.generation
    }

    pub fn schedule(&mut self, task: Task) {
        debug!(generation = self.generation, task = ?task, "Task scheduled");
        self.tasks.push_back(PendingTask {
            generation: self.generation,
            task,
        });
    }

    /// Next task of the current generation, discarding superseded ones
    pub fn pop(&mut self) -> Option<Task> {
        while let Some(pending) = self.tasks.pop_front() {
            if pending.generation == self.generation {
                return Some(pending.task);
            }
            debug!(
                generation = pending.generation,
                current = self.generation,
                task = ?pending.task,
                "Dropping superseded task"
            );
        }
        None
    }

    /// Next task that would run, without removing it
    pub fn peek(&self) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|pending| pending.generation == self.generation)
            .map(|pending| &pending.task)
    }

    /// Tasks that would still run
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|pending| pending.generation == self.generation)
            .count()
    }
}
