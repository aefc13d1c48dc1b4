//! Emergency intake queue
//!
//! [`TriageQueue`] wraps any [`Heap`] keyed by [`Urgency`] and hands patients
//! back lowest urgency first. The default backing store is
//! [`BinaryMinHeap`].
//!
//! # Example
//!
//! ```rust
//! use clinic_structures::triage::{Patient, TriageQueue};
//!
//! let mut queue = TriageQueue::new();
//! queue.insert(Patient::new("Jordan", 3));
//! queue.insert(Patient::new("Taylor", 1));
//! queue.insert(Patient::new("Avery", 5));
//!
//! assert_eq!(queue.peek().map(Patient::name), Some("Taylor"));
//! assert_eq!(queue.extract_min(), Some(Patient::new("Taylor", 1)));
//! assert_eq!(queue.len(), 2);
//! ```

use std::fmt;

use crate::binary_heap::BinaryMinHeap;
use crate::traits::Heap;

/// Priority key for patients. Lower values are treated first.
pub type Urgency = u32;

/// A patient waiting for treatment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Patient {
    name: String,
    urgency: Urgency,
}

impl Patient {
    pub fn new(name: impl Into<String>, urgency: Urgency) -> Self {
        Self {
            name: name.into(),
            urgency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.urgency)
    }
}

/// Patients ordered by urgency
///
/// # Type Parameters
/// - `H`: The underlying heap implementation (defaults to [`BinaryMinHeap`])
#[derive(Debug, Clone)]
pub struct TriageQueue<H = BinaryMinHeap<Patient, Urgency>>
where
    H: Heap<Patient, Urgency>,
{
    heap: H,
}

impl TriageQueue {
    /// Creates an empty queue backed by a [`BinaryMinHeap`]
    pub fn new() -> Self {
        Self::with_heap()
    }

    /// Patients in storage order, most urgent first
    ///
    /// Only the first entry is guaranteed to be the minimum; the rest follow
    /// the heap layout rather than sorted order.
    pub fn waiting(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.heap.as_slice().iter().map(|(_, patient)| patient)
    }
}

impl<H: Heap<Patient, Urgency>> TriageQueue<H> {
    /// Creates an empty queue on an arbitrary heap implementation
    pub fn with_heap() -> Self {
        Self { heap: H::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Admits a patient
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, patient: Patient) {
        log::trace!("admitting {patient}");
        self.heap.push(patient.urgency, patient);
    }

    /// The next patient to be treated, without removing them
    pub fn peek(&self) -> Option<&Patient> {
        self.heap.peek().map(|(_, patient)| patient)
    }

    /// Removes and returns the most urgent patient
    ///
    /// Returns `None` on an empty queue.
    pub fn extract_min(&mut self) -> Option<Patient> {
        let (_, patient) = self.heap.pop()?;
        log::trace!("treating {patient}, {} still waiting", self.heap.len());
        Some(patient)
    }
}

impl Default for TriageQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heap<Patient, Urgency>> Extend<Patient> for TriageQueue<H> {
    fn extend<I: IntoIterator<Item = Patient>>(&mut self, patients: I) {
        for patient in patients {
            self.insert(patient);
        }
    }
}

impl FromIterator<Patient> for TriageQueue {
    fn from_iter<I: IntoIterator<Item = Patient>>(patients: I) -> Self {
        let mut queue = Self::new();
        queue.extend(patients);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_display() {
        assert_eq!(Patient::new("Jordan", 3).to_string(), "Jordan (3)");
    }

    #[test]
    fn test_peek_then_extract() {
        let mut queue = TriageQueue::new();
        queue.insert(Patient::new("Jordan", 3));
        queue.insert(Patient::new("Taylor", 1));
        queue.insert(Patient::new("Avery", 5));

        assert_eq!(queue.peek(), Some(&Patient::new("Taylor", 1)));
        assert_eq!(queue.extract_min(), Some(Patient::new("Taylor", 1)));

        let waiting: Vec<_> = queue.waiting().map(Patient::to_string).collect();
        assert_eq!(waiting, ["Jordan (3)", "Avery (5)"]);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = TriageQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.extract_min(), None);
        assert_eq!(queue.waiting().count(), 0);
    }

    #[test]
    fn test_single_patient() {
        let mut queue = TriageQueue::new();
        queue.insert(Patient::new("Solo", 7));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.extract_min().map(|p| p.urgency()), Some(7));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_collect_and_drain() {
        let mut queue: TriageQueue = [("c", 9), ("a", 2), ("b", 4), ("d", 2)]
            .into_iter()
            .map(|(name, urgency)| Patient::new(name, urgency))
            .collect();

        let mut urgencies = Vec::new();
        while let Some(patient) = queue.extract_min() {
            urgencies.push(patient.urgency());
        }
        assert_eq!(urgencies, [2, 2, 4, 9]);
    }
}
