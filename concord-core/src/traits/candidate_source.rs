use crate::models::Candidate;

/// External candidate supplier.
///
/// The engine only needs an iterable sequence of (id, metric vector)
/// pairs; how candidates are obtained (search index, catalog dump) is the
/// collaborator's business.
pub trait ICandidateSource: Send + Sync {
    fn candidates(&self) -> Box<dyn Iterator<Item = Candidate> + Send + '_>;

    /// Optional size hint for pre-allocation.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

/// In-memory candidate source over an owned `Vec`.
#[derive(Debug, Clone, Default)]
pub struct VecCandidateSource {
    candidates: Vec<Candidate>,
}

impl VecCandidateSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl ICandidateSource for VecCandidateSource {
    fn candidates(&self) -> Box<dyn Iterator<Item = Candidate> + Send + '_> {
        Box::new(self.candidates.iter().cloned())
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.candidates.len())
    }
}
