use crate::objective::ObjectiveName;

/// Extraction and conflict-resolution errors. All user-correctable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown objective: {name}")]
    UnknownObjective { name: String },

    #[error("invalid weight {weight} for objective {name}: must be finite and non-negative")]
    InvalidWeight { name: String, weight: f64 },

    #[error(
        "unresolvable conflict: harmony {harmony:.3} below minimum {minimum:.3} \
         (offending pairs: {})",
        format_pairs(.pairs)
    )]
    UnresolvableConflict {
        pairs: Vec<(ObjectiveName, ObjectiveName)>,
        harmony: f64,
        minimum: f64,
    },
}

fn format_pairs(pairs: &[(ObjectiveName, ObjectiveName)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{a}/{b}"))
        .collect::<Vec<_>>()
        .join(", ")
}
