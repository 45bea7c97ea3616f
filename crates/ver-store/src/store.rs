//! The engagement collection and its audit trails, persisted as one JSON file.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use ver_core::entities::{AnalysisResult, AuditEntry, Engagement};
use ver_core::ids::{PREFIX_AUDIT, PREFIX_ENGAGEMENT, generate_id};
use ver_schema::SchemaRegistry;

use crate::error::StoreError;

/// Name of the engagement created when nothing usable is on disk.
pub const DEFAULT_ENGAGEMENT_NAME: &str = "Default Project";

/// Suffix appended to an unparseable store file when it is moved aside.
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// Engagements with their audit trails, newest audit entry first.
///
/// Every mutation writes the whole collection to a sibling temp file and
/// renames it over the target. Memory is updated only after that succeeds.
#[derive(Debug)]
pub struct EngagementStore {
    path: PathBuf,
    engagements: Vec<Engagement>,
    active_id: String,
}

impl EngagementStore {
    /// Load the collection at `path`.
    ///
    /// A missing, unreadable, corrupt, or empty file is replaced by a single
    /// `"Default Project"` engagement. A corrupt file is first moved to
    /// `<file>.corrupt`. Persisting the bootstrap is best-effort. The first
    /// engagement becomes active.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` only if an id for the bootstrap engagement
    /// cannot be generated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut engagements = load_collection(&path);

        if engagements.is_empty() {
            let engagement = new_engagement(DEFAULT_ENGAGEMENT_NAME)?;
            tracing::info!(path = %path.display(), id = %engagement.id, "bootstrapping default engagement");
            engagements.push(engagement);
            if let Err(e) = write_collection(&path, &engagements) {
                tracing::warn!(error = %e, "could not persist default engagement; continuing in memory");
            }
        }

        let active_id = engagements
            .first()
            .map(|engagement| engagement.id.clone())
            .unwrap_or_default();

        Ok(Self {
            path,
            engagements,
            active_id,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All engagements in creation order.
    #[must_use]
    pub fn list(&self) -> &[Engagement] {
        &self.engagements
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Engagement> {
        self.engagements.iter().find(|engagement| engagement.id == id)
    }

    /// The currently selected engagement.
    #[must_use]
    pub fn active(&self) -> Option<&Engagement> {
        self.get(&self.active_id)
    }

    /// Select the active engagement. In-memory only.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no engagement has this id.
    pub fn set_active(&mut self, id: &str) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(not_found("engagement", id));
        }
        id.clone_into(&mut self.active_id);
        Ok(())
    }

    /// Create, persist, and activate a new engagement.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a blank name and
    /// `StoreError::Write` if the collection cannot be persisted.
    pub fn create(&mut self, name: &str) -> Result<Engagement, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "engagement name must not be blank".into(),
            ));
        }

        let engagement = new_engagement(name)?;
        let mut next = self.engagements.clone();
        next.push(engagement.clone());
        self.commit(next)?;
        self.active_id.clone_from(&engagement.id);

        tracing::info!(id = %engagement.id, name = %engagement.name, "created engagement");
        Ok(engagement)
    }

    /// Record an analysis run at the front of an engagement's audit trail.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown engagement and
    /// `StoreError::Write` if the collection cannot be persisted.
    pub fn add_audit_entry(
        &mut self,
        engagement_id: &str,
        analysis_result: AnalysisResult,
        policy_text: &str,
        regulation_ids: Vec<String>,
    ) -> Result<AuditEntry, StoreError> {
        let index = self
            .engagements
            .iter()
            .position(|engagement| engagement.id == engagement_id)
            .ok_or_else(|| not_found("engagement", engagement_id))?;

        let entry = AuditEntry {
            id: generate_id(PREFIX_AUDIT)?,
            timestamp: Utc::now(),
            analysis_result,
            policy_text: policy_text.to_string(),
            regulation_ids,
        };

        let mut next = self.engagements.clone();
        next[index].audit_trail.insert(0, entry.clone());
        self.commit(next)?;

        tracing::info!(
            engagement = engagement_id,
            entry = %entry.id,
            status = %entry.analysis_result.compliance_status,
            "recorded audit entry"
        );
        Ok(entry)
    }

    /// Find an audit entry in any engagement, with its owner.
    #[must_use]
    pub fn find_audit_entry(&self, id: &str) -> Option<(&Engagement, &AuditEntry)> {
        self.engagements.iter().find_map(|engagement| {
            engagement
                .audit_trail
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| (engagement, entry))
        })
    }

    fn commit(&mut self, next: Vec<Engagement>) -> Result<(), StoreError> {
        write_collection(&self.path, &next)?;
        self.engagements = next;
        Ok(())
    }
}

fn new_engagement(name: &str) -> Result<Engagement, StoreError> {
    Ok(Engagement {
        id: generate_id(PREFIX_ENGAGEMENT)?,
        name: name.to_string(),
        created_at: Utc::now(),
        audit_trail: Vec::new(),
    })
}

fn not_found(entity_type: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        entity_type,
        id: id.to_string(),
    }
}

/// Read and validate the collection. Never fails: anything unusable comes
/// back empty.
fn load_collection(path: &Path) -> Vec<Engagement> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no engagement file yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "engagement file is unreadable");
            return Vec::new();
        }
    };

    match parse_collection(&raw) {
        Ok(engagements) => {
            tracing::debug!(count = engagements.len(), "loaded engagements");
            engagements
        }
        Err(reason) => {
            tracing::warn!(path = %path.display(), %reason, "engagement file is corrupt");
            move_aside(path);
            Vec::new()
        }
    }
}

fn parse_collection(raw: &str) -> Result<Vec<Engagement>, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let items = value
        .as_array()
        .ok_or_else(|| "expected a JSON array of engagements".to_string())?;

    let schemas = SchemaRegistry::new();
    for (i, item) in items.iter().enumerate() {
        schemas
            .validate("engagement", item)
            .map_err(|e| format!("engagement #{i}: {e}"))?;
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn move_aside(path: &Path) {
    let mut target = path.as_os_str().to_owned();
    target.push(CORRUPT_SUFFIX);
    let target = PathBuf::from(target);
    match std::fs::rename(path, &target) {
        Ok(()) => tracing::warn!(backup = %target.display(), "moved corrupt engagement file aside"),
        Err(e) => tracing::warn!(error = %e, "could not move corrupt engagement file aside"),
    }
}

/// Serialize the whole collection to a sibling temp file, then rename it over
/// `path`.
fn write_collection(path: &Path, engagements: &[Engagement]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(engagements)?;
    let write_error = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(&json).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
