use chrono::Utc;
use uuid::Uuid;

use crate::Store;
use crate::dto::hackathon::{CreateHackathonRequest, UpdateHackathonRequest};
use crate::error::{Result, StorageError};
use crate::models::Hackathon;

/// CRUD over the hackathon collection. Every mutation loads the full
/// collection, transforms it in memory and writes the full collection
/// back; concurrent writers overwrite each other's unseen changes.
pub struct HackathonRepository<'a> {
    store: &'a Store,
}

impl<'a> HackathonRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all entries in insertion order.
    pub fn list(&self) -> Result<Vec<Hackathon>> {
        self.store.load_entries()
    }

    /// Find an entry by ID.
    pub fn find_by_id(&self, id: Uuid) -> Result<Hackathon> {
        self.store
            .load_entries()?
            .into_iter()
            .find(|h| h.id == id)
            .ok_or(StorageError::NotFound)
    }

    /// Record a new entry, appending it to the collection.
    pub async fn create(&self, req: &CreateHackathonRequest) -> Result<Hackathon> {
        self.store.simulate_latency().await;

        let now = Utc::now();
        let entry = Hackathon {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            event_name: req.event_name.clone(),
            description: req.description.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            team_size: req.team_size,
            role: req.role.clone(),
            technologies: dedup_technologies(&req.technologies),
            github_link: req.github_link.clone(),
            demo_link: req.demo_link.clone(),
            certificate_link: req.certificate_link.clone(),
            achievements: req.achievements.clone(),
            placement: req.placement.clone(),
            likes: 0,
            liked_by_user: false,
            created_at: now,
            updated_at: now,
        };

        let mut entries = self.store.load_entries()?;
        entries.push(entry.clone());
        self.store.save_entries(&entries)?;

        Ok(entry)
    }

    /// Update the entry whose ID matches, stamping its updated timestamp.
    /// The rest of the collection is left untouched.
    pub async fn update(&self, id: Uuid, req: &UpdateHackathonRequest) -> Result<Hackathon> {
        self.store.simulate_latency().await;

        let mut entries = self.store.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(name) = &req.name {
            entry.name = name.clone();
        }
        if let Some(event_name) = &req.event_name {
            entry.event_name = event_name.clone();
        }
        if let Some(description) = &req.description {
            entry.description = description.clone();
        }
        if let Some(start_date) = req.start_date {
            entry.start_date = start_date;
        }
        if let Some(end_date) = req.end_date {
            entry.end_date = end_date;
        }
        if let Some(team_size) = req.team_size {
            entry.team_size = team_size;
        }
        if let Some(role) = &req.role {
            entry.role = role.clone();
        }
        if let Some(technologies) = &req.technologies {
            entry.technologies = dedup_technologies(technologies);
        }
        if let Some(github_link) = &req.github_link {
            entry.github_link = set_or_clear(github_link);
        }
        if let Some(demo_link) = &req.demo_link {
            entry.demo_link = set_or_clear(demo_link);
        }
        if let Some(certificate_link) = &req.certificate_link {
            entry.certificate_link = set_or_clear(certificate_link);
        }
        if let Some(achievements) = &req.achievements {
            entry.achievements = achievements.clone();
        }
        if let Some(placement) = &req.placement {
            entry.placement = set_or_clear(placement);
        }
        entry.updated_at = Utc::now();

        let updated = entry.clone();
        self.store.save_entries(&entries)?;

        Ok(updated)
    }

    /// Delete an entry by ID, preserving the relative order of the rest.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.store.load_entries()?;
        let before = entries.len();
        entries.retain(|h| h.id != id);

        if entries.len() == before {
            return Err(StorageError::NotFound);
        }

        self.store.save_entries(&entries)?;
        Ok(())
    }

    /// Flip the like state of an entry and persist the whole collection.
    pub fn toggle_like(&self, id: Uuid) -> Result<Hackathon> {
        let mut entries = self.store.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(StorageError::NotFound)?;

        entry.toggle_like();
        let toggled = entry.clone();

        self.store.save_entries(&entries)?;
        Ok(toggled)
    }
}

/// An empty string on an optional update field clears the stored value.
fn set_or_clear(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Duplicate technologies are collapsed on entry, preserving first-seen
/// order, matching the creation form's add-technology behavior.
fn dedup_technologies(technologies: &[String]) -> Vec<String> {
    use itertools::Itertools;

    technologies
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unique()
        .collect()
}
