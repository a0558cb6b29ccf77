//! Change status handler for QMS MCP server

use crate::QmsServerHandler;
use crate::validation;
use chrono::Local;
use mcp_attr::{Result as McpResult, bail_public};

impl QmsServerHandler {
    /// **Update**: Set a status/category field on one or more records of a domain.
    /// **Values**: Any spelling of a member is accepted ("In Progress", "in-progress", "IN_PROGRESS");
    /// unrecognized values are rejected with the list of valid ones.
    /// **Rules**: No workflow rules are enforced; every member is reachable from every other.
    /// **Batch**: Supports multiple IDs; failures for individual IDs are reported without aborting the rest.
    pub async fn handle_change_status(
        &self,
        domain: String,
        ids: Vec<String>,
        new_status: String,
        field: Option<String>,
    ) -> McpResult<String> {
        let domain = validation::parse_domain(&domain)?;

        if ids.is_empty() {
            bail_public!(_, "No IDs provided. Please specify at least one record ID.");
        }

        if self.storage.is_read_only() {
            bail_public!(_, "{}", crate::QmsError::ReadOnly);
        }

        let field = field.unwrap_or_else(|| domain.primary_status().0.to_string());
        let Some(kind) = domain.status_kind(&field) else {
            bail_public!(
                _,
                "{} records have no status field '{}'. Status fields: {}",
                domain,
                field,
                domain.status_field_names()
            );
        };

        // Parse new status once
        let status = validation::parse_status_value(&self.normalizer, kind, &new_status)?;
        let today = Local::now().date_naive();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        let mut originals = Vec::new();

        let mut data = self.lock_data()?;
        for id in ids.iter().map(|id| validation::normalize_record_id(id)) {
            let Some(record) = data.find_mut(domain, &id) else {
                failures.push(format!("{}: not found", id));
                continue;
            };

            let original = record.clone();
            let stored = record.unrecognized_text(&field);
            let was_unresolved = record.is_unresolved(&field);
            match record.set_status(&field, status) {
                Ok(previous) => {
                    let changed = previous != status || was_unresolved;
                    if changed {
                        record.touch(today);
                        originals.push(original);
                    }
                    let from = stored.unwrap_or_else(|| previous.as_str().to_string());
                    successes.push((id, from, changed));
                }
                Err(e) => failures.push(format!("{}: {}", id, e)),
            }
        }
        drop(data);

        if !originals.is_empty() {
            if let Err(e) = self.save_data() {
                // Keep memory in step with the file that is still on disk
                let mut data = self.lock_data()?;
                for original in originals.into_iter().rev() {
                    if let Some(record) = data.find_mut(domain, &original.id) {
                        *record = original;
                    }
                }
                tracing::warn!(
                    domain = domain.table_name(),
                    error = %e,
                    "save failed, changes rolled back"
                );
                bail_public!(_, "Failed to save: {}", e);
            }
            tracing::info!(
                domain = domain.table_name(),
                field = %field,
                status = status.as_str(),
                count = originals.len(),
                "status changed"
            );
        }

        // Build response message
        let mut response = String::new();

        if !successes.is_empty() {
            response.push_str(&format!(
                "Successfully set {} to {} for {} {} record{}:\n",
                field,
                status.as_str(),
                successes.len(),
                domain,
                if successes.len() == 1 { "" } else { "s" }
            ));
            for (id, from, changed) in &successes {
                if *changed {
                    response.push_str(&format!("- {}: {} → {}\n", id, from, status.as_str()));
                } else {
                    response.push_str(&format!("- {}: {} (unchanged)\n", id, status.as_str()));
                }
            }
        }

        if !failures.is_empty() {
            if !response.is_empty() {
                response.push('\n');
            }
            response.push_str(&format!(
                "Failed to change {} for {} record{}:\n",
                field,
                failures.len(),
                if failures.len() == 1 { "" } else { "s" }
            ));
            for failure in &failures {
                response.push_str(&format!("- {}\n", failure));
            }
        }

        // If all failed, return error
        if successes.is_empty() {
            bail_public!(_, "{}", response.trim());
        }

        Ok(response.trim().to_string())
    }
}

