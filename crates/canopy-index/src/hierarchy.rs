//! Per-section text aggregation over the section forest.
//!
//! `local_text` is the text of the units assigned directly to a section,
//! in unit-id order. `subtree_text` is the depth-first concatenation of a
//! section's local text followed by each child's subtree text, in child
//! order. Ingestion is trusted to produce a single-parent forest, but
//! cycles are still detected during the walk and surface as
//! [`StructuralError::CycleDetected`] instead of hanging the build.

use std::collections::BTreeMap;

use canopy_core::errors::StructuralError;
use canopy_core::ontology::{Section, SectionId, TextUnit, UnitId};

/// Fill in `local_text` and `subtree_text` for every section.
///
/// Pure over the input forest and idempotent: re-running on unchanged
/// input rewrites identical texts.
pub fn aggregate(
    sections: &mut BTreeMap<SectionId, Section>,
    units: &BTreeMap<UnitId, TextUnit>,
) -> Result<(), StructuralError> {
    // Local text. BTreeMap iteration gives the stable unit-id order.
    let mut local: BTreeMap<SectionId, Vec<&str>> = BTreeMap::new();
    for unit in units.values() {
        if let Some(sid) = &unit.section {
            if unit.has_text() {
                local.entry(sid.clone()).or_default().push(&unit.text);
            }
        }
    }
    for section in sections.values_mut() {
        section.local_text = local
            .remove(&section.id)
            .map(|texts| texts.join("\n").trim().to_string())
            .unwrap_or_default();
    }

    // Subtree text, memoized so shared work is done once.
    let ids: Vec<SectionId> = sections.keys().cloned().collect();
    let mut computed: BTreeMap<SectionId, String> = BTreeMap::new();
    for id in &ids {
        collect_subtree(id, sections, &mut computed, &mut Vec::new())?;
    }
    for section in sections.values_mut() {
        section.subtree_text = computed.remove(&section.id).unwrap_or_default();
    }
    Ok(())
}

fn collect_subtree(
    id: &SectionId,
    sections: &BTreeMap<SectionId, Section>,
    computed: &mut BTreeMap<SectionId, String>,
    path: &mut Vec<SectionId>,
) -> Result<String, StructuralError> {
    if let Some(done) = computed.get(id) {
        return Ok(done.clone());
    }
    if path.contains(id) {
        return Err(StructuralError::CycleDetected {
            section_id: id.clone(),
        });
    }

    // Unreachable for the roots we iterate from, but children resolve here.
    let section = match sections.get(id) {
        Some(s) => s,
        None => return Ok(String::new()),
    };

    path.push(id.clone());
    let mut parts: Vec<String> = Vec::new();
    if !section.local_text.is_empty() {
        parts.push(section.local_text.clone());
    }
    for child_id in &section.children {
        if !sections.contains_key(child_id) {
            path.pop();
            return Err(StructuralError::MissingSection {
                section_id: child_id.clone(),
                referenced_by: id.clone(),
            });
        }
        let child_text = collect_subtree(child_id, sections, computed, path)?;
        if !child_text.is_empty() {
            parts.push(child_text);
        }
    }
    path.pop();

    let text = parts.join("\n").trim().to_string();
    computed.insert(id.clone(), text.clone());
    Ok(text)
}

/// Level-1 sections in stable id order.
pub fn root_sections(sections: &BTreeMap<SectionId, Section>) -> Vec<&Section> {
    sections.values().filter(|s| s.is_root()).collect()
}

/// The parent chain of a section, root first, the section itself last.
pub fn section_path<'a>(
    sections: &'a BTreeMap<SectionId, Section>,
    id: &SectionId,
) -> Vec<&'a Section> {
    let mut path = Vec::new();
    let mut current = sections.get(id);
    while let Some(section) = current {
        // A malformed parent loop would otherwise climb forever.
        if path.len() > sections.len() {
            break;
        }
        path.push(section);
        current = section.parent.as_ref().and_then(|pid| sections.get(pid));
    }
    path.reverse();
    path
}
