use std::collections::BTreeMap;

use super::buffer::{EditError, LineBuffer, strip_cr};
use super::sanitize::sanitize;
use super::{AppliedFix, FixAction, PatchOutcome, SkippedFix};
use crate::checker::{DocRules, Issue, IssueKind, Remedy};
use crate::docblock::{DocBlock, DocLocator};
use crate::generator::{GenerationRequest, Generator};
use crate::recovery::Entity;

/// Default context radius sent to the generator.
pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// Applies checker issues to a source buffer.
pub struct PatchEngine {
    rules: DocRules,
    locator: DocLocator,
    context_lines: usize,
}

impl Default for PatchEngine {
    fn default() -> Self {
        Self::new(DocLocator::default(), DEFAULT_CONTEXT_LINES)
    }
}

impl PatchEngine {
    #[must_use]
    pub fn new(locator: DocLocator, context_lines: usize) -> Self {
        Self {
            rules: DocRules::new(),
            locator,
            context_lines,
        }
    }

    /// Rewrite `source` to address `issues`, calling `generator` for new text.
    ///
    /// Never fails as a whole: an issue that cannot be addressed becomes a
    /// `SkippedFix` and the remaining fixes still run.
    #[must_use]
    pub fn apply(&self, source: &str, issues: &[Issue], generator: &dyn Generator) -> PatchOutcome {
        let mut pass = Pass {
            engine: self,
            generator,
            buffer: LineBuffer::parse(source),
            lines: BTreeMap::new(),
            applied: Vec::new(),
            skipped: Vec::new(),
            claimed: Vec::new(),
        };
        let plans = pass.plan(issues);

        for plan in plans.values().filter(|p| !p.in_place.is_empty()) {
            let result = pass.rewrite(plan);
            pass.record(plan, &plan.in_place, FixAction::Rewrote, result);
        }

        let reshaped = plans
            .values()
            .filter(|p| !p.regenerate.is_empty() || !p.compact.is_empty());
        for id in pass.descending(reshaped) {
            let Some(plan) = plans.get(&id) else {
                continue;
            };
            if pass.skip_shared(plan) {
                continue;
            }
            if plan.regenerate.is_empty() {
                let result = pass.compact(plan);
                pass.record(plan, &plan.compact, FixAction::Compacted, result);
            } else {
                let kinds: Vec<IssueKind> =
                    plan.regenerate.iter().chain(&plan.compact).copied().collect();
                let result = pass.regenerate(plan);
                pass.record(plan, &kinds, FixAction::Regenerated, result);
            }
        }

        for id in pass.descending(plans.values().filter(|p| !p.insert.is_empty())) {
            let Some(plan) = plans.get(&id) else {
                continue;
            };
            if pass.skip_shared(plan) {
                continue;
            }
            let result = pass.insert(plan);
            pass.record(plan, &plan.insert, FixAction::Inserted, result);
        }

        PatchOutcome {
            text: pass.buffer.to_text(),
            applied: pass.applied,
            skipped: pass.skipped,
        }
    }
}

/// Issues of one entity grouped by remedy.
struct Plan<'a> {
    entity: &'a Entity,
    in_place: Vec<IssueKind>,
    compact: Vec<IssueKind>,
    regenerate: Vec<IssueKind>,
    insert: Vec<IssueKind>,
}

struct Pass<'e, 'g> {
    engine: &'e PatchEngine,
    generator: &'g dyn Generator,
    buffer: LineBuffer,
    /// Current line of every entity with pending work, by entity id.
    lines: BTreeMap<usize, usize>,
    applied: Vec<AppliedFix>,
    skipped: Vec<SkippedFix>,
    /// Entities whose comment was already reshaped or inserted.
    claimed: Vec<(usize, String)>,
}

impl Pass<'_, '_> {
    fn plan<'a>(&mut self, issues: &'a [Issue]) -> BTreeMap<usize, Plan<'a>> {
        let mut plans: BTreeMap<usize, Plan<'a>> = BTreeMap::new();
        for issue in issues {
            let entity = &issue.entity;
            if issue.remedy == Remedy::Manual {
                self.skipped.push(SkippedFix {
                    entity: entity.label(),
                    line: entity.line,
                    kinds: vec![issue.kind],
                    reason: "requires a manual edit".to_string(),
                });
                continue;
            }
            self.lines.entry(entity.id).or_insert(entity.line);
            let plan = plans.entry(entity.id).or_insert_with(|| Plan {
                entity,
                in_place: Vec::new(),
                compact: Vec::new(),
                regenerate: Vec::new(),
                insert: Vec::new(),
            });
            let bucket = match issue.remedy {
                Remedy::InPlace => &mut plan.in_place,
                Remedy::Compact => &mut plan.compact,
                Remedy::Regenerate => &mut plan.regenerate,
                Remedy::Insert | Remedy::Manual => &mut plan.insert,
            };
            if !bucket.contains(&issue.kind) {
                bucket.push(issue.kind);
            }
        }
        plans
    }

    /// Entity ids by current line, bottom of the file first; ties keep file order.
    fn descending<'p, 'a: 'p>(&self, plans: impl Iterator<Item = &'p Plan<'a>>) -> Vec<usize> {
        let mut ids: Vec<usize> = plans.map(|plan| plan.entity.id).collect();
        ids.sort_by(|a, b| self.line_of(*b).cmp(&self.line_of(*a)).then(a.cmp(b)));
        ids
    }

    /// Skip an entity declared on the line of one whose comment was already
    /// replaced; both resolve to the same block.
    fn skip_shared(&mut self, plan: &Plan<'_>) -> bool {
        let entity = plan.entity;
        let line = self.line_of(entity.id);
        let owner = self
            .claimed
            .iter()
            .find(|(id, _)| self.line_of(*id) == line)
            .map(|(_, label)| label.clone());
        let Some(owner) = owner else {
            self.claimed.push((entity.id, entity.label()));
            return false;
        };
        let kinds = plan
            .regenerate
            .iter()
            .chain(&plan.compact)
            .chain(&plan.insert)
            .copied()
            .collect();
        let reason = format!("shares its comment with {owner}");
        tracing::warn!(entity = %entity.label(), line = entity.line, %reason, "skipped fix");
        self.skipped.push(SkippedFix {
            entity: entity.label(),
            line: entity.line,
            kinds,
            reason,
        });
        true
    }

    fn line_of(&self, id: usize) -> usize {
        self.lines.get(&id).copied().unwrap_or_default()
    }

    /// Current line of the entity, after checking it still holds the declaration.
    fn verify(&self, entity: &Entity) -> Result<usize, EditError> {
        let line = self.line_of(entity.id);
        if self.buffer.line(line)? != strip_cr(&entity.text) {
            return Err(EditError::EntityMoved {
                line,
                entity: entity.label(),
            });
        }
        Ok(line)
    }

    fn locate(&self, line: usize) -> Result<DocBlock, EditError> {
        self.engine
            .locator
            .locate(self.buffer.raw_lines(), line)
            .ok_or(EditError::BlockMissing { line })
    }

    /// Lines at or below `at` moved down by `count`.
    fn shift_down(&mut self, at: usize, count: usize) {
        for line in self.lines.values_mut().filter(|line| **line >= at) {
            *line += count;
        }
    }

    /// Lines below `end` moved up by `count`.
    fn shift_up(&mut self, end: usize, count: usize) {
        for line in self.lines.values_mut().filter(|line| **line > end) {
            *line = line.saturating_sub(count);
        }
    }

    fn rewrite(&mut self, plan: &Plan<'_>) -> Result<(), String> {
        let line = self.verify(plan.entity).map_err(|e| e.to_string())?;
        let block = self.locate(line).map_err(|e| e.to_string())?;
        let rules = &self.engine.rules;
        for (offset, raw) in block.lines.iter().enumerate() {
            let original = strip_cr(raw);
            let mut text = original.to_string();
            if plan.in_place.contains(&IssueKind::WrongStyle) {
                text = rules.rewrite_at_commands(&text);
            }
            if plan.in_place.contains(&IssueKind::WrongCommand) {
                text = rules.strip_explicit_commands(&text);
            }
            if text != original {
                self.buffer
                    .replace(block.start_line + offset, text.trim_end())
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }

    fn compact(&mut self, plan: &Plan<'_>) -> Result<(), String> {
        let line = self.verify(plan.entity).map_err(|e| e.to_string())?;
        let block = self.locate(line).map_err(|e| e.to_string())?;
        let gaps = self.engine.rules.param_gaps(&block);
        if gaps.is_empty() {
            return Err("parameter list is already compact".to_string());
        }
        for offset in gaps.into_iter().rev() {
            let at = block.start_line + offset;
            self.buffer.delete(at, at).map_err(|e| e.to_string())?;
            self.shift_up(at, 1);
        }
        Ok(())
    }

    fn regenerate(&mut self, plan: &Plan<'_>) -> Result<(), String> {
        let line = self.verify(plan.entity).map_err(|e| e.to_string())?;
        let block = self.locate(line).map_err(|e| e.to_string())?;
        let removed = self
            .buffer
            .delete(block.start_line, block.end_line)
            .map_err(|e| e.to_string())?;
        let count = removed.len();
        self.shift_up(block.end_line, count);

        let line = self.line_of(plan.entity.id);
        match self.generate(plan.entity, line) {
            Ok(doc) => self.insert_doc(plan.entity, line, &doc),
            Err(reason) => {
                self.buffer
                    .insert_raw(block.start_line, removed)
                    .map_err(|e| e.to_string())?;
                self.shift_down(block.start_line, count);
                Err(reason)
            }
        }
    }

    fn insert(&mut self, plan: &Plan<'_>) -> Result<(), String> {
        let line = self.verify(plan.entity).map_err(|e| e.to_string())?;
        let doc = self.generate(plan.entity, line)?;
        self.insert_doc(plan.entity, line, &doc)
    }

    /// Ask the generator for a comment using the live buffer around `line`.
    fn generate(&self, entity: &Entity, line: usize) -> Result<Vec<String>, String> {
        let mut current = entity.clone();
        current.line = line;
        let context = self.buffer.context(line, self.engine.context_lines);
        let request = GenerationRequest {
            entity: &current,
            context: &context,
        };
        let text = self
            .generator
            .generate(&request)
            .map_err(|e| e.to_string())?;
        sanitize(&text, &self.engine.rules)
            .ok_or_else(|| format!("{} returned no usable comment", self.generator.name()))
    }

    fn insert_doc(&mut self, entity: &Entity, line: usize, doc: &[String]) -> Result<(), String> {
        let indent = entity.indentation();
        let lines: Vec<String> = doc
            .iter()
            .map(|text| {
                if text.starts_with('*') {
                    format!("{indent} {text}")
                } else {
                    format!("{indent}{text}")
                }
            })
            .collect();
        let count = self.buffer.insert(line, &lines).map_err(|e| e.to_string())?;
        self.shift_down(line, count);
        Ok(())
    }

    fn record(
        &mut self,
        plan: &Plan<'_>,
        kinds: &[IssueKind],
        action: FixAction,
        result: Result<(), String>,
    ) {
        let entity = plan.entity;
        match result {
            Ok(()) => {
                tracing::debug!(entity = %entity.label(), action = action.as_str(), "applied fix");
                self.applied.push(AppliedFix {
                    entity: entity.label(),
                    line: entity.line,
                    kinds: kinds.to_vec(),
                    action,
                });
            }
            Err(reason) => {
                tracing::warn!(entity = %entity.label(), line = entity.line, %reason, "skipped fix");
                self.skipped.push(SkippedFix {
                    entity: entity.label(),
                    line: entity.line,
                    kinds: kinds.to_vec(),
                    reason,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
