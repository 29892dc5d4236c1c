//! # Selection Commit
//!
//! Persists confirmed assembly-option selections onto a live order form.
//!
//! Selections are grouped by option type and written one group at a time
//! through the assembly options endpoint, under the slot key
//! `{prefix}_{type}`. The write path is best-effort: a failing group is
//! logged and skipped, and the remaining groups are still attempted. An
//! item that is no longer present on the order form is skipped the same
//! way. Callers that need to know what landed re-read the order form.

use crate::domain::entities::OrderTree;
use crate::domain::value_objects::ItemId;
use crate::infrastructure::checkout::{
    AssemblyOptionInput, AssemblyOptionsBody, CheckoutGateway, OrderFormSnapshot,
};
use std::sync::Arc;

/// One confirmed selection, tagged with the option type that determines
/// its slot key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblySelection {
    /// Option type composed into the persisted slot key.
    pub option_type: String,
    /// The selection itself.
    pub item: AssemblyOptionInput,
}

impl AssemblySelection {
    /// Creates a selection.
    #[must_use]
    pub fn new(option_type: impl Into<String>, item: AssemblyOptionInput) -> Self {
        Self {
            option_type: option_type.into(),
            item,
        }
    }
}

/// All confirmed selections for one order-form item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelections {
    /// Catalog identifier of the father item.
    pub id: ItemId,
    /// Selections to persist under the father.
    pub selections: Vec<AssemblySelection>,
}

impl ItemSelections {
    /// Creates the selection set for one item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, selections: Vec<AssemblySelection>) -> Self {
        Self {
            id: id.into(),
            selections,
        }
    }
}

/// Port computing which selections to attach and detach when reconciling
/// a father item's current children against a desired configuration.
pub trait OptionsDiffProvider: Send + Sync {
    /// Selections present in the desired configuration but not on the tree.
    fn added_options(&self, tree: &OrderTree, father_index: usize) -> Vec<AssemblySelection>;

    /// Selections present on the tree but absent from the desired
    /// configuration.
    fn removed_options(&self, tree: &OrderTree, father_index: usize) -> Vec<AssemblySelection>;
}

/// Writes selections onto an order form, one option-type group at a time.
pub struct SelectionCommitter {
    checkout: Arc<dyn CheckoutGateway>,
    slot_key_prefix: String,
}

impl SelectionCommitter {
    /// Creates a committer over the given gateway and slot-key prefix.
    #[must_use]
    pub fn new(checkout: Arc<dyn CheckoutGateway>, slot_key_prefix: impl Into<String>) -> Self {
        Self {
            checkout,
            slot_key_prefix: slot_key_prefix.into(),
        }
    }

    fn slot_key(&self, option_type: &str) -> String {
        format!("{}_{}", self.slot_key_prefix, option_type)
    }

    /// Persists the given selections onto the order form.
    ///
    /// Groups are written sequentially in first-seen order. Failures never
    /// surface: a group that the checkout service rejects is logged and
    /// skipped, as is an item missing from the snapshot.
    pub async fn commit_selections(
        &self,
        snapshot: &OrderFormSnapshot,
        batch: &[ItemSelections],
    ) {
        for item in batch {
            let Some(index) = snapshot.position_of(&item.id) else {
                tracing::warn!(item = %item.id, "item absent from order form, skipping selections");
                continue;
            };

            for (option_type, inputs) in group_by_type(&item.selections) {
                let slot_key = self.slot_key(&option_type);
                let body = AssemblyOptionsBody::attaching(inputs);
                if let Err(error) = self
                    .checkout
                    .add_assembly_options(snapshot.order_form_id(), index, &slot_key, &body)
                    .await
                {
                    tracing::warn!(
                        item = %item.id,
                        slot_key = %slot_key,
                        %error,
                        "failed to persist selection group"
                    );
                }
            }
        }
    }

    /// Reconciles every father item on the tree against a desired
    /// configuration, detaching stale selections and attaching new ones.
    ///
    /// Shares the write path's tolerance: each attach and detach is
    /// independent, and failures are logged and skipped.
    pub async fn sync_selections(
        &self,
        snapshot: &OrderFormSnapshot,
        tree: &OrderTree,
        diff: &dyn OptionsDiffProvider,
    ) {
        for (father_index, father) in tree.fathers() {
            let Some(index) = snapshot.position_of(&father.id) else {
                tracing::warn!(item = %father.id, "item absent from order form, skipping sync");
                continue;
            };

            for (option_type, inputs) in group_by_type(&diff.removed_options(tree, father_index)) {
                let slot_key = self.slot_key(&option_type);
                let body = AssemblyOptionsBody::detaching(inputs);
                if let Err(error) = self
                    .checkout
                    .remove_assembly_options(snapshot.order_form_id(), index, &slot_key, &body)
                    .await
                {
                    tracing::warn!(
                        item = %father.id,
                        slot_key = %slot_key,
                        %error,
                        "failed to detach selection group"
                    );
                }
            }

            for (option_type, inputs) in group_by_type(&diff.added_options(tree, father_index)) {
                let slot_key = self.slot_key(&option_type);
                let body = AssemblyOptionsBody::attaching(inputs);
                if let Err(error) = self
                    .checkout
                    .add_assembly_options(snapshot.order_form_id(), index, &slot_key, &body)
                    .await
                {
                    tracing::warn!(
                        item = %father.id,
                        slot_key = %slot_key,
                        %error,
                        "failed to attach selection group"
                    );
                }
            }
        }
    }
}

/// Groups selections by option type, preserving first-seen group order and
/// in-group selection order.
fn group_by_type(selections: &[AssemblySelection]) -> Vec<(String, Vec<AssemblyOptionInput>)> {
    let mut groups: Vec<(String, Vec<AssemblyOptionInput>)> = Vec::new();
    for selection in selections {
        match groups
            .iter_mut()
            .find(|(option_type, _)| option_type == &selection.option_type)
        {
            Some((_, items)) => items.push(selection.item.clone()),
            None => groups.push((
                selection.option_type.clone(),
                vec![selection.item.clone()],
            )),
        }
    }
    groups
}
