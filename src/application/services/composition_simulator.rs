//! # Composition Simulator
//!
//! Resolves the price impact of a prospective assembly-option selection.
//!
//! Given a father item's declared offerings, the simulator rebuilds the
//! default ("basic") configuration tree, grafts the prospective selection
//! onto it under the slot's cardinality rules, submits the candidate tree
//! to the checkout simulation endpoint, and reads the selection's resolved
//! selling price off the response.
//!
//! A slot that cannot legally accommodate the selection (a full TOGGLE slot
//! with no optional occupant to evict, a MULTIPLE slot whose siblings
//! cannot shrink enough) is a normal "cannot add" outcome: the simulator
//! returns `Ok(None)` and never contacts the checkout service. Simulation
//! failures, by contrast, propagate: the read path fails loud.

use crate::application::error::{EngineError, EngineResult};
use crate::domain::entities::{AssemblyOptionOffering, CompositionItem, LineItem};
use crate::domain::value_objects::{Cents, ChoiceType, ItemId};
use crate::infrastructure::checkout::{CheckoutGateway, SimulationItem, SimulationRequest};
use std::collections::HashMap;
use std::sync::Arc;

/// Port classifying how a slot reconciles siblings.
///
/// The classification rule lives outside this engine; implementations are
/// expected to wrap whatever metadata the surrounding platform exposes.
pub trait ChoiceClassifier: Send + Sync {
    /// Returns the reconciliation rule for the given slot.
    fn classify(&self, offering: &AssemblyOptionOffering) -> ChoiceType;
}

/// Classifier backed by an explicit slot-name table.
///
/// Ships so that wiring and tests have a concrete implementation; its rules
/// are configuration, not a claim about any platform's classifier.
#[derive(Debug, Clone)]
pub struct ByNameClassifier {
    rules: HashMap<String, ChoiceType>,
    fallback: ChoiceType,
}

impl ByNameClassifier {
    /// Creates a classifier from a name table and a fallback for unlisted
    /// slots.
    #[must_use]
    pub fn new(rules: HashMap<String, ChoiceType>, fallback: ChoiceType) -> Self {
        Self { rules, fallback }
    }
}

impl ChoiceClassifier for ByNameClassifier {
    fn classify(&self, offering: &AssemblyOptionOffering) -> ChoiceType {
        self.rules
            .get(offering.name.as_str())
            .copied()
            .unwrap_or(self.fallback)
    }
}

/// Rebuilds the father's default configuration as a flat candidate tree.
///
/// Entry 0 is the father itself at quantity one; every composition item
/// with a positive `initial_quantity` is attached under its offering's
/// slot binding.
#[must_use]
pub fn basic_tree(father: &LineItem, offerings: &[AssemblyOptionOffering]) -> Vec<SimulationItem> {
    let mut tree = vec![SimulationItem::root(
        father.id.clone(),
        1,
        father.seller.clone(),
    )];

    for offering in offerings {
        let Some(composition) = &offering.composition else {
            continue;
        };
        for item in &composition.items {
            if item.initial_quantity > 0 {
                tree.push(SimulationItem::child(
                    item.id.clone(),
                    item.initial_quantity,
                    item.seller.clone(),
                    0,
                    offering.id.clone(),
                ));
            }
        }
    }

    tree
}

/// Finds the first slot occupant with a zero catalog minimum, the only
/// kind a TOGGLE slot may evict to make room.
fn evictable_occupant(tree: &[SimulationItem], option: &AssemblyOptionOffering) -> Option<usize> {
    tree.iter().position(|entry| {
        entry.occupies_slot(&option.id)
            && option
                .composition_item(&entry.id)
                .is_some_and(CompositionItem::is_optional)
    })
}

/// Grafts a prospective selection onto the basic tree under the slot's
/// cardinality rule.
///
/// Returns `None` when no valid tree exists: the offering is informational,
/// a full TOGGLE slot has no optional occupant to evict, or a MULTIPLE
/// slot cannot shrink its siblings enough to fit the new child.
#[must_use]
pub fn candidate_tree(
    basic: &[SimulationItem],
    option: &AssemblyOptionOffering,
    item: &CompositionItem,
    choice: ChoiceType,
) -> Option<Vec<SimulationItem>> {
    let composition = option.composition.as_ref()?;
    let new_child = SimulationItem::child(
        item.id.clone(),
        item.min_quantity.max(1),
        item.seller.clone(),
        0,
        option.id.clone(),
    );

    match choice {
        ChoiceType::Single => {
            let father = basic.first()?.clone();
            Some(vec![father, new_child])
        }
        ChoiceType::Toggle => {
            let mut tree = basic.to_vec();
            let occupants = tree
                .iter()
                .filter(|entry| entry.occupies_slot(&option.id))
                .count() as u32;

            if occupants >= composition.max_quantity {
                let evict = evictable_occupant(&tree, option)?;
                tree.remove(evict);
            }

            // The cap also bounds the summed slot quantity: occupants can
            // carry quantity above one, so keep evicting optional siblings
            // until the new child fits.
            let mut slot_sum: u32 = tree
                .iter()
                .filter(|entry| entry.occupies_slot(&option.id))
                .map(|entry| entry.quantity)
                .sum::<u32>()
                + new_child.quantity;
            while slot_sum > composition.max_quantity {
                let evict = evictable_occupant(&tree, option)?;
                slot_sum -= tree.remove(evict).quantity;
            }

            tree.push(new_child);
            Some(tree)
        }
        ChoiceType::Multiple => {
            let mut tree = basic.to_vec();
            let max = composition.max_quantity;
            let mut slot_sum: u32 = tree
                .iter()
                .filter(|entry| entry.occupies_slot(&option.id))
                .map(|entry| entry.quantity)
                .sum::<u32>()
                + new_child.quantity;

            if slot_sum > max {
                for entry in tree
                    .iter_mut()
                    .filter(|entry| entry.occupies_slot(&option.id))
                {
                    if slot_sum <= max {
                        break;
                    }
                    let floor = option
                        .composition_item(&entry.id)
                        .map_or(0, |candidate| candidate.min_quantity);
                    let give = entry.quantity.saturating_sub(floor).min(slot_sum - max);
                    entry.quantity -= give;
                    slot_sum -= give;
                }
                if slot_sum > max {
                    return None;
                }
                tree.retain(|entry| !(entry.occupies_slot(&option.id) && entry.quantity == 0));
            }

            tree.push(new_child);
            Some(tree)
        }
    }
}

/// Engine resolving prospective selection prices through checkout
/// simulation.
pub struct CompositionSimulator {
    checkout: Arc<dyn CheckoutGateway>,
    classifier: Arc<dyn ChoiceClassifier>,
}

impl CompositionSimulator {
    /// Creates a simulator over the given checkout gateway and classifier.
    #[must_use]
    pub fn new(checkout: Arc<dyn CheckoutGateway>, classifier: Arc<dyn ChoiceClassifier>) -> Self {
        Self {
            checkout,
            classifier,
        }
    }

    /// Resolves the selling price a prospective selection would have.
    ///
    /// Returns `Ok(None)` when the slot cannot legally accommodate the
    /// selection.
    ///
    /// # Errors
    ///
    /// Propagates checkout simulation failures, and returns
    /// [`EngineError::ItemNotInSimulation`] when the simulated order form
    /// does not contain the submitted selection.
    pub async fn resolve_option_price(
        &self,
        father: &LineItem,
        offerings: &[AssemblyOptionOffering],
        option: &AssemblyOptionOffering,
        item: &CompositionItem,
    ) -> EngineResult<Option<Cents>> {
        let basic = basic_tree(father, offerings);

        // Already part of the default configuration: price the basic tree
        // as-is.
        let already_attached = basic
            .iter()
            .any(|entry| entry.id == item.id && entry.occupies_slot(&option.id));

        let tree = if already_attached {
            basic
        } else {
            let choice = self.classifier.classify(option);
            match candidate_tree(&basic, option, item, choice) {
                Some(tree) => tree,
                None => {
                    tracing::debug!(
                        item = %item.id,
                        slot = %option.id,
                        choice = %choice,
                        "no valid tree for prospective selection"
                    );
                    return Ok(None);
                }
            }
        };

        let snapshot = self.checkout.simulate(&SimulationRequest::new(tree)).await?;
        let price = snapshot
            .item_price(&item.id, &option.id)
            .ok_or_else(|| {
                EngineError::item_not_in_simulation(item.id.clone(), option.id.clone())
            })?;

        Ok(Some(price))
    }

    /// Resolves prices for several prospective selections of one slot
    /// concurrently.
    ///
    /// Each result is keyed by its composition item id; completion order is
    /// irrelevant and failures are per-item.
    pub async fn resolve_option_prices(
        &self,
        father: &LineItem,
        offerings: &[AssemblyOptionOffering],
        option: &AssemblyOptionOffering,
        items: &[CompositionItem],
    ) -> Vec<(ItemId, EngineResult<Option<Cents>>)> {
        let resolutions = items.iter().map(|item| async move {
            (
                item.id.clone(),
                self.resolve_option_price(father, offerings, option, item)
                    .await,
            )
        });

        futures::future::join_all(resolutions).await
    }
}
