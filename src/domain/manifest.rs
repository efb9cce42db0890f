use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::entities::{ManifestOrder, ManifestSummary};
use crate::util::assets;

pub const ITEMS_PER_PAGE: usize = 10;
const MAX_VISIBLE_PAGES: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub code: String,
    pub status: String,
    pub pickup_address: String,
    pub summary: ManifestSummary,
    #[serde(default)]
    pub same_address: Vec<ManifestOrder>,
    #[serde(default)]
    pub other_address: Vec<ManifestOrder>,
    #[serde(default)]
    pub manifested: Vec<ManifestOrder>,
}

impl Manifest {
    /// Sample manifest bundled with the app.
    pub fn bundled() -> &'static Manifest {
        static MANIFEST: OnceLock<Manifest> = OnceLock::new();
        MANIFEST.get_or_init(|| {
            let manifest: Manifest = assets::load_json(assets::MANIFEST_JSON)
                .unwrap_or_else(|err| panic!("bundled manifest is invalid: {err}"));
            tracing::info!(
                code = %manifest.code,
                orders = manifest.same_address.len()
                    + manifest.other_address.len()
                    + manifest.manifested.len(),
                "loaded manifest"
            );
            manifest
        })
    }
}

/// One page of a longer list plus the numbers the pager footer shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first row on this page (0 when empty).
    pub start: usize,
    /// 1-based index of the last row on this page.
    pub end: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn caption(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total_items
        )
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Returns page `page` (1-based, clamped into range) of `items`.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> PageSlice<'_, T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start_index = ((page - 1) * per_page).min(total_items);
    let end_index = (start_index + per_page).min(total_items);

    PageSlice {
        items: &items[start_index..end_index],
        page,
        total_pages,
        total_items,
        start: if total_items == 0 { 0 } else { start_index + 1 },
        end: end_index,
    }
}

/// Page numbers shown in the pager: at most three, centred on the current
/// page except at either end.
pub fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).collect();
    }
    if current <= 2 {
        (1..=MAX_VISIBLE_PAGES).collect()
    } else if current + 1 >= total {
        (total + 1 - MAX_VISIBLE_PAGES..=total).collect()
    } else {
        (current - 1..=current + 1).collect()
    }
}

/// Orders ticked for a bulk "add to manifest", in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSelection {
    ids: Vec<String>,
}

impl OrderSelection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|existing| existing != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn all_selected(&self, orders: &[ManifestOrder]) -> bool {
        !orders.is_empty() && orders.iter().all(|order| self.contains(&order.id))
    }

    /// Deselects `orders` when all of them are already ticked, otherwise
    /// ticks the missing ones.
    pub fn toggle_all(&mut self, orders: &[ManifestOrder]) {
        if self.all_selected(orders) {
            self.ids
                .retain(|id| !orders.iter().any(|order| &order.id == id));
        } else {
            for order in orders {
                if !self.contains(&order.id) {
                    self.ids.push(order.id.clone());
                }
            }
        }
    }

    /// Consumes the selection for a bulk add. Errors with the message shown
    /// to the user when nothing is selected.
    pub fn take_for_bulk_add(&mut self) -> Result<Vec<String>, &'static str> {
        if self.ids.is_empty() {
            return Err("Please select orders to add");
        }
        Ok(std::mem::take(&mut self.ids))
    }
}
