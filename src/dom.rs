//! DOM application layer - guarded writes into the host page.
//!
//! Every element the page contract names is optional: each lookup is guarded
//! and a missing element is a silent no-op, never an error. Section content
//! lands in one `inner_html` assignment per container.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::model::{PageData, VillageRecord};
use crate::render::{self, Section, COMMUNAL_TASKS, GREEN_ACTIONS, TRADE_OFFERS};
use crate::widgets;

/// Marker class carried by the nav toggle and panel while the menu is open.
pub const OPEN_CLASS: &str = "open";

const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
const NAV_LINKS_SELECTOR: &str = ".nav-links";
const NAV_ITEM_SELECTOR: &str = "a, span";

const PROGRESS_BAR_ID: &str = "progress-bar";
const PROGRESS_TEXT_ID: &str = "progress-text";
const CO2_PIE_SELECTOR: &str = ".co2-pie";
const CO2_TEXT_ID: &str = "co2-text";

// ============================================================================
// Page application
// ============================================================================

/// Apply the outcome of a data load. A failed load (`None`) touches
/// nothing: every container and widget keeps its markup defaults.
pub fn apply_outcome(document: &Document, outcome: Option<VillageRecord>) {
    let Some(record) = outcome else {
        return;
    };
    apply_page(document, &PageData::new(record));
}

/// Apply a loaded record to the page: widgets first, then the three
/// sections, in fixed order with no suspension between them.
pub fn apply_page(document: &Document, data: &PageData) {
    apply_widgets(document, data);
    apply_sections(document, data);
}

/// Render all three list sections into their containers.
pub fn apply_sections(document: &Document, data: &PageData) {
    apply_section(document, &GREEN_ACTIONS, data.record.green_actions.as_deref());
    apply_section(document, &TRADE_OFFERS, data.record.trade_offers.as_deref());
    apply_section(document, &COMMUNAL_TASKS, data.record.tasks.as_deref());
}

fn apply_section<T>(document: &Document, section: &Section<T>, items: Option<&[T]>) {
    let Some(container) = document.get_element_by_id(section.container_id) else {
        return;
    };
    let Some(html) = render::render_section(section, items) else {
        return;
    };
    container.set_inner_html(&html);
}

// ============================================================================
// Widgets
// ============================================================================

/// Update the community-points bar and the CO₂ pie.
pub fn apply_widgets(document: &Document, data: &PageData) {
    apply_progress(document, data.record.community_points.unwrap_or(0.0));
    apply_co2(document);
}

fn apply_progress(document: &Document, points: f64) {
    // Bar and label update together or not at all.
    let (Some(bar), Some(text)) = (
        document.get_element_by_id(PROGRESS_BAR_ID),
        document.get_element_by_id(PROGRESS_TEXT_ID),
    ) else {
        return;
    };

    if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
        let _ = bar
            .style()
            .set_property("width", &widgets::progress_width_css(points));
    }
    if let Some(text) = text.dyn_ref::<HtmlElement>() {
        text.set_inner_text(&widgets::progress_label(points));
    }
}

fn apply_co2(document: &Document) {
    if let Ok(Some(pie)) = document.query_selector(CO2_PIE_SELECTOR) {
        if let Some(pie) = pie.dyn_ref::<HtmlElement>() {
            let _ = pie
                .style()
                .set_property("background", &widgets::co2_gradient_css());
        }
    }

    if let Some(text) = document.get_element_by_id(CO2_TEXT_ID) {
        if let Some(text) = text.dyn_ref::<HtmlElement>() {
            text.set_inner_text(&widgets::co2_label());
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Wire the mobile navigation toggle.
///
/// The button click flips the `open` marker on both the button and the link
/// panel; clicking any link or label inside the panel removes it from both.
/// If either element is missing, the feature is silently not wired.
/// Listeners live for the page lifetime, so the closures are forgotten.
pub fn wire_navigation(document: &Document) {
    let Ok(Some(toggle)) = document.query_selector(MENU_TOGGLE_SELECTOR) else {
        return;
    };
    let Ok(Some(panel)) = document.query_selector(NAV_LINKS_SELECTOR) else {
        return;
    };

    {
        let toggle_classes = toggle.class_list();
        let panel_classes = panel.class_list();
        let on_toggle = Closure::<dyn FnMut()>::new(move || {
            let _ = panel_classes.toggle(OPEN_CLASS);
            let _ = toggle_classes.toggle(OPEN_CLASS);
        });
        let _ = toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
        on_toggle.forget();
    }

    let Ok(items) = panel.query_selector_all(NAV_ITEM_SELECTOR) else {
        return;
    };
    for index in 0..items.length() {
        let Some(node) = items.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<Element>() else {
            continue;
        };

        let toggle_classes = toggle.class_list();
        let panel_classes = panel.class_list();
        let on_item = Closure::<dyn FnMut()>::new(move || {
            let _ = panel_classes.remove_1(OPEN_CLASS);
            let _ = toggle_classes.remove_1(OPEN_CLASS);
        });
        let _ = item.add_event_listener_with_callback("click", on_item.as_ref().unchecked_ref());
        on_item.forget();
    }
}

// ============================================================================
// Browser tests
// ============================================================================
