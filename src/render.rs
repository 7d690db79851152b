//! Section rendering - list entries to card markup.
//!
//! One generic routine drives all three page sections (green actions, trade
//! offers, communal tasks); each section is a [`Section`] descriptor naming
//! its container, its empty-list placeholder, and its card template. The
//! output is a full HTML batch applied to the container in one assignment,
//! so re-rendering the same list is idempotent and never partially visible.
//!
//! All record fields pass through [`crate::escape::html_text`] before they
//! reach markup.

use crate::escape::html_text;
use crate::model::{Action, Offer, Task};

// ============================================================================
// Fallback literals
// ============================================================================

pub const FALLBACK_DESCRIPTION: &str = "No description";
pub const FALLBACK_SELLER: &str = "N/A";
pub const FALLBACK_POINTS: f64 = 0.0;

// ============================================================================
// Section descriptors
// ============================================================================

/// Everything the renderer needs to know about one page section.
pub struct Section<T> {
    /// Id of the container element this section renders into.
    pub container_id: &'static str,
    /// Placeholder shown when the list is present but empty.
    pub empty_message: &'static str,
    /// Card template for one list entry.
    pub card: fn(&T) -> String,
}

pub const GREEN_ACTIONS: Section<Action> = Section {
    container_id: "green-actions-container",
    empty_message: "No green actions recorded yet.",
    card: action_card,
};

pub const TRADE_OFFERS: Section<Offer> = Section {
    container_id: "trade-offers-container",
    empty_message: "No trade offers available at the moment.",
    card: offer_card,
};

pub const COMMUNAL_TASKS: Section<Task> = Section {
    container_id: "communal-tasks-container",
    empty_message: "No communal tasks available at the moment.",
    card: task_card,
};

// ============================================================================
// Generic rendering
// ============================================================================

/// Render a section's full container content.
///
/// Returns `None` when the list is absent from the record - the container is
/// left untouched. An empty list yields the section's placeholder; otherwise
/// one card per entry, concatenated in input order.
pub fn render_section<T>(section: &Section<T>, items: Option<&[T]>) -> Option<String> {
    let items = items?;
    if items.is_empty() {
        return Some(format!(
            r#"<p class="no-data">{}</p>"#,
            section.empty_message
        ));
    }
    Some(items.iter().map(section.card).collect())
}

// ============================================================================
// Card templates
// ============================================================================

fn action_card(action: &Action) -> String {
    let name = html_text(action.name.as_deref().unwrap_or("Unnamed Action"));
    let description = html_text(action.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION));
    let points = action.points.unwrap_or(FALLBACK_POINTS);
    format!(
        concat!(
            r#"<div class="green-action-card">"#,
            r#"<div class="action-icon">🌱</div>"#,
            "<h3>{name}</h3>",
            r#"<p class="description">{description}</p>"#,
            r#"<div class="action-points">"#,
            r#"<span class="points-badge">+{points} points</span>"#,
            "</div></div>"
        ),
        name = name,
        description = description,
        points = points,
    )
}

fn offer_card(offer: &Offer) -> String {
    let name = html_text(offer.name.as_deref().unwrap_or("Unnamed Offer"));
    let description = html_text(offer.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION));
    let points = offer.points.unwrap_or(FALLBACK_POINTS);
    let seller = html_text(offer.seller.as_deref().unwrap_or(FALLBACK_SELLER));
    format!(
        concat!(
            r#"<div class="trade-offer-card">"#,
            "<h3>{name}</h3>",
            r#"<p class="description">{description}</p>"#,
            r#"<div class="offer-details">"#,
            "<p><strong>Points:</strong> {points}</p>",
            "<p><strong>Seller:</strong> {seller}</p>",
            "</div></div>"
        ),
        name = name,
        description = description,
        points = points,
        seller = seller,
    )
}

fn task_card(task: &Task) -> String {
    let name = html_text(task.name.as_deref().unwrap_or("Unnamed Task"));
    let description = html_text(task.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION));
    let points = task.points.unwrap_or(FALLBACK_POINTS);
    format!(
        concat!(
            r#"<div class="task-card">"#,
            "<h3>{name}</h3>",
            r#"<p class="description">{description}</p>"#,
            r#"<div class="task-details">"#,
            "<p><strong>Points:</strong> {points}</p>",
            "</div></div>"
        ),
        name = name,
        description = description,
        points = points,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn action(name: &str, points: f64) -> Action {
        Action {
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            points: Some(points),
        }
    }

    #[test]
    fn absent_list_renders_nothing() {
        assert!(render_section::<Action>(&GREEN_ACTIONS, None).is_none());
        assert!(render_section::<Offer>(&TRADE_OFFERS, None).is_none());
        assert!(render_section::<Task>(&COMMUNAL_TASKS, None).is_none());
    }

    #[test]
    fn empty_list_renders_exact_placeholder() {
        let html = render_section(&GREEN_ACTIONS, Some(&[])).unwrap();
        assert_eq!(
            html,
            r#"<p class="no-data">No green actions recorded yet.</p>"#
        );

        let html = render_section(&TRADE_OFFERS, Some(&[])).unwrap();
        assert_eq!(
            html,
            r#"<p class="no-data">No trade offers available at the moment.</p>"#
        );

        let html = render_section(&COMMUNAL_TASKS, Some(&[])).unwrap();
        assert_eq!(
            html,
            r#"<p class="no-data">No communal tasks available at the moment.</p>"#
        );
    }

    #[test]
    fn renders_one_card_per_entry_in_order() {
        let actions = vec![action("First", 10.0), action("Second", 20.0), action("Third", 30.0)];
        let html = render_section(&GREEN_ACTIONS, Some(&actions)).unwrap();

        assert_eq!(html.matches("green-action-card").count(), 3);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn missing_fields_use_fallback_literals() {
        let html = render_section(&GREEN_ACTIONS, Some(&[Action::default()])).unwrap();
        assert!(html.contains("Unnamed Action"));
        assert!(html.contains("No description"));
        assert!(html.contains("+0 points"));

        let html = render_section(&TRADE_OFFERS, Some(&[Offer::default()])).unwrap();
        assert!(html.contains("Unnamed Offer"));
        assert!(html.contains("No description"));
        assert!(html.contains("<strong>Points:</strong> 0"));
        assert!(html.contains("<strong>Seller:</strong> N/A"));

        let html = render_section(&COMMUNAL_TASKS, Some(&[Task::default()])).unwrap();
        assert!(html.contains("Unnamed Task"));
        assert!(html.contains("No description"));
        assert!(html.contains("<strong>Points:</strong> 0"));
    }

    #[test]
    fn fractional_points_render_verbatim() {
        let html = render_section(&GREEN_ACTIONS, Some(&[action("Cycle to work", 12.5)])).unwrap();
        assert!(html.contains("+12.5 points"));

        let task = Task {
            name: None,
            description: None,
            points: Some(0.5),
        };
        let html = render_section(&COMMUNAL_TASKS, Some(&[task])).unwrap();
        assert!(html.contains("<strong>Points:</strong> 0.5"));
    }

    #[test]
    fn empty_string_fields_render_verbatim() {
        // Fallback literals mask absent fields only; an explicit empty
        // string is kept as supplied.
        let blank = Action {
            name: Some(String::new()),
            description: Some(String::new()),
            points: Some(1.0),
        };
        let html = render_section(&GREEN_ACTIONS, Some(&[blank])).unwrap();
        assert!(html.contains("<h3></h3>"));
        assert!(!html.contains("Unnamed Action"));
        assert!(!html.contains("No description"));
    }

    #[test]
    fn hostile_fields_are_escaped() {
        let hostile = Action {
            name: Some("<img src=x onerror=alert(1)>".to_string()),
            description: Some(r#""quoted" & <b>bold</b>"#.to_string()),
            points: Some(5.0),
        };
        let html = render_section(&GREEN_ACTIONS, Some(&[hostile])).unwrap();

        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; &lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn offer_card_includes_seller() {
        let offer = Offer {
            name: Some("Fresh eggs".to_string()),
            description: None,
            points: Some(20.0),
            seller: Some("Mara".to_string()),
        };
        let html = render_section(&TRADE_OFFERS, Some(&[offer])).unwrap();
        assert!(html.contains("<strong>Seller:</strong> Mara"));
        assert!(html.contains("<strong>Points:</strong> 20"));
    }
}
