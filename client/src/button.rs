//! Save and apply controls and their visual states.
//!
//! Job cards and the job detail page style the same control differently.
//! Both styles live in one table so the view is always derived from the
//! confirmed state rather than patched in place.

use std::collections::BTreeSet;

use common::markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    Save,
    Apply,
}

impl ActionKind {
    pub fn state_attr(self) -> &'static str {
        match self {
            ActionKind::Save => markup::SAVED_ATTR,
            ActionKind::Apply => markup::APPLIED_ATTR,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ActionKind::Save => markup::SAVE_CLASS,
            ActionKind::Apply => markup::APPLY_CLASS,
        }
    }
}

/// Which page layout a control was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Card,
    Detail,
}

struct Style {
    icon_on: &'static str,
    icon_off: &'static str,
    label_on: &'static str,
    label_off: &'static str,
    classes_on: &'static [&'static str],
    classes_off: &'static [&'static str],
}

fn style(surface: Surface, kind: ActionKind) -> &'static Style {
    static CARD_SAVE: Style = Style {
        icon_on: "fas fa-bookmark mr-2 text-blue-600",
        icon_off: "far fa-bookmark mr-2",
        label_on: "Saved",
        label_off: "Save Job",
        classes_on: &["bg-green-100", "text-green-700"],
        classes_off: &[],
    };
    static CARD_APPLY: Style = Style {
        icon_on: "fas fa-check mr-2",
        icon_off: "fas fa-paper-plane mr-2",
        label_on: "Applied",
        label_off: "Apply Now",
        classes_on: &["bg-green-600"],
        classes_off: &["bg-blue-600", "hover:bg-blue-700"],
    };
    static DETAIL_SAVE: Style = Style {
        icon_on: "fas fa-bookmark mr-3 text-blue-600",
        icon_off: "far fa-bookmark mr-3",
        label_on: "Saved",
        label_off: "Save for Later",
        classes_on: &["border-blue-600", "text-blue-600"],
        classes_off: &["text-gray-700", "border-gray-300"],
    };
    static DETAIL_APPLY: Style = Style {
        icon_on: "fas fa-check mr-3",
        icon_off: "fas fa-paper-plane mr-3",
        label_on: "Applied",
        label_off: "Apply Now",
        classes_on: &["bg-green-600", "hover:bg-green-700"],
        classes_off: &["bg-blue-600", "hover:bg-blue-700"],
    };

    match (surface, kind) {
        (Surface::Card, ActionKind::Save) => &CARD_SAVE,
        (Surface::Card, ActionKind::Apply) => &CARD_APPLY,
        (Surface::Detail, ActionKind::Save) => &DETAIL_SAVE,
        (Surface::Detail, ActionKind::Apply) => &DETAIL_APPLY,
    }
}

/// What the control currently looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub icon: &'static str,
    pub label: &'static str,
    pub classes: BTreeSet<String>,
    pub disabled: bool,
}

impl ButtonView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// One job's save or apply control.
#[derive(Debug, Clone)]
pub struct JobActionButton {
    job_id: String,
    kind: ActionKind,
    surface: Surface,
    confirmed: bool,
    in_flight: bool,
    view: ButtonView,
}

impl JobActionButton {
    /// `base_classes` are the classes the page rendered the control with.
    pub fn new(
        job_id: impl Into<String>,
        kind: ActionKind,
        surface: Surface,
        confirmed: bool,
        base_classes: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut button = Self {
            job_id: job_id.into(),
            kind,
            surface,
            confirmed,
            in_flight: false,
            view: ButtonView {
                icon: "",
                label: "",
                classes: base_classes.into_iter().collect(),
                disabled: false,
            },
        };
        button.refresh();
        button
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Saved or applied, as last confirmed by the server.
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn view(&self) -> &ButtonView {
        &self.view
    }

    /// Applied controls stay disabled; every control is disabled mid-flight.
    pub fn is_clickable(&self) -> bool {
        !self.view.disabled
    }

    pub(crate) fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
        self.refresh();
    }

    pub(crate) fn confirm(&mut self, state: bool) {
        self.confirmed = state;
        self.refresh();
    }

    fn refresh(&mut self) {
        let style = style(self.surface, self.kind);
        let (add, remove) = if self.confirmed {
            (style.classes_on, style.classes_off)
        } else {
            (style.classes_off, style.classes_on)
        };
        for class in remove {
            self.view.classes.remove(*class);
        }
        for class in add {
            self.view.classes.insert((*class).to_string());
        }
        self.view.icon = if self.confirmed { style.icon_on } else { style.icon_off };
        self.view.label = if self.confirmed { style.label_on } else { style.label_off };
        self.view.disabled = self.in_flight || (self.kind == ActionKind::Apply && self.confirmed);
    }

    /// Markup for the control, mirroring the confirmed state attribute.
    pub fn render(&self) -> String {
        let classes = self.view.classes.iter().cloned().collect::<Vec<_>>().join(" ");
        let disabled = if self.view.disabled { " disabled" } else { "" };
        format!(
            r#"<button class="{classes}" {id_attr}="{id}" {state_attr}="{state}"{disabled}><i class="{icon}"></i> <span>{label}</span></button>"#,
            classes = markup::escape(&classes),
            id_attr = markup::JOB_ID_ATTR,
            id = markup::escape(&self.job_id),
            state_attr = self.kind.state_attr(),
            state = self.confirmed,
            icon = self.view.icon,
            label = self.view.label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_card_save_confirmed_view() {
        let mut button = JobActionButton::new(
            "42",
            ActionKind::Save,
            Surface::Card,
            false,
            classes(&["save-job-btn"]),
        );
        assert_eq!(button.view().label, "Save Job");
        assert!(!button.view().has_class("bg-green-100"));

        button.confirm(true);
        assert_eq!(button.view().label, "Saved");
        assert_eq!(button.view().icon, "fas fa-bookmark mr-2 text-blue-600");
        assert!(button.view().has_class("bg-green-100"));
        assert!(button.view().has_class("text-green-700"));
        assert!(button.view().has_class("save-job-btn"));
        assert!(button.render().contains(r#"data-saved="true""#));
    }

    #[test]
    fn test_detail_save_swaps_border_classes() {
        let mut button = JobActionButton::new(
            "42",
            ActionKind::Save,
            Surface::Detail,
            true,
            classes(&["save-job-btn", "text-gray-700", "border-gray-300"]),
        );
        assert!(button.view().has_class("border-blue-600"));
        assert!(!button.view().has_class("border-gray-300"));

        button.confirm(false);
        assert_eq!(button.view().label, "Save for Later");
        assert!(button.view().has_class("text-gray-700"));
        assert!(!button.view().has_class("text-blue-600"));
    }

    #[test]
    fn test_applied_control_is_disabled() {
        let mut button = JobActionButton::new(
            "9",
            ActionKind::Apply,
            Surface::Detail,
            false,
            classes(&["apply-job-btn", "bg-blue-600"]),
        );
        assert!(button.is_clickable());

        button.confirm(true);
        assert!(!button.is_clickable());
        assert!(button.view().has_class("bg-green-600"));
        assert!(!button.view().has_class("bg-blue-600"));
        assert!(button.render().ends_with(r#"data-applied="true" disabled><i class="fas fa-check mr-3"></i> <span>Applied</span></button>"#));
    }

    #[test]
    fn test_in_flight_disables_then_restores() {
        let mut button =
            JobActionButton::new("1", ActionKind::Save, Surface::Card, false, Vec::new());
        button.set_in_flight(true);
        assert!(!button.is_clickable());
        button.set_in_flight(false);
        assert!(button.is_clickable());
        assert!(!button.confirmed());
    }
}
