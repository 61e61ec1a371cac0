#![forbid(unsafe_code)]

//! Inline editable date field.
//!
//! State machine: `Display → (tap) → Editing → (submit | focus lost) →
//! Display`. Rejected input reverts silently; there is no error surface.

use menucal_core::{CalendarCommands, CalendarDate};
use tracing::debug;

use crate::focus::FocusToken;

/// Which date component this field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    Year,
    Month,
}

/// Current presentation mode of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    #[default]
    Display,
    Editing,
}

/// One inline year or month editor.
///
/// The field owns its edit state exclusively; it is mutated only through
/// its own input and focus transitions. Recreating the field resets the
/// state.
#[derive(Debug)]
pub struct EditableDateField {
    component: DateComponent,
    bound: CalendarDate,
    mode: FieldMode,
    draft: String,
    focus: FocusToken,
}

impl EditableDateField {
    /// Create a field in display mode bound to the given date.
    #[must_use]
    pub fn new(component: DateComponent, bound: CalendarDate) -> Self {
        Self {
            component,
            bound,
            mode: FieldMode::Display,
            draft: String::new(),
            focus: FocusToken::next(),
        }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// This field's focus token.
    #[inline]
    pub fn focus_token(&self) -> FocusToken {
        self.focus
    }

    /// The currently bound date.
    #[inline]
    pub fn bound_date(&self) -> CalendarDate {
        self.bound
    }

    /// Rebind after external navigation so the display stays current.
    pub fn set_bound_date(&mut self, date: CalendarDate) {
        self.bound = date;
    }

    /// The text shown in display mode.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.component_value().to_string()
    }

    /// Draft text while editing.
    #[inline]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Enter edit mode: snapshot the bound component into the draft and
    /// claim focus. Returns the token the host should move input focus to.
    pub fn begin_edit(&mut self) -> FocusToken {
        self.draft = self.component_value().to_string();
        self.mode = FieldMode::Editing;
        self.focus
    }

    /// Replace the draft text. Free input, no live validation; ignored
    /// outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.mode == FieldMode::Editing {
            self.draft = text.into();
        }
    }

    /// Explicit submit (e.g. the return key).
    pub fn submit(&mut self, calendar: &dyn CalendarCommands) {
        if self.mode == FieldMode::Editing {
            self.commit(calendar);
        }
    }

    /// Focus moved: `focused` is the token now holding input focus, or
    /// `None`. Leaving this field while editing commits, exactly like an
    /// explicit submit.
    pub fn on_focus_changed(&mut self, focused: Option<FocusToken>, calendar: &dyn CalendarCommands) {
        if self.mode == FieldMode::Editing && focused != Some(self.focus) {
            self.commit(calendar);
        }
    }

    fn component_value(&self) -> i32 {
        match self.component {
            DateComponent::Year => self.bound.year,
            DateComponent::Month => i32::from(self.bound.month),
        }
    }

    /// Commit the draft. Always ends in display mode, accepted or not.
    ///
    /// The mode flips to Display before any side effect: navigation may
    /// move focus again, and the resulting focus callback must find the
    /// field already out of edit mode rather than re-entering commit.
    fn commit(&mut self, calendar: &dyn CalendarCommands) {
        self.mode = FieldMode::Display;
        let draft = std::mem::take(&mut self.draft);

        let Ok(value) = draft.trim().parse::<i32>() else {
            debug!(
                target: "menucal.date_field",
                component = ?self.component,
                draft = %draft,
                "edit discarded: not an integer"
            );
            return;
        };

        let rebuilt = match self.component {
            DateComponent::Month => {
                if !(1..=12).contains(&value) {
                    debug!(
                        target: "menucal.date_field",
                        month = value,
                        "edit discarded: month out of range"
                    );
                    return;
                }
                CalendarDate::new(self.bound.year, value as u8, self.bound.day)
            }
            DateComponent::Year => CalendarDate::new(value, self.bound.month, self.bound.day),
        };

        self.bound = rebuilt;
        calendar.navigate_to_month(rebuilt.year, rebuilt.month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records navigation requests; the other commands are collaborator
    /// surface the field never calls.
    #[derive(Default)]
    struct RecordingCalendar {
        navigations: RefCell<Vec<(i32, u8)>>,
        resets: RefCell<u32>,
    }

    impl CalendarCommands for RecordingCalendar {
        fn reset_to_current_day(&self) {
            *self.resets.borrow_mut() += 1;
        }
        fn navigate_to_month(&self, year: i32, month: u8) {
            self.navigations.borrow_mut().push((year, month));
        }
        fn navigate_previous_month(&self) {}
        fn navigate_next_month(&self) {}
    }

    fn date() -> CalendarDate {
        CalendarDate::new(2025, 9, 28)
    }

    #[test]
    fn begin_edit_snapshots_component() {
        let mut year = EditableDateField::new(DateComponent::Year, date());
        let token = year.begin_edit();
        assert_eq!(year.mode(), FieldMode::Editing);
        assert_eq!(year.draft(), "2025");
        assert_eq!(token, year.focus_token());

        let mut month = EditableDateField::new(DateComponent::Month, date());
        month.begin_edit();
        assert_eq!(month.draft(), "9");
    }

    #[test]
    fn submit_valid_year_navigates() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Year, date());
        field.begin_edit();
        field.set_draft("2030");
        field.submit(&cal);
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(*cal.navigations.borrow(), vec![(2030, 9)]);
        assert_eq!(field.bound_date(), CalendarDate::new(2030, 9, 28));
    }

    #[test]
    fn whitespace_is_trimmed_before_parse() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Month, date());
        field.begin_edit();
        field.set_draft("  11 ");
        field.submit(&cal);
        assert_eq!(*cal.navigations.borrow(), vec![(2025, 11)]);
    }

    #[test]
    fn unparseable_draft_reverts() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Year, date());
        field.begin_edit();
        field.set_draft("20x5");
        field.submit(&cal);
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(field.bound_date(), date());
        assert!(cal.navigations.borrow().is_empty());
    }

    #[test]
    fn month_out_of_range_reverts() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Month, date());
        field.begin_edit();
        field.set_draft("13");
        field.submit(&cal);
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(field.bound_date(), date());
        assert!(cal.navigations.borrow().is_empty());

        field.begin_edit();
        field.set_draft("0");
        field.submit(&cal);
        assert!(cal.navigations.borrow().is_empty());
    }

    #[test]
    fn focus_loss_commits_like_submit() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Year, date());
        field.begin_edit();
        field.set_draft("2030");
        field.on_focus_changed(None, &cal);
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(*cal.navigations.borrow(), vec![(2030, 9)]);
    }

    #[test]
    fn focus_moving_to_other_field_commits() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Month, date());
        let other = FocusToken::next();
        field.begin_edit();
        field.set_draft("3");
        field.on_focus_changed(Some(other), &cal);
        assert_eq!(*cal.navigations.borrow(), vec![(2025, 3)]);
    }

    #[test]
    fn focus_staying_on_field_does_not_commit() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Month, date());
        let token = field.begin_edit();
        field.set_draft("3");
        field.on_focus_changed(Some(token), &cal);
        assert_eq!(field.mode(), FieldMode::Editing);
        assert!(cal.navigations.borrow().is_empty());
    }

    #[test]
    fn focus_loss_in_display_mode_is_a_noop() {
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Year, date());
        field.on_focus_changed(None, &cal);
        assert!(cal.navigations.borrow().is_empty());
    }

    #[test]
    fn commit_does_not_retrigger_from_focus_fallout() {
        // Navigation may move focus again; the focus callback that follows
        // must find the field already in display mode and commit nothing.
        let cal = RecordingCalendar::default();
        let mut field = EditableDateField::new(DateComponent::Year, date());
        field.begin_edit();
        field.set_draft("2031");
        field.submit(&cal);
        field.on_focus_changed(None, &cal);
        assert_eq!(cal.navigations.borrow().len(), 1);
    }

    #[test]
    fn display_text_tracks_bound_date() {
        let mut field = EditableDateField::new(DateComponent::Month, date());
        assert_eq!(field.display_text(), "9");
        field.set_bound_date(CalendarDate::new(2025, 10, 1));
        assert_eq!(field.display_text(), "10");
    }

    proptest::proptest! {
        #[test]
        fn arbitrary_month_drafts_navigate_only_in_range(draft in "\\PC{0,8}") {
            let cal = RecordingCalendar::default();
            let mut field = EditableDateField::new(DateComponent::Month, date());
            field.begin_edit();
            field.set_draft(draft.clone());
            field.submit(&cal);

            proptest::prop_assert_eq!(field.mode(), FieldMode::Display);
            let navigations = cal.navigations.borrow();
            match draft.trim().parse::<i32>() {
                Ok(m) if (1..=12).contains(&m) => {
                    proptest::prop_assert_eq!(&*navigations, &vec![(2025, m as u8)]);
                }
                _ => proptest::prop_assert!(navigations.is_empty()),
            }
        }
    }
}
