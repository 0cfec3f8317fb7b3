//! Roster screen controller.
//!
//! Owns the student store and routes user intents to it, to the student form,
//! and to the search/pagination state. What is shown is always derived from
//! the store on demand: filter, then sort by name, then paginate.
//!
//! Store mutations that target a missing student are logged and otherwise
//! ignored, so every intent is safe to issue.

use std::sync::Arc;

use log::{info, warn};
use shared::{
    DisplayState, FilterCriteria, Locale, PageSize, RosterView, Student, StudentId,
};

use super::clock::Clock;
use super::errors::RosterError;
use super::pagination::{page_count, PaginationState};
use super::roster_table::RosterTableService;
use super::student_filter::search;
use super::student_form::StudentFormController;
use super::validation::ValidationRules;
use crate::backend::storage::traits::StudentStorage;

pub struct RosterScreenController<S: StudentStorage> {
    store: S,
    criteria: Option<FilterCriteria>,
    pagination: PaginationState,
    form: StudentFormController,
    table: RosterTableService,
    locale: Locale,
}

impl<S: StudentStorage> RosterScreenController<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self::with_settings(
            store,
            clock,
            ValidationRules::default(),
            PageSize::default(),
            Locale::default(),
        )
    }

    pub fn with_settings(
        store: S,
        clock: Arc<dyn Clock>,
        rules: ValidationRules,
        page_size: PageSize,
        locale: Locale,
    ) -> Self {
        Self {
            store,
            criteria: None,
            pagination: PaginationState::new(page_size),
            form: StudentFormController::with_rules(clock, rules),
            table: RosterTableService::for_locale(locale),
            locale,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &StudentFormController {
        &self.form
    }

    /// Field edits go straight to the form
    pub fn form_mut(&mut self) -> &mut StudentFormController {
        &mut self.form
    }

    pub fn criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref()
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        info!("Switching locale to {}", locale.code());
        self.locale = locale;
        self.table = RosterTableService::for_locale(locale);
    }

    pub fn open_create_form(&mut self) {
        self.form.open_create();
    }

    /// Open the edit form for a student that exists and is not excluded
    pub fn open_edit_form(&mut self, id: StudentId) -> Result<(), RosterError> {
        let student = self.store.get(id).ok_or(RosterError::NotFound(id))?;
        if student.excluded {
            warn!("Refusing to edit excluded student: {}", id);
            return Err(RosterError::EditExcluded(id));
        }
        self.form.open_edit(&student);
        Ok(())
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form.
    ///
    /// Returns the saved student, or `None` when the edited student vanished
    /// from the store (the form is closed either way).
    pub fn submit_form(&mut self) -> Result<Option<Student>, RosterError> {
        match self.form.submit(&mut self.store) {
            Ok(student) => Ok(Some(student)),
            Err(RosterError::NotFound(id)) => {
                warn!("Submitted changes for missing student {} were dropped", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Flip a student's exclusion; unknown ids are ignored
    pub fn toggle_exclusion(&mut self, id: StudentId) -> Option<Student> {
        match self.store.toggle_exclusion(id) {
            Ok(student) => Some(student),
            Err(e) => {
                warn!("Ignoring exclusion toggle: {}", e);
                None
            }
        }
    }

    /// Apply new search criteria and return to the first page.
    /// Empty criteria behave exactly like a reset.
    pub fn search(&mut self, criteria: FilterCriteria) {
        if criteria.is_empty() {
            self.reset_filters();
            return;
        }

        self.criteria = Some(criteria);
        self.pagination.first_page();
        info!("Search matched {} students", self.displayed_students().len());
    }

    /// Clear the criteria and show every student again
    pub fn reset_filters(&mut self) {
        self.criteria = None;
        self.pagination.first_page();
        info!("Filters reset");
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.pagination.set_page(page_index);
    }

    /// Change rows per page (5, 10 or 25); returns to the first page
    pub fn set_page_size(&mut self, rows: usize) -> Result<(), RosterError> {
        let page_size = PageSize::try_from(rows).map_err(|_| RosterError::UnsupportedPageSize(rows))?;
        self.pagination.set_page_size(page_size);
        Ok(())
    }

    /// All students that pass the active filter, sorted by name
    pub fn displayed_students(&self) -> Vec<Student> {
        let criteria = self.criteria.clone().unwrap_or_default();
        search(&self.store.list(), &criteria)
    }

    /// True when an active search matches nothing in a non-empty store
    pub fn is_empty_result(&self) -> bool {
        self.display_state() == DisplayState::NoResults
    }

    pub fn display_state(&self) -> DisplayState {
        self.display_state_for(&self.displayed_students())
    }

    fn display_state_for(&self, displayed: &[Student]) -> DisplayState {
        if self.store.is_empty() {
            DisplayState::StoreEmpty
        } else if self.criteria.is_some() && displayed.is_empty() {
            DisplayState::NoResults
        } else {
            DisplayState::Rows
        }
    }

    /// Everything the screen shows right now
    pub fn view(&self) -> RosterView {
        let displayed = self.displayed_students();
        let page_size = self.pagination.page_size();

        RosterView {
            display_state: self.display_state_for(&displayed),
            rows: self.table.format_rows(self.pagination.visible(&displayed)),
            total: displayed.len(),
            page_index: self.pagination.page_index(),
            page_size,
            page_count: page_count(displayed.len(), page_size.rows()),
            page_size_options: PageSize::ALL.to_vec(),
            filter_active: self.criteria.is_some(),
            can_reset: self.criteria.is_some(),
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::clock::FixedClock;
    use crate::backend::storage::memory::InMemoryStudentStore;
    use chrono::NaiveDate;
    use shared::{FormMode, ToggleAction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_test() -> RosterScreenController<InMemoryStudentStore> {
        RosterScreenController::new(
            InMemoryStudentStore::with_demo_data(),
            Arc::new(FixedClock(date(2024, 6, 15))),
        )
    }

    fn row_names(view: &RosterView) -> Vec<&str> {
        view.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_sorted_first_page() {
        let screen = setup_test();
        let view = screen.view();

        assert_eq!(view.display_state, DisplayState::Rows);
        assert_eq!(view.total, 7);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_size, PageSize::Five);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.page_size_options, vec![PageSize::Five, PageSize::Ten, PageSize::TwentyFive]);
        assert!(!view.filter_active);
        assert!(!view.can_reset);
        assert_eq!(
            row_names(&view),
            vec!["Alexander Brown", "Anna Taylor", "David Wilson", "Helen Davis", "John Smith"]
        );
    }

    #[test]
    fn test_pages() {
        let mut screen = setup_test();

        screen.set_page(1);
        assert_eq!(row_names(&screen.view()), vec!["Mary Johnson", "Olivia Anderson"]);

        screen.set_page(2);
        let view = screen.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.display_state, DisplayState::Rows);
        assert_eq!(view.total, 7);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut screen = setup_test();
        screen.set_page(1);

        screen.set_page_size(10).unwrap();
        let view = screen.view();
        assert_eq!(view.page_index, 0);
        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_unsupported_page_size() {
        let mut screen = setup_test();
        screen.set_page(1);

        assert_eq!(screen.set_page_size(7), Err(RosterError::UnsupportedPageSize(7)));
        // Nothing changed
        assert_eq!(screen.pagination().page_index(), 1);
        assert_eq!(screen.pagination().page_size(), PageSize::Five);
    }

    #[test]
    fn test_search_resets_page_and_filters() {
        let mut screen = setup_test();
        screen.set_page(1);

        screen.search(FilterCriteria::by_idnp("2345678901234"));
        let view = screen.view();

        assert_eq!(view.page_index, 0);
        assert_eq!(row_names(&view), vec!["Mary Johnson"]);
        assert!(view.filter_active);
        assert!(view.can_reset);
        assert_eq!(view.display_state, DisplayState::Rows);
    }

    #[test]
    fn test_search_with_no_matches_then_reset() {
        let mut screen = setup_test();

        screen.search(FilterCriteria::by_name("zzz"));
        assert!(screen.is_empty_result());
        assert_eq!(screen.display_state(), DisplayState::NoResults);
        assert_eq!(screen.view().display_state, DisplayState::NoResults);

        screen.reset_filters();
        assert!(!screen.is_empty_result());
        let view = screen.view();
        assert_eq!(view.display_state, DisplayState::Rows);
        assert_eq!(view.total, 7);
        assert!(screen.criteria().is_none());
    }

    #[test]
    fn test_empty_search_is_a_reset() {
        let mut screen = setup_test();
        screen.search(FilterCriteria::by_name("zzz"));
        screen.set_page(3);

        screen.search(FilterCriteria::default());
        assert!(screen.criteria().is_none());
        assert!(!screen.is_empty_result());
        assert_eq!(screen.view().page_index, 0);
        assert_eq!(screen.view().total, 7);
    }

    #[test]
    fn test_store_empty_state() {
        let screen = RosterScreenController::new(
            InMemoryStudentStore::new(),
            Arc::new(FixedClock(date(2024, 6, 15))),
        );
        let view = screen.view();
        assert_eq!(view.display_state, DisplayState::StoreEmpty);
        assert_eq!(view.page_count, 0);
    }

    #[test]
    fn test_search_on_empty_store_reports_store_empty() {
        let mut screen = RosterScreenController::new(
            InMemoryStudentStore::new(),
            Arc::new(FixedClock(date(2024, 6, 15))),
        );
        screen.search(FilterCriteria::by_name("anna"));

        assert_eq!(screen.display_state(), DisplayState::StoreEmpty);
        assert!(!screen.is_empty_result());
        assert_eq!(screen.view().display_state, DisplayState::StoreEmpty);
    }

    #[test]
    fn test_toggle_exclusion_keeps_row_visible() {
        let mut screen = setup_test();
        screen.search(FilterCriteria::by_name("mary"));

        let student = screen.toggle_exclusion(StudentId(2)).unwrap();
        assert!(student.excluded);

        let view = screen.view();
        assert_eq!(view.rows.len(), 1);
        assert!(view.rows[0].excluded);
        assert!(!view.rows[0].can_edit);
        assert_eq!(view.rows[0].toggle_action, ToggleAction::Restore);

        screen.toggle_exclusion(StudentId(2));
        assert!(!screen.view().rows[0].excluded);
    }

    #[test]
    fn test_toggle_unknown_student_is_ignored() {
        let mut screen = setup_test();
        let before = screen.store().list();

        assert!(screen.toggle_exclusion(StudentId(99)).is_none());
        assert_eq!(screen.store().list(), before);
    }

    #[test]
    fn test_cannot_edit_excluded_student() {
        let mut screen = setup_test();
        screen.toggle_exclusion(StudentId(4));

        assert_eq!(
            screen.open_edit_form(StudentId(4)),
            Err(RosterError::EditExcluded(StudentId(4)))
        );
        assert!(!screen.form().is_open());

        assert_eq!(
            screen.open_edit_form(StudentId(99)),
            Err(RosterError::NotFound(StudentId(99)))
        );
    }

    #[test]
    fn test_add_student_shows_in_sorted_view() {
        let mut screen = setup_test();
        screen.open_create_form();
        screen.form_mut().set_name("Aaron Young").unwrap();
        screen.form_mut().set_birth_date(Some(date(2005, 3, 9))).unwrap();
        screen.form_mut().set_idnp("9990001112223").unwrap();

        let saved = screen.submit_form().unwrap().unwrap();
        assert_eq!(saved.id, StudentId(8));
        assert!(!screen.form().is_open());

        let view = screen.view();
        assert_eq!(view.total, 8);
        assert_eq!(view.rows[0].name, "Aaron Young");
    }

    #[test]
    fn test_edit_student_under_active_filter() {
        let mut screen = setup_test();
        screen.search(FilterCriteria::by_name("helen"));

        screen.open_edit_form(StudentId(4)).unwrap();
        assert_eq!(screen.form().mode(), Some(FormMode::Edit(StudentId(4))));
        screen.form_mut().set_name("Helena Davis").unwrap();
        screen.submit_form().unwrap();

        // Still matches the active filter, shown with the new name
        assert_eq!(row_names(&screen.view()), vec!["Helena Davis"]);
        assert_eq!(screen.store().len(), 7);
    }

    #[test]
    fn test_submit_without_changes_is_rejected() {
        let mut screen = setup_test();
        screen.open_edit_form(StudentId(1)).unwrap();

        assert_eq!(
            screen.submit_form(),
            Err(RosterError::NotSubmittable { valid: true, dirty: false })
        );
        assert!(screen.form().is_open());

        screen.cancel_form();
        assert!(!screen.form().is_open());
    }

    #[test]
    fn test_locale_changes_date_display() {
        let mut screen = setup_test();
        screen.search(FilterCriteria::by_name("john smith"));
        assert_eq!(screen.view().rows[0].formatted_birth_date, "5/15/1995");

        screen.set_locale(Locale::Ru);
        let view = screen.view();
        assert_eq!(view.locale, Locale::Ru);
        assert_eq!(view.rows[0].formatted_birth_date, "15.05.1995");
    }
}
