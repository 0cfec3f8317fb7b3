//! UI label lookup.
//!
//! Only labels are localized; student data is shown as entered. A UI can plug
//! in its own catalogue through `LabelSource`; `StaticLabels` ships the
//! English and Russian texts of the roster screen.

use shared::Locale;

pub trait LabelSource {
    /// Display string for `key` in `locale`.
    /// Unknown keys fall back to English, then to the key itself.
    fn label<'a>(&self, locale: Locale, key: &'a str) -> &'a str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLabels;

impl StaticLabels {
    fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
        let text = match (locale, key) {
            (Locale::En, "appTitle") => "Student List",
            (Locale::En, "addStudent") => "Add Student",
            (Locale::En, "studentListEmpty") => "The student list is empty",
            (Locale::En, "searchByName") => "Search by name",
            (Locale::En, "searchByIdnp") => "Search by IDNP",
            (Locale::En, "startDate") => "Start date",
            (Locale::En, "endDate") => "End date",
            (Locale::En, "search") => "Search",
            (Locale::En, "reset") => "Reset",
            (Locale::En, "noDataFound") => "No data found",
            (Locale::En, "studentName") => "Name",
            (Locale::En, "birthDate") => "Birth date",
            (Locale::En, "idnp") => "IDNP",
            (Locale::En, "actions") => "Actions",
            (Locale::En, "rowsPerPage") => "Rows per page",
            (Locale::En, "update") => "Update",
            (Locale::En, "add") => "Add",

            (Locale::Ru, "appTitle") => "Список студентов",
            (Locale::Ru, "addStudent") => "Добавить студента",
            (Locale::Ru, "studentListEmpty") => "Список студентов пуст",
            (Locale::Ru, "searchByName") => "Поиск по имени",
            (Locale::Ru, "searchByIdnp") => "Поиск по IDNP",
            (Locale::Ru, "startDate") => "Начальная дата",
            (Locale::Ru, "endDate") => "Конечная дата",
            (Locale::Ru, "search") => "Поиск",
            (Locale::Ru, "reset") => "Сбросить",
            (Locale::Ru, "noDataFound") => "Данные не найдены",
            (Locale::Ru, "studentName") => "Имя",
            (Locale::Ru, "birthDate") => "Дата рождения",
            (Locale::Ru, "idnp") => "IDNP",
            (Locale::Ru, "actions") => "Действия",
            (Locale::Ru, "rowsPerPage") => "Строк на странице",
            (Locale::Ru, "update") => "Обновить",
            (Locale::Ru, "add") => "Добавить",

            _ => return None,
        };
        Some(text)
    }
}

impl LabelSource for StaticLabels {
    fn label<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
        match Self::lookup(locale, key).or_else(|| Self::lookup(Locale::En, key)) {
            Some(text) => text,
            None => key,
        }
    }
}
