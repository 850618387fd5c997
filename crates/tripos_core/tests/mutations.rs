use chrono::{NaiveDate, TimeZone, Utc};
use tripos_core::{
    add_checklist_item, add_day_from, add_expense_at, add_itinerary_item, delete_checklist_item,
    delete_day, delete_expense, delete_itinerary_item, toggle_checklist_item, unique_sorted_dates,
    update_date, update_day_label, update_itinerary_item, ChecklistCategory, Document,
    ExpenseCategory, ItineraryField, ItineraryKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_itinerary_item_appends_placeholder_event() {
    let doc = Document::seed();
    let next = add_itinerary_item(&doc, "2023-11-16");

    assert_eq!(next.itinerary.len(), doc.itinerary.len() + 1);
    let added = next.itinerary.last().unwrap();
    assert_eq!(added.date, "2023-11-16");
    assert_eq!(added.time, "12:00");
    assert_eq!(added.title, "New Activity");
    assert_eq!(added.location, "TBD");
    assert_eq!(added.kind, ItineraryKind::Other);
    assert!(doc.itinerary_item(&added.id).is_none());
}

#[test]
fn add_then_delete_by_new_id_restores_itinerary() {
    let doc = Document::seed();
    let added = add_itinerary_item(&doc, "2023-11-15");
    let new_id = added.itinerary.last().unwrap().id.clone();

    let restored = delete_itinerary_item(&added, &new_id);
    assert_eq!(restored.itinerary, doc.itinerary);
}

#[test]
fn mutations_leave_input_document_untouched() {
    let doc = Document::seed();
    let snapshot = doc.clone();

    let _ = delete_day(&doc, "2023-11-15");
    let _ = update_date(&doc, "2023-11-16", "2023-11-20");
    let _ = toggle_checklist_item(&doc, "1");
    let _ = add_expense_at(&doc, 100.0, 21.0, Utc::now());

    assert_eq!(doc, snapshot);
}

#[test]
fn add_day_advances_past_latest_date() {
    let doc = Document::seed();
    let next = add_day_from(&doc, date(2030, 1, 1));

    let added = next.itinerary.last().unwrap();
    assert_eq!(added.date, "2023-11-17");
    assert_eq!(added.time, "09:00");
    assert_eq!(added.title, "Day Start");
    assert_eq!(added.location, "");
    assert_eq!(added.kind, ItineraryKind::Other);
}

#[test]
fn add_day_rolls_over_month_and_year() {
    let end_of_year = add_itinerary_item(&Document::default(), "2023-12-31");
    let next = add_day_from(&end_of_year, date(2020, 6, 1));
    assert_eq!(next.itinerary.last().unwrap().date, "2024-01-01");

    let leap = add_itinerary_item(&Document::default(), "2024-02-28");
    let next = add_day_from(&leap, date(2020, 6, 1));
    assert_eq!(next.itinerary.last().unwrap().date, "2024-02-29");
}

#[test]
fn add_day_on_empty_itinerary_starts_after_today() {
    let next = add_day_from(&Document::default(), date(2024, 7, 9));
    assert_eq!(unique_sorted_dates(&next.itinerary), vec!["2024-07-10"]);
}

#[test]
fn delete_day_removes_items_and_label() {
    let doc = Document::seed();
    let next = delete_day(&doc, "2023-11-15");

    assert!(next.itinerary.iter().all(|item| item.date != "2023-11-15"));
    assert_eq!(next.itinerary.len(), 1);
    assert!(!next.day_labels.contains_key("2023-11-15"));
    assert!(next.day_labels.contains_key("2023-11-16"));
}

#[test]
fn delete_day_without_items_or_label_is_harmless() {
    let doc = Document::seed();
    let next = delete_day(&doc, "2001-01-01");
    assert_eq!(next, doc);
}

#[test]
fn deleting_last_item_of_day_keeps_label() {
    let doc = Document::seed();
    let next = delete_itinerary_item(&doc, "4");

    assert!(!unique_sorted_dates(&next.itinerary).contains(&"2023-11-16".to_string()));
    assert_eq!(next.day_labels["2023-11-16"], "Disney Land");
}

#[test]
fn update_day_label_upserts_and_keeps_empty_labels() {
    let doc = Document::seed();

    let renamed = update_day_label(&doc, "2023-11-15", "Landing");
    assert_eq!(renamed.day_labels["2023-11-15"], "Landing");

    let added = update_day_label(&doc, "2023-11-20", "");
    assert_eq!(added.day_labels.get("2023-11-20").map(String::as_str), Some(""));
}

#[test]
fn update_date_moves_items_and_label() {
    let doc = Document::seed();
    let next = update_date(&doc, "2023-11-16", "2023-11-18");

    let dates = unique_sorted_dates(&next.itinerary);
    assert_eq!(dates, vec!["2023-11-15", "2023-11-18"]);
    assert!(!next.day_labels.contains_key("2023-11-16"));
    assert_eq!(next.day_labels["2023-11-18"], "Disney Land");
}

#[test]
fn update_date_merges_into_existing_day_and_overwrites_label() {
    let doc = Document::seed();
    let next = update_date(&doc, "2023-11-16", "2023-11-15");

    assert_eq!(unique_sorted_dates(&next.itinerary), vec!["2023-11-15"]);
    assert_eq!(next.itinerary.len(), 4);
    assert_eq!(next.day_labels.len(), 1);
    assert_eq!(next.day_labels["2023-11-15"], "Disney Land");
}

#[test]
fn update_itinerary_item_changes_one_field() {
    let doc = Document::seed();
    let next = update_itinerary_item(&doc, "2", ItineraryField::Title, "Drop bags");
    let next = update_itinerary_item(&next, "2", ItineraryField::Link, "https://maps.example/h");

    let item = next.itinerary_item("2").unwrap();
    assert_eq!(item.title, "Drop bags");
    assert_eq!(item.link.as_deref(), Some("https://maps.example/h"));
    assert_eq!(item.location, "Shinjuku Hotel");
}

#[test]
fn moving_an_event_by_date_field_updates_day_list_but_not_labels() {
    let doc = Document::seed();
    let next = update_itinerary_item(&doc, "4", ItineraryField::Date, "2023-11-18");

    assert_eq!(next.itinerary_item("4").unwrap().date, "2023-11-18");
    assert_eq!(
        unique_sorted_dates(&next.itinerary),
        vec!["2023-11-15", "2023-11-18"]
    );
    assert_eq!(next.day_labels, doc.day_labels);
    assert!(!next.day_labels.contains_key("2023-11-18"));

    let partial = update_itinerary_item(&doc, "3", ItineraryField::Date, "2023-11-16");
    assert_eq!(
        unique_sorted_dates(&partial.itinerary),
        vec!["2023-11-15", "2023-11-16"]
    );
    assert_eq!(partial.itinerary_item("3").unwrap().date, "2023-11-16");
    assert_eq!(partial.day_labels, doc.day_labels);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let doc = Document::seed();

    assert_eq!(
        update_itinerary_item(&doc, "nope", ItineraryField::Time, "01:00"),
        doc
    );
    assert_eq!(delete_itinerary_item(&doc, "nope"), doc);
    assert_eq!(delete_expense(&doc, "nope"), doc);
    assert_eq!(toggle_checklist_item(&doc, "nope"), doc);
    assert_eq!(delete_checklist_item(&doc, "nope"), doc);
}

#[test]
fn add_expense_prepends_quick_entry() {
    let doc = Document::seed();
    let now = Utc.with_ymd_and_hms(2023, 11, 16, 12, 0, 0).unwrap();
    let next = add_expense_at(&doc, 2000.0, 420.0, now);

    assert_eq!(next.expenses.len(), 2);
    let newest = &next.expenses[0];
    assert_eq!(newest.amount_jpy, 2000.0);
    assert_eq!(newest.amount_twd, 420.0);
    assert_eq!(newest.category, ExpenseCategory::Shopping);
    assert_eq!(newest.note, "快速記帳");
    assert_eq!(newest.date, now);
    assert_eq!(next.expenses[1], doc.expenses[0]);

    let removed = delete_expense(&next, &newest.id);
    assert_eq!(removed.expenses, doc.expenses);
}

#[test]
fn toggle_checklist_item_twice_is_identity() {
    let doc = Document::seed();
    let once = toggle_checklist_item(&doc, "1");
    assert!(once.checklist_item("1").unwrap().checked);

    let twice = toggle_checklist_item(&once, "1");
    assert_eq!(twice, doc);
}

#[test]
fn checklist_items_can_be_added_and_removed() {
    let doc = Document::seed();
    let next = add_checklist_item(&doc, "Charger", ChecklistCategory::Luggage);

    let added = next.checklist.last().unwrap();
    assert_eq!(added.text, "Charger");
    assert!(!added.checked);
    assert_eq!(added.category, ChecklistCategory::Luggage);

    let removed = delete_checklist_item(&next, &added.id);
    assert_eq!(removed, doc);
}
