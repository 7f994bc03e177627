use super::*;

fn stored_book() -> Book {
    Book {
        id: Some("b1".to_owned()),
        name: "Kafka on the Shore".to_owned(),
        title: "Kafka on the Shore".to_owned(),
        author: "Haruki Murakami".to_owned(),
        price: "599".to_owned(),
        date: "2002-09-12".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_state_defaults_to_empty_create() {
    let s = FormState::default();
    assert_eq!(s.mode, FormMode::Create);
    assert_eq!(s.draft, BookDraft::default());
    assert_eq!(s.mode.editing_id(), None);
}

#[test]
fn mode_copy_tracks_state() {
    assert_eq!(FormMode::Create.heading(), "Add Book Details");
    assert_eq!(FormMode::Create.submit_label(), "Add Book");
    let edit = FormMode::Edit("b1".to_owned());
    assert_eq!(edit.heading(), "Update Book Details");
    assert_eq!(edit.submit_label(), "Update Book");
    assert_eq!(edit.editing_id(), Some("b1"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_edit_copies_fields_and_enters_edit() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    assert_eq!(s.mode, FormMode::Edit("b1".to_owned()));
    assert_eq!(s.draft.name, "Kafka on the Shore");
    assert_eq!(s.draft.author, "Haruki Murakami");
    assert_eq!(s.draft.price, "599");
    assert_eq!(s.draft.date, "2002-09-12");
}

#[test]
fn begin_edit_replaces_a_previous_edit() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    let other = Book { id: Some("b9".to_owned()), name: "Other".to_owned(), ..Book::default() };
    s.begin_edit(&other);
    assert_eq!(s.mode, FormMode::Edit("b9".to_owned()));
    assert_eq!(s.draft.name, "Other");
    assert_eq!(s.draft.author, "");
}

#[test]
fn begin_edit_without_id_stays_in_create() {
    let mut s = FormState::default();
    let unsaved = Book { id: None, ..stored_book() };
    s.begin_edit(&unsaved);
    assert_eq!(s.mode, FormMode::Create);
    assert_eq!(s.draft.title, "Kafka on the Shore");
}

#[test]
fn set_field_keeps_mode() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    s.set_field(BookField::Price, "650".to_owned());
    assert_eq!(s.draft.price, "650");
    assert_eq!(s.mode, FormMode::Edit("b1".to_owned()));
}

#[test]
fn reset_returns_to_empty_create() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    s.reset();
    assert_eq!(s, FormState::default());
}

#[test]
fn forget_matching_id_resets() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    s.forget("b1");
    assert_eq!(s, FormState::default());
}

#[test]
fn forget_other_id_keeps_draft() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    s.forget("b2");
    assert_eq!(s.mode, FormMode::Edit("b1".to_owned()));
    assert_eq!(s.draft.name, "Kafka on the Shore");
}

#[test]
fn forget_in_create_keeps_draft() {
    let mut s = FormState::default();
    s.set_field(BookField::Name, "half typed".to_owned());
    s.forget("b1");
    assert_eq!(s.draft.name, "half typed");
}

// =============================================================
// Submit requests
// =============================================================

#[test]
fn submit_request_in_create_is_insert() {
    let mut s = FormState::default();
    s.set_field(BookField::Name, "New".to_owned());
    match s.submit_request() {
        SubmitRequest::Create(draft) => assert_eq!(draft.name, "New"),
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn submit_request_in_edit_is_update_keyed_by_id() {
    let mut s = FormState::default();
    s.begin_edit(&stored_book());
    s.set_field(BookField::Title, "Edited".to_owned());
    assert_eq!(
        s.submit_request(),
        SubmitRequest::Update {
            id: "b1".to_owned(),
            draft: BookDraft {
                name: "Kafka on the Shore".to_owned(),
                title: "Edited".to_owned(),
                author: "Haruki Murakami".to_owned(),
                price: "599".to_owned(),
                date: "2002-09-12".to_owned(),
            },
        }
    );
}

#[test]
fn submit_request_sends_empty_draft_unvalidated() {
    let s = FormState::default();
    assert_eq!(s.submit_request(), SubmitRequest::Create(BookDraft::default()));
}
